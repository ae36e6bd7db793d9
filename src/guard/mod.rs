//! Steam Guard codes and mobile confirmation signing.
//!
//! Both are derived from secrets shared with the Steam mobile authenticator. The shared secret
//! produces the 5-character login codes and the identity secret signs requests to the mobile
//! confirmation endpoints.

mod throttle;

pub use throttle::KeyThrottle;
pub use another_steam_totp::get_device_id;

use crate::enums::Domain;
use crate::error::{Error, ParameterError};
use crate::helpers::parses_response;
use crate::serialize;
use crate::time::get_system_time;
use crate::types::HttpClient;
use std::fmt;
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// The tag a confirmation key is generated for. Steam checks that the key matches the action
/// being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmationTag {
    /// Listing confirmations.
    List,
    /// The generic confirmation tag.
    Conf,
    /// Fetching details of a confirmation.
    Details(u64),
    /// Allowing a confirmation.
    Allow,
    /// Cancelling a confirmation.
    Cancel,
}

impl fmt::Display for ConfirmationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "getlist"),
            Self::Conf => write!(f, "conf"),
            Self::Details(id) => write!(f, "details{id}"),
            Self::Allow => write!(f, "allow"),
            Self::Cancel => write!(f, "cancel"),
        }
    }
}

fn hmac_sha1(
    secret: &str,
    data: &[u8],
) -> Result<Vec<u8>, ParameterError> {
    let secret = BASE64_STANDARD.decode(secret)?;
    let mut mac = HmacSha1::new_from_slice(&secret)
        .map_err(|_error| ParameterError::InvalidSecretLength)?;

    mac.update(data);

    Ok(mac.finalize().into_bytes().to_vec())
}

/// Generates the 5-character Steam Guard code for the current time from a base64-encoded shared
/// secret. `time_offset` is how many seconds the local clock is behind Steam's.
pub fn generate_auth_code(
    shared_secret: &str,
    time_offset: i64,
) -> Result<String, ParameterError> {
    another_steam_totp::generate_auth_code(shared_secret, Some(time_offset))
        .map_err(|error| ParameterError::AuthCode(error.to_string()))
}

/// Generates the base64-encoded confirmation key for `tag` at `timestamp` from a base64-encoded
/// identity secret.
pub fn generate_confirmation_key(
    identity_secret: &str,
    tag: ConfirmationTag,
    timestamp: u64,
) -> Result<String, ParameterError> {
    let tag = tag.to_string();
    let mut data = Vec::with_capacity(8 + tag.len());

    data.extend_from_slice(&timestamp.to_be_bytes());
    data.extend_from_slice(tag.as_bytes());

    let hash = hmac_sha1(identity_secret, &data)?;

    Ok(BASE64_STANDARD.encode(hash))
}

/// The current time on Steam's servers given how many seconds the local clock is behind.
pub fn get_steam_time(time_offset: i64) -> u64 {
    (get_system_time() as i64 + time_offset).max(0) as u64
}

/// Asks Steam for its current time and returns how many seconds the local clock is behind.
pub async fn get_steam_time_offset(
    client: &HttpClient,
) -> Result<i64, Error> {
    #[derive(Deserialize)]
    struct QueryTime {
        #[serde(with = "serialize::string")]
        server_time: u64,
    }

    #[derive(Deserialize)]
    struct QueryTimeResponse {
        response: QueryTime,
    }

    let uri = Domain::Api.get_url("/ITwoFactorService/QueryTime/v1/");
    let response = client.post(&uri)
        .header(reqwest::header::CONTENT_LENGTH, "0")
        .send()
        .await?;
    let body: QueryTimeResponse = parses_response(response).await?;
    let offset = body.response.server_time as i64 - get_system_time() as i64;

    log::debug!("Steam time offset is {offset} seconds");

    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHARED_SECRET: &str = "cnOgv/KdpLoP6Nbh0GMkXkPXALQ=";
    const IDENTITY_SECRET: &str = "itqR9l2GgVpG7cZgV5nlGNeuINE=";

    #[test]
    fn generates_auth_code() {
        // 1469184185 is a few seconds into its 30 second window
        let time_offset = 1469184185 - get_system_time() as i64;
        let code = generate_auth_code(SHARED_SECRET, time_offset).unwrap();

        assert_eq!(code, "87JP8");
    }

    #[test]
    fn rejects_invalid_shared_secret() {
        assert!(matches!(
            generate_auth_code("not base64!", 0),
            Err(ParameterError::AuthCode(_)),
        ));
    }

    #[test]
    fn generates_confirmation_key() {
        let key = generate_confirmation_key(IDENTITY_SECRET, ConfirmationTag::Conf, 1470838334).unwrap();

        assert_eq!(key, "fmPMJsNEYOJtIISajJ8BRx1Qldc=");
    }

    #[test]
    fn confirmation_key_includes_details_id() {
        let key = generate_confirmation_key(IDENTITY_SECRET, ConfirmationTag::Details(42), 1470838334).unwrap();

        assert_eq!(key, "gVsYQ5BnOvMV3e8XrXykVZbcwJ8=");
    }

    #[test]
    fn confirmation_key_depends_on_tag() {
        let conf = generate_confirmation_key(IDENTITY_SECRET, ConfirmationTag::Conf, 1470838334).unwrap();
        let allow = generate_confirmation_key(IDENTITY_SECRET, ConfirmationTag::Allow, 1470838334).unwrap();

        assert_ne!(conf, allow);
    }

    #[test]
    fn generates_device_id() {
        assert_eq!(get_device_id(12341234123412345), "android:677cf5aa-3300-7807-d1e2-c408142742e2");
    }

    #[test]
    fn rejects_invalid_identity_secret() {
        assert!(matches!(
            generate_confirmation_key("not base64!", ConfirmationTag::Conf, 0),
            Err(ParameterError::InvalidSecret(_)),
        ));
    }

    #[test]
    fn formats_tags() {
        assert_eq!(ConfirmationTag::List.to_string(), "getlist");
        assert_eq!(ConfirmationTag::Details(42).to_string(), "details42");
    }
}
