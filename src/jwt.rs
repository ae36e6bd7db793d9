//! Decoding of the JSON web tokens Steam issues as access and refresh tokens.
//!
//! Signatures are not verified. The claims are only read to learn the SteamID and expiry.

use crate::serialize;
use crate::time::{timestamp_to_server_time, ServerTime};
use crate::error::Error;
use base64::Engine;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

/// Claims from a Steam JWT.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct JwtClaims {
    /// The issuer, e.g. "steam" or "r:..." for tokens derived from a refresh token.
    #[serde(default)]
    pub iss: String,
    /// The SteamID of the account.
    #[serde(with = "serialize::string")]
    pub sub: u64,
    /// Audiences, e.g. "web", "web:community", "renew", "derive".
    #[serde(default)]
    pub aud: Vec<String>,
    /// Expiry as a Unix timestamp.
    pub exp: u64,
    /// Not valid before as a Unix timestamp.
    #[serde(default)]
    pub nbf: u64,
    /// Issued at as a Unix timestamp.
    #[serde(default)]
    pub iat: u64,
    /// The token ID.
    #[serde(default)]
    pub jti: String,
}

impl JwtClaims {
    /// Whether the token has expired at the Unix timestamp `now`.
    pub fn is_expired(&self, now: u64) -> bool {
        self.exp <= now
    }

    /// The time the token expires.
    pub fn expires_at(&self) -> ServerTime {
        timestamp_to_server_time(self.exp as i64)
    }

    /// Whether the token can be used to renew access tokens.
    pub fn is_renewable(&self) -> bool {
        self.aud.iter().any(|aud| aud == "renew")
    }
}

/// Decodes the claims of a JWT without verifying it.
pub fn decode_jwt(token: &str) -> Result<JwtClaims, Error> {
    let mut parts = token.split('.');
    let payload = match (parts.next(), parts.next(), parts.next()) {
        (Some(_header), Some(payload), Some(_signature)) => payload,
        _ => return Err(Error::UnexpectedResponse("JWT does not have three parts".into())),
    };
    // Some encoders keep the padding.
    let payload = BASE64_URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))
        .map_err(|error| Error::UnexpectedResponse(format!("JWT payload is not base64: {error}")))?;
    let claims: JwtClaims = serde_json::from_slice(&payload)?;

    Ok(claims)
}
