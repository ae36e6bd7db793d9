//! Response bodies from the authentication endpoints.

use crate::enums::GuardType;
use crate::serialize;
use serde::Deserialize;

/// Steam Web API methods wrap their results in `{"response": {...}}`. A failed call responds
/// with an empty object and the result in the `x-eresult` header.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub response: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RsaKeyResponse {
    pub publickey_mod: Option<String>,
    pub publickey_exp: Option<String>,
    #[serde(default, with = "serialize::option_number_or_string")]
    pub timestamp: Option<u64>,
}

/// A way of confirming the auth session that the account allows.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AllowedConfirmation {
    /// The type of confirmation.
    pub confirmation_type: GuardType,
    /// A message associated with the confirmation, e.g. the domain of the email address.
    #[serde(default)]
    pub associated_message: Option<String>,
}

/// A started auth session.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthSession {
    /// The client ID of the session.
    #[serde(with = "serialize::number_or_string")]
    pub client_id: u64,
    /// The request ID of the session. Base64 encoded.
    pub request_id: String,
    /// The number of seconds to wait between polls.
    #[serde(default = "default_interval")]
    pub interval: f32,
    /// The ways this session can be confirmed.
    #[serde(default)]
    pub allowed_confirmations: Vec<AllowedConfirmation>,
    /// The SteamID of the account.
    #[serde(with = "serialize::number_or_string")]
    pub steamid: u64,
}

impl AuthSession {
    /// Whether the session is allowed to be confirmed with `guard_type`.
    pub fn allows(&self, guard_type: GuardType) -> bool {
        self.allowed_confirmations
            .iter()
            .any(|confirmation| confirmation.confirmation_type == guard_type)
    }

    /// Whether the account has no Steam Guard.
    pub fn requires_no_guard(&self) -> bool {
        !self.allowed_confirmations.is_empty() && self.allowed_confirmations
            .iter()
            .all(|confirmation| confirmation.confirmation_type == GuardType::None)
    }
}

fn default_interval() -> f32 {
    5.0
}

#[derive(Debug, Deserialize)]
pub(crate) struct PollStatusResponse {
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub had_remote_interaction: bool,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub new_client_id: Option<String>,
}

/// Where to send tokens to set cookies on a Steam domain.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct TransferInfo {
    /// The URL to post to.
    pub url: String,
    /// The form parameters. Contains the nonce and auth.
    #[serde(default)]
    pub params: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FinalizeLoginResponse {
    #[serde(rename = "steamID", default, with = "serialize::option_number_or_string")]
    pub steamid: Option<u64>,
    #[serde(default)]
    pub transfer_info: Option<Vec<TransferInfo>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransferResponse {
    #[serde(default)]
    pub result: Option<i32>,
}
