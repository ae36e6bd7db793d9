use std::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Result codes returned in the `success` field of many Steam responses.
/// 
/// Some endpoints send `true`/`false` instead of a code. `true` maps to [`EResult::OK`] and
/// `false` to [`EResult::Fail`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum EResult {
    /// Invalid.
    Invalid,
    /// Success.
    OK,
    /// Generic failure.
    Fail,
    /// No connection.
    NoConnection,
    /// Password or ticket is invalid.
    InvalidPassword,
    /// Logged in elsewhere.
    LoggedInElsewhere,
    /// Invalid protocol version.
    InvalidProtocolVer,
    /// A parameter is incorrect.
    InvalidParam,
    /// File was not found.
    FileNotFound,
    /// Called method is busy.
    Busy,
    /// Called object was in an invalid state.
    InvalidState,
    /// The name is invalid.
    InvalidName,
    /// The email is invalid.
    InvalidEmail,
    /// The name is not unique.
    DuplicateName,
    /// Access is denied.
    AccessDenied,
    /// Operation timed out.
    Timeout,
    /// The user is VAC2 banned.
    Banned,
    /// Account not found.
    AccountNotFound,
    /// The SteamID is invalid.
    InvalidSteamID,
    /// The requested service is currently unavailable.
    ServiceUnavailable,
    /// The user is not logged on.
    NotLoggedOn,
    /// Request is pending.
    Pending,
    /// Encryption or decryption failed.
    EncryptionFailure,
    /// Insufficient privilege.
    InsufficientPrivilege,
    /// Too much of a good thing.
    LimitExceeded,
    /// Access has been revoked.
    Revoked,
    /// License or guest pass has expired.
    Expired,
    /// Guest pass has already been redeemed.
    AlreadyRedeemed,
    /// The request is a duplicate.
    DuplicateRequest,
    /// Account login denied due to 2nd factor authentication failure.
    AccountLogonDenied,
    /// The login auth code is invalid.
    InvalidLoginAuthCode,
    /// Too many requests in a short time.
    RateLimitExceeded,
    /// Login requires a two-factor code.
    AccountLoginDeniedNeedTwoFactor,
    /// Login attempts are being throttled.
    AccountLoginDeniedThrottle,
    /// The two-factor code is wrong.
    TwoFactorCodeMismatch,
    /// The clock is out of sync with Steam.
    TimeNotSynced,
    /// A captcha is required.
    NeedCaptcha,
    /// A code not known to this crate.
    Unknown(i32),
}

impl EResult {
    /// Whether this result is [`EResult::OK`].
    pub fn is_ok(&self) -> bool {
        *self == Self::OK
    }
    
    /// The numeric code.
    pub fn code(&self) -> i32 {
        match self {
            Self::Invalid => 0,
            Self::OK => 1,
            Self::Fail => 2,
            Self::NoConnection => 3,
            Self::InvalidPassword => 5,
            Self::LoggedInElsewhere => 6,
            Self::InvalidProtocolVer => 7,
            Self::InvalidParam => 8,
            Self::FileNotFound => 9,
            Self::Busy => 10,
            Self::InvalidState => 11,
            Self::InvalidName => 12,
            Self::InvalidEmail => 13,
            Self::DuplicateName => 14,
            Self::AccessDenied => 15,
            Self::Timeout => 16,
            Self::Banned => 17,
            Self::AccountNotFound => 18,
            Self::InvalidSteamID => 19,
            Self::ServiceUnavailable => 20,
            Self::NotLoggedOn => 21,
            Self::Pending => 22,
            Self::EncryptionFailure => 23,
            Self::InsufficientPrivilege => 24,
            Self::LimitExceeded => 25,
            Self::Revoked => 26,
            Self::Expired => 27,
            Self::AlreadyRedeemed => 28,
            Self::DuplicateRequest => 29,
            Self::AccountLogonDenied => 63,
            Self::InvalidLoginAuthCode => 65,
            Self::RateLimitExceeded => 84,
            Self::AccountLoginDeniedNeedTwoFactor => 85,
            Self::AccountLoginDeniedThrottle => 87,
            Self::TwoFactorCodeMismatch => 88,
            Self::TimeNotSynced => 93,
            Self::NeedCaptcha => 101,
            Self::Unknown(code) => *code,
        }
    }
}

impl From<i32> for EResult {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Invalid,
            1 => Self::OK,
            2 => Self::Fail,
            3 => Self::NoConnection,
            5 => Self::InvalidPassword,
            6 => Self::LoggedInElsewhere,
            7 => Self::InvalidProtocolVer,
            8 => Self::InvalidParam,
            9 => Self::FileNotFound,
            10 => Self::Busy,
            11 => Self::InvalidState,
            12 => Self::InvalidName,
            13 => Self::InvalidEmail,
            14 => Self::DuplicateName,
            15 => Self::AccessDenied,
            16 => Self::Timeout,
            17 => Self::Banned,
            18 => Self::AccountNotFound,
            19 => Self::InvalidSteamID,
            20 => Self::ServiceUnavailable,
            21 => Self::NotLoggedOn,
            22 => Self::Pending,
            23 => Self::EncryptionFailure,
            24 => Self::InsufficientPrivilege,
            25 => Self::LimitExceeded,
            26 => Self::Revoked,
            27 => Self::Expired,
            28 => Self::AlreadyRedeemed,
            29 => Self::DuplicateRequest,
            63 => Self::AccountLogonDenied,
            65 => Self::InvalidLoginAuthCode,
            84 => Self::RateLimitExceeded,
            85 => Self::AccountLoginDeniedNeedTwoFactor,
            87 => Self::AccountLoginDeniedThrottle,
            88 => Self::TwoFactorCodeMismatch,
            93 => Self::TimeNotSynced,
            101 => Self::NeedCaptcha,
            other => Self::Unknown(other),
        }
    }
}

impl From<bool> for EResult {
    fn from(success: bool) -> Self {
        if success {
            Self::OK
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for EResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?} ({})", self.code())
    }
}

impl Serialize for EResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i32(self.code())
    }
}

impl<'de> Deserialize<'de> for EResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum CodeOrBool {
            Code(i32),
            Bool(bool),
        }
        
        Ok(match CodeOrBool::deserialize(deserializer)? {
            CodeOrBool::Code(code) => Self::from(code),
            CodeOrBool::Bool(success) => Self::from(success),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[derive(Deserialize)]
    struct Response {
        success: EResult,
    }
    
    #[test]
    fn deserializes_boolean_success() {
        let response: Response = serde_json::from_str(r#"{"success":true}"#).unwrap();
        
        assert_eq!(response.success, EResult::OK);
        
        let response: Response = serde_json::from_str(r#"{"success":false}"#).unwrap();
        
        assert_eq!(response.success, EResult::Fail);
    }
    
    #[test]
    fn deserializes_numeric_success() {
        let response: Response = serde_json::from_str(r#"{"success":88}"#).unwrap();
        
        assert_eq!(response.success, EResult::TwoFactorCodeMismatch);
        
        let response: Response = serde_json::from_str(r#"{"success":1000}"#).unwrap();
        
        assert_eq!(response.success, EResult::Unknown(1000));
        assert_eq!(response.success.code(), 1000);
    }
}
