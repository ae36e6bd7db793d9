use serde::{Deserialize, Serialize};

/// A way Steam lets an auth session be confirmed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(from = "i32", into = "i32")]
pub enum GuardType {
    /// Unknown.
    #[default]
    Unknown,
    /// No guard is required.
    None,
    /// A code sent by email.
    EmailCode,
    /// A code from the mobile authenticator. Generated from the shared secret.
    DeviceCode,
    /// Approval in the mobile app.
    DeviceConfirmation,
    /// Approval by clicking a link sent by email.
    EmailConfirmation,
    /// A remembered machine token.
    MachineToken,
    /// A value not known to this crate.
    Other(i32),
}

impl GuardType {
    /// The value sent as `code_type` when submitting a code.
    pub fn code(&self) -> i32 {
        i32::from(*self)
    }
}

impl From<i32> for GuardType {
    fn from(value: i32) -> Self {
        match value {
            0 => Self::Unknown,
            1 => Self::None,
            2 => Self::EmailCode,
            3 => Self::DeviceCode,
            4 => Self::DeviceConfirmation,
            5 => Self::EmailConfirmation,
            6 => Self::MachineToken,
            other => Self::Other(other),
        }
    }
}

impl From<GuardType> for i32 {
    fn from(value: GuardType) -> Self {
        match value {
            GuardType::Unknown => 0,
            GuardType::None => 1,
            GuardType::EmailCode => 2,
            GuardType::DeviceCode => 3,
            GuardType::DeviceConfirmation => 4,
            GuardType::EmailConfirmation => 5,
            GuardType::MachineToken => 6,
            GuardType::Other(other) => other,
        }
    }
}
