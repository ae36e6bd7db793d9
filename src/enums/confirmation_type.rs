use serde::{Serialize, Deserialize};
use strum_macros::Display;

/// The type of a mobile confirmation.
#[derive(Debug, Serialize, Deserialize, Display, PartialEq, Eq, Clone, Copy, Default)]
#[serde(from = "u32", into = "u32")]
pub enum ConfirmationType {
    /// Generic.
    #[default]
    Generic,
    /// Confirmation to confirm a trade offer.
    Trade,
    /// Confirmation to confirm a market listing.
    MarketListing,
    /// Confirmation for account recovery.
    AccountRecovery,
    /// Confirmation for a Web API key request.
    ApiKey,
    /// Confirmation for a purchase.
    Purchase,
    /// Unknown.
    Unknown(u32),
}

impl From<u32> for ConfirmationType {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::Generic,
            2 => Self::Trade,
            3 => Self::MarketListing,
            6 => Self::AccountRecovery,
            9 => Self::ApiKey,
            12 => Self::Purchase,
            other => Self::Unknown(other),
        }
    }
}

impl From<ConfirmationType> for u32 {
    fn from(value: ConfirmationType) -> Self {
        match value {
            ConfirmationType::Generic => 1,
            ConfirmationType::Trade => 2,
            ConfirmationType::MarketListing => 3,
            ConfirmationType::AccountRecovery => 6,
            ConfirmationType::ApiKey => 9,
            ConfirmationType::Purchase => 12,
            ConfirmationType::Unknown(other) => other,
        }
    }
}
