use crate::enums::ConfirmationType;
use crate::ids::create_ident_code;
use crate::types::{AppId, AssetId, ContextId, ServerTime};
use crate::serialize;
use std::fmt;
use chrono::serde::ts_seconds;
use serde::{Serialize, Deserialize};

/// Mobile confirmation. Used primarily for confirming trade offers or listing items on the market.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Confirmation {
    /// The ID of the confirmation.
    #[serde(with = "serialize::string")]
    pub id: u64,
    /// Trade offer ID, market listing ID or API key request ID.
    #[serde(with = "serialize::string")]
    pub creator_id: u64,
    /// The time the confirmation was created.
    #[serde(with = "ts_seconds")]
    pub creation_time: ServerTime,
    /// The nonce.
    #[serde(with = "serialize::string")]
    pub nonce: u64,
    /// The cancel text.
    #[serde(default)]
    pub cancel: String,
    /// The accept text e.g. "Accept" or "Send Offer".
    #[serde(default)]
    pub accept: String,
    /// `true` if can be confirmed with multiple other confirmations.
    #[serde(default)]
    pub multi: bool,
    /// The confirmation type.
    #[serde(default)]
    pub r#type: ConfirmationType,
    /// The type name.
    #[serde(default)]
    pub type_name: String,
    /// The headline.
    #[serde(default)]
    pub headline: String,
    /// The description.
    #[serde(default)]
    pub summary: Vec<String>,
    /// The icon.
    #[serde(default)]
    pub icon: Option<String>,
    /// Warnings.
    #[serde(default)]
    pub warn: Option<Vec<String>>,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.r#type, self.headline)
    }
}

impl Confirmation {
    /// Description for items we are giving in a trade.
    pub fn giving(&self) -> Option<&str> {
        if self.r#type != ConfirmationType::Trade {
            return None;
        }

        self.summary.first().map(|s| s.as_str())
    }

    /// Description for items we are receiving in a trade.
    pub fn receiving(&self) -> Option<&str> {
        if self.r#type != ConfirmationType::Trade {
            return None;
        }

        self.summary.get(1).map(|s| s.as_str())
    }
}

/// The item of a market listing confirmation.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ConfirmationDetails {
    /// The app ID of the item.
    #[serde(deserialize_with = "serialize::number_or_string::deserialize")]
    pub appid: AppId,
    /// The context ID of the item.
    #[serde(deserialize_with = "serialize::number_or_string::deserialize")]
    pub contextid: ContextId,
    /// The asset ID of the item.
    #[serde(rename = "id", deserialize_with = "serialize::number_or_string::deserialize")]
    pub assetid: AssetId,
    /// The class ID of the item.
    #[serde(default, deserialize_with = "serialize::option_number_or_string::deserialize")]
    pub classid: Option<u64>,
    /// The instance ID of the item.
    #[serde(default, deserialize_with = "serialize::option_number_or_string::deserialize")]
    pub instanceid: Option<u64>,
    /// The amount being listed.
    #[serde(default, deserialize_with = "serialize::option_number_or_string::deserialize")]
    pub amount: Option<u32>,
    /// The name of the item.
    #[serde(default)]
    pub name: Option<String>,
    /// The market hash name of the item.
    #[serde(default)]
    pub market_hash_name: Option<String>,
}

impl ConfirmationDetails {
    /// The code identifying the listed asset.
    pub fn ident_code(&self) -> String {
        create_ident_code(self.assetid, self.appid, Some(self.contextid))
    }
}
