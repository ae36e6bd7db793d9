use crate::enums::EResult;
use crate::serialize;
use serde::{Deserialize, Serialize};

/// The wallet of the account.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct WalletInfo {
    /// Whether the wallet could be read.
    pub success: EResult,
    /// The currency ID of the wallet, e.g. 1 for USD.
    #[serde(default)]
    pub wallet_currency: u32,
    /// The country code of the wallet.
    #[serde(default)]
    pub wallet_country: String,
    /// The state or province code of the wallet.
    #[serde(default)]
    pub wallet_state: String,
    /// The balance in cents.
    #[serde(default, deserialize_with = "serialize::option_number_or_string::deserialize")]
    pub wallet_balance: Option<u64>,
    /// The balance pending clearance in cents.
    #[serde(default, deserialize_with = "serialize::option_number_or_string::deserialize")]
    pub wallet_delayed_balance: Option<u64>,
    /// The maximum balance the wallet can hold in cents.
    #[serde(default, deserialize_with = "serialize::option_number_or_string::deserialize")]
    pub wallet_max_balance: Option<u64>,
}

impl WalletInfo {
    /// The balance in cents. `0` when unknown.
    pub fn balance(&self) -> u64 {
        self.wallet_balance.unwrap_or_default()
    }
}
