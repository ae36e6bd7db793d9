//! Conversions between the ID formats Steam uses.

use crate::types::{AppId, ContextId};
use std::fmt::Display;

/// Gets the 32-bit account ID from a 64-bit SteamID.
pub fn steamid_to_account_id(steamid: u64) -> u32 {
    (steamid & 0xFFFFFFFF) as u32
}

/// Gets the 64-bit SteamID of an individual public account from its 32-bit account ID.
pub fn account_id_to_steamid(account_id: u32) -> u64 {
    1 << 56 | 1 << 52 | 1 << 32 | account_id as u64
}

/// Creates a code identifying an asset (or item class when `contextid` is `None`) across the
/// whole Steam economy. Used to match market listing confirmations to the listed asset.
/// 
/// See <https://dev.doctormckay.com/topic/332-identifying-steam-items/>.
pub fn create_ident_code<T>(
    id: T,
    appid: AppId,
    contextid: Option<ContextId>,
) -> String
where
    T: Display,
{
    match contextid {
        Some(contextid) => format!("{id}_{appid}_{contextid}"),
        None => format!("{id}_{appid}"),
    }
}
