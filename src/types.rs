//! Types for common values in Steam responses.

/// Uniquely identifies an application on Steam. For example: 730 for Counter-Strike 2.
pub type AppId = u32;
/// A context ID belonging to an [`AppId`].
pub type ContextId = u64;
/// An asset ID unique to an [`AppId`] + [`ContextId`] combination.
pub type AssetId = u64;
/// An ID of a trade offer.
pub type TradeOfferId = u64;
/// An ID of a market listing.
pub type ListingId = u64;
/// Cookies grouped by the hostname they belong to.
pub type CookieMap = std::collections::HashMap<String, Vec<String>>;

pub use crate::time::ServerTime;

use reqwest_middleware::ClientWithMiddleware;

/// The HTTP client requests are made with.
pub type HttpClient = ClientWithMiddleware;
