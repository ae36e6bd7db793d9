//! Logs in to the Steam web platform and handles mobile confirmations.
//!
//! The login runs the same flow as the Steam website: the password is encrypted with an RSA key
//! from Steam, a Steam Guard code generated from the shared secret completes the auth session
//! and the resulting tokens are transferred to the community, store and help domains as cookies.
//! Mobile confirmations for trade offers, market listings and Web API key requests are signed
//! with the identity secret.
//!
//! ```no_run
//! use steam_community_session::SteamClient;
//!
//! # async fn run() -> Result<(), steam_community_session::Error> {
//! let client = SteamClient::builder()
//!     .credentials("accountname", "password")
//!     .shared_secret("cnOgv/KdpLoP6Nbh0GMkXkPXALQ=")
//!     .identity_secret("itqR9l2GgVpG7cZgV5nlGNeuINE=")
//!     .build()?;
//!
//! client.login(true).await?;
//!
//! for confirmation in client.get_confirmations().await? {
//!     println!("{confirmation}");
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod helpers;
mod serialize;
mod time;

pub mod confirmation;
pub mod cookies;
pub mod enums;
pub mod error;
pub mod guard;
pub mod ids;
pub mod jwt;
pub mod login;
pub mod profile;
pub mod session;
pub mod types;

pub use client::{SavedSession, SteamClient, SteamClientBuilder, WebApiAuth};
pub use confirmation::{Confirmation, ConfirmationDetails, Operation};
pub use enums::{ConfirmationType, Domain, EResult, GuardType, Language};
pub use error::{Error, Result};
pub use guard::{generate_auth_code, generate_confirmation_key, get_device_id, ConfirmationTag};
pub use profile::WalletInfo;
pub use session::Session;
pub use steamid_ng::SteamID;
pub use helpers::{default_data_directory, USER_AGENT_STRING};
