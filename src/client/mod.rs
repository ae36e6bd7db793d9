//! The client holding a Steam web session.

mod auth;
mod builder;
mod web_api;

pub use builder::SteamClientBuilder;
pub use web_api::WebApiAuth;

use crate::SteamID;
use crate::cookies::{self, LANGUAGE_COOKIE, SESSIONID_COOKIE, TIMEZONE_OFFSET_COOKIE};
use crate::enums::{Domain, Language};
use crate::error::{Error, FileError, ParameterError, Result, SetCookiesError};
use crate::guard::{self, KeyThrottle};
use crate::helpers::{get_default_client, write_file_atomic};
use crate::jwt::{decode_jwt, JwtClaims};
use crate::session::{get_session_from_cookies, Session};
use crate::time::get_system_time;
use crate::types::{CookieMap, HttpClient};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use reqwest::cookie::Jar;
use serde::{Deserialize, Serialize};

/// A session saved to disk with [`SteamClient::save_session`].
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct SavedSession {
    /// Cookies keyed by hostname.
    pub cookies: CookieMap,
    /// The refresh token from the last login.
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// A client for the Steam web session of one account.
///
/// Cloning is cheap. Clones share the same cookies and session state.
#[derive(Debug, Clone)]
pub struct SteamClient {
    /// The account name.
    pub(crate) username: Option<String>,
    /// The password.
    pub(crate) password: Option<String>,
    /// The shared secret for Steam Guard codes.
    pub(crate) shared_secret: Option<String>,
    /// The identity secret for mobile confirmations.
    pub(crate) identity_secret: Option<String>,
    /// User agent for requests.
    pub(crate) user_agent: String,
    /// The client for making requests.
    pub(crate) client: HttpClient,
    /// The cookies to make requests with. Since the requests are made with the provided client,
    /// the cookies should be the same as what the client uses.
    pub(crate) cookies: Arc<Jar>,
    /// The session read from the community cookies.
    pub(crate) session: Arc<RwLock<Option<Session>>>,
    /// The refresh token from the last login.
    pub(crate) refresh_token: Arc<RwLock<Option<String>>>,
    /// The Steam Web API key.
    pub(crate) api_key: Arc<RwLock<Option<String>>>,
    /// The trade token.
    pub(crate) trade_token: Arc<RwLock<Option<String>>>,
    /// The language for Steam pages.
    pub(crate) language: Arc<RwLock<Language>>,
    /// The SteamID of the logged in user. `0` if unknown.
    pub(crate) steamid: Arc<AtomicU64>,
    /// How many seconds your computer is behind Steam's servers.
    pub(crate) time_offset: Arc<AtomicI64>,
    /// Keeps confirmation keys for the same tag apart.
    pub(crate) key_throttle: Arc<KeyThrottle>,
}

pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl SteamClient {
    /// Builder for constructing a [`SteamClient`].
    pub fn builder() -> SteamClientBuilder {
        SteamClientBuilder::new()
    }

    /// The account name.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The cookie jar used for requests.
    pub fn cookie_jar(&self) -> Arc<Jar> {
        Arc::clone(&self.cookies)
    }

    /// Gets the logged-in user's SteamID.
    pub fn get_steamid(&self) -> Result<SteamID> {
        let steamid = self.steamid.load(Ordering::Relaxed);

        if steamid == 0 {
            return Err(Error::NotLoggedIn);
        }

        Ok(SteamID::from(steamid))
    }

    /// The session ID from the community cookies.
    pub fn session_id(&self) -> Option<String> {
        cookies::get_cookie_value(&self.cookies, Domain::Community, SESSIONID_COOKIE)
    }

    /// The session ID, generating and setting one on the community domain when missing.
    pub(crate) fn session_id_or_generate(&self) -> String {
        if let Some(sessionid) = self.session_id() {
            return sessionid;
        }

        let sessionid = crate::helpers::generate_sessionid();

        cookies::set_cookie(&self.cookies, Domain::Community, SESSIONID_COOKIE, &sessionid);
        sessionid
    }

    /// The current session, if cookies have been set or a login has completed.
    pub fn session(&self) -> Option<Session> {
        read_lock(&self.session).clone()
    }

    /// Sets cookies on every Steam domain.
    ///
    /// The cookies must contain `steamLoginSecure`. A session ID is generated when `sessionid`
    /// is missing.
    pub fn set_cookies(
        &self,
        mut cookies: Vec<String>,
    ) -> std::result::Result<(), SetCookiesError> {
        let session = get_session_from_cookies(&mut cookies)?;

        for domain in Domain::COOKIE_DOMAINS {
            let url = domain.url();

            for cookie in &cookies {
                self.cookies.add_cookie_str(cookie, &url);
            }
        }

        self.apply_language_cookies();
        self.set_session(session);

        Ok(())
    }

    fn set_session(&self, session: Session) {
        // The session contains steamid but an AtomicU64 is faster to access.
        self.steamid.store(session.steamid, Ordering::Relaxed);
        *write_lock(&self.session) = Some(session);
    }

    /// Reads the session back from the community cookies after they were changed by Steam.
    pub(crate) fn update_session_from_cookies(&self) -> std::result::Result<(), SetCookiesError> {
        let mut cookies = cookies::get_cookies(&self.cookies, Domain::Community);
        let session = get_session_from_cookies(&mut cookies)?;

        if self.session_id().is_none() {
            cookies::set_cookie(&self.cookies, Domain::Community, SESSIONID_COOKIE, &session.sessionid);
        }

        self.set_session(session);

        Ok(())
    }

    pub(crate) fn clear_session(&self) {
        self.steamid.store(0, Ordering::Relaxed);
        *write_lock(&self.session) = None;
        *write_lock(&self.refresh_token) = None;

        for domain in Domain::COOKIE_DOMAINS {
            cookies::remove_cookie(&self.cookies, domain, cookies::LOGIN_SECURE_COOKIE);
        }
    }

    /// Exports the cookies of every Steam domain keyed by hostname.
    pub fn export_cookies(&self) -> CookieMap {
        cookies::export_cookies(&self.cookies)
    }

    /// Imports cookies exported with [`SteamClient::export_cookies`]. The session is read from
    /// the community cookies when they contain a login.
    pub fn import_cookies(&self, cookies: &CookieMap) {
        cookies::import_cookies(&self.cookies, cookies);

        if let Err(error) = self.update_session_from_cookies() {
            log::debug!("Imported cookies contain no session: {error}");
        }
    }

    /// Saves the cookies and refresh token to `filepath` as JSON.
    pub async fn save_session<P>(&self, filepath: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let saved = SavedSession {
            cookies: self.export_cookies(),
            refresh_token: self.refresh_token(),
        };
        let data = serde_json::to_vec_pretty(&saved)
            .map_err(FileError::Parse)?;

        write_file_atomic(&filepath, &data).await?;
        log::debug!("Saved session to {}", filepath.as_ref().display());

        Ok(())
    }

    /// Loads a session saved with [`SteamClient::save_session`]. The session is not checked.
    pub async fn load_session<P>(&self, filepath: P) -> Result<SavedSession>
    where
        P: AsRef<Path>,
    {
        let data = async_fs::read_to_string(&filepath).await
            .map_err(FileError::FileSystem)?;
        let saved: SavedSession = serde_json::from_str(&data)
            .map_err(FileError::Parse)?;

        self.import_cookies(&saved.cookies);

        if saved.refresh_token.is_some() {
            self.set_refresh_token(saved.refresh_token.clone());
        }

        log::debug!("Loaded session from {}", filepath.as_ref().display());

        Ok(saved)
    }

    /// The access token from the community `steamLoginSecure` cookie.
    pub fn access_token(&self) -> Option<String> {
        self.get_access_token(Domain::Community)
    }

    /// The access token from the `steamLoginSecure` cookie of `domain`. Each domain gets its
    /// own token.
    pub fn get_access_token(&self, domain: Domain) -> Option<String> {
        let value = cookies::get_cookie_value(&self.cookies, domain, cookies::LOGIN_SECURE_COOKIE)?;

        cookies::split_login_secure(&value)
            .map(|(_steamid, access_token)| access_token.to_string())
    }

    /// Sets the community access token. The SteamID must be known.
    pub fn set_access_token(&self, access_token: &str) -> Result<()> {
        let steamid = u64::from(self.get_steamid()?);
        let value = format!("{steamid}%7C%7C{access_token}");

        cookies::set_cookie(&self.cookies, Domain::Community, cookies::LOGIN_SECURE_COOKIE, &value);
        self.update_session_from_cookies()?;

        Ok(())
    }

    /// The decoded claims of the community access token.
    pub fn access_token_claims(&self) -> Option<JwtClaims> {
        decode_jwt(&self.access_token()?).ok()
    }

    /// Whether the access token has expired. `true` when there is no token.
    pub fn is_access_token_expired(&self) -> bool {
        self.access_token_claims()
            .map(|claims| claims.is_expired(get_system_time()))
            .unwrap_or(true)
    }

    /// The refresh token from the last login.
    pub fn refresh_token(&self) -> Option<String> {
        read_lock(&self.refresh_token).clone()
    }

    /// Sets the refresh token.
    pub fn set_refresh_token(&self, refresh_token: Option<String>) {
        *write_lock(&self.refresh_token) = refresh_token;
    }

    /// The decoded claims of the refresh token.
    pub fn refresh_token_claims(&self) -> Option<JwtClaims> {
        decode_jwt(&self.refresh_token()?).ok()
    }

    /// Whether the refresh token has expired. `true` when there is no token.
    pub fn is_refresh_token_expired(&self) -> bool {
        self.refresh_token_claims()
            .map(|claims| claims.is_expired(get_system_time()))
            .unwrap_or(true)
    }

    /// How many seconds your computer is behind Steam's servers.
    pub fn time_offset(&self) -> i64 {
        self.time_offset.load(Ordering::Relaxed)
    }

    /// Sets how many seconds your computer is behind Steam's servers.
    pub fn set_time_offset(&self, time_offset: i64) {
        self.time_offset.store(time_offset, Ordering::Relaxed);
    }

    /// Asks Steam for its time and stores the offset from the local clock.
    pub async fn sync_time_offset(&self) -> Result<i64> {
        let time_offset = guard::get_steam_time_offset(&self.client).await?;

        self.set_time_offset(time_offset);

        Ok(time_offset)
    }

    /// The current time on Steam's servers.
    pub fn steam_time(&self) -> u64 {
        guard::get_steam_time(self.time_offset())
    }

    /// Generates a Steam Guard code from the shared secret.
    pub fn steam_guard_code(&self) -> Result<String> {
        let shared_secret = self.shared_secret.as_deref()
            .ok_or(ParameterError::NoSharedSecret)?;

        Ok(guard::generate_auth_code(shared_secret, self.time_offset())?)
    }

    /// The language for Steam pages.
    pub fn language(&self) -> Language {
        *read_lock(&self.language)
    }

    /// Sets the language for Steam pages on every domain.
    pub fn set_language(&self, language: Language) {
        *write_lock(&self.language) = language;
        self.apply_language_cookies();
    }

    fn apply_language_cookies(&self) {
        let language = self.language();

        for domain in Domain::COOKIE_DOMAINS {
            cookies::set_cookie(&self.cookies, domain, LANGUAGE_COOKIE, language.steam_name());
        }
    }

    /// Sets the timezone offset cookie on every domain. Steam shows times in this timezone.
    pub fn set_timezone_offset(&self, offset_seconds: i32) {
        let value = format!("{offset_seconds},0");

        for domain in Domain::COOKIE_DOMAINS {
            cookies::set_cookie(&self.cookies, domain, TIMEZONE_OFFSET_COOKIE, &value);
        }
    }
}

impl TryFrom<SteamClientBuilder> for SteamClient {
    type Error = Error;

    fn try_from(builder: SteamClientBuilder) -> Result<Self> {
        let cookies = builder.cookies
            .unwrap_or_else(|| Arc::new(Jar::default()));
        let client = match builder.client {
            Some(client) => client,
            None => get_default_client(
                Arc::clone(&cookies),
                &builder.user_agent,
                builder.proxy.as_deref(),
            )?,
        };
        let client = Self {
            username: builder.username,
            password: builder.password,
            shared_secret: builder.shared_secret,
            identity_secret: builder.identity_secret,
            user_agent: builder.user_agent,
            client,
            cookies,
            session: Arc::new(RwLock::new(None)),
            refresh_token: Arc::new(RwLock::new(None)),
            api_key: Arc::new(RwLock::new(builder.api_key)),
            trade_token: Arc::new(RwLock::new(builder.trade_token)),
            language: Arc::new(RwLock::new(builder.language)),
            steamid: Arc::new(AtomicU64::new(builder.steamid.unwrap_or_default())),
            time_offset: Arc::new(AtomicI64::new(builder.time_offset)),
            key_throttle: Arc::new(KeyThrottle::new()),
        };

        client.apply_language_cookies();

        Ok(client)
    }
}
