use super::SteamClient;
use crate::enums::Language;
use crate::error::Error;
use crate::helpers::USER_AGENT_STRING;
use crate::types::HttpClient;
use std::sync::Arc;
use reqwest::cookie::Jar;

/// Builder for constructing a [`SteamClient`].
#[derive(Debug, Clone)]
pub struct SteamClientBuilder {
    /// The account name used to log in.
    pub(crate) username: Option<String>,
    /// The password used to log in.
    pub(crate) password: Option<String>,
    /// The SteamID of the account, if known before logging in.
    pub(crate) steamid: Option<u64>,
    /// The shared secret for generating Steam Guard codes.
    pub(crate) shared_secret: Option<String>,
    /// The identity secret for mobile confirmations.
    pub(crate) identity_secret: Option<String>,
    /// The Steam Web API key.
    pub(crate) api_key: Option<String>,
    /// The trade token of the account's trade URL.
    pub(crate) trade_token: Option<String>,
    /// The language for Steam pages.
    pub(crate) language: Language,
    /// User agent for requests.
    pub(crate) user_agent: String,
    /// How many seconds your computer is behind Steam's servers.
    pub(crate) time_offset: i64,
    /// Proxy URL for requests, e.g. `socks5://127.0.0.1:1080`.
    pub(crate) proxy: Option<String>,
    /// Request cookies.
    pub(crate) cookies: Option<Arc<Jar>>,
    /// Client to use for requests. Remember to also include the cookies connected to this client.
    pub(crate) client: Option<HttpClient>,
}

impl Default for SteamClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamClientBuilder {
    /// Creates a new [`SteamClientBuilder`].
    pub fn new() -> Self {
        Self {
            username: None,
            password: None,
            steamid: None,
            shared_secret: None,
            identity_secret: None,
            api_key: None,
            trade_token: None,
            language: Language::English,
            user_agent: USER_AGENT_STRING.into(),
            time_offset: 0,
            proxy: None,
            cookies: None,
            client: None,
        }
    }

    /// The account name and password used to log in.
    pub fn credentials<U, P>(mut self, username: U, password: P) -> Self
    where
        U: Into<String>,
        P: Into<String>,
    {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// The account name. Also used to check whether a session is alive.
    pub fn username<T>(mut self, username: T) -> Self
    where
        T: Into<String>,
    {
        self.username = Some(username.into());
        self
    }

    /// The SteamID of the account. Not needed when logging in or setting cookies.
    pub fn steamid(mut self, steamid: u64) -> Self {
        self.steamid = Some(steamid);
        self
    }

    /// The shared secret for the account. Required for logging in.
    pub fn shared_secret<T>(mut self, shared_secret: T) -> Self
    where
        T: Into<String>,
    {
        self.shared_secret = Some(shared_secret.into());
        self
    }

    /// The identity secret for the account. Required for mobile confirmations.
    pub fn identity_secret<T>(mut self, identity_secret: T) -> Self
    where
        T: Into<String>,
    {
        self.identity_secret = Some(identity_secret.into());
        self
    }

    /// The Steam Web API key, if already known.
    pub fn api_key<T>(mut self, api_key: T) -> Self
    where
        T: Into<String>,
    {
        self.api_key = Some(api_key.into());
        self
    }

    /// The trade token of the account's trade URL, if already known.
    pub fn trade_token<T>(mut self, trade_token: T) -> Self
    where
        T: Into<String>,
    {
        self.trade_token = Some(trade_token.into());
        self
    }

    /// The language for Steam pages. Defaults to English.
    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// The user agent for requests. Also sent as the device name when logging in.
    pub fn user_agent<T>(mut self, user_agent: T) -> Self
    where
        T: Into<String>,
    {
        self.user_agent = user_agent.into();
        self
    }

    /// How many seconds your computer is behind Steam's servers. Used for Steam Guard codes and
    /// mobile confirmations.
    pub fn time_offset(mut self, time_offset: i64) -> Self {
        self.time_offset = time_offset;
        self
    }

    /// A proxy URL for requests. Ignored when a client is given.
    pub fn proxy<T>(mut self, proxy: T) -> Self
    where
        T: Into<String>,
    {
        self.proxy = Some(proxy.into());
        self
    }

    /// Client to use for requests. It is also required to include the associated cookies with this
    /// client so that the `set_cookies` method works as expected.
    pub fn client(mut self, client: HttpClient, cookies: Arc<Jar>) -> Self {
        self.client = Some(client);
        self.cookies = Some(cookies);
        self
    }

    /// Builds the [`SteamClient`]. Fails when the proxy URL is invalid.
    pub fn build(self) -> Result<SteamClient, Error> {
        SteamClient::try_from(self)
    }
}
