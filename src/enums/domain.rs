use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use url::Url;

/// The Steam web domains a session spans.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Domain {
    /// <https://steamcommunity.com>
    Community,
    /// <https://store.steampowered.com>
    Store,
    /// <https://help.steampowered.com>
    Help,
    /// <https://login.steampowered.com>
    Login,
    /// <https://api.steampowered.com>
    Api,
}

impl Domain {
    /// Domains which hold session cookies (`sessionid`, `steamLoginSecure`, language).
    pub const COOKIE_DOMAINS: [Domain; 3] = [Domain::Community, Domain::Store, Domain::Help];
    
    /// The hostname for this domain.
    pub fn hostname(&self) -> &'static str {
        match self {
            Self::Community => "steamcommunity.com",
            Self::Store => "store.steampowered.com",
            Self::Help => "help.steampowered.com",
            Self::Login => "login.steampowered.com",
            Self::Api => "api.steampowered.com",
        }
    }
    
    /// The base URL with a trailing slash.
    pub fn url(&self) -> Url {
        // The hostnames are fixed so this can't fail.
        Url::parse(&format!("https://{}/", self.hostname()))
            .unwrap_or_else(|error| panic!("URL could not be parsed from {}: {error}", self.hostname()))
    }
    
    /// Builds a URL for `pathname` on this domain.
    pub fn get_url(&self, pathname: &str) -> String {
        format!("https://{}{pathname}", self.hostname())
    }
    
    /// Finds the domain for a hostname.
    pub fn from_hostname(hostname: &str) -> Option<Self> {
        Self::iter().find(|domain| domain.hostname() == hostname)
    }
}
