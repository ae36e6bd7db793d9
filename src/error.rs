//! Error types.

use crate::enums::EResult;
use reqwest::StatusCode;
use std::num::ParseIntError;

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error that can occur within the crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An input parameter is missing or invalid.
    #[error("{}", .0)]
    Parameter(#[from] ParameterError),
    /// Unexpected response from Steam.
    #[error("Unexpected response: {}", .0)]
    UnexpectedResponse(String),
    /// Steam returned a non-OK result code.
    #[error("Steam returned {eresult:?}: {message}")]
    EResult {
        /// The result code.
        eresult: EResult,
        /// The message describing the failure.
        message: String,
    },
    /// An error was encountered making a request.
    #[error("Request error: {}", .0)]
    Reqwest(#[from] reqwest::Error),
    /// An error was encountered within the request middleware.
    #[error("Request middleware error: {}", .0)]
    ReqwestMiddleware(anyhow::Error),
    /// An error was encountered parsing a JSON response body.
    #[error("Error parsing response: {}", .0)]
    Parse(#[from] serde_json::Error),
    /// An HTTP response returned an error status.
    #[error("Error {}", .0)]
    Http(StatusCode),
    /// You are not logged in.
    #[error("Not logged in")]
    NotLoggedIn,
    /// The session has expired and a new login is needed.
    #[error("Session expired")]
    SessionExpired,
    /// An error occurred while logging in.
    #[error("Login error: {}", .0)]
    Login(#[from] LoginError),
    /// Error parsing HTML document.
    #[error("Error parsing HTML document: {}", .0)]
    ParseHtml(#[from] ParseHtmlError),
    /// An error occurred reading or writing a file.
    #[error("{}", .0)]
    File(#[from] FileError),
    /// An error occurred setting cookies.
    #[error("{}", .0)]
    SetCookies(#[from] SetCookiesError),
    /// No confirmation could be found for the given key.
    #[error("No confirmation for {}", .0)]
    NoConfirmation(String),
    /// A confirmation action did not succeed.
    #[error("Confirmation unsuccessful. {}", .0.as_ref().map(|s| s.as_str()).unwrap_or("The confirmation may have succeeded, try refreshing your confirmations."))]
    ConfirmationUnsuccessful(Option<String>),
}

impl From<reqwest_middleware::Error> for Error {
    fn from(error: reqwest_middleware::Error) -> Error {
        match error {
            reqwest_middleware::Error::Reqwest(e) => Error::Reqwest(e),
            reqwest_middleware::Error::Middleware(e) => Error::ReqwestMiddleware(e),
        }
    }
}

/// Missing or invalid parameters.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParameterError {
    /// No identity secret was set. Required for mobile confirmations.
    #[error("No identity secret. An identity secret is required for mobile confirmations.")]
    NoIdentitySecret,
    /// No shared secret was set. Required for generating Steam Guard codes.
    #[error("No shared secret. A shared secret is required for Steam Guard codes.")]
    NoSharedSecret,
    /// No username was set.
    #[error("No username. A username is required to log in.")]
    NoUsername,
    /// No password was set.
    #[error("No password. A password is required to log in.")]
    NoPassword,
    /// No Steam Web API key was set.
    #[error("No API key. Set or fetch an API key first.")]
    NoApiKey,
    /// The secret could not be decoded as base64.
    #[error("Secret is not valid base64: {}", .0)]
    InvalidSecret(#[from] base64::DecodeError),
    /// The decoded secret has a length HMAC cannot use.
    #[error("Secret has an invalid length")]
    InvalidSecretLength,
    /// A Steam Guard code could not be generated from the shared secret.
    #[error("Could not generate Steam Guard code: {}", .0)]
    AuthCode(String),
    /// The proxy URL could not be parsed.
    #[error("Invalid proxy: {}", .0)]
    InvalidProxy(String),
}

/// An error occurring during one of the steps of logging in.
#[derive(thiserror::Error, Debug)]
pub enum LoginError {
    /// The RSA key for encrypting the password could not be obtained.
    #[error("Could not obtain RSA key: {}", .0)]
    RsaKey(String),
    /// The password could not be encrypted using the key given by Steam.
    #[error("Could not encrypt password: {}", .0)]
    Encrypt(#[from] rsa::Error),
    /// The auth session could not be started with the given credentials.
    #[error("Could not begin auth session: {}", .0)]
    BeginAuthSession(String),
    /// The Steam Guard code was rejected.
    #[error("Steam Guard code was not accepted: {:?}", .0)]
    SteamGuardCode(EResult),
    /// The account requires a confirmation type this crate cannot perform.
    #[error("Unsupported guard confirmation required: {}", .0)]
    UnsupportedGuard(String),
    /// Polling the auth session did not produce tokens.
    #[error("Auth session was not completed: {}", .0)]
    PollAuthSession(String),
    /// Steam responded with an error when finalizing the login.
    #[error("Finalizing login failed: {}", .0)]
    Finalize(String),
    /// A token transfer to one of the Steam domains failed.
    #[error("Transfer to {url} failed: {reason}")]
    Transfer {
        /// The transfer URL.
        url: String,
        /// Why the transfer failed.
        reason: String,
    },
}

/// An error occurring when setting cookies.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SetCookiesError {
    /// The cookies are missing the `steamLoginSecure` cookie.
    #[error("Missing steamLoginSecure cookie")]
    MissingLoginCookie,
    /// The `steamLoginSecure` cookie is malformed.
    #[error("Malformed steamLoginSecure cookie")]
    MalformedLoginCookie,
    /// The SteamID in the cookie could not be parsed.
    #[error("Invalid SteamID in cookie: {}", .0)]
    InvalidSteamID(#[from] ParseIntError),
}

/// An error occurred when parsing HTML.
#[derive(thiserror::Error, Debug)]
pub enum ParseHtmlError {
    /// The HTML is not what is expected.
    #[error("{}", .0)]
    Malformed(&'static str),
    /// Steam responded with an error message.
    #[error("{}", .0)]
    Response(String),
    /// A number could not be parsed.
    #[error("{}", .0)]
    ParseInt(#[from] ParseIntError),
    /// A selector could not be parsed.
    #[error("Invalid selector")]
    ParseSelector,
}

/// An error occurred reading or writing a file.
#[derive(thiserror::Error, Debug)]
pub enum FileError {
    /// A filesystem error.
    #[error("Filesystem error: {}", .0)]
    FileSystem(#[from] std::io::Error),
    /// The file contents could not be parsed.
    #[error("Error parsing file contents: {}", .0)]
    Parse(#[from] serde_json::Error),
}
