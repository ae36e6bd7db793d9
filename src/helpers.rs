use crate::enums::EResult;
use crate::error::{Error, FileError, ParameterError};
use crate::types::HttpClient;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use async_fs::File;
use futures::io::AsyncWriteExt;
use lazy_regex::{regex_captures, regex_is_match};
use reqwest::cookie::Jar;
use reqwest::header;
use reqwest_middleware::ClientBuilder;
use serde::de::DeserializeOwned;

/// The default user agent for requests.
pub const USER_AGENT_STRING: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";
/// The `X-Requested-With` value the mobile app sends to the confirmation endpoints.
pub const MOBILE_REQUESTED_WITH: &str = "com.valvesoftware.android.steam.community";

/// Creates a client which stores cookies in `cookie_jar`.
pub fn get_default_client(
    cookie_jar: Arc<Jar>,
    user_agent: &str,
    proxy: Option<&str>,
) -> Result<HttpClient, Error> {
    let mut headers = header::HeaderMap::new();
    let user_agent = header::HeaderValue::from_str(user_agent)
        .unwrap_or_else(|_error| header::HeaderValue::from_static(USER_AGENT_STRING));

    headers.insert(header::USER_AGENT, user_agent);

    let mut builder = reqwest::ClientBuilder::new()
        .cookie_provider(cookie_jar)
        .default_headers(headers)
        .gzip(true);

    if let Some(proxy) = proxy {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|error| ParameterError::InvalidProxy(error.to_string()))?;

        builder = builder.proxy(proxy);
    }

    let client = builder.build()?;

    Ok(ClientBuilder::new(client).build())
}

/// Generates a random session ID.
pub fn generate_sessionid() -> String {
    // Should look like "37bf523a24034ec06c60ec61"
    (0..12)
        .map(|_| {
            let b = rand::random::<u8>();

            format!("{b:02x}")
        })
        .collect()
}

fn is_login(location_option: Option<&header::HeaderValue>) -> bool {
    match location_option {
        Some(location) => {
            if let Ok(location_str) = location.to_str() {
                regex_is_match!("/login", location_str)
            } else {
                false
            }
        },
        None => false,
    }
}

/// Reads the result Steam Web API methods put in the `x-eresult` header.
pub fn get_eresult_header(response: &reqwest::Response) -> Option<EResult> {
    response.headers()
        .get("x-eresult")?
        .to_str()
        .ok()?
        .parse::<i32>()
        .ok()
        .map(EResult::from)
}

/// Reads the message Steam Web API methods put in the `x-error_message` header.
pub fn get_error_message_header(response: &reqwest::Response) -> Option<String> {
    response.headers()
        .get("x-error_message")?
        .to_str()
        .ok()
        .map(String::from)
}

/// Checks the status of a response and returns its body.
pub async fn check_response(
    response: reqwest::Response,
) -> Result<bytes::Bytes, Error> {
    let status = &response.status();

    match status.as_u16() {
        300..=399 if is_login(response.headers().get("location")) => {
            Err(Error::NotLoggedIn)
        },
        400..=599 => {
            Err(Error::Http(*status))
        },
        _ => {
            Ok(response.bytes().await?)
        }
    }
}

/// Checks the response and reads the body as text.
pub async fn parses_text(
    response: reqwest::Response,
) -> Result<String, Error> {
    let body = check_response(response).await?;

    Ok(String::from_utf8_lossy(&body).into_owned())
}

/// Checks the response and deserializes the body as JSON. Known HTML error pages are turned into
/// errors.
pub async fn parses_response<D>(
    response: reqwest::Response,
) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    let body = check_response(response).await?;

    parse_body(&body)
}

pub(crate) fn parse_body<D>(
    body: &[u8],
) -> Result<D, Error>
where
    D: DeserializeOwned,
{
    match serde_json::from_slice::<D>(body) {
        Ok(body) => Ok(body),
        Err(parse_error) => {
            // unexpected response
            let html = String::from_utf8_lossy(body);

            if regex_is_match!(r#"<h1>Sorry!</h1>"#, &html) {
                if let Some((_, message)) = regex_captures!("<h3>(.+)</h3>", &html) {
                    Err(Error::UnexpectedResponse(message.into()))
                } else {
                    Err(Error::UnexpectedResponse("Unexpected error".into()))
                }
            } else if regex_is_match!(r#"<h1>Sign In</h1>"#, &html) && regex_is_match!(r#"g_steamID = false;"#, &html) {
                Err(Error::NotLoggedIn)
            } else {
                log::debug!("Unparseable response: {}", html.chars().take(200).collect::<String>());
                Err(Error::Parse(parse_error))
            }
        }
    }
}

/// Fails with [`Error::EResult`] unless `eresult` is OK.
pub fn check_eresult(
    eresult: EResult,
    message: Option<String>,
    default_message: &str,
) -> Result<(), Error> {
    if eresult.is_ok() {
        return Ok(());
    }

    Err(Error::EResult {
        eresult,
        message: message.unwrap_or_else(|| default_message.into()),
    })
}

/// The default directory for storing session data.
pub fn default_data_directory() -> PathBuf {
    directories::ProjectDirs::from("rs", "", env!("CARGO_PKG_NAME"))
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./session"))
}

/// Writes a file by writing to a temporary file then renaming it so the file is never left
/// half-written.
pub async fn write_file_atomic<P>(
    filepath: P,
    bytes: &[u8],
) -> Result<(), FileError>
where
    P: AsRef<Path>,
{
    let filepath = filepath.as_ref();
    let mut temp_filepath = filepath.as_os_str().to_owned();

    temp_filepath.push(".tmp");

    let temp_filepath = PathBuf::from(temp_filepath);

    if let Some(parent) = filepath.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    let mut temp_file = File::create(&temp_filepath).await?;

    match temp_file.write_all(bytes).await {
        Ok(_) => {
            temp_file.flush().await?;
            async_fs::rename(&temp_filepath, filepath).await?;
            Ok(())
        },
        Err(error) => {
            // Remove the partially written temp file.
            let _ = async_fs::remove_file(&temp_filepath).await;
            Err(error.into())
        },
    }
}
