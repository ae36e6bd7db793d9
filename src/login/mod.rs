//! Logging in with an account name and password.
//!
//! A login runs through these steps in order:
//!
//! 1. Fetch the RSA key for the account and encrypt the password with it.
//! 2. Begin an auth session with the credentials.
//! 3. Submit a Steam Guard code for the session.
//! 4. Poll the session until it yields a refresh token.
//! 5. Finalize the login with the refresh token, which gives a list of transfers.
//! 6. Post each transfer to set the login cookies on every Steam domain.
//!
//! Each step is exposed so a login can be driven manually, e.g. to submit an email code.
//! [`SteamClient::login`](crate::SteamClient::login) runs all of them.

mod password;
mod response;

pub use response::{AllowedConfirmation, AuthSession, TransferInfo};
pub use password::PasswordRsaKey;

use response::{
    ApiResponse,
    FinalizeLoginResponse,
    PollStatusResponse,
    RsaKeyResponse,
    TransferResponse,
};
use crate::cookies::{self, LOGIN_SECURE_COOKIE, SESSIONID_COOKIE};
use crate::enums::{Domain, EResult, GuardType};
use crate::error::{Error, LoginError};
use crate::helpers::{
    check_response,
    generate_sessionid,
    get_eresult_header,
    get_error_message_header,
    parse_body,
    parses_response,
};
use crate::types::HttpClient;
use std::time::Duration;
use futures::future::join_all;
use reqwest::cookie::Jar;
use reqwest::header;
use url::Url;

/// Maximum number of times the auth session is polled before giving up.
const MAX_POLL_ATTEMPTS: u32 = 10;
/// Bounds in seconds for the poll interval given by Steam.
const MIN_POLL_INTERVAL: f32 = 0.5;
const MAX_POLL_INTERVAL: f32 = 60.0;
/// The `platform_type` for a web browser.
const PLATFORM_TYPE_WEB_BROWSER: &str = "2";
const REFERER: &str = "https://steamcommunity.com/";

/// A finalized login.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedLogin {
    /// The SteamID of the account.
    pub steamid: u64,
    /// Transfers to perform to set cookies on each domain.
    pub transfer_info: Vec<TransferInfo>,
}

fn auth_service_url(method: &str) -> String {
    Domain::Api.get_url(&format!("/IAuthenticationService/{method}/v1"))
}

/// Gets the RSA key used to encrypt the password of `account_name`.
pub async fn get_password_rsa_key(
    client: &HttpClient,
    account_name: &str,
) -> Result<PasswordRsaKey, Error> {
    let uri = auth_service_url("GetPasswordRSAPublicKey");
    let response = client.get(&uri)
        .query(&[("account_name", account_name)])
        .send()
        .await?;
    let eresult = get_eresult_header(&response);
    let body: ApiResponse<RsaKeyResponse> = parses_response(response).await?;
    let key = body.response
        .ok_or_else(|| LoginError::RsaKey(format!("Empty response ({eresult:?})")))?;

    match (key.publickey_mod, key.publickey_exp, key.timestamp) {
        (Some(modulus), Some(exponent), Some(timestamp)) => {
            Ok(PasswordRsaKey::from_hex(&modulus, &exponent, timestamp)?)
        },
        _ => Err(LoginError::RsaKey(format!("Missing fields in response ({eresult:?})")).into()),
    }
}

/// Begins an auth session. The password is encrypted with the key for `account_name`.
pub async fn begin_auth_session(
    client: &HttpClient,
    account_name: &str,
    password: &str,
    device_friendly_name: &str,
) -> Result<AuthSession, Error> {
    let key = get_password_rsa_key(client, account_name).await?;
    let encrypted_password = key.encrypt_password(password)?;
    let encryption_timestamp = key.timestamp.to_string();
    let uri = auth_service_url("BeginAuthSessionViaCredentials");
    let response = client.post(&uri)
        .header(header::REFERER, REFERER)
        .form(&[
            ("account_name", account_name),
            ("encrypted_password", encrypted_password.as_str()),
            ("encryption_timestamp", encryption_timestamp.as_str()),
            ("remember_login", "true"),
            ("persistence", "1"),
            ("website_id", "Community"),
            ("device_friendly_name", device_friendly_name),
            ("platform_type", PLATFORM_TYPE_WEB_BROWSER),
        ])
        .send()
        .await?;
    let eresult = get_eresult_header(&response);
    let message = get_error_message_header(&response);
    let body: ApiResponse<AuthSession> = parses_response(response).await
        .map_err(|error| match error {
            // The response is "{}" when the credentials are rejected.
            Error::Parse(_) => LoginError::BeginAuthSession(describe_failure(eresult, message.clone())).into(),
            error => error,
        })?;
    let session = body.response
        .ok_or_else(|| LoginError::BeginAuthSession(describe_failure(eresult, message)))?;

    log::debug!("Began auth session for {} (client {})", session.steamid, session.client_id);

    Ok(session)
}

fn describe_failure(eresult: Option<EResult>, message: Option<String>) -> String {
    match (eresult, message) {
        (_, Some(message)) if !message.is_empty() => message,
        (Some(eresult), _) => format!("{eresult:?}"),
        _ => "No session in response".into(),
    }
}

/// Submits a Steam Guard code generated from the shared secret for the session.
pub async fn update_with_steam_guard_code(
    client: &HttpClient,
    session: &AuthSession,
    code: &str,
) -> Result<(), Error> {
    if !session.allows(GuardType::DeviceCode) {
        let allowed = session.allowed_confirmations
            .iter()
            .map(|confirmation| format!("{:?}", confirmation.confirmation_type))
            .collect::<Vec<_>>()
            .join(", ");

        return Err(LoginError::UnsupportedGuard(allowed).into());
    }

    let uri = auth_service_url("UpdateAuthSessionWithSteamGuardCode");
    let client_id = session.client_id.to_string();
    let steamid = session.steamid.to_string();
    let code_type = GuardType::DeviceCode.code().to_string();
    let response = client.post(&uri)
        .header(header::REFERER, REFERER)
        .form(&[
            ("client_id", client_id.as_str()),
            ("steamid", steamid.as_str()),
            ("code_type", code_type.as_str()),
            ("code", code),
        ])
        .send()
        .await?;
    let eresult = get_eresult_header(&response);

    check_response(response).await?;

    match eresult {
        Some(eresult) if !eresult.is_ok() => Err(LoginError::SteamGuardCode(eresult).into()),
        _ => Ok(()),
    }
}

/// Polls the session until it has been confirmed and returns the refresh token.
pub async fn poll_auth_session(
    client: &HttpClient,
    session: &AuthSession,
) -> Result<String, Error> {
    let uri = auth_service_url("PollAuthSessionStatus");

    poll_until_complete(client, &uri, session, MAX_POLL_ATTEMPTS).await
}

async fn poll_until_complete(
    client: &HttpClient,
    uri: &str,
    session: &AuthSession,
    max_attempts: u32,
) -> Result<String, Error> {
    let client_id = session.client_id.to_string();
    let interval = Duration::from_secs_f32(session.interval.clamp(MIN_POLL_INTERVAL, MAX_POLL_INTERVAL));

    for attempt in 1..=max_attempts {
        let response = client.post(uri)
            .header(header::REFERER, REFERER)
            .form(&[
                ("client_id", client_id.as_str()),
                ("request_id", session.request_id.as_str()),
            ])
            .send()
            .await?;
        let eresult = get_eresult_header(&response);
        let body: ApiResponse<PollStatusResponse> = parses_response(response).await?;
        let status = body.response
            .ok_or_else(|| LoginError::PollAuthSession(describe_failure(eresult, None)))?;

        if status.had_remote_interaction {
            return Err(LoginError::PollAuthSession("Session had remote interaction".into()).into());
        }

        if let Some(refresh_token) = status.refresh_token.filter(|token| !token.is_empty()) {
            log::debug!("Auth session completed after {attempt} poll(s)");
            return Ok(refresh_token);
        }

        if attempt < max_attempts {
            log::debug!("Auth session not completed yet, polling again in {}ms", interval.as_millis());
            tokio::time::sleep(interval).await;
        }
    }

    Err(LoginError::PollAuthSession(format!("No tokens after {max_attempts} attempts")).into())
}

/// Exchanges the refresh token for the transfers which set cookies on each domain.
pub async fn finalize_login(
    client: &HttpClient,
    refresh_token: &str,
    sessionid: &str,
) -> Result<FinalizedLogin, Error> {
    let uri = Domain::Login.get_url("/jwt/finalizelogin");
    let redir = Domain::Community.get_url("/login/home/?goto=");
    let response = client.post(&uri)
        .header(header::REFERER, REFERER)
        .header(header::ACCEPT, "application/json, text/plain, */*")
        .header("sec-fetch-site", "cross-site")
        .header("sec-fetch-mode", "cors")
        .header("sec-fetch-dest", "empty")
        .form(&[
            ("nonce", refresh_token),
            ("sessionid", sessionid),
            ("redir", redir.as_str()),
        ])
        .send()
        .await?;
    let body = check_response(response).await?;

    parse_finalize_login(&body)
}

fn parse_finalize_login(body: &[u8]) -> Result<FinalizedLogin, Error> {
    let body: FinalizeLoginResponse = parse_body(body)?;

    if let Some(error) = body.error.filter(|error| !error.is_null()) {
        return Err(LoginError::Finalize(error.to_string()).into());
    }

    let transfer_info = body.transfer_info
        .filter(|transfer_info| !transfer_info.is_empty())
        .ok_or_else(|| LoginError::Finalize("Malformed login response".into()))?;
    let steamid = body.steamid
        .ok_or_else(|| LoginError::Finalize("Missing steamID".into()))?;

    Ok(FinalizedLogin {
        steamid,
        transfer_info,
    })
}

fn transfer_form(
    transfer: &TransferInfo,
    steamid: u64,
) -> Vec<(String, String)> {
    let mut form = transfer.params
        .iter()
        .map(|(name, value)| {
            let value = match value {
                serde_json::Value::String(value) => value.clone(),
                value => value.to_string(),
            };

            (name.clone(), value)
        })
        .collect::<Vec<_>>();

    form.push(("steamID".into(), steamid.to_string()));
    form
}

/// Posts a single transfer. The response must set `steamLoginSecure` for the transfer's host. A
/// `sessionid` cookie is generated for the host when Steam did not set one.
pub async fn perform_transfer(
    client: &HttpClient,
    jar: &Jar,
    transfer: &TransferInfo,
    steamid: u64,
) -> Result<(), Error> {
    let transfer_error = |reason: String| LoginError::Transfer {
        url: transfer.url.clone(),
        reason,
    };
    let url = Url::parse(&transfer.url)
        .map_err(|error| transfer_error(error.to_string()))?;
    let response = client.post(url.clone())
        .form(&transfer_form(transfer, steamid))
        .send()
        .await?;
    // The jar may still hold a cookie from an earlier session so only this response counts.
    let sets_login_cookie = response.cookies()
        .any(|cookie| cookie.name() == LOGIN_SECURE_COOKIE && !cookie.value().is_empty());
    let body = check_response(response).await?;

    if let Ok(TransferResponse { result: Some(result) }) = serde_json::from_slice(&body) {
        let eresult = EResult::from(result);

        if !eresult.is_ok() {
            return Err(transfer_error(format!("{eresult:?}")).into());
        }
    }

    if !sets_login_cookie {
        return Err(transfer_error(format!("No {LOGIN_SECURE_COOKIE} cookie was set")).into());
    }

    if cookies::get_cookie_value_for_url(jar, &url, SESSIONID_COOKIE).is_none() {
        cookies::set_cookie_for_url(jar, &url, SESSIONID_COOKIE, &generate_sessionid());
    }

    log::debug!("Transferred session to {}", url.host_str().unwrap_or_default());

    Ok(())
}

/// Performs every transfer concurrently. All transfers are awaited before the first error is
/// returned so no domain is left half logged in.
pub async fn transfer_session(
    client: &HttpClient,
    jar: &Jar,
    finalized: &FinalizedLogin,
) -> Result<(), Error> {
    let transfers = finalized.transfer_info
        .iter()
        .map(|transfer| perform_transfer(client, jar, transfer, finalized.steamid));

    join_all(transfers)
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{get_default_client, USER_AGENT_STRING};
    use std::sync::Arc;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const STEAMID: u64 = 76561198080179568;
    const PENDING: &str = r#"{"response":{"had_remote_interaction":false}}"#;

    fn test_client(jar: &Arc<Jar>) -> HttpClient {
        get_default_client(Arc::clone(jar), USER_AGENT_STRING, None).unwrap()
    }

    fn auth_session(interval: f32) -> AuthSession {
        let body: ApiResponse<AuthSession> = serde_json::from_str(include_str!("fixtures/begin_auth_session.json")).unwrap();
        let mut session = body.response.unwrap();

        session.interval = interval;
        session
    }

    fn transfer_to(server: &MockServer) -> TransferInfo {
        let mut params = serde_json::Map::new();

        params.insert("nonce".into(), "abcdefghijklmnop".into());

        TransferInfo {
            url: format!("{}/login/settoken", server.uri()),
            params,
        }
    }

    #[test]
    fn parses_auth_session() {
        let body: ApiResponse<AuthSession> = serde_json::from_str(include_str!("fixtures/begin_auth_session.json")).unwrap();
        let session = body.response.unwrap();

        assert_eq!(session.client_id, 4718239412378475023);
        assert_eq!(session.steamid, 76561198080179568);
        assert_eq!(session.interval, 5.0);
        assert!(session.allows(GuardType::DeviceCode));
        assert!(session.allows(GuardType::EmailConfirmation));
        assert!(!session.requires_no_guard());
    }

    #[test]
    fn parses_rejected_auth_session() {
        let body: ApiResponse<AuthSession> = serde_json::from_str("{}").unwrap();

        assert!(body.response.is_none());
        assert!(serde_json::from_str::<ApiResponse<AuthSession>>("{\"response\":{}}").is_err());
    }

    #[test]
    fn parses_poll_status() {
        let body: ApiResponse<PollStatusResponse> = serde_json::from_str(include_str!("fixtures/poll_auth_session_status.json")).unwrap();
        let status = body.response.unwrap();

        assert_eq!(status.refresh_token.as_deref(), Some("eyAid.refresh.token"));
        assert_eq!(status.account_name.as_deref(), Some("accountname"));
        assert!(!status.had_remote_interaction);
    }

    #[test]
    fn parses_pending_poll_status() {
        let body: ApiResponse<PollStatusResponse> = serde_json::from_str("{\"response\":{\"had_remote_interaction\":false}}").unwrap();
        let status = body.response.unwrap();

        assert!(status.refresh_token.is_none());
        assert!(status.access_token.is_none());
        assert!(status.new_client_id.is_none());
    }

    #[test]
    fn parses_finalized_login() {
        let finalized = parse_finalize_login(include_bytes!("fixtures/finalize_login.json")).unwrap();

        assert_eq!(finalized.steamid, 76561198080179568);
        assert_eq!(finalized.transfer_info.len(), 3);
        assert_eq!(finalized.transfer_info[0].url, "https://steamcommunity.com/login/settoken");
    }

    #[test]
    fn finalize_error_is_login_error() {
        let error = parse_finalize_login(br#"{"error":8}"#).unwrap_err();

        assert!(matches!(error, Error::Login(LoginError::Finalize(message)) if message == "8"));
    }

    #[test]
    fn finalize_without_transfers_is_malformed() {
        let error = parse_finalize_login(br#"{"steamID":"76561198080179568","transfer_info":[]}"#).unwrap_err();

        assert!(matches!(error, Error::Login(LoginError::Finalize(_))));
    }

    #[test]
    fn builds_transfer_form() {
        let finalized = parse_finalize_login(include_bytes!("fixtures/finalize_login.json")).unwrap();
        let form = transfer_form(&finalized.transfer_info[0], finalized.steamid);

        assert!(form.contains(&("nonce".into(), "abcdefghijklmnop".into())));
        assert!(form.contains(&("auth".into(), "6b0d2b35ed5e6d4ea4d9b1d1a7c2e5f0".into())));
        assert_eq!(form.last(), Some(&("steamID".into(), "76561198080179568".into())));
    }

    #[test]
    fn describes_failure() {
        assert_eq!(describe_failure(Some(EResult::InvalidPassword), None), "InvalidPassword");
        assert_eq!(describe_failure(Some(EResult::InvalidPassword), Some("Bad".into())), "Bad");
        assert_eq!(describe_failure(None, Some(String::new())), "No session in response");
    }

    #[tokio::test]
    async fn poll_returns_refresh_token() {
        let server = MockServer::start().await;
        let jar = Arc::new(Jar::default());

        Mock::given(method("POST"))
            .and(path("/poll"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PENDING))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/poll"))
            .and(body_string_contains("client_id=4718239412378475023"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!("fixtures/poll_auth_session_status.json")))
            .with_priority(2)
            .mount(&server)
            .await;

        let uri = format!("{}/poll", server.uri());
        let refresh_token = poll_until_complete(&test_client(&jar), &uri, &auth_session(0.0), 3).await.unwrap();

        assert_eq!(refresh_token, "eyAid.refresh.token");
    }

    #[tokio::test]
    async fn poll_gives_up_after_max_attempts() {
        let server = MockServer::start().await;
        let jar = Arc::new(Jar::default());

        Mock::given(method("POST"))
            .and(path("/poll"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PENDING))
            .expect(2)
            .mount(&server)
            .await;

        let uri = format!("{}/poll", server.uri());
        let error = poll_until_complete(&test_client(&jar), &uri, &auth_session(0.0), 2).await.unwrap_err();

        assert!(matches!(error, Error::Login(LoginError::PollAuthSession(message)) if message.contains("2 attempts")));
    }

    #[tokio::test]
    async fn poll_rejects_remote_interaction() {
        let server = MockServer::start().await;
        let jar = Arc::new(Jar::default());

        Mock::given(method("POST"))
            .and(path("/poll"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response":{"had_remote_interaction":true}}"#))
            .expect(1)
            .mount(&server)
            .await;

        let uri = format!("{}/poll", server.uri());
        let error = poll_until_complete(&test_client(&jar), &uri, &auth_session(0.0), 5).await.unwrap_err();

        assert!(matches!(error, Error::Login(LoginError::PollAuthSession(message)) if message.contains("remote interaction")));
    }

    #[tokio::test]
    async fn poll_interval_is_bounded() {
        let server = MockServer::start().await;
        let jar = Arc::new(Jar::default());

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string(include_str!("fixtures/poll_auth_session_status.json")))
            .mount(&server)
            .await;

        let uri = format!("{}/poll", server.uri());
        // An interval too large for a Duration must not panic.
        let refresh_token = poll_until_complete(&test_client(&jar), &uri, &auth_session(f32::MAX), 1).await.unwrap();

        assert_eq!(refresh_token, "eyAid.refresh.token");
    }

    #[tokio::test]
    async fn guard_code_requires_device_code_confirmation() {
        let jar = Arc::new(Jar::default());
        let mut session = auth_session(5.0);

        session.allowed_confirmations.retain(|confirmation| confirmation.confirmation_type != GuardType::DeviceCode);

        let error = update_with_steam_guard_code(&test_client(&jar), &session, "87JP8").await.unwrap_err();

        assert!(matches!(error, Error::Login(LoginError::UnsupportedGuard(allowed)) if allowed == "EmailConfirmation"));
    }

    #[tokio::test]
    async fn transfer_requires_login_cookie_in_response() {
        let server = MockServer::start().await;
        let jar = Arc::new(Jar::default());
        let transfer = transfer_to(&server);
        let url = Url::parse(&transfer.url).unwrap();

        // left over from an earlier session
        cookies::set_cookie_for_url(&jar, &url, LOGIN_SECURE_COOKIE, "76561198080179568%7C%7Cstale");

        Mock::given(method("POST"))
            .and(path("/login/settoken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let error = perform_transfer(&test_client(&jar), &jar, &transfer, STEAMID).await.unwrap_err();

        assert!(matches!(error, Error::Login(LoginError::Transfer { reason, .. }) if reason.contains(LOGIN_SECURE_COOKIE)));
    }

    #[tokio::test]
    async fn transfer_sets_cookies() {
        let server = MockServer::start().await;
        let jar = Arc::new(Jar::default());
        let transfer = transfer_to(&server);
        let url = Url::parse(&transfer.url).unwrap();

        Mock::given(method("POST"))
            .and(path("/login/settoken"))
            .and(body_string_contains("steamID=76561198080179568"))
            .and(body_string_contains("nonce=abcdefghijklmnop"))
            .respond_with(ResponseTemplate::new(200)
                .insert_header("set-cookie", "steamLoginSecure=76561198080179568%7C%7Ceyj.token; Path=/; HttpOnly")
                .set_body_string(r#"{"result":1}"#))
            .expect(1)
            .mount(&server)
            .await;

        perform_transfer(&test_client(&jar), &jar, &transfer, STEAMID).await.unwrap();

        let login_secure = cookies::get_cookie_value_for_url(&jar, &url, LOGIN_SECURE_COOKIE).unwrap();
        let sessionid = cookies::get_cookie_value_for_url(&jar, &url, SESSIONID_COOKIE).unwrap();

        assert_eq!(login_secure, "76561198080179568%7C%7Ceyj.token");
        // generated since the response did not set one
        assert_eq!(sessionid.len(), 24);
    }

    #[tokio::test]
    async fn transfer_keeps_sessionid_from_response() {
        let server = MockServer::start().await;
        let jar = Arc::new(Jar::default());
        let transfer = transfer_to(&server);
        let url = Url::parse(&transfer.url).unwrap();

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200)
                .append_header("set-cookie", "steamLoginSecure=76561198080179568%7C%7Ceyj.token; Path=/")
                .append_header("set-cookie", "sessionid=37bf523a24034ec06c60ec61; Path=/")
                .set_body_string("{}"))
            .mount(&server)
            .await;

        perform_transfer(&test_client(&jar), &jar, &transfer, STEAMID).await.unwrap();

        assert_eq!(
            cookies::get_cookie_value_for_url(&jar, &url, SESSIONID_COOKIE).as_deref(),
            Some("37bf523a24034ec06c60ec61"),
        );
    }

    #[tokio::test]
    async fn transfer_fails_on_error_result() {
        let server = MockServer::start().await;
        let jar = Arc::new(Jar::default());
        let transfer = transfer_to(&server);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200)
                .insert_header("set-cookie", "steamLoginSecure=76561198080179568%7C%7Ceyj.token; Path=/")
                .set_body_string(r#"{"result":2}"#))
            .mount(&server)
            .await;

        let error = perform_transfer(&test_client(&jar), &jar, &transfer, STEAMID).await.unwrap_err();

        assert!(matches!(error, Error::Login(LoginError::Transfer { reason, .. }) if reason == "Fail"));
    }

    #[tokio::test]
    async fn transfers_session_to_every_url() {
        let server = MockServer::start().await;
        let jar = Arc::new(Jar::default());
        let mut store = transfer_to(&server);

        store.url = format!("{}/store/login/settoken", server.uri());

        Mock::given(method("POST"))
            .and(path("/login/settoken"))
            .respond_with(ResponseTemplate::new(200)
                .insert_header("set-cookie", "steamLoginSecure=76561198080179568%7C%7Ceyj.token; Path=/")
                .set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/store/login/settoken"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let finalized = FinalizedLogin {
            steamid: STEAMID,
            transfer_info: vec![transfer_to(&server), store],
        };
        let error = transfer_session(&test_client(&jar), &jar, &finalized).await.unwrap_err();

        assert!(matches!(error, Error::Login(LoginError::Transfer { url, .. }) if url.ends_with("/store/login/settoken")));
    }
}
