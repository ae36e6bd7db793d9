use super::SteamClient;
use crate::enums::Domain;
use crate::error::{Error, ParameterError, Result};
use crate::helpers::{check_eresult, get_eresult_header, get_error_message_header, parses_response};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;

/// The credential a Steam Web API request is authenticated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WebApiAuth {
    /// The access token of the session, sent as `access_token`.
    #[default]
    AccessToken,
    /// The Steam Web API key, sent as `key`.
    ApiKey,
}

impl SteamClient {
    /// Calls a Steam Web API method, e.g. `/IEconService/GetTradeOffersSummary/v1`.
    ///
    /// `params` go in the query string of GET requests and in the form body of other requests.
    /// A `403` means the credential was rejected, which is [`Error::SessionExpired`] when the
    /// access token has expired. A non-OK result in the `x-eresult` header is an
    /// [`Error::EResult`].
    pub async fn call_web_api<T>(
        &self,
        method: Method,
        pathname: &str,
        params: &[(&str, &str)],
        auth: WebApiAuth,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let uri = Domain::Api.get_url(pathname);

        self.send_web_api_request(method, &uri, params, auth).await
    }

    async fn send_web_api_request<T>(
        &self,
        method: Method,
        uri: &str,
        params: &[(&str, &str)],
        auth: WebApiAuth,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let credential = match auth {
            WebApiAuth::AccessToken => ("access_token", self.access_token().ok_or(Error::NotLoggedIn)?),
            WebApiAuth::ApiKey => ("key", self.api_key().ok_or(ParameterError::NoApiKey)?),
        };
        let request = self.client.request(method.clone(), uri)
            .query(&[credential]);
        let request = if method == Method::GET {
            request.query(params)
        } else {
            request.form(params)
        };
        let response = request.send().await?;

        if response.status() == StatusCode::FORBIDDEN {
            return Err(match auth {
                WebApiAuth::AccessToken if self.is_access_token_expired() => Error::SessionExpired,
                WebApiAuth::AccessToken => Error::UnexpectedResponse("Access token is invalid".into()),
                WebApiAuth::ApiKey => Error::UnexpectedResponse("Steam Web API key is invalid".into()),
            });
        }

        if let Some(eresult) = get_eresult_header(&response) {
            let message = get_error_message_header(&response)
                .filter(|message| !message.is_empty());

            check_eresult(eresult, message, &format!("Failed to make {method} request to {uri}"))?;
        }

        parses_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EResult;
    use crate::jwt::tests::make_token;
    use serde_json::Value;
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const STEAMID: u64 = 76561198080179568;

    fn logged_in_client(exp: u64) -> (SteamClient, String) {
        let client = SteamClient::builder().build().unwrap();
        let token = make_token(STEAMID, exp, &["web", "web:community"]);

        client.set_cookies(vec![format!("steamLoginSecure={STEAMID}%7C%7C{token}")]).unwrap();
        (client, token)
    }

    #[tokio::test]
    async fn calls_with_api_key() {
        let server = MockServer::start().await;
        let client = SteamClient::builder().api_key("0123456789ABCDEF").build().unwrap();

        Mock::given(method("GET"))
            .and(path("/ISteamUser/GetPlayerSummaries/v2"))
            .and(query_param("key", "0123456789ABCDEF"))
            .and(query_param("steamids", "76561198080179568"))
            .respond_with(ResponseTemplate::new(200)
                .insert_header("x-eresult", "1")
                .set_body_string(r#"{"response":{"players":[]}}"#))
            .expect(1)
            .mount(&server)
            .await;

        let uri = format!("{}/ISteamUser/GetPlayerSummaries/v2", server.uri());
        let body: Value = client.send_web_api_request(
            Method::GET,
            &uri,
            &[("steamids", "76561198080179568")],
            WebApiAuth::ApiKey,
        ).await.unwrap();

        assert_eq!(body["response"]["players"], Value::Array(Vec::new()));
    }

    #[tokio::test]
    async fn posts_form_with_access_token() {
        let server = MockServer::start().await;
        let (client, token) = logged_in_client(u64::MAX / 2);

        Mock::given(method("POST"))
            .and(path("/IEconService/DeclineTradeOffer/v1"))
            .and(query_param("access_token", token.as_str()))
            .and(body_string_contains("tradeofferid=5921049232"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"response":{}}"#))
            .expect(1)
            .mount(&server)
            .await;

        let uri = format!("{}/IEconService/DeclineTradeOffer/v1", server.uri());
        let body: Value = client.send_web_api_request(
            Method::POST,
            &uri,
            &[("tradeofferid", "5921049232")],
            WebApiAuth::AccessToken,
        ).await.unwrap();

        assert!(body["response"].is_object());
    }

    #[tokio::test]
    async fn forbidden_with_expired_token_is_session_expired() {
        let server = MockServer::start().await;
        let (client, _token) = logged_in_client(100000);

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let uri = format!("{}/IEconService/GetTradeOffersSummary/v1", server.uri());
        let result = client.send_web_api_request::<Value>(Method::GET, &uri, &[], WebApiAuth::AccessToken).await;

        assert!(matches!(result, Err(Error::SessionExpired)));
    }

    #[tokio::test]
    async fn forbidden_with_api_key_is_invalid_key() {
        let server = MockServer::start().await;
        let client = SteamClient::builder().api_key("0123456789ABCDEF").build().unwrap();

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let uri = format!("{}/IEconService/GetTradeOffersSummary/v1", server.uri());
        let result = client.send_web_api_request::<Value>(Method::GET, &uri, &[], WebApiAuth::ApiKey).await;

        assert!(matches!(result, Err(Error::UnexpectedResponse(message)) if message.contains("API key")));
    }

    #[tokio::test]
    async fn reads_eresult_header() {
        let server = MockServer::start().await;
        let (client, _token) = logged_in_client(u64::MAX / 2);

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200)
                .insert_header("x-eresult", "15")
                .set_body_string("{}"))
            .mount(&server)
            .await;

        let uri = format!("{}/IEconService/GetTradeOffersSummary/v1", server.uri());
        let result = client.send_web_api_request::<Value>(Method::GET, &uri, &[], WebApiAuth::AccessToken).await;

        assert!(matches!(result, Err(Error::EResult { eresult: EResult::AccessDenied, .. })));
    }

    #[tokio::test]
    async fn requires_credential() {
        let client = SteamClient::builder().build().unwrap();

        assert!(matches!(
            client.call_web_api::<Value>(Method::GET, "/ISteamUser/GetPlayerSummaries/v2", &[], WebApiAuth::ApiKey).await,
            Err(Error::Parameter(ParameterError::NoApiKey)),
        ));
        assert!(matches!(
            client.call_web_api::<Value>(Method::GET, "/ISteamUser/GetPlayerSummaries/v2", &[], WebApiAuth::AccessToken).await,
            Err(Error::NotLoggedIn),
        ));
    }
}
