//! Account pages: the Web API key, trade URL, wallet and signing in to other sites through Steam.

mod wallet;

pub use wallet::WalletInfo;

use crate::SteamClient;
use crate::client::{read_lock, write_lock};
use crate::enums::{Domain, EResult};
use crate::error::{Error, ParseHtmlError, Result};
use crate::helpers::{check_eresult, parses_response, parses_text};
use crate::ids::steamid_to_account_id;
use crate::serialize;
use lazy_regex::{regex_captures, regex_is_match};
use reqwest::header;
use scraper::{Html, Selector};
use serde::Deserialize;
use url::Url;

const NO_API_KEY: &str = "This account does not have an API key";

/// Reads the API key from the `/dev/apikey` page. `None` when no key is registered.
fn parse_api_key_page(html: &str) -> Result<Option<String>> {
    if html.contains("You must have a validated email address to create a Steam Web API key") {
        return Err(ParseHtmlError::Response("A validated email address is required to create a Steam Web API key".into()).into());
    }

    if regex_is_match!(r#"Your account requires (<a [^>]+>)?Steam Guard Mobile Authenticator"#, html) {
        return Err(ParseHtmlError::Response("Steam Guard Mobile Authenticator is required".into()).into());
    }

    let fragment = Html::parse_document(html);
    let heading_selector = Selector::parse("#mainContents h2")
        .map_err(|_error| ParseHtmlError::ParseSelector)?;
    let key_selector = Selector::parse("#bodyContents_ex p")
        .map_err(|_error| ParseHtmlError::ParseSelector)?;

    if let Some(element) = fragment.select(&heading_selector).next() {
        if element.text().collect::<String>().trim() == "Access Denied" {
            return Err(ParseHtmlError::Response("Access to the Steam Web API key page is denied".into()).into());
        }
    }

    let api_key = fragment
        .select(&key_selector)
        .map(|element| element.text().collect::<String>())
        .find_map(|text| {
            text.trim()
                .strip_prefix("Key: ")
                .filter(|key| !key.is_empty() && key.chars().all(|c| c.is_ascii_hexdigit()))
                .map(String::from)
        });

    Ok(api_key)
}

fn parse_trade_token(html: &str) -> Option<String> {
    regex_captures!(r#"\d+&token=(?P<token>[^"]+)" readonly"#, html)
        .map(|(_, token)| token.to_string())
}

fn parse_wallet_info(html: &str) -> Result<WalletInfo> {
    let (_, info) = regex_captures!(r#"g_rgWalletInfo = (?P<info>.+);"#, html)
        .ok_or(ParseHtmlError::Malformed("No wallet info in page"))?;
    let info: WalletInfo = serde_json::from_str(info)?;

    check_eresult(info.success, None, "Failed to fetch wallet info")?;

    Ok(info)
}

/// The fields of the form Steam shows when signing in to another site.
#[derive(Debug, PartialEq, Eq)]
struct OpenIdForm {
    action: String,
    mode: String,
    params: String,
    nonce: String,
}

fn parse_openid_form(html: &str) -> Result<OpenIdForm> {
    let document = Html::parse_document(html);
    let value_of = |selector: &str| -> Result<String> {
        let selector = Selector::parse(selector)
            .map_err(|_error| ParseHtmlError::ParseSelector)?;
        let value = document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("value"))
            .ok_or(ParseHtmlError::Malformed("Missing OpenID form field"))?;

        Ok(value.to_string())
    };

    Ok(OpenIdForm {
        action: value_of("#openidForm #actionInput")?,
        mode: value_of(r#"#openidForm [name="openid.mode"]"#)?,
        params: value_of(r#"#openidForm [name="openidparams"]"#)?,
        nonce: value_of(r#"#openidForm [name="nonce"]"#)?,
    })
}

impl SteamClient {
    fn profile_url(&self, pathname: &str) -> Result<String> {
        let steamid = u64::from(self.get_steamid()?);

        Ok(Domain::Community.get_url(&format!("/profiles/{steamid}{pathname}")))
    }

    /// The cached Web API key.
    pub fn api_key(&self) -> Option<String> {
        read_lock(&self.api_key).clone()
    }

    /// Gets the Web API key of the account. Fails when the account has no key.
    pub async fn get_api_key(&self) -> Result<String> {
        let uri = Domain::Community.get_url("/dev/apikey");
        let response = self.client.get(&uri)
            .query(&[("l", "english")])
            .send()
            .await?;
        let html = parses_text(response).await?;
        let api_key = parse_api_key_page(&html)?
            .ok_or(ParseHtmlError::Malformed(NO_API_KEY))?;

        *write_lock(&self.api_key) = Some(api_key.clone());

        Ok(api_key)
    }

    /// Revokes the Web API key of the account.
    pub async fn revoke_api_key(&self) -> Result<()> {
        let sessionid = self.session_id().ok_or(Error::NotLoggedIn)?;
        let uri = Domain::Community.get_url("/dev/revokekey");
        let response = self.client.post(&uri)
            .form(&[
                ("sessionid", sessionid.as_str()),
                ("Revoke", "Revoke My Steam Web API Key"),
            ])
            .send()
            .await?;

        parses_text(response).await?;
        *write_lock(&self.api_key) = None;

        Ok(())
    }

    /// Registers a new Web API key for `domain`, revoking the old one. The request is confirmed
    /// through mobile confirmations when Steam asks for it, which needs the identity secret.
    ///
    /// By calling this method you are agreeing to the
    /// [Steam Web API Terms of Use](https://steamcommunity.com/dev/apiterms).
    pub async fn register_api_key(&self, domain: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct RequestKeyResponse {
            success: EResult,
            #[serde(default)]
            requires_confirmation: Option<serde_json::Value>,
            #[serde(default, deserialize_with = "serialize::option_number_or_string::deserialize")]
            request_id: Option<u64>,
            #[serde(default)]
            api_key: Option<String>,
            #[serde(default)]
            message: Option<String>,
        }

        self.revoke_api_key().await?;

        let sessionid = self.session_id().ok_or(Error::NotLoggedIn)?;
        let uri = Domain::Community.get_url("/dev/requestkey");
        let mut request_id = 0;

        loop {
            let request_id_str = request_id.to_string();
            let response = self.client.post(&uri)
                .form(&[
                    ("domain", domain),
                    ("request_id", request_id_str.as_str()),
                    ("sessionid", sessionid.as_str()),
                    ("agreeToTerms", "true"),
                ])
                .send()
                .await?;
            let body: RequestKeyResponse = parses_response(response).await?;
            let requires_confirmation = body.requires_confirmation
                .is_some_and(|value| value.as_bool().unwrap_or(false) || value.as_u64().unwrap_or(0) != 0);

            match (body.success, requires_confirmation, body.request_id) {
                (EResult::Pending, true, Some(id)) if request_id == 0 => {
                    log::debug!("Web API key request {id} requires confirmation");
                    self.confirm_api_key_request(id).await?;
                    request_id = id;
                },
                (success, _, _) => {
                    check_eresult(success, body.message, "Failed to register Steam Web API key")?;

                    let api_key = body.api_key
                        .filter(|api_key| !api_key.is_empty())
                        .ok_or_else(|| Error::UnexpectedResponse("No API key in response".into()))?;

                    *write_lock(&self.api_key) = Some(api_key.clone());

                    return Ok(api_key);
                },
            }
        }
    }

    /// The cached trade token.
    pub fn trade_token(&self) -> Option<String> {
        read_lock(&self.trade_token).clone()
    }

    /// The trade URL of the account. Needs the trade token.
    pub fn trade_url(&self) -> Option<String> {
        let token = self.trade_token()?;
        let steamid = u64::from(self.get_steamid().ok()?);
        let account_id = steamid_to_account_id(steamid).to_string();
        let url = Url::parse_with_params(
            &Domain::Community.get_url("/tradeoffer/new/"),
            &[("partner", account_id.as_str()), ("token", token.as_str())],
        ).ok()?;

        Some(url.into())
    }

    /// Gets the trade token from the trade offer privacy page.
    pub async fn get_trade_token(&self) -> Result<Option<String>> {
        let uri = self.profile_url("/tradeoffers/privacy")?;
        let response = self.client.get(&uri)
            .send()
            .await?;
        let html = parses_text(response).await?;
        let token = parse_trade_token(&html);

        if token.is_some() {
            *write_lock(&self.trade_token) = token.clone();
        }

        Ok(token)
    }

    /// Creates a new trade URL, invalidating the old one. Returns the new trade URL.
    pub async fn register_trade_url(&self) -> Result<String> {
        let uri = self.profile_url("/tradeoffers/newtradeurl")?;
        let sessionid = self.session_id().ok_or(Error::NotLoggedIn)?;
        let response = self.client.post(&uri)
            .form(&[("sessionid", sessionid.as_str())])
            .send()
            .await?;
        let token: String = parses_response(response).await?;

        *write_lock(&self.trade_token) = Some(token);

        self.trade_url()
            .ok_or_else(|| Error::UnexpectedResponse("Trade URL could not be built".into()))
    }

    /// Gets the wallet of the account from the inventory page.
    pub async fn get_wallet_info(&self) -> Result<WalletInfo> {
        let profile_url = self.profile_url("")?;
        let uri = self.profile_url("/inventory")?;
        let response = self.client.get(&uri)
            .header(header::REFERER, profile_url)
            .send()
            .await?;
        let html = parses_text(response).await?;

        parse_wallet_info(&html)
    }

    /// Signs in to a site through Steam. `auth_url` is the site's page that redirects to the Steam
    /// sign in page. Returns the URL the site redirected back to.
    pub async fn login_to_third_party(&self, auth_url: &str) -> Result<String> {
        let response = self.client.get(auth_url)
            .send()
            .await?;
        let html = parses_text(response).await?;
        let form = parse_openid_form(&html)?;
        let uri = Domain::Community.get_url("/openid/login");
        let response = self.client.post(&uri)
            .form(&[
                ("action", form.action.as_str()),
                ("openid.mode", form.mode.as_str()),
                ("openidparams", form.params.as_str()),
                ("nonce", form.nonce.as_str()),
            ])
            .send()
            .await?;
        let url = response.url().to_string();

        parses_text(response).await?;
        log::debug!("Signed in through Steam to {url}");

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_key() {
        let api_key = parse_api_key_page(include_str!("fixtures/apikey.html")).unwrap();

        assert_eq!(api_key.as_deref(), Some("0123456789ABCDEF0123456789ABCDEF"));
    }

    #[test]
    fn parses_page_without_api_key() {
        let api_key = parse_api_key_page(include_str!("fixtures/apikey_none.html")).unwrap();

        assert_eq!(api_key, None);
    }

    #[test]
    fn api_key_page_access_denied() {
        let html = r#"<div id="mainContents"><h2>Access Denied</h2></div>"#;

        assert!(matches!(
            parse_api_key_page(html),
            Err(Error::ParseHtml(ParseHtmlError::Response(_))),
        ));
    }

    #[test]
    fn api_key_page_requires_authenticator() {
        let html = r#"<p>Your account requires <a href="https://help.steampowered.com">Steam Guard Mobile Authenticator</a> to access this page.</p>"#;

        assert!(matches!(
            parse_api_key_page(html),
            Err(Error::ParseHtml(ParseHtmlError::Response(message))) if message.contains("Authenticator"),
        ));
    }

    #[test]
    fn parses_trade_token() {
        let html = r#"<input class="trade_offer_access_url" id="trade_offer_access_url" value="https://steamcommunity.com/tradeoffer/new/?partner=119913840&token=fB4rJ-Xk" readonly>"#;

        assert_eq!(parse_trade_token(html).as_deref(), Some("fB4rJ-Xk"));
        assert_eq!(parse_trade_token("<html></html>"), None);
    }

    #[test]
    fn parses_wallet_info() {
        let html = r#"<script>var g_rgWalletInfo = {"wallet_currency":1,"wallet_country":"US","wallet_state":"","wallet_fee":"1","wallet_balance":"1234","wallet_delayed_balance":"0","wallet_max_balance":"200000","success":1,"rwgrsn":-2};</script>"#;
        let info = parse_wallet_info(html).unwrap();

        assert_eq!(info.wallet_currency, 1);
        assert_eq!(info.wallet_country, "US");
        assert_eq!(info.balance(), 1234);
        assert_eq!(info.wallet_max_balance, Some(200000));
    }

    #[test]
    fn wallet_info_failure() {
        let html = r#"g_rgWalletInfo = {"success":false};"#;

        assert!(matches!(parse_wallet_info(html), Err(Error::EResult { eresult: EResult::Fail, .. })));
        assert!(matches!(parse_wallet_info("<html></html>"), Err(Error::ParseHtml(_))));
    }

    #[test]
    fn parses_openid_form() {
        let form = parse_openid_form(include_str!("fixtures/openid.html")).unwrap();

        assert_eq!(form, OpenIdForm {
            action: "steam_openid_login".into(),
            mode: "checkid_setup".into(),
            params: "eyJvcGVuaWQubW9kZSI6ImNoZWNraWRfc2V0dXAifQ==".into(),
            nonce: "5d8e1f2a3b4c6d7e".into(),
        });
    }

    #[test]
    fn openid_form_missing() {
        assert!(matches!(
            parse_openid_form("<html><body></body></html>"),
            Err(Error::ParseHtml(ParseHtmlError::Malformed(_))),
        ));
    }

    #[test]
    fn builds_trade_url() {
        let client = SteamClient::builder()
            .steamid(76561198080179568)
            .trade_token("fB4rJ-Xk")
            .build()
            .unwrap();

        assert_eq!(
            client.trade_url().as_deref(),
            Some("https://steamcommunity.com/tradeoffer/new/?partner=119913840&token=fB4rJ-Xk"),
        );
    }
}
