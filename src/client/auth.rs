use super::SteamClient;
use crate::cookies::{self, LOGIN_SECURE_COOKIE};
use crate::enums::{Domain, EResult};
use crate::error::{Error, ParameterError, Result};
use crate::helpers::{check_eresult, check_response, parses_response, parses_text};
use crate::login;
use crate::types::CookieMap;
use std::sync::atomic::Ordering;
use reqwest::header;
use serde::Deserialize;

impl SteamClient {
    /// Logs in to the community, store and help domains using the credentials and shared secret.
    ///
    /// `init_session` fetches the community page first to obtain a session ID. Set it to `false`
    /// when requests were already made with this client.
    pub async fn login(&self, init_session: bool) -> Result<()> {
        let username = self.username.as_deref()
            .ok_or(ParameterError::NoUsername)?;
        let password = self.password.as_deref()
            .ok_or(ParameterError::NoPassword)?;

        if init_session {
            let response = self.client.get(Domain::Community.url())
                .send()
                .await?;

            check_response(response).await?;
        }

        let session = login::begin_auth_session(
            &self.client,
            username,
            password,
            &self.user_agent,
        ).await?;

        if session.requires_no_guard() {
            log::debug!("Account has no Steam Guard, skipping code");
        } else {
            let code = self.steam_guard_code()?;

            login::update_with_steam_guard_code(&self.client, &session, &code).await?;
        }

        let refresh_token = login::poll_auth_session(&self.client, &session).await?;
        let sessionid = self.session_id_or_generate();
        let finalized = login::finalize_login(&self.client, &refresh_token, &sessionid).await?;

        for domain in Domain::COOKIE_DOMAINS {
            cookies::remove_cookie(&self.cookies, domain, LOGIN_SECURE_COOKIE);
        }

        login::transfer_session(&self.client, &self.cookies, &finalized).await?;

        self.steamid.store(finalized.steamid, Ordering::Relaxed);
        self.set_refresh_token(Some(refresh_token));
        self.update_session_from_cookies()?;
        log::debug!("Logged in as {}", finalized.steamid);

        Ok(())
    }

    /// Logs out of the community and clears the session.
    pub async fn logout(&self) -> Result<()> {
        let sessionid = self.session_id()
            .ok_or(Error::NotLoggedIn)?;
        let uri = Domain::Community.get_url("/login/logout/");
        let response = self.client.post(&uri)
            .header(header::REFERER, Domain::Community.get_url("/"))
            .form(&[("sessionid", sessionid.as_str())])
            .send()
            .await?;

        // Steam redirects to the home page.
        if !response.status().is_success() && !response.status().is_redirection() {
            return Err(Error::Http(response.status()));
        }

        self.clear_session();

        Ok(())
    }

    /// Checks whether the session is alive by looking for the account on the community page.
    pub async fn is_session_alive(&self) -> Result<bool> {
        let response = self.client.get(Domain::Community.url())
            .send()
            .await?;
        let body = match parses_text(response).await {
            Ok(body) => body,
            Err(Error::NotLoggedIn) => return Ok(false),
            Err(error) => return Err(error),
        };

        Ok(is_logged_in_page(&body, self.username.as_deref(), self.steamid.load(Ordering::Relaxed)))
    }

    /// Restores a session from exported cookies. When the session is no longer alive, logs in
    /// again.
    ///
    /// Returns `true` when the cookies were still valid.
    pub async fn restore_session(&self, cookies: &CookieMap) -> Result<bool> {
        self.import_cookies(cookies);

        if self.steamid.load(Ordering::Relaxed) != 0 && self.is_session_alive().await? {
            log::debug!("Restored session is alive");
            return Ok(true);
        }

        log::debug!("Restored session is dead, logging in");
        self.login(false).await?;

        Ok(false)
    }

    /// Gets the access token for the store domain. `None` when the store domain is not logged in.
    pub async fn get_store_access_token(&self) -> Result<Option<String>> {
        #[derive(Deserialize)]
        struct AsyncConfigResponse {
            success: EResult,
            #[serde(default)]
            data: serde_json::Value,
        }

        let uri = Domain::Store.get_url("/pointssummary/ajaxgetasyncconfig");
        let response = self.client.get(&uri)
            .send()
            .await?;
        let body: AsyncConfigResponse = parses_response(response).await?;

        check_eresult(body.success, None, "Failed to fetch store access token")?;

        Ok(body.data
            .get("webapi_token")
            .and_then(|token| token.as_str())
            .map(String::from))
    }
}

/// Whether a community page was served to a logged in user.
fn is_logged_in_page(body: &str, username: Option<&str>, steamid: u64) -> bool {
    if let Some(username) = username {
        return body.contains(username);
    }

    steamid != 0 && body.contains(&format!("g_steamID = \"{steamid}\""))
}
