//! Mobile confirmations.
//!
//! Every request is signed with a key generated from the identity secret for a tag naming the
//! action. Steam rejects a key reused for the same tag within a second so key generation is
//! throttled per tag.

mod operation;
mod response;

pub use operation::Operation;
pub use response::{Confirmation, ConfirmationDetails};

use crate::SteamClient;
use crate::enums::{ConfirmationType, Domain, EResult};
use crate::error::{Error, ParameterError, Result};
use crate::guard::{generate_confirmation_key, get_device_id, ConfirmationTag};
use crate::helpers::{check_eresult, check_response, parse_body, MOBILE_REQUESTED_WITH};
use crate::ids::create_ident_code;
use crate::types::{AppId, AssetId, ContextId, ListingId, TradeOfferId};
use lazy_regex::regex_captures;
use serde::Deserialize;

type QueryParams = Vec<(&'static str, String)>;

#[derive(Deserialize)]
struct GetConfirmationsResponse {
    #[serde(default)]
    success: Option<EResult>,
    #[serde(default)]
    needauth: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    conf: Vec<Confirmation>,
}

#[derive(Deserialize)]
struct ConfirmationDetailsResponse {
    #[serde(default)]
    success: Option<EResult>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    html: String,
}

#[derive(Deserialize)]
struct SendConfirmationResponse {
    success: EResult,
    #[serde(default)]
    message: Option<String>,
}

fn parse_confirmations(body: &[u8]) -> Result<Vec<Confirmation>> {
    let body: GetConfirmationsResponse = parse_body(body)?;
    let success = body.success.unwrap_or(EResult::Fail);

    if !success.is_ok() && body.needauth {
        return Err(Error::SessionExpired);
    }

    check_eresult(success, body.message, "Failed to fetch confirmations")?;

    Ok(body.conf)
}

fn parse_confirmation_details(body: &[u8]) -> Result<ConfirmationDetails> {
    let body: ConfirmationDetailsResponse = parse_body(body)?;

    check_eresult(
        body.success.unwrap_or(EResult::Fail),
        body.message,
        "Failed to fetch confirmation details",
    )?;

    let (_, item_info) = regex_captures!(r#"'confiteminfo', (?P<item_info>.+), UserYou"#, &body.html)
        .ok_or_else(|| Error::UnexpectedResponse("No item info in confirmation details".into()))?;
    let details = serde_json::from_str(item_info)?;

    Ok(details)
}

fn parse_send_confirmation(body: &[u8]) -> Result<()> {
    let body: SendConfirmationResponse = parse_body(body)?;

    if !body.success.is_ok() {
        return Err(Error::ConfirmationUnsuccessful(body.message));
    }

    Ok(())
}

fn find_confirmation(
    confirmations: Vec<Confirmation>,
    creator_id: u64,
) -> Result<Confirmation> {
    confirmations
        .into_iter()
        .find(|confirmation| confirmation.creator_id == creator_id)
        .ok_or_else(|| Error::NoConfirmation(creator_id.to_string()))
}

impl SteamClient {
    async fn get_confirmation_query_params(
        &self,
        tag: ConfirmationTag,
    ) -> Result<QueryParams> {
        let steamid = u64::from(self.get_steamid()?);
        let identity_secret = self.identity_secret.as_deref()
            .ok_or(ParameterError::NoIdentitySecret)?;

        self.key_throttle.wait(tag).await;

        let time = self.steam_time();
        let key = generate_confirmation_key(identity_secret, tag, time)?;

        Ok(vec![
            ("p", get_device_id(steamid)),
            ("a", steamid.to_string()),
            ("k", key),
            ("t", time.to_string()),
            ("m", "react".into()),
            ("tag", tag.to_string()),
        ])
    }

    /// Gets the pending confirmations.
    pub async fn get_confirmations(&self) -> Result<Vec<Confirmation>> {
        let uri = Domain::Community.get_url("/mobileconf/getlist");
        let query = self.get_confirmation_query_params(ConfirmationTag::List).await?;
        let response = self.client.get(&uri)
            .header("X-Requested-With", MOBILE_REQUESTED_WITH)
            .query(&query)
            .send()
            .await?;
        let body = check_response(response).await?;

        parse_confirmations(&body)
    }

    /// Gets the item of a market listing confirmation.
    pub async fn get_confirmation_details(
        &self,
        id: u64,
    ) -> Result<ConfirmationDetails> {
        let uri = Domain::Community.get_url(&format!("/mobileconf/details/{id}"));
        let query = self.get_confirmation_query_params(ConfirmationTag::Details(id)).await?;
        let response = self.client.get(&uri)
            .header("X-Requested-With", MOBILE_REQUESTED_WITH)
            .query(&query)
            .send()
            .await?;
        let body = check_response(response).await?;

        parse_confirmation_details(&body)
    }

    /// Gets the confirmation created by `creator_id`, which is a trade offer ID, market listing ID
    /// or API key request ID.
    pub async fn get_confirmation(
        &self,
        creator_id: u64,
    ) -> Result<Confirmation> {
        let confirmations = self.get_confirmations().await?;

        find_confirmation(confirmations, creator_id)
    }

    /// Allows or cancels a confirmation.
    pub async fn send_confirmation(
        &self,
        confirmation: &Confirmation,
        operation: Operation,
    ) -> Result<()> {
        let mut query = self.get_confirmation_query_params(operation.tag()).await?;

        query.push(("op", operation.to_string()));
        query.push(("cid", confirmation.id.to_string()));
        query.push(("ck", confirmation.nonce.to_string()));

        let uri = Domain::Community.get_url("/mobileconf/ajaxop");
        let response = self.client.get(&uri)
            .header("X-Requested-With", MOBILE_REQUESTED_WITH)
            .query(&query)
            .send()
            .await?;
        let body = check_response(response).await?;

        parse_send_confirmation(&body)?;
        log::debug!("Sent {operation} for confirmation {}", confirmation.id);

        Ok(())
    }

    /// Accepts a confirmation.
    pub async fn accept_confirmation(
        &self,
        confirmation: &Confirmation,
    ) -> Result<()> {
        self.send_confirmation(confirmation, Operation::Allow).await
    }

    /// Cancels a confirmation.
    pub async fn cancel_confirmation(
        &self,
        confirmation: &Confirmation,
    ) -> Result<()> {
        self.send_confirmation(confirmation, Operation::Cancel).await
    }

    /// Allows or cancels multiple confirmations in one request.
    pub async fn send_multiple_confirmations(
        &self,
        confirmations: &[Confirmation],
        operation: Operation,
    ) -> Result<()> {
        if confirmations.is_empty() {
            return Ok(());
        }

        let mut form = self.get_confirmation_query_params(operation.tag()).await?;

        form.push(("op", operation.to_string()));

        for confirmation in confirmations {
            form.push(("cid[]", confirmation.id.to_string()));
            form.push(("ck[]", confirmation.nonce.to_string()));
        }

        let uri = Domain::Community.get_url("/mobileconf/multiajaxop");
        let response = self.client.post(&uri)
            .header("X-Requested-With", MOBILE_REQUESTED_WITH)
            .form(&form)
            .send()
            .await?;
        let body = check_response(response).await?;

        parse_send_confirmation(&body)?;
        log::debug!("Sent {operation} for {} confirmations", confirmations.len());

        Ok(())
    }

    /// Accepts every pending confirmation. Returns the accepted confirmations.
    pub async fn accept_all_confirmations(&self) -> Result<Vec<Confirmation>> {
        let confirmations = self.get_confirmations().await?;

        self.send_multiple_confirmations(&confirmations, Operation::Allow).await?;

        Ok(confirmations)
    }

    async fn accept_confirmation_for(
        &self,
        creator_id: u64,
    ) -> Result<Confirmation> {
        let confirmation = self.get_confirmation(creator_id).await?;

        self.accept_confirmation(&confirmation).await?;

        Ok(confirmation)
    }

    /// Accepts the confirmation for a trade offer.
    pub async fn confirm_trade_offer(
        &self,
        trade_offer_id: TradeOfferId,
    ) -> Result<Confirmation> {
        self.accept_confirmation_for(trade_offer_id).await
    }

    /// Accepts the confirmation for a market listing.
    pub async fn confirm_sell_listing(
        &self,
        listing_id: ListingId,
    ) -> Result<Confirmation> {
        self.accept_confirmation_for(listing_id).await
    }

    /// Accepts the confirmation for the market listing of an asset. The details of each listing
    /// confirmation are fetched to find the asset.
    pub async fn confirm_sell_listing_by_asset(
        &self,
        appid: AppId,
        contextid: ContextId,
        assetid: AssetId,
    ) -> Result<Confirmation> {
        let ident_code = create_ident_code(assetid, appid, Some(contextid));
        let listings = self.get_confirmations().await?
            .into_iter()
            .filter(|confirmation| confirmation.r#type == ConfirmationType::MarketListing);

        for confirmation in listings {
            let details = self.get_confirmation_details(confirmation.id).await?;

            if details.ident_code() == ident_code {
                self.accept_confirmation(&confirmation).await?;
                return Ok(confirmation);
            }
        }

        Err(Error::NoConfirmation(ident_code))
    }

    /// Accepts the confirmation for a Web API key request.
    pub async fn confirm_api_key_request(
        &self,
        request_id: u64,
    ) -> Result<Confirmation> {
        self.accept_confirmation_for(request_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_confirmations() {
        let confirmations = parse_confirmations(include_bytes!("fixtures/getlist.json")).unwrap();

        assert_eq!(confirmations.len(), 3);
        assert_eq!(confirmations[0].r#type, ConfirmationType::Trade);
        assert_eq!(confirmations[1].r#type, ConfirmationType::MarketListing);
        assert!(confirmations[1].multi);
        assert_eq!(confirmations[2].r#type, ConfirmationType::ApiKey);
        assert_eq!(confirmations[2].icon, None);
    }

    #[test]
    fn needauth_is_session_expired() {
        let error = parse_confirmations(include_bytes!("fixtures/needauth.json")).unwrap_err();

        assert!(matches!(error, Error::SessionExpired));
    }

    #[test]
    fn failed_list_is_eresult_error() {
        let error = parse_confirmations(br#"{"success":false,"message":"Invalid authenticator"}"#).unwrap_err();

        assert!(matches!(
            error,
            Error::EResult { eresult: EResult::Fail, message } if message == "Invalid authenticator",
        ));
    }

    #[test]
    fn empty_list_has_no_confirmations() {
        let confirmations = parse_confirmations(br#"{"success":true,"conf":[]}"#).unwrap();

        assert!(confirmations.is_empty());
    }

    #[test]
    fn parses_confirmation_details() {
        let details = parse_confirmation_details(include_bytes!("fixtures/details.json")).unwrap();

        assert_eq!(details.appid, 440);
        assert_eq!(details.contextid, 2);
        assert_eq!(details.assetid, 13177318154);
        assert_eq!(details.market_hash_name.as_deref(), Some("Mann Co. Supply Crate Key"));
        assert_eq!(details.ident_code(), "13177318154_440_2");
    }

    #[test]
    fn details_without_item_info() {
        let error = parse_confirmation_details(br#"{"success":true,"html":"<div></div>"}"#).unwrap_err();

        assert!(matches!(error, Error::UnexpectedResponse(_)));
    }

    #[test]
    fn parses_send_confirmation() {
        assert!(parse_send_confirmation(br#"{"success":true}"#).is_ok());
        assert!(matches!(
            parse_send_confirmation(br#"{"success":false,"message":"Invalid nonce"}"#),
            Err(Error::ConfirmationUnsuccessful(Some(message))) if message == "Invalid nonce",
        ));
        assert!(matches!(
            parse_send_confirmation(br#"{"success":false}"#),
            Err(Error::ConfirmationUnsuccessful(None)),
        ));
    }

    #[test]
    fn finds_confirmation_by_creator_id() {
        let confirmations = parse_confirmations(include_bytes!("fixtures/getlist.json")).unwrap();
        let confirmation = find_confirmation(confirmations.clone(), 4372610829071538210).unwrap();

        assert_eq!(confirmation.id, 13799612201);
        assert!(matches!(
            find_confirmation(confirmations, 1),
            Err(Error::NoConfirmation(key)) if key == "1",
        ));
    }

    #[test]
    fn operations_use_their_own_tag() {
        assert_eq!(Operation::Allow.tag(), ConfirmationTag::Allow);
        assert_eq!(Operation::Cancel.to_string(), "cancel");
    }

    #[tokio::test]
    async fn query_params_require_identity_secret() {
        let client = SteamClient::builder()
            .steamid(76561198080179568)
            .build()
            .unwrap();

        assert!(matches!(
            client.get_confirmation_query_params(ConfirmationTag::List).await,
            Err(Error::Parameter(ParameterError::NoIdentitySecret)),
        ));
    }

    #[tokio::test]
    async fn builds_query_params() {
        let client = SteamClient::builder()
            .steamid(76561198080179568)
            .identity_secret("itqR9l2GgVpG7cZgV5nlGNeuINE=")
            .build()
            .unwrap();
        let query = client.get_confirmation_query_params(ConfirmationTag::Details(42)).await.unwrap();
        let names = query.iter().map(|(name, _)| *name).collect::<Vec<_>>();

        assert_eq!(names, ["p", "a", "k", "t", "m", "tag"]);
        assert_eq!(query[1].1, "76561198080179568");
        assert_eq!(query[4].1, "react");
        assert_eq!(query[5].1, "details42");
    }
}
