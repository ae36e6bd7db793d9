//! Reading and writing Steam cookies in a [`Jar`].
//!
//! [`Jar`] has no API for enumerating or deleting cookies so values are read back through the
//! `Cookie` header it would send for a domain, and cookies are removed by overwriting them with
//! an expired one.

use crate::enums::Domain;
use crate::types::CookieMap;
use reqwest::cookie::{CookieStore, Jar};
use url::Url;

/// The session ID cookie. Must be sent as a form field with most POST requests.
pub const SESSIONID_COOKIE: &str = "sessionid";
/// The login cookie. Its value is `{steamid}||{access_token}`.
pub const LOGIN_SECURE_COOKIE: &str = "steamLoginSecure";
/// The language cookie.
pub const LANGUAGE_COOKIE: &str = "Steam_Language";
/// The timezone offset cookie, e.g. `"3600,0"`.
pub const TIMEZONE_OFFSET_COOKIE: &str = "timezoneOffset";

/// Splits a `steamLoginSecure` value into the SteamID and access token.
pub fn split_login_secure(value: &str) -> Option<(&str, &str)> {
    value.split_once("%7C%7C")
        .or_else(|| value.split_once("||"))
        .filter(|(steamid, token)| !steamid.is_empty() && !token.is_empty())
}

/// Parses a `Cookie` header value into name/value pairs.
pub fn parse_cookie_header(header: &str) -> Vec<(&str, &str)> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .collect()
}

/// The cookies which would be sent to `domain` as `"name=value"` strings.
pub fn get_cookies(
    jar: &Jar,
    domain: Domain,
) -> Vec<String> {
    jar.cookies(&domain.url())
        .and_then(|header| header.to_str().ok().map(String::from))
        .map(|header| {
            parse_cookie_header(&header)
                .into_iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect()
        })
        .unwrap_or_default()
}

/// Gets the value of cookie `name` for `domain`.
pub fn get_cookie_value(
    jar: &Jar,
    domain: Domain,
    name: &str,
) -> Option<String> {
    get_cookie_value_for_url(jar, &domain.url(), name)
}

/// Gets the value of cookie `name` which would be sent to `url`.
pub fn get_cookie_value_for_url(
    jar: &Jar,
    url: &Url,
    name: &str,
) -> Option<String> {
    let header = jar.cookies(url)?;
    let header = header.to_str().ok()?;

    parse_cookie_header(header)
        .into_iter()
        .find(|(cookie_name, _)| *cookie_name == name)
        .map(|(_, value)| value.to_string())
}

/// Sets cookie `name` for `domain`. Cookies are secure and sent cross-site as Steam's own are.
pub fn set_cookie(
    jar: &Jar,
    domain: Domain,
    name: &str,
    value: &str,
) {
    set_cookie_for_url(jar, &domain.url(), name, value);
}

/// Sets cookie `name` for the host of `url`. Only cookies for https URLs are marked secure.
pub fn set_cookie_for_url(
    jar: &Jar,
    url: &Url,
    name: &str,
    value: &str,
) {
    let cookie = if url.scheme() == "https" {
        format!("{name}={value}; Path=/; Secure; SameSite=None")
    } else {
        format!("{name}={value}; Path=/")
    };

    jar.add_cookie_str(&cookie, url);
}

/// Removes cookie `name` from `domain`.
pub fn remove_cookie(
    jar: &Jar,
    domain: Domain,
    name: &str,
) {
    let cookie = format!("{name}=; Path=/; Secure; Max-Age=0");

    jar.add_cookie_str(&cookie, &domain.url());
}

/// Exports the cookies for every cookie-holding domain keyed by hostname.
pub fn export_cookies(jar: &Jar) -> CookieMap {
    Domain::COOKIE_DOMAINS
        .into_iter()
        .filter_map(|domain| {
            let cookies = get_cookies(jar, domain);

            if cookies.is_empty() {
                None
            } else {
                Some((domain.hostname().to_string(), cookies))
            }
        })
        .collect()
}

/// Imports cookies exported with [`export_cookies`]. Unknown hostnames are skipped.
pub fn import_cookies(
    jar: &Jar,
    cookies: &CookieMap,
) {
    for (hostname, cookies) in cookies {
        let domain = match Domain::from_hostname(hostname) {
            Some(domain) => domain,
            None => {
                log::warn!("Skipping cookies for unknown hostname {hostname}");
                continue;
            },
        };

        for cookie in cookies {
            let name_value = cookie.split(';').next().unwrap_or_default();

            if let Some((name, value)) = name_value.split_once('=') {
                set_cookie(jar, domain, name.trim(), value.trim());
            }
        }
    }
}
