use crate::error::SetCookiesError;
use crate::helpers::generate_sessionid;
use crate::cookies::{SESSIONID_COOKIE, LOGIN_SECURE_COOKIE, split_login_secure};

/// Session data from cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// The session ID.
    pub sessionid: String,
    /// The access token from the `steamLoginSecure` cookie.
    pub access_token: String,
    /// The Steam ID of the user.
    pub steamid: u64,
}

/// Reads the session from a list of cookie strings such as `"sessionid=abc"`. A session ID is
/// generated and appended to `cookies` when it is missing.
pub fn get_session_from_cookies(
    cookies: &mut Vec<String>,
) -> Result<Session, SetCookiesError> {
    let mut sessionid = None;
    let mut login_secure = None;

    for cookie in cookies.iter() {
        let (name, value) = match cookie.split_once('=') {
            Some((name, value)) => (name.trim(), value),
            None => continue,
        };
        // Drop attributes like "; Path=/".
        let value = value.split(';').next().unwrap_or_default().trim();

        if name == SESSIONID_COOKIE {
            sessionid = Some(value.to_string());
        } else if name == LOGIN_SECURE_COOKIE {
            login_secure = Some(value.to_string());
        }
    }

    let login_secure = login_secure.ok_or(SetCookiesError::MissingLoginCookie)?;
    let (steamid, access_token) = split_login_secure(&login_secure)
        .ok_or(SetCookiesError::MalformedLoginCookie)?;
    let steamid = steamid.parse::<u64>()?;
    let sessionid = match sessionid {
        Some(sessionid) => sessionid,
        None => {
            let sessionid = generate_sessionid();

            cookies.push(format!("{SESSIONID_COOKIE}={sessionid}"));
            sessionid
        },
    };

    Ok(Session {
        sessionid,
        access_token: access_token.to_string(),
        steamid,
    })
}
