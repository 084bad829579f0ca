//! One-shot status messages.
//!
//! A handler attaches a [`Flash`] to the redirect it answers with. The message travels in the
//! `flash` cookie as `<level>:<url-encoded text>`; the next page rendered reads it and
//! clears the cookie in the same response, so every message is shown exactly once.
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use std::fmt::{self, Display, Formatter};

pub const FLASH_COOKIE: &str = "flash";

const COOKIE_ATTRIBUTES: &str = "Path=/; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Success,
    Error,
    Info,
}

impl Level {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Level::Success),
            "error" => Some(Level::Error),
            "info" => Some(Level::Info),
            _ => None,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Level::Success => write!(f, "success"),
            Level::Error => write!(f, "error"),
            Level::Info => write!(f, "info"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: Level,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Level::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Level::Info, message)
    }

    fn new(level: Level, message: impl Into<String>) -> Self {
        Flash {
            level,
            message: message.into(),
        }
    }

    /// `Set-Cookie` value carrying this message
    #[must_use]
    pub fn to_cookie(&self) -> String {
        format!(
            "{FLASH_COOKIE}={}:{}; {COOKIE_ATTRIBUTES}",
            self.level,
            urlencoding::encode(&self.message)
        )
    }

    /// Answers with `303 See Other` to `location`, carrying this message along.
    pub fn redirect(self, location: &str) -> Response {
        ([(SET_COOKIE, self.to_cookie())], Redirect::to(location)).into_response()
    }

    /// Picks the message out of the `Cookie` headers of a request. A cookie that cannot be
    /// decoded is ignored.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| Self::decode(value))
    }

    fn decode(value: &str) -> Option<Self> {
        let (level, message) = value.split_once(':')?;
        let level = Level::parse(level)?;
        let message = urlencoding::decode(message).ok()?.into_owned();
        Some(Flash { level, message })
    }
}

/// `Set-Cookie` value removing the message once it has been shown
#[must_use]
pub fn clear_cookie() -> String {
    format!("{FLASH_COOKIE}=; Max-Age=0; {COOKIE_ATTRIBUTES}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;
    use axum::http::{HeaderValue, StatusCode};

    fn headers_with_cookie(cookie: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_str(cookie).unwrap());
        headers
    }

    #[test]
    fn test_cookie_carries_level_and_encoded_message() {
        let cookie = Flash::info("Сотрудник удалён!").to_cookie();
        assert!(cookie.starts_with("flash=info:%D0%A1"));
        assert!(cookie.ends_with("; Path=/; HttpOnly; SameSite=Lax"));
    }

    #[test]
    fn test_message_survives_the_cookie() {
        let flash = Flash::error("Заполните все поля!");
        let cookie = flash.to_cookie();
        let pair = cookie.split(';').next().unwrap();

        let headers = headers_with_cookie(&format!("theme=dark; {pair}"));
        assert_eq!(Flash::from_headers(&headers), Some(flash));
    }

    #[test]
    fn test_unknown_or_missing_cookie_is_ignored() {
        assert_eq!(Flash::from_headers(&HeaderMap::new()), None);
        assert_eq!(
            Flash::from_headers(&headers_with_cookie("flash=panic:boom")),
            None
        );
        assert_eq!(
            Flash::from_headers(&headers_with_cookie("flash=")),
            None
        );
        assert_eq!(
            Flash::from_headers(&headers_with_cookie("other=success:x")),
            None
        );
    }

    #[test]
    fn test_redirect_is_see_other_with_cookie() {
        let response = Flash::success("Отпуск добавлен!").redirect("/employee/3");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/employee/3");
        assert!(response.headers()[SET_COOKIE]
            .to_str()
            .unwrap()
            .starts_with("flash=success:"));
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        assert!(clear_cookie().starts_with("flash=; Max-Age=0"));
    }
}
