//! One-time flash notices carried across a redirect in a cookie.
//!
//! The redirecting handler sets the cookie; the next rendered page reads it
//! through the [`IncomingFlash`] extractor and clears it.

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts},
};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Serialize;
use std::convert::Infallible;

pub const FLASH_COOKIE: &str = "pdfdata_flash";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Info,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashLevel::Info => "info",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "info" => Some(FlashLevel::Info),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            message: message.into(),
        }
    }

    /// `Set-Cookie` value carrying this notice.
    pub fn to_set_cookie(&self) -> String {
        format!(
            "{}={}:{}; Path=/; HttpOnly; SameSite=Lax",
            FLASH_COOKIE,
            self.level.as_str(),
            utf8_percent_encode(&self.message, NON_ALPHANUMERIC)
        )
    }

    fn from_cookie_value(value: &str) -> Option<Self> {
        let (level, encoded) = value.split_once(':')?;
        let level = FlashLevel::parse(level)?;
        let message = percent_decode_str(encoded).decode_utf8().ok()?.into_owned();
        Some(Self { level, message })
    }
}

/// `Set-Cookie` value that expires the flash cookie.
pub fn clear_flash_cookie() -> String {
    format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        FLASH_COOKIE
    )
}

/// The flash notice sent by the browser, if any. Malformed cookies are ignored.
#[derive(Clone, Debug, Default)]
pub struct IncomingFlash(pub Option<FlashMessage>);

impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let message = parts
            .headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|cookies| cookies.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| FlashMessage::from_cookie_value(value));

        Ok(IncomingFlash(message))
    }
}
