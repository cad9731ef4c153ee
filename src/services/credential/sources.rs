//! Request accessors used by the credential resolver.
//!
//! The resolver never touches axum types directly. It reads headers through
//! `HeaderSource` and cookies through `CookieSource`, so tests can hand it plain maps.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::{HeaderMap, header};
use cookie::Cookie;
use thiserror::Error;

/// Read access to request headers. Lookups are case-insensitive on the name.
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for HeaderMap {
    // First value wins when the header is repeated.
    // Any UTF-8 value is accepted; only invalid UTF-8 reads as missing.
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
    }
}

/// Faults raised by the environment while reading cookies.
///
/// The resolver passes these through unchanged; it has no failure modes of its own.
#[derive(Debug, Error)]
pub enum CookieSourceError {
    #[error("cookie store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to request-scoped cookies.
///
/// Access may suspend while the hosting runtime makes request state available.
#[async_trait]
pub trait CookieSource: Send + Sync {
    async fn cookie(&self, name: &str) -> Result<Option<String>, CookieSourceError>;
}

/// Cookies carried by one request, parsed from its `Cookie` headers.
///
/// Malformed pairs are skipped, including pairs with bytes that are not UTF-8; the
/// rest of the header is still read. When a name repeats, the first occurrence wins.
/// Values are kept raw: no unquoting and no percent-decoding.
#[derive(Debug, Clone, Default)]
pub struct RequestCookies {
    pairs: Vec<(String, String)>,
}

impl RequestCookies {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let pairs = headers
            .get_all(header::COOKIE)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .flat_map(|v| Cookie::split_parse(v))
            .filter_map(Result::ok)
            // U+FFFD marks bytes that were not UTF-8
            .filter(|c| !c.name().contains(char::REPLACEMENT_CHARACTER))
            .filter(|c| !c.value().contains(char::REPLACEMENT_CHARACTER))
            .map(|c| (c.name().to_owned(), c.value().to_owned()))
            .collect();

        Self { pairs }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

}

#[async_trait]
impl CookieSource for RequestCookies {
    async fn cookie(&self, name: &str) -> Result<Option<String>, CookieSourceError> {
        Ok(self.get(name).map(str::to_owned))
    }
}

#[async_trait]
impl CookieSource for HashMap<String, String> {
    async fn cookie(&self, name: &str) -> Result<Option<String>, CookieSourceError> {
        Ok(self.get(name).cloned())
    }
}
