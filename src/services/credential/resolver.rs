//! Admin credential resolution.
//!
//! Precedence is fixed:
//! 1. `Authorization: Bearer <token>` (literal, case-sensitive `"Bearer "` prefix)
//! 2. the admin token cookie
//! 3. absent
//!
//! Absence is a normal outcome (an unauthenticated request), never an error.
//! Only a fault in the cookie accessor itself surfaces as `Err`.

use super::sources::{CookieSource, CookieSourceError, HeaderSource};
use super::types::{AccessToken, CredentialSource};

pub const DEFAULT_COOKIE_NAME: &str = "admin_token";

const AUTHORIZATION: &str = "authorization";
const BEARER_PREFIX: &str = "Bearer ";

/// Returns the text after a literal `"Bearer "` prefix.
///
/// `"Bearer "` on its own yields `Some("")`. Lowercase schemes and other
/// whitespace after `Bearer` do not match.
pub fn bearer_token(value: &str) -> Option<&str> {
    value.strip_prefix(BEARER_PREFIX)
}

/// Stateless resolver shared by every request.
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    cookie_name: String,
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new(DEFAULT_COOKIE_NAME)
    }
}

impl CredentialResolver {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// Resolve the credential carried by a request.
    ///
    /// - `Ok(Some(_))`: token from the header, or from the cookie when the header gave none
    /// - `Ok(None)`: neither source carries a credential
    /// - `Err(_)`: the cookie accessor failed (passed through unchanged)
    ///
    /// The cookie source is not consulted once the header yields a token.
    pub async fn resolve<H, C>(
        &self,
        headers: &H,
        cookies: &C,
    ) -> Result<Option<AccessToken>, CookieSourceError>
    where
        H: HeaderSource + Sync + ?Sized,
        C: CookieSource + ?Sized,
    {
        if let Some(token) = headers.header(AUTHORIZATION).and_then(bearer_token) {
            return Ok(Some(AccessToken::new(token, CredentialSource::Header)));
        }

        let token = cookies.cookie(&self.cookie_name).await?;

        Ok(token.map(|v| AccessToken::new(v, CredentialSource::Cookie)))
    }
}
