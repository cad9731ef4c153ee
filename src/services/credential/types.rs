/*
 * Responsibility
 * - resolver が返す「トークン」の型 (AccessToken) と、その出どころ (CredentialSource)
 * - トークン値は opaque な文字列として扱い、ここでは検証しない
 */
use serde::Serialize;

/// Where a credential was found on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialSource {
    /// `Authorization: Bearer <token>`
    Header,
    /// The admin token cookie.
    Cookie,
}

/// An opaque credential string taken from an inbound request.
///
/// - The value may be empty (`Authorization: Bearer ` or `admin_token=`); callers that
///   authorize on it must reject that case themselves.
/// - Derived fresh per request. Never cached.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    source: CredentialSource,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, source: CredentialSource) -> Self {
        Self {
            value: value.into(),
            source,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> CredentialSource {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print the token itself
        f.debug_struct("AccessToken")
            .field("source", &self.source)
            .field("len", &self.value.len())
            .finish()
    }
}
