//! Security-related response headers.
//!
//! Applied at the Router level. Handlers may still set their own value for any of
//! these; the layer only fills in what is missing.

use axum::Router;
use axum::http::header::{HeaderName, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

const DEFAULTS: &[(&str, &str)] = &[
    // Clickjacking (legacy + modern)
    ("x-frame-options", "DENY"),
    ("content-security-policy", "frame-ancestors 'none'"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "no-referrer"),
    ("permissions-policy", "camera=(), microphone=(), geolocation=()"),
    // Responses depend on the caller's credential
    ("cache-control", "no-store"),
];

pub fn apply(router: Router) -> Router {
    DEFAULTS.iter().fold(router, |router, &(name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}
