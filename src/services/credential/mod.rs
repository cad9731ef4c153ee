/*
 * Responsibility
 * - リクエストから admin 用の認証トークンを解決する (header → cookie → 不在)
 * - axum/HTTP への依存は sources に閉じ込め、resolver は副作用なしに保つ
 *
 * Public API:
 * - CredentialResolver
 * - HeaderSource / CookieSource (+ RequestCookies)
 * - AccessToken / CredentialSource
 */
mod resolver;
mod sources;
mod types;

pub use resolver::{CredentialResolver, DEFAULT_COOKIE_NAME, bearer_token};
pub use sources::{CookieSource, CookieSourceError, HeaderSource, RequestCookies};
pub use types::{AccessToken, CredentialSource};
