//! admin credential 解決 → AdminCredential を extensions に入れる
//!
//! - `Authorization: Bearer <token>` → `admin_token` cookie → 不在、の順で解決する
//! - 不在でも拒否しない (未認証として extensions に入れる)。拒否するかは extractor 側で決める
//! - トークンの検証 (署名/期限など) はここではしない

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AdminCredential;
use crate::error::AppError;
use crate::services::credential::{AccessToken, RequestCookies};
use crate::state::AppState;

/// `/api/v1/*` に credential 解決を掛ける。
///
/// 例：
/// ```ignore
/// let v1 = Router::new().route("/session", get(session));
/// let v1 = middleware::auth::credential::apply(v1, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    router.layer(middleware::from_fn_with_state(state, credential_middleware))
}

async fn credential_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let cookies = RequestCookies::from_headers(req.headers());

    let token = match state.credentials.resolve(req.headers(), &cookies).await {
        Ok(token) => token,
        Err(err) => {
            tracing::warn!(error = ?err, "cookie source failure");
            return Err(err.into());
        }
    };

    // never log the token value
    tracing::debug!(
        source = ?token.as_ref().map(AccessToken::source),
        "admin credential resolved"
    );

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AdminCredential::new(token));

    Ok(next.run(req).await)
}
