/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は credential 解決を通さない
 * - /session, /admin/ping は credential middleware を通す (拒否するかは extractor 次第)
 */
use axum::{Router, routing::get};

use crate::middleware::auth::credential;
use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    session::{admin_ping, session},
};

pub fn routes(state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/session", get(session))
        .route("/admin/ping", get(admin_ping));

    Router::new()
        .route("/health", get(health))
        .merge(credential::apply(authenticated, state))
}
