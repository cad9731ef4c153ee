/*
 * Responsibility
 * - GET /session: 解決済み credential の有無と出どころを返す (トークン自体は返さない)
 * - GET /admin/ping: 空でないトークンを要求する保護ルートの疎通用
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::{AdminCredentialExtractor, RequireAdminToken};
use crate::services::credential::CredentialSource;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub source: Option<CredentialSource>,
}

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub source: CredentialSource,
}

pub async fn session(
    AdminCredentialExtractor(credential): AdminCredentialExtractor,
) -> Json<SessionResponse> {
    Json(SessionResponse {
        authenticated: credential.usable_token().is_some(),
        source: credential.source(),
    })
}

pub async fn admin_ping(RequireAdminToken(token): RequireAdminToken) -> Json<PingResponse> {
    Json(PingResponse {
        status: "ok",
        source: token.source(),
    })
}
