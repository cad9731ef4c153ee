use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::credential::AccessToken;
use crate::state::AppState;

use super::AdminCredential;

/// Handler で AdminCredential (不在を含む) を受け取るための extractor
/// credential middleware が extensions に insert 済みである前提
/// 見つからない場合は middleware 未設定なので 500
pub struct AdminCredentialExtractor(pub AdminCredential);

impl FromRequestParts<AppState> for AdminCredentialExtractor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        lookup(parts).map(AdminCredentialExtractor)
    }
}

/// 空でないトークンを要求する extractor
/// 不在・空文字はどちらも 401
pub struct RequireAdminToken(pub AccessToken);

impl FromRequestParts<AppState> for RequireAdminToken {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        lookup(parts)?
            .into_token()
            .filter(|t| !t.is_empty())
            .map(RequireAdminToken)
            .ok_or(AppError::Unauthorized)
    }
}

fn lookup(parts: &Parts) -> Result<AdminCredential, AppError> {
    parts
        .extensions
        .get::<AdminCredential>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("AdminCredential missing; credential middleware is not applied");
            AppError::Internal
        })
}
