/*
 * Responsibility
 * - Handler から見える「解決済み credential」の型
 * - middleware が request extensions に格納し、handler/extractor はこの型だけを見る
 *
 * Notes
 * - 不在 (None) も正常な結果。未認証リクエストとして扱う
 * - 空文字トークン (`Bearer ` / `admin_token=`) は Some("") のまま保持する
 */
use crate::services::credential::{AccessToken, CredentialSource};

#[derive(Debug, Clone)]
pub struct AdminCredential {
    token: Option<AccessToken>,
}

impl AdminCredential {
    pub fn new(token: Option<AccessToken>) -> Self {
        Self { token }
    }

    pub fn source(&self) -> Option<CredentialSource> {
        self.token.as_ref().map(AccessToken::source)
    }

    /// A present, non-empty token. Empty tokens count as unauthenticated.
    pub fn usable_token(&self) -> Option<&AccessToken> {
        self.token.as_ref().filter(|t| !t.is_empty())
    }

    pub fn into_token(self) -> Option<AccessToken> {
        self.token
    }
}
