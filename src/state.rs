/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - ex: credentials: CredentialResolver
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::credential::CredentialResolver;

#[derive(Clone, Debug)]
pub struct AppState {
    pub credentials: Arc<CredentialResolver>,
}

impl AppState {
    pub fn new(credentials: Arc<CredentialResolver>) -> Self {
        Self { credentials }
    }
}
