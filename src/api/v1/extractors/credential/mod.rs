/*!
 * Admin credential extractors
 *
 * Responsibility:
 * - 解決済みの credential (AdminCredential) を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AdminCredential
 * - AdminCredentialExtractor
 * - RequireAdminToken
 */

mod core;
mod types;

pub use self::core::{AdminCredentialExtractor, RequireAdminToken};
pub use types::AdminCredential;
