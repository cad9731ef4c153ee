/*
 * Responsibility
 * - モジュール構成の公開 (main.rs とテストから使う)
 * - 旧来の import alias 相当はこのモジュールパスそのもの
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
