/*
 * Responsibility
 * - Config読み込み → 依存生成 → Router 組み立て
 * - Middleware の適用 (HTTP/CORS/security headers/credential)
 * - axum::serve() で起動
 */
use std::{panic, process, sync::Arc};

use anyhow::Result;
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::middleware::{cors, http, security_headers};
use crate::services::credential::CredentialResolver;
use crate::{api, config::Config, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,admin_credentials=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // stderr can be hidden depending on how the process is launched
        tracing::error!(?info, "panic");

        // development: fail fast
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;

    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        cookie = %config.admin_token_cookie,
        "starting admin credential service in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_state(config: &Config) -> AppState {
    let credentials = CredentialResolver::new(config.admin_token_cookie.clone());
    AppState::new(Arc::new(credentials))
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state);

    let router = security_headers::apply(router);
    let router = cors::apply(router, config);
    http::apply(router, config)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppEnv;

    fn test_config(cookie: &str) -> Config {
        Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            admin_token_cookie: cookie.to_string(),
            request_timeout: Duration::from_secs(5),
            request_body_limit_bytes: 1024,
        }
    }

    fn app() -> Router {
        app_with_cookie("admin_token")
    }

    fn app_with_cookie(cookie: &str) -> Router {
        let config = test_config(cookie);
        build_router(build_state(&config), &config)
    }

    fn get(uri: &str, headers: &[(header::HeaderName, &str)]) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body(res: Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    async fn session_of(headers: &[(header::HeaderName, &str)]) -> Value {
        let res = app()
            .oneshot(get("/api/v1/session", headers))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        json_body(res).await
    }

    #[tokio::test]
    async fn health_is_ok() {
        let res = app().oneshot(get("/api/v1/health", &[])).await.unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert!(res.headers().contains_key("x-request-id"));
        assert_eq!(res.headers()["x-content-type-options"], "nosniff");
        assert_eq!(res.headers()["cache-control"], "no-store");
        assert_eq!(json_body(res).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn incoming_request_id_is_propagated() {
        let res = app()
            .oneshot(get(
                "/api/v1/health",
                &[(header::HeaderName::from_static("x-request-id"), "req-42")],
            ))
            .await
            .unwrap();

        assert_eq!(res.headers()["x-request-id"], "req-42");
    }

    #[tokio::test]
    async fn session_reports_bearer_header() {
        let body = session_of(&[(header::AUTHORIZATION, "Bearer abc123")]).await;

        assert_eq!(body, json!({ "authenticated": true, "source": "header" }));
    }

    #[tokio::test]
    async fn session_reports_cookie() {
        let body = session_of(&[(header::COOKIE, "theme=dark; admin_token=xyz789")]).await;

        assert_eq!(body, json!({ "authenticated": true, "source": "cookie" }));
    }

    #[tokio::test]
    async fn session_without_credential_is_anonymous() {
        let body = session_of(&[]).await;

        assert_eq!(body, json!({ "authenticated": false, "source": null }));
    }

    #[tokio::test]
    async fn session_prefers_header_over_cookie() {
        let body = session_of(&[
            (header::AUTHORIZATION, "Bearer A"),
            (header::COOKIE, "admin_token=B"),
        ])
        .await;

        assert_eq!(body["source"], "header");
    }

    #[tokio::test]
    async fn lowercase_scheme_falls_back_to_cookie() {
        let body = session_of(&[
            (header::AUTHORIZATION, "bearer A"),
            (header::COOKIE, "admin_token=B"),
        ])
        .await;

        assert_eq!(body, json!({ "authenticated": true, "source": "cookie" }));
    }

    #[tokio::test]
    async fn empty_bearer_is_present_but_not_authenticated() {
        let body = session_of(&[
            (header::AUTHORIZATION, "Bearer "),
            (header::COOKIE, "admin_token=B"),
        ])
        .await;

        assert_eq!(body, json!({ "authenticated": false, "source": "header" }));
    }

    #[tokio::test]
    async fn session_never_echoes_the_token() {
        let res = app()
            .oneshot(get(
                "/api/v1/session",
                &[(header::AUTHORIZATION, "Bearer very-secret-value")],
            ))
            .await
            .unwrap();
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
            .await
            .unwrap();

        assert!(!String::from_utf8_lossy(&bytes).contains("very-secret-value"));
    }

    #[tokio::test]
    async fn admin_ping_rejects_anonymous() {
        let res = app().oneshot(get("/api/v1/admin/ping", &[])).await.unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(json_body(res).await["error"]["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn admin_ping_rejects_empty_token() {
        let res = app()
            .oneshot(get("/api/v1/admin/ping", &[(header::AUTHORIZATION, "Bearer ")]))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_ping_rejects_empty_cookie() {
        let res = app()
            .oneshot(get("/api/v1/admin/ping", &[(header::COOKIE, "admin_token=")]))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_ping_accepts_cookie_token() {
        let res = app()
            .oneshot(get("/api/v1/admin/ping", &[(header::COOKIE, "admin_token=xyz789")]))
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            json_body(res).await,
            json!({ "status": "ok", "source": "cookie" })
        );
    }

    #[tokio::test]
    async fn configured_cookie_name_is_honoured() {
        let res = app_with_cookie("panel_token")
            .oneshot(get(
                "/api/v1/session",
                &[(header::COOKIE, "admin_token=old; panel_token=new")],
            ))
            .await
            .unwrap();

        assert_eq!(
            json_body(res).await,
            json!({ "authenticated": true, "source": "cookie" })
        );
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let res = app().oneshot(get("/api/v1/nope", &[])).await.unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
