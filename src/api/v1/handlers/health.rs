/*
 * Responsibility
 * - GET /health (疎通用)
 * - credential middleware を通さない唯一のルート
 */
use axum::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
