/*
 * Responsibility
 * - URL 構造を定義
 * - GET /health のみ。それ以外の path は axum 既定の 404、
 *   /health への GET 以外は 405 に任せる
 */
use axum::{Router, routing::get};

use crate::api::handlers::health::health;

pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{Body, to_bytes},
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::routes;

    async fn send(method: Method, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let res = routes().oneshot(req).await.unwrap();
        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let body = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn get_health_returns_ok_json() {
        let (status, content_type, body) = send(Method::GET, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn repeated_requests_are_byte_identical() {
        let (_, _, first) = send(Method::GET, "/health").await;
        let (_, _, second) = send(Method::GET, "/health").await;

        assert_eq!(first, br#"{"status":"ok"}"#);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let (status, _, _) = send(Method::GET, "/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn other_methods_on_health_are_rejected() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let (status, _, _) = send(method.clone(), "/health").await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED, "{method}");
        }
    }
}
