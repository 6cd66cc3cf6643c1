use axum::{middleware::from_fn, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{logging_middleware, metrics_middleware};
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Chat API
        .nest("/api/v1", v1::create_v1_router())
        .with_state(state)
        .layer(from_fn(logging_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::domain::document::{ApiDocument, InMemoryDocumentSource};
    use crate::domain::llm::MockLlmProvider;
    use crate::domain::session::SessionStore;
    use crate::infrastructure::services::{ChatAssistantConfig, ChatAssistantService};
    use crate::infrastructure::session::InMemorySessionStore;

    fn app(documents: Vec<ApiDocument>, reply: &str) -> Router {
        let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let assistant = ChatAssistantService::new(
            Arc::new(MockLlmProvider::new("mock").with_reply(reply)),
            Arc::new(InMemoryDocumentSource::new(documents)),
            sessions.clone(),
            ChatAssistantConfig::default(),
        );
        create_router(AppState::new(Arc::new(assistant), sessions))
    }

    fn products() -> Vec<ApiDocument> {
        vec![ApiDocument::new("GET", "/api/v1/products").with_summary("상품 목록 조회")]
    }

    fn post_chat(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_reply_and_links() {
        let app = app(products(), "`/api/v1/products` 로 상품 목록을 조회합니다.");

        let response = app
            .oneshot(post_chat(json!({ "message": "상품 목록 API" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        let body = body_json(response).await;
        assert!(!body["sessionId"].as_str().unwrap().is_empty());
        assert_eq!(body["reply"], "`/api/v1/products` 로 상품 목록을 조회합니다.");
        assert_eq!(body["links"][0]["url"], "http://localhost:8080/api/v1/products");
        assert_eq!(body["links"][0]["method"], "GET");
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let app = app(products(), "unused");

        let response = app
            .oneshot(post_chat(json!({ "sessionId": "s-1", "message": "   " })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["param"], "message");
        assert_eq!(body["error"]["type"], "invalid_request_error");
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let app = app(products(), "unused");
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/chat")
            .header("content-type", "application/json")
            .body(Body::from("{\"message\":"))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_no_documents_reply_is_still_ok() {
        let app = app(vec![], "unused");

        let response = app
            .oneshot(post_chat(json!({ "message": "상품" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["reply"], "죄송합니다. 현재 등록된 API 문서가 없습니다.");
        assert_eq!(body["links"], json!([]));
    }

    #[tokio::test]
    async fn test_session_history_after_chat() {
        let app = app(products(), "안내드립니다.");

        let response = app
            .clone()
            .oneshot(post_chat(json!({ "sessionId": "s-1", "message": "안녕하세요" })))
            .await
            .unwrap();
        assert_eq!(body_json(response).await["sessionId"], "s-1");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/chat/sessions/s-1/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["sessionId"], "s-1");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "안녕하세요");
        assert_eq!(body["messages"][1]["role"], "assistant");
        assert!(body["messages"][1]["createdAt"].is_string());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app = app(products(), "unused");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/chat/sessions/missing/messages")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_ready_is_degraded_without_documents() {
        let app = app(vec![], "unused");

        let response = app
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "degraded");
        assert_eq!(body["checks"][0]["name"], "documents");
    }

    #[tokio::test]
    async fn test_health_and_live() {
        let app = app(products(), "unused");

        let health = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(health.status(), StatusCode::OK);

        let live = app
            .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(live.status(), StatusCode::OK);
    }
}
