//! REST API layer: route handlers, DTOs, and router composition.
//!
//! Endpoints mount at the root, exactly as the API table lists them.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

#[cfg(test)]
#[allow(clippy::panic, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, Response, StatusCode};
    use tower::ServiceExt;

    use super::build_router;
    use crate::app_state::AppState;
    use crate::persistence::Connector;
    use crate::service::PersonaService;

    // Port 1 never hosts PostgreSQL; every store round-trip is refused
    // immediately, which is exactly what these router-level tests need.
    fn app() -> Router {
        let service = PersonaService::new(Connector::new("postgres://u:p@127.0.0.1:1/none"));
        build_router().with_state(AppState {
            persona_service: Arc::new(service),
        })
    }

    async fn send(request: Request<Body>) -> Response<Body> {
        let Ok(response) = app().oneshot(request).await else {
            panic!("request failed");
        };
        response
    }

    fn get(uri: &str) -> Request<Body> {
        let Ok(request) = Request::builder().uri(uri).body(Body::empty()) else {
            panic!("request build failed");
        };
        request
    }

    fn post_json(uri: &str, body: &'static str) -> Request<Body> {
        let Ok(request) = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
        else {
            panic!("request build failed");
        };
        request
    }

    async fn body_json(response: Response<Body>) -> serde_json::Value {
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), 64 * 1024).await else {
            panic!("failed to read body");
        };
        match serde_json::from_slice(&bytes) {
            Ok(json) => json,
            Err(e) => panic!("body is not JSON: {e}"),
        }
    }

    #[tokio::test]
    async fn health_answers_200_even_when_store_is_unreachable() {
        let response = send(get("/health")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["database"], "unreachable");
    }

    #[tokio::test]
    async fn list_surfaces_store_failure_as_500() {
        let response = send(get("/personas/")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], 3002);
    }

    #[tokio::test]
    async fn create_surfaces_store_failure_with_structured_body() {
        let response = send(post_json(
            "/personas/",
            r#"{"nombre": "Ana", "apellido": "Gomez"}"#,
        ))
        .await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], 3002);
        assert!(json["error"]["message"].is_string());
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = send(get("/nope")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn wrong_method_on_member_route_is_405() {
        let response = send(post_json("/personas/5", "{}")).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn malformed_json_body_is_a_client_error() {
        let response = send(post_json("/personas/", "{not json")).await;
        assert!(response.status().is_client_error());
    }
}
