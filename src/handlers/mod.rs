//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod categories;
pub mod health;
pub mod problems;
pub mod real_world_examples;
pub mod solutions;

use std::time::Duration;

use axum::{
    http::{HeaderValue, StatusCode},
    middleware, Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    constants::{API_BASE_PATH, DEFAULT_REQUEST_TIMEOUT_SECS, MAX_REQUEST_BODY_SIZE},
    middleware::logging_middleware,
    state::AppState,
};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/categories", categories::routes())
        .nest("/problems", problems::routes())
        .nest("/solutions", solutions::routes())
        .nest("/real-world-examples", real_world_examples::routes())
}

/// Build the full application router with its middleware stack
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().server.cors_allowed_origins);

    Router::new()
        .nest(API_BASE_PATH, routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        ))
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_SIZE))
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// CORS for the configured origins; `*` opens it to any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(allowed)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::test_utils::test_app::{create_offline_app, create_test_app};

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn solution_body(time: &str, space: &str) -> Value {
        json!({
            "problem_id": "6f1c2a1e-8a3b-4a57-9a49-2d1c4b8f0e11",
            "name": "Two pointers",
            "language": "python",
            "code": "def solve(xs): ...",
            "time_complexity": time,
            "space_complexity": space,
        })
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/api/v1/health").body(Body::empty()).unwrap();
        let (status, body) = send(create_offline_app(), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(body["uptime_secs"].is_u64());
    }

    #[tokio::test]
    async fn test_readiness_reports_database_down() {
        let request = Request::get("/api/v1/health/ready")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(create_offline_app(), request).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
        assert_eq!(body["database"], "down");
    }

    #[tokio::test]
    async fn test_attach_rejects_unsupported_time_complexity() {
        let request = post_json("/api/v1/solutions", solution_body("O(m)", "O(1)"));
        let (status, body) = send(create_offline_app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_COMPLEXITY");
        assert_eq!(body["error"]["details"]["notation"], "O(m)");
    }

    #[tokio::test]
    async fn test_attach_rejects_sentinel_as_notation() {
        let request = post_json("/api/v1/solutions", solution_body("O(n)", "NA"));
        let (status, body) = send(create_offline_app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNSUPPORTED_COMPLEXITY");
    }

    #[tokio::test]
    async fn test_attach_rejects_invalid_language() {
        let mut body = solution_body("O(n)", "O(1)");
        body["language"] = json!("rust; drop");

        let (status, body) = send(create_offline_app(), post_json("/api/v1/solutions", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_category_rejects_empty_name() {
        let request = post_json("/api/v1/categories", json!({ "name": "" }));
        let (status, body) = send(create_offline_app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_list_rejects_page_zero() {
        let request = Request::get("/api/v1/problems?page=0")
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(create_offline_app(), request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_INPUT");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let request = Request::get("/api/v1/contests").body(Body::empty()).unwrap();
        let (status, _) = send(create_offline_app(), request).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_attach_over_http_updates_problem() {
        let (app, _pool) = create_test_app().await;

        let (status, problem) = send(
            app.clone(),
            post_json(
                "/api/v1/problems",
                json!({ "title": "Longest Substring", "statement": "No repeating characters." }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(problem["best_time_complexity"], "NA");

        let problem_id = problem["id"].as_str().unwrap().to_string();
        let mut body = solution_body("O(n)", "O(n)");
        body["problem_id"] = json!(problem_id);

        let (status, attached) = send(app.clone(), post_json("/api/v1/solutions", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(attached["best_changed"], true);
        assert_eq!(attached["best_complexity"]["time"], "O(n)");
        assert_eq!(attached["solution"]["time_class"], "linear");

        let request = Request::get(format!("/api/v1/problems/{}", problem_id))
            .body(Body::empty())
            .unwrap();
        let (status, fetched) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(fetched["best_time_complexity"], "O(n)");
        assert_eq!(fetched["best_space_complexity"], "O(n)");
        assert_eq!(fetched["solutions"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    #[ignore = "requires Docker"]
    async fn test_duplicate_category_over_http_conflicts() {
        let (app, _pool) = create_test_app().await;
        let body = json!({ "name": format!("Sliding Window {}", uuid::Uuid::new_v4()) });

        let (status, _) = send(app.clone(), post_json("/api/v1/categories", body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, error) = send(app, post_json("/api/v1/categories", body)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(error["error"]["code"], "ALREADY_EXISTS");
    }
}
