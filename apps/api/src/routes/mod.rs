pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::posts::handlers as posts;
use crate::seo::handlers as seo;
use crate::slug::handlers as slug;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring
        .route("/api/v1/seo/score", post(seo::handle_score))
        .route("/api/v1/seo/badge", get(seo::handle_badge))
        // Editor helpers
        .route("/api/v1/slugs", post(slug::handle_generate_slug))
        // Stored posts
        .route("/api/v1/posts/seo", get(posts::handle_posts_audit))
        .route("/api/v1/posts/:slug/seo", get(posts::handle_post_score))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;

    fn test_state() -> AppState {
        AppState::new(
            None,
            Config {
                database_url: None,
                db_max_connections: 1,
                port: 0,
                rust_log: "debug".to_string(),
                slug_cache_capacity: 8,
            },
        )
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"], false);
    }

    #[tokio::test]
    async fn test_score_empty_object_is_zero() {
        let (status, body) = send(post_json("/api/v1/seo/score", json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 0);
        assert_eq!(body["band"], "bad");
        assert_eq!(body["badge"]["color"], "text-red-600");
    }

    #[tokio::test]
    async fn test_score_tolerates_wrong_types_and_dark_mode() {
        let (status, body) = send(post_json(
            "/api/v1/seo/score?mode=dark",
            json!({ "title": 7, "focusKeyword": ["x"], "featuredImage": "https://cdn/x.png" }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let score = body["score"].as_u64().unwrap();
        assert!(score > 0 && score <= 100);
        assert!(body["badge"]["color"].as_str().unwrap().ends_with("-400"));
    }

    #[tokio::test]
    async fn test_badge_clamps_and_requires_score() {
        let (status, body) =
            send(Request::get("/api/v1/seo/badge?score=150").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 100);
        assert_eq!(body["icon"], "check-circle");

        let (status, body) =
            send(Request::get("/api/v1/seo/badge").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_badge_accepts_fractional_and_huge_scores() {
        let (status, body) =
            send(Request::get("/api/v1/seo/badge?score=85.5").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 86);
        assert_eq!(body["band"], "good");

        let uri = "/api/v1/seo/badge?score=99999999999999999999999&mode=dark";
        let (status, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 100);
        assert_eq!(body["color"], "text-green-400");
    }

    fn assert_error_envelope(status: StatusCode, body: &Value) {
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn test_malformed_requests_use_error_envelope() {
        let (status, body) =
            send(Request::get("/api/v1/seo/badge?score=abc").body(Body::empty()).unwrap()).await;
        assert_error_envelope(status, &body);

        let no_content_type = Request::post("/api/v1/seo/score")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = send(no_content_type).await;
        assert_error_envelope(status, &body);

        let broken_json = Request::post("/api/v1/seo/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"title\": "))
            .unwrap();
        let (status, body) = send(broken_json).await;
        assert_error_envelope(status, &body);

        let (status, body) = send(post_json("/api/v1/slugs", json!({ "title": 5 }))).await;
        assert_error_envelope(status, &body);

        let (status, body) =
            send(Request::get("/api/v1/posts/seo?limit=many").body(Body::empty()).unwrap()).await;
        assert_error_envelope(status, &body);
    }

    #[tokio::test]
    async fn test_slug_generation_and_validation() {
        let (status, body) =
            send(post_json("/api/v1/slugs", json!({ "title": "Scale Your Support Team" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["slug"], "scale-your-support-team");
        assert_eq!(body["cached"], false);

        let (status, _) = send(post_json("/api/v1/slugs", json!({ "title": "   " }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(post_json("/api/v1/slugs", json!({ "title": "???" }))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_posts_routes_unavailable_without_database() {
        let (status, body) =
            send(Request::get("/api/v1/posts/some-post/seo").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "SERVICE_UNAVAILABLE");

        let (status, _) =
            send(Request::get("/api/v1/posts/seo").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
