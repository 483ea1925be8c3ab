//! HTTP host for the generators.
//!
//! Routes:
//! - `POST /generate-lesson-note`
//! - `POST /generate-questions`
//! - `POST /ai-tutor`
//! - `GET /health`
//!
//! Every route answers `OPTIONS` preflight, and every response carries the
//! configured CORS headers.

pub mod cors;
pub mod error;
pub mod handlers;

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower::ServiceBuilder;
use tracing::info;

use crate::config::{QuestionLimits, ServerConfig};
use crate::error::Result;
use cors::CorsHeaders;

/// Shared, immutable per-server state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub limits: QuestionLimits,
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}

/// Build the router from validated config.
pub fn router(config: &ServerConfig) -> Result<Router> {
    config.validate()?;
    let cors_headers = CorsHeaders::new(&config.allow_origin)?;
    let state = AppState {
        limits: config.question_limits(),
    };

    Ok(Router::new()
        .route(
            "/generate-lesson-note",
            post(handlers::lesson_note).options(handlers::preflight),
        )
        .route(
            "/generate-questions",
            post(handlers::questions).options(handlers::preflight),
        )
        .route(
            "/ai-tutor",
            post(handlers::tutor).options(handlers::preflight),
        )
        .route(
            "/health",
            get(handlers::health).options(handlers::preflight),
        )
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_request))
                .layer(middleware::from_fn_with_state(cors_headers, cors::apply_cors)),
        )
        .with_state(state))
}

/// Serve until `shutdown` is cancelled.
pub async fn serve(config: &ServerConfig, shutdown: CancellationToken) -> Result<()> {
    let app = router(config)?;
    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    info!(addr = %listener.local_addr()?, "eduforge listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await?;

    info!("server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        router(&ServerConfig::default()).unwrap()
    }

    async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, header::HeaderMap, Value) {
        let request = axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, headers, value)
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, header::HeaderMap, Value) {
        send(app(), Method::POST, uri, &body.to_string()).await
    }

    #[tokio::test]
    async fn test_lesson_note_endpoint() {
        let (status, headers, body) = post_json(
            "/generate-lesson-note",
            json!({"subject": "Biology", "gradeLevel": "SS1", "topic": "Cells"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(body["title"], "Cells");
        assert_eq!(body["objectives"].as_array().unwrap().len(), 4);
        for key in ["introduction", "content", "evaluation", "conclusion"] {
            assert!(!body[key].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn test_lesson_note_missing_topic() {
        let (status, headers, body) = post_json(
            "/generate-lesson-note",
            json!({"subject": "Biology", "gradeLevel": "SS1"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required field: topic");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            cors::ALLOW_METHODS
        );
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, _, body) =
            send(app(), Method::POST, "/generate-questions", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON body"));
    }

    #[tokio::test]
    async fn test_questions_endpoint() {
        let (status, _, body) = post_json(
            "/generate-questions",
            json!({
                "subject": "Mathematics",
                "topic": "Algebra",
                "difficulty": "easy",
                "count": 3,
                "questionType": "multiple_choice"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 3);
        for q in questions {
            assert_eq!(q["question_type"], "multiple_choice");
            assert_eq!(q["correct_answer"], "A");
            assert_eq!(q["options"].as_array().unwrap().len(), 4);
        }
    }

    #[tokio::test]
    async fn test_questions_count_as_string() {
        let (status, _, body) = post_json(
            "/generate-questions",
            json!({"subject": "Art", "topic": "Colour", "count": "4", "questionType": "essay"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let questions = body["questions"].as_array().unwrap();
        assert_eq!(questions.len(), 4);
        assert!(questions.iter().all(|q| q["options"].is_null()));
    }

    #[tokio::test]
    async fn test_questions_invalid_type_rejected() {
        let (status, _, body) = post_json(
            "/generate-questions",
            json!({"subject": "Art", "topic": "Colour", "questionType": "matching"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("questionType"));
    }

    #[tokio::test]
    async fn test_questions_respects_configured_max() {
        let config = ServerConfig {
            max_questions: 5,
            ..ServerConfig::default()
        };
        let app = router(&config).unwrap();
        let body = json!({"subject": "Art", "topic": "Colour", "count": 6}).to_string();
        let (status, _, body) = send(app, Method::POST, "/generate-questions", &body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Count 6 out of range (allowed 1-5)");
    }

    #[tokio::test]
    async fn test_tutor_endpoint() {
        let (status, _, body) = post_json(
            "/ai-tutor",
            json!({"message": "Why do plants need light?", "topic": "Photosynthesis"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topic"], "Photosynthesis");
        assert!(body["response"]
            .as_str()
            .unwrap()
            .starts_with("That's a thoughtful question regarding Photosynthesis!"));
    }

    #[tokio::test]
    async fn test_preflight_has_cors_headers() {
        let (status, headers, body) =
            send(app(), Method::OPTIONS, "/generate-questions", "").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            cors::ALLOW_HEADERS
        );
    }

    #[tokio::test]
    async fn test_configured_origin() {
        let config = ServerConfig {
            allow_origin: "https://school.example".into(),
            ..ServerConfig::default()
        };
        let app = router(&config).unwrap();
        let (_, headers, _) = send(app, Method::GET, "/health", "").await;
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://school.example"
        );
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _, body) = send(app(), Method::GET, "/health", "").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_router_rejects_invalid_config() {
        let config = ServerConfig {
            max_questions: 0,
            ..ServerConfig::default()
        };
        assert!(router(&config).is_err());
    }
}
