//! Permissive CORS headers applied to every response.

use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::{EduforgeError, Result};

pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization, X-Client-Info, Apikey";

#[derive(Debug, Clone)]
pub struct CorsHeaders {
    origin: HeaderValue,
}

impl CorsHeaders {
    pub fn new(allow_origin: &str) -> Result<Self> {
        let origin = HeaderValue::from_str(allow_origin).map_err(|_| {
            EduforgeError::Config(format!("allow_origin is not a valid header value: {allow_origin}"))
        })?;
        Ok(Self { origin })
    }
}

pub async fn apply_cors(State(cors): State<CorsHeaders>, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, cors.origin.clone());
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_origin() {
        assert!(CorsHeaders::new("https://school.example").is_ok());
        assert!(matches!(
            CorsHeaders::new("bad\norigin"),
            Err(EduforgeError::Config(_))
        ));
    }
}
