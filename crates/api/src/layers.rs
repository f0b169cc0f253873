use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use thiserror::Error;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{ApiState, create_router};

#[derive(Debug, Error)]
pub enum CorsConfigError {
    #[error("invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

/// CORS policy for the browser client. `*` allows any origin.
///
/// # Errors
///
/// Returns `CorsConfigError::InvalidOrigin` if `origin` is not a valid header value.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, CorsConfigError> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origin.trim() == "*" {
        return Ok(layer.allow_origin(Any));
    }
    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|_| CorsConfigError::InvalidOrigin(origin.to_string()))?;
    Ok(layer.allow_origin(origin))
}

/// Router with request tracing and CORS, ready to serve.
///
/// # Errors
///
/// Returns `CorsConfigError` if the CORS origin is invalid.
pub fn create_app(state: ApiState, cors_origin: &str) -> Result<Router, CorsConfigError> {
    Ok(create_router(state)
        .layer(cors_layer(cors_origin)?)
        .layer(TraceLayer::new_for_http()))
}
