//! Router assembly and the HTTP middleware stack.

mod api;
mod common;

pub use api::api_routes;
pub use common::common_routes;

use crate::config::{AppConfig, DEFAULT_BODY_LIMIT_BYTES, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::error::AppError;
use crate::state::AppState;
use axum::{error_handling::HandleErrorLayer, BoxError, Router};
use std::time::Duration;
use tower::{timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

#[derive(Clone, Copy, Debug)]
pub struct HttpLimits {
    pub request_timeout: Duration,
    pub body_limit_bytes: usize,
}

impl Default for HttpLimits {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl From<&AppConfig> for HttpLimits {
    fn from(config: &AppConfig) -> Self {
        Self {
            request_timeout: config.request_timeout(),
            body_limit_bytes: config.body_limit_bytes,
        }
    }
}

/// Turns middleware failures into the same error body handlers produce.
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Timeout
    } else {
        AppError::Internal(err.to_string())
    }
}

/// Full application: common and API routes behind CORS (any origin), a body
/// size cap, a per-request timeout (408), and request tracing.
pub fn app(state: AppState, limits: HttpLimits) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let timeout = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(handle_middleware_error))
        .layer(TimeoutLayer::new(limits.request_timeout));
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(timeout)
        .layer(RequestBodyLimitLayer::new(limits.body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn elapsed_maps_to_request_timeout() {
        let err: BoxError = Box::new(tower::timeout::error::Elapsed::new());
        assert!(matches!(handle_middleware_error(err).await, AppError::Timeout));
    }

    #[tokio::test]
    async fn other_middleware_errors_are_internal() {
        let err: BoxError = "boom".into();
        assert!(matches!(handle_middleware_error(err).await, AppError::Internal(_)));
    }

    #[test]
    fn default_limits_match_config_defaults() {
        let config =
            AppConfig::from_lookup(|name| (name == "DATABASE_URL").then(|| "postgres://x".into())).unwrap();
        let from_config = HttpLimits::from(&config);
        let default = HttpLimits::default();
        assert_eq!(from_config.request_timeout, default.request_timeout);
        assert_eq!(from_config.body_limit_bytes, default.body_limit_bytes);
    }
}
