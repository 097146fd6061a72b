use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use serde_json::Value;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;
    let status = response.status();

    info!(
        method = %method,
        path = %path,
        status = status.as_u16(),
        duration_ms = started_at.elapsed().as_millis(),
        "request summary"
    );

    if status == StatusCode::UNAUTHORIZED {
        warn!(method = %method, path = %path, "plugin handshake rejected");
    }

    response
}

/// One line per plugin call. `params` must already be redacted.
pub fn audit_plugin_call(method: &str, type_name: Option<&str>, params: &Value, failed: bool) {
    info!(
        method = %method,
        type_name = type_name.unwrap_or("-"),
        params = %params,
        outcome = if failed { "failure" } else { "success" },
        "plugin call audited"
    );
}
