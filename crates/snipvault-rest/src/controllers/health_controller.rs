//! Unauthenticated probe endpoints.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

const HEALTHY: HealthStatus = HealthStatus {
    status: "healthy",
    service: "snipvault",
    version: env!("CARGO_PKG_VERSION"),
};

/// `/health` reports the build; `/ready` and `/live` are bare 200s for orchestrators.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(|| async { Json(HEALTHY) }))
        .route("/ready", get(probe))
        .route("/live", get(probe))
}

async fn probe() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_body() {
        let json = serde_json::to_value(HEALTHY).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["service"], "snipvault");
        assert!(json["version"].as_str().is_some_and(|v| !v.is_empty()));
    }
}
