use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::state::app_state::AppState;

/// Query string for GET /usage. Both fields are required; axum rejects
/// the request with a 400 when either is missing.
#[derive(Deserialize, Debug)]
pub struct UsageQuery {
    pub duration: String,
    pub device: String,
}

/// =======================
/// ROUTER
/// =======================

pub fn usage_routes(state: AppState) -> Router {
    Router::new()
        .route("/usage", get(get_usage))
        .with_state(state)
}

/// =======================
/// HANDLERS
/// =======================

pub async fn get_usage(State(state): State<AppState>, Query(query): Query<UsageQuery>) -> Response {
    match state.usage_report(&query.duration, &query.device).await {
        Ok(report) => {
            debug!(
                "Served usage: duration={}, devices={}",
                query.duration,
                report.len()
            );
            Json(report).into_response()
        }
        Err(e) => {
            warn!("Rejected usage query {:?}: {}", query, e);
            (StatusCode::BAD_REQUEST, format!("{e}\n")).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service_model::ServiceConfig;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;
    use serde_json::Value;

    fn query(duration: &str, device: &str) -> Query<UsageQuery> {
        Query(UsageQuery {
            duration: duration.to_string(),
            device: device.to_string(),
        })
    }

    async fn call(duration: &str, device: &str) -> (StatusCode, String, String) {
        let state = AppState::new(ServiceConfig {
            seed: Some(3),
            ..ServiceConfig::default()
        });
        let resp = get_usage(State(state), query(duration, device)).await;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_usage_json_shape() {
        let (status, content_type, body) = call("hr", "cpu,disk").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type, "application/json");

        let json: Value = serde_json::from_str(&body).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);

        for key in ["cpu", "disk"] {
            let series = obj[key].as_array().unwrap();
            assert_eq!(series.len(), 360);
            assert_eq!(series[0]["toffset"], 0);
            assert_eq!(series[1]["toffset"], 10);

            let usage = series[0]["usage"].as_u64().unwrap();
            assert!(usage <= 40);
        }
    }

    #[tokio::test]
    async fn test_invalid_duration() {
        let (status, content_type, body) = call("xx", "cpu").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(content_type.starts_with("text/plain"));
        assert_eq!(body, "Invalid duration: xx\n");
    }

    #[tokio::test]
    async fn test_duplicate_device() {
        let (status, _, body) = call("wk", "memory,memory").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Duplicate device: memory\n");
    }

    #[tokio::test]
    async fn test_unknown_device() {
        let (status, _, body) = call("hr", "cpu,gpu").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "Unknown device: gpu\n");
    }
}
