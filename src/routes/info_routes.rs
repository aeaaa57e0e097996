use axum::{extract::State, routing::get, Json, Router};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use usage_gen::{Device, Window};

use crate::state::app_state::AppState;

pub fn health_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/info", get(info_check))
        .with_state(state)
}

#[derive(Serialize)]
pub struct HealthStatus {
    status: String,
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_owned(),
    })
}

#[derive(Serialize)]
pub struct WindowInfo {
    name: &'static str,
    duration_secs: u32,
    interval_secs: u32,
    samples: usize,
}

#[derive(Serialize)]
pub struct ServiceInfo {
    name: String,
    version: String,
    description: String,
    address: String,
    seeded: bool,
    started_at: DateTime<Utc>,
    windows: Vec<WindowInfo>,
    devices: Vec<&'static str>,
}

pub async fn info_check(State(state): State<AppState>) -> Json<ServiceInfo> {
    let config = &state.config;

    debug!("{} info requested", config.name);

    Json(ServiceInfo {
        name: config.name.clone(),
        version: config.version.clone(),
        description: config.description.clone(),
        address: format!("{}:{}", config.connection.ip, config.connection.port),
        seeded: config.seed.is_some(),
        started_at: state.started_at,
        windows: Window::ALL
            .iter()
            .map(|w| WindowInfo {
                name: w.name(),
                duration_secs: w.duration_secs(),
                interval_secs: w.interval_secs(),
                samples: w.sample_count(),
            })
            .collect(),
        devices: Device::ALL.iter().map(|d| d.name()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let Json(status) = health_check().await;
        assert_eq!(status.status, "ok");
    }

    #[tokio::test]
    async fn test_info_catalogue() {
        let Json(info) = info_check(State(AppState::default())).await;
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["address"], "0.0.0.0:8080");
        assert_eq!(json["seeded"], false);
        assert_eq!(json["devices"], serde_json::json!(["cpu", "disk", "memory", "network"]));
        assert_eq!(json["windows"][0]["name"], "hr");
        assert_eq!(json["windows"][0]["samples"], 360);
        assert_eq!(json["windows"][1]["name"], "wk");
        assert_eq!(json["windows"][1]["interval_secs"], 600);
        assert!(json["started_at"].is_string());
    }
}
