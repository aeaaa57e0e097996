pub mod info_routes;
pub mod usage_routes;

use axum::http::{header, HeaderName, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::app_state::AppState;

/// Any origin may GET; matches what browser dashboards send.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers([
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(info_routes::health_routes(state.clone()))
        .merge(usage_routes::usage_routes(state))
        .layer(cors_layer())
}
