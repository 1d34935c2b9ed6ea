//! Axum router — maps all URL paths to handlers.

use axum::{routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    charts::{api_payload_scatter, api_success_pie},
    dashboard::dashboard,
};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/", get(dashboard))

        // Chart data endpoints
        .route("/api/charts/success-pie",      get(api_success_pie))
        .route("/api/charts/payload-scatter",  get(api_payload_scatter))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
