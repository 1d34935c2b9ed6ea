//! Shared application state for the dashboard server.

use std::sync::Arc;

use launchdeck_data::LaunchDataset;

/// Shared state injected into every Axum handler.
///
/// Holds the launch records loaded once at startup. Nothing mutates the
/// dataset afterwards, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub dataset: LaunchDataset,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        Self { dataset }
    }
}

pub type SharedState = Arc<AppState>;
