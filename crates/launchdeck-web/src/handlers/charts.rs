//! Chart data endpoints backing the dashboard page.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use launchdeck_charts::pie::{self, PieChart};
use launchdeck_charts::scatter::{self, ScatterChart};
use launchdeck_charts::select::{PayloadRange, SiteSelection, ALL_SITES};
use crate::handlers::dashboard::{PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN};
use crate::state::SharedState;

/// Query parameters shared by both chart endpoints. Anything missing
/// falls back to the dashboard's initial control state.
#[derive(Debug, Deserialize)]
pub struct ChartFilter {
    pub site: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl ChartFilter {
    fn selection(&self) -> SiteSelection {
        SiteSelection::parse(self.site.as_deref().unwrap_or(ALL_SITES))
    }

    fn payload_range(&self) -> PayloadRange {
        PayloadRange::new(
            self.min.unwrap_or(f64::from(PAYLOAD_SLIDER_MIN)),
            self.max.unwrap_or(f64::from(PAYLOAD_SLIDER_MAX)),
        )
    }
}

/// GET /api/charts/success-pie — launch-share pie for the selected site
pub async fn api_success_pie(
    State(state): State<SharedState>,
    Query(filter): Query<ChartFilter>,
) -> Json<PieChart> {
    let chart = pie::launch_share(state.dataset.records(), &filter.selection());
    Json(chart)
}

/// GET /api/charts/payload-scatter — payload/outcome scatter for the
/// selected site and payload range
pub async fn api_payload_scatter(
    State(state): State<SharedState>,
    Query(filter): Query<ChartFilter>,
) -> Json<ScatterChart> {
    let chart = scatter::payload_outcome(
        state.dataset.records(),
        &filter.selection(),
        &filter.payload_range(),
    );
    Json(chart)
}
