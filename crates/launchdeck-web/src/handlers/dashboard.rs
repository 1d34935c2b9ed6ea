//! Dashboard handler — renders the launch records page.

use axum::{extract::State, response::Html};
use chrono::{DateTime, Utc};
use crate::state::SharedState;

/// Dropdown entries as (label, value) pairs. "ALL" is the sentinel the
/// chart endpoints understand as "every site"; it comes first so the
/// browser selects it by default.
pub const SITE_OPTIONS: [(&str, &str); 5] = [
    ("All Sites", "ALL"),
    ("CCAFS LC-40", "CCAFS LC-40"),
    ("VAFB SLC-4E", "VAFB SLC-4E"),
    ("KSC LC-39A", "KSC LC-39A"),
    ("CCAFS SLC-40", "CCAFS SLC-40"),
];

/// Payload slider geometry, in kilograms.
pub const PAYLOAD_SLIDER_MIN: u32 = 0;
pub const PAYLOAD_SLIDER_MAX: u32 = 10_000;
pub const PAYLOAD_SLIDER_STEP: u32 = 1_000;

/// Labeled tick marks rendered under the payload slider.
const PAYLOAD_MARKS: [&str; 5] = ["0", "2,500", "5,000", "7,500", "10,000"];

/// Page styling and chart wiring, inlined into the rendered page.
const DASHBOARD_CSS: &str = include_str!("../../templates/dashboard.css");
const DASHBOARD_JS: &str = include_str!("../../templates/dashboard.js");

/// GET / — the launch records dashboard
pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    Html(render_dashboard(
        state.dataset.len(),
        state.dataset.success_count(),
        state.dataset.sites().len(),
        state.dataset.payload_bounds(),
        state.dataset.loaded_at(),
    ))
}

fn render_dashboard(
    n_launches: usize,
    n_successes: usize,
    n_sites: usize,
    payload_bounds: Option<(f64, f64)>,
    loaded_at: DateTime<Utc>,
) -> String {
    let options: String = SITE_OPTIONS
        .iter()
        .map(|(label, value)| format!(r#"<option value="{value}">{label}</option>"#))
        .collect();
    let marks: String = PAYLOAD_MARKS
        .iter()
        .map(|mark| format!("<span>{mark}</span>"))
        .collect();
    let payload_span = match payload_bounds {
        Some((lo, hi)) => format!("{lo:.0} to {hi:.0}"),
        None => "n/a".to_string(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>SpaceX Launch Records Dashboard</title>
    <script src="https://cdn.jsdelivr.net/npm/chart.js"></script>
    <style>{css}</style>
</head>
<body>
<div class="app-container">
    <h1>SpaceX Launch Records Dashboard</h1>

    <!-- Stat cards -->
    <div class="stats-grid">
        <div class="stat-card">
            <div class="stat-value">{n_launches}</div>
            <div class="stat-label">Launches on record</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{n_successes}</div>
            <div class="stat-label">Successful outcomes</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{n_sites}</div>
            <div class="stat-label">Launch sites</div>
        </div>
        <div class="stat-card">
            <div class="stat-value">{payload_span}</div>
            <div class="stat-label">Payload span (kg)</div>
        </div>
    </div>

    <div class="controls">
        <label for="site-dropdown">Launch site:</label>
        <select id="site-dropdown">{options}</select>
    </div>

    <div class="card">
        <canvas id="success-pie-chart" height="320"></canvas>
    </div>

    <div class="controls">
        <p>Payload range (Kg):</p>
        <div class="range-pair">
            <input type="range" id="payload-min" min="{slider_min}" max="{slider_max}" step="{slider_step}" value="{slider_min}">
            <input type="range" id="payload-max" min="{slider_min}" max="{slider_max}" step="{slider_step}" value="{slider_max}">
        </div>
        <div class="range-marks">{marks}</div>
        <div id="payload-readout" class="range-readout"></div>
    </div>

    <div class="card">
        <canvas id="success-payload-scatter-chart" height="320"></canvas>
    </div>

    <p class="footer-note">Data loaded {loaded}</p>
</div>
<script>{js}</script>
</body>
</html>"#,
        css = DASHBOARD_CSS,
        js = DASHBOARD_JS,
        options = options,
        marks = marks,
        slider_min = PAYLOAD_SLIDER_MIN,
        slider_max = PAYLOAD_SLIDER_MAX,
        slider_step = PAYLOAD_SLIDER_STEP,
        n_launches = n_launches,
        n_successes = n_successes,
        n_sites = n_sites,
        payload_span = payload_span,
        loaded = loaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
