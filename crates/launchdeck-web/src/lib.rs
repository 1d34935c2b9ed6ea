//! launchdeck-web — Web server for the launch records dashboard.
//! Serves a single interactive page with:
//!   - Launch-share pie chart, scoped by launch site
//!   - Payload/outcome scatter chart with booster-category series
//!   - Site dropdown and payload-range controls driving both charts

pub mod config;
pub mod handlers;
pub mod router;
pub mod state;
