//! launchdeck-charts — chart payload computation for the launch dashboard.
//!
//! Pure transformations from launch records plus control state to
//! JSON-ready chart payloads. The web layer owns the dataset and passes a
//! record slice in; nothing here does I/O or holds state, so every
//! function is idempotent for an unchanged dataset.

pub mod pie;
pub mod scatter;
pub mod select;
