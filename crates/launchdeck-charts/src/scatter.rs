//! Payload/outcome scatter: one point per qualifying launch, grouped
//! into a series per booster version category.

use serde::{Deserialize, Serialize};

use launchdeck_data::LaunchRecord;

use crate::select::{PayloadRange, SiteSelection};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass in kilograms.
    pub x: f64,
    /// Outcome class, 0 or 1.
    pub y: u8,
}

/// Points sharing one booster version category. The dashboard renders
/// each series in its own colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub booster_category: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Total points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Compute the payload/outcome scatter for a site selection and payload
/// range.
///
/// A record qualifies when its payload mass lies in the half-open range
/// and its site passes the selection. One point per qualifying record,
/// x = payload mass, y = outcome class, no aggregation. Series appear in
/// the order their booster category is first seen in the record stream.
/// An empty result (including any inverted range) is an empty chart, not
/// an error.
pub fn payload_outcome(
    records: &[LaunchRecord],
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterChart {
    let mut series: Vec<ScatterSeries> = Vec::new();
    for record in records {
        if !range.contains(record.payload_mass_kg) || !selection.matches(&record.launch_site) {
            continue;
        }
        let point = ScatterPoint {
            x: record.payload_mass_kg,
            y: record.outcome,
        };
        match series
            .iter_mut()
            .find(|s| s.booster_category == record.booster_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                booster_category: record.booster_category.clone(),
                points: vec![point],
            }),
        }
    }
    ScatterChart { series }
}
