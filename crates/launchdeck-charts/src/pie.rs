//! Launch-share pie: each slice is a site's share of the total
//! flight-number weight across the dataset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use launchdeck_data::LaunchRecord;

use crate::select::SiteSelection;

/// Slice label that absorbs every site other than the selected one.
pub const OTHERS_LABEL: &str = "Others";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    /// Share of the grand flight-number total, in percent.
    pub share_pct: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub slices: Vec<PieSlice>,
}

/// Aggregation stage: summed flight-number weight per slice label.
/// Under a single-site selection every site other than the selected one
/// folds into [`OTHERS_LABEL`] before summing, so an unknown site ends
/// up with all weight under "Others". Labels come out sorted.
fn flight_weight_by_label(
    records: &[LaunchRecord],
    selection: &SiteSelection,
) -> BTreeMap<String, u64> {
    let mut weights: BTreeMap<String, u64> = BTreeMap::new();
    for record in records {
        let label = if selection.matches(&record.launch_site) {
            record.launch_site.as_str()
        } else {
            OTHERS_LABEL
        };
        *weights.entry(label.to_string()).or_insert(0) += u64::from(record.flight_number);
    }
    weights
}

/// Compute the launch-share pie for a site selection.
///
/// Aggregates flight-number weight per slice label, then normalizes each
/// slice against the grand total as a percentage. With
/// `SiteSelection::All` there is one slice per site; with a named site
/// there are two slices, the site itself and [`OTHERS_LABEL`].
pub fn launch_share(records: &[LaunchRecord], selection: &SiteSelection) -> PieChart {
    let weights = flight_weight_by_label(records, selection);

    let grand_total: u64 = weights.values().sum();
    if grand_total == 0 {
        // No weight to divide by. Covers the empty dataset and the
        // degenerate all-zero-flight-number case.
        return PieChart::default();
    }

    let slices = weights
        .into_iter()
        .map(|(label, weight)| PieSlice {
            label,
            share_pct: weight as f64 / grand_total as f64 * 100.0,
        })
        .collect();
    PieChart { slices }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(site: &str, flight_number: u32) -> LaunchRecord {
        LaunchRecord {
            flight_number,
            launch_site: site.to_string(),
            outcome: 1,
            payload_mass_kg: 500.0,
            booster_category: "v1.0".to_string(),
        }
    }

    fn share_sum(chart: &PieChart) -> f64 {
        chart.slices.iter().map(|s| s.share_pct).sum()
    }

    #[test]
    fn test_aggregation_relabels_non_selected_sites() {
        let records = vec![
            record("CCAFS LC-40", 1),
            record("VAFB SLC-4E", 3),
            record("KSC LC-39A", 4),
            record("CCAFS LC-40", 2),
        ];
        let weights = flight_weight_by_label(&records, &SiteSelection::parse("CCAFS LC-40"));

        let entries: Vec<(&str, u64)> = weights.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, vec![("CCAFS LC-40", 3), ("Others", 7)]);
    }

    #[test]
    fn test_all_sites_one_slice_per_site_summing_to_100() {
        let records = vec![
            record("CCAFS LC-40", 1),
            record("CCAFS LC-40", 4),
            record("VAFB SLC-4E", 3),
            record("KSC LC-39A", 2),
        ];
        let chart = launch_share(&records, &SiteSelection::All);

        let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]);
        assert!((share_sum(&chart) - 100.0).abs() < 1e-6);
        assert!((chart.slices[0].share_pct - 50.0).abs() < 1e-6); // 5 of 10
    }

    #[test]
    fn test_all_sites_worked_example() {
        // Flights 1 and 2 at one site, flight 3 at another: both sites
        // carry half the total weight.
        let records = vec![
            record("CCAFS LC-40", 1),
            record("CCAFS LC-40", 2),
            record("VAFB SLC-4E", 3),
        ];
        let chart = launch_share(&records, &SiteSelection::All);

        assert_eq!(chart.slices.len(), 2);
        assert!((chart.slices[0].share_pct - 50.0).abs() < 1e-6);
        assert!((chart.slices[1].share_pct - 50.0).abs() < 1e-6);
    }

    #[test]
    fn test_single_site_emits_site_and_others() {
        let records = vec![
            record("CCAFS LC-40", 1),
            record("CCAFS LC-40", 2),
            record("VAFB SLC-4E", 3),
        ];
        let selection = SiteSelection::parse("CCAFS LC-40");
        let chart = launch_share(&records, &selection);

        assert_eq!(
            chart,
            PieChart {
                slices: vec![
                    PieSlice { label: "CCAFS LC-40".to_string(), share_pct: 50.0 },
                    PieSlice { label: "Others".to_string(), share_pct: 50.0 },
                ],
            }
        );
        assert!((share_sum(&chart) - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_every_known_site_yields_two_slices() {
        let records = vec![
            record("CCAFS LC-40", 1),
            record("CCAFS SLC-40", 2),
            record("VAFB SLC-4E", 3),
            record("KSC LC-39A", 4),
        ];
        for site in ["CCAFS LC-40", "CCAFS SLC-40", "VAFB SLC-4E", "KSC LC-39A"] {
            let chart = launch_share(&records, &SiteSelection::parse(site));
            let labels: Vec<&str> = chart.slices.iter().map(|s| s.label.as_str()).collect();
            assert_eq!(chart.slices.len(), 2, "site {site}");
            assert!(labels.contains(&site), "site {site}");
            assert!(labels.contains(&OTHERS_LABEL), "site {site}");
            assert!((share_sum(&chart) - 100.0).abs() < 1e-6, "site {site}");
        }
    }

    #[test]
    fn test_unknown_site_folds_everything_into_others() {
        let records = vec![record("CCAFS LC-40", 1), record("VAFB SLC-4E", 3)];
        let chart = launch_share(&records, &SiteSelection::parse("No Such Pad"));

        assert_eq!(chart.slices.len(), 1);
        assert_eq!(chart.slices[0].label, OTHERS_LABEL);
        assert!((chart.slices[0].share_pct - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_dataset_yields_empty_chart() {
        assert_eq!(launch_share(&[], &SiteSelection::All), PieChart::default());
    }

    #[test]
    fn test_zero_total_weight_yields_empty_chart() {
        let records = vec![record("CCAFS LC-40", 0), record("VAFB SLC-4E", 0)];
        assert_eq!(launch_share(&records, &SiteSelection::All), PieChart::default());
    }

    #[test]
    fn test_idempotent_for_unchanged_records() {
        let records = vec![
            record("CCAFS LC-40", 1),
            record("VAFB SLC-4E", 3),
            record("KSC LC-39A", 7),
        ];
        let selection = SiteSelection::parse("VAFB SLC-4E");
        assert_eq!(
            launch_share(&records, &selection),
            launch_share(&records, &selection)
        );
    }
}
