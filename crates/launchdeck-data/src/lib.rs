//! launchdeck-data — launch records dataset.
//!
//! Loads the launches CSV once at process start into an immutable in-memory
//! collection and answers read-only queries over it. Everything downstream
//! (chart computation, the web layer) borrows the records; nothing mutates
//! them after load.
//!
//! Required CSV columns:
//!
//! | Column                     | Field             |
//! |----------------------------|-------------------|
//! | `Flight Number`            | `flight_number`   |
//! | `Launch Site`              | `launch_site`     |
//! | `class`                    | `outcome`         |
//! | `Payload Mass (kg)`        | `payload_mass_kg` |
//! | `Booster Version Category` | `booster_category`|
//!
//! Any other columns (the source data also carries `Booster Version`) are
//! ignored.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

/// One launch attempt, as read from the CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchRecord {
    /// Sequence number of the launch. Doubles as the aggregation weight
    /// for the launch-share pie chart.
    #[serde(rename = "Flight Number")]
    pub flight_number: u32,
    /// Launch location category, e.g. "CCAFS LC-40".
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Binary outcome class: 1 success, 0 failure.
    #[serde(rename = "class")]
    pub outcome: u8,
    /// Payload mass in kilograms.
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Booster hardware variant label, e.g. "v1.1" or "FT".
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

impl LaunchRecord {
    pub fn succeeded(&self) -> bool {
        self.outcome == 1
    }
}

/// The full launch table, loaded once and read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    loaded_at: DateTime<Utc>,
}

impl LaunchDataset {
    /// Load launch records from a CSV file.
    ///
    /// Fatal on a missing file, on CSV syntax errors, and on rows that lack
    /// one of the required columns. A header-only file loads successfully
    /// with zero records.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            anyhow::bail!(
                "Launch records not found at {:?}\n\
                 Point [data].launches_csv in launchdeck.toml at the CSV, \
                 or run from the repository root to pick up the bundled data/ file.",
                path
            );
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let records = read_records(content.as_bytes())
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let dataset = Self::from_records(records);
        info!(
            path = %path.display(),
            n_records = dataset.len(),
            n_sites = dataset.sites().len(),
            "Loaded launch records"
        );
        Ok(dataset)
    }

    /// Build a dataset from already-parsed records. Used by tests and tools
    /// that assemble records in memory.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        Self {
            records,
            loaded_at: Utc::now(),
        }
    }

    /// All records, in CSV row order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct launch sites, sorted and deduplicated.
    pub fn sites(&self) -> Vec<&str> {
        let mut sites: Vec<&str> = self.records.iter().map(|r| r.launch_site.as_str()).collect();
        sites.sort_unstable();
        sites.dedup();
        sites
    }

    /// (min, max) payload mass over all records, or None when empty.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut masses = self.records.iter().map(|r| r.payload_mass_kg);
        let first = masses.next()?;
        let bounds = masses.fold((first, first), |(lo, hi), m| (m.min(lo), m.max(hi)));
        Some(bounds)
    }

    /// Number of records with a successful outcome.
    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.succeeded()).count()
    }

    /// When the dataset was loaded into memory.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

fn read_records(reader: impl std::io::Read) -> Result<Vec<LaunchRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (i, row) in csv_reader.deserialize::<LaunchRecord>().enumerate() {
        // Data rows are numbered from 1; the header is row 0.
        let record = row.with_context(|| format!("Bad launch record at data row {}", i + 1))?;
        records.push(record);
    }
    Ok(records)
}

// ── Tests ───────────────────────────────────────────────────────────────────
