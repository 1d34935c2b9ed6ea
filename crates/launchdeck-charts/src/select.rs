//! Control state sent by the dashboard: site selection and payload range.

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

/// Which launch site the charts are scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    All,
    /// One named site, matched exactly (case-sensitive) against the
    /// `Launch Site` column.
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value. Exactly `"ALL"` selects every site; any
    /// other string is kept as a site name, even one the dataset has
    /// never seen.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value.to_string())
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(selected) => selected == site,
        }
    }
}

/// Half-open payload interval `[min, max)` in kilograms.
///
/// The upper bound is exclusive: a record sitting exactly on `max` is
/// filtered out. An inverted range (min >= max) contains nothing rather
/// than being an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.min && mass < self.max
    }
}
