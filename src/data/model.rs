use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary success/failure label of a launch
// ---------------------------------------------------------------------------

/// Launch outcome, parsed from the dataset's `class` column (0 = failure,
/// 1 = success).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse the 0/1 `class` value. Anything else is a schema violation.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Numeric y-axis value for the scatter chart (0.0 or 1.0).
    pub fn as_f64(self) -> f64 {
        match self {
            Outcome::Failure => 0.0,
            Outcome::Success => 1.0,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Failure => write!(f, "Failure"),
            Outcome::Success => write!(f, "Success"),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single historical launch (one row of the source table).
#[derive(Debug, Clone)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. `CCAFS LC-40`.
    pub site: String,
    /// Payload mass in kilograms, >= 0.
    pub payload_mass_kg: f64,
    /// Success / failure label.
    pub outcome: Outcome,
    /// Booster version category, used for scatter-chart coloring only.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with indices computed once at load time.
/// Immutable for the rest of the process lifetime.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launches (rows) in file order.
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch sites.
    pub sites: Vec<String>,
    /// Sorted distinct booster version categories.
    pub booster_categories: Vec<String>,
    /// Smallest payload mass in the dataset (0.0 when empty).
    pub payload_min: f64,
    /// Largest payload mass in the dataset (0.0 when empty).
    pub payload_max: f64,
}

impl LaunchDataset {
    /// Build the site/category indices and the global payload bounds.
    /// The bounds are computed here once and never recomputed.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: Vec<String> = records.iter().map(|r| r.site.clone()).collect();
        sites.sort();
        sites.dedup();

        let mut booster_categories: Vec<String> =
            records.iter().map(|r| r.booster_category.clone()).collect();
        booster_categories.sort();
        booster_categories.dedup();

        let (payload_min, payload_max) = if records.is_empty() {
            (0.0, 0.0)
        } else {
            records.iter().map(|r| r.payload_mass_kg).fold(
                (f64::INFINITY, f64::NEG_INFINITY),
                |(lo, hi), m| (lo.min(m), hi.max(m)),
            )
        };

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_min,
            payload_max,
        }
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, mass: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome,
            booster_category: "v1.0".to_string(),
        }
    }

    #[test]
    fn indices_are_sorted_and_deduped() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 500.0, Outcome::Success),
            record("CCAFS LC-40", 2500.0, Outcome::Failure),
            record("KSC LC-39A", 1500.0, Outcome::Success),
        ]);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.payload_max, 2500.0);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn empty_dataset_has_zero_bounds() {
        let ds = LaunchDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.payload_min, 0.0);
        assert_eq!(ds.payload_max, 0.0);
    }

    #[test]
    fn outcome_class_parsing() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
    }
}
