use std::collections::BTreeMap;
use std::fmt;

use super::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Site selection: the dropdown value driving both charts
// ---------------------------------------------------------------------------

/// Dropdown state: either the "All Sites" sentinel or one known site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// Whether a record at the given site is in scope.
    fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::AllSites => true,
            SiteSelection::Site(s) => s == site,
        }
    }
}

impl Default for SiteSelection {
    fn default() -> Self {
        SiteSelection::AllSites
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::AllSites => write!(f, "All Sites"),
            SiteSelection::Site(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

/// Pie-chart input: ordered (label, count) slices plus a scope title.
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessDistribution {
    pub slices: Vec<(String, usize)>,
    pub title: String,
}

/// Scatter-chart input: indices into `dataset.records` plus a scope title.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadCorrelation {
    pub indices: Vec<usize>,
    pub title: String,
}

// ---------------------------------------------------------------------------
// Filter engine – pure functions over the immutable dataset
// ---------------------------------------------------------------------------

/// Success distribution for the pie chart.
///
/// * Sentinel: successes only, grouped by launch site.
/// * Specific site: every record for that site, grouped by outcome label.
///
/// Groups with zero records are absent, so an unknown site yields an empty
/// slice list (the chart renders with no slices, which is not an error).
pub fn success_distribution(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
) -> SuccessDistribution {
    let mut groups: BTreeMap<String, usize> = BTreeMap::new();

    let title = match selection {
        SiteSelection::AllSites => {
            for rec in dataset.records.iter().filter(|r| r.outcome.is_success()) {
                *groups.entry(rec.site.clone()).or_insert(0) += 1;
            }
            "Total Success Launches By all sites".to_string()
        }
        SiteSelection::Site(site) => {
            for rec in dataset.records.iter().filter(|r| &r.site == site) {
                *groups.entry(rec.outcome.to_string()).or_insert(0) += 1;
            }
            format!("Total Success Launches for site {site}")
        }
    };

    SuccessDistribution {
        slices: groups.into_iter().collect(),
        title,
    }
}

/// Payload-vs-outcome view for the scatter chart.
///
/// Keeps records in scope for `selection` whose payload mass lies strictly
/// between `low` and `high`. The bounds are exclusive on both ends, matching
/// the source system (so `low == high` always yields an empty view).
pub fn payload_correlation(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    (low, high): (f64, f64),
) -> PayloadCorrelation {
    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.matches(&rec.site)
                && rec.payload_mass_kg > low
                && rec.payload_mass_kg < high
        })
        .map(|(i, _)| i)
        .collect();

    let title = match selection {
        SiteSelection::AllSites => {
            "Correlation Between Payload and Success for All Sites".to_string()
        }
        SiteSelection::Site(site) => {
            format!("Correlation Between Payload and Success for Site {site}")
        }
    };

    PayloadCorrelation { indices, title }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn record(site: &str, mass: f64, outcome: Outcome) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: mass,
            outcome,
            booster_category: "FT".to_string(),
        }
    }

    /// Site A: 3 successes + 2 failures, site B: 1 success + 4 failures.
    fn two_site_dataset() -> LaunchDataset {
        let mut records = Vec::new();
        for i in 0..5 {
            records.push(record(
                "A",
                1000.0 * (i + 1) as f64,
                if i < 3 { Outcome::Success } else { Outcome::Failure },
            ));
        }
        for i in 0..5 {
            records.push(record(
                "B",
                500.0 * (i + 1) as f64,
                if i < 1 { Outcome::Success } else { Outcome::Failure },
            ));
        }
        LaunchDataset::from_records(records)
    }

    fn count_of(dist: &SuccessDistribution, label: &str) -> usize {
        dist.slices
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, n)| *n)
    }

    #[test]
    fn all_sites_groups_successes_by_site() {
        let ds = two_site_dataset();
        let dist = success_distribution(&ds, &SiteSelection::AllSites);
        assert_eq!(count_of(&dist, "A"), 3);
        assert_eq!(count_of(&dist, "B"), 1);
        assert_eq!(dist.title, "Total Success Launches By all sites");

        let total: usize = dist.slices.iter().map(|(_, n)| n).sum();
        let successes = ds.records.iter().filter(|r| r.outcome.is_success()).count();
        assert_eq!(total, successes);
    }

    #[test]
    fn specific_site_partitions_by_outcome() {
        let ds = two_site_dataset();
        let dist = success_distribution(&ds, &SiteSelection::Site("A".into()));
        assert_eq!(count_of(&dist, "Success"), 3);
        assert_eq!(count_of(&dist, "Failure"), 2);
        assert_eq!(dist.title, "Total Success Launches for site A");

        // Partition by outcome covers every record at the site.
        let total: usize = dist.slices.iter().map(|(_, n)| n).sum();
        let at_site = ds.records.iter().filter(|r| r.site == "A").count();
        assert_eq!(total, at_site);
    }

    #[test]
    fn unknown_site_yields_empty_distribution() {
        let ds = two_site_dataset();
        let dist = success_distribution(&ds, &SiteSelection::Site("nowhere".into()));
        assert!(dist.slices.is_empty());
    }

    #[test]
    fn payload_bounds_are_exclusive() {
        let ds = LaunchDataset::from_records(vec![
            record("A", 500.0, Outcome::Failure),
            record("A", 1500.0, Outcome::Success),
            record("A", 2500.0, Outcome::Success),
        ]);
        let view = payload_correlation(&ds, &SiteSelection::Site("A".into()), (1000.0, 2000.0));
        assert_eq!(view.indices, vec![1]);

        // Boundary values themselves are excluded.
        let view = payload_correlation(&ds, &SiteSelection::AllSites, (500.0, 2500.0));
        assert_eq!(view.indices, vec![1]);
    }

    #[test]
    fn degenerate_range_is_empty() {
        let ds = two_site_dataset();
        for range in [(1000.0, 1000.0), (3000.0, 1000.0)] {
            let view = payload_correlation(&ds, &SiteSelection::AllSites, range);
            assert!(view.indices.is_empty());
        }
    }

    #[test]
    fn widening_the_range_never_drops_records() {
        let ds = two_site_dataset();
        let narrow = payload_correlation(&ds, &SiteSelection::AllSites, (1000.0, 3000.0));
        let wide = payload_correlation(&ds, &SiteSelection::AllSites, (0.0, 6000.0));
        for idx in &narrow.indices {
            assert!(wide.indices.contains(idx));
        }
    }

    #[test]
    fn full_open_range_keeps_everything_in_scope() {
        let ds = two_site_dataset();
        let view = payload_correlation(&ds, &SiteSelection::AllSites, (0.0, 10000.0));
        assert_eq!(view.indices.len(), ds.len());
        assert_eq!(
            view.title,
            "Correlation Between Payload and Success for All Sites"
        );

        let view = payload_correlation(&ds, &SiteSelection::Site("B".into()), (0.0, 10000.0));
        assert_eq!(view.indices.len(), 5);
        assert_eq!(
            view.title,
            "Correlation Between Payload and Success for Site B"
        );
    }
}
