use crate::color::ColorMap;
use crate::data::filter::{
    PayloadCorrelation, SiteSelection, SuccessDistribution, payload_correlation,
    success_distribution,
};
use crate::data::model::LaunchDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is injected once after a successful load and never mutated;
/// both chart views are recomputed from it by direct function call whenever
/// an input control changes.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<LaunchDataset>,

    /// Current dropdown value.
    pub site_selection: SiteSelection,

    /// Current slider values (low, high), in kg.
    pub payload_range: (f64, f64),

    /// Cached pie-chart view for the current selection.
    pub distribution: Option<SuccessDistribution>,

    /// Cached scatter-chart view for the current selection and range.
    pub correlation: Option<PayloadCorrelation>,

    /// Booster-category colour map.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            site_selection: SiteSelection::AllSites,
            payload_range: (0.0, 0.0),
            distribution: None,
            correlation: None,
            color_map: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the controls to their
    /// defaults: "All Sites" and the dataset's own payload bounds.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        self.site_selection = SiteSelection::AllSites;
        self.payload_range = (dataset.payload_min, dataset.payload_max);
        self.color_map = Some(ColorMap::new(&dataset.booster_categories));

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
        self.recompute();
    }

    /// Re-derive both chart views from the current inputs.
    pub fn recompute(&mut self) {
        if let Some(ds) = &self.dataset {
            self.distribution = Some(success_distribution(ds, &self.site_selection));
            self.correlation = Some(payload_correlation(
                ds,
                &self.site_selection,
                self.payload_range,
            ));
            log::debug!(
                "recomputed views: selection={}, range={:?}, {} points in view",
                self.site_selection,
                self.payload_range,
                self.correlation.as_ref().map_or(0, |c| c.indices.len())
            );
        }
    }

    /// Dropdown change handler.
    pub fn set_site_selection(&mut self, selection: SiteSelection) {
        if self.site_selection != selection {
            self.site_selection = selection;
            self.recompute();
        }
    }

    /// Slider change handler. Keeps low <= high; the filter itself tolerates
    /// any pair, this just keeps the controls sensible.
    pub fn set_payload_range(&mut self, low: f64, high: f64) {
        let range = (low.min(high), high.max(low));
        if self.payload_range != range {
            self.payload_range = range;
            self.recompute();
        }
    }

    /// Number of records in the current scatter view.
    pub fn visible_count(&self) -> usize {
        self.correlation.as_ref().map_or(0, |c| c.indices.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord {
                site: "CCAFS LC-40".to_string(),
                payload_mass_kg: 1500.0,
                outcome: Outcome::Success,
                booster_category: "FT".to_string(),
            },
            LaunchRecord {
                site: "KSC LC-39A".to_string(),
                payload_mass_kg: 4000.0,
                outcome: Outcome::Failure,
                booster_category: "B4".to_string(),
            },
        ])
    }

    #[test]
    fn set_dataset_resets_controls_to_defaults() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        assert_eq!(state.site_selection, SiteSelection::AllSites);
        assert_eq!(state.payload_range, (1500.0, 4000.0));
        assert!(state.distribution.is_some());
        assert!(state.correlation.is_some());
    }

    #[test]
    fn changing_selection_recomputes_views() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_payload_range(0.0, 10000.0);
        assert_eq!(state.visible_count(), 2);

        state.set_site_selection(SiteSelection::Site("KSC LC-39A".to_string()));
        assert_eq!(state.visible_count(), 1);
        let dist = state.distribution.as_ref().unwrap();
        assert_eq!(dist.title, "Total Success Launches for site KSC LC-39A");
    }

    #[test]
    fn crossed_slider_values_are_reordered() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.set_payload_range(5000.0, 1000.0);
        assert_eq!(state.payload_range, (1000.0, 5000.0));
    }
}
