use std::collections::BTreeMap;

use crate::data::aggregate::{daily_means, monthly_means, seasonal_means, ColumnMeans};
use crate::data::correlate::{correlation_matrix, CorrelationMatrix};
use crate::data::filter::{filter_rows, FilterSelection, FilteredRow};
use crate::data::model::{Column, Dataset, Season};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Holds the immutable dataset,
/// the current selection, and the cached outputs of the analysis pipeline.
pub struct AppState {
    /// Loaded dataset; read-only for the rest of the session.
    pub dataset: Dataset,

    /// Current year/month/pollutant selection.
    pub selection: FilterSelection,

    /// Rows passing the current filter (cached).
    pub filtered: Vec<FilteredRow>,

    /// Per-month means over the filtered rows.
    pub monthly: BTreeMap<u32, ColumnMeans>,

    /// Per-season means over the filtered rows.
    pub seasonal: BTreeMap<Season, ColumnMeans>,

    /// Per-day-of-month means over the filtered rows.
    pub daily: BTreeMap<u32, ColumnMeans>,

    /// Pollutant/weather correlation over the filtered rows.
    pub correlation: CorrelationMatrix,
}

impl AppState {
    /// Start with everything selected and PM2.5 as the plotted pollutant.
    pub fn new(dataset: Dataset) -> Self {
        let selection = FilterSelection::all(&dataset);
        let filtered = filter_rows(&dataset, &selection);
        let monthly = monthly_means(&dataset, &filtered);
        let seasonal = seasonal_means(&dataset, &filtered);
        let daily = daily_means(&dataset, &filtered);
        let correlation = correlation_matrix(&dataset, &filtered);
        AppState {
            dataset,
            selection,
            filtered,
            monthly,
            seasonal,
            daily,
            correlation,
        }
    }

    /// Rerun filter → aggregates → correlation after a selection change.
    pub fn recompute(&mut self) {
        self.filtered = filter_rows(&self.dataset, &self.selection);
        self.monthly = monthly_means(&self.dataset, &self.filtered);
        self.seasonal = seasonal_means(&self.dataset, &self.filtered);
        self.daily = daily_means(&self.dataset, &self.filtered);
        self.correlation = correlation_matrix(&self.dataset, &self.filtered);
    }

    /// Toggle a single year in the selection.
    pub fn toggle_year(&mut self, year: i32) {
        if !self.selection.years.remove(&year) {
            self.selection.years.insert(year);
        }
        self.recompute();
    }

    /// Toggle a single month in the selection.
    pub fn toggle_month(&mut self, month: u32) {
        if !self.selection.months.remove(&month) {
            self.selection.months.insert(month);
        }
        self.recompute();
    }

    /// Select every available year.
    pub fn select_all_years(&mut self) {
        self.selection.years = self.dataset.years.clone();
        self.recompute();
    }

    /// Deselect every year (the charts go empty, by contract).
    pub fn select_no_years(&mut self) {
        self.selection.years.clear();
        self.recompute();
    }

    /// Select every available month.
    pub fn select_all_months(&mut self) {
        self.selection.months = self.dataset.months.clone();
        self.recompute();
    }

    /// Deselect every month.
    pub fn select_no_months(&mut self) {
        self.selection.months.clear();
        self.recompute();
    }

    /// Switch the plotted pollutant. The row set is unaffected, so no
    /// recompute is needed; the charts read the cached aggregates by column.
    pub fn set_pollutant(&mut self, pollutant: Column) {
        self.selection.pollutant = pollutant;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::obs;
    use crate::data::model::Observation;

    fn sample_state() -> AppState {
        let rows = vec![
            Observation {
                pm25: Some(10.0),
                ..obs(2013, 1, 1)
            },
            Observation {
                pm25: Some(30.0),
                ..obs(2013, 6, 1)
            },
            Observation {
                pm25: Some(50.0),
                ..obs(2014, 1, 2)
            },
        ];
        AppState::new(Dataset::from_observations(rows))
    }

    #[test]
    fn starts_with_everything_selected() {
        let state = sample_state();
        assert_eq!(state.selection.years.len(), 2);
        assert_eq!(state.selection.months.len(), 2);
        assert_eq!(state.selection.pollutant, Column::Pm25);
        assert_eq!(state.filtered.len(), 3);
    }

    #[test]
    fn toggling_a_year_refilters_and_reaggregates() {
        let mut state = sample_state();
        state.toggle_year(2014);
        assert_eq!(state.filtered.len(), 2);

        let january = state.monthly.get(&1).unwrap();
        assert_eq!(january.get(Column::Pm25), Some(10.0));

        // Toggling back restores the 2014 row.
        state.toggle_year(2014);
        assert_eq!(state.filtered.len(), 3);
        let january = state.monthly.get(&1).unwrap();
        assert_eq!(january.get(Column::Pm25), Some(30.0));
    }

    #[test]
    fn deselecting_everything_degrades_to_empty_outputs() {
        let mut state = sample_state();
        state.select_no_months();
        assert!(state.filtered.is_empty());
        assert!(state.monthly.is_empty());
        assert!(state.seasonal.is_empty());
        assert!(state.daily.is_empty());
        assert!(state.correlation.get(Column::Pm25, Column::Temp).is_nan());
    }

    #[test]
    fn switching_pollutant_keeps_the_row_set() {
        let mut state = sample_state();
        let before = state.filtered.clone();
        state.set_pollutant(Column::O3);
        assert_eq!(state.selection.pollutant, Column::O3);
        assert_eq!(state.filtered, before);
    }
}
