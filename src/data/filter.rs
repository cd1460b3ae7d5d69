use std::collections::BTreeSet;

use super::model::{Column, Dataset, Season};

// ---------------------------------------------------------------------------
// Filter selection: which years/months are shown, which pollutant is plotted
// ---------------------------------------------------------------------------

/// The user's current selection. Ephemeral UI state, re-applied to the
/// immutable dataset on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub years: BTreeSet<i32>,
    pub months: BTreeSet<u32>,
    /// Pollutant the trend charts draw. Does not narrow the row set.
    pub pollutant: Column,
}

impl FilterSelection {
    /// Default selection: everything shown, PM2.5 plotted.
    pub fn all(dataset: &Dataset) -> Self {
        FilterSelection {
            years: dataset.years.clone(),
            months: dataset.months.clone(),
            pollutant: Column::Pm25,
        }
    }
}

// ---------------------------------------------------------------------------
// Filtered view: indices into the dataset plus the derived season
// ---------------------------------------------------------------------------

/// One row passing the filter. Indexes into `Dataset::observations` so the
/// source table is never copied or mutated; the season label lives here, on
/// the filtered side only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteredRow {
    pub row: usize,
    pub season: Season,
}

/// Rows whose `year` and `month` are both in the selected sets. An empty
/// year or month set selects nothing; that is a valid (empty) result, not an
/// error.
pub fn filter_rows(dataset: &Dataset, selection: &FilterSelection) -> Vec<FilteredRow> {
    if selection.years.is_empty() || selection.months.is_empty() {
        return Vec::new();
    }

    dataset
        .observations
        .iter()
        .enumerate()
        .filter(|(_, obs)| {
            selection.years.contains(&obs.year) && selection.months.contains(&obs.month)
        })
        .map(|(row, obs)| FilteredRow {
            row,
            season: Season::from_month(obs.month),
        })
        .collect()
}
