use std::collections::BTreeMap;

use super::filter::FilteredRow;
use super::model::{Column, Dataset, Season};

// ---------------------------------------------------------------------------
// Per-group means over the 11 numeric columns
// ---------------------------------------------------------------------------

/// Mean of each numeric column within one group. A column with no present
/// values in the group stays `None`; it is never coerced to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColumnMeans {
    means: [Option<f64>; Column::COUNT],
}

impl ColumnMeans {
    pub fn get(&self, col: Column) -> Option<f64> {
        self.means[col as usize]
    }
}

/// Running sum/count per column. Missing cells contribute to neither.
#[derive(Default)]
struct MeanAccumulator {
    sums: [f64; Column::COUNT],
    counts: [u32; Column::COUNT],
}

impl MeanAccumulator {
    fn add(&mut self, dataset: &Dataset, row: usize) {
        let obs = &dataset.observations[row];
        for col in Column::ALL {
            if let Some(v) = obs.value(col) {
                self.sums[col as usize] += v;
                self.counts[col as usize] += 1;
            }
        }
    }

    fn finish(&self) -> ColumnMeans {
        let mut means = [None; Column::COUNT];
        for i in 0..Column::COUNT {
            if self.counts[i] > 0 {
                means[i] = Some(self.sums[i] / self.counts[i] as f64);
            }
        }
        ColumnMeans { means }
    }
}

/// Group the filtered rows by an arbitrary key and average every numeric
/// column per group. `BTreeMap` keeps month/day keys in ascending order and
/// seasons in their canonical display order.
fn grouped_means<K, F>(dataset: &Dataset, rows: &[FilteredRow], key: F) -> BTreeMap<K, ColumnMeans>
where
    K: Ord,
    F: Fn(&Dataset, &FilteredRow) -> K,
{
    let mut groups: BTreeMap<K, MeanAccumulator> = BTreeMap::new();
    for fr in rows {
        groups
            .entry(key(dataset, fr))
            .or_default()
            .add(dataset, fr.row);
    }
    groups.into_iter().map(|(k, acc)| (k, acc.finish())).collect()
}

/// Mean of every numeric column per calendar month.
pub fn monthly_means(dataset: &Dataset, rows: &[FilteredRow]) -> BTreeMap<u32, ColumnMeans> {
    grouped_means(dataset, rows, |ds, fr| ds.observations[fr.row].month)
}

/// Mean of every numeric column per season (derived at filter time).
pub fn seasonal_means(dataset: &Dataset, rows: &[FilteredRow]) -> BTreeMap<Season, ColumnMeans> {
    grouped_means(dataset, rows, |_, fr| fr.season)
}

/// Mean of every numeric column per day of month.
pub fn daily_means(dataset: &Dataset, rows: &[FilteredRow]) -> BTreeMap<u32, ColumnMeans> {
    grouped_means(dataset, rows, |ds, fr| ds.observations[fr.row].day)
}
