use super::filter::FilteredRow;
use super::model::{Column, Dataset};

// ---------------------------------------------------------------------------
// Pearson correlation over the fixed 11-column set
// ---------------------------------------------------------------------------

/// Symmetric 11×11 matrix of Pearson coefficients over [`Column::ALL`].
/// Cells with no defined correlation (empty selection, constant column, no
/// overlapping present values) are `NaN`, never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    values: [[f64; Column::COUNT]; Column::COUNT],
}

impl CorrelationMatrix {
    pub fn get(&self, a: Column, b: Column) -> f64 {
        self.values[a as usize][b as usize]
    }

    fn all_nan() -> Self {
        CorrelationMatrix {
            values: [[f64::NAN; Column::COUNT]; Column::COUNT],
        }
    }
}

/// Compute the pairwise-complete correlation matrix over the filtered rows.
///
/// Each (a, b) cell uses exactly the rows where both a and b are present;
/// missingness in the other nine columns does not exclude a row. The
/// diagonal is 1 whenever the column has any variance, `NaN` otherwise.
pub fn correlation_matrix(dataset: &Dataset, rows: &[FilteredRow]) -> CorrelationMatrix {
    let mut matrix = CorrelationMatrix::all_nan();
    if rows.is_empty() {
        return matrix;
    }

    for (i, a) in Column::ALL.iter().enumerate() {
        for (j, b) in Column::ALL.iter().enumerate().skip(i) {
            let r = if i == j {
                diagonal(dataset, rows, *a)
            } else {
                pearson(dataset, rows, *a, *b)
            };
            matrix.values[i][j] = r;
            matrix.values[j][i] = r;
        }
    }
    matrix
}

/// Exactly 1 when the column varies over its present values, `NaN` for a
/// constant or all-missing column.
fn diagonal(dataset: &Dataset, rows: &[FilteredRow], col: Column) -> f64 {
    let mut n = 0u32;
    let mut sum = 0.0;
    let mut sum_sq = 0.0;
    for fr in rows {
        if let Some(v) = dataset.observations[fr.row].value(col) {
            n += 1;
            sum += v;
            sum_sq += v * v;
        }
    }
    if n < 2 {
        return f64::NAN;
    }
    let variance = sum_sq - sum * sum / n as f64;
    if variance > 0.0 {
        1.0
    } else {
        f64::NAN
    }
}

/// Pearson r over the rows where both columns are present.
fn pearson(dataset: &Dataset, rows: &[FilteredRow], a: Column, b: Column) -> f64 {
    let mut n = 0u32;
    let mut sum_a = 0.0;
    let mut sum_b = 0.0;
    let mut sum_aa = 0.0;
    let mut sum_bb = 0.0;
    let mut sum_ab = 0.0;

    for fr in rows {
        let obs = &dataset.observations[fr.row];
        let (Some(va), Some(vb)) = (obs.value(a), obs.value(b)) else {
            continue;
        };
        n += 1;
        sum_a += va;
        sum_b += vb;
        sum_aa += va * va;
        sum_bb += vb * vb;
        sum_ab += va * vb;
    }

    if n < 2 {
        return f64::NAN;
    }
    let n = n as f64;
    let cov = sum_ab - sum_a * sum_b / n;
    let var_a = sum_aa - sum_a * sum_a / n;
    let var_b = sum_bb - sum_b * sum_b / n;
    if var_a <= 0.0 || var_b <= 0.0 {
        return f64::NAN;
    }
    // Round-off can push |r| marginally past 1.
    (cov / (var_a * var_b).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filter_rows, FilterSelection};
    use crate::data::model::tests::obs;
    use crate::data::model::Observation;

    fn row(day: u32, pm25: Option<f64>, temp: Option<f64>, wspm: Option<f64>) -> Observation {
        Observation {
            pm25,
            temp,
            wspm,
            ..obs(2013, 1, day)
        }
    }

    fn matrix_for(observations: Vec<Observation>) -> CorrelationMatrix {
        let ds = Dataset::from_observations(observations);
        let rows = filter_rows(&ds, &FilterSelection::all(&ds));
        correlation_matrix(&ds, &rows)
    }

    #[test]
    fn matrix_is_symmetric() {
        let m = matrix_for(vec![
            row(1, Some(10.0), Some(1.0), Some(3.0)),
            row(2, Some(20.0), Some(4.0), Some(1.0)),
            row(3, Some(15.0), Some(2.0), Some(2.5)),
        ]);
        for a in Column::ALL {
            for b in Column::ALL {
                let ab = m.get(a, b);
                let ba = m.get(b, a);
                assert!(
                    ab.to_bits() == ba.to_bits(),
                    "corr({a}, {b}) = {ab} but corr({b}, {a}) = {ba}"
                );
            }
        }
    }

    #[test]
    fn diagonal_is_one_for_varying_columns_and_nan_for_constant() {
        let m = matrix_for(vec![
            row(1, Some(10.0), Some(5.0), None),
            row(2, Some(20.0), Some(5.0), None),
        ]);
        assert_eq!(m.get(Column::Pm25, Column::Pm25), 1.0);
        // TEMP is constant, WSPM is all-missing.
        assert!(m.get(Column::Temp, Column::Temp).is_nan());
        assert!(m.get(Column::Wspm, Column::Wspm).is_nan());
    }

    #[test]
    fn perfect_linear_relationships_hit_the_bounds() {
        let m = matrix_for(vec![
            row(1, Some(1.0), Some(2.0), Some(9.0)),
            row(2, Some(2.0), Some(4.0), Some(7.0)),
            row(3, Some(3.0), Some(6.0), Some(5.0)),
        ]);
        assert!((m.get(Column::Pm25, Column::Temp) - 1.0).abs() < 1e-12);
        assert!((m.get(Column::Pm25, Column::Wspm) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn values_stay_within_unit_interval() {
        let m = matrix_for(vec![
            row(1, Some(12.0), Some(-3.5), Some(2.0)),
            row(2, Some(80.0), Some(4.0), Some(0.5)),
            row(3, Some(33.0), Some(10.1), Some(3.3)),
            row(4, Some(55.0), Some(1.2), Some(1.1)),
        ]);
        for a in Column::ALL {
            for b in Column::ALL {
                let r = m.get(a, b);
                assert!(r.is_nan() || (-1.0..=1.0).contains(&r), "corr({a}, {b}) = {r}");
            }
        }
    }

    #[test]
    fn pairwise_deletion_ignores_missingness_elsewhere() {
        // PM2.5/TEMP overlap only on days 1 and 2; WSPM is missing there,
        // which must not drop those rows from the PM2.5/TEMP pair.
        let m = matrix_for(vec![
            row(1, Some(1.0), Some(10.0), None),
            row(2, Some(2.0), Some(20.0), None),
            row(3, Some(3.0), None, Some(5.0)),
        ]);
        assert!((m.get(Column::Pm25, Column::Temp) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_selection_gives_an_all_nan_matrix() {
        let ds = Dataset::from_observations(vec![row(1, Some(1.0), Some(2.0), Some(3.0))]);
        let m = correlation_matrix(&ds, &[]);
        for a in Column::ALL {
            for b in Column::ALL {
                assert!(m.get(a, b).is_nan());
            }
        }
    }
}
