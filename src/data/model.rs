use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Column – the fixed set of numeric measurement columns
// ---------------------------------------------------------------------------

/// One of the 11 numeric columns the dashboard analyses: six pollutant
/// concentrations and five weather variables. The discriminant doubles as a
/// stable array index (`col as usize`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Pm25,
    Pm10,
    So2,
    No2,
    Co,
    O3,
    Temp,
    Pres,
    Dewp,
    Rain,
    Wspm,
}

impl Column {
    pub const COUNT: usize = 11;

    /// All numeric columns, in fixed heatmap order (pollutants then weather).
    pub const ALL: [Column; Self::COUNT] = [
        Column::Pm25,
        Column::Pm10,
        Column::So2,
        Column::No2,
        Column::Co,
        Column::O3,
        Column::Temp,
        Column::Pres,
        Column::Dewp,
        Column::Rain,
        Column::Wspm,
    ];

    /// The six pollutants selectable in the UI.
    pub const POLLUTANTS: [Column; 6] = [
        Column::Pm25,
        Column::Pm10,
        Column::So2,
        Column::No2,
        Column::Co,
        Column::O3,
    ];

    /// The five weather variables.
    pub const WEATHER: [Column; 5] = [
        Column::Temp,
        Column::Pres,
        Column::Dewp,
        Column::Rain,
        Column::Wspm,
    ];

    /// Header name in the source CSV (also the display name).
    pub fn name(self) -> &'static str {
        match self {
            Column::Pm25 => "PM2.5",
            Column::Pm10 => "PM10",
            Column::So2 => "SO2",
            Column::No2 => "NO2",
            Column::Co => "CO",
            Column::O3 => "O3",
            Column::Temp => "TEMP",
            Column::Pres => "PRES",
            Column::Dewp => "DEWP",
            Column::Rain => "RAIN",
            Column::Wspm => "WSPM",
        }
    }

    pub fn is_pollutant(self) -> bool {
        Self::POLLUTANTS.contains(&self)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Season – derived from the month, never read from the source file
// ---------------------------------------------------------------------------

/// Meteorological season. `Ord` follows the declaration order so grouped
/// results iterate Winter → Spring → Summer → Autumn for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [
        Season::Winter,
        Season::Spring,
        Season::Summer,
        Season::Autumn,
    ];

    /// Map a calendar month (1–12) to its season.
    pub fn from_month(month: u32) -> Season {
        match month {
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            9..=11 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Autumn => "Autumn",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Observation – one row of the source table
// ---------------------------------------------------------------------------

/// One timestamped station reading. Numeric cells may be missing; a `None`
/// cell never participates in a mean or correlation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Observation {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(rename = "PM2.5", deserialize_with = "de_opt_f64")]
    pub pm25: Option<f64>,
    #[serde(rename = "PM10", deserialize_with = "de_opt_f64")]
    pub pm10: Option<f64>,
    #[serde(rename = "SO2", deserialize_with = "de_opt_f64")]
    pub so2: Option<f64>,
    #[serde(rename = "NO2", deserialize_with = "de_opt_f64")]
    pub no2: Option<f64>,
    #[serde(rename = "CO", deserialize_with = "de_opt_f64")]
    pub co: Option<f64>,
    #[serde(rename = "O3", deserialize_with = "de_opt_f64")]
    pub o3: Option<f64>,
    #[serde(rename = "TEMP", deserialize_with = "de_opt_f64")]
    pub temp: Option<f64>,
    #[serde(rename = "PRES", deserialize_with = "de_opt_f64")]
    pub pres: Option<f64>,
    #[serde(rename = "DEWP", deserialize_with = "de_opt_f64")]
    pub dewp: Option<f64>,
    #[serde(rename = "RAIN", deserialize_with = "de_opt_f64")]
    pub rain: Option<f64>,
    #[serde(rename = "WSPM", deserialize_with = "de_opt_f64")]
    pub wspm: Option<f64>,
}

/// Treat empty cells and the literal `NA` (pandas export) as missing.
fn de_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na") {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(serde::de::Error::custom)
}

impl Observation {
    /// Numeric cell lookup by column.
    pub fn value(&self, col: Column) -> Option<f64> {
        match col {
            Column::Pm25 => self.pm25,
            Column::Pm10 => self.pm10,
            Column::So2 => self.so2,
            Column::No2 => self.no2,
            Column::Co => self.co,
            Column::O3 => self.o3,
            Column::Temp => self.temp,
            Column::Pres => self.pres,
            Column::Dewp => self.dewp,
            Column::Rain => self.rain,
            Column::Wspm => self.wspm,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table, immutable after loading, with the distinct year and
/// month values pre-computed for the filter widgets.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All rows in file order.
    pub observations: Vec<Observation>,
    /// Sorted distinct years present in the data.
    pub years: BTreeSet<i32>,
    /// Sorted distinct months present in the data.
    pub months: BTreeSet<u32>,
}

impl Dataset {
    /// Build the distinct-value indices from the loaded rows.
    pub fn from_observations(observations: Vec<Observation>) -> Self {
        let mut years = BTreeSet::new();
        let mut months = BTreeSet::new();
        for obs in &observations {
            years.insert(obs.year);
            months.insert(obs.month);
        }
        Dataset {
            observations,
            years,
            months,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[test]
    fn season_mapping_is_total_over_calendar_months() {
        for m in [12, 1, 2] {
            assert_eq!(Season::from_month(m), Season::Winter, "month {m}");
        }
        for m in 3..=5 {
            assert_eq!(Season::from_month(m), Season::Spring, "month {m}");
        }
        for m in 6..=8 {
            assert_eq!(Season::from_month(m), Season::Summer, "month {m}");
        }
        for m in 9..=11 {
            assert_eq!(Season::from_month(m), Season::Autumn, "month {m}");
        }
    }

    #[test]
    fn season_display_order_is_canonical() {
        let names: Vec<&str> = Season::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["Winter", "Spring", "Summer", "Autumn"]);
        assert!(Season::Winter < Season::Spring);
        assert!(Season::Summer < Season::Autumn);
    }

    #[test]
    fn column_indices_are_stable_and_distinct() {
        for (i, col) in Column::ALL.iter().enumerate() {
            assert_eq!(*col as usize, i);
        }
        assert_eq!(
            Column::POLLUTANTS.len() + Column::WEATHER.len(),
            Column::COUNT
        );
    }

    #[test]
    fn dataset_indexes_distinct_years_and_months() {
        let rows = vec![
            obs(2013, 3, 1),
            obs(2013, 4, 2),
            obs(2014, 3, 5),
            obs(2014, 3, 6),
        ];
        let ds = Dataset::from_observations(rows);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.years.iter().copied().collect::<Vec<_>>(), [2013, 2014]);
        assert_eq!(ds.months.iter().copied().collect::<Vec<_>>(), [3, 4]);
    }

    /// Blank row for building synthetic tables in the data-layer tests.
    pub(crate) fn obs(year: i32, month: u32, day: u32) -> Observation {
        Observation {
            year,
            month,
            day,
            hour: 0,
            pm25: None,
            pm10: None,
            so2: None,
            no2: None,
            co: None,
            o3: None,
            temp: None,
            pres: None,
            dewp: None,
            rain: None,
            wspm: None,
        }
    }
}
