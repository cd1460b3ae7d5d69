use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{Column, Dataset, Observation};

// ---------------------------------------------------------------------------
// Fixed data source
// ---------------------------------------------------------------------------

/// Location of the cleaned station data, relative to the working directory.
pub const DATA_PATH: &str = "dashboard/main_data.csv";

/// Columns the header must contain before any row is parsed.
const REQUIRED_COLUMNS: [&str; 3] = ["year", "month", "day"];

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Loader failures. All of them are fatal at startup: without the table
/// there is nothing to render.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("data file unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("malformed data file: {0}")]
    Malformed(#[from] csv::Error),

    #[error("data file is missing required column '{0}'")]
    MissingColumn(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the station dataset from a CSV file. Performed once per session; the
/// returned [`Dataset`] is never mutated afterwards.
pub fn load_file(path: &Path) -> Result<Dataset, DataError> {
    let file = std::fs::File::open(path)?;
    let dataset = from_reader(file)?;
    log::info!(
        "Loaded {} observations ({} years, {} months) from {}",
        dataset.len(),
        dataset.years.len(),
        dataset.months.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV text from any reader. Split out from [`load_file`] so the parse
/// path is testable without touching the filesystem.
pub fn from_reader<R: Read>(reader: R) -> Result<Dataset, DataError> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    validate_header(csv_reader.headers()?)?;

    let mut observations = Vec::new();
    for result in csv_reader.deserialize::<Observation>() {
        observations.push(result?);
    }

    Ok(Dataset::from_observations(observations))
}

/// Require the date columns and all 11 numeric columns up front, so a wrong
/// file fails with a column name rather than a per-row parse error.
fn validate_header(headers: &csv::StringRecord) -> Result<(), DataError> {
    let has = |name: &str| headers.iter().any(|h| h == name);

    for required in REQUIRED_COLUMNS {
        if !has(required) {
            return Err(DataError::MissingColumn(required.to_string()));
        }
    }
    for col in Column::ALL {
        if !has(col.name()) {
            return Err(DataError::MissingColumn(col.name().to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "year,month,day,hour,PM2.5,PM10,SO2,NO2,CO,O3,TEMP,PRES,DEWP,RAIN,WSPM";

    #[test]
    fn parses_rows_with_missing_cells() {
        let csv = format!(
            "{HEADER}\n\
             2013,3,1,0,7.0,10.0,5.0,14.0,300.0,81.0,-0.5,1024.5,-20.2,0.0,2.1\n\
             2013,3,1,1,NA,12.0,,15.0,300.0,80.0,-0.7,1025.1,-19.6,0.0,1.8\n"
        );
        let ds = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);

        let first = &ds.observations[0];
        assert_eq!(first.year, 2013);
        assert_eq!(first.month, 3);
        assert_eq!(first.pm25, Some(7.0));

        let second = &ds.observations[1];
        assert_eq!(second.pm25, None, "NA must parse as missing");
        assert_eq!(second.so2, None, "empty cell must parse as missing");
        assert_eq!(second.pm10, Some(12.0));
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_file(Path::new("definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, DataError::Unavailable(_)));
    }

    #[test]
    fn missing_required_column_is_rejected() {
        // No PM10 column.
        let csv = "year,month,day,hour,PM2.5,SO2,NO2,CO,O3,TEMP,PRES,DEWP,RAIN,WSPM\n";
        let err = from_reader(csv.as_bytes()).unwrap_err();
        match err {
            DataError::MissingColumn(name) => assert_eq!(name, "PM10"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_cell_is_malformed() {
        let csv = format!(
            "{HEADER}\n\
             2013,3,1,0,oops,10.0,5.0,14.0,300.0,81.0,-0.5,1024.5,-20.2,0.0,2.1\n"
        );
        let err = from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Malformed(_)));
    }
}
