/// Data layer: core types, loading, filtering, aggregation, correlation.
///
/// Architecture:
/// ```text
///  dashboard/main_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset (immutable for the session)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year/month selection → FilteredRow indices + season
///   └──────────┘
///        │
///        ├──────────────┬──────────────┐
///        ▼              ▼              ▼
///   ┌──────────┐  ┌──────────┐  ┌───────────┐
///   │ aggregate │  │ aggregate │  │ correlate  │
///   │ (month/   │  │ (season)  │  │ (11×11     │
///   │  day)     │  │           │  │  Pearson)  │
///   └──────────┘  └──────────┘  └───────────┘
/// ```
///
/// The pipeline is rerun in full on every selection change; nothing is
/// cached between runs except the loaded table itself.
pub mod aggregate;
pub mod correlate;
pub mod filter;
pub mod loader;
pub mod model;
