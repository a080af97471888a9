// Insights aggregation — the three risk datasets boiled down to ranked
// scam themes and high-risk domains.
//
// The pipeline is: loader (fetch + parse all three CSVs, all-or-nothing)
// -> aggregate (pure ranking over in-window records). Nothing here talks
// to the TrustLens backend; the datasets are static assets.

pub mod aggregate;
pub mod loader;
pub mod records;
pub mod themes;

pub use aggregate::{aggregate, InsightsParams, InsightsSummary, RankedEntry};
pub use loader::{load_datasets, DatasetSource, Datasets, FileSource, HttpSource};
