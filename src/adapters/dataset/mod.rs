//! Dataset Adapters - historical survey rows from delimited files.

mod csv_dataset;

pub use csv_dataset::CsvSurveyDataset;
