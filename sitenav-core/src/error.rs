use thiserror::Error;

/// Errors raised while loading map data.
///
/// Routing and search never return these: data-quality problems inside an
/// already loaded map degrade to "no answer" instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
