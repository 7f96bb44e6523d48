use thiserror::Error;

/// Failure of a single sensor refresh.
///
/// These never stop a refresh cycle; the monitor logs them and moves on.
#[derive(Debug, Error)]
pub enum SensorError {
    #[error("sensor source not available: {path}")]
    NotAvailable { path: String },

    #[error("failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {detail}")]
    ParseError { path: String, detail: String },

    #[error("{0}")]
    Other(String),
}
