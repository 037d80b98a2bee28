use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open listings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed listings CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("listings file is missing required column '{0}'")]
    MissingColumn(String),
    #[error("listings file has no rows with Suburb, Price, Type and Rooms")]
    Empty,
}
