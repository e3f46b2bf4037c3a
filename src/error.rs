// Error taxonomy for catalog ingestion
use thiserror::Error;

// Structurally short lines are not errors (they are skipped without a trace
// beyond a debug log), and a query with no qualifying vendor is `None`, not
// an error. Only these conditions surface as `Err`.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid vendor id '{0}'")]
    InvalidVendorId(String),

    #[error("invalid price '{0}'")]
    InvalidPrice(String),

    #[error("catalog source unavailable: {0}")]
    Io(#[from] std::io::Error),
}
