use std::collections::TryReserveError;

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
pub enum GeoLookupError {
    /// Backing storage for an index could not be reserved.
    #[error("Allocation failed: {0}")]
    Allocation(#[from] TryReserveError),

    /// A builder was finished with a different number of items than it was created for.
    #[error("Added {actual} items when expected {expected}.")]
    ItemCount { expected: usize, actual: usize },

    /// A coordinate cannot be ordered (NaN).
    #[error("Coordinate of item {index} is not comparable.")]
    InvalidCoordinate { index: usize },

    /// A strategy name did not match any known strategy.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, GeoLookupError>;
