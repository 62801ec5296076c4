//! Framework error type.
//!
//! Sub-crates define their own error enums and convert them into `CoreError`
//! or wrap it as a variant via `#[from]`. Both patterns are acceptable;
//! prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{AirportId, CargoId, PlaneId};

/// The top-level error type for `cargoctl-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("plane {0} not found")]
    PlaneNotFound(PlaneId),

    #[error("airport {0} not found")]
    AirportNotFound(AirportId),

    #[error("cargo {0} not found")]
    CargoNotFound(CargoId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `cargoctl-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
