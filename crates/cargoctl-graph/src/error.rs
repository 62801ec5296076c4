//! Graph-subsystem error type.

use thiserror::Error;

use cargoctl_core::AirportId;

/// Errors produced by `cargoctl-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no route from {from} to {to}")]
    NoRoute { from: AirportId, to: AirportId },

    #[error("airport {0} not found in network")]
    AirportNotFound(AirportId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
