use cargoctl_core::PlaneId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("plane {0:?} not found")]
    PlaneNotFound(PlaneId),

    #[error("routing failed: {0}")]
    Routing(#[from] cargoctl_graph::GraphError),
}

pub type PlanResult<T> = Result<T, PlanError>;
