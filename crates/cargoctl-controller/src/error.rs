use cargoctl_core::PlaneId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("scenario has no scenario_info row; processing_time is undefined")]
    MissingScenarioInfo,

    #[error("agent {0} observed but not known to this controller")]
    UnknownAgent(PlaneId),

    #[error("planning error: {0}")]
    Plan(#[from] cargoctl_plan::PlanError),
}

pub type ControllerResult<T> = Result<T, ControllerError>;
