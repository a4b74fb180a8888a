use lift_core::LiftError;
use lift_sim::SimError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lift(#[from] LiftError),

    #[error(transparent)]
    Sim(#[from] SimError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
