use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("a drain is already in progress on this elevator")]
    AlreadyRunning,

    #[error("elevator service has stopped")]
    ServiceStopped,

    #[error(transparent)]
    Lift(#[from] LiftError),
}

pub type SimResult<T> = Result<T, SimError>;
