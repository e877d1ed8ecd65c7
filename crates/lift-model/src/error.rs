use lift_core::LiftId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LiftError {
    #[error("lift {0} is between floors and cannot be commanded")]
    BetweenFloors(LiftId),
}

pub type LiftResult<T> = Result<T, LiftError>;
