use lift_model::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatch commanded an uncommandable lift: {0}")]
    Lift(#[from] LiftError),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
