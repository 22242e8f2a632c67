//! Errors surfaced to the host by the mod contracts.
//!
//! Configuration problems are not errors at this level: the mod reports them
//! through [`ActivationOutcome`](crate::ActivationOutcome) and leaves the table
//! alone. Only failures the host has to act on end up here.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("stamina table unavailable: {0}")]
    TableUnavailable(String),
}
