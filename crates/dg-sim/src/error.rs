use dg_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("invalid simulation layout: {0}")]
    Layout(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
