use dp_core::DpError;
use thiserror::Error;

use crate::ObserverError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] DpError),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("observer failed: {0}")]
    Observer(#[source] ObserverError),
}

pub type SimResult<T> = Result<T, SimError>;
