//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `DpError` as one variant
//! where they need to surface configuration problems.

use thiserror::Error;

/// The top-level error type for `dp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum DpError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `dp-*` crates.
pub type DpResult<T> = Result<T, DpError>;
