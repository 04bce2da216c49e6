//! Park-wide error type.
//!
//! Sub-crates define their own error enums and wrap `BcError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `bc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum BcError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bc-core`.
pub type BcResult<T> = Result<T, BcError>;
