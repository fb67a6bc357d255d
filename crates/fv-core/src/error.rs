//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  The render path
//! itself is infallible by design — missing data degrades to skipped flows,
//! never to an error.

use thiserror::Error;

/// The top-level error type for `fv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),
}

/// Shorthand result type for all `fv-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
