//! Result type alias shared across the workspace.
//!
//! Defaults the error type to the common `FxError`, so functions can simply
//! return `Result<T>`.
use crate::error::FxError;

/// Workspace-wide `Result` alias with `FxError` as the default error.
pub type Result<T, E = FxError> = std::result::Result<T, E>;
