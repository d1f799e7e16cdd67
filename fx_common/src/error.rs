//! Error types shared by the engine and the widget front end.
//!
//! The `FxError` enum unifies the failure cases of reference-data loading,
//! boot-context parsing and order submission so that every crate in the
//! workspace can propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the engine and the front end.
#[derive(Error, Debug)]
pub enum FxError {
    /// I/O error originating from the standard library (data files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// One of the reference tables could not be loaded; contains the file and the cause.
    #[error("Failed to load widget data: {0}")]
    DataLoad(String),

    /// Channel receive failed while collecting loader results.
    #[error("Channel receive failed: {0}")]
    ChannelRecv(String),

    /// Submit attempted without a currency rate or a non-zero amount.
    #[error("Please select currency and enter amount.")]
    IncompleteOrder,
}

impl From<crossbeam_channel::RecvError> for FxError {
    fn from(err: crossbeam_channel::RecvError) -> Self {
        FxError::ChannelRecv(err.to_string())
    }
}
