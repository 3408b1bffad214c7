//! Error type for the TopoART engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopoArtError {
    #[error("configuration error: {0}")]
    Config(String),

    /// `index` is the 0-based position of the offending sample within the
    /// input of the failing call: the batch position for `fit`, always `0`
    /// for single-sample calls (`learn`, `predict`, `train_sample`).
    #[error("invalid input at sample {index}: {reason}")]
    InvalidInput { index: usize, reason: String },

    #[error("dimension mismatch: expected {expected} components, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TopoArtError>;
