//! Error taxonomy for stream pipelines.
//!
//! Every failure is reported synchronously by the terminal operation that
//! triggered it. Nothing is retried, and a stream that failed is spent.

use thiserror::Error;

/// Result type for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

/// Errors that can occur while building or driving a stream.
#[derive(Error, Debug)]
pub enum StreamError {
    /// `next()` was called on a source that has no remaining elements.
    #[error("source exhausted: next() called with no remaining elements")]
    Exhausted,

    /// A terminal operation ran on a stream that was already consumed.
    #[error("stream already consumed by a terminal operation; cannot run `{operation}`")]
    SpentPipeline {
        /// The terminal operation that was rejected.
        operation: &'static str,
    },

    /// A reduction with no sensible result over an empty input.
    #[error("`{operation}` requires at least one element")]
    EmptyInput {
        /// The reduction that received no elements.
        operation: &'static str,
    },

    /// A stage or config parameter that makes no sense (window size 0, bad JSON config).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A caller-supplied function failed; its error is carried unmodified.
    #[error(transparent)]
    Callback(#[from] anyhow::Error),
}

impl StreamError {
    /// Shorthand for [`StreamError::InvalidConfiguration`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Whether this error was raised by a caller-supplied function.
    #[must_use]
    pub fn is_callback(&self) -> bool {
        matches!(self, Self::Callback(_))
    }
}
