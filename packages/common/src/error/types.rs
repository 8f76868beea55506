//! Core error types and definitions

use std::sync::Arc;
use thiserror::Error;

/// Source error as raised, shared between clones and context layers
pub(super) type SharedSource = Arc<dyn std::error::Error + Send + Sync>;

/// Failure cause with context propagation support
#[derive(Debug, Clone)]
pub struct Error {
    /// The actual error
    pub(super) inner: Arc<ErrorInner>,
}

#[derive(Debug)]
pub(super) struct ErrorInner {
    /// The error kind
    pub kind: ErrorKind,
    /// Optional error context, outermost first
    pub context: Option<String>,
    /// Optional source error
    pub source: Option<SharedSource>,
    /// Type name of the source at the point it was captured
    pub source_type: Option<&'static str>,
    /// Backtrace captured at error creation
    #[cfg(feature = "full-backtrace")]
    pub backtrace: backtrace::Backtrace,
}

/// Different kinds of failure a `Try` can carry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    /// An error raised by a captured computation
    #[error("Computation failed")]
    Computation,

    /// A filter predicate did not hold
    #[error("Predicate does not hold")]
    NoSuchElement,

    /// An operation that only makes sense on a failure was applied to a success
    #[error("Unsupported operation")]
    UnsupportedOperation,

    /// Other error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
