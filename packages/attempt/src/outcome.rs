//! The `Try` sum type, its construction helper and accessors

use attempt_common::Error;

/// Outcome of a computation: a value or the cause it failed with
///
/// Values are immutable; every combinator consumes the receiver and returns
/// a new `Try`. Equality is structural over the variant and its payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use = "a Try may hold a failure that should be handled"]
pub enum Try<T> {
    /// The computation produced a value
    Success(T),
    /// The computation raised an error
    Failure(Error),
}

impl<T> Try<T> {
    /// Run `computation` now and capture its outcome
    ///
    /// An `Err` raised by the computation is stored as the cause (see
    /// [`Error::captured`]); an `Error` is stored verbatim. Any error `?`
    /// can box is accepted, so a computation mixing error types may return
    /// `Box<dyn std::error::Error + Send + Sync>`. Panics are not
    /// intercepted.
    pub fn apply<F, E>(computation: F) -> Self
    where
        F: FnOnce() -> std::result::Result<T, E>,
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        match computation() {
            Ok(value) => Self::Success(value),
            Err(raised) => {
                let cause = Error::captured(raised);
                tracing::debug!(kind = %cause.kind(), "computation captured as failure: {cause}");
                Self::Failure(cause)
            }
        }
    }

    /// Wrap a value
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap a cause
    pub fn failure(cause: Error) -> Self {
        Self::Failure(cause)
    }

    /// Whether this holds a value
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Whether this holds a cause
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The value, or the stored cause as `Err`
    ///
    /// # Errors
    ///
    /// Returns the cause unchanged when called on a failure.
    pub fn get(self) -> std::result::Result<T, Error> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }

    /// The value, or `default` on a failure
    pub fn get_or_else(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// `Some(value)` on success, `None` on failure
    pub fn to_optional(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// The stored cause, if any
    #[must_use]
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Borrow the value without consuming; failures are cloned (cheaply)
    pub fn as_ref(&self) -> Try<&T> {
        match self {
            Self::Success(value) => Try::Success(value),
            Self::Failure(cause) => Try::Failure(cause.clone()),
        }
    }
}
