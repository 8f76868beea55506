//! Combinators over `Try`
//!
//! A failure receiver is returned as is and the supplied function is never
//! called. Functions supplied by the caller are not guarded: a panic unwinds
//! through the combinator, and the `try_*` variants hand an `Err` straight
//! back to the caller instead of turning it into a new failure. Only
//! [`Try::apply`] captures.

use crate::Try;
use attempt_common::{Error, LoggingTransformer};

impl<T> Try<T> {
    /// Run `action` on the value; does nothing on a failure
    pub fn for_each<F>(&self, action: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = self {
            action(value);
        }
    }

    /// Like [`Try::for_each`], propagating an error raised by `action`
    ///
    /// # Errors
    ///
    /// Returns whatever `action` returns as `Err`.
    pub fn try_for_each<F, E>(&self, action: F) -> std::result::Result<(), E>
    where
        F: FnOnce(&T) -> std::result::Result<(), E>,
    {
        match self {
            Self::Success(value) => action(value),
            Self::Failure(_) => Ok(()),
        }
    }

    /// Transform the value
    pub fn map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(f(value)),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Transform the value with a function that may raise
    ///
    /// # Errors
    ///
    /// An `Err` from `f` is returned to the caller; it does not become a
    /// failure.
    pub fn try_map<U, F, E>(self, f: F) -> std::result::Result<Try<U>, E>
    where
        F: FnOnce(T) -> std::result::Result<U, E>,
    {
        match self {
            Self::Success(value) => f(value).map(Try::Success),
            Self::Failure(cause) => Ok(Try::Failure(cause)),
        }
    }

    /// Chain a step that produces its own `Try`, without nesting
    pub fn flat_map<U, F>(self, f: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(cause) => Try::Failure(cause),
        }
    }

    /// Keep the value only if `predicate` holds
    ///
    /// A rejected value becomes a failure of kind
    /// [`ErrorKind::NoSuchElement`](attempt_common::ErrorKind::NoSuchElement).
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(Self::rejected())
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Like [`Try::filter`], propagating an error raised by `predicate`
    ///
    /// # Errors
    ///
    /// An `Err` from `predicate` is returned to the caller; it does not
    /// become a failure.
    pub fn try_filter<P, E>(self, predicate: P) -> std::result::Result<Self, E>
    where
        P: FnOnce(&T) -> std::result::Result<bool, E>,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value)? {
                    Ok(Self::Success(value))
                } else {
                    Ok(Self::Failure(Self::rejected()))
                }
            }
            failure @ Self::Failure(_) => Ok(failure),
        }
    }

    fn rejected() -> Error {
        tracing::trace!(
            value_type = std::any::type_name::<T>(),
            "filter predicate rejected value"
        );
        Error::no_such_element().context("filter")
    }

    /// Turn a failure into a value computed from its cause
    pub fn recover<F>(self, handler: F) -> Self
    where
        F: FnOnce(Error) -> T,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => {
                LoggingTransformer::log_recovery("recover", &cause);
                Self::Success(handler(cause))
            }
        }
    }

    /// Turn a failure into whatever `Try` `handler` builds from its cause
    pub fn recover_with<F>(self, handler: F) -> Self
    where
        F: FnOnce(Error) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => {
                LoggingTransformer::log_recovery("recover_with", &cause);
                handler(cause)
            }
        }
    }

    /// Swap the variants: a failure's cause becomes the value
    ///
    /// A success becomes a failure of kind
    /// [`ErrorKind::UnsupportedOperation`](attempt_common::ErrorKind::UnsupportedOperation);
    /// its value is dropped.
    pub fn failed(self) -> Try<Error> {
        match self {
            Self::Success(_) => Try::Failure(Error::unsupported_operation().context("Success.failed")),
            Self::Failure(cause) => Try::Success(cause),
        }
    }

    /// Dispatch to exactly one handler and return its `Try` as is
    pub fn transform<U, S, F>(self, on_success: S, on_failure: F) -> Try<U>
    where
        S: FnOnce(T) -> Try<U>,
        F: FnOnce(Error) -> Try<U>,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    /// Fold both variants into a plain value
    pub fn fold<U, F, S>(self, on_failure: F, on_success: S) -> U
    where
        F: FnOnce(Error) -> U,
        S: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    /// Self when it is a success, otherwise `alternative`
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternative,
        }
    }

    /// Self when it is a success, otherwise the `Try` built by `alternative`
    pub fn or_else_with<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => alternative(),
        }
    }

    /// Observe the value and pass the `Try` on unchanged
    pub fn on_success<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        self.for_each(f);
        self
    }

    /// Observe the cause and pass the `Try` on unchanged
    pub fn on_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Error),
    {
        if let Self::Failure(cause) = &self {
            f(cause);
        }
        self
    }
}

impl<T> Try<Try<T>> {
    /// Remove one level of nesting
    pub fn flatten(self) -> Try<T> {
        self.flat_map(|inner| inner)
    }
}
