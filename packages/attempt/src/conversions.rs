//! Conversions between `Try` and std types

use crate::Try;
use attempt_common::Error;

impl<T> Try<T> {
    /// Lift a std result, capturing `Err` the way [`Try::apply`] does
    pub fn from_result<E>(result: std::result::Result<T, E>) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::apply(|| result)
    }

    /// Lower to a std result; same as [`Try::get`]
    ///
    /// # Errors
    ///
    /// Returns the cause when called on a failure.
    pub fn into_result(self) -> std::result::Result<T, Error> {
        self.get()
    }
}

impl<T, E> From<std::result::Result<T, E>> for Try<T>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn from(result: std::result::Result<T, E>) -> Self {
        Self::from_result(result)
    }
}

impl<T> From<Try<T>> for std::result::Result<T, Error> {
    fn from(outcome: Try<T>) -> Self {
        outcome.get()
    }
}

impl<T> From<Try<T>> for Option<T> {
    fn from(outcome: Try<T>) -> Self {
        outcome.to_optional()
    }
}
