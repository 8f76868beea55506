//! Default handlers for `Try` taps
//!
//! Pass these to `Try::on_success` / `Try::on_failure` to trace a chain
//! without changing it.

use crate::error::{Error, LoggingTransformer};

/// Default success handler that logs the completed step
pub fn log_success<T>(_value: &T) {
    tracing::debug!(
        value_type = std::any::type_name::<T>(),
        "Operation completed successfully"
    );
}

/// Default failure handler that logs the cause before passing it on
pub fn log_failure(cause: &Error) {
    tracing::warn!(kind = %cause.kind(), "Failure observed: {cause:?}");
    LoggingTransformer::log_failure("try", cause);
}
