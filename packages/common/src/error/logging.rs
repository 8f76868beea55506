//! Structured logging bootstrap
//!
//! Library code emits `tracing` events; with `tracing`'s `log` feature they
//! reach the `log` facade, which `env_logger` renders.

use super::types::Error;
use log::{debug, info, warn};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Report captured failures and recoveries
    /// - `RUST_LOG=trace` - Also report filter rejections
    /// - `RUST_LOG=attempt=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            if env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .try_init()
                .is_ok()
            {
                info!("Structured logging initialized");
            }
        });
    }

    /// Initialize logging for test environments
    ///
    /// Use this in test modules to avoid initialization conflicts
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed operation with the raised error's type and message
    pub fn log_failure(operation: &str, error: &dyn std::error::Error) {
        warn!(
            "Operation failed: {} (error_type: {}, message: {})",
            operation,
            std::any::type_name_of_val(error),
            error
        );
    }

    /// Log a failure being handed to a recovery handler
    pub fn log_recovery(operation: &str, cause: &Error) {
        debug!(
            "Operation recovered: {operation} (kind: {}, raised_as: {})",
            cause.kind(),
            cause.source_type().unwrap_or("-")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_operations() {
        LoggingTransformer::init_test();
        LoggingTransformer::init_test();

        // These should not panic and should produce log output
        let cause = Error::captured("nope".parse::<u8>().unwrap_err());
        LoggingTransformer::log_failure("parse", &cause);
        LoggingTransformer::log_recovery("parse", &cause);
        LoggingTransformer::log_recovery("filter", &Error::no_such_element());
    }
}
