//! A container for the outcome of a computation that either succeeded with a
//! value or failed with a cause.
//!
//! [`Try::apply`] is the single place where a raised error becomes a
//! [`Failure`](Try::Failure); [`Try::get`] is the single place where a cause
//! is handed back to the caller as an `Err`. Every combinator in between
//! passes an existing failure through untouched and never calls the supplied
//! function for it.
//!
//! ```
//! use attempt::{ErrorKind, Try};
//!
//! let answer = Try::apply(|| "42".parse::<i32>());
//! assert_eq!(answer.clone().get().ok(), Some(42));
//!
//! let greeting = answer.clone().map(|i| format!("{i}, Hello World!"));
//! assert_eq!(greeting, Try::success("42, Hello World!".to_string()));
//!
//! let rejected = answer.filter(|i| *i != 42);
//! assert!(rejected.get().is_err_and(|e| *e.kind() == ErrorKind::NoSuchElement));
//! ```

mod combinators;
mod conversions;
mod outcome;

pub use attempt_common::{bail, ensure, err};
pub use attempt_common::{log_failure, log_success, Error, ErrorKind, LoggingTransformer};
pub use outcome::Try;
