//! Failure causes with context propagation
//!
//! Provides the cause stored inside a `Failure`:
//! - A closed set of kinds callers can discriminate on
//! - The original raised error kept as source, reachable by downcast
//! - Structural equality so causes compare by kind and message
//! - Backtrace capture at creation (feature `full-backtrace`)

pub mod constructors;
pub mod display;
pub mod logging;
pub mod macros;
pub mod types;

pub use logging::LoggingTransformer;
pub use types::{Error, ErrorKind, Result};
