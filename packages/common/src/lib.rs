//! Shared infrastructure for the attempt crates
//!
//! This crate provides the pieces every `Try` consumer needs:
//! - The failure cause type with kind, context and source preservation
//! - Error macros for use inside captured computations
//! - Logging bootstrap and default success/failure handlers

pub mod error;
pub mod handlers;

pub use error::*;
pub use handlers::{log_failure, log_success};
