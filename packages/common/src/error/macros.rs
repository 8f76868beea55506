//! Macros for building causes inside captured computations
//!
//! Every form records `file:line` in the context. Kinds are named by their
//! [`ErrorKind`](crate::ErrorKind) variant; `source = <expr>` attaches the
//! raised error so `is::<E>()` and `downcast_ref::<E>()` still find it.
//!
//! ```
//! use attempt_common::{err, Error, ErrorKind};
//!
//! fn port(raw: &str) -> Result<u16, Error> {
//!     raw.parse().map_err(|e| err!(source = e, "port {raw:?}"))
//! }
//!
//! let cause = port("http").unwrap_err();
//! assert_eq!(cause.kind(), &ErrorKind::Computation);
//! assert!(cause.is::<std::num::ParseIntError>());
//! ```

/// Build an [`Error`](crate::Error) with automatic file/line context
///
/// - `err!(source = e)` / `err!(source = e, "fmt", args..)`: capture `e`
///   like [`Error::captured`](crate::Error::captured)
/// - `err!(Kind, source = e[, "fmt", args..])`: a `Kind` cause wrapping `e`
/// - `err!(Kind)` / `err!(Kind, "fmt", args..)`: a `Kind` cause with no source
#[macro_export]
macro_rules! err {
    (source = $source:expr, $($fmt:tt)+) => {
        $crate::error::Error::captured($source)
            .context(format!("{} at {}:{}", format!($($fmt)+), file!(), line!()))
    };
    (source = $source:expr) => {
        $crate::error::Error::captured($source).context(format!("at {}:{}", file!(), line!()))
    };
    ($kind:ident, source = $source:expr, $($fmt:tt)+) => {
        $crate::error::Error::with_source($crate::error::ErrorKind::$kind, $source)
            .context(format!("{} at {}:{}", format!($($fmt)+), file!(), line!()))
    };
    ($kind:ident, source = $source:expr) => {
        $crate::error::Error::with_source($crate::error::ErrorKind::$kind, $source)
            .context(format!("at {}:{}", file!(), line!()))
    };
    ($kind:ident, $($fmt:tt)+) => {
        $crate::error::Error::new($crate::error::ErrorKind::$kind)
            .context(format!("{} at {}:{}", format!($($fmt)+), file!(), line!()))
    };
    ($kind:ident) => {
        $crate::error::Error::new($crate::error::ErrorKind::$kind)
            .context(format!("at {}:{}", file!(), line!()))
    };
}

/// Return early from a computation with an [`err!`] cause
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::err!($($arg)*).into())
    };
}

/// Bail with an [`err!`] cause unless `cond` holds
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            $crate::bail!($($arg)+);
        }
    };
}
