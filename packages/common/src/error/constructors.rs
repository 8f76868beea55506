//! Error constructors and methods

use super::types::{Error, ErrorInner, ErrorKind, SharedSource};
use std::any::type_name;
use std::fmt;
use std::sync::Arc;

/// Anything `?` can turn into a boxed error: concrete error types, boxed
/// trait objects, `String` and `&str`
type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

impl Error {
    fn build(
        kind: ErrorKind,
        source: Option<SharedSource>,
        source_type: Option<&'static str>,
    ) -> Self {
        Self {
            inner: Arc::new(ErrorInner {
                kind,
                context: None,
                source,
                source_type,
                #[cfg(feature = "full-backtrace")]
                backtrace: backtrace::Backtrace::new_unresolved(),
            }),
        }
    }

    /// Create a new error with the given kind
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self::build(kind, None, None)
    }

    /// Create an error of `kind` caused by `source`
    ///
    /// Unlike [`Error::captured`], an `Error` source is kept nested so the
    /// new kind takes effect; downcasting still reaches the innermost
    /// raised error.
    #[must_use]
    pub fn with_source<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<BoxedSource>,
    {
        Self::build(kind, Some(Arc::from(source.into())), Some(type_name::<E>()))
    }

    /// Capture an error raised by a computation
    ///
    /// The raised error is kept verbatim as the source of a
    /// [`ErrorKind::Computation`] cause. An `Error`, boxed or not, is
    /// returned as is, so re-capturing a cause never nests it.
    #[must_use]
    pub fn captured<E>(raised: E) -> Self
    where
        E: Into<BoxedSource>,
    {
        let raised_as = type_name::<E>();
        match raised.into().downcast::<Error>() {
            Ok(error) => *error,
            Err(other) => Self::build(ErrorKind::Computation, Some(Arc::from(other)), Some(raised_as)),
        }
    }

    /// Add context to this error
    ///
    /// Earlier context is kept after the new one (`"outer: inner"`). The
    /// result is the same whether or not the error was shared.
    #[must_use]
    pub fn context<C: fmt::Display>(self, context: C) -> Self {
        let context = match &self.inner.context {
            Some(earlier) => format!("{context}: {earlier}"),
            None => context.to_string(),
        };
        Self {
            inner: Arc::new(ErrorInner {
                kind: self.inner.kind.clone(),
                context: Some(context),
                source: self.inner.source.clone(),
                source_type: self.inner.source_type,
                #[cfg(feature = "full-backtrace")]
                backtrace: self.inner.backtrace.clone(),
            }),
        }
    }

    /// Get the error kind
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Get the error context if any
    #[must_use]
    pub fn get_context(&self) -> Option<&str> {
        self.inner.context.as_deref()
    }

    /// Type name of the source as handed to the constructor, if any
    #[must_use]
    pub fn source_type(&self) -> Option<&'static str> {
        self.inner.source_type
    }

    /// Get the backtrace
    #[cfg(feature = "full-backtrace")]
    #[must_use]
    pub fn backtrace(&self) -> &backtrace::Backtrace {
        &self.inner.backtrace
    }

    /// Borrow the originally raised error as its concrete type
    ///
    /// Causes nested by [`Error::with_source`] are looked through.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        let source = self.inner.source.as_deref()?;
        if let Some(found) = source.downcast_ref::<E>() {
            return Some(found);
        }
        source.downcast_ref::<Error>()?.downcast_ref::<E>()
    }

    /// Whether the originally raised error is an `E`
    #[must_use]
    pub fn is<E>(&self) -> bool
    where
        E: std::error::Error + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Whether this cause was synthesized by a filter whose predicate failed
    #[must_use]
    pub fn is_no_such_element(&self) -> bool {
        self.inner.kind == ErrorKind::NoSuchElement
    }

    /// Create a computation error without a source
    #[must_use]
    pub fn computation() -> Self {
        Self::new(ErrorKind::Computation)
    }

    /// Create a predicate-not-satisfied error
    #[must_use]
    pub fn no_such_element() -> Self {
        Self::new(ErrorKind::NoSuchElement)
    }

    /// Create an unsupported operation error
    #[must_use]
    pub fn unsupported_operation() -> Self {
        Self::new(ErrorKind::UnsupportedOperation)
    }

    /// Create an other error with custom message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::new(ErrorKind::Other(msg.into()))
    }
}
