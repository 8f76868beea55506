//! Display, equality and trait implementations for Error

use super::types::Error;
use std::fmt;
use std::hash::{Hash, Hasher};

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.kind)?;

        if let Some(context) = &self.inner.context {
            write!(f, ": {context}")?;
        }

        if let Some(source) = &self.inner.source {
            write!(f, "\nCaused by: {source}")?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl Error {
    fn source_message(&self) -> Option<String> {
        self.inner.source.as_ref().map(ToString::to_string)
    }
}

// Structural over kind, context and the raised error's message; how the
// source was handed over (boxed or concrete) and backtraces never take part
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        if std::sync::Arc::ptr_eq(&self.inner, &other.inner) {
            return true;
        }
        self.inner.kind == other.inner.kind
            && self.inner.context == other.inner.context
            && self.source_message() == other.source_message()
    }
}

impl Eq for Error {}

impl Hash for Error {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.kind.hash(state);
        self.inner.context.hash(state);
        self.source_message().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn display_includes_context_and_source() {
        let raised = "x".parse::<i32>().unwrap_err();
        let error = Error::captured(raised.clone()).context("parsing port");

        let rendered = error.to_string();
        assert!(rendered.starts_with("Computation failed: parsing port"));
        assert!(rendered.ends_with(&format!("Caused by: {raised}")));
    }

    #[test]
    fn equality_ignores_identity() {
        let a = Error::captured("x".parse::<i32>().unwrap_err());
        let b = Error::captured("y".parse::<i32>().unwrap_err());
        assert_eq!(a, b);
        assert_ne!(a, Error::no_such_element());
        assert_ne!(Error::other("a"), Error::other("b"));
        assert_eq!(Error::new(ErrorKind::UnsupportedOperation), Error::unsupported_operation());
    }
}
