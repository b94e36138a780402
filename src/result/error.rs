//! Failure payloads and the errors raised when a [`Result`](super::Result)
//! is unwrapped in the wrong state.
//!
//! [`Error`] is the value carried by `Result::Failure`. It erases the concrete
//! error type but keeps it recoverable through [`Error::is`] and
//! [`Error::downcast_ref`], which is how failure handlers filter by error type.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Error
// =============================================================================

/// A shared, type-erased failure.
///
/// Cloning an `Error` is cheap and yields a handle to the same underlying
/// error. Two handles compare equal only when they point to the same error
/// instance, so equality answers "is this the very failure that was raised".
///
/// # Examples
///
/// ```rust
/// use lambdadepot::result::Error;
///
/// let error = Error::new("x".parse::<i32>().unwrap_err());
/// let same = error.clone();
///
/// assert!(error.is::<std::num::ParseIntError>());
/// assert_eq!(error, same);
/// assert_ne!(error, Error::msg("invalid digit found in string"));
/// ```
#[derive(Clone)]
pub struct Error {
    inner: Arc<dyn StdError + Send + Sync + 'static>,
}

impl Error {
    /// Wraps an error value.
    ///
    /// Wrapping an `Error` returns a handle to the same instance instead of
    /// nesting it.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        if let Some(existing) = (&error as &dyn Any).downcast_ref::<Self>() {
            return existing.clone();
        }
        Self {
            inner: Arc::new(error),
        }
    }

    /// Creates an error from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::new(Message(message.into()))
    }

    /// Returns `true` if the wrapped error is of type `E`.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.inner.is::<E>()
    }

    /// Returns the wrapped error as `E`, if it is one.
    #[inline]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.inner.downcast_ref::<E>()
    }

    /// Returns `true` if both handles refer to the same error instance.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Borrows the wrapped error as a trait object.
    #[inline]
    pub fn as_dyn(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.inner, formatter)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.inner, formatter)
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Error {
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self {
            inner: Arc::from(error),
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::msg(message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self::msg(message)
    }
}

/// A plain message error, produced by [`Error::msg`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct Message(String);

impl Message {
    /// Returns the message text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Access Errors
// =============================================================================

/// Returned when reading a value or an error that the result does not hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum NoSuchElement {
    /// A value was requested from a `Failure` or an `Empty`.
    #[error("No value present")]
    Value,
    /// An error was requested from a `Success` or an `Empty`.
    #[error("No error present")]
    Error,
}

/// Raised by [`Result::or_else_throw`](super::Result::or_else_throw) when the
/// result is a `Failure`.
///
/// The original error is kept as the [`source`](StdError::source).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unresolved failure: {cause}")]
pub struct UnresolvedFailure {
    #[source]
    cause: Error,
}

impl UnresolvedFailure {
    pub(crate) const fn new(cause: Error) -> Self {
        Self { cause }
    }

    /// The failure that was left unresolved.
    pub const fn cause(&self) -> &Error {
        &self.cause
    }

    /// Consumes the wrapper, returning the original failure.
    pub fn into_cause(self) -> Error {
        self.cause
    }
}
