//! Tri-state result type - a value, a failure, or nothing.
//!
//! [`Result<T>`] unifies three outcomes that Rust usually spreads over
//! `Option<T>` and `core::result::Result<T, E>`:
//!
//! - `Success(T)`: a value is present
//! - `Failure(Error)`: the computation failed with an [`Error`]
//! - `Empty`: the computation completed without producing a value
//!
//! Every combinator consumes the result and returns either the same result
//! untouched or a new one. Handlers registered for a state that does not
//! apply are never invoked.
//!
//! # Examples
//!
//! ```rust
//! use lambdadepot::result::Result;
//!
//! let value = Result::success(20)
//!     .map(|n| n + 1)
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * 2);
//! assert_eq!(value.get_value(), Ok(42));
//!
//! let nothing: Result<i32> = Result::success_or_empty(None);
//! assert_eq!(nothing.if_empty_return(7).get_value(), Ok(7));
//! ```
//!
//! # State Table
//!
//! | Operation | Success(v) | Failure(e) | Empty |
//! |---|---|---|---|
//! | `map(f)` | `Success(f(v))` | unchanged | unchanged |
//! | `filter_map(f)` | `success_or_empty(f(v))` | unchanged | unchanged |
//! | `flat_map(f)` | `f(v)` | unchanged | unchanged |
//! | `filter(p)` | `Success(v)` if `p(&v)`, else `Empty` | unchanged | unchanged |
//! | `if_failure_*` | unchanged | handled when the filter matches | unchanged |
//! | `if_empty_*` | unchanged | unchanged | handled |

mod error;
mod inspect;
mod recovery;

pub use error::{Error, Message, NoSuchElement, UnresolvedFailure};

use std::error::Error as StdError;

type StdResult<T, E> = core::result::Result<T, E>;

/// The outcome of a computation: `Success`, `Failure` or `Empty`.
///
/// Exactly one of the three states holds. A `Success` always carries a value
/// and a `Failure` always carries an [`Error`]; `Empty` carries nothing.
///
/// # Examples
///
/// ```rust
/// use lambdadepot::result::{Error, Result};
///
/// let success = Result::success(1);
/// let failure: Result<i32> = Result::failure(Error::msg("boom"));
/// let empty: Result<i32> = Result::empty();
///
/// assert!(success.is_success());
/// assert!(failure.is_failure());
/// assert!(empty.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a Result may hold a failure that should be handled"]
pub enum Result<T> {
    /// A value is present.
    Success(T),
    /// The computation failed.
    Failure(Error),
    /// The computation produced nothing.
    Empty,
}

impl<T> Result<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Success` holding `value`.
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a `Success` for `Some(value)` and `Empty` for `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::Result;
    ///
    /// assert_eq!(Result::success_or_empty(Some(3)), Result::success(3));
    /// assert_eq!(Result::<i32>::success_or_empty(None), Result::empty());
    /// ```
    #[inline]
    pub fn success_or_empty(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Success)
    }

    /// Creates a `Failure` holding `error`.
    ///
    /// Passing an [`Error`] keeps that exact instance.
    pub fn failure<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Failure(Error::new(error))
    }

    /// Returns the `Empty` result.
    #[inline]
    pub const fn empty() -> Self {
        Self::Empty
    }

    // =========================================================================
    // State Checks
    // =========================================================================

    /// Returns `true` if this is a `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `Success(true)` if this is a `Success`, `Success(false)` otherwise.
    #[inline]
    pub const fn has_value(&self) -> Result<bool> {
        Result::Success(self.is_success())
    }

    /// Returns `Success(true)` if this is a `Failure`, `Success(false)` otherwise.
    #[inline]
    pub const fn has_error(&self) -> Result<bool> {
        Result::Success(self.is_failure())
    }

    /// Returns `Success(true)` if this is `Empty`, `Success(false)` otherwise.
    #[inline]
    pub const fn has_nothing(&self) -> Result<bool> {
        Result::Success(self.is_empty())
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Borrows the value of a `Success`.
    #[inline]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Empty => None,
        }
    }

    /// Borrows the error of a `Failure`.
    #[inline]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Failure(error) => Some(error),
            Self::Success(_) | Self::Empty => None,
        }
    }

    /// Takes the value of a `Success`.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement::Value`] for a `Failure` or an `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::{NoSuchElement, Result};
    ///
    /// assert_eq!(Result::success(5).get_value(), Ok(5));
    /// assert_eq!(Result::<i32>::empty().get_value(), Err(NoSuchElement::Value));
    /// ```
    pub fn get_value(self) -> StdResult<T, NoSuchElement> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) | Self::Empty => Err(NoSuchElement::Value),
        }
    }

    /// Takes the error of a `Failure`.
    ///
    /// # Errors
    ///
    /// Returns [`NoSuchElement::Error`] for a `Success` or an `Empty`.
    pub fn get_error(self) -> StdResult<Error, NoSuchElement> {
        match self {
            Self::Failure(error) => Ok(error),
            Self::Success(_) | Self::Empty => Err(NoSuchElement::Error),
        }
    }

    /// Returns the value of a `Success`, or an error built for the other states.
    ///
    /// An `Empty` yields the error produced by `empty_error`. A `Failure` does
    /// not use `empty_error`: it yields an [`UnresolvedFailure`] whose source is
    /// the carried error.
    ///
    /// # Errors
    ///
    /// Returns the wrapped `empty_error()` for `Empty` and an
    /// [`UnresolvedFailure`] for `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::{Error, Message, Result, UnresolvedFailure};
    ///
    /// let empty: Result<i32> = Result::empty();
    /// let error = empty.or_else_throw(|| Error::msg("missing")).unwrap_err();
    /// assert_eq!(error.to_string(), "missing");
    ///
    /// let failure: Result<i32> = Result::failure(Error::msg("boom"));
    /// let error = failure.or_else_throw(|| Error::msg("missing")).unwrap_err();
    /// assert!(error.is::<UnresolvedFailure>());
    /// ```
    pub fn or_else_throw<X>(self, empty_error: impl FnOnce() -> X) -> StdResult<T, Error>
    where
        X: StdError + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => {
                tracing::trace!(error = %cause, "surfacing unresolved failure");
                Err(Error::new(UnresolvedFailure::new(cause)))
            }
            Self::Empty => Err(Error::new(empty_error())),
        }
    }

    /// Returns the value of a `Success`, or the error built for the current state.
    ///
    /// # Errors
    ///
    /// Returns the wrapped `empty_error()` for `Empty` and the wrapped
    /// `failure_error()` for `Failure`.
    pub fn or_else_throw_either<X, Y>(
        self,
        empty_error: impl FnOnce() -> X,
        failure_error: impl FnOnce() -> Y,
    ) -> StdResult<T, Error>
    where
        X: StdError + Send + Sync + 'static,
        Y: StdError + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(_) => Err(Error::new(failure_error())),
            Self::Empty => Err(Error::new(empty_error())),
        }
    }

    /// Converts into an `Option`, dropping any error.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) | Self::Empty => None,
        }
    }

    /// Converts from `&Result<T>` to `Result<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Result<&T> {
        match self {
            Self::Success(value) => Result::Success(value),
            Self::Failure(error) => Result::Failure(error.clone()),
            Self::Empty => Result::Empty,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to the value of a `Success`.
    ///
    /// `Failure` and `Empty` pass through and `function` is not called.
    ///
    /// A mapper that returns an `Option` yields `Success(None)` rather than
    /// `Empty`. Use [`filter_map`](Self::filter_map), or
    /// [`flatten_option`](Self::flatten_option) after `map`, to turn an absent
    /// value into `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::Result;
    ///
    /// assert_eq!(Result::success(2).map(|n| n * 10), Result::success(20));
    /// assert_eq!(Result::<i32>::empty().map(|n| n * 10), Result::empty());
    ///
    /// let absent = Result::success(2).map(|_| None::<i32>);
    /// assert_eq!(absent, Result::success(None));
    /// assert!(absent.flatten_option().is_empty());
    /// assert!(Result::success(2).filter_map(|_| None::<i32>).is_empty());
    /// ```
    #[inline]
    pub fn map<U>(self, function: impl FnOnce(T) -> U) -> Result<U> {
        match self {
            Self::Success(value) => Result::Success(function(value)),
            Self::Failure(error) => Result::Failure(error),
            Self::Empty => Result::Empty,
        }
    }

    /// Applies `function` to the value of a `Success`, collapsing `None` to `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::Result;
    ///
    /// let halved = Result::success(4).filter_map(|n| (n % 2 == 0).then_some(n / 2));
    /// assert_eq!(halved, Result::success(2));
    ///
    /// let gone = Result::success(3).filter_map(|n| (n % 2 == 0).then_some(n / 2));
    /// assert!(gone.is_empty());
    /// ```
    #[inline]
    pub fn filter_map<U>(self, function: impl FnOnce(T) -> Option<U>) -> Result<U> {
        match self {
            Self::Success(value) => Result::success_or_empty(function(value)),
            Self::Failure(error) => Result::Failure(error),
            Self::Empty => Result::Empty,
        }
    }

    /// Replaces a `Success` with the result of `function`.
    ///
    /// The returned result is used as is, without any re-wrapping.
    #[inline]
    pub fn flat_map<U>(self, function: impl FnOnce(T) -> Result<U>) -> Result<U> {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Result::Failure(error),
            Self::Empty => Result::Empty,
        }
    }

    /// Keeps a `Success` only if `predicate` holds for its value.
    ///
    /// A rejected `Success` becomes `Empty`.
    #[inline]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Empty
                }
            }
            other => other,
        }
    }

    /// Passes the whole result to `transformer`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::Result;
    ///
    /// let state = Result::success(1).transform(|result| {
    ///     if result.is_success() { "success" } else { "other" }
    /// });
    /// assert_eq!(state, "success");
    /// ```
    #[inline]
    pub fn transform<U>(self, transformer: impl FnOnce(Self) -> U) -> U {
        transformer(self)
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<T> Result<Option<T>> {
    /// Collapses `Success(None)` into `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::Result;
    ///
    /// assert_eq!(Result::success(Some(1)).flatten_option(), Result::success(1));
    /// assert!(Result::<Option<i32>>::success(None).flatten_option().is_empty());
    /// ```
    #[inline]
    pub fn flatten_option(self) -> Result<T> {
        self.flat_map(Result::success_or_empty)
    }
}

impl<T> Result<Result<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Result<T> {
        self.flat_map(std::convert::identity)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Result<T> {
    /// Returns `Empty`.
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<Option<T>> for Result<T> {
    /// `Some(v)` becomes `Success(v)`, `None` becomes `Empty`.
    fn from(option: Option<T>) -> Self {
        Self::success_or_empty(option)
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T>
where
    E: StdError + Send + Sync + 'static,
{
    /// `Ok(v)` becomes `Success(v)`, `Err(e)` becomes `Failure(e)`.
    fn from(result: StdResult<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(error),
        }
    }
}

static_assertions::assert_impl_all!(Result<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Error: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Result::success(1), (true, false, false))]
    #[case(Result::failure(Error::msg("boom")), (false, true, false))]
    #[case(Result::empty(), (false, false, true))]
    fn test_exactly_one_state(#[case] result: Result<i32>, #[case] expected: (bool, bool, bool)) {
        assert_eq!(
            (result.is_success(), result.is_failure(), result.is_empty()),
            expected
        );
    }

    #[rstest]
    fn test_has_queries_wrap_state() {
        let empty: Result<i32> = Result::empty();
        assert_eq!(empty.has_nothing(), Result::success(true));
        assert_eq!(empty.has_value(), Result::success(false));
        assert_eq!(empty.has_error(), Result::success(false));
    }

    #[rstest]
    fn test_as_ref_shares_error() {
        let error = Error::msg("boom");
        let failure: Result<i32> = Result::Failure(error.clone());
        assert!(failure.as_ref().get_error().is_ok_and(|shared| shared.ptr_eq(&error)));
    }

    #[rstest]
    fn test_flatten_nested() {
        assert_eq!(Result::success(Result::success(1)).flatten(), Result::success(1));
        assert!(Result::success(Result::<i32>::empty()).flatten().is_empty());
    }

    #[rstest]
    fn test_conversions() {
        let from_err: Result<i32> = "x".parse::<i32>().into();
        assert!(from_err.error().is_some_and(Error::is::<std::num::ParseIntError>));
        assert_eq!(Result::from(Some(3)), Result::success(3));
        assert_eq!(Result::<i32>::default(), Result::empty());
    }
}
