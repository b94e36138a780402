//! Failure and empty recovery for [`Result`].
//!
//! Failure handlers come in three flavours:
//!
//! - unfiltered (`if_failure_map`, `if_failure_resume`, ...) match every failure
//! - `_of::<X>` variants match failures whose error is an `X`
//! - `_when` variants match failures accepted by a predicate on the error
//!
//! A failure that is not matched is returned unchanged, carrying the very same
//! [`Error`].

use std::error::Error as StdError;

use super::{Error, Result};

impl<T> Result<T> {
    // =========================================================================
    // Matching
    // =========================================================================

    fn recover_when(
        self,
        predicate: impl FnOnce(&Error) -> bool,
        handler: impl FnOnce(Error) -> Self,
    ) -> Self {
        match self {
            Self::Failure(error) => {
                if predicate(&error) {
                    handler(error)
                } else {
                    Self::Failure(error)
                }
            }
            other => other,
        }
    }

    fn recover_of<X>(self, handler: impl FnOnce(&X) -> Self) -> Self
    where
        X: StdError + 'static,
    {
        match self {
            Self::Failure(error) => {
                if let Some(typed) = error.downcast_ref::<X>() {
                    return handler(typed);
                }
                Self::Failure(error)
            }
            other => other,
        }
    }

    // =========================================================================
    // Failure Mapping
    // =========================================================================

    /// Replaces the error of a `Failure` with `mapper(error)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::{Error, Result};
    ///
    /// let failure: Result<i32> = Result::failure(Error::msg("low level"));
    /// let mapped = failure.if_failure_map(|error| Error::msg(format!("high level: {error}")));
    /// assert_eq!(mapped.get_error().unwrap().to_string(), "high level: low level");
    /// ```
    pub fn if_failure_map(self, mapper: impl FnOnce(Error) -> Error) -> Self {
        self.recover_when(|_| true, |error| Self::Failure(mapper(error)))
    }

    /// Replaces the error of a `Failure` whose error is an `X`.
    pub fn if_failure_map_of<X>(self, mapper: impl FnOnce(&X) -> Error) -> Self
    where
        X: StdError + 'static,
    {
        self.recover_of(|error: &X| Self::Failure(mapper(error)))
    }

    /// Replaces the error of a `Failure` whose error satisfies `predicate`.
    pub fn if_failure_map_when(
        self,
        predicate: impl FnOnce(&Error) -> bool,
        mapper: impl FnOnce(Error) -> Error,
    ) -> Self {
        self.recover_when(predicate, |error| Self::Failure(mapper(error)))
    }

    // =========================================================================
    // Failure Resumption
    // =========================================================================

    /// Replaces a `Failure` with the result computed from its error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::{Error, Result};
    ///
    /// let failure: Result<i32> = Result::failure(Error::msg("retry"));
    /// let resumed = failure.if_failure_resume(|_| Result::success(1));
    /// assert_eq!(resumed, Result::success(1));
    /// ```
    pub fn if_failure_resume(self, mapper: impl FnOnce(Error) -> Self) -> Self {
        self.recover_when(|_| true, mapper)
    }

    /// Replaces a `Failure` whose error is an `X` with the result computed from it.
    pub fn if_failure_resume_of<X>(self, mapper: impl FnOnce(&X) -> Self) -> Self
    where
        X: StdError + 'static,
    {
        self.recover_of(mapper)
    }

    /// Replaces a `Failure` whose error satisfies `predicate`.
    pub fn if_failure_resume_when(
        self,
        predicate: impl FnOnce(&Error) -> bool,
        mapper: impl FnOnce(Error) -> Self,
    ) -> Self {
        self.recover_when(predicate, mapper)
    }

    // =========================================================================
    // Failure Fallback Values
    // =========================================================================

    /// Replaces a `Failure` with `Success(value)`.
    pub fn if_failure_return(self, value: T) -> Self {
        self.recover_when(|_| true, |_| Self::Success(value))
    }

    /// Replaces a `Failure` whose error is an `X` with `Success(value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    /// use lambdadepot::result::{Error, Result};
    ///
    /// let parsed: Result<i32> = "x".parse::<i32>().into();
    /// assert_eq!(parsed.if_failure_return_of::<ParseIntError>(0), Result::success(0));
    ///
    /// let other: Result<i32> = Result::failure(Error::msg("unrelated"));
    /// assert!(other.if_failure_return_of::<ParseIntError>(0).is_failure());
    /// ```
    pub fn if_failure_return_of<X>(self, value: T) -> Self
    where
        X: StdError + 'static,
    {
        self.recover_of(|_: &X| Self::Success(value))
    }

    /// Replaces a `Failure` whose error satisfies `predicate` with `Success(value)`.
    pub fn if_failure_return_when(self, predicate: impl FnOnce(&Error) -> bool, value: T) -> Self {
        self.recover_when(predicate, |_| Self::Success(value))
    }

    /// Replaces a `Failure` with `Success(supplier())`.
    ///
    /// `supplier` is only called for a failure.
    pub fn if_failure_return_with(self, supplier: impl FnOnce() -> T) -> Self {
        self.recover_when(|_| true, |_| Self::Success(supplier()))
    }

    /// Replaces a `Failure` whose error is an `X` with `Success(supplier())`.
    pub fn if_failure_return_of_with<X>(self, supplier: impl FnOnce() -> T) -> Self
    where
        X: StdError + 'static,
    {
        self.recover_of(|_: &X| Self::Success(supplier()))
    }

    /// Replaces a `Failure` whose error satisfies `predicate` with `Success(supplier())`.
    pub fn if_failure_return_when_with(
        self,
        predicate: impl FnOnce(&Error) -> bool,
        supplier: impl FnOnce() -> T,
    ) -> Self {
        self.recover_when(predicate, |_| Self::Success(supplier()))
    }

    // =========================================================================
    // Empty Recovery
    // =========================================================================

    /// Replaces `Empty` with `Success(value)`.
    pub fn if_empty_return(self, value: T) -> Self {
        match self {
            Self::Empty => Self::Success(value),
            other => other,
        }
    }

    /// Replaces `Empty` with `Success(supplier())`.
    pub fn if_empty_return_with(self, supplier: impl FnOnce() -> T) -> Self {
        match self {
            Self::Empty => Self::Success(supplier()),
            other => other,
        }
    }

    /// Replaces `Empty` with `alternative`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::{Error, Result};
    ///
    /// let empty: Result<i32> = Result::empty();
    /// assert!(empty.if_empty_resume(Result::failure(Error::msg("absent"))).is_failure());
    /// ```
    pub fn if_empty_resume(self, alternative: Self) -> Self {
        match self {
            Self::Empty => alternative,
            other => other,
        }
    }

    /// Replaces `Empty` with `supplier()`.
    pub fn if_empty_resume_with(self, supplier: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Empty => supplier(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Message;
    use rstest::rstest;

    #[rstest]
    fn test_unmatched_failure_keeps_error() {
        let error = Error::msg("boom");
        let failure: Result<i32> = Result::Failure(error.clone());
        let result = failure.if_failure_map_of::<std::fmt::Error>(|_| Error::msg("other"));
        assert!(result.get_error().is_ok_and(|kept| kept.ptr_eq(&error)));
    }

    #[rstest]
    fn test_map_of_receives_typed_error() {
        let failure: Result<i32> = Result::failure(Error::msg("boom"));
        let result = failure.if_failure_map_of::<Message>(|message| {
            Error::msg(message.as_str().to_uppercase())
        });
        assert_eq!(result.get_error().map(|error| error.to_string()), Ok("BOOM".to_string()));
    }

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    fn test_resume_when(#[case] accept: bool, #[case] resumed: bool) {
        let failure: Result<i32> = Result::failure(Error::msg("boom"));
        let result = failure.if_failure_resume_when(|_| accept, |_| Result::success(9));
        assert_eq!(result.is_success(), resumed);
        assert_eq!(result.is_failure(), !resumed);
    }

    #[rstest]
    fn test_empty_suppliers_are_lazy() {
        let success = Result::success(1)
            .if_empty_return_with(|| unreachable!())
            .if_empty_resume_with(|| unreachable!());
        assert_eq!(success, Result::success(1));
    }
}
