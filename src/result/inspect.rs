//! Side-effecting handlers for [`Result`].
//!
//! `peek_*` methods observe the result by reference and hand it back, so they
//! can sit in the middle of a chain. `if_*` methods consume the result and end
//! the chain.

use std::error::Error as StdError;

use super::{Error, Result};

impl<T> Result<T> {
    // =========================================================================
    // Peeking
    // =========================================================================

    /// Runs `action` on the value of a `Success` and returns `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::result::Result;
    ///
    /// let mut seen = Vec::new();
    /// let result = Result::success(3).peek_if_success(|value| seen.push(*value));
    /// assert_eq!(result, Result::success(3));
    /// assert_eq!(seen, vec![3]);
    /// ```
    pub fn peek_if_success(self, action: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            action(value);
        }
        self
    }

    /// Runs `action` on the error of a `Failure` and returns `self`.
    pub fn peek_if_failure(self, action: impl FnOnce(&Error)) -> Self {
        if let Self::Failure(error) = &self {
            action(error);
        }
        self
    }

    /// Runs `action` on the error of a `Failure` if it is an `X`.
    pub fn peek_if_failure_of<X>(self, action: impl FnOnce(&X)) -> Self
    where
        X: StdError + 'static,
    {
        if let Some(typed) = self.error().and_then(Error::downcast_ref::<X>) {
            action(typed);
        }
        self
    }

    /// Runs `action` on the error of a `Failure` if `predicate` accepts it.
    pub fn peek_if_failure_when(
        self,
        predicate: impl FnOnce(&Error) -> bool,
        action: impl FnOnce(&Error),
    ) -> Self {
        if let Self::Failure(error) = &self
            && predicate(error)
        {
            action(error);
        }
        self
    }

    /// Runs `action` if the result is `Empty` and returns `self`.
    pub fn peek_if_empty(self, action: impl FnOnce()) -> Self {
        if self.is_empty() {
            action();
        }
        self
    }

    // =========================================================================
    // Terminal Handlers
    // =========================================================================

    /// Runs `action` with the value of a `Success`.
    pub fn if_success(self, action: impl FnOnce(T)) {
        if let Self::Success(value) = self {
            action(value);
        }
    }

    /// Runs `action` with the error of a `Failure`.
    pub fn if_failure(self, action: impl FnOnce(Error)) {
        if let Self::Failure(error) = self {
            action(error);
        }
    }

    /// Runs `action` if the result is `Empty`.
    pub fn if_empty(self, action: impl FnOnce()) {
        if self.is_empty() {
            action();
        }
    }

    /// Runs `on_success` for a `Success` or `on_failure` for a `Failure`.
    ///
    /// Nothing runs for `Empty`.
    pub fn if_success_or_failure(self, on_success: impl FnOnce(T), on_failure: impl FnOnce(Error)) {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
            Self::Empty => {}
        }
    }

    /// Runs `on_success` for a `Success` or `on_empty` for `Empty`.
    ///
    /// Nothing runs for a `Failure`.
    pub fn if_success_or_empty(self, on_success: impl FnOnce(T), on_empty: impl FnOnce()) {
        match self {
            Self::Success(value) => on_success(value),
            Self::Empty => on_empty(),
            Self::Failure(_) => {}
        }
    }

    /// Runs `on_failure` for a `Failure` or `on_empty` for `Empty`.
    ///
    /// Nothing runs for a `Success`.
    pub fn if_failure_or_empty(self, on_failure: impl FnOnce(Error), on_empty: impl FnOnce()) {
        match self {
            Self::Failure(error) => on_failure(error),
            Self::Empty => on_empty(),
            Self::Success(_) => {}
        }
    }

    /// Runs exactly one of the three handlers, matching the current state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::{Cell, RefCell};
    /// use lambdadepot::result::{Error, Result};
    ///
    /// let total = Cell::new(0);
    /// let errors = RefCell::new(Vec::new());
    /// let misses = Cell::new(0);
    /// let tally = |result: Result<i32>| {
    ///     result.if_success_or_else(
    ///         |value| total.set(total.get() + value),
    ///         |error| errors.borrow_mut().push(error.to_string()),
    ///         || misses.set(misses.get() + 1),
    ///     );
    /// };
    ///
    /// tally(Result::success(5));
    /// tally(Result::failure(Error::msg("boom")));
    /// tally(Result::empty());
    ///
    /// assert_eq!(total.get(), 5);
    /// assert_eq!(*errors.borrow(), vec!["boom".to_string()]);
    /// assert_eq!(misses.get(), 1);
    /// ```
    pub fn if_success_or_else(
        self,
        on_success: impl FnOnce(T),
        on_failure: impl FnOnce(Error),
        on_empty: impl FnOnce(),
    ) {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
            Self::Empty => on_empty(),
        }
    }
}
