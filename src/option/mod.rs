//! Extensions for [`Option`] and null-safe property access.
//!
//! - [`OptionExt`] adds side-effecting handlers and conversion into the
//!   tri-state [`Result`](crate::result::Result).
//! - [`SafeGetter`], [`SafeGetterMut`], [`SafeProperty`] and [`SafeSetter`]
//!   walk a chain of optional links, stopping at the first absent one.
//!
//! # Examples
//!
//! ```rust
//! use lambdadepot::option::{OptionExt, SafeGetter};
//!
//! struct Address { city: Option<String> }
//! struct Customer { address: Option<Address> }
//!
//! let city = SafeGetter::of(|customer: &Customer| customer.address.as_ref())
//!     .then(|address: &Address| address.city.as_ref());
//!
//! let customer = Customer { address: Some(Address { city: Some("Lyon".into()) }) };
//! let mut visited = Vec::new();
//! city.get(&customer).if_present(|name| visited.push(name.clone()));
//! assert_eq!(visited, vec!["Lyon".to_string()]);
//!
//! let homeless = Customer { address: None };
//! assert!(city.get(&homeless).into_result().is_empty());
//! ```

mod safe;

pub use safe::{SafeGetter, SafeGetterMut, SafeProperty, SafeSetter};

use crate::result::Result;

/// Handlers and conversions for [`Option`].
///
/// `peek_*` methods return the option unchanged so they can be chained;
/// `if_*` methods consume it.
pub trait OptionExt<T>: Sized {
    /// Runs `action` with the value if present.
    fn if_present(self, action: impl FnOnce(T));

    /// Runs `action` with the value if present, `otherwise` if absent.
    fn if_present_or_else(self, action: impl FnOnce(T), otherwise: impl FnOnce());

    /// Runs `action` if absent.
    fn if_empty(self, action: impl FnOnce());

    /// Runs `action` on the value if present and returns `self`.
    #[must_use]
    fn peek_if_present(self, action: impl FnOnce(&T)) -> Self;

    /// Runs `action` on the value if present, `otherwise` if absent, and returns `self`.
    #[must_use]
    fn peek_if_present_or_else(self, action: impl FnOnce(&T), otherwise: impl FnOnce()) -> Self;

    /// Runs `action` if absent and returns `self`.
    #[must_use]
    fn peek_if_empty(self, action: impl FnOnce()) -> Self;

    /// Passes the whole option to `transformer`.
    fn transform<U>(self, transformer: impl FnOnce(Self) -> U) -> U {
        transformer(self)
    }

    /// Converts into a tri-state [`Result`]: `Some` is `Success`, `None` is `Empty`.
    fn into_result(self) -> Result<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn if_present(self, action: impl FnOnce(T)) {
        if let Some(value) = self {
            action(value);
        }
    }

    fn if_present_or_else(self, action: impl FnOnce(T), otherwise: impl FnOnce()) {
        match self {
            Some(value) => action(value),
            None => otherwise(),
        }
    }

    fn if_empty(self, action: impl FnOnce()) {
        if self.is_none() {
            action();
        }
    }

    fn peek_if_present(self, action: impl FnOnce(&T)) -> Self {
        if let Some(value) = &self {
            action(value);
        }
        self
    }

    fn peek_if_present_or_else(self, action: impl FnOnce(&T), otherwise: impl FnOnce()) -> Self {
        match &self {
            Some(value) => action(value),
            None => otherwise(),
        }
        self
    }

    fn peek_if_empty(self, action: impl FnOnce()) -> Self {
        if self.is_none() {
            action();
        }
        self
    }

    #[inline]
    fn into_result(self) -> Result<T> {
        Result::success_or_empty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(3), 3, 0)]
    #[case(None, 0, 1)]
    fn test_present_or_else_runs_one_branch(
        #[case] option: Option<i32>,
        #[case] expected_sum: i32,
        #[case] expected_misses: i32,
    ) {
        let sum = Cell::new(0);
        let misses = Cell::new(0);
        let returned = option.peek_if_present_or_else(
            |value| sum.set(sum.get() + value),
            || misses.set(misses.get() + 1),
        );
        assert_eq!(returned, option);
        assert_eq!((sum.get(), misses.get()), (expected_sum, expected_misses));
    }

    #[rstest]
    fn test_peek_if_empty_skips_present() {
        let called = Cell::new(false);
        assert_eq!(Some(1).peek_if_empty(|| called.set(true)), Some(1));
        assert!(!called.get());
        None::<i32>.if_empty(|| called.set(true));
        assert!(called.get());
    }

    #[rstest]
    fn test_transform_sees_whole_option() {
        assert!(None::<i32>.transform(|option| option.is_none()));
        assert_eq!(Some(2).into_result(), Result::success(2));
    }
}
