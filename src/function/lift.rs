//! Lifting functions into the tri-state [`Result`].
//!
//! `lift()` turns a function whose return type is [`Recoverable`] into one
//! returning [`Result`]:
//!
//! | Return type | `lift()` yields |
//! |---|---|
//! | `Option<T>` | `Some(v)` → `Success(v)`, `None` → `Empty` |
//! | `core::result::Result<T, E>` | `Ok(v)` → `Success(v)`, `Err(e)` → `Failure(e)` |
//! | `lambdadepot::result::Result<T>` | unchanged |
//!
//! Panics are not recoverable and propagate through lifted functions.

use std::error::Error as StdError;
use std::sync::Arc;

use super::{Function0, Function1, Function2, Function3, Function4};
use crate::result::{Error, Result};

/// A return shape that converts into [`Result`].
///
/// # Examples
///
/// ```rust
/// use lambdadepot::function::Recoverable;
/// use lambdadepot::result::Result;
///
/// assert_eq!(Some(1).recover(), Result::success(1));
/// assert!(None::<i32>.recover().is_empty());
/// assert!("x".parse::<i32>().recover().is_failure());
/// ```
pub trait Recoverable {
    /// The value carried on success.
    type Value;

    /// Converts into a tri-state [`Result`].
    fn recover(self) -> Result<Self::Value>;
}

impl<T> Recoverable for Option<T> {
    type Value = T;

    #[inline]
    fn recover(self) -> Result<T> {
        Result::success_or_empty(self)
    }
}

impl<T, E> Recoverable for core::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    type Value = T;

    fn recover(self) -> Result<T> {
        match self {
            Ok(value) => Result::Success(value),
            Err(error) => {
                let error = Error::new(error);
                tracing::debug!(error = %error, "lifted function failed");
                Result::Failure(error)
            }
        }
    }
}

impl<T> Recoverable for Result<T> {
    type Value = T;

    #[inline]
    fn recover(self) -> Self {
        self
    }
}

// =============================================================================
// lift
// =============================================================================

impl<R> Function0<R>
where
    R: Recoverable + 'static,
    R::Value: 'static,
{
    /// Returns a supplier whose outcome is captured in a [`Result`].
    pub fn lift(&self) -> Function0<Result<R::Value>> {
        let callable = Arc::clone(&self.callable);
        Function0::of(move || callable().recover())
    }
}

impl<T1, R> Function1<T1, R>
where
    T1: 'static,
    R: Recoverable + 'static,
    R::Value: 'static,
{
    /// Returns a function whose outcome is captured in a [`Result`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::function::Function1;
    ///
    /// let first_char = Function1::of(|text: &'static str| text.chars().next()).lift();
    /// assert_eq!(first_char.apply("abc").get_value(), Ok('a'));
    /// assert!(first_char.apply("").is_empty());
    /// ```
    pub fn lift(&self) -> Function1<T1, Result<R::Value>> {
        let callable = Arc::clone(&self.callable);
        Function1::of(move |t1: T1| callable(t1).recover())
    }
}

impl<T1, T2, R> Function2<T1, T2, R>
where
    T1: 'static,
    T2: 'static,
    R: Recoverable + 'static,
    R::Value: 'static,
{
    /// Returns a function whose outcome is captured in a [`Result`].
    pub fn lift(&self) -> Function2<T1, T2, Result<R::Value>> {
        let callable = Arc::clone(&self.callable);
        Function2::of(move |t1: T1, t2: T2| callable(t1, t2).recover())
    }
}

impl<T1, T2, T3, R> Function3<T1, T2, T3, R>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    R: Recoverable + 'static,
    R::Value: 'static,
{
    /// Returns a function whose outcome is captured in a [`Result`].
    pub fn lift(&self) -> Function3<T1, T2, T3, Result<R::Value>> {
        let callable = Arc::clone(&self.callable);
        Function3::of(move |t1: T1, t2: T2, t3: T3| callable(t1, t2, t3).recover())
    }
}

impl<T1, T2, T3, T4, R> Function4<T1, T2, T3, T4, R>
where
    T1: 'static,
    T2: 'static,
    T3: 'static,
    T4: 'static,
    R: Recoverable + 'static,
    R::Value: 'static,
{
    /// Returns a function whose outcome is captured in a [`Result`].
    pub fn lift(&self) -> Function4<T1, T2, T3, T4, Result<R::Value>> {
        let callable = Arc::clone(&self.callable);
        Function4::of(move |t1: T1, t2: T2, t3: T3, t4: T4| callable(t1, t2, t3, t4).recover())
    }
}
