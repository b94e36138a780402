//! Ready-made predicates and predicate combinators.
//!
//! # Examples
//!
//! ```rust
//! use lambdadepot::function::logic::{all_of, is_between, is_not_equal_to};
//!
//! let valid_port = all_of([is_between(1, 65_535), is_not_equal_to(8080)]).unwrap();
//! assert!(valid_port.test(&443));
//! assert!(!valid_port.test(&8080));
//! assert!(!valid_port.test(&0));
//! ```

use std::cmp::Ordering;

use super::{Function1, Predicate1};

type StdResult<T, E> = core::result::Result<T, E>;

/// Errors raised while building combined predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    /// An empty collection of predicates was supplied.
    #[error("no predicate supplied")]
    NoPredicates,
}

fn collect_predicates<T>(
    predicates: impl IntoIterator<Item = Predicate1<T>>,
) -> StdResult<Vec<Predicate1<T>>, LogicError> {
    let predicates: Vec<_> = predicates.into_iter().collect();
    if predicates.is_empty() {
        return Err(LogicError::NoPredicates);
    }
    Ok(predicates)
}

// =============================================================================
// Combining
// =============================================================================

/// Holds when every predicate holds, evaluated in order until one fails.
///
/// # Errors
///
/// Returns [`LogicError::NoPredicates`] if `predicates` is empty.
pub fn all_of<T: 'static>(
    predicates: impl IntoIterator<Item = Predicate1<T>>,
) -> StdResult<Predicate1<T>, LogicError> {
    let predicates = collect_predicates(predicates)?;
    Ok(Predicate1::of(move |value: &T| {
        predicates.iter().all(|predicate| predicate.test(value))
    }))
}

/// Holds when at least one predicate holds, evaluated in order until one succeeds.
///
/// # Errors
///
/// Returns [`LogicError::NoPredicates`] if `predicates` is empty.
pub fn any_of<T: 'static>(
    predicates: impl IntoIterator<Item = Predicate1<T>>,
) -> StdResult<Predicate1<T>, LogicError> {
    let predicates = collect_predicates(predicates)?;
    Ok(Predicate1::of(move |value: &T| {
        predicates.iter().any(|predicate| predicate.test(value))
    }))
}

/// Holds when no predicate holds.
///
/// # Errors
///
/// Returns [`LogicError::NoPredicates`] if `predicates` is empty.
pub fn none_of<T: 'static>(
    predicates: impl IntoIterator<Item = Predicate1<T>>,
) -> StdResult<Predicate1<T>, LogicError> {
    any_of(predicates).map(|any| any.negate())
}

/// The negation of `predicate`.
pub fn not<T: 'static>(predicate: &Predicate1<T>) -> Predicate1<T> {
    predicate.negate()
}

// =============================================================================
// Comparisons
// =============================================================================

fn compare_with<T>(value: T, accept: fn(Ordering) -> bool) -> Predicate1<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    Predicate1::of(move |candidate: &T| candidate.partial_cmp(&value).is_some_and(accept))
}

fn compare_by<T>(
    value: T,
    comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    accept: fn(Ordering) -> bool,
) -> Predicate1<T>
where
    T: Send + Sync + 'static,
{
    Predicate1::of(move |candidate: &T| accept(comparator(candidate, &value)))
}

/// Holds for values greater than `value`.
pub fn is_greater_than<T>(value: T) -> Predicate1<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    compare_with(value, Ordering::is_gt)
}

/// Holds for values greater than or equal to `value`.
pub fn is_greater_than_or_equal_to<T>(value: T) -> Predicate1<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    compare_with(value, Ordering::is_ge)
}

/// Holds for values less than `value`.
pub fn is_less_than<T>(value: T) -> Predicate1<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    compare_with(value, Ordering::is_lt)
}

/// Holds for values less than or equal to `value`.
pub fn is_less_than_or_equal_to<T>(value: T) -> Predicate1<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    compare_with(value, Ordering::is_le)
}

/// Holds for values that compare equal to `value`.
pub fn is_equal_to<T>(value: T) -> Predicate1<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    compare_with(value, Ordering::is_eq)
}

/// Holds for values that do not compare equal to `value`.
///
/// Incomparable values (such as `NaN`) are not equal to anything.
pub fn is_not_equal_to<T>(value: T) -> Predicate1<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    is_equal_to(value).negate()
}

/// Holds for values in the inclusive range `low..=high`.
pub fn is_between<T>(low: T, high: T) -> Predicate1<T>
where
    T: PartialOrd + Send + Sync + 'static,
{
    Predicate1::of(move |candidate: &T| low <= *candidate && *candidate <= high)
}

/// [`is_greater_than`] with an explicit comparator.
pub fn is_greater_than_by<T>(
    value: T,
    comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
) -> Predicate1<T>
where
    T: Send + Sync + 'static,
{
    compare_by(value, comparator, Ordering::is_gt)
}

/// [`is_greater_than_or_equal_to`] with an explicit comparator.
pub fn is_greater_than_or_equal_to_by<T>(
    value: T,
    comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
) -> Predicate1<T>
where
    T: Send + Sync + 'static,
{
    compare_by(value, comparator, Ordering::is_ge)
}

/// [`is_less_than`] with an explicit comparator.
pub fn is_less_than_by<T>(
    value: T,
    comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
) -> Predicate1<T>
where
    T: Send + Sync + 'static,
{
    compare_by(value, comparator, Ordering::is_lt)
}

/// [`is_less_than_or_equal_to`] with an explicit comparator.
pub fn is_less_than_or_equal_to_by<T>(
    value: T,
    comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
) -> Predicate1<T>
where
    T: Send + Sync + 'static,
{
    compare_by(value, comparator, Ordering::is_le)
}

/// [`is_equal_to`] with an explicit comparator.
///
/// ```rust
/// use lambdadepot::function::logic::is_equal_to_by;
///
/// let same_name = is_equal_to_by("ALICE".to_string(), |left: &String, right: &String| {
///     left.to_lowercase().cmp(&right.to_lowercase())
/// });
/// assert!(same_name.test(&"alice".to_string()));
/// ```
pub fn is_equal_to_by<T>(
    value: T,
    comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
) -> Predicate1<T>
where
    T: Send + Sync + 'static,
{
    compare_by(value, comparator, Ordering::is_eq)
}

/// [`is_not_equal_to`] with an explicit comparator.
pub fn is_not_equal_to_by<T>(
    value: T,
    comparator: impl Fn(&T, &T) -> Ordering + Send + Sync + 'static,
) -> Predicate1<T>
where
    T: Send + Sync + 'static,
{
    compare_by(value, comparator, Ordering::is_ne)
}

// =============================================================================
// Properties
// =============================================================================

/// A way to reach an optional property of `I`.
///
/// Implemented by [`SafeGetter`](crate::option::SafeGetter) and
/// [`SafeProperty`](crate::option::SafeProperty) chains, and by
/// `Function1<I, Option<O>>` extractors. A `Function1` takes its argument by
/// value, so it receives a clone of the input.
pub trait PropertyExtractor<I, O>: Send + Sync + 'static {
    /// Tests the property of `input`, or returns `None` when it is absent.
    fn test_with(&self, input: &I, predicate: &Predicate1<O>) -> Option<bool>;
}

impl<I, O> PropertyExtractor<I, O> for Function1<I, Option<O>>
where
    I: Clone + 'static,
    O: 'static,
{
    fn test_with(&self, input: &I, predicate: &Predicate1<O>) -> Option<bool> {
        self.apply(input.clone())
            .map(|property| predicate.test(&property))
    }
}

#[cfg(feature = "option")]
impl<I: 'static, O: 'static> PropertyExtractor<I, O> for crate::option::SafeGetter<I, O> {
    fn test_with(&self, input: &I, predicate: &Predicate1<O>) -> Option<bool> {
        self.get(input).map(|property| predicate.test(property))
    }
}

#[cfg(feature = "option")]
impl<I: 'static, O: 'static> PropertyExtractor<I, O> for crate::option::SafeProperty<I, O> {
    fn test_with(&self, input: &I, predicate: &Predicate1<O>) -> Option<bool> {
        self.get(input).map(|property| predicate.test(&property))
    }
}

/// Tests the property reached by `property`, or returns `default` when it is absent.
///
/// # Examples
///
/// ```rust
/// use lambdadepot::function::{Function1, Predicate1};
/// use lambdadepot::function::logic::{is_equal_to, test_property_or_else};
/// use lambdadepot::option::{SafeGetter, SafeProperty};
///
/// struct User { nickname: Option<String> }
///
/// let nickname = SafeGetter::of(|user: &User| user.nickname.as_ref());
/// let short_nickname = test_property_or_else(
///     nickname,
///     Predicate1::of(|name: &String| name.len() < 5),
///     false,
/// );
/// assert!(short_nickname.test(&User { nickname: Some("bob".into()) }));
/// assert!(!short_nickname.test(&User { nickname: None }));
///
/// let starts_with_a = test_property_or_else(
///     SafeProperty::of(|text: &String| text.chars().next()),
///     is_equal_to('a'),
///     false,
/// );
/// assert!(starts_with_a.test(&"abc".to_string()));
///
/// let even_length = test_property_or_else(
///     Function1::of(|text: String| Some(text.len())),
///     Predicate1::of(|length: &usize| length % 2 == 0),
///     false,
/// );
/// assert!(even_length.test(&"ab".to_string()));
/// ```
pub fn test_property_or_else<I, O>(
    property: impl PropertyExtractor<I, O>,
    predicate: Predicate1<O>,
    default: bool,
) -> Predicate1<I>
where
    I: 'static,
    O: 'static,
{
    Predicate1::of(move |input: &I| property.test_with(input, &predicate).unwrap_or(default))
}

/// [`test_property_or_else`] defaulting to `true`.
pub fn test_property_or_else_true<I, O>(
    property: impl PropertyExtractor<I, O>,
    predicate: Predicate1<O>,
) -> Predicate1<I>
where
    I: 'static,
    O: 'static,
{
    test_property_or_else(property, predicate, true)
}

/// [`test_property_or_else`] defaulting to `false`.
pub fn test_property_or_else_false<I, O>(
    property: impl PropertyExtractor<I, O>,
    predicate: Predicate1<O>,
) -> Predicate1<I>
where
    I: 'static,
    O: 'static,
{
    test_property_or_else(property, predicate, false)
}
