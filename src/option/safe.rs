//! Null-safe getter and setter chains.
//!
//! A [`SafeGetter`] is a chain of steps `&I -> Option<&O>`. Evaluation stops
//! at the first step that yields `None`. [`SafeGetterMut`] is the same chain
//! over mutable references, and [`SafeSetter`] writes through one.
//! [`SafeProperty`] ends a chain in a computed value instead of a borrow.

use std::fmt;
use std::sync::Arc;

type Extractor<I, O> = dyn for<'a> Fn(&'a I) -> Option<&'a O> + Send + Sync;
type ExtractorMut<I, O> = dyn for<'a> Fn(&'a mut I) -> Option<&'a mut O> + Send + Sync;
type Computation<I, O> = dyn Fn(&I) -> Option<O> + Send + Sync;
type Setter<O, V> = dyn Fn(&mut O, V) + Send + Sync;

// =============================================================================
// SafeGetter
// =============================================================================

/// A chain of optional links from `I` to `O`.
///
/// # Examples
///
/// ```rust
/// use lambdadepot::option::SafeGetter;
///
/// struct Engine { serial: Option<String> }
/// struct Car { engine: Option<Engine> }
///
/// let serial = SafeGetter::of(|car: &Car| car.engine.as_ref())
///     .then(|engine: &Engine| engine.serial.as_ref())
///     .when(|serial: &String| !serial.is_empty());
///
/// let car = Car { engine: Some(Engine { serial: Some("X-1".into()) }) };
/// assert_eq!(serial.get(&car).map(String::as_str), Some("X-1"));
///
/// let blank = Car { engine: Some(Engine { serial: Some(String::new()) }) };
/// assert_eq!(serial.get(&blank), None);
/// assert_eq!(serial.get(None), None);
/// ```
#[must_use]
pub struct SafeGetter<I, O> {
    extractor: Arc<Extractor<I, O>>,
}

impl<I: 'static, O: 'static> SafeGetter<I, O> {
    /// Starts a chain with a single step.
    pub fn of<F>(extractor: F) -> Self
    where
        F: for<'a> Fn(&'a I) -> Option<&'a O> + Send + Sync + 'static,
    {
        Self {
            extractor: Arc::new(extractor),
        }
    }

    /// Appends a step to the chain.
    pub fn then<U, F>(&self, next: F) -> SafeGetter<I, U>
    where
        U: 'static,
        F: for<'a> Fn(&'a O) -> Option<&'a U> + Send + Sync + 'static,
    {
        let extractor = Arc::clone(&self.extractor);
        SafeGetter::of(move |input| extractor(input).and_then(&next))
    }

    /// Appends another getter to the chain.
    pub fn then_getter<U: 'static>(&self, next: &SafeGetter<O, U>) -> SafeGetter<I, U> {
        let extractor = Arc::clone(&self.extractor);
        let next = Arc::clone(&next.extractor);
        SafeGetter::of(move |input| extractor(input).and_then(|value| next(value)))
    }

    /// Appends a step that computes an owned value from the current link.
    ///
    /// ```rust
    /// use lambdadepot::option::SafeGetter;
    ///
    /// struct User { name: Option<String> }
    ///
    /// let initial = SafeGetter::of(|user: &User| user.name.as_ref())
    ///     .map(|name: &String| name.chars().next());
    ///
    /// assert_eq!(initial.get(&User { name: Some("ada".into()) }), Some('a'));
    /// assert_eq!(initial.get(&User { name: Some(String::new()) }), None);
    /// ```
    pub fn map<U, F>(&self, next: F) -> SafeProperty<I, U>
    where
        U: 'static,
        F: Fn(&O) -> Option<U> + Send + Sync + 'static,
    {
        let extractor = Arc::clone(&self.extractor);
        SafeProperty::of(move |input: &I| extractor(input).and_then(|value| next(value)))
    }

    /// Treats the current link as absent unless `predicate` accepts it.
    pub fn when(&self, predicate: impl Fn(&O) -> bool + Send + Sync + 'static) -> Self {
        let extractor = Arc::clone(&self.extractor);
        Self::of(move |input| extractor(input).filter(|value| predicate(value)))
    }

    /// Runs the chain, returning `None` at the first absent link.
    ///
    /// `input` may be a reference or an `Option` of one.
    pub fn get<'a>(&self, input: impl Into<Option<&'a I>>) -> Option<&'a O> {
        input.into().and_then(|input| (self.extractor)(input))
    }
}

impl<I, O> Clone for SafeGetter<I, O> {
    fn clone(&self) -> Self {
        Self {
            extractor: Arc::clone(&self.extractor),
        }
    }
}

impl<I, O> fmt::Debug for SafeGetter<I, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SafeGetter").finish_non_exhaustive()
    }
}

// =============================================================================
// SafeGetterMut
// =============================================================================

/// A chain of optional links from `&mut I` to `&mut O`.
#[must_use]
pub struct SafeGetterMut<I, O> {
    extractor: Arc<ExtractorMut<I, O>>,
}

impl<I: 'static, O: 'static> SafeGetterMut<I, O> {
    /// Starts a chain with a single step.
    pub fn of<F>(extractor: F) -> Self
    where
        F: for<'a> Fn(&'a mut I) -> Option<&'a mut O> + Send + Sync + 'static,
    {
        Self {
            extractor: Arc::new(extractor),
        }
    }

    /// Appends a step to the chain.
    pub fn then<U, F>(&self, next: F) -> SafeGetterMut<I, U>
    where
        U: 'static,
        F: for<'a> Fn(&'a mut O) -> Option<&'a mut U> + Send + Sync + 'static,
    {
        let extractor = Arc::clone(&self.extractor);
        SafeGetterMut::of(move |input| extractor(input).and_then(&next))
    }

    /// Treats the current link as absent unless `predicate` accepts it.
    pub fn when(&self, predicate: impl Fn(&O) -> bool + Send + Sync + 'static) -> Self {
        let extractor = Arc::clone(&self.extractor);
        Self::of(move |input| extractor(input).filter(|value| predicate(value)))
    }

    /// Runs the chain, returning `None` at the first absent link.
    pub fn get_mut<'a>(&self, input: impl Into<Option<&'a mut I>>) -> Option<&'a mut O> {
        input.into().and_then(|input| (self.extractor)(input))
    }

    /// Builds a setter that writes `V` into the target of this chain.
    pub fn set_with<V, F>(&self, setter: F) -> SafeSetter<I, O, V>
    where
        F: Fn(&mut O, V) + Send + Sync + 'static,
    {
        SafeSetter {
            getter: self.clone(),
            setter: Arc::new(setter),
        }
    }
}

impl<I, O> Clone for SafeGetterMut<I, O> {
    fn clone(&self) -> Self {
        Self {
            extractor: Arc::clone(&self.extractor),
        }
    }
}

impl<I, O> fmt::Debug for SafeGetterMut<I, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SafeGetterMut").finish_non_exhaustive()
    }
}

// =============================================================================
// SafeSetter
// =============================================================================

/// Writes a value at the end of a [`SafeGetterMut`] chain.
///
/// # Examples
///
/// ```rust
/// use lambdadepot::option::SafeGetterMut;
///
/// struct Profile { email: Option<String> }
/// struct Account { profile: Option<Profile> }
///
/// let email = SafeGetterMut::of(|account: &mut Account| account.profile.as_mut())
///     .set_with(|profile: &mut Profile, email: String| profile.email = Some(email));
///
/// let mut account = Account { profile: Some(Profile { email: None }) };
/// assert!(email.set(&mut account, "a@example.com".to_string()));
/// assert_eq!(account.profile.unwrap().email.as_deref(), Some("a@example.com"));
///
/// let mut anonymous = Account { profile: None };
/// assert!(!email.set(&mut anonymous, "b@example.com".to_string()));
/// ```
#[must_use]
pub struct SafeSetter<I, O, V> {
    getter: SafeGetterMut<I, O>,
    setter: Arc<Setter<O, V>>,
}

impl<I: 'static, O: 'static, V> SafeSetter<I, O, V> {
    /// Sets `value` if every link of the chain is present.
    ///
    /// Returns whether the value was written.
    pub fn set<'a>(&self, input: impl Into<Option<&'a mut I>>, value: V) -> bool {
        match self.getter.get_mut(input) {
            Some(target) => {
                (self.setter)(target, value);
                true
            }
            None => false,
        }
    }
}

impl<I, O, V> Clone for SafeSetter<I, O, V> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: Arc::clone(&self.setter),
        }
    }
}

impl<I, O, V> fmt::Debug for SafeSetter<I, O, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SafeSetter").finish_non_exhaustive()
    }
}

// =============================================================================
// SafeProperty
// =============================================================================

/// A chain of optional links from `I` ending in a computed `O`.
///
/// Unlike [`SafeGetter`], each step may produce a new value rather than a
/// reference into the input.
///
/// # Examples
///
/// ```rust
/// use lambdadepot::option::SafeProperty;
///
/// let first_digit = SafeProperty::of(|text: &String| text.chars().next())
///     .then(|first: char| first.to_digit(10))
///     .when(|digit: &u32| *digit > 0);
///
/// assert_eq!(first_digit.get(&"42".to_string()), Some(4));
/// assert_eq!(first_digit.get(&"0x".to_string()), None);
/// assert_eq!(first_digit.get(&String::new()), None);
/// ```
#[must_use]
pub struct SafeProperty<I, O> {
    compute: Arc<Computation<I, O>>,
}

impl<I: 'static, O: 'static> SafeProperty<I, O> {
    /// Starts a chain with a single computing step.
    pub fn of<F>(compute: F) -> Self
    where
        F: Fn(&I) -> Option<O> + Send + Sync + 'static,
    {
        Self {
            compute: Arc::new(compute),
        }
    }

    /// Appends a step that consumes the current value.
    pub fn then<U, F>(&self, next: F) -> SafeProperty<I, U>
    where
        U: 'static,
        F: Fn(O) -> Option<U> + Send + Sync + 'static,
    {
        let compute = Arc::clone(&self.compute);
        SafeProperty::of(move |input: &I| compute(input).and_then(&next))
    }

    /// Treats the current value as absent unless `predicate` accepts it.
    pub fn when(&self, predicate: impl Fn(&O) -> bool + Send + Sync + 'static) -> Self {
        let compute = Arc::clone(&self.compute);
        Self::of(move |input: &I| compute(input).filter(|value| predicate(value)))
    }

    /// Runs the chain, returning `None` at the first absent link.
    pub fn get<'a>(&self, input: impl Into<Option<&'a I>>) -> Option<O> {
        input.into().and_then(|input| (self.compute)(input))
    }
}

impl<I, O> Clone for SafeProperty<I, O> {
    fn clone(&self) -> Self {
        Self {
            compute: Arc::clone(&self.compute),
        }
    }
}

impl<I, O> fmt::Debug for SafeProperty<I, O> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SafeProperty").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(SafeProperty<String, char>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SafeGetter<String, usize>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SafeSetter<String, Vec<u8>, u8>: Send, Sync, Clone);
