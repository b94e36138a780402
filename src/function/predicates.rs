//! `Predicate0` to `Predicate4`.
//!
//! Predicates borrow their arguments. `and` and `or` short-circuit: the right
//! operand only runs when the left one does not already decide the outcome.

use std::sync::Arc;

callable_wrapper! {
    /// A condition of no arguments.
    Predicate0<> => fn test() -> bool;
}

callable_wrapper! {
    /// A condition on one argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::function::Predicate1;
    ///
    /// let even = Predicate1::of(|value: &i32| value % 2 == 0);
    /// let small = even.and(|value: &i32| *value < 10);
    ///
    /// assert!(small.test(&4));
    /// assert!(!small.test(&12));
    /// assert!(even.negate().test(&3));
    /// ```
    Predicate1<T1> => fn test(t1: &T1) -> bool;
}

callable_wrapper! {
    /// A condition on two arguments.
    Predicate2<T1, T2> => fn test(t1: &T1, t2: &T2) -> bool;
}

callable_wrapper! {
    /// A condition on three arguments.
    Predicate3<T1, T2, T3> => fn test(t1: &T1, t2: &T2, t3: &T3) -> bool;
}

callable_wrapper! {
    /// A condition on four arguments.
    Predicate4<T1, T2, T3, T4> => fn test(t1: &T1, t2: &T2, t3: &T3, t4: &T4) -> bool;
}

// =============================================================================
// Predicate0
// =============================================================================

impl Predicate0 {
    /// Evaluates the condition; same as [`test`](Self::test).
    #[inline]
    pub fn get(&self) -> bool {
        self.test()
    }

    /// Returns a condition that holds when both hold. `other` runs only if `self` holds.
    pub fn and(&self, other: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move || callable() && other())
    }

    /// Returns a condition that holds when either holds. `other` runs only if `self` fails.
    pub fn or(&self, other: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move || callable() || other())
    }

    /// Returns the logical negation.
    pub fn negate(&self) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move || !callable())
    }
}

// =============================================================================
// Predicate1
// =============================================================================

impl<T1: 'static> Predicate1<T1> {
    /// Binds the argument, yielding a [`Predicate0`].
    pub fn partial_apply(&self, t1: T1) -> Predicate0
    where
        T1: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate0::of(move || callable(&t1))
    }

    /// Short-circuiting logical AND.
    pub fn and(&self, other: impl Fn(&T1) -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1| callable(t1) && other(t1))
    }

    /// Short-circuiting logical OR.
    pub fn or(&self, other: impl Fn(&T1) -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1| callable(t1) || other(t1))
    }

    /// Logical negation.
    pub fn negate(&self) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1| !callable(t1))
    }
}

// =============================================================================
// Predicate2
// =============================================================================

impl<T1: 'static, T2: 'static> Predicate2<T1, T2> {
    /// Binds the first argument.
    pub fn partial_apply(&self, t1: T1) -> Predicate1<T2>
    where
        T1: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate1::of(move |t2: &T2| callable(&t1, t2))
    }

    /// Binds both arguments.
    pub fn partial_apply2(&self, t1: T1, t2: T2) -> Predicate0
    where
        T1: Send + Sync,
        T2: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate0::of(move || callable(&t1, &t2))
    }

    /// Returns a predicate taking the arguments in the opposite order.
    pub fn reverse(&self) -> Predicate2<T2, T1> {
        let callable = Arc::clone(&self.callable);
        Predicate2::of(move |t2: &T2, t1: &T1| callable(t1, t2))
    }

    /// Short-circuiting logical AND.
    pub fn and(&self, other: impl Fn(&T1, &T2) -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2| callable(t1, t2) && other(t1, t2))
    }

    /// Short-circuiting logical OR.
    pub fn or(&self, other: impl Fn(&T1, &T2) -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2| callable(t1, t2) || other(t1, t2))
    }

    /// Logical negation.
    pub fn negate(&self) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2| !callable(t1, t2))
    }
}

// =============================================================================
// Predicate3
// =============================================================================

impl<T1: 'static, T2: 'static, T3: 'static> Predicate3<T1, T2, T3> {
    /// Binds the first argument.
    pub fn partial_apply(&self, t1: T1) -> Predicate2<T2, T3>
    where
        T1: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate2::of(move |t2: &T2, t3: &T3| callable(&t1, t2, t3))
    }

    /// Binds the first two arguments.
    pub fn partial_apply2(&self, t1: T1, t2: T2) -> Predicate1<T3>
    where
        T1: Send + Sync,
        T2: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate1::of(move |t3: &T3| callable(&t1, &t2, t3))
    }

    /// Binds all three arguments.
    pub fn partial_apply3(&self, t1: T1, t2: T2, t3: T3) -> Predicate0
    where
        T1: Send + Sync,
        T2: Send + Sync,
        T3: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate0::of(move || callable(&t1, &t2, &t3))
    }

    /// Returns a predicate taking the arguments in the opposite order.
    pub fn reverse(&self) -> Predicate3<T3, T2, T1> {
        let callable = Arc::clone(&self.callable);
        Predicate3::of(move |t3: &T3, t2: &T2, t1: &T1| callable(t1, t2, t3))
    }

    /// Short-circuiting logical AND.
    pub fn and(&self, other: impl Fn(&T1, &T2, &T3) -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2, t3: &T3| callable(t1, t2, t3) && other(t1, t2, t3))
    }

    /// Short-circuiting logical OR.
    pub fn or(&self, other: impl Fn(&T1, &T2, &T3) -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2, t3: &T3| callable(t1, t2, t3) || other(t1, t2, t3))
    }

    /// Logical negation.
    pub fn negate(&self) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2, t3: &T3| !callable(t1, t2, t3))
    }
}

// =============================================================================
// Predicate4
// =============================================================================

impl<T1: 'static, T2: 'static, T3: 'static, T4: 'static> Predicate4<T1, T2, T3, T4> {
    /// Binds the first argument.
    pub fn partial_apply(&self, t1: T1) -> Predicate3<T2, T3, T4>
    where
        T1: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate3::of(move |t2: &T2, t3: &T3, t4: &T4| callable(&t1, t2, t3, t4))
    }

    /// Binds the first two arguments.
    pub fn partial_apply2(&self, t1: T1, t2: T2) -> Predicate2<T3, T4>
    where
        T1: Send + Sync,
        T2: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate2::of(move |t3: &T3, t4: &T4| callable(&t1, &t2, t3, t4))
    }

    /// Binds the first three arguments.
    pub fn partial_apply3(&self, t1: T1, t2: T2, t3: T3) -> Predicate1<T4>
    where
        T1: Send + Sync,
        T2: Send + Sync,
        T3: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate1::of(move |t4: &T4| callable(&t1, &t2, &t3, t4))
    }

    /// Binds all four arguments.
    pub fn partial_apply4(&self, t1: T1, t2: T2, t3: T3, t4: T4) -> Predicate0
    where
        T1: Send + Sync,
        T2: Send + Sync,
        T3: Send + Sync,
        T4: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Predicate0::of(move || callable(&t1, &t2, &t3, &t4))
    }

    /// Returns a predicate taking the arguments in the opposite order.
    pub fn reverse(&self) -> Predicate4<T4, T3, T2, T1> {
        let callable = Arc::clone(&self.callable);
        Predicate4::of(move |t4: &T4, t3: &T3, t2: &T2, t1: &T1| callable(t1, t2, t3, t4))
    }

    /// Short-circuiting logical AND.
    pub fn and(&self, other: impl Fn(&T1, &T2, &T3, &T4) -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2, t3: &T3, t4: &T4| {
            callable(t1, t2, t3, t4) && other(t1, t2, t3, t4)
        })
    }

    /// Short-circuiting logical OR.
    pub fn or(&self, other: impl Fn(&T1, &T2, &T3, &T4) -> bool + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2, t3: &T3, t4: &T4| {
            callable(t1, t2, t3, t4) || other(t1, t2, t3, t4)
        })
    }

    /// Logical negation.
    pub fn negate(&self) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2, t3: &T3, t4: &T4| !callable(t1, t2, t3, t4))
    }
}

static_assertions::assert_impl_all!(Predicate0: Send, Sync, Clone);
static_assertions::assert_impl_all!(Predicate3<String, i32, Vec<u8>>: Send, Sync, Clone);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, false)]
    #[case(false, true, false)]
    #[case(false, false, false)]
    fn test_and_truth_table(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(Predicate0::of(move || left).and(move || right).get(), expected);
    }

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, true)]
    #[case(false, true, true)]
    #[case(false, false, false)]
    fn test_or_truth_table(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(Predicate0::of(move || left).or(move || right).get(), expected);
    }

    #[rstest]
    fn test_partial_apply_binds_without_clone() {
        struct Token(u8);
        let matches = Predicate2::of(|token: &Token, expected: &u8| token.0 == *expected);
        let bound = matches.partial_apply(Token(7));
        assert!(bound.test(&7));
        assert!(!bound.test(&8));
    }
}
