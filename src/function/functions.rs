//! `Function0` to `Function4`.
//!
//! Bound arguments are cloned on every call, so `partial_apply*` and `curry`
//! require them to be `Clone`.

use std::sync::Arc;

callable_wrapper! {
    /// A function of no arguments, also usable as a supplier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::function::Function0;
    ///
    /// let answer = Function0::just(42);
    /// assert_eq!(answer.get(), 42);
    /// assert_eq!(answer.and_then(|value: i32| value / 2).apply(), 21);
    /// ```
    Function0<R> => fn apply() -> R;
}

callable_wrapper! {
    /// A function of one argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::function::Function1;
    ///
    /// let length = Function1::of(|text: String| text.len());
    /// let shout = Function1::of(|text: &'static str| text.to_uppercase());
    ///
    /// assert_eq!(length.compose(|text: &'static str| text.repeat(2)).apply("ab"), 4);
    /// assert_eq!(shout.and_then(|text: String| text + "!").apply("hey"), "HEY!");
    /// ```
    Function1<T1, R> => fn apply(t1: T1) -> R;
}

callable_wrapper! {
    /// A function of two arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambdadepot::function::Function2;
    ///
    /// let subtract = Function2::of(|left: i32, right: i32| left - right);
    ///
    /// assert_eq!(subtract.apply(10, 3), 7);
    /// assert_eq!(subtract.reverse().apply(10, 3), -7);
    /// assert_eq!(subtract.partial_apply(100).apply(1), 99);
    /// assert_eq!(subtract.curry().apply(5).apply(2), 3);
    /// ```
    Function2<T1, T2, R> => fn apply(t1: T1, t2: T2) -> R;
}

callable_wrapper! {
    /// A function of three arguments.
    Function3<T1, T2, T3, R> => fn apply(t1: T1, t2: T2, t3: T3) -> R;
}

callable_wrapper! {
    /// A function of four arguments.
    Function4<T1, T2, T3, T4, R> => fn apply(t1: T1, t2: T2, t3: T3, t4: T4) -> R;
}

// =============================================================================
// Function0
// =============================================================================

impl<R: 'static> Function0<R> {
    /// Supplies a value; same as [`apply`](Self::apply).
    #[inline]
    pub fn get(&self) -> R {
        self.apply()
    }

    /// Creates a supplier that always returns a clone of `value`.
    pub fn just(value: R) -> Self
    where
        R: Clone + Send + Sync,
    {
        Self::of(move || value.clone())
    }

    /// Returns a supplier that feeds this supplier's value into `after`.
    pub fn and_then<V: 'static>(&self, after: impl Fn(R) -> V + Send + Sync + 'static) -> Function0<V> {
        let callable = Arc::clone(&self.callable);
        Function0::of(move || after(callable()))
    }
}

// =============================================================================
// Function1
// =============================================================================

impl<T1: 'static, R: 'static> Function1<T1, R> {
    /// Binds the argument, yielding a supplier.
    pub fn partial_apply(&self, t1: T1) -> Function0<R>
    where
        T1: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function0::of(move || callable(t1.clone()))
    }

    /// Returns a function that applies `after` to this function's result.
    pub fn and_then<V: 'static>(
        &self,
        after: impl Fn(R) -> V + Send + Sync + 'static,
    ) -> Function1<T1, V> {
        let callable = Arc::clone(&self.callable);
        Function1::of(move |t1: T1| after(callable(t1)))
    }

    /// Returns a function that applies this function to the result of `before`.
    pub fn compose<V: 'static>(
        &self,
        before: impl Fn(V) -> T1 + Send + Sync + 'static,
    ) -> Function1<V, R> {
        let callable = Arc::clone(&self.callable);
        Function1::of(move |value: V| callable(before(value)))
    }
}

impl<T: 'static> Function1<T, T> {
    /// The function that returns its argument.
    ///
    /// ```rust
    /// use lambdadepot::function::Function1;
    ///
    /// assert_eq!(Function1::identity().apply("same"), "same");
    /// ```
    pub fn identity() -> Self {
        Self::of(std::convert::identity)
    }
}

// =============================================================================
// Function2
// =============================================================================

impl<T1: 'static, T2: 'static, R: 'static> Function2<T1, T2, R> {
    /// Binds the first argument.
    pub fn partial_apply(&self, t1: T1) -> Function1<T2, R>
    where
        T1: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function1::of(move |t2: T2| callable(t1.clone(), t2))
    }

    /// Binds both arguments, yielding a supplier.
    pub fn partial_apply2(&self, t1: T1, t2: T2) -> Function0<R>
    where
        T1: Clone + Send + Sync,
        T2: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function0::of(move || callable(t1.clone(), t2.clone()))
    }

    /// Returns a function taking the arguments in the opposite order.
    pub fn reverse(&self) -> Function2<T2, T1, R> {
        let callable = Arc::clone(&self.callable);
        Function2::of(move |t2: T2, t1: T1| callable(t1, t2))
    }

    /// Splits into a function of the first argument returning a function of the second.
    pub fn curry(&self) -> Function1<T1, Function1<T2, R>>
    where
        T1: Clone + Send + Sync,
    {
        let function = self.clone();
        Function1::of(move |t1: T1| function.partial_apply(t1))
    }

    /// Returns a function that applies `after` to this function's result.
    pub fn and_then<V: 'static>(
        &self,
        after: impl Fn(R) -> V + Send + Sync + 'static,
    ) -> Function2<T1, T2, V> {
        let callable = Arc::clone(&self.callable);
        Function2::of(move |t1: T1, t2: T2| after(callable(t1, t2)))
    }
}

// =============================================================================
// Function3
// =============================================================================

impl<T1: 'static, T2: 'static, T3: 'static, R: 'static> Function3<T1, T2, T3, R> {
    /// Binds the first argument.
    pub fn partial_apply(&self, t1: T1) -> Function2<T2, T3, R>
    where
        T1: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function2::of(move |t2: T2, t3: T3| callable(t1.clone(), t2, t3))
    }

    /// Binds the first two arguments.
    pub fn partial_apply2(&self, t1: T1, t2: T2) -> Function1<T3, R>
    where
        T1: Clone + Send + Sync,
        T2: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function1::of(move |t3: T3| callable(t1.clone(), t2.clone(), t3))
    }

    /// Binds all three arguments, yielding a supplier.
    pub fn partial_apply3(&self, t1: T1, t2: T2, t3: T3) -> Function0<R>
    where
        T1: Clone + Send + Sync,
        T2: Clone + Send + Sync,
        T3: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function0::of(move || callable(t1.clone(), t2.clone(), t3.clone()))
    }

    /// Returns a function taking the arguments in the opposite order.
    pub fn reverse(&self) -> Function3<T3, T2, T1, R> {
        let callable = Arc::clone(&self.callable);
        Function3::of(move |t3: T3, t2: T2, t1: T1| callable(t1, t2, t3))
    }

    /// Splits off the first argument.
    ///
    /// The returned function can be curried again.
    pub fn curry(&self) -> Function1<T1, Function2<T2, T3, R>>
    where
        T1: Clone + Send + Sync,
    {
        let function = self.clone();
        Function1::of(move |t1: T1| function.partial_apply(t1))
    }

    /// Returns a function that applies `after` to this function's result.
    pub fn and_then<V: 'static>(
        &self,
        after: impl Fn(R) -> V + Send + Sync + 'static,
    ) -> Function3<T1, T2, T3, V> {
        let callable = Arc::clone(&self.callable);
        Function3::of(move |t1: T1, t2: T2, t3: T3| after(callable(t1, t2, t3)))
    }
}

// =============================================================================
// Function4
// =============================================================================

impl<T1: 'static, T2: 'static, T3: 'static, T4: 'static, R: 'static> Function4<T1, T2, T3, T4, R> {
    /// Binds the first argument.
    pub fn partial_apply(&self, t1: T1) -> Function3<T2, T3, T4, R>
    where
        T1: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function3::of(move |t2: T2, t3: T3, t4: T4| callable(t1.clone(), t2, t3, t4))
    }

    /// Binds the first two arguments.
    pub fn partial_apply2(&self, t1: T1, t2: T2) -> Function2<T3, T4, R>
    where
        T1: Clone + Send + Sync,
        T2: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function2::of(move |t3: T3, t4: T4| callable(t1.clone(), t2.clone(), t3, t4))
    }

    /// Binds the first three arguments.
    pub fn partial_apply3(&self, t1: T1, t2: T2, t3: T3) -> Function1<T4, R>
    where
        T1: Clone + Send + Sync,
        T2: Clone + Send + Sync,
        T3: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function1::of(move |t4: T4| callable(t1.clone(), t2.clone(), t3.clone(), t4))
    }

    /// Binds all four arguments, yielding a supplier.
    pub fn partial_apply4(&self, t1: T1, t2: T2, t3: T3, t4: T4) -> Function0<R>
    where
        T1: Clone + Send + Sync,
        T2: Clone + Send + Sync,
        T3: Clone + Send + Sync,
        T4: Clone + Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Function0::of(move || callable(t1.clone(), t2.clone(), t3.clone(), t4.clone()))
    }

    /// Returns a function taking the arguments in the opposite order.
    pub fn reverse(&self) -> Function4<T4, T3, T2, T1, R> {
        let callable = Arc::clone(&self.callable);
        Function4::of(move |t4: T4, t3: T3, t2: T2, t1: T1| callable(t1, t2, t3, t4))
    }

    /// Splits off the first argument.
    pub fn curry(&self) -> Function1<T1, Function3<T2, T3, T4, R>>
    where
        T1: Clone + Send + Sync,
    {
        let function = self.clone();
        Function1::of(move |t1: T1| function.partial_apply(t1))
    }

    /// Returns a function that applies `after` to this function's result.
    pub fn and_then<V: 'static>(
        &self,
        after: impl Fn(R) -> V + Send + Sync + 'static,
    ) -> Function4<T1, T2, T3, T4, V> {
        let callable = Arc::clone(&self.callable);
        Function4::of(move |t1: T1, t2: T2, t3: T3, t4: T4| after(callable(t1, t2, t3, t4)))
    }
}

static_assertions::assert_impl_all!(Function0<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(Function4<i32, u8, String, Vec<i32>, bool>: Send, Sync, Clone);
