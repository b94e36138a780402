//! `Consumer0` to `Consumer4`.

use std::sync::Arc;

callable_wrapper! {
    /// An action of no arguments.
    Consumer0<> => fn accept();
}

callable_wrapper! {
    /// An action on one borrowed argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::{Arc, Mutex};
    /// use lambdadepot::function::Consumer1;
    ///
    /// let log = Arc::new(Mutex::new(Vec::new()));
    /// let first = Arc::clone(&log);
    /// let second = Arc::clone(&log);
    ///
    /// let record = Consumer1::of(move |value: &i32| first.lock().unwrap().push(*value))
    ///     .and_then(move |value: &i32| second.lock().unwrap().push(value * 10));
    /// record.accept(&4);
    ///
    /// assert_eq!(*log.lock().unwrap(), vec![4, 40]);
    /// ```
    Consumer1<T1> => fn accept(t1: &T1);
}

callable_wrapper! {
    /// An action on two borrowed arguments.
    Consumer2<T1, T2> => fn accept(t1: &T1, t2: &T2);
}

callable_wrapper! {
    /// An action on three borrowed arguments.
    Consumer3<T1, T2, T3> => fn accept(t1: &T1, t2: &T2, t3: &T3);
}

callable_wrapper! {
    /// An action on four borrowed arguments.
    Consumer4<T1, T2, T3, T4> => fn accept(t1: &T1, t2: &T2, t3: &T3, t4: &T4);
}

// =============================================================================
// Consumer0
// =============================================================================

impl Consumer0 {
    /// Returns an action that runs `self` and then `after`.
    pub fn and_then(&self, after: impl Fn() + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move || {
            callable();
            after();
        })
    }
}

// =============================================================================
// Consumer1
// =============================================================================

impl<T1: 'static> Consumer1<T1> {
    /// Binds the argument.
    pub fn partial_apply(&self, t1: T1) -> Consumer0
    where
        T1: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer0::of(move || callable(&t1))
    }

    /// Returns an action that runs `self` and then `after` with the same argument.
    pub fn and_then(&self, after: impl Fn(&T1) + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1| {
            callable(t1);
            after(t1);
        })
    }
}

// =============================================================================
// Consumer2
// =============================================================================

impl<T1: 'static, T2: 'static> Consumer2<T1, T2> {
    /// Binds the first argument.
    pub fn partial_apply(&self, t1: T1) -> Consumer1<T2>
    where
        T1: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer1::of(move |t2: &T2| callable(&t1, t2))
    }

    /// Binds both arguments.
    pub fn partial_apply2(&self, t1: T1, t2: T2) -> Consumer0
    where
        T1: Send + Sync,
        T2: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer0::of(move || callable(&t1, &t2))
    }

    /// Returns an action taking the arguments in the opposite order.
    pub fn reverse(&self) -> Consumer2<T2, T1> {
        let callable = Arc::clone(&self.callable);
        Consumer2::of(move |t2: &T2, t1: &T1| callable(t1, t2))
    }

    /// Returns an action that runs `self` and then `after` with the same arguments.
    pub fn and_then(&self, after: impl Fn(&T1, &T2) + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2| {
            callable(t1, t2);
            after(t1, t2);
        })
    }
}

// =============================================================================
// Consumer3
// =============================================================================

impl<T1: 'static, T2: 'static, T3: 'static> Consumer3<T1, T2, T3> {
    /// Binds the first argument.
    pub fn partial_apply(&self, t1: T1) -> Consumer2<T2, T3>
    where
        T1: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer2::of(move |t2: &T2, t3: &T3| callable(&t1, t2, t3))
    }

    /// Binds the first two arguments.
    pub fn partial_apply2(&self, t1: T1, t2: T2) -> Consumer1<T3>
    where
        T1: Send + Sync,
        T2: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer1::of(move |t3: &T3| callable(&t1, &t2, t3))
    }

    /// Binds all three arguments.
    pub fn partial_apply3(&self, t1: T1, t2: T2, t3: T3) -> Consumer0
    where
        T1: Send + Sync,
        T2: Send + Sync,
        T3: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer0::of(move || callable(&t1, &t2, &t3))
    }

    /// Returns an action taking the arguments in the opposite order.
    pub fn reverse(&self) -> Consumer3<T3, T2, T1> {
        let callable = Arc::clone(&self.callable);
        Consumer3::of(move |t3: &T3, t2: &T2, t1: &T1| callable(t1, t2, t3))
    }

    /// Returns an action that runs `self` and then `after` with the same arguments.
    pub fn and_then(&self, after: impl Fn(&T1, &T2, &T3) + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2, t3: &T3| {
            callable(t1, t2, t3);
            after(t1, t2, t3);
        })
    }
}

// =============================================================================
// Consumer4
// =============================================================================

impl<T1: 'static, T2: 'static, T3: 'static, T4: 'static> Consumer4<T1, T2, T3, T4> {
    /// Binds the first argument.
    pub fn partial_apply(&self, t1: T1) -> Consumer3<T2, T3, T4>
    where
        T1: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer3::of(move |t2: &T2, t3: &T3, t4: &T4| callable(&t1, t2, t3, t4))
    }

    /// Binds the first two arguments.
    pub fn partial_apply2(&self, t1: T1, t2: T2) -> Consumer2<T3, T4>
    where
        T1: Send + Sync,
        T2: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer2::of(move |t3: &T3, t4: &T4| callable(&t1, &t2, t3, t4))
    }

    /// Binds the first three arguments.
    pub fn partial_apply3(&self, t1: T1, t2: T2, t3: T3) -> Consumer1<T4>
    where
        T1: Send + Sync,
        T2: Send + Sync,
        T3: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer1::of(move |t4: &T4| callable(&t1, &t2, &t3, t4))
    }

    /// Binds all four arguments.
    pub fn partial_apply4(&self, t1: T1, t2: T2, t3: T3, t4: T4) -> Consumer0
    where
        T1: Send + Sync,
        T2: Send + Sync,
        T3: Send + Sync,
        T4: Send + Sync,
    {
        let callable = Arc::clone(&self.callable);
        Consumer0::of(move || callable(&t1, &t2, &t3, &t4))
    }

    /// Returns an action taking the arguments in the opposite order.
    pub fn reverse(&self) -> Consumer4<T4, T3, T2, T1> {
        let callable = Arc::clone(&self.callable);
        Consumer4::of(move |t4: &T4, t3: &T3, t2: &T2, t1: &T1| callable(t1, t2, t3, t4))
    }

    /// Returns an action that runs `self` and then `after` with the same arguments.
    pub fn and_then(&self, after: impl Fn(&T1, &T2, &T3, &T4) + Send + Sync + 'static) -> Self {
        let callable = Arc::clone(&self.callable);
        Self::of(move |t1: &T1, t2: &T2, t3: &T3, t4: &T4| {
            callable(t1, t2, t3, t4);
            after(t1, t2, t3, t4);
        })
    }
}

static_assertions::assert_impl_all!(Consumer0: Send, Sync, Clone);
static_assertions::assert_impl_all!(Consumer2<String, Vec<u8>>: Send, Sync, Clone);
