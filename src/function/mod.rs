//! Fixed-arity function, predicate and consumer wrappers.
//!
//! Each wrapper holds one shared callable and builds new wrappers through
//! combinators:
//!
//! | Family | Arities | Call | Combinators |
//! |---|---|---|---|
//! | [`Function0`]..[`Function4`] | 0-4 | `apply(t1, ..)` | `partial_apply*`, `reverse`, `curry`, `and_then`, `lift` |
//! | [`Predicate0`]..[`Predicate4`] | 0-4 | `test(&t1, ..)` | `partial_apply*`, `reverse`, `and`, `or`, `negate` |
//! | [`Consumer0`]..[`Consumer4`] | 0-4 | `accept(&t1, ..)` | `partial_apply*`, `reverse`, `and_then` |
//!
//! Functions take their arguments by value. Predicates and consumers borrow
//! them, which lets `and`, `or` and `and_then` hand the same arguments to both
//! operands.
//!
//! Cloning a wrapper is cheap: clones share the wrapped callable. All wrappers
//! are `Send + Sync`.
//!
//! # Examples
//!
//! ```rust
//! use lambdadepot::function::{Function3, Predicate2};
//!
//! let volume = Function3::of(|width: u32, height: u32, depth: u32| width * height * depth);
//! let flat = volume.partial_apply2(10, 1);
//! assert_eq!(flat.apply(4), 40);
//! assert_eq!(volume.curry().apply(2).apply(3, 4), 24);
//!
//! let divides = Predicate2::of(|divisor: &u32, value: &u32| value % divisor == 0);
//! let divisible_by = divides.reverse();
//! assert!(divisible_by.test(&12, &4));
//! ```
//!
//! # Collaborators Are Never Absent
//!
//! Every combinator takes its collaborator by value, so there is no way to pass
//! a missing function:
//!
//! ```rust,compile_fail
//! use lambdadepot::function::Function1;
//!
//! let increment = Function1::of(|value: i32| value + 1);
//! let broken = increment.and_then(None);
//! ```
//!
//! ```rust,compile_fail
//! use lambdadepot::function::Predicate1;
//!
//! let positive: Predicate1<i32> = Predicate1::of(None);
//! ```

/// Declares a wrapper struct around `Arc<dyn Fn(..) -> _ + Send + Sync>`.
///
/// Generates the struct, `of`, the call method, `as_fn`, `into_fn`, `Clone`,
/// `Debug`, `From<F>` for matching closures and a snake-case free constructor.
macro_rules! callable_wrapper {
    (
        $(#[$meta:meta])*
        $name:ident<$($param:ident),*> => fn $call:ident($($arg:ident: $arg_ty:ty),*);
    ) => {
        callable_wrapper! {
            $(#[$meta])*
            $name<$($param),*> => fn $call($($arg: $arg_ty),*) -> ();
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident<$($param:ident),*> => fn $call:ident($($arg:ident: $arg_ty:ty),*) -> $ret:ty;
    ) => {
        paste::paste! {
            $(#[$meta])*
            #[must_use]
            pub struct $name<$($param),*> {
                pub(super) callable: std::sync::Arc<dyn Fn($($arg_ty),*) -> $ret + Send + Sync>,
            }

            impl<$($param: 'static),*> $name<$($param),*> {
                #[doc = concat!("Wraps `callable` in a [`", stringify!($name), "`].")]
                pub fn of<F>(callable: F) -> Self
                where
                    F: Fn($($arg_ty),*) -> $ret + Send + Sync + 'static,
                {
                    Self {
                        callable: std::sync::Arc::new(callable),
                    }
                }

                /// Invokes the wrapped callable.
                #[inline]
                pub fn $call(&self, $($arg: $arg_ty),*) -> $ret {
                    (self.callable)($($arg),*)
                }

                /// Borrows the wrapped callable as a plain closure.
                #[inline]
                pub fn as_fn(&self) -> &(dyn Fn($($arg_ty),*) -> $ret + Send + Sync) {
                    &*self.callable
                }

                /// Converts into a closure that shares the wrapped callable.
                pub fn into_fn(self) -> impl Fn($($arg_ty),*) -> $ret + Clone + Send + Sync {
                    let callable = self.callable;
                    move |$($arg: $arg_ty),*| callable($($arg),*)
                }
            }

            impl<$($param),*> Clone for $name<$($param),*> {
                fn clone(&self) -> Self {
                    Self {
                        callable: std::sync::Arc::clone(&self.callable),
                    }
                }
            }

            impl<$($param),*> std::fmt::Debug for $name<$($param),*> {
                fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    formatter.debug_struct(stringify!($name)).finish_non_exhaustive()
                }
            }

            impl<F, $($param: 'static),*> From<F> for $name<$($param),*>
            where
                F: Fn($($arg_ty),*) -> $ret + Send + Sync + 'static,
            {
                fn from(callable: F) -> Self {
                    Self::of(callable)
                }
            }

            #[doc = concat!("Shorthand for [`", stringify!($name), "::of`].")]
            pub fn [<$name:snake>]<$($param: 'static,)* F>(callable: F) -> $name<$($param),*>
            where
                F: Fn($($arg_ty),*) -> $ret + Send + Sync + 'static,
            {
                $name::of(callable)
            }
        }
    };
}

mod consumers;
mod functions;
mod lift;
pub mod logic;
mod predicates;

pub use consumers::*;
pub use functions::*;
pub use lift::Recoverable;
pub use logic::{LogicError, PropertyExtractor};
pub use predicates::*;
