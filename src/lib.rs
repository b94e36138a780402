//! # lambdadepot
//!
//! Functional building blocks for Rust that the standard library does not
//! provide out of the box.
//!
//! ## Overview
//!
//! - **Function wrappers**: `Function0`..`Function4`, `Predicate0`..`Predicate4`
//!   and `Consumer0`..`Consumer4`, each supporting partial application,
//!   argument reversal, currying and sequencing.
//! - **Tri-state result**: [`Result<T>`](result::Result) is either `Success`,
//!   `Failure` or `Empty`, with combinators for mapping, filtering, recovery
//!   and inspection.
//! - **Lift**: turns a function returning `Option` or `core::result::Result`
//!   into one returning the tri-state `Result`.
//! - **Null-safe access**: `SafeGetter` / `SafeSetter` navigate chains of
//!   optional links.
//!
//! ## Feature Flags
//!
//! - `result`: the tri-state [`Result`](result::Result) and its error types
//! - `function`: arity 0-4 wrappers, `lift` and predicate helpers (implies `result`)
//! - `option`: `OptionExt`, `SafeGetter`, `SafeSetter` (implies `result`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambdadepot::prelude::*;
//!
//! let parse = Function1::of(|text: String| text.parse::<i32>()).lift();
//!
//! let doubled = parse.apply("21".to_string()).map(|value| value * 2);
//! assert_eq!(doubled.get_value(), Ok(42));
//!
//! let recovered = parse
//!     .apply("forty-two".to_string())
//!     .if_failure_return_of::<std::num::ParseIntError>(0);
//! assert_eq!(recovered.get_value(), Ok(0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambdadepot::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "result")]
    pub use crate::result::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "option")]
    pub use crate::option::*;
}

#[cfg(feature = "result")]
pub mod result;

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "option")]
pub mod option;
