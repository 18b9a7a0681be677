//! Runtime partial application and currying.
//!
//! This module is the dynamic half of the crate: it works over callables of
//! any arity with no signature inspection, one argument list at a time. The
//! static half, the [`curried!`](crate::curried) macro, generates
//! equivalent chains ahead of time from a declared signature; the two are
//! interchangeable for the same function and the same argument order.
//!
//! # Overview
//!
//! - [`Slot`] / [`placeholder`] / [`applied!`]: applied-argument lists with
//!   positional holes
//! - [`VariadicFunction`]: the uniform calling convention, with
//!   `from_fn1`..`from_fn6` adapters for fixed-arity functions
//! - [`Partial`] / [`partial`]: bind some arguments now, the rest later
//! - [`Curried`] / [`curry`]: one argument at a time, in order
//! - [`Dispatched`] / [`auto_curry`]: pick the cheapest strategy for the
//!   arguments already collected
//!
//! # Example
//!
//! ```
//! use curryfn::apply::{Dispatched, VariadicFunction, auto_curry};
//!
//! fn volume(width: i32, height: i32, depth: i32) -> i32 {
//!     width * height * depth
//! }
//!
//! let function = VariadicFunction::from_fn3(volume);
//!
//! // Nothing collected yet: a full chain.
//! let chain = auto_curry(vec![], 3, function.clone()).into_function().unwrap();
//! assert_eq!(chain.apply(2).apply(3).call(vec![4]), 24);
//!
//! // Everything collected: invoked directly.
//! match auto_curry(vec![2, 3, 4], 3, function) {
//!     Dispatched::Value(result) => assert_eq!(result, 24),
//!     Dispatched::Function(_) => unreachable!(),
//! }
//! ```
//!
//! # Laws
//!
//! - **Equivalence**: for any arity-N callable and any split of its N
//!   arguments into non-empty groups, feeding the groups through
//!   [`auto_curry`] and [`Curried::supply`] produces the same result as the
//!   direct call.
//! - **Order**: arguments reach the callable in the order they were
//!   supplied, however they were grouped.
//! - **Independence**: stages are immutable values; reusing or branching a
//!   stage never leaks state between call chains.

mod applied_macro;
mod curry;
mod dispatch;
mod error;
mod function;
mod partial;
mod slot;

pub use curry::{Curried, curry};
pub use dispatch::{Dispatched, auto_curry};
pub use error::ArityError;
pub use function::VariadicFunction;
pub use partial::{Partial, partial};
pub use slot::{Slot, placeholder};

// Re-export the macro (it is already at the crate root via #[macro_export])
pub use crate::applied;
