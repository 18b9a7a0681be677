//! Procedural macros for curryfn.
//!
//! This crate provides the static half of curryfn: a synthesizer that
//! inspects a function's declared parameter list ahead of time and emits an
//! equivalent definition that is invoked one argument at a time. The
//! runtime half (placeholders, `partial`, `curry`, `auto_curry`) lives in
//! the `curryfn` crate and behaves identically for the same argument order.
//!
//! # Available Function-like Macros
//!
//! - [`curried!`]: rewrites a batch of function definitions into curried
//!   form
//!
//! # Example
//!
//! ```rust,ignore
//! use curryfn::curried;
//!
//! curried! {
//!     fn add(first: i32, second: i32) -> i32 {
//!         first + second
//!     }
//! }
//!
//! let add_five = add(5);
//! assert_eq!(add_five(3), 8);
//! assert_eq!(add_five(10), 15);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curried;
mod signature;

use proc_macro::TokenStream;

/// Rewrites a batch of function definitions into curried form.
///
/// The macro accepts one or more function definitions in a lightly
/// extended Rust grammar and emits each one either curried or, when the
/// definition is not eligible, unchanged.
///
/// # Parameter classification
///
/// Parameters split into two ordered sets:
///
/// - **chain** parameters are curried one at a time, in declared order;
/// - **pass-through** parameters are supplied together with the final
///   chain argument. A parameter is pass-through when it carries a default
///   marker (`name: Type = expr`) or when it is a trailing variadic
///   collector (`...name: Type`) named exactly `optional_args`. A variadic
///   collector under any other name is a required chain parameter.
///
/// A definition is eligible when more than one parameter is chained, or
/// exactly one is chained alongside at least one pass-through parameter.
/// The function names `curry` and `auto_curry` are never transformed, so
/// the currying machinery cannot be curry-transformed itself.
///
/// # Generated shape
///
/// An eligible definition with chain parameters `c0, c1, .., ck` becomes a
/// function of `c0` returning one nested closure per remaining chain
/// parameter; the innermost closure takes `ck` together with every
/// pass-through parameter and contains the original body verbatim. Rust
/// has no optional arguments, so pass-through arguments are always passed
/// explicitly in that final call; a default expression only drives
/// classification.
///
/// # Type constraints
///
/// Every chain parameter type except the innermost level's must implement
/// [`Clone`]: accumulated arguments are shared between levels via
/// `std::rc::Rc` so that each level is a reusable `Fn`.
///
/// # Examples
///
/// ## Basic currying
///
/// ```rust,ignore
/// use curryfn::curried;
///
/// curried! {
///     fn volume(width: f64, height: f64, depth: f64) -> f64 {
///         width * height * depth
///     }
/// }
///
/// assert!((volume(2.0)(3.0)(4.0) - 24.0).abs() < f64::EPSILON);
/// ```
///
/// ## Pass-through parameters
///
/// ```rust,ignore
/// use curryfn::curried;
///
/// curried! {
///     fn indent(text: String, depth: usize, filler: char = ' ') -> String {
///         let mut indented = filler.to_string().repeat(depth);
///         indented.push_str(&text);
///         indented
///     }
/// }
///
/// // `depth` is the last chain parameter; `filler` rides along on the
/// // final call.
/// let indent_note = indent("note".to_string());
/// assert_eq!(indent_note(2, '.'), "..note");
/// ```
///
/// ## Reusability
///
/// ```rust,ignore
/// use curryfn::curried;
///
/// curried! {
///     fn join(separator: String, left: String, right: String) -> String {
///         format!("{left}{separator}{right}")
///     }
/// }
///
/// let with_dash = join("-".to_string());
/// let ab = with_dash("a".to_string());
/// assert_eq!(ab("b".to_string()), "a-b");
/// assert_eq!(ab("c".to_string()), "a-c"); // still works
/// ```
#[proc_macro]
pub fn curried(input: TokenStream) -> TokenStream {
    curried::curried_impl(input)
}
