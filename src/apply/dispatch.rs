//! The auto-dispatch router.
//!
//! Given the arguments already collected for a callable of known arity,
//! [`auto_curry`] picks the cheapest applicable strategy:
//!
//! 1. everything is available: invoke directly;
//! 2. exactly one argument is missing: a single partial application, one
//!    more call completes the invocation;
//! 3. nothing is available: a full curry chain over the remaining arity;
//! 4. somewhere in between: bind the known arguments first, then curry
//!    what remains.
//!
//! This four-way split is the complete contract; there is no other branch.

use super::curry::{Curried, curry};
use super::function::VariadicFunction;
use super::partial::Partial;
use super::slot::Slot;

/// The outcome of auto-dispatch: a finished value or a callable that still
/// collects arguments.
pub enum Dispatched<T, R> {
    /// The callable was invoked; this is its result.
    Value(R),
    /// A chain still collecting arguments.
    Function(Curried<T, R>),
}

impl<T, R> Clone for Dispatched<T, R>
where
    R: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Value(result) => Self::Value(result.clone()),
            Self::Function(chain) => Self::Function(chain.clone()),
        }
    }
}

impl<T, R> Dispatched<T, R> {
    /// Returns `true` if dispatch invoked the callable.
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns `true` if dispatch produced a callable.
    #[inline]
    pub const fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Extracts the result of a direct invocation, if any.
    pub fn into_value(self) -> Option<R> {
        match self {
            Self::Value(result) => Some(result),
            Self::Function(_) => None,
        }
    }

    /// Extracts the still-collecting chain, if any.
    pub fn into_function(self) -> Option<Curried<T, R>> {
        match self {
            Self::Value(_) => None,
            Self::Function(chain) => Some(chain),
        }
    }
}

impl<T, R> std::fmt::Debug for Dispatched<T, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(_) => formatter.debug_tuple("Value").finish_non_exhaustive(),
            Self::Function(chain) => formatter.debug_tuple("Function").field(chain).finish(),
        }
    }
}

/// Routes `arguments` toward a callable of arity `required`.
///
/// Returns [`Dispatched::Value`] when the collected arguments already cover
/// the arity (extra arguments are passed through exactly as given), and
/// [`Dispatched::Function`] otherwise. The returned chain accepts the
/// missing arguments one at a time, with the final one supplied to
/// [`call`](Curried::call); feeding them in groups via
/// [`supply`](Curried::supply) is equivalent.
///
/// # Panics
///
/// Panics if `required` is zero; a callable with no required arguments has
/// nothing to dispatch on.
///
/// # Examples
///
/// ```
/// use curryfn::apply::{Dispatched, VariadicFunction, auto_curry};
///
/// fn gather(arguments: Vec<i32>) -> Vec<i32> {
///     arguments
/// }
///
/// // All arguments known: invoked directly.
/// let done = auto_curry(vec![1, 2, 3], 3, VariadicFunction::new(gather));
/// assert_eq!(done.into_value(), Some(vec![1, 2, 3]));
///
/// // One missing: a single partial application.
/// let almost = auto_curry(vec![1, 2], 3, VariadicFunction::new(gather));
/// let chain = almost.into_function().unwrap();
/// assert_eq!(chain.call(vec![3]), vec![1, 2, 3]);
/// ```
pub fn auto_curry<T, R>(
    arguments: Vec<T>,
    required: usize,
    function: VariadicFunction<T, R>,
) -> Dispatched<T, R>
where
    T: Clone + 'static,
    R: 'static,
{
    assert!(
        required >= 1,
        "auto_curry requires an arity of at least 1, got {required}"
    );

    let available = arguments.len();
    if available >= required {
        return Dispatched::Value(function.call(arguments));
    }
    if available == required - 1 {
        return Dispatched::Function(curry(bind_known(function, arguments), 0));
    }
    if available == 0 {
        return Dispatched::Function(curry(function, required - 1));
    }
    Dispatched::Function(curry(
        bind_known(function, arguments),
        required - 1 - available,
    ))
}

/// Binds already-collected arguments as a placeholder-free partial
/// application.
fn bind_known<T, R>(function: VariadicFunction<T, R>, arguments: Vec<T>) -> VariadicFunction<T, R>
where
    T: Clone + 'static,
    R: 'static,
{
    let applied: Vec<Slot<T>> = arguments.into_iter().map(Slot::Bound).collect();
    Partial::new(function, applied).into_function()
}
