//! The runtime curry engine.
//!
//! [`curry`] turns any variadic callable into a chain that collects
//! arguments one at a time: `count` pending unary applications followed by
//! one final call that invokes the callable. No signature inspection is
//! involved; the caller states how many unary steps the chain should have.
//!
//! Each unary step binds its argument as the new first argument of the
//! wrapped callable (a single-slot, placeholder-free partial application),
//! so the order of application is the order of the final argument list.
//! Chains are values: applying never mutates, every stage can be reused,
//! and distinct continuations of the same stage are fully independent.

use super::dispatch::Dispatched;
use super::function::VariadicFunction;
use super::partial::Partial;
use super::slot::Slot;

/// A callable in the middle of argument collection.
///
/// Produced by [`curry`] and by
/// [`auto_curry`](crate::apply::auto_curry). A chain with `remaining > 0`
/// accepts unary applications via [`apply`](Self::apply); once saturated it
/// is invoked with [`call`](Self::call), which passes any further arguments
/// through to the underlying callable.
///
/// # Examples
///
/// ```
/// use curryfn::apply::{VariadicFunction, curry};
///
/// fn describe(label: &'static str, count: &'static str, unit: &'static str) -> String {
///     format!("{label}: {count} {unit}")
/// }
///
/// let chain = curry(VariadicFunction::from_fn3(describe), 2);
/// let stage = chain.apply("apples").apply("3");
/// assert_eq!(stage.call(vec!["kg"]), "apples: 3 kg");
///
/// // Earlier stages are unaffected and reusable.
/// let other = chain.apply("pears").apply("5");
/// assert_eq!(other.call(vec!["boxes"]), "pears: 5 boxes");
/// ```
pub struct Curried<T, R> {
    function: VariadicFunction<T, R>,
    remaining: usize,
}

impl<T, R> Clone for Curried<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T, R> std::fmt::Debug for Curried<T, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<T, R> Curried<T, R> {
    /// How many unary applications the chain still expects.
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every unary step has been applied.
    #[inline]
    pub const fn is_saturated(&self) -> bool {
        self.remaining == 0
    }

    /// Unwraps the underlying callable.
    ///
    /// For a chain built with `curry(function, 0)` this is `function`
    /// unchanged.
    pub fn into_function(self) -> VariadicFunction<T, R> {
        self.function
    }

    /// Applies one argument, producing the next stage of the chain.
    ///
    /// The argument is bound as the new first argument of the underlying
    /// callable. The current stage is untouched and can be applied again
    /// with a different argument.
    ///
    /// # Panics
    ///
    /// Panics if the chain is already saturated; a saturated chain is
    /// invoked with [`call`](Self::call).
    pub fn apply(&self, argument: T) -> Self
    where
        T: Clone + 'static,
        R: 'static,
    {
        assert!(
            self.remaining > 0,
            "curried function is already saturated; use `call` to invoke it"
        );
        let bound =
            Partial::new(self.function.clone(), vec![Slot::Bound(argument)]).into_function();
        Self {
            function: bound,
            remaining: self.remaining - 1,
        }
    }

    /// Invokes the underlying callable with the collected arguments
    /// followed by `arguments`.
    ///
    /// # Panics
    ///
    /// Panics if the chain still expects unary applications.
    pub fn call(&self, arguments: Vec<T>) -> R {
        assert!(
            self.is_saturated(),
            "curried function still expects {} unary application(s) before it can be invoked",
            self.remaining
        );
        self.function.call(arguments)
    }

    /// Feeds a group of arguments through the chain.
    ///
    /// Arguments are applied one at a time while unary steps remain; if the
    /// group runs out first, the resulting stage is returned as a function.
    /// If saturation is reached with arguments left over, those arguments
    /// make the final call and the result is returned as a value. A group
    /// that ends exactly at saturation returns the saturated stage; like
    /// any other stage, it still expects one final call (which may carry no
    /// arguments at all).
    ///
    /// # Examples
    ///
    /// ```
    /// use curryfn::apply::{Dispatched, VariadicFunction, curry};
    ///
    /// let sum = VariadicFunction::new(|arguments: Vec<i32>| arguments.iter().sum::<i32>());
    /// let chain = curry(sum, 2);
    ///
    /// match chain.supply(vec![1, 2, 3]) {
    ///     Dispatched::Value(total) => assert_eq!(total, 6),
    ///     Dispatched::Function(_) => unreachable!(),
    /// }
    /// ```
    pub fn supply(&self, arguments: Vec<T>) -> Dispatched<T, R>
    where
        T: Clone + 'static,
        R: 'static,
    {
        let mut current = self.clone();
        let mut pending = arguments.into_iter();
        loop {
            if current.is_saturated() {
                let rest: Vec<T> = pending.collect();
                if rest.is_empty() {
                    return Dispatched::Function(current);
                }
                return Dispatched::Value(current.call(rest));
            }
            match pending.next() {
                Some(argument) => current = current.apply(argument),
                None => return Dispatched::Function(current),
            }
        }
    }
}

/// Curries `function` into `count` unary applications plus one final call.
///
/// With `count == 0` the chain is the callable itself: no unary step, the
/// first [`call`](Curried::call) invokes it directly. Applying the chain
/// `count` times with one argument each and then calling it invokes
/// `function` with all arguments in the order supplied.
///
/// # Examples
///
/// ```
/// use curryfn::apply::{VariadicFunction, curry};
///
/// let gather = VariadicFunction::new(|arguments: Vec<i32>| arguments);
/// let chain = curry(gather, 2);
///
/// assert_eq!(chain.apply(1).apply(2).call(vec![3]), vec![1, 2, 3]);
/// ```
pub fn curry<T, R>(function: VariadicFunction<T, R>, count: usize) -> Curried<T, R> {
    Curried {
        function,
        remaining: count,
    }
}
