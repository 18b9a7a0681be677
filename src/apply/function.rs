//! The variadic calling convention shared by the runtime engine.
//!
//! The runtime half of this crate works over callables of any arity without
//! inspecting signatures. [`VariadicFunction`] is that uniform shape: a
//! shared function from an argument list to a result. Fixed-arity functions
//! are lifted into it with the `from_fn1`..`from_fn6` adapters.
//!
//! The function value is reference-counted so that partial applications and
//! curry chains can share it freely; every wrapper derived from it remains
//! independently callable any number of times.

use std::fmt;
use std::rc::Rc;

/// A callable taking an argument list of any length.
///
/// Cloning is cheap (the underlying function is shared), and calling never
/// consumes the value, so the same function can back any number of partial
/// applications and curry chains at once.
///
/// # Examples
///
/// ```
/// use curryfn::apply::VariadicFunction;
///
/// let sum = VariadicFunction::new(|arguments: Vec<i32>| arguments.iter().sum::<i32>());
/// assert_eq!(sum.call(vec![1, 2, 3]), 6);
/// assert_eq!(sum.call(vec![]), 0);
/// ```
pub struct VariadicFunction<T, R> {
    function: Rc<dyn Fn(Vec<T>) -> R>,
}

impl<T, R> Clone for VariadicFunction<T, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<T, R> fmt::Debug for VariadicFunction<T, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("VariadicFunction")
            .finish_non_exhaustive()
    }
}

impl<T, R> VariadicFunction<T, R> {
    /// Wraps a function over argument lists.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(Vec<T>) -> R + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Invokes the function with the given argument list.
    ///
    /// The list is passed through exactly as given; whether its length is
    /// acceptable is the wrapped function's concern.
    #[inline]
    pub fn call(&self, arguments: Vec<T>) -> R {
        (self.function)(arguments)
    }
}

macro_rules! fixed_arity_adapters {
    ($($count:literal => [$($argument:ident: $argument_type:ty),+]),+ $(,)?) => {
        impl<T, R> VariadicFunction<T, R> {
            $(
                paste::paste! {
                    #[doc = concat!(
                        "Lifts a ", $count,
                        "-argument function into the variadic calling convention."
                    )]
                    ///
                    /// # Panics
                    ///
                    #[doc = concat!(
                        "Panics when invoked with an argument list whose length is not exactly ",
                        $count, "."
                    )]
                    ///
                    /// # Examples
                    ///
                    /// ```
                    /// use curryfn::apply::VariadicFunction;
                    ///
                    #[doc = concat!(
                        "let lifted = VariadicFunction::from_fn", $count,
                        "(|", stringify!($($argument),+), "| 0",
                        $(" + ", stringify!($argument),)+ ");"
                    )]
                    #[doc = concat!(
                        "assert_eq!(lifted.call(vec![1; ", $count, "]), ", $count, ");"
                    )]
                    /// ```
                    pub fn [<from_fn $count>]<F>(function: F) -> Self
                    where
                        F: Fn($($argument_type),+) -> R + 'static,
                        T: 'static,
                        R: 'static,
                    {
                        Self::new(move |arguments: Vec<T>| {
                            let supplied = arguments.len();
                            match <[T; $count]>::try_from(arguments) {
                                Ok([$($argument),+]) => function($($argument),+),
                                Err(_) => panic!(
                                    "expected exactly {} arguments, got {supplied}",
                                    $count
                                ),
                            }
                        })
                    }
                }
            )+
        }
    };
}

fixed_arity_adapters! {
    1 => [first: T],
    2 => [first: T, second: T],
    3 => [first: T, second: T, third: T],
    4 => [first: T, second: T, third: T, fourth: T],
    5 => [first: T, second: T, third: T, fourth: T, fifth: T],
    6 => [first: T, second: T, third: T, fourth: T, fifth: T, sixth: T],
}
