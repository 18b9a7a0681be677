//! The partial-application primitive.
//!
//! A [`Partial`] wraps a callable together with a fixed applied-argument
//! list whose elements are either bound values or placeholders. Calling it
//! merges the pre-bound list with the freshly supplied arguments:
//!
//! 1. walk the applied list left to right, keeping a cursor into the fresh
//!    arguments;
//! 2. a bound slot is emitted unchanged (cloned, so the partial stays
//!    reusable);
//! 3. a placeholder consumes and emits the next unconsumed fresh argument;
//! 4. any fresh arguments left over are appended in order;
//! 5. the merged list invokes the callable.
//!
//! Placeholders are therefore positional holes, independent of how many
//! bound values surround them. Exhausting the fresh arguments while
//! placeholders remain is an [`ArityError`].

use super::error::ArityError;
use super::function::VariadicFunction;
use super::slot::Slot;

/// A callable with some arguments bound up front.
///
/// # Examples
///
/// ```
/// use curryfn::applied;
/// use curryfn::apply::{VariadicFunction, partial};
///
/// fn shape(first: i32, second: i32, third: i32) -> i32 {
///     (first + second) * third
/// }
///
/// let function = VariadicFunction::from_fn3(shape);
///
/// // Bind the first two arguments; the remaining one is appended.
/// let bound = partial(function.clone(), applied![1, 2]);
/// assert_eq!(bound.call(vec![3]), Ok(9));
///
/// // A placeholder is a positional hole.
/// let hole_in_the_middle = partial(function, applied![1, __, 3]);
/// assert_eq!(hole_in_the_middle.call(vec![2]), Ok(9));
/// ```
pub struct Partial<T, R> {
    function: VariadicFunction<T, R>,
    applied: Vec<Slot<T>>,
}

impl<T, R> std::fmt::Debug for Partial<T, R>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Partial")
            .field("applied", &self.applied)
            .finish_non_exhaustive()
    }
}

impl<T, R> Clone for Partial<T, R>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            applied: self.applied.clone(),
        }
    }
}

impl<T, R> Partial<T, R> {
    /// Wraps a callable with a pre-bound applied-argument list.
    pub fn new(function: VariadicFunction<T, R>, applied: Vec<Slot<T>>) -> Self {
        Self { function, applied }
    }

    /// The applied-argument list, in substitution order.
    pub fn applied(&self) -> &[Slot<T>] {
        &self.applied
    }

    /// Merges the fresh arguments into the applied list and invokes the
    /// callable.
    ///
    /// # Errors
    ///
    /// Returns an [`ArityError`] if the applied list contains more
    /// placeholders than there are fresh arguments to fill them. The
    /// callable is not invoked in that case.
    pub fn call(&self, arguments: Vec<T>) -> Result<R, ArityError>
    where
        T: Clone,
    {
        let placeholders = self
            .applied
            .iter()
            .filter(|slot| slot.is_placeholder())
            .count();
        let supplied = arguments.len();

        let mut pending = arguments.into_iter();
        let mut merged = Vec::with_capacity(self.applied.len() + supplied);
        for slot in &self.applied {
            match slot {
                Slot::Bound(value) => merged.push(value.clone()),
                Slot::Placeholder => match pending.next() {
                    Some(argument) => merged.push(argument),
                    None => {
                        return Err(ArityError {
                            placeholders,
                            supplied,
                        });
                    }
                },
            }
        }
        merged.extend(pending);

        Ok(self.function.call(merged))
    }

    /// Converts the partial application back into a plain variadic
    /// function.
    ///
    /// This is the form the curry engine composes with; a placeholder-free
    /// partial can never fail at call time.
    ///
    /// # Panics
    ///
    /// The returned function panics on the same condition `call` reports as
    /// an error: a call supplying fewer fresh arguments than the applied
    /// list has placeholders.
    pub fn into_function(self) -> VariadicFunction<T, R>
    where
        T: Clone + 'static,
        R: 'static,
    {
        VariadicFunction::new(move |arguments| match self.call(arguments) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        })
    }
}

/// Partially applies `function` to an applied-argument list.
///
/// Free-function form of [`Partial::new`]; see [`Partial`] for the
/// substitution rules.
pub fn partial<T, R>(function: VariadicFunction<T, R>, applied: Vec<Slot<T>>) -> Partial<T, R> {
    Partial::new(function, applied)
}
