//! Argument slots for partial application.
//!
//! The original formulation of positional partial application relies on a
//! process-wide sentinel value compared by identity. In a typed setting the
//! sentinel becomes a first-class case of the argument type instead: a
//! [`Slot`] is either a bound value or the placeholder, and "is this the
//! placeholder?" is variant discrimination rather than identity comparison.
//! This means any domain value, including `None`, `0`, or an empty string,
//! can be bound without ever being mistaken for a hole.

/// One element of an applied-argument list: a concrete value or a hole.
///
/// Holes are filled positionally from the arguments supplied later, in
/// order, independent of how many bound values surround them.
///
/// # Examples
///
/// ```
/// use curryfn::apply::{Slot, placeholder};
///
/// let slots = vec![Slot::Bound(1), placeholder(), Slot::Bound(3)];
/// assert!(slots[1].is_placeholder());
/// assert_eq!(slots[0], Slot::Bound(1));
/// ```
///
/// Ordinary values are never confused with the placeholder, even the ones
/// that play a "nothing" role in the domain:
///
/// ```
/// use curryfn::apply::Slot;
///
/// let bound_nothing: Slot<Option<i32>> = Slot::Bound(None);
/// assert!(!bound_nothing.is_placeholder());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot<T> {
    /// A concrete argument, emitted unchanged during substitution.
    Bound(T),
    /// A positional hole, filled by the next unconsumed argument.
    Placeholder,
}

impl<T> Slot<T> {
    /// Returns `true` if this slot is the placeholder.
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }

    /// Returns `true` if this slot holds a bound value.
    #[inline]
    pub const fn is_bound(&self) -> bool {
        matches!(self, Self::Bound(_))
    }

    /// Extracts the bound value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use curryfn::apply::Slot;
    ///
    /// assert_eq!(Slot::Bound("value").into_bound(), Some("value"));
    /// assert_eq!(Slot::<&str>::Placeholder.into_bound(), None);
    /// ```
    #[inline]
    pub fn into_bound(self) -> Option<T> {
        match self {
            Self::Bound(value) => Some(value),
            Self::Placeholder => None,
        }
    }
}

impl<T> From<T> for Slot<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Bound(value)
    }
}

/// Returns the placeholder slot.
///
/// Every call produces the same distinguished case, so two placeholders are
/// always equal to each other and never equal to any bound value.
///
/// # Examples
///
/// ```
/// use curryfn::apply::placeholder;
///
/// assert_eq!(placeholder::<i32>(), placeholder::<i32>());
/// ```
#[inline]
#[must_use]
pub const fn placeholder<T>() -> Slot<T> {
    Slot::Placeholder
}

static_assertions::assert_impl_all!(Slot<i32>: Clone, Copy, PartialEq, Eq, core::fmt::Debug);
static_assertions::assert_impl_all!(Slot<String>: Clone, PartialEq, Eq);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_always_the_same_case() {
        assert_eq!(placeholder::<i32>(), placeholder::<i32>());
        assert_eq!(placeholder::<String>(), Slot::Placeholder);
    }

    #[test]
    fn test_placeholder_never_equals_a_bound_value() {
        assert_ne!(placeholder(), Slot::Bound(0));
        assert_ne!(placeholder(), Slot::Bound(Option::<i32>::None));
    }

    #[test]
    fn test_into_bound() {
        assert_eq!(Slot::Bound(7).into_bound(), Some(7));
        assert_eq!(Slot::<i32>::Placeholder.into_bound(), None);
    }

    #[test]
    fn test_from_value() {
        let slot: Slot<i32> = 42.into();
        assert!(slot.is_bound());
        assert_eq!(slot, Slot::Bound(42));
    }
}
