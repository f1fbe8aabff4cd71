//! Identity constraint: matches one particular instance, not an equal value.

use std::fmt::Debug;

use super::{Constraint, Describe};

/// Creates a constraint that matches only the instance `expected` refers to.
///
/// Two references match when they point at the same place in memory, even if
/// another instance compares equal. Zero-sized values have no distinct
/// addresses and should not be checked this way.
///
/// # Example
///
/// ```
/// use vouch_core::constraint::{same_instance_as, Constraint};
///
/// let original = vec![1, 2, 3];
/// let copy = original.clone();
///
/// let same = same_instance_as(&original);
/// assert!(same.matches(&original));
/// assert!(!same.matches(&copy));
/// ```
pub fn same_instance_as<T: ?Sized>(expected: &T) -> SameInstanceAs<'_, T> {
    SameInstanceAs { expected }
}

/// A constraint that matches by reference identity.
///
/// Created by [`same_instance_as()`].
#[derive(Debug)]
pub struct SameInstanceAs<'a, T: ?Sized> {
    expected: &'a T,
}

impl<T: ?Sized> Clone for SameInstanceAs<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for SameInstanceAs<'_, T> {}

impl<T: Debug + ?Sized> Describe for SameInstanceAs<'_, T> {
    fn describe(&self) -> String {
        format!("same instance as <{:?}>", self.expected)
    }
}

impl<T: Debug + Sync + ?Sized> Constraint<T> for SameInstanceAs<'_, T> {
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        std::ptr::eq(subject, self.expected)
    }
}
