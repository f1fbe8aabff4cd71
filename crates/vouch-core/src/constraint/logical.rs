//! Logical combinators over constraints.
//!
//! Combinators own their children and delegate to them, so a combinator of
//! combinators behaves exactly like a combinator of primitives.

use super::{Constraint, Describe};

/// Creates a constraint that matches when both `first` and `second` match.
///
/// `second` is not evaluated when `first` fails.
///
/// ```
/// use vouch_core::constraint::{and, anything, not, Constraint, Describe};
///
/// let never = and(anything(), not(anything()));
/// assert!(!never.matches(&1));
/// assert_eq!(never.describe(), "(anything and not (anything))");
/// ```
pub fn and<A, B>(first: A, second: B) -> And<A, B> {
    And { first, second }
}

/// Alias for [`and()`].
pub fn both<A, B>(first: A, second: B) -> And<A, B> {
    and(first, second)
}

/// Creates a constraint that matches when either `first` or `second` matches.
///
/// `second` is not evaluated when `first` succeeds.
pub fn or<A, B>(first: A, second: B) -> Or<A, B> {
    Or { first, second }
}

/// Alias for [`or()`].
pub fn either<A, B>(first: A, second: B) -> Or<A, B> {
    or(first, second)
}

/// Creates a constraint that matches when `inner` does not.
pub fn not<C>(inner: C) -> Not<C> {
    Not { inner }
}

/// A constraint that combines two constraints with AND semantics.
///
/// Created by [`and()`] or [`both()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct And<A, B> {
    first: A,
    second: B,
}

impl<A: Describe, B: Describe> Describe for And<A, B> {
    fn describe(&self) -> String {
        format!("({} and {})", self.first.describe(), self.second.describe())
    }
}

impl<T, A, B> Constraint<T> for And<A, B>
where
    T: ?Sized,
    A: Constraint<T>,
    B: Constraint<T>,
{
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        self.first.matches(subject) && self.second.matches(subject)
    }
}

/// A constraint that combines two constraints with OR semantics.
///
/// Created by [`or()`] or [`either()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Or<A, B> {
    first: A,
    second: B,
}

impl<A: Describe, B: Describe> Describe for Or<A, B> {
    fn describe(&self) -> String {
        format!("({} or {})", self.first.describe(), self.second.describe())
    }
}

impl<T, A, B> Constraint<T> for Or<A, B>
where
    T: ?Sized,
    A: Constraint<T>,
    B: Constraint<T>,
{
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        self.first.matches(subject) || self.second.matches(subject)
    }
}

/// A constraint that inverts another.
///
/// Created by [`not()`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Not<C> {
    inner: C,
}

impl<C: Describe> Describe for Not<C> {
    fn describe(&self) -> String {
        format!("not ({})", self.inner.describe())
    }
}

impl<T, C> Constraint<T> for Not<C>
where
    T: ?Sized,
    C: Constraint<T>,
{
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        !self.inner.matches(subject)
    }
}
