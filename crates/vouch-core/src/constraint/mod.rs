//! Self-describing constraints over typed subjects.
//!
//! A constraint answers two questions: does a subject satisfy it, and how
//! should it be described in a failure message. The subject type is part of
//! the constraint's type, so applying a text constraint to a number is
//! rejected by the compiler rather than at check time.
//!
//! # Example
//!
//! ```
//! use vouch_core::constraint::{and, not, starts_with, ends_with, Constraint, Describe};
//!
//! let greeting = and(starts_with("Hello"), not(ends_with("!")));
//!
//! assert!(greeting.matches("Hello there"));
//! assert!(!greeting.matches("Hello!"));
//! assert_eq!(
//!     greeting.describe(),
//!     r#"(string starting with "Hello" and not (string ending with "!"))"#
//! );
//! ```

mod equal;
mod identity;
mod instance;
mod logical;
mod text;


use std::sync::Arc;

pub use equal::{
    bool_equal_to, char_equal_to, close_to, equal_to, float_equal_to, integer_equal_to,
    BoolEqualTo, CharEqualTo, EqualTo, FloatEqualTo, IntegerEqualTo,
};
pub use identity::{same_instance_as, SameInstanceAs};
pub use instance::{a, is_a, Instance, IsA};
pub use logical::{and, both, either, not, or, And, Not, Or};
pub use text::{contains, ends_with, starts_with, Contains, EndsWith, StartsWith};

/// A value that can render a stable, human-readable description of itself.
///
/// Descriptions are used verbatim as the "expected" half of a failure
/// message, so they must be deterministic for identical construction
/// parameters.
pub trait Describe {
    /// Returns the description of this constraint.
    fn describe(&self) -> String;
}

/// A predicate over subjects of type `T`.
///
/// Implementations must be pure: `matches` may only depend on the subject
/// and the parameters captured at construction.
pub trait Constraint<T: ?Sized>: Describe + Send + Sync {
    /// Returns true if the subject satisfies this constraint.
    fn matches(&self, subject: &T) -> bool;
}

impl<C: Describe + ?Sized> Describe for &C {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, C: Constraint<T> + ?Sized> Constraint<T> for &C {
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        (**self).matches(subject)
    }
}

impl<C: Describe + ?Sized> Describe for Box<C> {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, C: Constraint<T> + ?Sized> Constraint<T> for Box<C> {
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        (**self).matches(subject)
    }
}

impl<C: Describe + ?Sized> Describe for Arc<C> {
    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, C: Constraint<T> + ?Sized> Constraint<T> for Arc<C> {
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        (**self).matches(subject)
    }
}

/// Creates a constraint that matches every subject.
///
/// ```
/// use vouch_core::constraint::{anything, Constraint, Describe};
///
/// assert!(anything().matches(&42));
/// assert!(anything().matches("text"));
/// assert_eq!(anything().describe(), "anything");
/// ```
pub fn anything() -> Anything {
    Anything
}

/// A constraint that matches every subject.
///
/// Created by [`anything()`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anything;

impl Describe for Anything {
    fn describe(&self) -> String {
        "anything".to_string()
    }
}

impl<T: ?Sized> Constraint<T> for Anything {
    #[inline]
    fn matches(&self, _subject: &T) -> bool {
        true
    }
}

/// Creates a constraint from a predicate and the text that describes it.
///
/// Use this for checks the built-in catalog does not cover. The predicate
/// must be pure for the same reasons every other constraint is.
///
/// ```
/// use vouch_core::constraint::{satisfying, Constraint, Describe};
///
/// let even = satisfying("an even number", |n: &i64| n % 2 == 0);
///
/// assert!(even.matches(&4));
/// assert!(!even.matches(&7));
/// assert_eq!(even.describe(), "an even number");
/// ```
pub fn satisfying<T, F>(description: impl Into<String>, predicate: F) -> Satisfying<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    Satisfying {
        description: description.into(),
        predicate,
    }
}

/// A constraint wrapping a predicate closure.
///
/// Created by [`satisfying()`].
pub struct Satisfying<F> {
    description: String,
    predicate: F,
}

impl<F> Describe for Satisfying<F> {
    fn describe(&self) -> String {
        self.description.clone()
    }
}

impl<T, F> Constraint<T> for Satisfying<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn matches(&self, subject: &T) -> bool {
        (self.predicate)(subject)
    }
}

impl<F> std::fmt::Debug for Satisfying<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Satisfying")
            .field("description", &self.description)
            .field("predicate", &"<fn>")
            .finish()
    }
}
