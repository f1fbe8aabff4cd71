//! Vouch Core - self-describing constraints for verification
//!
//! This crate provides the building blocks checked by the `vouch`
//! verification entry points:
//! - The [`Constraint`] and [`Describe`] traits
//! - Primitive constraints: value, integral, floating point, character,
//!   boolean, identity, type-membership and string predicates
//! - Logical combinators: [`and`], [`or`], [`not`] and their aliases
//!
//! Constraints are immutable once built and are `Send + Sync`, so one value
//! can be shared by any number of concurrent checks.

pub mod constraint;

pub use constraint::{
    a, and, anything, bool_equal_to, both, char_equal_to, close_to, contains, either, ends_with,
    equal_to, float_equal_to, integer_equal_to, is_a, not, or, same_instance_as, satisfying,
    starts_with, Constraint, Describe, Instance,
};
