//! Vouch - constraint-based verification for Rust test code
//!
//! Express "this value should satisfy this property" as a composable,
//! self-describing constraint, then check it. A check that does not hold
//! returns a [`VerificationFailure`]; a check that is not written yet returns
//! a [`PendingSignal`]. Both convert into [`CheckError`] so step functions can
//! propagate either with `?`.
//!
//! # Example
//!
//! ```rust
//! use vouch::prelude::*;
//!
//! fn then_the_greeting_is_polite(greeting: &str) -> CheckResult {
//!     ensure_that(greeting, and(starts_with("Good"), not(contains("!"))))?;
//!     ensure_that_with(&greeting.len(), integer_equal_to(13), "length")?;
//!     Ok(())
//! }
//!
//! assert!(then_the_greeting_is_polite("Good morning.").is_ok());
//!
//! let err = then_the_greeting_is_polite("Good morning!").unwrap_err();
//! assert!(err.is_failure());
//! assert_eq!(
//!     err.to_string(),
//!     "Expected: (string starting with \"Good\" and not (string containing \"!\"))\nbut got:  \"Good morning!\""
//! );
//! ```

pub mod error;
pub mod outcome;
pub mod verify;

#[cfg(feature = "console")]
pub mod console;

// Constraint construction
pub use vouch_core::constraint;
pub use vouch_core::{instance_of, Constraint, Describe, Instance};

// Configuration
pub use vouch_config::{ConfigError, PendingStrategy, VerificationConfig};

pub use error::{CheckError, CheckResult, PendingSignal, VerificationFailure};
pub use outcome::{CheckStatus, Classify, OutcomeSummary};
pub use verify::{
    ensure_condition, ensure_condition_with, ensure_that, ensure_that_with, ensure_value,
    ensure_value_with, todo, todo_with,
};

pub mod prelude {
    pub use super::constraint::{
        a, and, anything, bool_equal_to, both, char_equal_to, close_to, contains, either,
        ends_with, equal_to, float_equal_to, integer_equal_to, is_a, not, or, same_instance_as,
        satisfying, starts_with,
    };
    pub use super::{
        ensure_condition, ensure_condition_with, ensure_that, ensure_that_with, ensure_value,
        ensure_value_with, todo, todo_with,
    };
    pub use super::{CheckError, CheckResult, Constraint, Describe, Instance};
}
