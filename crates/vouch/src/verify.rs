//! Verification entry points.
//!
//! Every constraint check, whatever the subject's type, goes through one
//! private routine, which is the only place a mismatch message is built.
//! The public entry points only normalise how the subject is passed in.

use std::fmt::Debug;

use tracing::{debug, trace};
use vouch_core::Constraint;

use crate::error::{PendingSignal, VerificationFailure};

/// Message carried by [`todo`].
pub const DEFAULT_PENDING_MESSAGE: &str = "TODO";

/// Message of a failed [`ensure_condition`].
pub const DEFAULT_CONDITION_MESSAGE: &str = "Expected condition was not met";

const CONDITION_SUFFIX: &str = "expected condition was not met";

/// Checks `subject` against `constraint`.
///
/// # Errors
///
/// Returns a [`VerificationFailure`] carrying the constraint's description
/// and the subject's `Debug` rendering when the constraint does not match.
///
/// # Example
///
/// ```
/// use vouch::prelude::*;
///
/// assert!(ensure_that("Given a stack", starts_with("Given")).is_ok());
///
/// let failure = ensure_that(&3, integer_equal_to(5)).unwrap_err();
/// assert_eq!(failure.message(), "Expected: integer type equal to 5\nbut got:  3");
/// ```
pub fn ensure_that<T, C>(subject: &T, constraint: C) -> Result<(), VerificationFailure>
where
    T: Debug + ?Sized,
    C: Constraint<T>,
{
    check(subject, &constraint, None)
}

/// Checks `subject` against `constraint`, prefixing any failure message with
/// `[label] `.
///
/// ```
/// use vouch::prelude::*;
///
/// let failure = ensure_that_with(&3, integer_equal_to(5), "count").unwrap_err();
/// assert_eq!(
///     failure.message(),
///     "[count] Expected: integer type equal to 5\nbut got:  3"
/// );
/// assert_eq!(failure.label(), Some("count"));
/// ```
pub fn ensure_that_with<T, C>(
    subject: &T,
    constraint: C,
    label: &str,
) -> Result<(), VerificationFailure>
where
    T: Debug + ?Sized,
    C: Constraint<T>,
{
    check(subject, &constraint, Some(label))
}

/// Checks an owned subject, typically a primitive or a temporary.
pub fn ensure_value<T, C>(subject: T, constraint: C) -> Result<(), VerificationFailure>
where
    T: Debug,
    C: Constraint<T>,
{
    check(&subject, &constraint, None)
}

/// Checks an owned subject with a context label.
pub fn ensure_value_with<T, C>(
    subject: T,
    constraint: C,
    label: &str,
) -> Result<(), VerificationFailure>
where
    T: Debug,
    C: Constraint<T>,
{
    check(&subject, &constraint, Some(label))
}

/// Checks a plain condition.
///
/// # Errors
///
/// Returns a failure with message [`DEFAULT_CONDITION_MESSAGE`] when
/// `condition` is false.
pub fn ensure_condition(condition: bool) -> Result<(), VerificationFailure> {
    if condition {
        return Ok(());
    }
    debug!("condition not met");
    Err(VerificationFailure::new(
        DEFAULT_CONDITION_MESSAGE.to_string(),
        None,
        None,
        None,
    ))
}

/// Checks a plain condition, naming it in the failure message.
///
/// ```
/// use vouch::prelude::*;
///
/// let failure = ensure_condition_with(false, "stack is empty").unwrap_err();
/// assert_eq!(failure.message(), "stack is empty: expected condition was not met");
/// ```
pub fn ensure_condition_with(condition: bool, message: &str) -> Result<(), VerificationFailure> {
    if condition {
        return Ok(());
    }
    debug!(label = message, "condition not met");
    Err(VerificationFailure::new(
        format!("{message}: {CONDITION_SUFFIX}"),
        None,
        None,
        Some(message.to_string()),
    ))
}

/// Marks a check as not implemented yet.
///
/// Always returns a [`PendingSignal`] with message
/// [`DEFAULT_PENDING_MESSAGE`]; no constraint is evaluated.
///
/// ```
/// use vouch::prelude::*;
///
/// fn then_the_stack_is_sorted() -> CheckResult {
///     todo()?;
///     Ok(())
/// }
///
/// assert!(then_the_stack_is_sorted().unwrap_err().is_pending());
/// ```
pub fn todo() -> Result<(), PendingSignal> {
    todo_with(DEFAULT_PENDING_MESSAGE)
}

/// Marks a check as not implemented yet, describing what is missing.
pub fn todo_with(message: &str) -> Result<(), PendingSignal> {
    debug!(pending = message, "check pending");
    Err(PendingSignal::new(message.to_string()))
}

fn check<T, C>(subject: &T, constraint: &C, label: Option<&str>) -> Result<(), VerificationFailure>
where
    T: Debug + ?Sized,
    C: Constraint<T> + ?Sized,
{
    if constraint.matches(subject) {
        trace!(label, "check passed");
        return Ok(());
    }

    let expected = constraint.describe();
    let actual = format!("{:?}", subject);
    debug!(label, expected = %expected, actual = %actual, "check failed");

    let message = match label {
        Some(label) => format!("[{label}] Expected: {expected}\nbut got:  {actual}"),
        None => format!("Expected: {expected}\nbut got:  {actual}"),
    };
    Err(VerificationFailure::new(
        message,
        Some(expected),
        Some(actual),
        label.map(str::to_string),
    ))
}

#[cfg(test)]
mod tests {
    use vouch_core::constraint::*;

    use super::*;

    #[test]
    fn test_passing_check_is_ok() {
        assert!(ensure_that(&5_i64, integer_equal_to(5)).is_ok());
        assert!(ensure_value('q', char_equal_to('q')).is_ok());
        assert!(ensure_condition(true).is_ok());
        assert!(ensure_condition_with(true, "ignored").is_ok());
    }

    #[test]
    fn test_failure_records_parts() {
        let failure = ensure_that_with(&3, integer_equal_to(5), "count").unwrap_err();
        assert_eq!(failure.expected(), Some("integer type equal to 5"));
        assert_eq!(failure.actual(), Some("3"));
        assert_eq!(failure.label(), Some("count"));
    }

    #[test]
    fn test_expected_is_constraint_description() {
        let constraint = or(starts_with("a"), not(contains("b")));
        let failure = ensure_that("bab", &constraint).unwrap_err();
        assert_eq!(failure.expected(), Some(constraint.describe().as_str()));
    }

    #[test]
    fn test_typed_entry_points_share_message_format() {
        let by_ref = ensure_that(&2.5_f64, float_equal_to(1.0)).unwrap_err();
        let by_value = ensure_value(2.5_f64, float_equal_to(1.0)).unwrap_err();
        assert_eq!(by_ref, by_value);
        assert_eq!(
            by_value.message(),
            "Expected: floating point number equal to 1.0\nbut got:  2.5"
        );

        let by_ref = ensure_that_with(&true, bool_equal_to(false), "flag").unwrap_err();
        let by_value = ensure_value_with(true, bool_equal_to(false), "flag").unwrap_err();
        assert_eq!(by_ref, by_value);
        assert_eq!(by_value.message(), "[flag] Expected: boolean false\nbut got:  true");
    }

    #[test]
    fn test_char_subject_rendering() {
        let failure = ensure_value('y', char_equal_to('x')).unwrap_err();
        assert_eq!(
            failure.message(),
            "Expected: character equal to 'x'\nbut got:  'y'"
        );
    }

    #[test]
    fn test_condition_messages() {
        let failure = ensure_condition(false).unwrap_err();
        assert_eq!(failure.message(), "Expected condition was not met");
        assert_eq!(failure.expected(), None);
        assert_eq!(failure.actual(), None);
        assert_eq!(failure.label(), None);

        let failure = ensure_condition_with(false, "queue drained").unwrap_err();
        assert_eq!(failure.message(), "queue drained: expected condition was not met");
        assert_eq!(failure.label(), Some("queue drained"));
    }

    #[test]
    fn test_todo_messages() {
        assert_eq!(todo().unwrap_err().message(), "TODO");
        assert_eq!(todo_with("write me").unwrap_err().message(), "write me");
    }

    #[test]
    fn test_display_is_message() {
        let failure = ensure_that(&"x", equal_to("y")).unwrap_err();
        assert_eq!(failure.to_string(), failure.message());
        assert_eq!(
            failure.message(),
            "Expected: equal to <\"y\">\nbut got:  \"x\""
        );
    }
}
