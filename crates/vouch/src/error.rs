//! Outcome types raised by verification.
//!
//! A failed check and an unfinished check are different outcomes: the first
//! says the code under test is wrong, the second says the test is. They are
//! kept as distinct types so a runner can report them separately.

use thiserror::Error;

/// A constraint did not hold for its subject.
///
/// Only produced by the `ensure_*` entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VerificationFailure {
    message: String,
    expected: Option<String>,
    actual: Option<String>,
    label: Option<String>,
}

impl VerificationFailure {
    pub(crate) fn new(
        message: String,
        expected: Option<String>,
        actual: Option<String>,
        label: Option<String>,
    ) -> Self {
        Self {
            message,
            expected,
            actual,
            label,
        }
    }

    /// Returns the full failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the description of the constraint that failed, if any.
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// Returns the rendered subject, if any.
    pub fn actual(&self) -> Option<&str> {
        self.actual.as_deref()
    }

    /// Returns the caller-supplied context label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// A check that has intentionally not been written yet.
///
/// Only produced by [`todo`](crate::todo) and [`todo_with`](crate::todo_with).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct PendingSignal {
    message: String,
}

impl PendingSignal {
    pub(crate) fn new(message: String) -> Self {
        Self { message }
    }

    /// Returns the description of the missing behaviour.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Either outcome a check can raise.
///
/// Steps that both verify and mark pending work return [`CheckResult`]
/// and propagate with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    /// A constraint did not hold.
    #[error(transparent)]
    Failed(#[from] VerificationFailure),

    /// The check is not implemented yet.
    #[error(transparent)]
    Pending(#[from] PendingSignal),
}

impl CheckError {
    /// Returns true for the pending outcome.
    pub fn is_pending(&self) -> bool {
        matches!(self, CheckError::Pending(_))
    }

    /// Returns true for the failed outcome.
    pub fn is_failure(&self) -> bool {
        matches!(self, CheckError::Failed(_))
    }

    /// Returns the message of either outcome.
    pub fn message(&self) -> &str {
        match self {
            CheckError::Failed(failure) => failure.message(),
            CheckError::Pending(pending) => pending.message(),
        }
    }
}

/// Result type alias for checks.
pub type CheckResult<T = ()> = std::result::Result<T, CheckError>;
