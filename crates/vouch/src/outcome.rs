//! Classification of check results for a surrounding runner.
//!
//! This module never catches or retries anything. It only turns results a
//! runner has already collected into a status and decides whether a run
//! with those statuses succeeded under a [`VerificationConfig`].

use std::fmt;

use vouch_config::VerificationConfig;

use crate::error::{CheckError, PendingSignal, VerificationFailure};

/// Status of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckStatus {
    /// Every constraint held.
    Passed,
    /// A constraint did not hold.
    Failed,
    /// The check is not implemented yet.
    Pending,
}

impl CheckStatus {
    /// Classifies the result of a check.
    ///
    /// ```
    /// use vouch::prelude::*;
    /// use vouch::CheckStatus;
    ///
    /// assert_eq!(CheckStatus::of(&ensure_condition(true)), CheckStatus::Passed);
    /// assert_eq!(CheckStatus::of(&ensure_condition(false)), CheckStatus::Failed);
    /// assert_eq!(CheckStatus::of(&todo()), CheckStatus::Pending);
    /// ```
    pub fn of<T, E: Classify>(result: &Result<T, E>) -> Self {
        match result {
            Ok(_) => CheckStatus::Passed,
            Err(e) => e.status(),
        }
    }

    /// Returns the lowercase name of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            CheckStatus::Passed => "passed",
            CheckStatus::Failed => "failed",
            CheckStatus::Pending => "pending",
        }
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error type that maps onto a [`CheckStatus`].
pub trait Classify {
    /// Returns the status this error represents.
    fn status(&self) -> CheckStatus;
}

impl Classify for VerificationFailure {
    fn status(&self) -> CheckStatus {
        CheckStatus::Failed
    }
}

impl Classify for PendingSignal {
    fn status(&self) -> CheckStatus {
        CheckStatus::Pending
    }
}

impl Classify for CheckError {
    fn status(&self) -> CheckStatus {
        match self {
            CheckError::Failed(_) => CheckStatus::Failed,
            CheckError::Pending(_) => CheckStatus::Pending,
        }
    }
}

/// Running tally of check statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeSummary {
    passed: usize,
    failed: usize,
    pending: usize,
}

impl OutcomeSummary {
    /// Creates an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one status to the tally.
    pub fn record(&mut self, status: CheckStatus) {
        match status {
            CheckStatus::Passed => self.passed += 1,
            CheckStatus::Failed => self.failed += 1,
            CheckStatus::Pending => self.pending += 1,
        }
    }

    /// Classifies a result and adds it to the tally, returning its status.
    pub fn record_result<T, E: Classify>(&mut self, result: &Result<T, E>) -> CheckStatus {
        let status = CheckStatus::of(result);
        self.record(status);
        status
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Returns the number of recorded checks.
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.pending
    }

    /// Returns true if the recorded checks make a successful run.
    ///
    /// Failures count against the run unless `ignore_failures` is set;
    /// pending checks count against it only under
    /// [`PendingStrategy::Failing`](vouch_config::PendingStrategy::Failing).
    pub fn is_successful(&self, config: &VerificationConfig) -> bool {
        let failures_ok = self.failed == 0 || config.ignore_failures;
        let pending_ok = self.pending == 0 || !config.pending_strategy.fails_run();
        failures_ok && pending_ok
    }
}

impl FromIterator<CheckStatus> for OutcomeSummary {
    fn from_iter<I: IntoIterator<Item = CheckStatus>>(iter: I) -> Self {
        let mut summary = Self::new();
        for status in iter {
            summary.record(status);
        }
        summary
    }
}

impl fmt::Display for OutcomeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} checks: {} passed, {} failed, {} pending",
            self.total(),
            self.passed,
            self.failed,
            self.pending
        )
    }
}
