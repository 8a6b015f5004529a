use std::fmt;

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

/// The kinds of command a user can issue against a requirement.
///
/// The kind alone determines whether a transition is legal for a given
/// state; the parameters a kind requires are validated when the
/// [`Command`] is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Accept a submitted requirement into the backlog.
    Accept,
    /// Reject a requirement.
    Reject,
    /// Revise a rejected requirement and resubmit it.
    Revise,
    /// Assign a requirement to a developer.
    Assign,
    /// Mark an in-progress requirement as completed.
    Complete,
    /// Record a passing verification.
    Pass,
    /// Record a failing verification.
    Fail,
}

impl CommandKind {
    /// Returns the display name of the command kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Accept => "Accept",
            Self::Reject => "Reject",
            Self::Revise => "Revise",
            Self::Assign => "Assign",
            Self::Complete => "Complete",
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The possible reasons for rejecting a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rejection {
    /// Duplicates an existing requirement.
    Duplicate,
    /// Not feasible to implement.
    Infeasible,
    /// Too large to track as a single requirement.
    TooLarge,
    /// Outside the scope of the project.
    OutOfScope,
    /// Not appropriate for the tracker.
    Inappropriate,
}

impl Rejection {
    /// Returns the user-facing name of the rejection reason.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Duplicate => "Duplicate",
            Self::Infeasible => "Infeasible",
            Self::TooLarge => "Too large",
            Self::OutOfScope => "Out of Scope",
            Self::Inappropriate => "Inappropriate",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A validated scheduling priority, in the range 1 (highest) to 3 (lowest).
///
/// A requirement with no priority assigned reports the raw value 0; that
/// value is not representable here, so an accepted requirement always
/// carries a priority in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Priority(u8);

impl Priority {
    /// Creates a priority from a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCommand::Priority`] if the value is outside 1..=3.
    pub fn new(value: u8) -> Result<Self, InvalidCommand> {
        if (1..=3).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidCommand::Priority(value))
        }
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error raised when a command is constructed with a missing or out-of-range
/// parameter.
///
/// A command that would fail any of these checks never exists: validation
/// happens once, at construction, and never again at the point of
/// application.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCommand {
    /// Priority outside the accepted range.
    #[error("invalid priority {0}: must be between 1 and 3")]
    Priority(u8),

    /// Accept issued without an estimate.
    #[error("an accept command requires a non-empty estimate")]
    EmptyEstimate,

    /// Assign issued without a developer id.
    #[error("an assign command requires a non-empty developer id")]
    EmptyDeveloper,

    /// Revise issued without a replacement summary.
    #[error("a revise command requires a non-empty summary")]
    EmptySummary,

    /// Revise issued without a replacement acceptance test id.
    #[error("a revise command requires a non-empty acceptance test id")]
    EmptyAcceptanceTest,
}

/// A validated description of one user-intended lifecycle transition.
///
/// A command is constructed once and never mutated. Parameters are carried
/// by the variant of the kind that needs them, so a command that passed
/// construction cannot later be observed in an invalid configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Accept a submitted requirement, recording its priority and estimate.
    Accept {
        /// Scheduling priority assigned on acceptance.
        priority: Priority,
        /// Effort estimate recorded on acceptance.
        estimate: NonEmptyString,
    },
    /// Reject a requirement, recording the reason.
    Reject {
        /// Why the requirement was rejected.
        reason: Rejection,
    },
    /// Revise a rejected requirement with replacement text and resubmit it.
    Revise {
        /// Replacement summary.
        summary: NonEmptyString,
        /// Replacement acceptance test id.
        acceptance_test_id: NonEmptyString,
    },
    /// Assign a requirement to a developer.
    Assign {
        /// Identifier of the developer taking the work.
        developer: NonEmptyString,
    },
    /// Mark an in-progress requirement as completed.
    Complete,
    /// Record a passing verification of a completed requirement.
    Pass,
    /// Record a failing verification of a completed requirement.
    Fail,
}

impl Command {
    /// Builds an accept command.
    ///
    /// # Errors
    ///
    /// Returns an error if `priority` is outside 1..=3 or `estimate` is
    /// empty.
    pub fn accept(priority: u8, estimate: &str) -> Result<Self, InvalidCommand> {
        let priority = Priority::new(priority)?;
        let estimate = NonEmptyString::new(estimate.to_string())
            .map_err(|_| InvalidCommand::EmptyEstimate)?;
        Ok(Self::Accept { priority, estimate })
    }

    /// Builds a reject command carrying the given reason.
    #[must_use]
    pub const fn reject(reason: Rejection) -> Self {
        Self::Reject { reason }
    }

    /// Builds a revise command.
    ///
    /// # Errors
    ///
    /// Returns an error if either the summary or the acceptance test id is
    /// empty.
    pub fn revise(summary: &str, acceptance_test_id: &str) -> Result<Self, InvalidCommand> {
        let summary =
            NonEmptyString::new(summary.to_string()).map_err(|_| InvalidCommand::EmptySummary)?;
        let acceptance_test_id = NonEmptyString::new(acceptance_test_id.to_string())
            .map_err(|_| InvalidCommand::EmptyAcceptanceTest)?;
        Ok(Self::Revise {
            summary,
            acceptance_test_id,
        })
    }

    /// Builds an assign command.
    ///
    /// # Errors
    ///
    /// Returns an error if the developer id is empty.
    pub fn assign(developer: &str) -> Result<Self, InvalidCommand> {
        let developer = NonEmptyString::new(developer.to_string())
            .map_err(|_| InvalidCommand::EmptyDeveloper)?;
        Ok(Self::Assign { developer })
    }

    /// Builds a complete command.
    #[must_use]
    pub const fn complete() -> Self {
        Self::Complete
    }

    /// Builds a pass command.
    #[must_use]
    pub const fn pass() -> Self {
        Self::Pass
    }

    /// Builds a fail command.
    #[must_use]
    pub const fn fail() -> Self {
        Self::Fail
    }

    /// The kind of this command.
    #[must_use]
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Accept { .. } => CommandKind::Accept,
            Self::Reject { .. } => CommandKind::Reject,
            Self::Revise { .. } => CommandKind::Revise,
            Self::Assign { .. } => CommandKind::Assign,
            Self::Complete => CommandKind::Complete,
            Self::Pass => CommandKind::Pass,
            Self::Fail => CommandKind::Fail,
        }
    }
}
