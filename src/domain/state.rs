//! The requirement lifecycle state machine.
//!
//! The whole transition table lives in one `match` so that every legal
//! (state, command) pair is explicit and every illegal pair falls through to
//! a single error arm. State transition rules mutate the owning
//! [`Requirement`]'s attributes and yield the successor state; the entity
//! itself never encodes transition logic.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    command::{Command, CommandKind},
    requirement::Requirement,
};

/// The lifecycle state of a requirement.
///
/// `Submitted` is the sole initial state. `Rejected` can only be re-exited
/// via a revise; every other state loops back through `Working` via assign,
/// complete, pass and fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    /// Newly submitted, awaiting triage.
    Submitted,
    /// Accepted into the backlog with a priority and estimate.
    Accepted,
    /// Assigned to a developer and in progress.
    Working,
    /// Implementation finished, awaiting verification.
    Completed,
    /// Verification passed.
    Verified,
    /// Rejected with a recorded reason.
    Rejected,
}

impl State {
    /// Returns the display name of the state.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Accepted => "Accepted",
            Self::Working => "Working",
            Self::Completed => "Completed",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }

    /// Applies a command's transition rules for this state.
    ///
    /// On success the requirement's attributes reflect the transition and
    /// the successor state is returned; the caller installs it. The command
    /// kind is checked before any field is touched, so an illegal pair
    /// leaves the requirement unmodified.
    pub(crate) fn transition(
        self,
        requirement: &mut Requirement,
        command: &Command,
    ) -> Result<Self, UnsupportedTransition> {
        match (self, command) {
            (Self::Submitted, Command::Accept { priority, estimate }) => {
                requirement.priority = Some(*priority);
                requirement.estimate = Some(estimate.clone());
                Ok(Self::Accepted)
            }
            (
                Self::Submitted | Self::Accepted | Self::Working | Self::Completed | Self::Verified,
                Command::Reject { reason },
            ) => {
                requirement.priority = None;
                requirement.estimate = None;
                requirement.developer = None;
                requirement.rejection = Some(*reason);
                Ok(Self::Rejected)
            }
            (
                Self::Accepted | Self::Completed | Self::Verified,
                Command::Assign { developer },
            ) => {
                requirement.developer = Some(developer.clone());
                Ok(Self::Working)
            }
            (Self::Working, Command::Complete) => Ok(Self::Completed),
            (Self::Completed, Command::Pass) => Ok(Self::Verified),
            (Self::Completed, Command::Fail) => Ok(Self::Working),
            (
                Self::Rejected,
                Command::Revise {
                    summary,
                    acceptance_test_id,
                },
            ) => {
                // The stored rejection reason is retained across a revise.
                requirement.summary = summary.as_str().to_owned();
                requirement.acceptance_test_id = acceptance_test_id.as_str().to_owned();
                Ok(Self::Submitted)
            }
            (state, command) => Err(UnsupportedTransition {
                state,
                command: command.kind(),
            }),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error raised when a command's kind is not accepted by the requirement's
/// current state.
///
/// The requirement is guaranteed unchanged when this error is returned.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[error("a {command} command is not supported in the {state} state")]
pub struct UnsupportedTransition {
    /// The state the requirement was in when the command arrived.
    pub state: State,
    /// The kind of the offending command.
    pub command: CommandKind,
}
