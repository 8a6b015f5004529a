use std::fmt;

use non_empty_string::NonEmptyString;

use crate::{
    domain::{
        command::{Command, Priority, Rejection},
        state::{State, UnsupportedTransition},
    },
    storage::Record,
};

/// Identifier of a requirement, unique within its owning list.
///
/// Ids are assigned sequentially from 0 by the owning
/// [`RequirementsList`](crate::RequirementsList) and are stable for the
/// lifetime of the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequirementId(pub(crate) usize);

impl RequirementId {
    /// Returns the raw numeric id.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for RequirementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked unit of work with identity, descriptive attributes, and a
/// lifecycle state.
///
/// The entity carries data and read accessors; every transition is
/// delegated to the current [`State`], which mutates the attributes and
/// yields the successor state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Identity within the owning list.
    pub(crate) id: RequirementId,
    /// One-line description, replaced only by a revise.
    pub(crate) summary: String,
    /// Id of the acceptance test covering this requirement, replaced only
    /// by a revise.
    pub(crate) acceptance_test_id: String,
    /// Set by accept, cleared by reject.
    pub(crate) priority: Option<Priority>,
    /// Set by accept, cleared by reject.
    pub(crate) estimate: Option<NonEmptyString>,
    /// Set by assign, cleared by reject.
    pub(crate) developer: Option<NonEmptyString>,
    /// Set by reject; meaningful while the state is `Rejected`.
    pub(crate) rejection: Option<Rejection>,
    /// Current lifecycle state.
    pub(crate) state: State,
}

impl Requirement {
    /// Constructs a new requirement in the `Submitted` state.
    ///
    /// Only the owning list constructs entities, since it owns identity
    /// assignment.
    pub(crate) const fn new(id: RequirementId, summary: String, acceptance_test_id: String) -> Self {
        Self {
            id,
            summary,
            acceptance_test_id,
            priority: None,
            estimate: None,
            developer: None,
            rejection: None,
            state: State::Submitted,
        }
    }

    /// Reconstructs an entity from a persistence snapshot.
    ///
    /// Only the summary and acceptance test id survive the round-trip: the
    /// entity re-enters the lifecycle at `Submitted` under a fresh id.
    pub(crate) fn from_record(id: RequirementId, record: Record) -> Self {
        Self::new(id, record.summary, record.acceptance_test_id)
    }

    /// The requirement's id within its owning list.
    #[must_use]
    pub const fn id(&self) -> RequirementId {
        self.id
    }

    /// The requirement's one-line summary.
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Id of the acceptance test covering this requirement.
    #[must_use]
    pub fn acceptance_test_id(&self) -> &str {
        &self.acceptance_test_id
    }

    /// The scheduling priority, or 0 if no priority has been assigned.
    #[must_use]
    pub fn priority(&self) -> u8 {
        self.priority.map_or(0, Priority::get)
    }

    /// The effort estimate recorded on acceptance, if any.
    #[must_use]
    pub fn estimate(&self) -> Option<&str> {
        self.estimate.as_ref().map(NonEmptyString::as_str)
    }

    /// The developer assigned to this requirement, if any.
    #[must_use]
    pub fn developer(&self) -> Option<&str> {
        self.developer.as_ref().map(NonEmptyString::as_str)
    }

    /// The reason recorded by the most recent reject, if any.
    #[must_use]
    pub const fn rejection_reason(&self) -> Option<Rejection> {
        self.rejection
    }

    /// The current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Applies a command to this requirement.
    ///
    /// On success the attributes and state reflect the transition. On
    /// failure the requirement is left completely unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedTransition`] if the current state does not
    /// accept the command's kind.
    pub fn apply(&mut self, command: &Command) -> Result<(), UnsupportedTransition> {
        let state = self.state;
        self.state = state.transition(self, command)?;
        Ok(())
    }

    /// Produces the plain snapshot exchanged with the persistence
    /// collaborator.
    ///
    /// Attributes that are unset are omitted from the snapshot rather than
    /// serialized as explicit nulls.
    #[must_use]
    pub fn to_record(&self) -> Record {
        Record {
            summary: self.summary.clone(),
            acceptance_test_id: self.acceptance_test_id.clone(),
            developer: self.developer.as_ref().map(|d| d.as_str().to_owned()),
            estimate: self.estimate.as_ref().map(|e| e.as_str().to_owned()),
            rejection: self.rejection,
            state: self.state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::command::CommandKind;

    fn requirement() -> Requirement {
        Requirement::new(
            RequirementId(0),
            "Add an export button".to_string(),
            "AT-EXPORT-1".to_string(),
        )
    }

    #[test]
    fn new_requirement_starts_submitted_with_unset_attributes() {
        let requirement = requirement();

        assert_eq!(requirement.id().get(), 0);
        assert_eq!(requirement.summary(), "Add an export button");
        assert_eq!(requirement.acceptance_test_id(), "AT-EXPORT-1");
        assert_eq!(requirement.state(), State::Submitted);
        assert_eq!(requirement.priority(), 0);
        assert_eq!(requirement.estimate(), None);
        assert_eq!(requirement.developer(), None);
        assert_eq!(requirement.rejection_reason(), None);
    }

    #[test]
    fn happy_path_reaches_verified() {
        let mut requirement = requirement();

        requirement
            .apply(&Command::accept(2, "1 week").unwrap())
            .unwrap();
        assert_eq!(requirement.state(), State::Accepted);
        assert_eq!(requirement.priority(), 2);
        assert_eq!(requirement.estimate(), Some("1 week"));

        requirement
            .apply(&Command::assign("sesmith5").unwrap())
            .unwrap();
        assert_eq!(requirement.state(), State::Working);
        assert_eq!(requirement.developer(), Some("sesmith5"));

        requirement.apply(&Command::complete()).unwrap();
        assert_eq!(requirement.state(), State::Completed);

        requirement.apply(&Command::pass()).unwrap();
        assert_eq!(requirement.state(), State::Verified);
    }

    #[test]
    fn reject_then_revise_loops_back_to_submitted() {
        let mut requirement = requirement();

        requirement
            .apply(&Command::reject(Rejection::Duplicate))
            .unwrap();
        assert_eq!(requirement.state(), State::Rejected);
        assert_eq!(requirement.rejection_reason(), Some(Rejection::Duplicate));
        assert_eq!(requirement.priority(), 0);

        requirement
            .apply(&Command::revise("Add a CSV export button", "AT-EXPORT-2").unwrap())
            .unwrap();
        assert_eq!(requirement.state(), State::Submitted);
        assert_eq!(requirement.summary(), "Add a CSV export button");
        assert_eq!(requirement.acceptance_test_id(), "AT-EXPORT-2");
    }

    #[test]
    fn illegal_command_reports_state_and_kind() {
        let mut requirement = requirement();
        requirement
            .apply(&Command::accept(1, "2 days").unwrap())
            .unwrap();

        let error = requirement.apply(&Command::complete()).unwrap_err();

        assert_eq!(error.state, State::Accepted);
        assert_eq!(error.command, CommandKind::Complete);
        assert_eq!(requirement.state(), State::Accepted);
    }

    #[test]
    fn record_snapshot_of_a_fresh_requirement_has_no_optional_fields() {
        let record = requirement().to_record();

        assert_eq!(record.summary, "Add an export button");
        assert_eq!(record.acceptance_test_id, "AT-EXPORT-1");
        assert_eq!(record.developer, None);
        assert_eq!(record.estimate, None);
        assert_eq!(record.rejection, None);
        assert_eq!(record.state, State::Submitted);
    }

    #[test]
    fn record_snapshot_carries_attributes_set_along_the_way() {
        let mut requirement = requirement();
        requirement
            .apply(&Command::accept(1, "4 days").unwrap())
            .unwrap();
        requirement
            .apply(&Command::assign("jctetter").unwrap())
            .unwrap();

        let record = requirement.to_record();

        assert_eq!(record.estimate.as_deref(), Some("4 days"));
        assert_eq!(record.developer.as_deref(), Some("jctetter"));
        assert_eq!(record.state, State::Working);
    }

    #[test]
    fn from_record_resets_lifecycle_attributes() {
        let mut source = requirement();
        source.apply(&Command::accept(3, "2 days").unwrap()).unwrap();
        source.apply(&Command::assign("dev").unwrap()).unwrap();

        let rebuilt = Requirement::from_record(RequirementId(7), source.to_record());

        assert_eq!(rebuilt.id().get(), 7);
        assert_eq!(rebuilt.summary(), source.summary());
        assert_eq!(rebuilt.acceptance_test_id(), source.acceptance_test_id());
        assert_eq!(rebuilt.state(), State::Submitted);
        assert_eq!(rebuilt.priority(), 0);
        assert_eq!(rebuilt.developer(), None);
    }

    #[test]
    fn requirement_id_display() {
        assert_eq!(RequirementId(12).to_string(), "12");
    }
}
