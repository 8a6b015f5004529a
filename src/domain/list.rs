//! An ordered, in-memory collection of requirements.
//!
//! The list knows nothing about presentation or persistence. It owns
//! identity assignment: ids are handed out by a counter scoped to the list
//! instance, so two lists can never interfere with each other's numbering.

use tracing::{debug, instrument};

use crate::{
    domain::{
        command::Command,
        requirement::{Requirement, RequirementId},
        state::UnsupportedTransition,
    },
    storage::Record,
};

/// An ordered collection of [`Requirement`] entities keyed by id.
///
/// Insertion order is display order; it carries no other meaning. A new
/// list starts its identity counter at 0.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RequirementsList {
    /// The requirements, in insertion order.
    requirements: Vec<Requirement>,

    /// The next id to assign. Monotonically increasing for the lifetime of
    /// the list; ids of removed requirements are never recycled.
    next_id: usize,
}

impl RequirementsList {
    /// Creates an empty list with the identity counter at 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requirements: Vec::new(),
            next_id: 0,
        }
    }

    /// Hands out the next id and advances the counter.
    fn assign_id(&mut self) -> RequirementId {
        let id = RequirementId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a new requirement in the `Submitted` state and returns the id
    /// assigned to it.
    pub fn add(&mut self, summary: String, acceptance_test_id: String) -> RequirementId {
        let id = self.assign_id();
        self.requirements
            .push(Requirement::new(id, summary, acceptance_test_id));
        id
    }

    /// Appends one requirement per record.
    ///
    /// Ids are assigned exactly as in [`add`](Self::add): any id a record
    /// may carry is ignored, and every imported requirement re-enters the
    /// lifecycle at `Submitted`. The counter ends one past the largest
    /// assigned id, so a later `add` cannot reuse an existing id.
    #[instrument(skip(self, records))]
    pub fn import<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = Record>,
    {
        let mut count = 0_usize;
        for record in records {
            let id = self.assign_id();
            self.requirements.push(Requirement::from_record(id, record));
            count += 1;
        }
        debug!(count, "imported requirements");
    }

    /// Looks up a requirement by id.
    ///
    /// Absence is not an error: `None` is returned for an unknown id.
    #[must_use]
    pub fn get(&self, id: RequirementId) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.id() == id)
    }

    /// Applies a command to the requirement with the given id.
    ///
    /// Dispatch to an id that is not present is a silent no-op, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedTransition`] if the target requirement's
    /// current state does not accept the command's kind; the requirement is
    /// unchanged.
    #[instrument(skip(self, command), fields(kind = %command.kind()))]
    pub fn execute(
        &mut self,
        id: RequirementId,
        command: &Command,
    ) -> Result<(), UnsupportedTransition> {
        match self.requirements.iter_mut().find(|r| r.id() == id) {
            Some(requirement) => requirement.apply(command),
            None => {
                debug!(%id, "no requirement with this id, command ignored");
                Ok(())
            }
        }
    }

    /// Removes the requirement with the given id.
    ///
    /// Removing an id that is not present is a silent no-op.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: RequirementId) {
        self.requirements.retain(|r| r.id() != id);
    }

    /// The requirements in insertion order.
    #[must_use]
    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    /// The number of requirements in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    /// Whether the list contains no requirements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }

    /// Borrowed display rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.requirements.iter().map(|r| Row {
            id: r.id(),
            state: r.state().name(),
            summary: r.summary(),
        })
    }

    /// Snapshots every requirement for the persistence collaborator.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.requirements.iter().map(Requirement::to_record).collect()
    }
}

/// One display row of the list: the columns a presentation layer shows in a
/// requirements table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row<'a> {
    /// Id of the requirement.
    pub id: RequirementId,
    /// Display name of the current state.
    pub state: &'a str,
    /// The requirement's summary.
    pub summary: &'a str,
}
