//! Domain models for requirement lifecycle tracking.
//!
//! This module contains the core domain types: transition commands, the
//! requirement entity, its lifecycle state machine, and the ordered
//! collection that owns requirement identity.

/// Transition commands and their construction-time validation.
pub mod command;
pub use command::{Command, CommandKind, InvalidCommand, Priority, Rejection};

/// The ordered, identity-owning requirements collection.
pub mod list;
pub use list::{RequirementsList, Row};

/// The requirement entity.
pub mod requirement;
pub use requirement::{Requirement, RequirementId};

/// The lifecycle state machine.
pub mod state;
pub use state::{State, UnsupportedTransition};
