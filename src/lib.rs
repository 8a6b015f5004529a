//! Requirement Lifecycle Tracking
//!
//! Requirements move through a fixed lifecycle: submission, acceptance,
//! implementation, verification and closure, with rejection and revision
//! branches. This crate is the lifecycle engine: validated transition
//! [`Command`]s, the [`Requirement`] entity, its [`State`] machine, and the
//! identity-owning [`RequirementsList`] collection.
//!
//! Presentation and persistence are external collaborators. They drive the
//! core through [`RequirementsList`] and exchange [`Record`] snapshots; the
//! crate itself performs no I/O.

pub mod domain;
pub use domain::{
    Command, CommandKind, InvalidCommand, Priority, Rejection, Requirement, RequirementId,
    RequirementsList, Row, State, UnsupportedTransition,
};

/// Serialization shapes exchanged with the persistence collaborator.
pub mod storage;
pub use storage::Record;
