use serde::{Deserialize, Serialize};

use crate::domain::{Rejection, State};

/// A plain snapshot of a requirement's attributes, suitable for
/// persistence.
///
/// Records carry no identity: ids are assigned by the list a record is
/// imported into, and only the summary and acceptance test id influence the
/// reconstructed entity. Attributes that are unset on the requirement are
/// omitted when a record is serialized, rather than written as explicit
/// nulls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// The requirement's one-line summary.
    pub summary: String,

    /// Id of the acceptance test covering the requirement.
    pub acceptance_test_id: String,

    /// Developer assigned to the requirement, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    /// Effort estimate recorded on acceptance, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,

    /// Rejection reason, present only after a reject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection: Option<Rejection>,

    /// Name of the current lifecycle state.
    pub state: State,
}
