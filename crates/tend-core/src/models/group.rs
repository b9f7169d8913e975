//! Garden group membership facts.

use serde::{Deserialize, Serialize};

/// A garden group the user belongs to, with its current member count.
///
/// The core never computes membership itself; these facts are supplied by
/// the caller (or the local fact table) and the snapshotter only runs an
/// existential size test over them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupFact {
    /// Group identifier (unique name)
    pub name: String,
    /// Current number of members in the group
    pub member_count: i64,
}
