use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::CitizenId;

/// An outreach event and the citizens who attended it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AwarenessProgram {
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub conducted_by: String,
    /// Participant citizen identifiers in submission order.
    #[serde(default)]
    pub participants: Vec<CitizenId>,
}
