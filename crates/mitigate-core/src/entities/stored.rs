use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A record together with the ID the store assigned to it.
///
/// The ID is not part of the stored document; it is flattened next to the
/// record fields when serialized for clients.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Stored<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Stored<T> {
    pub fn new(id: impl Into<String>, record: T) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }
}
