use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Hospital {
    pub name: String,
    pub location: String,
    pub capacity: i64,
    pub available_beds: i64,
    pub contact_info: String,
}
