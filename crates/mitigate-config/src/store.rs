//! Document store configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "mitigate.db".to_string()
}

const fn default_normalize_on_startup() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path to the libSQL database file, or `":memory:"`.
    #[serde(default = "default_path")]
    pub path: String,

    /// Coerce every citizen identifier to an integer before serving requests.
    #[serde(default = "default_normalize_on_startup")]
    pub normalize_on_startup: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            normalize_on_startup: default_normalize_on_startup(),
        }
    }
}

impl StoreConfig {
    /// Whether the store lives only in memory for the life of the process.
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
