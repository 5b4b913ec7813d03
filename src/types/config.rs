use serde::{Deserialize, Serialize};

/// Default bound on the number of entries kept per tab.
pub const DEFAULT_MAX_ENTRIES: usize = 100;

/// Title given to entries appended without one.
pub const DEFAULT_TITLE: &str = "New page";

/// Tunables for the history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub max_entries: usize,
    /// Skip appends whose URL matches the entry under the cursor.
    pub dedupe_consecutive: bool,
    pub default_title: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            dedupe_consecutive: true,
            default_title: DEFAULT_TITLE.to_string(),
        }
    }
}
