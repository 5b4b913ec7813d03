use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single page in a tab's navigation history.
///
/// Entries are never mutated after creation; navigation only moves the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub url: String,
    pub title: String,
    pub favicon: String,
    pub timestamp: i64,
}

/// Caller-supplied data for a new history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInput {
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub favicon: Option<String>,
}

impl EntryInput {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            title: None,
            favicon: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_favicon(mut self, favicon: &str) -> Self {
        self.favicon = Some(favicon.to_string());
        self
    }
}

/// Which side of the cursor a stack query or jump refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Back,
    Forward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Back => write!(f, "back"),
            Direction::Forward => write!(f, "forward"),
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "back" => Ok(Direction::Back),
            "forward" => Ok(Direction::Forward),
            other => Err(format!("unknown direction: {}", other)),
        }
    }
}

/// Snapshot of a tab's navigable state, used to drive back/forward affordances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub current_url: String,
    pub current_title: String,
    pub back_entries: Vec<HistoryEntry>,
    pub forward_entries: Vec<HistoryEntry>,
    /// Cursor index, `-1` when the tab has no history.
    pub current_position: i64,
    pub total_entries: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            can_go_back: false,
            can_go_forward: false,
            current_url: String::new(),
            current_title: String::new(),
            back_entries: Vec::new(),
            forward_entries: Vec::new(),
            current_position: -1,
            total_entries: 0,
        }
    }
}

/// Outcome of a jump within a tab's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResult {
    pub success: bool,
    pub entry: Option<HistoryEntry>,
    pub state: NavState,
}

/// Compact position summary for toolbar counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryCount {
    pub total: usize,
    /// 1-based position of the current entry, 0 when empty.
    pub current: usize,
    pub can_go_back: bool,
    pub can_go_forward: bool,
}
