//! Single-tab navigation history.
//!
//! A `TabHistory` is an insertion-ordered stack of `HistoryEntry` values with
//! a cursor pointing at the current page. Appending while the cursor is behind
//! the tip discards the forward branch; the stack is bounded and evicts its
//! oldest entry first.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::config::{HistoryConfig, DEFAULT_MAX_ENTRIES, DEFAULT_TITLE};
use crate::types::history::{Direction, EntryInput, HistoryCount, HistoryEntry, NavState};

/// Outcome of an append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// A new entry was appended.
    Appended,
    /// The URL matched the current entry and nothing changed.
    Duplicate,
}

/// Bounded back/forward stack for one tab.
#[derive(Debug, Clone)]
pub struct TabHistory {
    stack: Vec<HistoryEntry>,
    cursor: Option<usize>,
    max_size: usize,
    dedupe_consecutive: bool,
    default_title: String,
}

impl TabHistory {
    /// Creates an empty history bounded to `max_size` entries (at least 1).
    pub fn new(max_size: usize) -> Self {
        Self {
            stack: Vec::new(),
            cursor: None,
            max_size: max_size.max(1),
            dedupe_consecutive: true,
            default_title: DEFAULT_TITLE.to_string(),
        }
    }

    /// Creates an empty history using the bound, repeat policy and default
    /// title from `config`.
    pub fn from_config(config: &HistoryConfig) -> Self {
        Self {
            stack: Vec::new(),
            cursor: None,
            max_size: config.max_entries.max(1),
            dedupe_consecutive: config.dedupe_consecutive,
            default_title: config.default_title.clone(),
        }
    }

    /// Enables or disables skipping appends of the URL already under the cursor.
    pub fn set_dedupe_consecutive(&mut self, enabled: bool) {
        self.dedupe_consecutive = enabled;
    }

    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    /// Appends a new entry, truncating any forward branch and evicting the
    /// oldest entry when the bound is exceeded.
    pub fn push(&mut self, input: &EntryInput) -> PushOutcome {
        if self.dedupe_consecutive
            && self
                .current_entry()
                .is_some_and(|current| current.url == input.url)
        {
            return PushOutcome::Duplicate;
        }

        // Divergence: drop everything ahead of the cursor.
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.stack.truncate(keep);

        // Clock skew must not make timestamps run backwards within a stack.
        let last = self.stack.last().map_or(i64::MIN, |e| e.timestamp);
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            url: input.url.clone(),
            title: input
                .title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| self.default_title.clone()),
            favicon: input.favicon.clone().unwrap_or_default(),
            timestamp: Self::now_millis().max(last),
        };
        self.stack.push(entry);

        if self.stack.len() > self.max_size {
            let excess = self.stack.len() - self.max_size;
            self.stack.drain(..excess);
        }
        self.cursor = Some(self.stack.len() - 1);

        PushOutcome::Appended
    }

    /// Resolves the `index`-th entry in `direction` to an absolute stack position.
    fn resolve(&self, direction: Direction, index: usize) -> Option<usize> {
        let cursor = self.cursor?;
        let position = match direction {
            Direction::Back => cursor.checked_sub(index.checked_add(1)?)?,
            Direction::Forward => cursor.checked_add(index)?.checked_add(1)?,
        };
        (position < self.stack.len()).then_some(position)
    }

    /// Moves the cursor to the `index`-th entry in `direction`, as ordered by
    /// [`TabHistory::entries_in`]. Returns the target entry, or `None` without
    /// touching the cursor when the target is out of range.
    pub fn jump(&mut self, direction: Direction, index: usize) -> Option<&HistoryEntry> {
        let position = self.resolve(direction, index)?;
        self.cursor = Some(position);
        self.stack.get(position)
    }

    pub fn go_back(&mut self) -> Option<&HistoryEntry> {
        self.jump(Direction::Back, 0)
    }

    pub fn go_forward(&mut self) -> Option<&HistoryEntry> {
        self.jump(Direction::Forward, 0)
    }

    /// Entries before the cursor most-recent-first, or after it in chronological order.
    pub fn entries_in(&self, direction: Direction) -> Vec<HistoryEntry> {
        let Some(cursor) = self.cursor else {
            return Vec::new();
        };
        match direction {
            Direction::Back => self.stack[..cursor].iter().rev().cloned().collect(),
            Direction::Forward => self.stack[cursor + 1..].to_vec(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.stack.len())
    }

    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.cursor.and_then(|c| self.stack.get(c))
    }

    /// Cursor as a signed index, `-1` when empty.
    pub fn cursor(&self) -> i64 {
        self.cursor.map_or(-1, |c| c as i64)
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.cursor = None;
    }

    pub fn state(&self) -> NavState {
        let current = self.current_entry();
        NavState {
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
            current_url: current.map(|e| e.url.clone()).unwrap_or_default(),
            current_title: current.map(|e| e.title.clone()).unwrap_or_default(),
            back_entries: self.entries_in(Direction::Back),
            forward_entries: self.entries_in(Direction::Forward),
            current_position: self.cursor(),
            total_entries: self.stack.len(),
        }
    }

    pub fn history_count(&self) -> HistoryCount {
        HistoryCount {
            total: self.stack.len(),
            current: self.cursor.map_or(0, |c| c + 1),
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
        }
    }
}

impl Default for TabHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}
