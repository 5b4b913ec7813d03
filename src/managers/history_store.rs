//! Tab History Store.
//!
//! Owns one `TabHistory` per tab identifier. Histories are created lazily on
//! the first append and dropped when the tab is cleared. Read operations on an
//! unknown tab behave as if the tab had an empty history.

use std::collections::HashMap;

use log::{debug, info, warn};

use crate::managers::tab_history::{PushOutcome, TabHistory};
use crate::types::config::HistoryConfig;
use crate::types::history::{Direction, EntryInput, HistoryEntry, NavState, NavigationResult};

/// Trait defining the per-tab history interface.
pub trait HistoryStoreTrait {
    fn add_entry(&mut self, tab_id: &str, input: &EntryInput) -> NavState;
    fn get_stack(&self, tab_id: &str, direction: Direction) -> Vec<HistoryEntry>;
    fn navigate_to_index(
        &mut self,
        tab_id: &str,
        direction: Direction,
        target_index: usize,
    ) -> NavigationResult;
    fn get_state(&self, tab_id: &str) -> NavState;
    fn clear_tab(&mut self, tab_id: &str) -> bool;
    fn tab_count(&self) -> usize;
}

/// In-memory, session-only store of tab histories.
pub struct TabHistoryStore {
    histories: HashMap<String, TabHistory>,
    config: HistoryConfig,
}

impl TabHistoryStore {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            histories: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Read-only access to a tab's history, if one has been created.
    pub fn history(&self, tab_id: &str) -> Option<&TabHistory> {
        self.histories.get(tab_id)
    }
}

impl Default for TabHistoryStore {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl HistoryStoreTrait for TabHistoryStore {
    /// Appends an entry to the tab's history and returns the resulting state.
    fn add_entry(&mut self, tab_id: &str, input: &EntryInput) -> NavState {
        let config = &self.config;
        let history = self
            .histories
            .entry(tab_id.to_string())
            .or_insert_with(|| TabHistory::from_config(config));

        match history.push(input) {
            PushOutcome::Appended => info!(
                "history tab {}: {} entries, position {}",
                tab_id,
                history.len(),
                history.cursor()
            ),
            PushOutcome::Duplicate => {
                debug!("history tab {}: skipped repeat of {}", tab_id, input.url)
            }
        }
        history.state()
    }

    fn get_stack(&self, tab_id: &str, direction: Direction) -> Vec<HistoryEntry> {
        self.histories
            .get(tab_id)
            .map(|h| h.entries_in(direction))
            .unwrap_or_default()
    }

    /// Moves the tab's cursor to the `target_index`-th entry in `direction`.
    /// On an out-of-range target nothing changes and `success` is false.
    fn navigate_to_index(
        &mut self,
        tab_id: &str,
        direction: Direction,
        target_index: usize,
    ) -> NavigationResult {
        let Some(history) = self.histories.get_mut(tab_id) else {
            warn!("history tab {}: no history to navigate {}", tab_id, direction);
            return NavigationResult {
                success: false,
                entry: None,
                state: NavState::default(),
            };
        };

        match history.jump(direction, target_index).cloned() {
            Some(entry) => {
                info!(
                    "history tab {}: moved to position {} ({})",
                    tab_id,
                    history.cursor(),
                    entry.url
                );
                NavigationResult {
                    success: true,
                    entry: Some(entry),
                    state: history.state(),
                }
            }
            None => {
                warn!(
                    "history tab {}: invalid {} target {} from position {}",
                    tab_id,
                    direction,
                    target_index,
                    history.cursor()
                );
                NavigationResult {
                    success: false,
                    entry: None,
                    state: history.state(),
                }
            }
        }
    }

    fn get_state(&self, tab_id: &str) -> NavState {
        self.histories
            .get(tab_id)
            .map(TabHistory::state)
            .unwrap_or_default()
    }

    /// Drops the tab's history. Unknown tabs are a no-op; always returns true.
    fn clear_tab(&mut self, tab_id: &str) -> bool {
        if self.histories.remove(tab_id).is_some() {
            debug!("history tab {}: cleared", tab_id);
        }
        true
    }

    fn tab_count(&self) -> usize {
        self.histories.len()
    }
}
