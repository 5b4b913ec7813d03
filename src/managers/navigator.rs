//! Two-tier back/forward navigation.
//!
//! Combines the managed history store with the render host's own session
//! history. A direction is available when either layer can move; the managed
//! stack is preferred and the host is used only when the store cannot move.
//! The store is never asked to fabricate entries for host-native navigation.

use serde::{Deserialize, Serialize};

use crate::managers::history_store::{HistoryStoreTrait, TabHistoryStore};
use crate::types::history::{Direction, HistoryEntry};

/// Navigable-session flags reported by the render host for one tab.
pub trait NativeHistory {
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
}

/// Host session flags captured as plain values, e.g. from an RPC request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSessionState {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

impl NativeHistory for HostSessionState {
    fn can_go_back(&self) -> bool {
        self.can_go_back
    }

    fn can_go_forward(&self) -> bool {
        self.can_go_forward
    }
}

/// Which layer would serve a navigation in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationSource {
    Managed,
    Native,
    None,
}

/// Combined back/forward availability for a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavCapabilities {
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub back_source: NavigationSource,
    pub forward_source: NavigationSource,
}

/// What the caller must do to carry out a back/forward request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// The managed cursor moved; load this entry's URL.
    Load(HistoryEntry),
    /// Ask the render host to step through its own session history.
    Native,
    /// Neither layer can move in that direction.
    Blocked,
}

/// Routes back/forward requests to the managed store or the host.
pub struct Navigator<'a> {
    store: &'a mut TabHistoryStore,
}

impl<'a> Navigator<'a> {
    pub fn new(store: &'a mut TabHistoryStore) -> Self {
        Self { store }
    }

    fn source(
        &self,
        tab_id: &str,
        direction: Direction,
        host: &dyn NativeHistory,
    ) -> NavigationSource {
        let state = self.store.get_state(tab_id);
        let (managed, native) = match direction {
            Direction::Back => (state.can_go_back, host.can_go_back()),
            Direction::Forward => (state.can_go_forward, host.can_go_forward()),
        };
        if managed {
            NavigationSource::Managed
        } else if native {
            NavigationSource::Native
        } else {
            NavigationSource::None
        }
    }

    pub fn capabilities(&self, tab_id: &str, host: &dyn NativeHistory) -> NavCapabilities {
        let back_source = self.source(tab_id, Direction::Back, host);
        let forward_source = self.source(tab_id, Direction::Forward, host);
        NavCapabilities {
            can_go_back: back_source != NavigationSource::None,
            can_go_forward: forward_source != NavigationSource::None,
            back_source,
            forward_source,
        }
    }

    /// Steps one entry in `direction`, preferring the managed stack.
    pub fn step(
        &mut self,
        tab_id: &str,
        direction: Direction,
        host: &dyn NativeHistory,
    ) -> NavigationDecision {
        match self.source(tab_id, direction, host) {
            NavigationSource::Managed => {
                let result = self.store.navigate_to_index(tab_id, direction, 0);
                match result.entry {
                    Some(entry) => NavigationDecision::Load(entry),
                    None => NavigationDecision::Blocked,
                }
            }
            NavigationSource::Native => {
                log::debug!("history tab {}: deferring {} to host", tab_id, direction);
                NavigationDecision::Native
            }
            NavigationSource::None => NavigationDecision::Blocked,
        }
    }

    pub fn go_back(&mut self, tab_id: &str, host: &dyn NativeHistory) -> NavigationDecision {
        self.step(tab_id, Direction::Back, host)
    }

    pub fn go_forward(&mut self, tab_id: &str, host: &dyn NativeHistory) -> NavigationDecision {
        self.step(tab_id, Direction::Forward, host)
    }
}
