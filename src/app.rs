//! App Core for the tab history service.
//!
//! Owns the tab registry and the history store and keeps their lifecycles in
//! step: closing a tab in the registry drops its history.

use log::debug;

use crate::managers::history_store::{HistoryStoreTrait, TabHistoryStore};
use crate::managers::navigator::Navigator;
use crate::managers::tab_manager::{TabManager, TabManagerTrait};
use crate::services::config_loader::{ConfigLoader, ConfigLoaderTrait};
use crate::types::config::HistoryConfig;
use crate::types::errors::TabError;
use crate::types::history::{EntryInput, NavState};

/// Central application struct holding the registry and the store.
pub struct App {
    pub tab_manager: TabManager,
    pub history: TabHistoryStore,
}

impl App {
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            tab_manager: TabManager::new(),
            history: TabHistoryStore::new(config),
        }
    }

    /// Creates an App from the config file at `config_path`, or the default
    /// location when `None`.
    pub fn from_config_path(
        config_path: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut loader = ConfigLoader::new(config_path);
        let config = loader.load()?;
        Ok(Self::new(config))
    }

    /// Records a page load: appends to the tab's history and, if the tab is
    /// registered, mirrors the current URL and title onto it.
    pub fn record_navigation(&mut self, tab_id: &str, input: &EntryInput) -> NavState {
        let state = self.history.add_entry(tab_id, input);
        if let Some(tab) = self.tab_manager.get_tab_mut(tab_id) {
            tab.url = state.current_url.clone();
            tab.title = state.current_title.clone();
        }
        state
    }

    /// Closes a tab and discards its history.
    ///
    /// History recorded for an id the registry never saw is discarded too,
    /// even though the registry reports `NotFound`.
    pub fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let closed = self.tab_manager.close_tab(tab_id);
        self.history.clear_tab(tab_id);
        closed?;
        debug!("closed tab {}", tab_id);
        Ok(())
    }

    pub fn navigator(&mut self) -> Navigator<'_> {
        Navigator::new(&mut self.history)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}
