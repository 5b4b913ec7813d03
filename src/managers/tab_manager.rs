use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::tab::Tab;

/// Trait defining the tab registry interface.
pub trait TabManagerTrait {
    fn create_tab(&mut self, url: Option<&str>, active: bool) -> String;
    fn register_tab(&mut self, tab_id: &str, url: Option<&str>) -> Result<(), TabError>;
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError>;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    fn get_all_tabs(&self) -> Vec<&Tab>;
    fn get_active_tab(&self) -> Option<&Tab>;
    fn tab_count(&self) -> usize;
    fn get_tab_mut(&mut self, tab_id: &str) -> Option<&mut Tab>;
}

/// In-memory registry of open tabs, kept in creation order.
pub struct TabManager {
    tabs: Vec<Tab>,
    active_tab_id: Option<String>,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            active_tab_id: None,
        }
    }

    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    fn find_tab_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    fn insert(&mut self, id: String, url: Option<&str>, active: bool) {
        self.tabs.push(Tab {
            id: id.clone(),
            url: url.unwrap_or("about:blank").to_string(),
            title: "New Tab".to_string(),
            created_at: Self::now(),
        });
        if active || self.active_tab_id.is_none() {
            self.active_tab_id = Some(id);
        }
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}

impl TabManagerTrait for TabManager {
    /// Create a new tab with a generated ID and return it.
    fn create_tab(&mut self, url: Option<&str>, active: bool) -> String {
        let id = Uuid::new_v4().to_string();
        self.insert(id.clone(), url, active);
        id
    }

    /// Register a tab whose ID was assigned by the host.
    fn register_tab(&mut self, tab_id: &str, url: Option<&str>) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_some() {
            return Err(TabError::AlreadyExists(tab_id.to_string()));
        }
        self.insert(tab_id.to_string(), url, false);
        Ok(())
    }

    /// Close a tab. If it was active, the nearest remaining neighbor becomes active.
    fn close_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        let idx = self
            .find_tab_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.tabs.remove(idx);

        if self.active_tab_id.as_deref() == Some(tab_id) {
            self.active_tab_id = if self.tabs.is_empty() {
                None
            } else {
                Some(self.tabs[idx.min(self.tabs.len() - 1)].id.clone())
            };
        }
        Ok(())
    }

    fn switch_tab(&mut self, tab_id: &str) -> Result<(), TabError> {
        if self.find_tab_index(tab_id).is_none() {
            return Err(TabError::NotFound(tab_id.to_string()));
        }
        self.active_tab_id = Some(tab_id.to_string());
        Ok(())
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn get_all_tabs(&self) -> Vec<&Tab> {
        self.tabs.iter().collect()
    }

    fn get_active_tab(&self) -> Option<&Tab> {
        self.active_tab_id
            .as_ref()
            .and_then(|id| self.tabs.iter().find(|t| t.id == *id))
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn get_tab_mut(&mut self, tab_id: &str) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == tab_id)
    }
}
