// Tab history state managers
// Managers hold the per-tab history stacks, the store, back/forward routing
// and the tab registry.

pub mod history_store;
pub mod navigator;
pub mod tab_history;
pub mod tab_manager;
