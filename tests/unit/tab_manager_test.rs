use tabhistory::app::App;
use tabhistory::managers::history_store::HistoryStoreTrait;
use tabhistory::managers::tab_manager::{TabManager, TabManagerTrait};
use tabhistory::types::errors::TabError;
use tabhistory::types::history::EntryInput;

#[test]
fn test_create_tab_returns_unique_ids() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None, true);
    let id2 = mgr.create_tab(None, false);
    assert_ne!(id1, id2);
    assert_eq!(mgr.tab_count(), 2);
}

#[test]
fn test_create_tab_sets_active_when_first() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(Some("https://example.com"), false);
    assert_eq!(mgr.get_active_tab().unwrap().id, id);
}

#[test]
fn test_create_tab_default_url() {
    let mut mgr = TabManager::new();
    let id = mgr.create_tab(None, true);
    assert_eq!(mgr.get_tab(&id).unwrap().url, "about:blank");
}

#[test]
fn test_register_tab_with_host_id() {
    let mut mgr = TabManager::new();
    mgr.register_tab("7", Some("https://a.com")).unwrap();
    assert_eq!(mgr.get_tab("7").unwrap().url, "https://a.com");
    assert!(matches!(
        mgr.register_tab("7", None),
        Err(TabError::AlreadyExists(_))
    ));
}

#[test]
fn test_close_active_tab_switches_to_neighbor() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None, true);
    let id2 = mgr.create_tab(None, true);
    let id3 = mgr.create_tab(None, false);

    mgr.close_tab(&id2).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, id3);
    mgr.close_tab(&id3).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
    mgr.close_tab(&id1).unwrap();
    assert!(mgr.get_active_tab().is_none());
    assert_eq!(mgr.tab_count(), 0);
}

#[test]
fn test_close_nonexistent_tab_returns_error() {
    let mut mgr = TabManager::new();
    assert!(matches!(mgr.close_tab("nonexistent"), Err(TabError::NotFound(_))));
}

#[test]
fn test_switch_tab() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(None, true);
    let id2 = mgr.create_tab(None, false);
    assert_eq!(mgr.get_active_tab().unwrap().id, id1);
    mgr.switch_tab(&id2).unwrap();
    assert_eq!(mgr.get_active_tab().unwrap().id, id2);
    assert!(mgr.switch_tab("nonexistent").is_err());
}

#[test]
fn test_get_all_tabs_in_creation_order() {
    let mut mgr = TabManager::new();
    let id1 = mgr.create_tab(Some("https://a.com"), true);
    let id2 = mgr.create_tab(Some("https://b.com"), false);
    let all = mgr.get_all_tabs();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, id1);
    assert_eq!(all[1].id, id2);
}

#[test]
fn test_app_close_tab_drops_history() {
    let mut app = App::default();
    let id = app.tab_manager.create_tab(None, true);
    app.record_navigation(&id, &EntryInput::new("https://a.com"));
    app.record_navigation(&id, &EntryInput::new("https://b.com"));
    assert_eq!(app.history.get_state(&id).total_entries, 2);

    app.close_tab(&id).unwrap();
    assert_eq!(app.history.tab_count(), 0);
    assert_eq!(app.history.get_state(&id).current_position, -1);
}

#[test]
fn test_app_close_unregistered_tab_still_drops_history() {
    let mut app = App::default();
    app.record_navigation("orphan", &EntryInput::new("https://a.com"));
    assert!(matches!(app.close_tab("orphan"), Err(TabError::NotFound(_))));
    assert_eq!(app.history.tab_count(), 0);
    assert_eq!(app.history.get_state("orphan").total_entries, 0);
}

#[test]
fn test_record_navigation_skips_unregistered_tab() {
    let mut app = App::default();
    let state = app.record_navigation("host-only", &EntryInput::new("https://a.com"));
    assert_eq!(state.total_entries, 1);
    assert_eq!(app.tab_manager.tab_count(), 0);
}

#[test]
fn test_repeat_navigation_keeps_tab_title() {
    let mut app = App::default();
    let id = app.tab_manager.create_tab(None, true);
    app.record_navigation(&id, &EntryInput::new("https://a.com").with_title("A"));
    app.record_navigation(&id, &EntryInput::new("https://a.com").with_title("Other"));
    assert_eq!(app.tab_manager.get_tab(&id).unwrap().title, "A");
}

#[test]
fn test_record_navigation_updates_registered_tab() {
    let mut app = App::default();
    let id = app.tab_manager.create_tab(None, true);
    app.record_navigation(&id, &EntryInput::new("https://rust-lang.org").with_title("Rust"));
    let tab = app.tab_manager.get_tab(&id).unwrap();
    assert_eq!(tab.url, "https://rust-lang.org");
    assert_eq!(tab.title, "Rust");
}
