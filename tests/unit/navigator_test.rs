//! Unit tests for two-tier back/forward routing.
//!
//! The managed store wins when it can move; otherwise the render host's own
//! session history is used; otherwise navigation is blocked.

use tabhistory::managers::history_store::{HistoryStoreTrait, TabHistoryStore};
use tabhistory::managers::navigator::{
    HostSessionState, NativeHistory, NavigationDecision, NavigationSource, Navigator,
};
use tabhistory::types::history::EntryInput;

const NO_HOST: HostSessionState = HostSessionState { can_go_back: false, can_go_forward: false };
const HOST_BOTH: HostSessionState = HostSessionState { can_go_back: true, can_go_forward: true };

/// Render host stub whose flags can be flipped mid-test.
struct FakeWebview {
    back: bool,
    forward: bool,
}

impl NativeHistory for FakeWebview {
    fn can_go_back(&self) -> bool {
        self.back
    }

    fn can_go_forward(&self) -> bool {
        self.forward
    }
}

fn store_with(urls: &[&str]) -> TabHistoryStore {
    let mut store = TabHistoryStore::default();
    for url in urls {
        store.add_entry("t1", &EntryInput::new(url));
    }
    store
}

#[test]
fn test_empty_store_defers_to_host() {
    let mut store = TabHistoryStore::default();
    let nav = Navigator::new(&mut store);
    let caps = nav.capabilities("t1", &HOST_BOTH);
    assert!(caps.can_go_back);
    assert!(caps.can_go_forward);
    assert_eq!(caps.back_source, NavigationSource::Native);
    assert_eq!(caps.forward_source, NavigationSource::Native);
}

#[test]
fn test_nothing_available_is_blocked() {
    let mut store = TabHistoryStore::default();
    let mut nav = Navigator::new(&mut store);
    let caps = nav.capabilities("t1", &NO_HOST);
    assert!(!caps.can_go_back);
    assert!(!caps.can_go_forward);
    assert_eq!(caps.back_source, NavigationSource::None);
    assert_eq!(nav.go_back("t1", &NO_HOST), NavigationDecision::Blocked);
    assert_eq!(nav.go_forward("t1", &NO_HOST), NavigationDecision::Blocked);
}

#[test]
fn test_managed_stack_preferred_over_host() {
    let mut store = store_with(&["A", "B"]);
    let mut nav = Navigator::new(&mut store);
    match nav.go_back("t1", &HOST_BOTH) {
        NavigationDecision::Load(entry) => assert_eq!(entry.url, "A"),
        other => panic!("expected managed load, got {:?}", other),
    }
    assert_eq!(store.get_state("t1").current_position, 0);
}

#[test]
fn test_capabilities_combine_layers_per_direction() {
    let mut store = store_with(&["A", "B"]);
    let nav = Navigator::new(&mut store);
    let host = FakeWebview { back: false, forward: true };
    let caps = nav.capabilities("t1", &host);
    assert_eq!(caps.back_source, NavigationSource::Managed);
    assert_eq!(caps.forward_source, NavigationSource::Native);
    assert!(caps.can_go_back && caps.can_go_forward);
}

#[test]
fn test_native_step_does_not_touch_store() {
    let mut store = store_with(&["A"]);
    let mut nav = Navigator::new(&mut store);
    let host = FakeWebview { back: true, forward: false };
    assert_eq!(nav.go_back("t1", &host), NavigationDecision::Native);

    let state = store.get_state("t1");
    assert_eq!(state.total_entries, 1);
    assert_eq!(state.current_position, 0);
}

#[test]
fn test_forward_after_back_reloads_next_entry() {
    let mut store = store_with(&["A", "B", "C"]);
    let mut nav = Navigator::new(&mut store);
    nav.go_back("t1", &NO_HOST);
    match nav.go_forward("t1", &NO_HOST) {
        NavigationDecision::Load(entry) => assert_eq!(entry.url, "C"),
        other => panic!("expected managed load, got {:?}", other),
    }
}
