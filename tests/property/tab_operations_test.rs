//! Property-based tests for tab lifecycle and history ownership.
//!
//! For any sequence of tab creations, navigations and closures through `App`,
//! the store only tracks histories of tabs that are still open.

use proptest::prelude::*;

use tabhistory::app::App;
use tabhistory::managers::history_store::HistoryStoreTrait;
use tabhistory::managers::tab_manager::TabManagerTrait;
use tabhistory::types::history::EntryInput;

#[derive(Debug, Clone)]
enum TabOp {
    Create,
    Visit(usize, u8),
    Close(usize),
}

fn arb_tab_ops() -> impl Strategy<Value = Vec<TabOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(TabOp::Create),
            4 => (0..20usize, 0..10u8).prop_map(|(i, u)| TabOp::Visit(i, u)),
            2 => (0..20usize).prop_map(TabOp::Close),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn closed_tabs_leave_no_history(ops in arb_tab_ops()) {
        let mut app = App::default();
        let mut closed: Vec<String> = Vec::new();

        for op in &ops {
            let open: Vec<String> = app
                .tab_manager
                .get_all_tabs()
                .iter()
                .map(|t| t.id.clone())
                .collect();
            match op {
                TabOp::Create => {
                    app.tab_manager.create_tab(None, true);
                }
                TabOp::Visit(i, u) => {
                    if open.is_empty() {
                        continue;
                    }
                    let id = &open[i % open.len()];
                    app.record_navigation(id, &EntryInput::new(&format!("https://p{}.example", u)));
                }
                TabOp::Close(i) => {
                    if open.is_empty() {
                        continue;
                    }
                    let id = open[i % open.len()].clone();
                    prop_assert!(app.close_tab(&id).is_ok());
                    closed.push(id);
                }
            }

            prop_assert!(app.history.tab_count() <= app.tab_manager.tab_count());
            for id in &closed {
                prop_assert_eq!(app.history.get_state(id).total_entries, 0);
            }
        }
    }
}
