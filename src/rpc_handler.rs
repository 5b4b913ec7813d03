//! RPC method handler for the tab history JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches method calls to the store, the navigator and
//! the tab registry held by `App`.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::history_store::HistoryStoreTrait;
use crate::managers::navigator::{HostSessionState, NavigationDecision};
use crate::managers::tab_manager::TabManagerTrait;
use crate::types::errors::RpcError;
use crate::types::history::{Direction, EntryInput};

/// Reads the tab identifier. Hosts send either strings or integers.
fn tab_id_param(params: &Value) -> Result<String, RpcError> {
    match params.get("tabId") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(RpcError::MissingParam("tabId")),
    }
}

fn str_param<'a>(params: &'a Value, key: &'static str) -> Result<&'a str, RpcError> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or(RpcError::MissingParam(key))
}

fn optional_str(params: &Value, key: &str) -> Option<String> {
    params.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

fn direction_param(params: &Value) -> Result<Direction, RpcError> {
    str_param(params, "direction")?
        .parse()
        .map_err(|e| RpcError::InvalidParam("direction", e))
}

fn index_param(params: &Value) -> Result<usize, RpcError> {
    let raw = params.get("index").ok_or(RpcError::MissingParam("index"))?;
    raw.as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| RpcError::InvalidParam("index", raw.to_string()))
}

fn host_param(params: &Value) -> HostSessionState {
    HostSessionState {
        can_go_back: params
            .get("hostCanGoBack")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        can_go_forward: params
            .get("hostCanGoForward")
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
    }
}

fn decision_to_json(
    app: &App,
    tab_id: &str,
    decision: NavigationDecision,
) -> Result<Value, RpcError> {
    let state = serde_json::to_value(app.history.get_state(tab_id))?;
    Ok(match decision {
        NavigationDecision::Load(entry) => {
            json!({"action": "load", "entry": serde_json::to_value(entry)?, "state": state})
        }
        NavigationDecision::Native => json!({"action": "native", "state": state}),
        NavigationDecision::Blocked => json!({"action": "blocked", "state": state}),
    })
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, RpcError> {
    let mut a = app.lock().map_err(|_| RpcError::LockPoisoned)?;

    match method {
        // ─── History ───
        "history.add-entry" => {
            let tab_id = tab_id_param(params)?;
            let url = str_param(params, "url")?;
            if url.trim().is_empty() {
                return Err(RpcError::InvalidParam("url", "empty".to_string()));
            }
            let input = EntryInput {
                url: url.to_string(),
                title: optional_str(params, "title"),
                favicon: optional_str(params, "favicon"),
            };
            let state = a.record_navigation(&tab_id, &input);
            Ok(serde_json::to_value(state)?)
        }
        "history.get-stack" => {
            let tab_id = tab_id_param(params)?;
            let direction = direction_param(params)?;
            Ok(serde_json::to_value(a.history.get_stack(&tab_id, direction))?)
        }
        "history.navigate-to-index" => {
            let tab_id = tab_id_param(params)?;
            let direction = direction_param(params)?;
            let index = index_param(params)?;
            let result = a.history.navigate_to_index(&tab_id, direction, index);
            Ok(serde_json::to_value(result)?)
        }
        "history.get-state" => {
            let tab_id = tab_id_param(params)?;
            Ok(serde_json::to_value(a.history.get_state(&tab_id))?)
        }
        "history.clear-tab" => {
            let tab_id = tab_id_param(params)?;
            Ok(json!(a.history.clear_tab(&tab_id)))
        }

        // ─── Navigation (managed stack with host fallback) ───
        "nav.capabilities" => {
            let tab_id = tab_id_param(params)?;
            let host = host_param(params);
            let caps = a.navigator().capabilities(&tab_id, &host);
            Ok(serde_json::to_value(caps)?)
        }
        "nav.back" | "nav.forward" => {
            let tab_id = tab_id_param(params)?;
            let host = host_param(params);
            let decision = if method == "nav.back" {
                a.navigator().go_back(&tab_id, &host)
            } else {
                a.navigator().go_forward(&tab_id, &host)
            };
            decision_to_json(&a, &tab_id, decision)
        }

        // ─── Tabs ───
        "tab.create" => {
            let url = params.get("url").and_then(|v| v.as_str());
            let active = params.get("active").and_then(|v| v.as_bool()).unwrap_or(true);
            let id = match params.get("tabId") {
                Some(_) => {
                    let id = tab_id_param(params)?;
                    a.tab_manager.register_tab(&id, url)?;
                    if active {
                        a.tab_manager.switch_tab(&id)?;
                    }
                    id
                }
                None => a.tab_manager.create_tab(url, active),
            };
            Ok(json!({"id": id}))
        }
        "tab.close" => {
            let tab_id = tab_id_param(params)?;
            a.close_tab(&tab_id)?;
            Ok(json!({"ok": true}))
        }
        "tab.switch" => {
            let tab_id = tab_id_param(params)?;
            a.tab_manager.switch_tab(&tab_id)?;
            Ok(json!({"ok": true}))
        }
        "tab.list" => {
            let active = a.tab_manager.get_active_tab().map(|t| t.id.clone());
            let tabs = serde_json::to_value(a.tab_manager.get_all_tabs())?;
            Ok(json!({"tabs": tabs, "activeTabId": active}))
        }

        // ─── Ping ───
        "ping" => Ok(json!({"pong": true})),

        _ => Err(RpcError::UnknownMethod(method.to_string())),
    }
}
