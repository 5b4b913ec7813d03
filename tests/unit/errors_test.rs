use tabhistory::types::errors::*;

// === TabError Tests ===

#[test]
fn tab_error_display_variants() {
    assert_eq!(TabError::NotFound("tab-123".to_string()).to_string(), "Tab not found: tab-123");
    assert_eq!(
        TabError::AlreadyExists("tab-456".to_string()).to_string(),
        "Tab already exists: tab-456"
    );
}

#[test]
fn tab_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(TabError::NotFound("id".to_string()));
    assert!(err.source().is_none());
}

// === ConfigError Tests ===

#[test]
fn config_error_display_variants() {
    assert_eq!(ConfigError::Io("denied".to_string()).to_string(), "Config I/O error: denied");
    assert_eq!(ConfigError::Parse("eof".to_string()).to_string(), "Config parse error: eof");
    assert_eq!(
        ConfigError::InvalidValue("max_entries".to_string()).to_string(),
        "Invalid config value: max_entries"
    );
}

// === RpcError Tests ===

#[test]
fn rpc_error_display_variants() {
    assert_eq!(RpcError::MissingParam("tabId").to_string(), "missing tabId");
    assert_eq!(
        RpcError::InvalidParam("direction", "sideways".to_string()).to_string(),
        "invalid direction: sideways"
    );
    assert_eq!(
        RpcError::UnknownMethod("history.nope".to_string()).to_string(),
        "unknown method: history.nope"
    );
}

#[test]
fn rpc_error_wraps_tab_error_transparently() {
    let err: RpcError = TabError::NotFound("t9".to_string()).into();
    assert_eq!(err.to_string(), "Tab not found: t9");
}
