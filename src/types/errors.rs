use thiserror::Error;

// === TabError ===

/// Errors related to tab registry operations.
#[derive(Debug, Error)]
pub enum TabError {
    /// Tab with the given ID was not found.
    #[error("Tab not found: {0}")]
    NotFound(String),
    /// A tab with the given ID already exists.
    #[error("Tab already exists: {0}")]
    AlreadyExists(String),
}

// === ConfigError ===

/// Errors related to loading history configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the config file.
    #[error("Config I/O error: {0}")]
    Io(String),
    /// The config file is not valid JSON for `HistoryConfig`.
    #[error("Config parse error: {0}")]
    Parse(String),
    /// A config value is out of range.
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

// === RpcError ===

/// Errors produced while dispatching a JSON-RPC request.
#[derive(Debug, Error)]
pub enum RpcError {
    /// A required parameter was absent or had the wrong JSON type.
    #[error("missing {0}")]
    MissingParam(&'static str),
    /// A parameter was present but its value was rejected.
    #[error("invalid {0}: {1}")]
    InvalidParam(&'static str, String),
    /// The method name is not recognized.
    #[error("unknown method: {0}")]
    UnknownMethod(String),
    /// The tab registry rejected the request.
    #[error(transparent)]
    Tab(#[from] TabError),
    /// A result could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// The application state lock was poisoned.
    #[error("lock poisoned")]
    LockPoisoned,
}
