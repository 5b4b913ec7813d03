// Tab history shared type definitions
// Each submodule defines types used across the store, the registry and the RPC layer.

pub mod config;
pub mod errors;
pub mod history;
pub mod tab;
