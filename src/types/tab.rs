use serde::{Deserialize, Serialize};

/// A browser tab known to the tab registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: String,
    pub url: String,
    pub title: String,
    pub created_at: i64,
}
