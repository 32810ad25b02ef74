//! Assistant records returned by the assistant extension

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Assistant definition as reported by an [`AssistantProvider`]
///
/// [`AssistantProvider`]: crate::services::AssistantProvider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assistant {
    pub id: String,
    #[serde(default = "default_object")]
    pub object: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Model id the assistant runs on ("*" for any)
    pub model: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub file_ids: Vec<String>,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

fn default_object() -> String {
    "assistant".to_string()
}
