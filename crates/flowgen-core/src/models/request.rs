use super::payload::Payload;
use super::workflow::Workflow;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Base URL used in snippets when the caller does not supply one
pub const DEFAULT_BASE_URL: &str = "https://forty-needles-draw.loca.lt";

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CodeRequest {
    pub workflow: Workflow,
    /// Kept as a raw string so unknown identifiers surface as
    /// `UnsupportedLanguage` instead of a deserialization failure
    pub language: String,
    #[serde(default, alias = "baseUrl", skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub base_url: Option<String>,
}

impl CodeRequest {
    /// Base URL to render, falling back to the default when absent or blank
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CodeResponse {
    pub code: String,
    pub payload: Payload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PayloadResponse {
    pub payload: Payload,
}
