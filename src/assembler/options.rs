use ahash::AHashMap;
use serde::Deserialize;

/// Descriptor for a webhook integration the pathway should call out to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookIntegration {
    pub name: String,
    pub url: String,
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
    #[serde(default)]
    pub headers: Option<AHashMap<String, String>>,
}

fn default_method() -> String {
    "POST".to_string()
}

/// Descriptor for a knowledge-base lookup entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseEntry {
    pub name: String,
    pub content: String,
    #[serde(default)]
    pub trigger_phrases: Vec<String>,
}

/// Descriptor for a call-transfer target.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferTarget {
    pub name: String,
    pub number: String,
    #[serde(default)]
    pub conditions: Vec<String>,
}

/// Per-assembly feature toggles. All off by default.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeatureToggles {
    /// Attach declarative real-time data fetches to concept nodes.
    pub dynamic_data: bool,
    /// Attach callable-tool specs to concept nodes.
    pub tools: bool,
    /// Attach model/voice tuning to the hub and concept nodes.
    pub ai_features: bool,
    /// Attach fine-tuning examples to concept nodes.
    pub fine_tuning: bool,
    /// Attach analytics/event-tracking declarations.
    pub analytics: bool,
}

/// The full options bag accepted by [`assemble`](crate::assembler::assemble).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssembleOptions {
    pub webhooks: Vec<WebhookIntegration>,
    pub knowledge_bases: Vec<KnowledgeBaseEntry>,
    pub transfers: Vec<TransferTarget>,
    pub features: FeatureToggles,
    /// Adds a global help node enterable from any state. Off by default so
    /// the node count of an assembly stays exactly
    /// `1 + concepts + webhooks + knowledge bases + transfers + 2`.
    pub global_help: bool,
}
