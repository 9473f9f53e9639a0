use ahash::AHashMap;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The discriminant for the six conversation node variants the execution
/// platform understands. Serialized as the platform's display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Default,
    Webhook,
    #[serde(rename = "Knowledge Base")]
    KnowledgeBase,
    #[serde(rename = "Transfer Call")]
    Transfer,
    #[serde(rename = "End Call")]
    EndCall,
    #[serde(rename = "Wait for Response")]
    WaitForResponse,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Default => "Default",
            NodeKind::Webhook => "Webhook",
            NodeKind::KnowledgeBase => "Knowledge Base",
            NodeKind::Transfer => "Transfer Call",
            NodeKind::EndCall => "End Call",
            NodeKind::WaitForResponse => "Wait for Response",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single conversation variable the agent must capture while in a node.
///
/// The wire format encodes these as `[name, type, description, required]`
/// tuples, which is what the remote pathway service expects.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSpec {
    pub name: String,
    pub semantic_type: String,
    pub description: String,
    pub required: bool,
}

impl VariableSpec {
    pub fn required(
        name: impl Into<String>,
        semantic_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            semantic_type: semantic_type.into(),
            description: description.into(),
            required: true,
        }
    }

    pub fn optional(
        name: impl Into<String>,
        semantic_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            semantic_type: semantic_type.into(),
            description: description.into(),
            required: false,
        }
    }
}

impl Serialize for VariableSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(4))?;
        seq.serialize_element(&self.name)?;
        seq.serialize_element(&self.semantic_type)?;
        seq.serialize_element(&self.description)?;
        seq.serialize_element(&self.required)?;
        seq.end()
    }
}

impl<'de> Deserialize<'de> for VariableSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TupleVisitor;

        impl<'de> Visitor<'de> for TupleVisitor {
            type Value = VariableSpec;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a [name, type, description, required?] tuple")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let name: String = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
                let semantic_type: String = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
                let description: String = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::invalid_length(2, &self))?;
                // The fourth element is optional; a missing flag means required.
                let required: bool = seq.next_element()?.unwrap_or(true);
                Ok(VariableSpec {
                    name,
                    semantic_type,
                    description,
                    required,
                })
            }
        }

        deserializer.deserialize_seq(TupleVisitor)
    }
}

/// Type-specific payload for `Webhook` nodes. Flattened into the node's
/// data record on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub url: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<AHashMap<String, String>>,
}

/// Maps one field of an external response onto a conversation variable via a
/// JSONPath expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMapping {
    pub name: String,
    /// JSONPath into the response body, e.g. `$.plans[0].monthly_premium`.
    pub data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// A declarative real-time data fetch bound to conversation variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicDataSpec {
    pub url: String,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_data: Vec<ResponseMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_fallback: Option<serde_json::Value>,
}

/// A callable tool the agent may invoke while in a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    /// JSON-schema description of the tool's input.
    pub input_schema: serde_json::Value,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_variables: Vec<ResponseMapping>,
}

/// One fine-tuning example: a caller utterance and the routing outcome the
/// execution engine should learn from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FineTuningExample {
    pub utterance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chosen_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_result: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_response: Option<String>,
}

/// Voice tuning parameters forwarded verbatim to the execution platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interruption_threshold: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,
}

/// Model behavior flags for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sympathetic: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub use_fillers: bool,
}

/// Retry/timeout/escalation limits for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowControl {
    pub max_retries: u32,
    pub timeout_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub escalation_threshold: Option<u32>,
}

/// Event-tracking declarations for a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSpec {
    pub events: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tracked_variables: Vec<String>,
}

/// The full per-node configuration record, mirrored into the wire format's
/// `data` object. The node kind is duplicated here because the execution
/// engine expects it both on the node and inside `data`.
///
/// Every optional feature family is an owned sub-record rather than a spread
/// of nullable fields, so construction and validation stay composable.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "is_false")]
    pub is_start: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_global: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extract_vars: Vec<VariableSpec>,
    #[serde(flatten)]
    pub webhook: Option<WebhookPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub knowledge_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_number: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dynamic_data: Vec<DynamicDataSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<VoiceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_options: Option<ModelOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_control: Option<FlowControl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analytics: Option<AnalyticsSpec>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fine_tuning_examples: Vec<FineTuningExample>,
}

fn is_false(v: &bool) -> bool {
    !v
}

impl NodeData {
    /// An empty data record of the given kind. `name` falls back to the
    /// empty string and is never absent on the wire.
    pub fn empty(kind: NodeKind) -> Self {
        Self {
            name: String::new(),
            kind,
            is_start: false,
            is_global: false,
            global_label: None,
            prompt: None,
            text: None,
            condition: None,
            extract_vars: Vec::new(),
            webhook: None,
            knowledge_base: None,
            transfer_number: None,
            dynamic_data: Vec::new(),
            tools: Vec::new(),
            voice_settings: None,
            model_options: None,
            flow_control: None,
            analytics: None,
            fine_tuning_examples: Vec::new(),
        }
    }

    /// Whether the kind-specific payload this record needs is populated.
    pub fn has_required_payload(&self) -> bool {
        match self.kind {
            NodeKind::Webhook => self
                .webhook
                .as_ref()
                .is_some_and(|w| !w.url.trim().is_empty()),
            NodeKind::KnowledgeBase => self
                .knowledge_base
                .as_ref()
                .is_some_and(|kb| !kb.trim().is_empty()),
            NodeKind::Transfer => self
                .transfer_number
                .as_ref()
                .is_some_and(|n| !n.trim().is_empty()),
            _ => true,
        }
    }
}

/// One vertex of a pathway graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub data: NodeData,
}

impl Node {
    pub fn is_start(&self) -> bool {
        self.data.is_start
    }

    pub fn is_global(&self) -> bool {
        self.data.is_global
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }
}
