use serde::Serialize;

/// A labeled directed edge between two node ids.
///
/// The label is the free-text routing condition the execution engine
/// evaluates at runtime to decide whether to take this branch; it is always
/// present on the wire, never null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
