use serde::Serialize;

/// An integration descriptor that was skipped during assembly, with the
/// reason. Skips are surfaced here rather than aborting the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedIntegration {
    pub name: String,
    pub reason: String,
}

/// What the assembler actually wired, against what was requested.
///
/// A caller comparing requested and wired counts can tell whether any
/// malformed descriptor was dropped; nothing is ever dropped silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct BuildSummary {
    pub domain: String,
    pub purpose: String,
    pub concepts_wired: usize,
    pub webhooks_requested: usize,
    pub webhooks_wired: usize,
    pub knowledge_bases_requested: usize,
    pub knowledge_bases_wired: usize,
    pub transfers_requested: usize,
    pub transfers_wired: usize,
    pub skipped: Vec<SkippedIntegration>,
}

impl BuildSummary {
    /// True when every requested integration made it into the graph.
    pub fn all_wired(&self) -> bool {
        self.skipped.is_empty()
    }
}
