use crate::pathway::{
    AnalyticsSpec, DynamicDataSpec, FineTuningExample, FlowControl, ModelOptions, Node, NodeData,
    NodeKind, ToolSpec, VariableSpec, VoiceSettings, WebhookPayload,
};

/// Immutable fluent builder for a single conversation node.
///
/// Every setter consumes the builder and returns a new one, so call sites
/// compose without shared mutable state. Building is pure: no id is
/// allocated here — `GraphBuilder::add_node` assigns ids so they are unique
/// within one assembly.
///
/// A node may be the start node and carry a webhook/knowledge-base/transfer
/// payload at the same time, and a global node may also participate in
/// explicit edges; nothing here forbids either combination.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    kind: NodeKind,
    data: NodeData,
}

impl NodeBuilder {
    pub fn new(kind: NodeKind, name: impl Into<String>) -> Self {
        let mut data = NodeData::empty(kind);
        data.name = name.into();
        Self { kind, data }
    }

    /// Flags this node as the pathway's entry point.
    pub fn start(mut self) -> Self {
        self.data.is_start = true;
        self
    }

    /// Flags this node as reachable from any conversation state. The label
    /// tells the execution engine when to jump here.
    pub fn global(mut self, label: impl Into<String>) -> Self {
        self.data.is_global = true;
        self.data.global_label = Some(label.into());
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.data.prompt = Some(prompt.into());
        self
    }

    /// Static text spoken verbatim instead of a generated response.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.data.text = Some(text.into());
        self
    }

    /// Guard that must hold before the node counts as satisfied.
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.data.condition = Some(condition.into());
        self
    }

    pub fn extract(mut self, var: VariableSpec) -> Self {
        self.data.extract_vars.push(var);
        self
    }

    pub fn extract_all(mut self, vars: impl IntoIterator<Item = VariableSpec>) -> Self {
        self.data.extract_vars.extend(vars);
        self
    }

    pub fn webhook(mut self, payload: WebhookPayload) -> Self {
        self.data.webhook = Some(payload);
        self
    }

    pub fn knowledge_base(mut self, content: impl Into<String>) -> Self {
        self.data.knowledge_base = Some(content.into());
        self
    }

    pub fn transfer(mut self, number: impl Into<String>) -> Self {
        self.data.transfer_number = Some(number.into());
        self
    }

    pub fn dynamic_data(mut self, spec: DynamicDataSpec) -> Self {
        self.data.dynamic_data.push(spec);
        self
    }

    pub fn tool(mut self, spec: ToolSpec) -> Self {
        self.data.tools.push(spec);
        self
    }

    pub fn voice(mut self, settings: VoiceSettings) -> Self {
        self.data.voice_settings = Some(settings);
        self
    }

    pub fn model(mut self, options: ModelOptions) -> Self {
        self.data.model_options = Some(options);
        self
    }

    pub fn flow_control(mut self, limits: FlowControl) -> Self {
        self.data.flow_control = Some(limits);
        self
    }

    pub fn analytics(mut self, spec: AnalyticsSpec) -> Self {
        self.data.analytics = Some(spec);
        self
    }

    pub fn fine_tuning(mut self, example: FineTuningExample) -> Self {
        self.data.fine_tuning_examples.push(example);
        self
    }

    /// Finalizes the node under the given id. The kind stays mirrored in the
    /// data record because the execution engine reads it from both places.
    pub(crate) fn build(self, id: String) -> Node {
        Node {
            id,
            kind: self.kind,
            data: self.data,
        }
    }
}
