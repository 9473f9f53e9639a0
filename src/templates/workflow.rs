use crate::build::{GraphBuilder, NodeBuilder};
use crate::error::TemplateError;
use crate::pathway::{NodeKind, Pathway, VariableSpec};
use serde::Deserialize;

/// One step of a custom workflow.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowStep {
    pub name: String,
    pub prompt: String,
    /// Variables the agent must capture before this step is complete,
    /// accepted in the same `[name, type, description, required?]` tuple
    /// form the wire format uses.
    #[serde(default)]
    pub variables: Vec<VariableSpec>,
}

/// Input for the generic custom workflow template.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowConfig {
    pub name: String,
    pub greeting: String,
    /// Steps are chained in order; an empty list is valid and yields
    /// greeting → closing → terminal.
    #[serde(default)]
    pub steps: Vec<WorkflowStep>,
    #[serde(default)]
    pub closing: Option<String>,
}

/// Builds a generic sequential workflow: greeting, the caller-supplied steps
/// chained in order, a closing node, and a single terminal. A global help
/// node keeps orientation available at every step.
pub fn workflow_pathway(config: &WorkflowConfig) -> Result<Pathway, TemplateError> {
    if config.name.trim().is_empty() {
        return Err(TemplateError::MissingField { field: "name" });
    }
    if config.greeting.trim().is_empty() {
        return Err(TemplateError::MissingField { field: "greeting" });
    }

    let mut g = GraphBuilder::new();

    let greeting = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Greeting")
            .start()
            .prompt(config.greeting.clone()),
    );

    let mut previous = greeting.clone();
    let mut previous_label = "ready to begin".to_string();
    for step in &config.steps {
        if step.name.trim().is_empty() {
            return Err(TemplateError::MissingField { field: "step name" });
        }
        if step.prompt.trim().is_empty() {
            return Err(TemplateError::MissingField { field: "step prompt" });
        }
        let node = g.add_node(
            NodeBuilder::new(NodeKind::Default, step.name.clone())
                .prompt(step.prompt.clone())
                .extract_all(step.variables.iter().cloned()),
        );
        g.connect(&previous, &node, &previous_label);
        previous = node;
        previous_label = format!("{} complete", step.name.to_lowercase());
    }

    let closing = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Closing").prompt(
            config
                .closing
                .clone()
                .unwrap_or_else(|| "Summarize the call and thank the caller.".to_string()),
        ),
    );
    g.connect(&previous, &closing, &previous_label);

    let terminal = g.add_node(
        NodeBuilder::new(NodeKind::EndCall, "Call Complete")
            .prompt("Say goodbye and end the call."),
    );
    g.connect(&closing, &terminal, "conversation complete");

    g.add_node(
        NodeBuilder::new(NodeKind::Default, "Help")
            .global("caller asks for help or sounds confused")
            .prompt("Explain where the caller is in the process and continue."),
    );

    let pathway = g.finish(
        config.name.clone(),
        format!("Custom workflow pathway: {}", config.name),
    )?;
    Ok(pathway)
}
