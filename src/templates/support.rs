use crate::build::{GraphBuilder, NodeBuilder};
use crate::error::TemplateError;
use crate::pathway::{FlowControl, NodeKind, Pathway, VariableSpec};
use serde::Deserialize;

/// Input for the multi-specialist support template.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportConfig {
    pub company: String,
    /// One specialist branch is created per entry, e.g. "billing",
    /// "technical", "account".
    #[serde(default)]
    pub service_types: Vec<String>,
    /// Number the global escalation node transfers to. Required: a support
    /// line without a human fallback is not a pathway we are willing to
    /// build.
    pub escalation_number: String,
    #[serde(default)]
    pub business_hours: Option<String>,
}

/// Builds a fixed support pathway: triage fans out to one specialist node
/// per service type, every branch converges on a resolution check, and the
/// pathway ends in a single terminal. Help and escalation are global nodes.
pub fn support_pathway(config: &SupportConfig) -> Result<Pathway, TemplateError> {
    if config.company.trim().is_empty() {
        return Err(TemplateError::MissingField { field: "company" });
    }
    if config.escalation_number.trim().is_empty() {
        return Err(TemplateError::MissingField {
            field: "escalation_number",
        });
    }

    let mut g = GraphBuilder::new();

    let mut triage_prompt = format!(
        "You are the support line for {}. Greet the caller, ask what they \
         need help with, and route them to the right specialist.",
        config.company
    );
    if let Some(hours) = &config.business_hours {
        triage_prompt.push_str(&format!(" Business hours: {}.", hours));
    }

    let triage = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Triage")
            .start()
            .prompt(triage_prompt)
            .extract_all([
                VariableSpec::required("issue_summary", "string", "Short summary of the issue"),
                VariableSpec::optional("account_identifier", "string", "Account id or email"),
            ]),
    );

    let resolution = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Resolution Check")
            .prompt(
                "Confirm the issue is resolved or that a clear next step is \
                 agreed. Ask if anything else is needed.",
            )
            .extract(VariableSpec::required(
                "resolved",
                "boolean",
                "Whether the issue was resolved on this call",
            )),
    );

    if config.service_types.is_empty() {
        g.connect(&triage, &resolution, "issue described");
    }
    for service in &config.service_types {
        let specialist = g.add_node(
            NodeBuilder::new(NodeKind::Default, format!("{} Specialist", title_case(service)))
                .prompt(format!(
                    "You are the {} specialist for {}. Work the caller's \
                     issue step by step and capture what you tried.",
                    service, config.company
                ))
                .extract_all([
                    VariableSpec::required(
                        format!("{}_issue_details", slugify(service)),
                        "string",
                        format!("Details of the {} issue", service),
                    ),
                    VariableSpec::optional(
                        "steps_attempted",
                        "string",
                        "Troubleshooting already attempted",
                    ),
                ])
                .flow_control(FlowControl {
                    max_retries: 3,
                    timeout_secs: 180,
                    escalation_threshold: Some(2),
                }),
        );
        g.connect(&triage, &specialist, &format!("caller needs {} support", service));
        g.connect(&specialist, &resolution, "issue worked");
    }

    let terminal = g.add_node(
        NodeBuilder::new(NodeKind::EndCall, "Call Complete")
            .prompt("Thank the caller and close the call."),
    );
    g.connect(&resolution, &terminal, "resolved or next step agreed");

    g.add_node(
        NodeBuilder::new(NodeKind::Default, "Help")
            .global("caller is confused or asks what you can do")
            .prompt(format!(
                "Explain what the {} support line can help with and return \
                 to the caller's issue.",
                config.company
            )),
    );
    g.add_node(
        NodeBuilder::new(NodeKind::Transfer, "Escalate to Agent")
            .global("caller asks for a human agent or is getting frustrated")
            .prompt("Tell the caller you are connecting them with an agent.")
            .transfer(config.escalation_number.clone()),
    );

    let pathway = g.finish(
        format!("{} Support", config.company),
        format!("Multi-specialist support pathway for {}", config.company),
    )?;
    Ok(pathway)
}

fn title_case(s: &str) -> String {
    let mut out = s.to_string();
    if let Some(first) = out.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    out
}

fn slugify(s: &str) -> String {
    s.to_lowercase().replace([' ', '-'], "_")
}
