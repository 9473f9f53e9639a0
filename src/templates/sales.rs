use crate::build::{GraphBuilder, NodeBuilder};
use crate::error::TemplateError;
use crate::pathway::{NodeKind, Pathway, VariableSpec};
use serde::Deserialize;

/// Input for the sales qualification template.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesConfig {
    pub company: String,
    pub product: String,
    /// Lead score at or above which the caller takes the high-value path.
    #[serde(default = "default_high")]
    pub high_value_threshold: u32,
    /// Lead score at or above which the caller is qualified for follow-up.
    /// Must be below `high_value_threshold`.
    #[serde(default = "default_qualified")]
    pub qualified_threshold: u32,
    /// Where the global escalation node transfers to, when given.
    #[serde(default)]
    pub escalation_number: Option<String>,
}

fn default_high() -> u32 {
    50
}

fn default_qualified() -> u32 {
    40
}

/// Builds a fixed sales-qualification pathway: greeting, discovery,
/// scoring, then three score-labeled branches (high-value demo, qualified
/// follow-up, nurture) that all converge on one wrap-up node and a single
/// terminal.
pub fn sales_pathway(config: &SalesConfig) -> Result<Pathway, TemplateError> {
    if config.company.trim().is_empty() {
        return Err(TemplateError::MissingField { field: "company" });
    }
    if config.product.trim().is_empty() {
        return Err(TemplateError::MissingField { field: "product" });
    }
    // The qualified band is [qualified, high_value - 1]; an inverted or
    // collapsed ordering would produce nonsense branch labels.
    if config.qualified_threshold >= config.high_value_threshold {
        return Err(TemplateError::InvalidThresholds {
            qualified: config.qualified_threshold,
            high_value: config.high_value_threshold,
        });
    }

    let mut g = GraphBuilder::new();

    let greeting = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Greeting")
            .start()
            .prompt(format!(
                "You are a sales representative for {}. Greet the caller, \
                 introduce {}, and gauge their interest.",
                config.company, config.product
            ))
            .extract_all([
                VariableSpec::required("caller_name", "string", "Caller's name"),
                VariableSpec::required("interest_level", "string", "Initial interest level"),
            ]),
    );

    let discovery = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Discovery")
            .prompt(format!(
                "Ask open questions to understand whether {} fits the \
                 caller's situation: budget, decision authority, concrete \
                 need, and timeline.",
                config.product
            ))
            .extract_all([
                VariableSpec::required("budget", "number", "Available budget in dollars"),
                VariableSpec::required("authority", "string", "Who makes the purchase decision"),
                VariableSpec::required("need", "string", "The concrete problem to solve"),
                VariableSpec::required("timeline", "string", "When they want to decide"),
            ]),
    );
    g.connect(&greeting, &discovery, "caller is interested");

    let scoring = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Qualification")
            .prompt(
                "Summarize what you learned and assign a lead score from 0 \
                 to 100 based on budget, authority, need, and timeline.",
            )
            .extract_all([
                VariableSpec::required("lead_score", "number", "Lead score from 0 to 100"),
                VariableSpec::optional("qualification_notes", "string", "Scoring rationale"),
            ]),
    );
    g.connect(&discovery, &scoring, "discovery questions answered");

    let high_value = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Demo Scheduling")
            .prompt(format!(
                "This is a high-value lead. Offer a live demo of {} and \
                 lock in a time.",
                config.product
            ))
            .extract_all([
                VariableSpec::required("demo_datetime", "string", "Agreed demo date and time"),
                VariableSpec::optional("attendees", "string", "Who will attend the demo"),
            ]),
    );
    g.connect(
        &scoring,
        &high_value,
        &format!("lead score is {} or higher", config.high_value_threshold),
    );

    let qualified = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Follow-up Scheduling")
            .prompt(
                "This lead is qualified but not ready for a demo. Agree on \
                 a follow-up call and the caller's preferred channel.",
            )
            .extract_all([
                VariableSpec::required("followup_datetime", "string", "Agreed follow-up time"),
                VariableSpec::optional("preferred_channel", "string", "Phone or email"),
            ]),
    );
    g.connect(
        &scoring,
        &qualified,
        &format!(
            "lead score is between {} and {}",
            config.qualified_threshold,
            config.high_value_threshold.saturating_sub(1)
        ),
    );

    let nurture = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Nurture")
            .prompt(
                "This lead is not ready yet. Offer to send material by \
                 email and capture their address.",
            )
            .extract(VariableSpec::required("email", "email", "Caller's email address")),
    );
    g.connect(
        &scoring,
        &nurture,
        &format!("lead score is below {}", config.qualified_threshold),
    );

    let wrapup = g.add_node(
        NodeBuilder::new(NodeKind::Default, "Wrap-up")
            .prompt("Recap the agreed next step and thank the caller."),
    );
    g.connect(&high_value, &wrapup, "demo scheduled");
    g.connect(&qualified, &wrapup, "follow-up scheduled");
    g.connect(&nurture, &wrapup, "email captured");

    let terminal = g.add_node(
        NodeBuilder::new(NodeKind::EndCall, "Call Complete")
            .prompt("Say goodbye and end the call."),
    );
    g.connect(&wrapup, &terminal, "conversation complete");

    match &config.escalation_number {
        Some(number) if !number.trim().is_empty() => {
            g.add_node(
                NodeBuilder::new(NodeKind::Transfer, "Escalate to Sales Manager")
                    .global("caller asks for a human or a manager")
                    .prompt("Tell the caller you are connecting them with a manager.")
                    .transfer(number.clone()),
            );
        }
        _ => {
            g.add_node(
                NodeBuilder::new(NodeKind::Default, "Human Follow-up")
                    .global("caller asks for a human or a manager")
                    .prompt(
                        "Apologize that no one is available right now and \
                         promise a callback from the sales team.",
                    )
                    .extract(VariableSpec::required(
                        "callback_number",
                        "phone",
                        "Best number for the callback",
                    )),
            );
        }
    }

    let pathway = g.finish(
        format!("{} Sales Qualification", config.company),
        format!("Sales qualification pathway for {}", config.product),
    )?;
    Ok(pathway)
}
