//! The graph assembler: orchestrates the classifier and the node/edge
//! builders into a complete pathway.

mod concepts;
pub mod options;
pub mod summary;

pub use options::*;
pub use summary::*;

use crate::build::{GraphBuilder, NodeBuilder};
use crate::error::PathwayError;
use crate::intent::{Classification, classify};
use crate::pathway::{
    AnalyticsSpec, FineTuningExample, FlowControl, ModelOptions, NodeKind, Pathway, VariableSpec,
    VoiceSettings, WebhookPayload,
};
use concepts::{concept_dynamic_data, concept_prompt, concept_title, concept_tool,
    concept_variables};
use itertools::Itertools;
use tracing::{debug, warn};

/// A finished pathway plus the summary of what was wired into it.
#[derive(Debug, Clone)]
pub struct AssembledPathway {
    pub pathway: Pathway,
    pub summary: BuildSummary,
}

/// Builds a complete pathway from a free-text description and an options
/// bag.
///
/// The shape is always: one start hub that fans out to a node per detected
/// concept and per configured integration, a shared resolution node every
/// branch converges on, and a single End Call terminal. The edge from the
/// resolution node back to the hub is the only cycle in the graph and models
/// a caller with additional requests.
///
/// Malformed integration descriptors (a webhook without a URL, an empty
/// knowledge base, a transfer without a number) are skipped, logged, and
/// reported in the returned [`BuildSummary`] — the build itself never aborts
/// for them. A description that matches nothing still produces the valid
/// degenerate hub → resolution → terminal graph.
pub fn assemble(
    name: &str,
    description: &str,
    options: &AssembleOptions,
) -> Result<AssembledPathway, PathwayError> {
    let classification = classify(description, name);
    debug!(
        domain = %classification.domain.label,
        purpose = %classification.purpose,
        concepts = classification.concepts.len(),
        "classified pathway description"
    );

    let mut graph = GraphBuilder::new();
    let mut summary = BuildSummary {
        domain: classification.domain.label.clone(),
        purpose: classification.purpose.clone(),
        webhooks_requested: options.webhooks.len(),
        knowledge_bases_requested: options.knowledge_bases.len(),
        transfers_requested: options.transfers.len(),
        ..BuildSummary::default()
    };

    let hub = add_hub(&mut graph, &classification, options);

    // Every fan-out node gets exactly one completion edge into the shared
    // resolution node, collected here.
    let mut fan_out: Vec<String> = Vec::new();

    add_concept_nodes(&mut graph, &hub, &classification, options, &mut fan_out);
    summary.concepts_wired = classification.concepts.len();

    add_webhook_nodes(&mut graph, &hub, options, &mut summary, &mut fan_out);
    add_knowledge_base_nodes(&mut graph, &hub, options, &mut summary, &mut fan_out);
    add_transfer_nodes(&mut graph, &hub, options, &mut summary, &mut fan_out);

    let resolution = graph.add_node(
        NodeBuilder::new(NodeKind::Default, "Resolution Check")
            .prompt(
                "Confirm the caller's request has been handled. Ask whether \
                 there is anything else they need before wrapping up.",
            )
            .extract_all([
                VariableSpec::required(
                    "satisfaction",
                    "string",
                    "Whether the caller's request was resolved",
                ),
                VariableSpec::optional("next_step", "string", "Agreed follow-up, if any"),
            ]),
    );
    let terminal = graph.add_node(
        NodeBuilder::new(NodeKind::EndCall, "Call Complete")
            .prompt("Thank the caller for their time and end the call politely."),
    );

    if fan_out.is_empty() {
        // Degenerate case: nothing was detected or configured, so the hub
        // routes straight to resolution.
        graph.connect(&hub, &resolution, "caller's request has been discussed");
    }
    for node_id in &fan_out {
        graph.connect(node_id, &resolution, "request handled");
    }
    graph.connect_described(
        &resolution,
        &terminal,
        "satisfied",
        "caller confirmed their request was resolved",
    );
    // The only cycle in the graph: a caller with more requests returns to
    // the hub.
    graph.connect(&resolution, &hub, "additional needs");

    if options.global_help {
        graph.add_node(
            NodeBuilder::new(NodeKind::Default, "Help")
                .global("caller asks for help or sounds confused")
                .prompt(
                    "The caller needs a moment of orientation. Explain what \
                     you can help with and return to their request.",
                ),
        );
    }

    let pathway = graph.finish(name, description)?;
    Ok(AssembledPathway { pathway, summary })
}

fn add_hub(
    graph: &mut GraphBuilder,
    classification: &Classification,
    options: &AssembleOptions,
) -> String {
    let domain = &classification.domain;
    let mut prompt = format!(
        "You are a voice assistant for {}, focused on {}. Greet the caller \
         warmly, find out what they need, and route the conversation.",
        domain.label, classification.purpose
    );
    if !classification.concepts.is_empty() {
        let topics = classification
            .concepts
            .iter()
            .map(|c| c.description.as_str())
            .join("; ");
        prompt.push_str(&format!(" You can help with: {}.", topics));
    }

    let mut hub = NodeBuilder::new(NodeKind::Default, "Main Greeting")
        .start()
        .prompt(prompt)
        .extract_all([
            VariableSpec::required(
                format!("{}_need", domain.slug),
                "string",
                format!("What the caller needs from {}", domain.label),
            ),
            VariableSpec::required(
                "customer_category",
                "string",
                "Which kind of caller this is",
            ),
            VariableSpec::optional("urgency_level", "string", "How urgent the request is"),
            VariableSpec::optional("budget_range", "string", "Caller's budget, if mentioned"),
        ]);

    if options.features.ai_features {
        hub = hub
            .model(ModelOptions {
                temperature: Some(0.6),
                sympathetic: true,
                use_fillers: true,
            })
            .voice(VoiceSettings {
                speed: Some(1.0),
                interruption_threshold: Some(120),
                stability: Some(0.7),
            });
    }
    if options.features.analytics {
        hub = hub.analytics(AnalyticsSpec {
            events: vec!["call_started".to_string()],
            tracked_variables: vec![
                "customer_category".to_string(),
                "urgency_level".to_string(),
            ],
        });
    }

    graph.add_node(hub)
}

fn add_concept_nodes(
    graph: &mut GraphBuilder,
    hub: &str,
    classification: &Classification,
    options: &AssembleOptions,
    fan_out: &mut Vec<String>,
) {
    let domain = &classification.domain;
    for concept in &classification.concepts {
        let mut builder = NodeBuilder::new(NodeKind::Default, concept_title(concept))
            .prompt(concept_prompt(concept, domain))
            .condition("every required variable for this topic has been captured")
            .extract_all(concept_variables(&concept.slug, domain))
            .flow_control(FlowControl {
                max_retries: 2,
                timeout_secs: 90,
                escalation_threshold: Some(3),
            });

        if options.features.dynamic_data {
            builder = builder.dynamic_data(concept_dynamic_data(&concept.slug, domain));
        }
        if options.features.tools {
            builder = builder.tool(concept_tool(&concept.slug, domain));
        }
        if options.features.ai_features {
            builder = builder.model(ModelOptions {
                temperature: Some(0.5),
                sympathetic: concept.slug == "urgent_assistance",
                use_fillers: false,
            });
        }
        if options.features.fine_tuning {
            builder = builder.fine_tuning(FineTuningExample {
                utterance: format!("I'm calling about {}", concept.description),
                chosen_node: None,
                condition_result: Some(true),
                expected_response: Some(format!(
                    "Happy to help with {}.",
                    concept.description
                )),
            });
        }
        if options.features.analytics {
            builder = builder.analytics(AnalyticsSpec {
                events: vec![format!("{}_entered", concept.slug)],
                tracked_variables: concept_variables(&concept.slug, domain)
                    .into_iter()
                    .map(|v| v.name)
                    .collect(),
            });
        }

        let id = graph.add_node(builder);
        graph.connect(hub, &id, &concept.condition);
        fan_out.push(id);
    }
}

fn add_webhook_nodes(
    graph: &mut GraphBuilder,
    hub: &str,
    options: &AssembleOptions,
    summary: &mut BuildSummary,
    fan_out: &mut Vec<String>,
) {
    for webhook in &options.webhooks {
        if webhook.url.trim().is_empty() {
            warn!(name = %webhook.name, "skipping webhook integration without a URL");
            summary.skipped.push(SkippedIntegration {
                name: webhook.name.clone(),
                reason: "webhook URL is empty".to_string(),
            });
            continue;
        }
        let id = graph.add_node(
            NodeBuilder::new(NodeKind::Webhook, &webhook.name)
                .prompt(format!(
                    "Let the caller know you are looking that up via {}.",
                    webhook.name
                ))
                .webhook(WebhookPayload {
                    url: webhook.url.clone(),
                    method: webhook.method.clone(),
                    body: webhook.body.clone(),
                    headers: webhook.headers.clone(),
                }),
        );
        graph.connect(hub, &id, &format!("needs {}", webhook.name));
        fan_out.push(id);
        summary.webhooks_wired += 1;
    }
}

fn add_knowledge_base_nodes(
    graph: &mut GraphBuilder,
    hub: &str,
    options: &AssembleOptions,
    summary: &mut BuildSummary,
    fan_out: &mut Vec<String>,
) {
    for entry in &options.knowledge_bases {
        if entry.content.trim().is_empty() {
            warn!(name = %entry.name, "skipping knowledge base entry without content");
            summary.skipped.push(SkippedIntegration {
                name: entry.name.clone(),
                reason: "knowledge base content is empty".to_string(),
            });
            continue;
        }
        let label = if entry.trigger_phrases.is_empty() {
            format!("questions about {}", entry.name)
        } else {
            entry.trigger_phrases.iter().join(" or ")
        };
        let id = graph.add_node(
            NodeBuilder::new(NodeKind::KnowledgeBase, &entry.name)
                .prompt(format!(
                    "Answer the caller's question using the {} knowledge base.",
                    entry.name
                ))
                .knowledge_base(entry.content.clone()),
        );
        graph.connect(hub, &id, &label);
        fan_out.push(id);
        summary.knowledge_bases_wired += 1;
    }
}

fn add_transfer_nodes(
    graph: &mut GraphBuilder,
    hub: &str,
    options: &AssembleOptions,
    summary: &mut BuildSummary,
    fan_out: &mut Vec<String>,
) {
    for target in &options.transfers {
        if target.number.trim().is_empty() {
            warn!(name = %target.name, "skipping transfer target without a number");
            summary.skipped.push(SkippedIntegration {
                name: target.name.clone(),
                reason: "transfer number is empty".to_string(),
            });
            continue;
        }
        let label = if target.conditions.is_empty() {
            format!("needs to speak with {}", target.name)
        } else {
            target.conditions.iter().join(" or ")
        };
        let id = graph.add_node(
            NodeBuilder::new(NodeKind::Transfer, &target.name)
                .prompt(format!(
                    "Tell the caller you are connecting them with {}.",
                    target.name
                ))
                .transfer(target.number.clone()),
        );
        graph.connect(hub, &id, &label);
        fan_out.push(id);
        summary.transfers_wired += 1;
    }
}
