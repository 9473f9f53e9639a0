//! End-to-end tests for the graph assembler: fan-out completeness,
//! degenerate graphs, integration skipping, and the wire format.
mod common;
use common::*;
use pathwright::prelude::*;

#[test]
fn fan_out_completeness() {
    // Two concepts (family + budget), one webhook, one KB, one transfer.
    let options = full_options();
    let assembled = assemble(
        "Test",
        "insurance for my family on a budget",
        &options,
    )
    .expect("assembly succeeds");
    let pathway = &assembled.pathway;

    let k = 2; // family_coverage, budget_plans
    let fan_out = k + 1 + 1 + 1;
    assert_eq!(assembled.summary.concepts_wired, k);
    assert_eq!(pathway.nodes.len(), 1 + fan_out + 2);

    // One routing edge per fan-out node, one completion edge each, plus the
    // two resolution edges.
    assert_eq!(pathway.edges.len(), 2 * fan_out + 2);

    // Every fan-out node has exactly one completion edge into resolution.
    let resolution = node_by_name(pathway, "Resolution Check");
    let hub = pathway.start_node().expect("start node");
    for node in &pathway.nodes {
        if node.id == hub.id || node.id == resolution.id || node.kind == NodeKind::EndCall {
            continue;
        }
        let completions: Vec<_> = pathway
            .edges_from(&node.id)
            .filter(|e| e.target == resolution.id)
            .collect();
        assert_eq!(completions.len(), 1, "node '{}'", node.name());
    }
}

#[test]
fn degenerate_description_yields_three_node_graph() {
    let assembled =
        assemble("Minimal", "", &AssembleOptions::default()).expect("assembly succeeds");
    let pathway = &assembled.pathway;

    assert_eq!(pathway.nodes.len(), 3);
    assert!(pathway.validate().is_ok());
    assert_eq!(assembled.summary.concepts_wired, 0);

    let hub = pathway.start_node().expect("start node");
    let resolution = node_by_name(pathway, "Resolution Check");
    let terminal = terminal_node(pathway);
    assert!(pathway.edges_from(&hub.id).any(|e| e.target == resolution.id));
    assert!(
        pathway
            .edges_from(&resolution.id)
            .any(|e| e.target == terminal.id && e.label == "satisfied")
    );
}

#[test]
fn resolution_cycles_back_to_hub() {
    let assembled = assemble("Test", "insurance for my family", &AssembleOptions::default())
        .expect("assembly succeeds");
    let pathway = &assembled.pathway;
    let hub = pathway.start_node().expect("start node");
    let resolution = node_by_name(pathway, "Resolution Check");
    assert!(
        pathway
            .edges_from(&resolution.id)
            .any(|e| e.target == hub.id && e.label == "additional needs")
    );
}

#[test]
fn family_coverage_node_has_domain_specific_variables() {
    let assembled = assemble(
        "Insurance Helper",
        "Insurance for a family of four, spouse and children, affordable options",
        &AssembleOptions::default(),
    )
    .expect("assembly succeeds");
    let pathway = &assembled.pathway;

    let family = node_by_name(pathway, "Family coverage");
    let var_names: Vec<&str> = family
        .data
        .extract_vars
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert!(var_names.contains(&"family_size"));
    assert!(var_names.contains(&"ages_of_dependents"));

    let budget = node_by_name(pathway, "Budget plans");
    assert!(
        budget
            .data
            .extract_vars
            .iter()
            .any(|v| v.name == "monthly_budget")
    );
}

#[test]
fn generic_concept_schema_mentions_the_domain() {
    // "buying" has no dedicated extraction schema, so the fallback schema is
    // used and must be parameterized by the classified domain.
    let assembled = assemble(
        "Test",
        "help people buy a house",
        &AssembleOptions::default(),
    )
    .expect("assembly succeeds");
    let buying = node_by_name(&assembled.pathway, "Buying");
    let details = buying
        .data
        .extract_vars
        .iter()
        .find(|v| v.name == "buying_details")
        .expect("fallback details variable");
    assert!(details.description.contains("real estate"));
}

#[test]
fn hub_extraction_slots_follow_domain() {
    let assembled = assemble("Test", "insurance questions", &AssembleOptions::default())
        .expect("assembly succeeds");
    let hub = assembled.pathway.start_node().expect("start node");
    let var_names: Vec<&str> = hub
        .data
        .extract_vars
        .iter()
        .map(|v| v.name.as_str())
        .collect();
    assert!(var_names.contains(&"insurance_need"));
    assert!(var_names.contains(&"customer_category"));
    assert!(var_names.contains(&"urgency_level"));
    assert!(var_names.contains(&"budget_range"));
}

#[test]
fn integration_edge_labels() {
    let options = full_options();
    let assembled =
        assemble("Test", "insurance", &options).expect("assembly succeeds");
    let pathway = &assembled.pathway;
    let hub = pathway.start_node().expect("start node");

    let labels: Vec<&str> = pathway
        .edges_from(&hub.id)
        .map(|e| e.label.as_str())
        .collect();
    assert!(labels.contains(&"needs CRM Lookup"));
    assert!(labels.contains(&"what is a deductible or how do copays work"));
    assert!(
        labels.contains(&"caller wants to finalize a purchase or caller asks a licensing question")
    );
}

#[test]
fn kb_without_triggers_gets_generic_label() {
    let mut options = full_options();
    options.knowledge_bases[0].trigger_phrases.clear();
    let assembled = assemble("Test", "", &options).expect("assembly succeeds");
    let pathway = &assembled.pathway;
    let hub = pathway.start_node().expect("start node");
    assert!(
        pathway
            .edges_from(&hub.id)
            .any(|e| e.label == "questions about Plan FAQ")
    );
}

#[test]
fn malformed_integrations_are_skipped_and_counted() {
    let mut options = full_options();
    options.webhooks[0].url = "  ".to_string();
    options.knowledge_bases[0].content = String::new();

    let assembled = assemble("Test", "", &options).expect("assembly succeeds");
    let summary = &assembled.summary;

    assert_eq!(summary.webhooks_requested, 1);
    assert_eq!(summary.webhooks_wired, 0);
    assert_eq!(summary.knowledge_bases_requested, 1);
    assert_eq!(summary.knowledge_bases_wired, 0);
    assert_eq!(summary.transfers_requested, 1);
    assert_eq!(summary.transfers_wired, 1);
    assert!(!summary.all_wired());
    assert_eq!(summary.skipped.len(), 2);

    // The skipped descriptors never made it into the graph.
    assert_eq!(assembled.pathway.nodes.len(), 1 + 1 + 2);
    assert!(assembled.pathway.validate().is_ok());
}

#[test]
fn feature_toggles_attach_optional_payloads() {
    let mut options = AssembleOptions::default();
    options.features = all_features();
    let assembled = assemble("Test", "urgent insurance for my family", &options)
        .expect("assembly succeeds");
    let pathway = &assembled.pathway;

    let hub = pathway.start_node().expect("start node");
    assert!(hub.data.model_options.is_some());
    assert!(hub.data.voice_settings.is_some());
    assert!(hub.data.analytics.is_some());

    let family = node_by_name(pathway, "Family coverage");
    assert!(!family.data.dynamic_data.is_empty());
    assert!(!family.data.tools.is_empty());
    assert!(!family.data.fine_tuning_examples.is_empty());
    assert!(family.data.analytics.is_some());

    let urgent = node_by_name(pathway, "Urgent assistance");
    let model = urgent.data.model_options.as_ref().expect("model options");
    assert!(model.sympathetic);
}

#[test]
fn default_toggles_leave_optional_payloads_empty() {
    let assembled = assemble("Test", "insurance for my family", &AssembleOptions::default())
        .expect("assembly succeeds");
    let family = node_by_name(&assembled.pathway, "Family coverage");
    assert!(family.data.dynamic_data.is_empty());
    assert!(family.data.tools.is_empty());
    assert!(family.data.model_options.is_none());
    assert!(family.data.fine_tuning_examples.is_empty());
    assert!(family.data.analytics.is_none());
}

#[test]
fn global_help_node_is_opt_in_and_exempt_from_reachability() {
    let mut options = AssembleOptions::default();
    options.global_help = true;
    let assembled = assemble("Test", "", &options).expect("assembly succeeds");
    let pathway = &assembled.pathway;

    assert_eq!(pathway.nodes.len(), 4);
    let help = node_by_name(pathway, "Help");
    assert!(help.is_global());
    // No explicit edges lead into it, yet the pathway validates.
    assert!(pathway.edges.iter().all(|e| e.target != help.id));
    assert!(pathway.validate().is_ok());
}

#[test]
fn every_assembled_graph_is_well_formed() {
    let descriptions = [
        "",
        "urgent insurance claim for my family, affordable and comprehensive",
        "sell a house and book viewings",
        "saas billing questions and login problems, urgent",
        "take orders for my company bakery",
    ];
    for description in descriptions {
        let assembled = assemble("Test", description, &full_options())
            .unwrap_or_else(|e| panic!("assembly failed for '{}': {}", description, e));
        assembled
            .pathway
            .validate()
            .unwrap_or_else(|e| panic!("invalid pathway for '{}': {}", description, e));

        let starts = assembled
            .pathway
            .nodes
            .iter()
            .filter(|n| n.is_start())
            .count();
        assert_eq!(starts, 1);
    }
}

#[test]
fn wire_json_shape() {
    let assembled = assemble(
        "Wire Test",
        "urgent insurance for my family",
        &full_options(),
    )
    .expect("assembly succeeds");
    let wire = assembled.pathway.to_wire_json().expect("serializes");

    let nodes = wire["nodes"].as_array().expect("nodes array");
    let edges = wire["edges"].as_array().expect("edges array");
    assert!(!nodes.is_empty());
    assert!(!edges.is_empty());

    for node in nodes {
        // The node kind is mirrored into data.type for the execution engine.
        assert_eq!(node["type"], node["data"]["type"]);
        assert!(node["data"]["name"].is_string());
    }
    for edge in edges {
        assert!(edge["label"].is_string(), "edge label must always be a string");
        assert!(edge["source"].is_string());
        assert!(edge["target"].is_string());
    }

    // Extraction variables ride as [name, type, description, required] tuples.
    let hub = nodes
        .iter()
        .find(|n| n["data"]["isStart"] == serde_json::json!(true))
        .expect("start node on the wire");
    let vars = hub["data"]["extractVars"].as_array().expect("extractVars");
    assert!(!vars.is_empty());
    for var in vars {
        let tuple = var.as_array().expect("tuple form");
        assert_eq!(tuple.len(), 4);
        assert!(tuple[0].is_string());
        assert!(tuple[3].is_boolean());
    }

    // Webhook payload fields are flattened into the node's data record.
    let webhook = nodes
        .iter()
        .find(|n| n["type"] == serde_json::json!("Webhook"))
        .expect("webhook node on the wire");
    assert_eq!(webhook["data"]["url"], "https://crm.example.com/lookup");
    assert_eq!(webhook["data"]["method"], "POST");
}
