//! Common test utilities for building assembly options and fixture configs.
use pathwright::prelude::*;

/// One valid descriptor of each integration family.
#[allow(dead_code)]
pub fn full_options() -> AssembleOptions {
    AssembleOptions {
        webhooks: vec![WebhookIntegration {
            name: "CRM Lookup".to_string(),
            url: "https://crm.example.com/lookup".to_string(),
            method: "POST".to_string(),
            body: Some(serde_json::json!({ "caller": "{{phone_number}}" })),
            headers: None,
        }],
        knowledge_bases: vec![KnowledgeBaseEntry {
            name: "Plan FAQ".to_string(),
            content: "Q: What is a deductible? A: ...".to_string(),
            trigger_phrases: vec![
                "what is a deductible".to_string(),
                "how do copays work".to_string(),
            ],
        }],
        transfers: vec![TransferTarget {
            name: "Licensed Agent".to_string(),
            number: "+15550123".to_string(),
            conditions: vec![
                "caller wants to finalize a purchase".to_string(),
                "caller asks a licensing question".to_string(),
            ],
        }],
        features: FeatureToggles::default(),
        global_help: false,
    }
}

/// Every feature toggle switched on.
#[allow(dead_code)]
pub fn all_features() -> FeatureToggles {
    FeatureToggles {
        dynamic_data: true,
        tools: true,
        ai_features: true,
        fine_tuning: true,
        analytics: true,
    }
}

#[allow(dead_code)]
pub fn sales_config() -> SalesConfig {
    SalesConfig {
        company: "Acme".to_string(),
        product: "Acme Widgets Pro".to_string(),
        high_value_threshold: 50,
        qualified_threshold: 40,
        escalation_number: Some("+15550199".to_string()),
    }
}

#[allow(dead_code)]
pub fn support_config() -> SupportConfig {
    SupportConfig {
        company: "Acme".to_string(),
        service_types: vec![
            "billing".to_string(),
            "technical".to_string(),
            "account".to_string(),
        ],
        escalation_number: "+15550177".to_string(),
        business_hours: Some("9am-5pm weekdays".to_string()),
    }
}

#[allow(dead_code)]
pub fn appointment_config() -> AppointmentConfig {
    AppointmentConfig {
        company: "Acme Dental".to_string(),
        services: vec!["cleaning".to_string(), "checkup".to_string()],
        business_hours: Some("8am-4pm".to_string()),
        availability_url: Some("https://booking.example.com/slots".to_string()),
    }
}

/// Finds the single node with the given name, panicking if absent or
/// ambiguous.
#[allow(dead_code)]
pub fn node_by_name<'a>(pathway: &'a Pathway, name: &str) -> &'a Node {
    let mut matches = pathway.nodes.iter().filter(|n| n.name() == name);
    let found = matches
        .next()
        .unwrap_or_else(|| panic!("no node named '{}'", name));
    assert!(
        matches.next().is_none(),
        "more than one node named '{}'",
        name
    );
    found
}

/// The single End Call node of a pathway.
#[allow(dead_code)]
pub fn terminal_node(pathway: &Pathway) -> &Node {
    let terminals: Vec<_> = pathway
        .nodes
        .iter()
        .filter(|n| n.kind == NodeKind::EndCall)
        .collect();
    assert_eq!(terminals.len(), 1, "expected exactly one End Call node");
    terminals[0]
}
