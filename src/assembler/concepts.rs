//! Per-concept node parameterization.
//!
//! Each detected concept spawns a specialized node whose extraction schema,
//! data-fetch spec, and tool spec depend on the concept slug and domain.
//! Slugs without a dedicated schema get a generic one derived from the slug,
//! so new rules in the keyword tables work without changes here.

use crate::intent::{Concept, Domain};
use crate::pathway::{DynamicDataSpec, ResponseMapping, ToolSpec, VariableSpec};
use serde_json::json;

pub(super) fn concept_title(concept: &Concept) -> String {
    let mut title = concept.slug.replace('_', " ");
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    title
}

pub(super) fn concept_prompt(concept: &Concept, domain: &Domain) -> String {
    format!(
        "The caller is interested in {}. You are assisting with {}. \
         Ask the questions needed to fill every required variable for this \
         topic, one at a time, and confirm what you heard before moving on.",
        concept.description, domain.label
    )
}

/// The variable-extraction schema a concept node requires.
pub(super) fn concept_variables(slug: &str, domain: &Domain) -> Vec<VariableSpec> {
    match slug {
        "individual_plan" => vec![
            VariableSpec::required("age", "number", "Caller's age"),
            VariableSpec::required("zip_code", "string", "Caller's ZIP code"),
            VariableSpec::optional("current_coverage", "string", "Existing coverage, if any"),
            VariableSpec::optional("monthly_budget", "number", "Monthly budget in dollars"),
        ],
        "family_coverage" => vec![
            VariableSpec::required("family_size", "number", "Number of people to cover"),
            VariableSpec::required("ages_of_dependents", "string", "Ages of spouse and children"),
            VariableSpec::optional("current_coverage", "string", "Existing coverage, if any"),
            VariableSpec::optional("monthly_budget", "number", "Monthly budget in dollars"),
        ],
        "group_coverage" => vec![
            VariableSpec::required("company_size", "number", "Number of employees to cover"),
            VariableSpec::required("industry", "string", "Company's industry"),
            VariableSpec::optional("current_provider", "string", "Current group provider"),
        ],
        "senior_plans" => vec![
            VariableSpec::required("age", "number", "Caller's age"),
            VariableSpec::required("medicare_status", "string", "Current Medicare enrollment"),
            VariableSpec::optional("prescriptions", "string", "Regular prescriptions"),
        ],
        "special_needs" => vec![
            VariableSpec::required("conditions", "string", "Pre-existing or chronic conditions"),
            VariableSpec::optional("current_treatment", "string", "Ongoing treatment"),
            VariableSpec::optional("specialist_care", "string", "Specialists currently seen"),
        ],
        "budget_plans" => vec![
            VariableSpec::required("monthly_budget", "number", "Monthly budget in dollars"),
            VariableSpec::optional("coverage_priorities", "string", "What coverage matters most"),
        ],
        "premium_plans" => vec![
            VariableSpec::required("coverage_priorities", "string", "What coverage matters most"),
            VariableSpec::optional("preferred_providers", "string", "Preferred doctors or networks"),
        ],
        "urgent_assistance" => vec![
            VariableSpec::required("urgency_reason", "string", "Why the matter is urgent"),
            VariableSpec::required("callback_number", "phone", "Best number to reach the caller"),
        ],
        other => vec![
            VariableSpec::required(
                format!("{}_details", other),
                "string",
                format!(
                    "Details of the caller's {} request within {}",
                    other.replace('_', " "),
                    domain.label
                ),
            ),
            VariableSpec::optional("timeline", "string", "When the caller needs this handled"),
        ],
    }
}

/// Declarative data fetch for a concept node, keyed by domain and slug.
pub(super) fn concept_dynamic_data(slug: &str, domain: &Domain) -> DynamicDataSpec {
    DynamicDataSpec {
        url: format!("https://api.example.com/{}/{}", domain.slug, slug),
        method: "GET".to_string(),
        query: Some(json!({ "category": slug })),
        body: None,
        response_data: vec![ResponseMapping {
            name: format!("{}_options", slug),
            data: "$.options".to_string(),
            context: Some(format!("Available {} options", slug.replace('_', " "))),
        }],
        cache_ttl_secs: Some(300),
        error_fallback: Some(json!("options temporarily unavailable")),
    }
}

/// Callable lookup tool for a concept node.
pub(super) fn concept_tool(slug: &str, domain: &Domain) -> ToolSpec {
    ToolSpec {
        name: format!("lookup_{}", slug),
        description: format!(
            "Looks up {} within {}",
            slug.replace('_', " "),
            domain.label
        ),
        input_schema: json!({
            "type": "object",
            "properties": {
                "query": { "type": "string" }
            },
            "required": ["query"]
        }),
        response_variables: vec![ResponseMapping {
            name: format!("{}_lookup_result", slug),
            data: "$.result".to_string(),
            context: None,
        }],
    }
}
