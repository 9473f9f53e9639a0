//! Tests for the keyword-table classifier: domain and purpose selection,
//! concept detection, and priority ordering.
use pathwright::prelude::*;
use proptest::prelude::*;

#[test]
fn insurance_family_budget_concepts() {
    let c = classify(
        "Insurance line for a family of four, spouse and children, affordable options",
        "",
    );
    assert_eq!(c.domain.slug, "insurance");

    let slugs: Vec<&str> = c.concepts.iter().map(|c| c.slug.as_str()).collect();
    assert!(slugs.contains(&"family_coverage"));
    assert!(slugs.contains(&"budget_plans"));
}

#[test]
fn urgency_always_sorts_first() {
    let c = classify("I need insurance right away for my family", "");
    assert_eq!(c.domain.slug, "insurance");

    let slugs: Vec<&str> = c.concepts.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs[0], "urgent_assistance");
    assert!(slugs.contains(&"family_coverage"));
}

#[test]
fn concepts_are_priority_sorted() {
    let c = classify(
        "insurance for premium comprehensive coverage, also budget options, \
         medicare questions, and individual plans",
        "",
    );
    let priorities: Vec<i32> = c.concepts.iter().map(|c| c.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort();
    assert_eq!(priorities, sorted);
    assert!(c.concepts.len() >= 4);
}

#[test]
fn name_hint_participates_in_matching() {
    let c = classify("handle calls for my agency", "Westside Insurance");
    assert_eq!(c.domain.slug, "insurance");
}

#[test]
fn purpose_keywords_select_purpose() {
    assert_eq!(
        classify("book appointments for a dental office", "").purpose,
        "appointment booking"
    );
    assert_eq!(
        classify("qualify sales leads for software", "").purpose,
        "sales and lead qualification"
    );
    assert_eq!(
        classify("resolve customer support issues for a store", "").purpose,
        "customer support"
    );
}

#[test]
fn unmatched_text_falls_back_to_generic_domain() {
    let c = classify("answer calls politely", "Front Desk");
    assert_eq!(c.domain.slug, "general");
    assert_eq!(c.purpose, "specialized assistance");
    assert!(c.concepts.is_empty());
}

#[test]
fn noun_after_company_marker_becomes_domain() {
    let c = classify("take calls for my company plumbing and drains", "");
    assert_eq!(c.domain.slug, "plumbing");
    assert_eq!(c.domain.label, "plumbing services");
}

#[test]
fn short_keywords_never_match_inside_longer_words() {
    // "appointments" must not reach the software table through "app".
    let c = classify("book appointments for a dental office", "");
    assert_eq!(c.domain.slug, "general");
    assert_eq!(c.purpose, "appointment booking");

    // "restore" must not reach the retail table through "store".
    let c = classify("please help restore my account", "");
    assert_eq!(c.domain.slug, "general");
}

#[test]
fn plural_keyword_forms_still_match() {
    assert_eq!(classify("track my orders", "").domain.slug, "retail");
    assert_eq!(classify("renew my policies", "").domain.slug, "insurance");
}

#[test]
fn each_domain_table_is_reachable() {
    assert_eq!(classify("sell a house fast", "").domain.slug, "real_estate");
    assert_eq!(
        classify("loan refinancing hotline", "").domain.slug,
        "financial_services"
    );
    assert_eq!(classify("track my store order", "").domain.slug, "retail");
    assert_eq!(
        classify("saas onboarding assistant", "").domain.slug,
        "software"
    );
}

proptest! {
    /// Identical input always yields an identical classification: same
    /// domain, same purpose, same concepts in the same order.
    #[test]
    fn classification_is_deterministic(description in "[ a-z0-9]{0,80}", name in "[ a-z]{0,20}") {
        let first = classify(&description, &name);
        let second = classify(&description, &name);
        prop_assert_eq!(first, second);
    }

    /// Concepts always come back sorted ascending by priority.
    #[test]
    fn concepts_always_priority_sorted(description in "[ a-z0-9]{0,120}") {
        let c = classify(&description, "");
        let priorities: Vec<i32> = c.concepts.iter().map(|c| c.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        prop_assert_eq!(priorities, sorted);
    }

    /// Any description containing an urgency keyword puts urgent assistance
    /// first, regardless of what else matched.
    #[test]
    fn urgency_keyword_forces_urgent_first(prefix in "[ a-z]{0,40}", suffix in "[ a-z]{0,40}") {
        let description = format!("{} urgent {}", prefix, suffix);
        let c = classify(&description, "");
        prop_assert!(!c.concepts.is_empty());
        prop_assert_eq!(c.concepts[0].slug.as_str(), "urgent_assistance");
    }
}
