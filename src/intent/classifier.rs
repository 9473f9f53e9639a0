use super::rules::*;
use itertools::Itertools;

/// The domain a description was classified into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub slug: String,
    pub label: String,
}

/// A detected sub-intent within a domain. Consumed once by the assembler to
/// spawn a specialized node and its routing edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concept {
    pub slug: String,
    /// Natural-language routing guard, used verbatim as an edge label.
    pub condition: String,
    pub description: String,
    /// Lower values are evaluated first.
    pub priority: i32,
}

/// The full result of classifying a workflow description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub domain: Domain,
    pub purpose: String,
    /// Sorted ascending by priority; urgency, when present, is first.
    pub concepts: Vec<Concept>,
}

/// Classifies a free-text workflow description against the ordered keyword
/// tables. Pure and deterministic: identical input always yields the same
/// domain, purpose, and concept list in the same order.
///
/// `name_hint` is the short pathway name supplied alongside the description;
/// both are searched.
pub fn classify(description: &str, name_hint: &str) -> Classification {
    let haystack = normalize(&format!("{} {}", description, name_hint));

    let domain = match_domain(&haystack);
    let purpose = match_purpose(&haystack);
    let mut concepts = match_concepts(&haystack, &domain.slug);

    if URGENCY_KEYWORDS.iter().any(|kw| contains_keyword(&haystack, kw)) {
        concepts.push(Concept {
            slug: URGENCY_SLUG.to_string(),
            condition: URGENCY_CONDITION.to_string(),
            description: URGENCY_DESCRIPTION.to_string(),
            priority: URGENCY_PRIORITY,
        });
    }

    // Stable, so concepts with equal priority keep table order.
    concepts.sort_by_key(|c| c.priority);

    Classification {
        domain,
        purpose,
        concepts,
    }
}

/// Lowercases the text, replaces every non-alphanumeric character with a
/// space, collapses whitespace, and pads with one leading and trailing
/// space so keyword matching can anchor on word boundaries.
fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    format!(" {} ", replaced.split_whitespace().join(" "))
}

/// Whole-word containment against a [`normalize`]d haystack. Short keys like
/// "app" or "store" must not match inside "appointment" or "restore", so the
/// keyword has to appear as a full token sequence; a trailing plural "s" on
/// its last word is tolerated ("orders" still matches "order").
fn contains_keyword(haystack: &str, kw: &str) -> bool {
    let needle = normalize(kw);
    if haystack.contains(&needle) {
        return true;
    }
    let plural = format!("{}s ", &needle[..needle.len() - 1]);
    haystack.contains(&plural)
}

fn match_domain(haystack: &str) -> Domain {
    for rule in DOMAIN_RULES {
        if rule.keywords.iter().any(|kw| contains_keyword(haystack, kw)) {
            return Domain {
                slug: rule.slug.to_string(),
                label: rule.label.to_string(),
            };
        }
    }

    if let Some(noun) = generic_domain_noun(haystack) {
        return Domain {
            label: format!("{} services", noun),
            slug: noun,
        };
    }

    Domain {
        slug: FALLBACK_DOMAIN_SLUG.to_string(),
        label: FALLBACK_DOMAIN_LABEL.to_string(),
    }
}

/// Scans for a noun following "business", "company", or "service", so a
/// description like "a line for my landscaping company, company is called
/// GreenCo" still yields a usable domain.
fn generic_domain_noun(haystack: &str) -> Option<String> {
    // The haystack is normalized, so tokens are already bare.
    let words: Vec<&str> = haystack.split_whitespace().collect();
    for (i, word) in words.iter().enumerate() {
        if GENERIC_DOMAIN_MARKERS.contains(word) {
            let next = words.get(i + 1)?;
            return Some((*next).to_string());
        }
    }
    None
}

fn match_purpose(haystack: &str) -> String {
    for rule in PURPOSE_RULES {
        if rule.keywords.iter().any(|kw| contains_keyword(haystack, kw)) {
            return rule.label.to_string();
        }
    }
    DEFAULT_PURPOSE.to_string()
}

fn match_concepts(haystack: &str, domain_slug: &str) -> Vec<Concept> {
    CONCEPT_RULES
        .iter()
        .filter(|rule| rule.domain == domain_slug)
        .filter(|rule| rule.keywords.iter().any(|kw| contains_keyword(haystack, kw)))
        .map(|rule| Concept {
            slug: rule.slug.to_string(),
            condition: rule.condition.to_string(),
            description: rule.description.to_string(),
            priority: rule.priority,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insurance_keywords_win_over_generic_fallback() {
        let c = classify("I sell health insurance policies", "");
        assert_eq!(c.domain.slug, "insurance");
        assert_eq!(c.purpose, "sales and lead qualification");
    }

    #[test]
    fn generic_noun_derived_after_business_marker() {
        let c = classify("phone agent for my landscaping business", "");
        // "landscaping business" puts the marker after the noun; the scan
        // only looks forward, so this one falls through to the fixed default.
        assert_eq!(c.domain.slug, FALLBACK_DOMAIN_SLUG);

        let c = classify("my business landscaping and yard work", "");
        assert_eq!(c.domain.slug, "landscaping");
        assert_eq!(c.domain.label, "landscaping services");
    }

    #[test]
    fn unmatched_purpose_falls_back() {
        let c = classify("insurance", "");
        assert_eq!(c.purpose, DEFAULT_PURPOSE);
    }

    #[test]
    fn keyword_matching_requires_word_boundaries() {
        assert!(contains_keyword(&normalize("open the app now"), "app"));
        assert!(contains_keyword(&normalize("two apps installed"), "app"));
        assert!(!contains_keyword(&normalize("book an appointment"), "app"));
        assert!(!contains_keyword(&normalize("restore my account"), "store"));
        assert!(contains_keyword(&normalize("low-cost plans"), "low cost"));
    }
}
