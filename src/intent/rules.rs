//! Ordered keyword tables driving the classifier.
//!
//! The rule set is plain data so it can be extended and tested without
//! touching control flow. Order matters: the first matching domain or
//! purpose rule wins, and concepts are emitted in table order before being
//! sorted by priority.

pub(crate) struct DomainRule {
    pub slug: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

pub(crate) const DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        slug: "insurance",
        label: "insurance services",
        keywords: &[
            "insurance",
            "coverage",
            "policy",
            "policies",
            "premium",
            "deductible",
            "claim",
            "underwriting",
        ],
    },
    DomainRule {
        slug: "real_estate",
        label: "real estate services",
        keywords: &[
            "real estate",
            "property",
            "house",
            "home",
            "apartment",
            "mortgage",
            "listing",
            "realtor",
        ],
    },
    DomainRule {
        slug: "financial_services",
        label: "financial services",
        keywords: &[
            "loan",
            "banking",
            "bank",
            "invest",
            "financial",
            "finance",
            "credit",
            "retirement",
        ],
    },
    DomainRule {
        slug: "retail",
        label: "retail and e-commerce",
        keywords: &[
            "store", "shop", "order", "purchase", "retail", "ecommerce", "e-commerce", "delivery",
            "catalog",
        ],
    },
    DomainRule {
        slug: "software",
        label: "software and technology",
        keywords: &[
            "software",
            "saas",
            "app",
            "platform",
            "api",
            "subscription",
            "technical",
            "it support",
        ],
    },
];

pub(crate) struct PurposeRule {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

pub(crate) const PURPOSE_RULES: &[PurposeRule] = &[
    PurposeRule {
        label: "sales and lead qualification",
        keywords: &["sell", "sales", "lead", "qualify", "convert", "quote", "pricing"],
    },
    PurposeRule {
        label: "customer support",
        keywords: &["support", "help desk", "issue", "trouble", "complaint", "problem"],
    },
    PurposeRule {
        label: "appointment booking",
        keywords: &["appointment", "book", "schedule", "reservation", "reschedule"],
    },
    PurposeRule {
        label: "consultation",
        keywords: &["consult", "consultation", "advice", "advisor", "guidance"],
    },
    PurposeRule {
        label: "information and FAQ",
        keywords: &["information", "faq", "question", "learn about", "inquiry"],
    },
];

/// Fallback purpose label when no keyword matches.
pub(crate) const DEFAULT_PURPOSE: &str = "specialized assistance";

/// Fallback domain when nothing matches and no generic noun can be derived.
pub(crate) const FALLBACK_DOMAIN_SLUG: &str = "general";
pub(crate) const FALLBACK_DOMAIN_LABEL: &str = "general assistance";

/// Words whose following noun names the caller's business in descriptions
/// like "a phone line for my plumbing company".
pub(crate) const GENERIC_DOMAIN_MARKERS: &[&str] = &["business", "company", "service"];

pub(crate) struct ConceptRule {
    /// Domain slug this rule belongs to.
    pub domain: &'static str,
    pub slug: &'static str,
    pub condition: &'static str,
    pub description: &'static str,
    /// Lower values are evaluated first.
    pub priority: i32,
    pub keywords: &'static [&'static str],
}

pub(crate) const CONCEPT_RULES: &[ConceptRule] = &[
    // insurance
    ConceptRule {
        domain: "insurance",
        slug: "individual_plan",
        condition: "caller needs coverage for one person",
        description: "individual plan options",
        priority: 10,
        keywords: &["individual", "myself", "just me", "personal plan", "single person"],
    },
    ConceptRule {
        domain: "insurance",
        slug: "family_coverage",
        condition: "caller needs coverage for a family",
        description: "family coverage options",
        priority: 20,
        keywords: &["family", "spouse", "children", "kids", "dependents", "wife", "husband"],
    },
    ConceptRule {
        domain: "insurance",
        slug: "group_coverage",
        condition: "caller needs a group or employer plan",
        description: "group and employer plans",
        priority: 30,
        keywords: &["business", "group", "employer", "employees", "company plan"],
    },
    ConceptRule {
        domain: "insurance",
        slug: "senior_plans",
        condition: "caller is asking about senior or Medicare plans",
        description: "Medicare and senior plans",
        priority: 40,
        keywords: &["medicare", "senior", "65", "retired", "retiring"],
    },
    ConceptRule {
        domain: "insurance",
        slug: "special_needs",
        condition: "caller mentions a pre-existing or chronic condition",
        description: "plans for pre-existing and chronic conditions",
        priority: 50,
        keywords: &["pre-existing", "preexisting", "chronic", "ongoing treatment", "disability"],
    },
    ConceptRule {
        domain: "insurance",
        slug: "budget_plans",
        condition: "caller is looking for an affordable plan",
        description: "budget-friendly plans",
        priority: 60,
        keywords: &["budget", "affordable", "cheap", "low cost", "inexpensive"],
    },
    ConceptRule {
        domain: "insurance",
        slug: "premium_plans",
        condition: "caller wants comprehensive top-tier coverage",
        description: "premium comprehensive plans",
        priority: 70,
        keywords: &["premium", "comprehensive", "best coverage", "top tier", "full coverage"],
    },
    // real estate
    ConceptRule {
        domain: "real_estate",
        slug: "buying",
        condition: "caller wants to buy a property",
        description: "home buying assistance",
        priority: 10,
        keywords: &["buy", "buying", "purchase a home", "first-time buyer"],
    },
    ConceptRule {
        domain: "real_estate",
        slug: "selling",
        condition: "caller wants to sell a property",
        description: "home selling assistance",
        priority: 20,
        keywords: &["sell", "selling", "list my"],
    },
    ConceptRule {
        domain: "real_estate",
        slug: "renting",
        condition: "caller is looking to rent or lease",
        description: "rental and leasing options",
        priority: 30,
        keywords: &["rent", "rental", "lease", "tenant"],
    },
    ConceptRule {
        domain: "real_estate",
        slug: "valuation",
        condition: "caller wants to know what a property is worth",
        description: "property valuation",
        priority: 40,
        keywords: &["worth", "value", "appraisal", "estimate"],
    },
    // financial services
    ConceptRule {
        domain: "financial_services",
        slug: "loans",
        condition: "caller is asking about loans or financing",
        description: "loan and financing options",
        priority: 10,
        keywords: &["loan", "borrow", "financing", "refinance"],
    },
    ConceptRule {
        domain: "financial_services",
        slug: "accounts",
        condition: "caller has an account question",
        description: "account services",
        priority: 20,
        keywords: &["account", "checking", "savings", "balance"],
    },
    ConceptRule {
        domain: "financial_services",
        slug: "investments",
        condition: "caller wants investment guidance",
        description: "investment guidance",
        priority: 30,
        keywords: &["invest", "portfolio", "stocks", "funds", "ira"],
    },
    ConceptRule {
        domain: "financial_services",
        slug: "credit",
        condition: "caller is asking about credit",
        description: "credit services",
        priority: 40,
        keywords: &["credit", "credit score", "credit card"],
    },
    // retail
    ConceptRule {
        domain: "retail",
        slug: "order_status",
        condition: "caller is asking about an existing order",
        description: "order status and tracking",
        priority: 10,
        keywords: &["order", "tracking", "shipment", "delivery", "where is my"],
    },
    ConceptRule {
        domain: "retail",
        slug: "returns",
        condition: "caller wants a return, refund, or exchange",
        description: "returns and refunds",
        priority: 20,
        keywords: &["return", "refund", "exchange", "damaged"],
    },
    ConceptRule {
        domain: "retail",
        slug: "product_inquiry",
        condition: "caller is asking about a product",
        description: "product availability and details",
        priority: 30,
        keywords: &["product", "in stock", "availability", "size", "color"],
    },
    ConceptRule {
        domain: "retail",
        slug: "loyalty",
        condition: "caller is asking about rewards or membership",
        description: "loyalty and rewards",
        priority: 40,
        keywords: &["loyalty", "rewards", "points", "membership"],
    },
    // software
    ConceptRule {
        domain: "software",
        slug: "onboarding",
        condition: "caller needs help getting started",
        description: "onboarding and setup help",
        priority: 10,
        keywords: &["getting started", "setup", "set up", "onboard", "install"],
    },
    ConceptRule {
        domain: "software",
        slug: "technical_issue",
        condition: "caller reports something not working",
        description: "technical issue triage",
        priority: 20,
        keywords: &["bug", "error", "crash", "not working", "broken"],
    },
    ConceptRule {
        domain: "software",
        slug: "billing",
        condition: "caller has a billing question",
        description: "billing and invoicing",
        priority: 30,
        keywords: &["billing", "invoice", "payment", "charge", "charged"],
    },
    ConceptRule {
        domain: "software",
        slug: "account_access",
        condition: "caller cannot access their account",
        description: "account access recovery",
        priority: 40,
        keywords: &["login", "log in", "password", "locked out", "can't access"],
    },
];

/// Domain-independent urgency rule. Always checked; when it matches, an
/// urgent-assistance concept is injected ahead of everything else.
pub(crate) const URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "emergency",
    "asap",
    "immediately",
    "right away",
    "right now",
];

pub(crate) const URGENCY_SLUG: &str = "urgent_assistance";
pub(crate) const URGENCY_CONDITION: &str = "caller indicates the matter is urgent";
pub(crate) const URGENCY_DESCRIPTION: &str = "immediate assistance for urgent requests";
/// Lowest value in use, so urgency always sorts first.
pub(crate) const URGENCY_PRIORITY: i32 = 0;
