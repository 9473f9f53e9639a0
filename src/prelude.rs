//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so callers can get
//! at the core functionality with a single import.

// Assembly
pub use crate::assembler::{
    AssembleOptions, AssembledPathway, BuildSummary, FeatureToggles, KnowledgeBaseEntry,
    SkippedIntegration, TransferTarget, WebhookIntegration, assemble,
};

// Classification
pub use crate::intent::{Classification, Concept, Domain, classify};

// Builders
pub use crate::build::{GraphBuilder, NodeBuilder};

// Data model
pub use crate::pathway::{
    AnalyticsSpec, DynamicDataSpec, Edge, FineTuningExample, FlowControl, ModelOptions, Node,
    NodeData, NodeKind, Pathway, ResponseMapping, ToolSpec, VariableSpec, VoiceSettings,
    WebhookPayload,
};

// Templates
pub use crate::templates::{
    AppointmentConfig, SalesConfig, SupportConfig, WorkflowConfig, WorkflowStep,
    appointment_pathway, sales_pathway, support_pathway, workflow_pathway,
};

// Errors
pub use crate::error::{PathwayError, TemplateError};
