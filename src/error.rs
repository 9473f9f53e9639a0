use crate::pathway::NodeKind;
use thiserror::Error;

/// Errors raised when a constructed pathway violates a structural invariant.
///
/// These indicate a programming error in whatever assembled the graph, never
/// bad caller input: the builders in this crate only wire edges against ids
/// that node construction actually returned, so a validation failure means a
/// graph was put together by hand incorrectly.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathwayError {
    #[error("Duplicate node id '{0}' in pathway")]
    DuplicateNodeId(String),

    #[error("Edge '{edge_id}' references node '{node_id}', which is not in the pathway")]
    DanglingEdge { edge_id: String, node_id: String },

    #[error("Pathway has no start node")]
    MissingStartNode,

    #[error("Pathway has more than one start node: '{first}' and '{second}'")]
    MultipleStartNodes { first: String, second: String },

    #[error("Pathway has no End Call node")]
    NoTerminalNode,

    #[error("Node '{node_id}' of kind '{kind}' is missing its required payload")]
    MissingPayload { node_id: String, kind: NodeKind },

    #[error("Node '{0}' is not reachable from the start node")]
    UnreachableNode(String),
}

/// Errors raised when a specialized template is given incomplete input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    #[error("Required field '{field}' is missing or empty")]
    MissingField { field: &'static str },

    #[error(
        "qualified_threshold ({qualified}) must be below high_value_threshold ({high_value})"
    )]
    InvalidThresholds { qualified: u32, high_value: u32 },

    #[error(transparent)]
    Pathway(#[from] PathwayError),
}
