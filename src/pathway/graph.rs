use super::{Edge, Node, NodeKind};
use crate::error::PathwayError;
use ahash::{AHashMap, AHashSet};
use serde::Serialize;
use std::collections::VecDeque;

/// The complete directed graph handed to the execution platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pathway {
    pub name: String,
    pub description: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Pathway {
    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// The unique start node, if the pathway has exactly one.
    pub fn start_node(&self) -> Option<&Node> {
        let mut starts = self.nodes.iter().filter(|n| n.is_start());
        let first = starts.next()?;
        if starts.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// All edges leaving the given node.
    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.source == id)
    }

    /// Checks every structural invariant of the pathway:
    ///
    /// - node ids are unique
    /// - exactly one node is flagged as the start node
    /// - Webhook / Knowledge Base / Transfer nodes carry their payload
    /// - every edge endpoint references a node in this pathway
    /// - at least one End Call node exists
    /// - every non-global node is reachable from the start node
    ///
    /// Global nodes are exempt from the reachability check: the execution
    /// engine treats them as enterable from any state, so explicit edges
    /// into them are optional.
    pub fn validate(&self) -> Result<(), PathwayError> {
        let mut ids: AHashSet<&str> = AHashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(PathwayError::DuplicateNodeId(node.id.clone()));
            }
        }

        let mut start: Option<&Node> = None;
        for node in &self.nodes {
            if node.is_start() {
                if let Some(first) = start {
                    return Err(PathwayError::MultipleStartNodes {
                        first: first.id.clone(),
                        second: node.id.clone(),
                    });
                }
                start = Some(node);
            }
        }
        let start = start.ok_or(PathwayError::MissingStartNode)?;

        for node in &self.nodes {
            if !node.data.has_required_payload() {
                return Err(PathwayError::MissingPayload {
                    node_id: node.id.clone(),
                    kind: node.kind,
                });
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !ids.contains(endpoint.as_str()) {
                    return Err(PathwayError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.clone(),
                    });
                }
            }
        }

        if !self.nodes.iter().any(|n| n.kind == NodeKind::EndCall) {
            return Err(PathwayError::NoTerminalNode);
        }

        let reachable = self.reachable_from(&start.id);
        for node in &self.nodes {
            if !node.is_global() && !reachable.contains(node.id.as_str()) {
                return Err(PathwayError::UnreachableNode(node.id.clone()));
            }
        }

        Ok(())
    }

    /// The set of node ids reachable from `from` by following edges forward,
    /// including `from` itself.
    pub fn reachable_from(&self, from: &str) -> AHashSet<String> {
        let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for edge in &self.edges {
            adjacency
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
        }

        let mut visited: AHashSet<String> = AHashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        visited.insert(from.to_string());
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            if let Some(targets) = adjacency.get(current) {
                for target in targets {
                    if visited.insert((*target).to_string()) {
                        queue.push_back(target);
                    }
                }
            }
        }

        visited
    }

    /// Serializes the pathway into the JSON shape the remote pathway service
    /// expects (node kind mirrored into `data.type`, labels always present).
    pub fn to_wire_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
