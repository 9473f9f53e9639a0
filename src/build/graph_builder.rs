use super::NodeBuilder;
use crate::error::PathwayError;
use crate::pathway::{Edge, Node, Pathway};

/// Accumulates nodes and edges for one pathway and owns the id counters.
///
/// Ids are monotone and scoped to a single builder, so two assemblies never
/// share a node or edge. `add_node` returns the id it assigned; callers must
/// wire edges with that returned id rather than re-deriving one from the
/// node's name.
///
/// `connect` performs no endpoint validation — `finish` runs the full
/// invariant check and rejects any edge whose endpoints are absent.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node: u32,
    next_edge: u32,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalizes the node under a fresh id and returns that id.
    pub fn add_node(&mut self, builder: NodeBuilder) -> String {
        let id = format!("node_{}", self.next_node);
        self.next_node += 1;
        self.nodes.push(builder.build(id.clone()));
        id
    }

    /// Adds a labeled edge and returns its id.
    pub fn connect(&mut self, source: &str, target: &str, label: &str) -> String {
        self.connect_inner(source, target, label, None)
    }

    /// Adds a labeled edge with descriptive metadata.
    pub fn connect_described(
        &mut self,
        source: &str,
        target: &str,
        label: &str,
        description: &str,
    ) -> String {
        self.connect_inner(source, target, label, Some(description.to_string()))
    }

    fn connect_inner(
        &mut self,
        source: &str,
        target: &str,
        label: &str,
        description: Option<String>,
    ) -> String {
        let id = format!("edge_{}", self.next_edge);
        self.next_edge += 1;
        self.edges.push(Edge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            label: label.to_string(),
            description,
        });
        id
    }

    /// Consumes the builder, validates every graph invariant, and returns
    /// the finished pathway.
    pub fn finish(
        self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Pathway, PathwayError> {
        let pathway = Pathway {
            name: name.into(),
            description: description.into(),
            nodes: self.nodes,
            edges: self.edges,
        };
        pathway.validate()?;
        Ok(pathway)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathway::NodeKind;

    #[test]
    fn ids_are_unique_and_monotone() {
        let mut g = GraphBuilder::new();
        let a = g.add_node(NodeBuilder::new(NodeKind::Default, "a").start());
        let b = g.add_node(NodeBuilder::new(NodeKind::EndCall, "b"));
        assert_eq!(a, "node_0");
        assert_eq!(b, "node_1");
        let e = g.connect(&a, &b, "done");
        assert_eq!(e, "edge_0");
    }

    #[test]
    fn finish_rejects_dangling_edges() {
        let mut g = GraphBuilder::new();
        let a = g.add_node(NodeBuilder::new(NodeKind::Default, "a").start());
        g.add_node(NodeBuilder::new(NodeKind::EndCall, "b"));
        g.connect(&a, "node_99", "nowhere");
        let err = g.finish("t", "t").unwrap_err();
        assert!(matches!(err, PathwayError::DanglingEdge { .. }));
    }
}
