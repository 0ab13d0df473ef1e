//! The resource relationship graph: a directed labeled multigraph with
//! at most one edge per `(source, target, type)` tuple.

use std::collections::BTreeMap;

use serde_json::Value;

use super::edge::{Edge, RelationshipType};
use super::error::GraphError;
use super::node::{EntityType, Node};

/// Which direction to walk edges incident to a node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Outgoing,
    Incoming,
    Both,
}

#[derive(Clone, Debug, Default)]
pub struct ResourceGraph {
    nodes: BTreeMap<String, Node>,
    edges: BTreeMap<(String, String, RelationshipType), Edge>,
}

impl ResourceGraph {
    pub fn new() -> Self {
        ResourceGraph { nodes: BTreeMap::new(), edges: BTreeMap::new() }
    }

    pub fn add_node(&mut self, id: impl Into<String>, entity_type: EntityType, label: impl Into<String>, metadata: Value) {
        let node = Node::new(id, entity_type, label, metadata);
        self.nodes.insert(node.id.clone(), node);
    }

    /// Adds an edge, merging its property map into an existing edge for
    /// the same `(source, target, type)` tuple if one is already present.
    pub fn add_edge(
        &mut self,
        source: &str,
        target: &str,
        relationship_type: RelationshipType,
        metadata: Value,
    ) -> Result<(), GraphError> {
        if !self.nodes.contains_key(source) {
            return Err(GraphError::NodeNotFound(source.to_string()));
        }
        if !self.nodes.contains_key(target) {
            return Err(GraphError::NodeNotFound(target.to_string()));
        }

        let key = (source.to_string(), target.to_string(), relationship_type);
        match self.edges.get_mut(&key) {
            Some(existing) => merge_metadata(&mut existing.metadata, &metadata),
            None => {
                self.edges.insert(key, Edge::new(source, target, relationship_type, metadata));
            }
        }
        Ok(())
    }

    /// Removes `id` and every edge incident to it.
    pub fn remove_node(&mut self, id: &str) -> Result<(), GraphError> {
        if self.nodes.remove(id).is_none() {
            return Err(GraphError::NodeNotFound(id.to_string()));
        }
        self.edges.retain(|(source, target, _), _| source != id && target != id);
        Ok(())
    }

    /// Removes edges between `source` and `target`, restricted to
    /// `relationship_type` if given; otherwise removes every edge
    /// between the pair regardless of type.
    pub fn remove_edge(&mut self, source: &str, target: &str, relationship_type: Option<RelationshipType>) {
        self.edges.retain(|(s, t, rt), _| {
            !(s == source && t == target && relationship_type.is_none_or(|wanted| *rt == wanted))
        });
    }

    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    /// Edges incident to `id` in the given direction.
    pub fn get_edges(&self, id: &str, direction: Direction) -> Vec<&Edge> {
        self.edges
            .values()
            .filter(|e| match direction {
                Direction::Outgoing => e.source == id,
                Direction::Incoming => e.target == id,
                Direction::Both => e.source == id || e.target == id,
            })
            .collect()
    }

    /// Nodes reachable from `id` via a single edge in the given
    /// direction, optionally restricted to one relationship type.
    pub fn get_connected_nodes(&self, id: &str, direction: Direction, relationship_type: Option<RelationshipType>) -> Vec<&Node> {
        self.get_edges(id, direction)
            .into_iter()
            .filter(|e| relationship_type.is_none_or(|wanted| e.relationship_type == wanted))
            .filter_map(|e| {
                let other = if e.source == id { &e.target } else { &e.source };
                self.nodes.get(other)
            })
            .collect()
    }
}

fn merge_metadata(existing: &mut Value, incoming: &Value) {
    if let (Value::Object(existing_map), Value::Object(incoming_map)) = (existing.clone(), incoming) {
        let mut merged = existing_map;
        for (k, v) in incoming_map {
            merged.insert(k.clone(), v.clone());
        }
        *existing = Value::Object(merged);
    } else if !incoming.is_null() {
        *existing = incoming.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn small_graph() -> ResourceGraph {
        let mut g = ResourceGraph::new();
        g.add_node("a", EntityType::Dataset, "A", json!({}));
        g.add_node("b", EntityType::AIModel, "B", json!({}));
        g.add_node("c", EntityType::TextContent, "C", json!({}));
        g.add_edge("a", "b", RelationshipType::Used, json!({})).unwrap();
        g.add_edge("b", "c", RelationshipType::WasGeneratedBy, json!({})).unwrap();
        g
    }

    #[test]
    fn add_edge_requires_both_endpoints_to_exist() {
        let mut g = ResourceGraph::new();
        g.add_node("a", EntityType::Dataset, "A", json!({}));
        let err = g.add_edge("a", "missing", RelationshipType::Used, json!({})).unwrap_err();
        assert!(matches!(err, GraphError::NodeNotFound(id) if id == "missing"));
    }

    #[test]
    fn duplicate_edge_merges_metadata_instead_of_duplicating() {
        let mut g = ResourceGraph::new();
        g.add_node("a", EntityType::Dataset, "A", json!({}));
        g.add_node("b", EntityType::AIModel, "B", json!({}));
        g.add_edge("a", "b", RelationshipType::Used, json!({"weight": 1})).unwrap();
        g.add_edge("a", "b", RelationshipType::Used, json!({"weight": 2, "note": "x"})).unwrap();
        assert_eq!(g.get_edges("a", Direction::Outgoing).len(), 1);
        let edge = g.get_edges("a", Direction::Outgoing)[0];
        assert_eq!(edge.metadata["weight"], 2);
        assert_eq!(edge.metadata["note"], "x");
    }

    #[test]
    fn remove_node_cascades_to_incident_edges() {
        let mut g = small_graph();
        g.remove_node("b").unwrap();
        assert!(g.get_node("b").is_none());
        assert!(g.get_edges("a", Direction::Outgoing).is_empty());
        assert!(g.get_edges("c", Direction::Incoming).is_empty());
    }

    #[test]
    fn get_connected_nodes_respects_direction_and_type() {
        let g = small_graph();
        let outgoing = g.get_connected_nodes("a", Direction::Outgoing, None);
        assert_eq!(outgoing.len(), 1);
        assert_eq!(outgoing[0].id, "b");

        let none = g.get_connected_nodes("a", Direction::Incoming, None);
        assert!(none.is_empty());

        let filtered = g.get_connected_nodes("b", Direction::Outgoing, Some(RelationshipType::WasGeneratedBy));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "c");
    }
}
