//! Graph traversal: simple-path search, transitive related-resource
//! search, and the five fixed wrapper queries.

use std::collections::BTreeSet;

use super::edge::RelationshipType;
use super::graph::{Direction, ResourceGraph};

/// A node reached by [`find_related_resources`], tagged with whether it
/// was reached directly or transitively.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RelatedResource {
    pub id: String,
    pub transitive: bool,
}

/// All simple paths from `source` to `target` in the outgoing direction,
/// length at most `max_depth` edges, optionally restricted to a
/// relationship-type whitelist. Cycle-safe: never revisits a node
/// within a single path.
pub fn find_paths(
    graph: &ResourceGraph,
    source: &str,
    target: &str,
    max_depth: usize,
    relationship_types: Option<&[RelationshipType]>,
) -> Vec<Vec<String>> {
    let mut results = Vec::new();
    let mut visited = BTreeSet::new();
    let mut path = vec![source.to_string()];
    visited.insert(source.to_string());
    dfs(graph, source, target, max_depth, relationship_types, &mut visited, &mut path, &mut results);
    results
}

fn dfs(
    graph: &ResourceGraph,
    current: &str,
    target: &str,
    depth_remaining: usize,
    relationship_types: Option<&[RelationshipType]>,
    visited: &mut BTreeSet<String>,
    path: &mut Vec<String>,
    results: &mut Vec<Vec<String>>,
) {
    if current == target {
        results.push(path.clone());
        return;
    }
    if depth_remaining == 0 {
        return;
    }
    for edge in graph.get_edges(current, Direction::Outgoing) {
        if let Some(allowed) = relationship_types {
            if !allowed.contains(&edge.relationship_type) {
                continue;
            }
        }
        if visited.contains(&edge.target) {
            continue;
        }
        visited.insert(edge.target.clone());
        path.push(edge.target.clone());
        dfs(graph, &edge.target, target, depth_remaining - 1, relationship_types, visited, path, results);
        path.pop();
        visited.remove(&edge.target);
    }
}

/// Nodes reachable from `id` via edges of `types` in `direction`.
/// Non-transitive: only the immediate neighbourhood. If `transitive`,
/// recurses up to `max_depth` layers, tagging results reached beyond the
/// first layer accordingly, deduplicated by identifier.
pub fn find_related_resources(
    graph: &ResourceGraph,
    id: &str,
    direction: Direction,
    types: &[RelationshipType],
    max_depth: usize,
    transitive: bool,
) -> Vec<RelatedResource> {
    let mut seen = BTreeSet::new();
    seen.insert(id.to_string());
    let mut results = Vec::new();

    let mut frontier = vec![id.to_string()];
    let mut depth = 0;
    let limit = if transitive { max_depth } else { 1 };

    while depth < limit && !frontier.is_empty() {
        let mut next_frontier = Vec::new();
        for node_id in &frontier {
            for t in types {
                for node in graph.get_connected_nodes(node_id, direction, Some(*t)) {
                    if seen.insert(node.id.clone()) {
                        results.push(RelatedResource { id: node.id.clone(), transitive: depth > 0 });
                        next_frontier.push(node.id.clone());
                    }
                }
            }
        }
        frontier = next_frontier;
        depth += 1;
    }

    results
}

const DERIVED_TYPES: [RelationshipType; 6] = [
    RelationshipType::WasDerivedFrom,
    RelationshipType::WasRevisionOf,
    RelationshipType::WasQuotedFrom,
    RelationshipType::Generates,
    RelationshipType::TrainedOn,
    RelationshipType::FineTunedFrom,
];
const DEPENDENCY_TYPES: [RelationshipType; 3] =
    [RelationshipType::DependsOn, RelationshipType::Requires, RelationshipType::Uses];
const COMPONENT_TYPES: [RelationshipType; 2] = [RelationshipType::HasComponent, RelationshipType::Contains];
const SOURCE_TYPES: [RelationshipType; 5] = [
    RelationshipType::WasDerivedFrom,
    RelationshipType::WasGeneratedBy,
    RelationshipType::Used,
    RelationshipType::TrainedOn,
    RelationshipType::FineTunedFrom,
];

pub fn find_derived_resources(graph: &ResourceGraph, id: &str, max_depth: usize, transitive: bool) -> Vec<RelatedResource> {
    find_related_resources(graph, id, Direction::Outgoing, &DERIVED_TYPES, max_depth, transitive)
}

pub fn find_dependencies(graph: &ResourceGraph, id: &str, max_depth: usize, transitive: bool) -> Vec<RelatedResource> {
    find_related_resources(graph, id, Direction::Outgoing, &DEPENDENCY_TYPES, max_depth, transitive)
}

pub fn find_components(graph: &ResourceGraph, id: &str, max_depth: usize, transitive: bool) -> Vec<RelatedResource> {
    find_related_resources(graph, id, Direction::Outgoing, &COMPONENT_TYPES, max_depth, transitive)
}

pub fn find_dependents(graph: &ResourceGraph, id: &str, max_depth: usize, transitive: bool) -> Vec<RelatedResource> {
    find_related_resources(graph, id, Direction::Incoming, &DEPENDENCY_TYPES, max_depth, transitive)
}

pub fn find_sources(graph: &ResourceGraph, id: &str, max_depth: usize, transitive: bool) -> Vec<RelatedResource> {
    find_related_resources(graph, id, Direction::Incoming, &SOURCE_TYPES, max_depth, transitive)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node::EntityType;
    use serde_json::json;

    fn sample_graph() -> ResourceGraph {
        let mut g = ResourceGraph::new();
        g.add_node("A", EntityType::Dataset, "A", json!({}));
        g.add_node("B", EntityType::AIModel, "B", json!({}));
        g.add_node("C", EntityType::TextContent, "C", json!({}));
        g.add_edge("A", "B", RelationshipType::Used, json!({})).unwrap();
        g.add_edge("B", "C", RelationshipType::WasGeneratedBy, json!({})).unwrap();
        g
    }

    #[test]
    fn find_paths_returns_the_single_simple_path() {
        let g = sample_graph();
        let paths = find_paths(&g, "A", "C", 5, None);
        assert_eq!(paths, vec![vec!["A".to_string(), "B".to_string(), "C".to_string()]]);
    }

    #[test]
    fn find_paths_respects_max_depth() {
        let g = sample_graph();
        assert!(find_paths(&g, "A", "C", 1, None).is_empty());
    }

    #[test]
    fn find_paths_does_not_revisit_nodes_in_a_single_path() {
        let mut g = sample_graph();
        g.add_edge("C", "A", RelationshipType::Follows, json!({})).unwrap();
        let paths = find_paths(&g, "A", "C", 10, None);
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn find_sources_reaches_immediate_and_transitive_origin() {
        let g = sample_graph();
        let direct = find_sources(&g, "C", 1, false);
        assert_eq!(direct.len(), 1);
        assert_eq!(direct[0].id, "B");
        assert!(!direct[0].transitive);

        let transitive = find_sources(&g, "C", 2, true);
        let ids: Vec<&str> = transitive.iter().map(|r| r.id.as_str()).collect();
        assert!(ids.contains(&"A"));
        assert!(ids.contains(&"B"));
        let a = transitive.iter().find(|r| r.id == "A").unwrap();
        assert!(a.transitive);
    }
}
