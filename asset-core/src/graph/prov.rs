//! PROV projection: partitions graph nodes into PROV's entity/activity/
//! agent buckets and maps each edge's relationship type onto the
//! appropriate predicate on the correct subject, and the reverse.
//!
//! Only five relationship types are PROV vocabulary (`wasDerivedFrom`,
//! `wasGeneratedBy`, `used`, `wasAttributedTo`, `wasAssociatedWith`);
//! everything else is recorded under an `asset:{type}` key on the source
//! entity. A PROV-vocabulary predicate is only recorded when its subject
//! node actually belongs to the partition that predicate requires:
//! `used`/`wasAssociatedWith` need an activity-typed source,
//! `wasAttributedTo` needs an entity-typed source, and
//! `wasDerivedFrom`/`wasGeneratedBy` need an entity-typed target. An
//! edge whose subject node is classified into the wrong partition
//! contributes nothing to the projection, rather than forcing a phantom
//! partition entry into existence.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value, json};

use super::edge::RelationshipType;
use super::graph::ResourceGraph;
use super::node::EntityType;

enum Subject {
    SourceActivity,
    SourceEntity,
    TargetEntity,
}

fn prov_predicate(rt: RelationshipType) -> Option<(Subject, &'static str)> {
    match rt {
        RelationshipType::WasDerivedFrom => Some((Subject::TargetEntity, "prov:wasDerivedFrom")),
        RelationshipType::WasGeneratedBy => Some((Subject::TargetEntity, "prov:wasGeneratedBy")),
        RelationshipType::Used => Some((Subject::SourceActivity, "prov:used")),
        RelationshipType::WasAssociatedWith => Some((Subject::SourceActivity, "prov:wasAssociatedWith")),
        RelationshipType::WasAttributedTo => Some((Subject::SourceEntity, "prov:wasAttributedTo")),
        _ => None,
    }
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum Partition {
    Entity,
    Activity,
    Agent,
}

fn partition_of(entity_type: EntityType) -> Partition {
    if entity_type.is_activity() {
        Partition::Activity
    } else if entity_type.is_agent_like() {
        Partition::Agent
    } else {
        Partition::Entity
    }
}

type PredicateMap = BTreeMap<String, BTreeMap<String, BTreeSet<String>>>;

/// Projects `graph` to a PROV document: `{agent, activity, entity}`,
/// each a map keyed by node identifier with stable key and array
/// ordering.
pub fn to_prov(graph: &ResourceGraph) -> Value {
    let mut entity: PredicateMap = BTreeMap::new();
    let mut activity: PredicateMap = BTreeMap::new();
    let mut agent: PredicateMap = BTreeMap::new();

    for node in graph.nodes() {
        let bucket = match partition_of(node.entity_type) {
            Partition::Entity => &mut entity,
            Partition::Activity => &mut activity,
            Partition::Agent => &mut agent,
        };
        bucket.entry(node.id.clone()).or_default();
    }

    for edge in graph.edges() {
        let (partition, subject_id, other_id, key): (Partition, &String, &String, String) =
            match prov_predicate(edge.relationship_type) {
                Some((Subject::TargetEntity, key)) => (Partition::Entity, &edge.target, &edge.source, key.to_string()),
                Some((Subject::SourceActivity, key)) => (Partition::Activity, &edge.source, &edge.target, key.to_string()),
                Some((Subject::SourceEntity, key)) => (Partition::Entity, &edge.source, &edge.target, key.to_string()),
                None => (
                    Partition::Entity,
                    &edge.source,
                    &edge.target,
                    format!("asset:{}", edge.relationship_type.as_str()),
                ),
            };

        let bucket = match partition {
            Partition::Entity => &mut entity,
            Partition::Activity => &mut activity,
            Partition::Agent => &mut agent,
        };
        if let Some(entry) = bucket.get_mut(subject_id) {
            entry.entry(key).or_default().insert(other_id.clone());
        }
    }

    json!({
        "entity": predicate_map_to_json(&entity),
        "activity": predicate_map_to_json(&activity),
        "agent": predicate_map_to_json(&agent),
    })
}

fn predicate_map_to_json(map: &PredicateMap) -> Value {
    let mut out = Map::new();
    for (id, predicates) in map {
        let mut entry = Map::new();
        for (key, values) in predicates {
            entry.insert(key.clone(), Value::Array(values.iter().map(|v| Value::String(v.clone())).collect()));
        }
        out.insert(id.clone(), Value::Object(entry));
    }
    Value::Object(out)
}

/// Reconstructs a graph equivalent under [`to_prov`] from a PROV
/// document: re-running `to_prov` on the result reproduces the input on
/// its PROV-covered subset. Reconstructed nodes carry only the generic
/// entity type for their partition (`DigitalResource`, `Activity`, or
/// `Agent`); the original, more specific entity-type tags are not
/// recoverable from a PROV document.
pub fn from_prov(doc: &Value) -> ResourceGraph {
    let mut graph = ResourceGraph::new();

    for (id, entity_type) in [
        ("entity", EntityType::DigitalResource),
        ("activity", EntityType::Activity),
        ("agent", EntityType::Agent),
    ] {
        if let Some(Value::Object(bucket)) = doc.get(id) {
            for key in bucket.keys() {
                graph.add_node(key.clone(), entity_type, key.clone(), json!({}));
            }
        }
    }

    if let Some(Value::Object(entities)) = doc.get("entity") {
        for (id, predicates) in entities {
            add_edges_for(&mut graph, id, predicates, "prov:wasDerivedFrom", |other, id| (other, id, RelationshipType::WasDerivedFrom));
            add_edges_for(&mut graph, id, predicates, "prov:wasGeneratedBy", |other, id| (other, id, RelationshipType::WasGeneratedBy));
            add_edges_for(&mut graph, id, predicates, "prov:wasAttributedTo", |id, other| (id, other, RelationshipType::WasAttributedTo));
            if let Value::Object(predicates) = predicates {
                for (key, values) in predicates {
                    if let Some(rt_name) = key.strip_prefix("asset:") {
                        if let (Ok(rt), Value::Array(values)) = (RelationshipType::parse(rt_name), values) {
                            for other in values.iter().filter_map(Value::as_str) {
                                let _ = graph.add_edge(id, other, rt, json!({}));
                            }
                        }
                    }
                }
            }
        }
    }
    if let Some(Value::Object(activities)) = doc.get("activity") {
        for (id, predicates) in activities {
            add_edges_for(&mut graph, id, predicates, "prov:used", |id, other| (id, other, RelationshipType::Used));
            add_edges_for(&mut graph, id, predicates, "prov:wasAssociatedWith", |id, other| (id, other, RelationshipType::WasAssociatedWith));
        }
    }

    graph
}

fn add_edges_for(
    graph: &mut ResourceGraph,
    node_id: &str,
    predicates: &Value,
    key: &str,
    endpoints: impl Fn(&str, &str) -> (String, String, RelationshipType),
) {
    let Value::Object(predicates) = predicates else { return };
    let Some(Value::Array(values)) = predicates.get(key) else { return };
    for other in values.iter().filter_map(Value::as_str) {
        let (source, target, rt) = endpoints(other, node_id);
        let _ = graph.add_edge(&source, &target, rt, json!({}));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn used_edge_from_a_non_activity_source_is_dropped() {
        let doc = to_prov(&sample_graph());
        assert_eq!(doc["activity"].as_object().unwrap().len(), 0);
        assert_eq!(doc["agent"].as_object().unwrap().len(), 0);
        assert_eq!(doc["entity"].as_object().unwrap().len(), 3);
    }

    #[test]
    fn was_generated_by_attaches_to_target_entity() {
        let doc = to_prov(&sample_graph());
        let c = &doc["entity"]["C"];
        assert_eq!(c["prov:wasGeneratedBy"], json!(["B"]));
        assert_eq!(doc["entity"]["A"], json!({}));
        assert_eq!(doc["entity"]["B"], json!({}));
    }

    #[test]
    fn non_prov_relationship_goes_under_asset_namespace() {
        let mut g = ResourceGraph::new();
        g.add_node("A", EntityType::Dataset, "A", json!({}));
        g.add_node("B", EntityType::AIModel, "B", json!({}));
        g.add_edge("A", "B", RelationshipType::TrainedOn, json!({})).unwrap();
        let doc = to_prov(&g);
        assert_eq!(doc["entity"]["A"]["asset:trainedOn"], json!(["B"]));
    }

    #[test]
    fn reverse_projection_round_trips_on_prov_covered_subset() {
        let doc = to_prov(&sample_graph());
        let reconstructed = from_prov(&doc);
        let doc_again = to_prov(&reconstructed);
        assert_eq!(doc, doc_again);
    }
}
