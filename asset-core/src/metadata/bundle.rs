//! The hierarchical metadata bundle: a fixed set of five named layers,
//! each holding an arbitrary JSON document.

use std::collections::BTreeMap;

use serde_json::Value;

use super::error::MetadataError;
use super::layer::{self, LayerTag};

#[derive(Clone, Debug, Default)]
pub struct MetadataBundle {
    layers: BTreeMap<&'static str, Value>,
}

impl MetadataBundle {
    pub fn new() -> Self {
        MetadataBundle { layers: BTreeMap::new() }
    }

    /// Replaces the contents of `tag`'s layer.
    pub fn set_layer(&mut self, tag: LayerTag, value: Value) {
        self.layers.insert(tag.as_str(), value);
    }

    pub fn get_layer(&self, tag: LayerTag) -> Option<&Value> {
        self.layers.get(tag.as_str())
    }

    /// Sets a field at `dot_path` within `tag`'s layer, creating missing
    /// intermediate objects. The layer is created empty if absent.
    pub fn update_field(&mut self, tag: LayerTag, dot_path: &str, value: Value) {
        let layer = self.layers.entry(tag.as_str()).or_insert_with(|| Value::Object(Default::default()));
        let segments: Vec<&str> = dot_path.split('.').collect();
        set_at_path(layer, &segments, value);
    }

    pub fn validate_layer(&self, tag: LayerTag) -> Result<(), MetadataError> {
        match self.get_layer(tag) {
            Some(value) => layer::validate(tag, value),
            None => layer::validate(tag, &Value::Object(Default::default())),
        }
    }

    /// Validates every layer currently present, collecting all failures.
    pub fn validate_all(&self) -> Result<(), Vec<MetadataError>> {
        let errors: Vec<MetadataError> = LayerTag::ALL
            .iter()
            .filter(|tag| self.layers.contains_key(tag.as_str()))
            .filter_map(|tag| self.validate_layer(*tag).err())
            .collect();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Builds a document containing only the named layers, plus the
    /// identity layer (if present) as context.
    pub fn selective_view(&self, tags: &[LayerTag]) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(identity) = self.get_layer(LayerTag::Identity) {
            map.insert(LayerTag::Identity.as_str().to_string(), identity.clone());
        }
        for tag in tags {
            if let Some(value) = self.get_layer(*tag) {
                map.insert(tag.as_str().to_string(), value.clone());
            }
        }
        Value::Object(map)
    }

    /// Appends `{type, data}` to the provenance layer's `claim.assertions`
    /// array, creating `claim`/`assertions` if absent.
    pub fn add_assertion(&mut self, assertion_type: &str, data: Value) {
        let layer = self
            .layers
            .entry(LayerTag::Provenance.as_str())
            .or_insert_with(|| Value::Object(Default::default()));
        let claim = layer
            .as_object_mut()
            .expect("provenance layer is always an object")
            .entry("claim")
            .or_insert_with(|| Value::Object(Default::default()));
        let assertions = claim
            .as_object_mut()
            .expect("claim is always an object")
            .entry("assertions")
            .or_insert_with(|| Value::Array(Vec::new()));
        assertions
            .as_array_mut()
            .expect("assertions is always an array")
            .push(serde_json::json!({ "type": assertion_type, "data": data }));
    }
}

fn set_at_path(current: &mut Value, segments: &[&str], value: Value) {
    if !current.is_object() {
        *current = Value::Object(Default::default());
    }
    let map = current.as_object_mut().expect("just coerced to object");
    match segments {
        [] => {}
        [last] => {
            map.insert((*last).to_string(), value);
        }
        [head, rest @ ..] => {
            let child = map.entry((*head).to_string()).or_insert_with(|| Value::Object(Default::default()));
            set_at_path(child, rest, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_and_get_layer_round_trip() {
        let mut bundle = MetadataBundle::new();
        bundle.set_layer(LayerTag::Identity, json!({"id": "did:asset:text:abc"}));
        assert_eq!(bundle.get_layer(LayerTag::Identity).unwrap()["id"], "did:asset:text:abc");
    }

    #[test]
    fn update_field_creates_missing_intermediate_objects() {
        let mut bundle = MetadataBundle::new();
        bundle.update_field(LayerTag::Rights, "permission.0.action", json!("reproduce"));
        let layer = bundle.get_layer(LayerTag::Rights).unwrap();
        assert_eq!(layer["permission"]["0"]["action"], "reproduce");
    }

    #[test]
    fn validate_all_collects_every_layer_failure() {
        let mut bundle = MetadataBundle::new();
        bundle.set_layer(LayerTag::Identity, json!({}));
        bundle.set_layer(LayerTag::Rights, json!({}));
        let errors = bundle.validate_all().unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn selective_view_always_includes_identity() {
        let mut bundle = MetadataBundle::new();
        bundle.set_layer(LayerTag::Identity, json!({"id": "did:asset:text:abc"}));
        bundle.set_layer(LayerTag::Rights, json!({"permission": [], "prohibition": [], "obligation": []}));
        bundle.set_layer(LayerTag::Lineage, json!({"entities": {}, "activities": {}, "agents": {}}));

        let view = bundle.selective_view(&[LayerTag::Rights]);
        assert!(view.get("identity").is_some());
        assert!(view.get("rights").is_some());
        assert!(view.get("lineage").is_none());
    }

    #[test]
    fn add_assertion_appends_to_claim_assertions() {
        let mut bundle = MetadataBundle::new();
        bundle.add_assertion("c2pa.hash", json!({"alg": "sha256"}));
        bundle.add_assertion("c2pa.actions", json!({"action": "created"}));
        let layer = bundle.get_layer(LayerTag::Provenance).unwrap();
        let assertions = layer["claim"]["assertions"].as_array().unwrap();
        assert_eq!(assertions.len(), 2);
        assert_eq!(assertions[0]["type"], "c2pa.hash");
    }
}
