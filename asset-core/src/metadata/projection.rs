//! Projections from bundle layers to externally defined vocabularies, and
//! the merged integrated view.

use serde_json::{Map, Value, json};

use super::bundle::MetadataBundle;
use super::layer::LayerTag;
use crate::identifier::ResourceType;

const IDENTITY_CONTEXT: &[&str] = &["https://www.w3.org/ns/did/v1"];
const INTEGRATED_CONTEXT: &[&str] = &[
    "https://www.w3.org/ns/did/v1",
    "https://schema.org",
    "https://www.w3.org/ns/prov",
    "https://www.w3.org/ns/odrl.jsonld",
];

fn context_array(urls: &[&str]) -> Value {
    Value::Array(urls.iter().map(|u| Value::String(u.to_string())).collect())
}

/// Wraps the identity layer with a fixed top-level `@context`.
pub fn project_identity(identity: &Value) -> Value {
    let mut map = match identity {
        Value::Object(m) => m.clone(),
        _ => Map::new(),
    };
    map.insert("@context".to_string(), context_array(IDENTITY_CONTEXT));
    Value::Object(map)
}

/// The provenance projection is the raw claim/signature tree as stored.
pub fn project_provenance(provenance: &Value) -> Value {
    provenance.clone()
}

/// Projects the characteristics layer to a schema.org-style object, whose
/// `@type` depends on the resource type.
pub fn project_characteristics(resource_type: ResourceType, characteristics: &Value) -> Value {
    let mut map = match characteristics {
        Value::Object(m) => m.clone(),
        _ => Map::new(),
    };
    map.remove("kind");
    match resource_type {
        ResourceType::AiModel => {
            map.insert("@type".to_string(), json!("SoftwareApplication"));
            map.insert("applicationCategory".to_string(), json!("AI Model"));
        }
        ResourceType::Dataset => {
            map.insert("@type".to_string(), json!("Dataset"));
            map.entry("variableMeasured").or_insert_with(|| json!([]));
            map.entry("distribution").or_insert_with(|| json!([]));
        }
        _ => {
            map.insert("@type".to_string(), json!("CreativeWork"));
        }
    }
    Value::Object(map)
}

/// The lineage projection is the stored entity/activity/agent document
/// as-is; its shape already matches the PROV-adjacent relation object.
pub fn project_lineage(lineage: &Value) -> Value {
    lineage.clone()
}

/// The rights projection is the stored ODRL-like policy object as-is.
pub fn project_rights(rights: &Value) -> Value {
    rights.clone()
}

/// Merges the fixed integrated-view `@context` with every present
/// layer's projection, keying the characteristics projection by its
/// resulting `@type`.
pub fn integrated_view(bundle: &MetadataBundle, resource_type: ResourceType) -> Value {
    let mut map = Map::new();
    map.insert("@context".to_string(), context_array(INTEGRATED_CONTEXT));

    if let Some(identity) = bundle.get_layer(LayerTag::Identity) {
        map.insert("identity".to_string(), project_identity(identity));
    }
    if let Some(provenance) = bundle.get_layer(LayerTag::Provenance) {
        map.insert("provenance".to_string(), project_provenance(provenance));
    }
    if let Some(characteristics) = bundle.get_layer(LayerTag::Characteristics) {
        let projected = project_characteristics(resource_type, characteristics);
        let key = projected
            .get("@type")
            .and_then(Value::as_str)
            .unwrap_or("CreativeWork")
            .to_string();
        map.insert(key, projected);
    }
    if let Some(lineage) = bundle.get_layer(LayerTag::Lineage) {
        map.insert("lineage".to_string(), project_lineage(lineage));
    }
    if let Some(rights) = bundle.get_layer(LayerTag::Rights) {
        map.insert("rights".to_string(), project_rights(rights));
    }

    Value::Object(map)
}
