//! The five named layer slots of the hierarchical metadata bundle, and
//! their validation rules.

use serde_json::Value;

use super::error::MetadataError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum LayerTag {
    Identity,
    Provenance,
    Characteristics,
    Lineage,
    Rights,
}

impl LayerTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerTag::Identity => "identity",
            LayerTag::Provenance => "provenance",
            LayerTag::Characteristics => "characteristics",
            LayerTag::Lineage => "lineage",
            LayerTag::Rights => "rights",
        }
    }

    pub const ALL: [LayerTag; 5] = [
        LayerTag::Identity,
        LayerTag::Provenance,
        LayerTag::Characteristics,
        LayerTag::Lineage,
        LayerTag::Rights,
    ];
}

fn missing_fields(value: &Value, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|field| value.get(**field).is_none())
        .map(|field| field.to_string())
        .collect()
}

/// True when the value is present and not null, not an empty string,
/// not an empty array, not an empty object.
fn is_non_empty(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        _ => true,
    }
}

fn field_non_empty(value: &Value, field: &str) -> bool {
    value.get(field).map(is_non_empty).unwrap_or(false)
}

/// Validates a layer's content against its required-field set.
pub fn validate(tag: LayerTag, value: &Value) -> Result<(), MetadataError> {
    match tag {
        LayerTag::Identity => {
            let missing = missing_fields(value, &["id", "controller"]);
            if missing.is_empty() {
                Ok(())
            } else {
                Err(MetadataError::InvalidIdentityLayer(missing))
            }
        }
        LayerTag::Provenance => {
            let mut missing = Vec::new();
            if !field_non_empty(value, "claim") {
                missing.push("claim".to_string());
            }
            if let Some(signature) = value.get("signature") {
                if !field_non_empty(signature, "value") {
                    missing.push("signature.value".to_string());
                }
            }
            if missing.is_empty() {
                Ok(())
            } else {
                Err(MetadataError::InvalidProvenanceLayer(missing))
            }
        }
        LayerTag::Characteristics => {
            let mut missing = missing_fields(value, &["resourceType"]);
            let kind = value.get("kind").and_then(Value::as_str);
            if matches!(kind, Some("model-card") | Some("data-sheet")) {
                missing.extend(missing_fields(value, &["name", "description"]));
            }
            if missing.is_empty() {
                Ok(())
            } else {
                Err(MetadataError::InvalidCharacteristicsLayer(missing))
            }
        }
        LayerTag::Lineage => {
            let has_any = ["entity", "activity", "agent"].iter().any(|field| field_non_empty(value, field));
            if has_any {
                Ok(())
            } else {
                Err(MetadataError::InvalidLineageLayer(vec!["entity|activity|agent".to_string()]))
            }
        }
        LayerTag::Rights => {
            let mut missing = Vec::new();
            match value.get("license") {
                Some(license) => missing.extend(
                    missing_fields(license, &["type", "url"]).into_iter().map(|f| format!("license.{f}")),
                ),
                None => missing.push("license".to_string()),
            }
            if missing.is_empty() {
                Ok(())
            } else {
                Err(MetadataError::InvalidRightsLayer(missing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_layer_requires_id_and_controller() {
        assert!(validate(LayerTag::Identity, &json!({"id": "did:asset:text:abc"})).is_err());
        assert!(validate(LayerTag::Identity, &json!({"id": "did:asset:text:abc", "controller": "did:asset:text:abc"})).is_ok());
    }

    #[test]
    fn provenance_layer_requires_non_empty_claim() {
        assert!(validate(LayerTag::Provenance, &json!({"claim": {}})).is_err());
        assert!(validate(LayerTag::Provenance, &json!({"claim": {"assertion": "x"}})).is_ok());
    }

    #[test]
    fn provenance_layer_requires_signature_value_when_signature_present() {
        assert!(validate(LayerTag::Provenance, &json!({"claim": {"a": 1}, "signature": {}})).is_err());
        assert!(validate(LayerTag::Provenance, &json!({"claim": {"a": 1}, "signature": {"value": "sig"}})).is_ok());
    }

    #[test]
    fn characteristics_layer_requires_name_and_description_for_model_card() {
        assert!(validate(LayerTag::Characteristics, &json!({"resourceType": "ai-model", "kind": "model-card"})).is_err());
        assert!(validate(
            LayerTag::Characteristics,
            &json!({"resourceType": "ai-model", "kind": "model-card", "name": "n", "description": "d"})
        )
        .is_ok());
        assert!(validate(LayerTag::Characteristics, &json!({"resourceType": "text", "kind": "general"})).is_ok());
    }

    #[test]
    fn lineage_layer_requires_at_least_one_non_empty_field() {
        assert!(validate(LayerTag::Lineage, &json!({})).is_err());
        assert!(validate(LayerTag::Lineage, &json!({"entity": []})).is_err());
        assert!(validate(LayerTag::Lineage, &json!({"entity": [{"id": "x"}]})).is_ok());
    }

    #[test]
    fn rights_layer_requires_license_type_and_url() {
        assert!(validate(LayerTag::Rights, &json!({})).is_err());
        assert!(validate(LayerTag::Rights, &json!({"license": {"type": "CC-BY"}})).is_err());
        assert!(validate(LayerTag::Rights, &json!({"license": {"type": "CC-BY", "url": "https://example.org"}})).is_ok());
    }
}
