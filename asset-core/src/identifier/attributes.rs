//! Canonical attribute sets.
//!
//! Each resource type declares an ordered set of required and optional
//! fields. Deriving an identifier validates that the required fields are
//! present and then folds `{resourceType} ∪ attrs` into a single JSON tree
//! that gets canonicalised and hashed. Fields whose value is raw byte
//! content are digested directly rather than canonicalised: their
//! contribution to the tree is the hex digest of their bytes, not the
//! bytes themselves (which canonical JSON has no way to represent anyway).

use std::collections::BTreeMap;

use serde_json::Value;

use super::error::IdentifierError;
use crate::encoding::{Encoding, encode, sha256};

/// The kinds of digital asset this core assigns identifiers to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ResourceType {
    Text,
    Image,
    Audio,
    Video,
    AiModel,
    Dataset,
    Code,
    ExecutionStructure,
    Generic,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Text => "text",
            ResourceType::Image => "image",
            ResourceType::Audio => "audio",
            ResourceType::Video => "video",
            ResourceType::AiModel => "ai-model",
            ResourceType::Dataset => "dataset",
            ResourceType::Code => "code",
            ResourceType::ExecutionStructure => "execution-structure",
            ResourceType::Generic => "generic",
        }
    }

    pub fn parse(name: &str) -> Result<Self, IdentifierError> {
        match name {
            "text" => Ok(ResourceType::Text),
            "image" => Ok(ResourceType::Image),
            "audio" => Ok(ResourceType::Audio),
            "video" => Ok(ResourceType::Video),
            "ai-model" => Ok(ResourceType::AiModel),
            "dataset" => Ok(ResourceType::Dataset),
            "code" => Ok(ResourceType::Code),
            "execution-structure" => Ok(ResourceType::ExecutionStructure),
            "generic" => Ok(ResourceType::Generic),
            other => Err(IdentifierError::UnsupportedResourceType(other.to_string())),
        }
    }
}

/// A single attribute value: either ordinary JSON, or raw byte content
/// that gets pre-digested before joining the canonical tree.
#[derive(Clone, Debug)]
pub enum AttributeValue {
    Json(Value),
    Bytes(Vec<u8>),
}

pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// The declared field set for a resource type.
enum AttributeSpec {
    /// A fixed required/optional field list, as declared for the named
    /// media types.
    Fixed {
        required: &'static [&'static str],
        optional: &'static [&'static str],
    },
    /// No fixed declaration; every attribute the caller supplies
    /// contributes to the canonical tree.
    Open,
}

fn spec_for(resource_type: ResourceType) -> AttributeSpec {
    match resource_type {
        ResourceType::Text => AttributeSpec::Fixed {
            required: &["content_hash", "mime_type", "charset"],
            optional: &["encoding", "language", "format"],
        },
        ResourceType::Image => AttributeSpec::Fixed {
            required: &["content_hash", "mime_type", "dimensions"],
            optional: &[],
        },
        ResourceType::Audio => AttributeSpec::Fixed {
            required: &["content_hash", "mime_type", "duration", "sample_rate"],
            optional: &[],
        },
        ResourceType::Video => AttributeSpec::Fixed {
            required: &["content_hash", "mime_type", "duration", "dimensions"],
            optional: &[],
        },
        ResourceType::AiModel => AttributeSpec::Fixed {
            required: &["model_hash", "architecture", "parameters", "training_dataset_ref"],
            optional: &[],
        },
        ResourceType::Dataset => AttributeSpec::Fixed {
            required: &["data_hash", "record_count", "schema_ref"],
            optional: &[],
        },
        ResourceType::Code => AttributeSpec::Fixed {
            required: &["code_hash", "language", "version"],
            optional: &[],
        },
        ResourceType::ExecutionStructure | ResourceType::Generic => AttributeSpec::Open,
    }
}

fn attribute_value_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::Json(v) => v.clone(),
        AttributeValue::Bytes(bytes) => Value::String(encode(&sha256(bytes), Encoding::Hex)),
    }
}

/// Builds the canonical `{resourceType} ∪ attrs` tree for `resource_type`,
/// validating that every required field is present.
pub fn canonical_attribute_tree(
    resource_type: ResourceType,
    attrs: &AttributeMap,
) -> Result<Value, IdentifierError> {
    let mut map = serde_json::Map::new();
    map.insert(
        "resourceType".to_string(),
        Value::String(resource_type.as_str().to_string()),
    );

    match spec_for(resource_type) {
        AttributeSpec::Fixed { required, optional } => {
            for field in required {
                let value = attrs
                    .get(*field)
                    .ok_or(IdentifierError::MissingRequiredAttribute(field))?;
                map.insert(field.to_string(), attribute_value_to_json(value));
            }
            for field in optional {
                if let Some(value) = attrs.get(*field) {
                    map.insert(field.to_string(), attribute_value_to_json(value));
                }
            }
        }
        AttributeSpec::Open => {
            for (key, value) in attrs.iter() {
                map.insert(key.clone(), attribute_value_to_json(value));
            }
        }
    }

    Ok(Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_attrs() -> AttributeMap {
        let mut attrs = AttributeMap::new();
        attrs.insert(
            "content_hash".to_string(),
            AttributeValue::Bytes(b"hello world".to_vec()),
        );
        attrs.insert(
            "mime_type".to_string(),
            AttributeValue::Json(Value::String("text/plain".to_string())),
        );
        attrs.insert(
            "charset".to_string(),
            AttributeValue::Json(Value::String("utf-8".to_string())),
        );
        attrs
    }

    #[test]
    fn resource_type_round_trips_through_string() {
        for rt in [
            ResourceType::Text,
            ResourceType::Image,
            ResourceType::Audio,
            ResourceType::Video,
            ResourceType::AiModel,
            ResourceType::Dataset,
            ResourceType::Code,
            ResourceType::ExecutionStructure,
            ResourceType::Generic,
        ] {
            assert_eq!(ResourceType::parse(rt.as_str()).unwrap(), rt);
        }
    }

    #[test]
    fn missing_required_attribute_is_rejected() {
        let attrs = AttributeMap::new();
        let err = canonical_attribute_tree(ResourceType::Text, &attrs).unwrap_err();
        match err {
            IdentifierError::MissingRequiredAttribute(field) => assert_eq!(field, "content_hash"),
            other => panic!("expected MissingRequiredAttribute, got {other:?}"),
        }
    }

    #[test]
    fn byte_content_field_is_pre_digested_not_embedded() {
        let tree = canonical_attribute_tree(ResourceType::Text, &text_attrs()).unwrap();
        let content_hash = tree.get("content_hash").unwrap().as_str().unwrap();
        assert_eq!(content_hash.len(), 64);
        assert!(content_hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn open_spec_passes_through_all_supplied_fields() {
        let mut attrs = AttributeMap::new();
        attrs.insert(
            "anything".to_string(),
            AttributeValue::Json(Value::String("goes".to_string())),
        );
        let tree = canonical_attribute_tree(ResourceType::Generic, &attrs).unwrap();
        assert_eq!(tree.get("anything").unwrap().as_str().unwrap(), "goes");
    }

    #[test]
    fn optional_fields_absent_from_input_are_omitted() {
        let tree = canonical_attribute_tree(ResourceType::Text, &text_attrs()).unwrap();
        assert!(tree.get("language").is_none());
    }
}
