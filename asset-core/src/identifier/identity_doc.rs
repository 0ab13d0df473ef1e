//! Identity document synthesis.
//!
//! Given a resolved [`Identifier`], builds a minimal DID-style identity
//! document: a default verification method, an authentication reference
//! to it, and a service endpoint set appropriate to the resource type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attributes::ResourceType;
use super::identifier::Identifier;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub method_type: String,
    pub controller: String,
    pub public_key_multibase: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServiceEndpoint {
    pub id: String,
    #[serde(rename = "type")]
    pub service_type: String,
    pub service_endpoint: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IdentityDocument {
    pub id: String,
    pub controller: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub verification_method: Vec<VerificationMethod>,
    pub authentication: Vec<String>,
    pub service: Vec<ServiceEndpoint>,
}

fn endpoint(id: &str, tag: &str, service_type: &str) -> ServiceEndpoint {
    ServiceEndpoint {
        id: format!("{id}#{tag}"),
        service_type: service_type.to_string(),
        service_endpoint: format!("asset://{id}/{tag}"),
    }
}

fn service_endpoints(id: &str, resource_type: ResourceType) -> Vec<ServiceEndpoint> {
    let mut endpoints = vec![
        endpoint(id, "metadata", "MetadataService"),
        endpoint(id, "watermark", "WatermarkService"),
        endpoint(id, "provenance", "ProvenanceService"),
        endpoint(id, "c2pa", "C2paService"),
    ];
    match resource_type {
        ResourceType::AiModel => endpoints.push(endpoint(id, "mcp", "ModelInterfaceService")),
        ResourceType::Dataset => endpoints.push(endpoint(id, "explore", "DatasetExploreService")),
        ResourceType::Code => endpoints.push(endpoint(id, "execute", "CodeExecutionService")),
        _ => {}
    }
    endpoints
}

/// Synthesizes a fresh identity document for `identifier`, stamping
/// `created` and `updated` to the same instant.
pub fn synthesize(identifier: &Identifier) -> IdentityDocument {
    let id = identifier.to_did_string();
    let now = Utc::now();
    let verification_method_id = format!("{id}#default");
    IdentityDocument {
        id: id.clone(),
        controller: id.clone(),
        created: now,
        updated: now,
        verification_method: vec![VerificationMethod {
            id: verification_method_id.clone(),
            method_type: "Ed25519VerificationKey2020".to_string(),
            controller: id.clone(),
            public_key_multibase: String::new(),
        }],
        authentication: vec![verification_method_id],
        service: service_endpoints(&id, identifier.resource_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encoding;

    #[test]
    fn synthesized_document_references_its_own_verification_method() {
        let identifier = Identifier::new(
            "asset",
            ResourceType::AiModel,
            [7u8; 32],
            None,
            Encoding::Hex,
        );
        let doc = synthesize(&identifier);
        assert_eq!(doc.authentication.len(), 1);
        assert_eq!(doc.authentication[0], doc.verification_method[0].id);
        assert!(doc.authentication[0].starts_with(&doc.id));
    }

    #[test]
    fn service_endpoints_vary_by_resource_type() {
        let model = Identifier::new("asset", ResourceType::AiModel, [1u8; 32], None, Encoding::Hex);
        let text = Identifier::new("asset", ResourceType::Text, [1u8; 32], None, Encoding::Hex);
        let model_doc = synthesize(&model);
        let text_doc = synthesize(&text);
        assert!(model_doc.service.iter().any(|s| s.id.ends_with("#mcp")));
        assert!(!text_doc.service.iter().any(|s| s.id.ends_with("#mcp")));
    }
}
