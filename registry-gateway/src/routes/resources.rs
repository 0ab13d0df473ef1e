use std::collections::BTreeMap;

use axum::{Json, extract::{Path, State}, http::StatusCode};
use serde::{Deserialize, Serialize};

use asset_core::encoding::{Encoding, canonical_bytes_of, encode, sha256};
use asset_core::identifier::{AttributeMap, AttributeValue, Identifier, ResourceType};
use asset_core::metadata::{LayerTag, MetadataBundle, integrated_view};
use asset_core::watermark::{EmbedOptions, Payload, Resource, TextStrategy, WatermarkStrategy};

use crate::state::{RegisteredResource, SharedState};

/// Request body for `POST /resources/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterResourceRequest {
    /// One of the closed GLOSSARY resource-type tags, e.g. `"text"`.
    pub resource_type: String,
    /// Ordinary (non-raw-byte) attributes, keyed by the resource type's
    /// declared field names.
    #[serde(default)]
    pub attributes: BTreeMap<String, serde_json::Value>,
    /// Attributes whose value is raw byte content, hex-encoded; these are
    /// pre-digested before joining the canonical tree.
    #[serde(default)]
    pub raw_byte_attributes: BTreeMap<String, String>,
    /// Owner identity folded into the identifier's owner tag, if given.
    pub owner: Option<String>,
    /// Initial per-layer metadata, keyed by layer tag (`identity`,
    /// `provenance`, `characteristics`, `lineage`, `rights`).
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
    /// Carrier text to embed a watermark payload into, for text resources.
    pub watermark_text: Option<String>,
}

/// Response body for `POST /resources/register`.
#[derive(Debug, Serialize)]
pub struct RegisterResourceResponse {
    pub content_id: String,
    pub metadata_hash: String,
    pub transaction: String,
    pub watermarked_text: Option<String>,
}

/// Response body for `GET /resources/:id`.
#[derive(Debug, Serialize)]
pub struct GetResourceResponse {
    pub identifier: String,
    pub metadata: serde_json::Value,
    pub verification: Option<bool>,
}

fn layer_tag_for(name: &str) -> Option<LayerTag> {
    LayerTag::ALL.into_iter().find(|t| t.as_str() == name)
}

fn build_attribute_map(req: &RegisterResourceRequest) -> Result<AttributeMap, (StatusCode, String)> {
    let mut attrs = AttributeMap::new();
    for (key, value) in &req.attributes {
        attrs.insert(key.clone(), AttributeValue::Json(value.clone()));
    }
    for (key, hex_value) in &req.raw_byte_attributes {
        let bytes = hex::decode(hex_value).map_err(|_| bad_request(format!("invalid hex for attribute {key}")))?;
        attrs.insert(key.clone(), AttributeValue::Bytes(bytes));
    }
    Ok(attrs)
}

fn bad_request(msg: impl Into<String>) -> (StatusCode, String) {
    (StatusCode::BAD_REQUEST, msg.into())
}

/// `POST /resources/register`
///
/// Derives an identifier from the submitted resource type and
/// attributes, assembles a metadata bundle from the submitted layers
/// (plus a synthesized identity layer), optionally embeds a watermark
/// payload in supplied carrier text, and stores the result in the
/// in-memory registry.
pub async fn register_resource(
    State(state): State<SharedState>,
    Json(body): Json<RegisterResourceRequest>,
) -> Result<(StatusCode, Json<RegisterResourceResponse>), (StatusCode, String)> {
    let resource_type = ResourceType::parse(&body.resource_type).map_err(|e| bad_request(e.to_string()))?;
    let attrs = build_attribute_map(&body)?;

    let identifier = Identifier::derive(
        state.config.identifier.method.clone(),
        resource_type,
        &attrs,
        body.owner.as_deref(),
        state.config.identifier.encoding,
    )
    .map_err(|e| bad_request(e.to_string()))?;

    let did = identifier.to_did_string();
    let controller = body.owner.clone().unwrap_or_else(|| did.clone());

    let mut bundle = MetadataBundle::new();
    for (layer_name, value) in &body.metadata {
        let Some(tag) = layer_tag_for(layer_name) else {
            return Err(bad_request(format!("unknown metadata layer: {layer_name}")));
        };
        bundle.set_layer(tag, value.clone());
    }
    let mut identity = match bundle.get_layer(LayerTag::Identity) {
        Some(serde_json::Value::Object(map)) => map.clone(),
        _ => serde_json::Map::new(),
    };
    identity.insert("id".to_string(), serde_json::Value::String(did.clone()));
    identity.entry("controller").or_insert(serde_json::Value::String(controller));
    bundle.set_layer(LayerTag::Identity, serde_json::Value::Object(identity));

    bundle.validate_all().map_err(|errors| {
        let joined = errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ");
        bad_request(joined)
    })?;

    let integrated = integrated_view(&bundle, resource_type);
    let metadata_hash = encode(&sha256(&canonical_bytes_of(&integrated)), Encoding::Hex);

    let mut watermarked_text = None;
    if let Some(carrier) = &body.watermark_text {
        let strategy = TextStrategy { channel: state.config.watermark.default_channel };
        let payload = Payload {
            did: did.clone(),
            timestamp: chrono::Utc::now().timestamp(),
            metadata_hash: Some(metadata_hash.clone()),
            issuer: body.owner.clone(),
            expiration_date: None,
        };
        let embedded = strategy
            .embed(&Resource::Text(carrier.clone()), &payload, &EmbedOptions::default())
            .map_err(|e| bad_request(e.to_string()))?;
        let Resource::Text(text) = embedded else { unreachable!("text strategy always returns text") };
        watermarked_text = Some(text);
    }

    let registered = RegisteredResource {
        identifier: identifier.clone(),
        metadata: bundle,
        watermarked_text: watermarked_text.clone(),
    };

    {
        let mut registry = state.registry.lock().await;
        registry.insert(registered);
    }

    tracing::info!(identifier = %did, "registered resource");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResourceResponse {
            content_id: did,
            metadata_hash,
            transaction: format!("stub-tx-{}", hex::encode(&identifier.digest[..8])),
            watermarked_text,
        }),
    ))
}

/// `GET /resources/:id`
///
/// Returns the stored metadata bundle's integrated view, plus a
/// watermark re-verification result if the resource was registered
/// with embedded carrier text.
pub async fn get_resource(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<GetResourceResponse>, (StatusCode, String)> {
    let registry = state.registry.lock().await;
    let resource = registry
        .get(&id)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("no resource registered for {id}")))?;

    let resource_type = resource.identifier.resource_type;
    let integrated = integrated_view(&resource.metadata, resource_type);

    let verification = resource.watermarked_text.as_ref().map(|text| {
        let strategy = TextStrategy { channel: state.config.watermark.default_channel };
        let expected = Payload { did: id.clone(), timestamp: 0, metadata_hash: None, issuer: None, expiration_date: None };
        strategy.verify(&Resource::Text(text.clone()), &expected, &EmbedOptions::default())
    });

    tracing::info!(identifier = %id, "fetched resource");

    Ok(Json(GetResourceResponse { identifier: id, metadata: integrated, verification }))
}
