//! Asset core library crate.
//!
//! This crate provides the building blocks for content-addressed
//! identification and provenance tracking of heterogeneous digital
//! assets (text, image, audio, video, AI models, datasets, code):
//!
//! - canonical JSON, digests, and TLV framing (`encoding`),
//! - deterministic `did:...` identifier derivation and identity
//!   document synthesis (`identifier`),
//! - a text watermark codec with a pluggable per-media strategy slot
//!   (`watermark`),
//! - a hierarchical metadata bundle with projections to standard
//!   vocabularies (`metadata`),
//! - a PROV-projectable resource relationship graph (`graph`),
//! - and ambient configuration defaults (`config`).
//!
//! Higher-level binaries (such as a registry gateway) compose these
//! pieces into a network-facing service.

pub mod config;
pub mod encoding;
pub mod graph;
pub mod identifier;
pub mod metadata;
pub mod watermark;

pub use config::CoreConfig;

pub use encoding::{Encoding, EncodingError};
pub use graph::{Direction, EntityType, GraphError, RelationshipType, ResourceGraph};
pub use identifier::{AttributeMap, Identifier, IdentifierError, IdentityDocument, ResourceType};
pub use metadata::{LayerTag, MetadataBundle, MetadataError};
pub use watermark::{Payload, WatermarkError, WatermarkStrategy};

use std::fmt;

/// Aggregated error type spanning every subsystem, for callers (such as
/// the registry gateway) that need a single error to propagate across
/// module boundaries.
#[derive(Debug)]
pub enum Error {
    Encoding(EncodingError),
    Identifier(IdentifierError),
    Watermark(WatermarkError),
    Metadata(MetadataError),
    Graph(GraphError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Encoding(e) => write!(f, "encoding error: {e}"),
            Error::Identifier(e) => write!(f, "identifier error: {e}"),
            Error::Watermark(e) => write!(f, "watermark error: {e}"),
            Error::Metadata(e) => write!(f, "metadata error: {e}"),
            Error::Graph(e) => write!(f, "graph error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<EncodingError> for Error {
    fn from(e: EncodingError) -> Self {
        Error::Encoding(e)
    }
}
impl From<IdentifierError> for Error {
    fn from(e: IdentifierError) -> Self {
        Error::Identifier(e)
    }
}
impl From<WatermarkError> for Error {
    fn from(e: WatermarkError) -> Self {
        Error::Watermark(e)
    }
}
impl From<MetadataError> for Error {
    fn from(e: MetadataError) -> Self {
        Error::Metadata(e)
    }
}
impl From<GraphError> for Error {
    fn from(e: GraphError) -> Self {
        Error::Graph(e)
    }
}

/// The `{ok, errorKind?, details?}` shape registration and verification
/// APIs report back to callers, rather than a bare `Result`. Callers
/// need to distinguish the *kind* of failure from its human-readable
/// detail without downcasting.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OperationOutcome {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl OperationOutcome {
    pub fn success() -> Self {
        OperationOutcome { ok: true, error_kind: None, details: None }
    }

    pub fn failure(error_kind: impl Into<String>, details: impl Into<String>) -> Self {
        OperationOutcome { ok: false, error_kind: Some(error_kind.into()), details: Some(details.into()) }
    }
}

impl From<&Error> for OperationOutcome {
    fn from(err: &Error) -> Self {
        let kind = match err {
            Error::Encoding(_) => "encoding",
            Error::Identifier(IdentifierError::UnsupportedResourceType(_)) => "unsupported-resource-type",
            Error::Identifier(IdentifierError::UnsupportedEncoding(_)) => "unsupported-encoding",
            Error::Identifier(IdentifierError::MissingRequiredAttribute(_)) => "missing-required-attribute",
            Error::Identifier(IdentifierError::IdentifierMalformed(_)) => "identifier-malformed",
            Error::Watermark(WatermarkError::InsufficientCarrierCapacity { .. }) => "insufficient-carrier-capacity",
            Error::Watermark(WatermarkError::NotFound) => "not-found",
            Error::Metadata(_) => "invalid-metadata-layer",
            Error::Graph(GraphError::NodeNotFound(_)) => "node-not-found",
            Error::Graph(GraphError::UnsupportedRelationshipType(_)) => "unsupported-relationship-type",
            Error::Graph(GraphError::UnsupportedEntityType(_)) => "unsupported-entity-type",
        };
        OperationOutcome::failure(kind, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_outcome_carries_error_kind_from_each_subsystem() {
        let outcome = OperationOutcome::from(&Error::Watermark(WatermarkError::NotFound));
        assert!(!outcome.ok);
        assert_eq!(outcome.error_kind.as_deref(), Some("not-found"));
    }

    #[test]
    fn operation_outcome_success_has_no_error_kind() {
        let outcome = OperationOutcome::success();
        assert!(outcome.ok);
        assert!(outcome.error_kind.is_none());
    }
}
