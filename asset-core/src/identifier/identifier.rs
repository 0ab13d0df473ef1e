//! Identifier assembly and decompression.
//!
//! An identifier has the form `did:<method>:<resource-type>:<encoded-id>`,
//! optionally suffixed with `:<owner-tag>` when the caller supplies an
//! owner. `<encoded-id>` is the resource digest rendered under one of the
//! three supported encodings; `<owner-tag>` is the first 4 bytes of
//! `SHA-256(owner)`, hex-encoded.

use super::attributes::{AttributeMap, ResourceType, canonical_attribute_tree};
use super::error::IdentifierError;
use crate::encoding::{Encoding, canonical_bytes_of, decode, detect_encoding, encode, sha256};

const DID_PREFIX: &str = "did";
const OWNER_TAG_LEN: usize = 4;

/// A resolved content-addressed identifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Identifier {
    pub method: String,
    pub resource_type: ResourceType,
    pub digest: [u8; 32],
    pub owner_tag: Option<[u8; OWNER_TAG_LEN]>,
    pub encoding: Encoding,
}

impl Identifier {
    /// Builds an identifier from its already-computed parts.
    pub fn new(
        method: impl Into<String>,
        resource_type: ResourceType,
        digest: [u8; 32],
        owner: Option<&str>,
        encoding: Encoding,
    ) -> Self {
        let owner_tag = owner.map(owner_tag_of);
        Identifier {
            method: method.into(),
            resource_type,
            digest,
            owner_tag,
            encoding,
        }
    }

    /// Derives an identifier by validating `attrs` against the resource
    /// type's declared attribute set and hashing the canonical
    /// `{resourceType} ∪ attrs` tree.
    pub fn derive(
        method: impl Into<String>,
        resource_type: ResourceType,
        attrs: &AttributeMap,
        owner: Option<&str>,
        encoding: Encoding,
    ) -> Result<Self, IdentifierError> {
        let tree = canonical_attribute_tree(resource_type, attrs)?;
        let digest = sha256(&canonical_bytes_of(&tree));
        Ok(Identifier::new(method, resource_type, digest, owner, encoding))
    }

    /// Builds an identifier for an external-system reference by digesting
    /// `"{id_type}:{external_id}"` and feeding that digest in as the sole
    /// contributor to the canonical attribute stream, bypassing the
    /// resource type's normal required-field validation. This gives the
    /// same (method, resourceType, externalId, idType) combination a
    /// stable identifier regardless of which caller derives it.
    pub fn from_external_id(
        method: impl Into<String>,
        resource_type: ResourceType,
        external_id: &str,
        id_type: &str,
        encoding: Encoding,
    ) -> Self {
        let inner = sha256(format!("{id_type}:{external_id}").as_bytes());
        let tree = serde_json::json!({
            "resourceType": resource_type.as_str(),
            "externalDigest": encode(&inner, Encoding::Hex),
        });
        let digest = sha256(&canonical_bytes_of(&tree));
        Identifier::new(method, resource_type, digest, None, encoding)
    }

    /// Renders the identifier as a `did:...` string.
    pub fn to_did_string(&self) -> String {
        let encoded = encode(&self.digest, self.encoding);
        let mut s = format!(
            "{DID_PREFIX}:{}:{}:{encoded}",
            self.method,
            self.resource_type.as_str()
        );
        if let Some(tag) = self.owner_tag {
            s.push(':');
            s.push_str(&hex::encode(tag));
        }
        s
    }

    /// Parses a `did:...` string back into its components, auto-detecting
    /// the digest encoding when it is ambiguous.
    pub fn parse(text: &str) -> Result<Self, IdentifierError> {
        let parts: Vec<&str> = text.split(':').collect();
        if parts.len() < 4 || parts.len() > 5 || parts[0] != DID_PREFIX {
            return Err(IdentifierError::IdentifierMalformed(text.to_string()));
        }
        let method = parts[1];
        let resource_type = ResourceType::parse(parts[2])
            .map_err(|_| IdentifierError::IdentifierMalformed(text.to_string()))?;
        let encoded = parts[3];
        if method.is_empty() || encoded.is_empty() {
            return Err(IdentifierError::IdentifierMalformed(text.to_string()));
        }
        let encoding = detect_encoding(encoded);
        let digest_bytes = decode(encoded, encoding)
            .map_err(|_| IdentifierError::IdentifierMalformed(text.to_string()))?;
        if digest_bytes.len() != 32 {
            return Err(IdentifierError::IdentifierMalformed(text.to_string()));
        }
        let mut digest = [0u8; 32];
        digest.copy_from_slice(&digest_bytes);

        let owner_tag = if parts.len() == 5 {
            let tag_bytes = hex::decode(parts[4])
                .map_err(|_| IdentifierError::IdentifierMalformed(text.to_string()))?;
            if tag_bytes.len() != OWNER_TAG_LEN {
                return Err(IdentifierError::IdentifierMalformed(text.to_string()));
            }
            let mut tag = [0u8; OWNER_TAG_LEN];
            tag.copy_from_slice(&tag_bytes);
            Some(tag)
        } else {
            None
        };

        Ok(Identifier {
            method: method.to_string(),
            resource_type,
            digest,
            owner_tag,
            encoding,
        })
    }
}

fn owner_tag_of(owner: &str) -> [u8; OWNER_TAG_LEN] {
    let full = sha256(owner.as_bytes());
    let mut tag = [0u8; OWNER_TAG_LEN];
    tag.copy_from_slice(&full[..OWNER_TAG_LEN]);
    tag
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_did_string())
    }
}
