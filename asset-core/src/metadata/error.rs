use std::fmt;

/// Errors raised by the hierarchical metadata bundle.
#[derive(Debug)]
pub enum MetadataError {
    InvalidIdentityLayer(Vec<String>),
    InvalidProvenanceLayer(Vec<String>),
    InvalidCharacteristicsLayer(Vec<String>),
    InvalidLineageLayer(Vec<String>),
    InvalidRightsLayer(Vec<String>),
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataError::InvalidIdentityLayer(fields) => {
                write!(f, "invalid identity layer, missing fields: {}", fields.join(", "))
            }
            MetadataError::InvalidProvenanceLayer(fields) => {
                write!(f, "invalid provenance layer, missing fields: {}", fields.join(", "))
            }
            MetadataError::InvalidCharacteristicsLayer(fields) => {
                write!(f, "invalid characteristics layer, missing fields: {}", fields.join(", "))
            }
            MetadataError::InvalidLineageLayer(fields) => {
                write!(f, "invalid lineage layer, missing fields: {}", fields.join(", "))
            }
            MetadataError::InvalidRightsLayer(fields) => {
                write!(f, "invalid rights layer, missing fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for MetadataError {}
