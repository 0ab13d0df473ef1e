use std::fmt;

/// Errors raised by identifier derivation, decompression, and identity
/// document synthesis.
#[derive(Debug)]
pub enum IdentifierError {
    /// The resource type does not match any of the declared attribute sets.
    UnsupportedResourceType(String),
    /// The requested digest encoding is not one this core implements.
    UnsupportedEncoding(String),
    /// A field required by the resource type's attribute set was absent.
    MissingRequiredAttribute(&'static str),
    /// A `did:...` string did not match the identifier grammar.
    IdentifierMalformed(String),
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierError::UnsupportedResourceType(rt) => {
                write!(f, "unsupported resource type: {rt}")
            }
            IdentifierError::UnsupportedEncoding(enc) => {
                write!(f, "unsupported encoding: {enc}")
            }
            IdentifierError::MissingRequiredAttribute(field) => {
                write!(f, "missing required attribute: {field}")
            }
            IdentifierError::IdentifierMalformed(id) => {
                write!(f, "malformed identifier: {id}")
            }
        }
    }
}

impl std::error::Error for IdentifierError {}
