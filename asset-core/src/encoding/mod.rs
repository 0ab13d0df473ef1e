//! Encoding primitives: canonical JSON, SHA-256 digests with three byte
//! encodings, and TLV binary framing.
//!
//! Everything else in this crate is built on top of these three pieces,
//! the identifier core hashes canonical JSON, the PROV projection and
//! metadata-hash contract both go through canonical JSON, and TLV is the
//! one binary serialization format this crate implements directly
//! (JSON-LD and plain JSON ride on `serde_json`).

pub mod canonical_json;
pub mod digest;
pub mod error;
pub mod tlv;

pub use canonical_json::{canonical_bytes_of, to_canonical_bytes};
pub use digest::{Encoding, decode, detect_encoding, encode, sha256};
pub use error::EncodingError;
pub use tlv::TlvValue;
