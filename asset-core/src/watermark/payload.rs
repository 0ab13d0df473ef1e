//! Watermark payload: the small JSON document carried inside a watermark,
//! and its conversion to/from a bitstring.
//!
//! The payload is serialized to JSON bytes, then each byte becomes an
//! 8-bit big-endian group in the bitstring (the serialized JSON is
//! ASCII-only, so the "low byte of each UTF-16 code unit" framing in the
//! original design collapses to "the byte itself").

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub did: String,
    pub timestamp: i64,
    #[serde(rename = "metadataHash", skip_serializing_if = "Option::is_none", default)]
    pub metadata_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub issuer: Option<String>,
    #[serde(rename = "expirationDate", skip_serializing_if = "Option::is_none", default)]
    pub expiration_date: Option<String>,
}

/// Converts `bytes` into a big-endian bitstring, most significant bit
/// first within each byte.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for i in (0..8).rev() {
            bits.push((byte >> i) & 1 == 1);
        }
    }
    bits
}

/// Regroups `bits` into bytes, truncating any trailing partial byte.
pub fn bits_to_bytes(bits: &[bool]) -> Vec<u8> {
    let usable = bits.len() - (bits.len() % 8);
    let mut bytes = Vec::with_capacity(usable / 8);
    for chunk in bits[..usable].chunks_exact(8) {
        let mut byte = 0u8;
        for &bit in chunk {
            byte = (byte << 1) | (bit as u8);
        }
        bytes.push(byte);
    }
    bytes
}

impl Payload {
    /// Serializes the payload to JSON and converts it to a bitstring.
    pub fn to_bits(&self) -> Vec<bool> {
        let bytes = serde_json::to_vec(self).expect("payload always serializes");
        bytes_to_bits(&bytes)
    }

    /// Attempts to parse a payload back out of a recovered bitstring.
    pub fn from_bits(bits: &[bool]) -> Option<Payload> {
        let bytes = bits_to_bytes(bits);
        serde_json::from_slice(&bytes).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Payload {
        Payload {
            did: "did:asset:text:abc123".to_string(),
            timestamp: 1_700_000_000,
            metadata_hash: Some("deadbeef".to_string()),
            issuer: None,
            expiration_date: None,
        }
    }

    #[test]
    fn bits_round_trip_through_bytes() {
        let bytes = b"hello".to_vec();
        let bits = bytes_to_bits(&bytes);
        assert_eq!(bits.len(), 40);
        assert_eq!(bits_to_bytes(&bits), bytes);
    }

    #[test]
    fn trailing_partial_byte_is_truncated() {
        let mut bits = bytes_to_bits(b"a");
        bits.push(true);
        bits.push(false);
        assert_eq!(bits_to_bytes(&bits), b"a".to_vec());
    }

    #[test]
    fn payload_round_trips_through_bits() {
        let payload = sample();
        let bits = payload.to_bits();
        let recovered = Payload::from_bits(&bits).unwrap();
        assert_eq!(recovered, payload);
    }

    #[test]
    fn garbage_bits_do_not_parse_as_payload() {
        let bits = vec![true; 64];
        assert!(Payload::from_bits(&bits).is_none());
    }
}
