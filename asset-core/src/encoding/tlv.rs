//! TLV (type-length-value) binary framing.
//!
//! Every value is encoded as a 1-byte type tag, a big-endian 4-byte length,
//! then the value bytes. This module defines a closed set of scalar
//! layouts and a `TlvValue` tree that can hold any of them.

use super::error::EncodingError;

const TAG_NULL: u8 = 0;
const TAG_BOOLEAN: u8 = 1;
const TAG_UINT: u8 = 2;
const TAG_INT: u8 = 3;
const TAG_FLOAT: u8 = 4;
const TAG_STRING: u8 = 5;
const TAG_BYTES: u8 = 6;
const TAG_ARRAY: u8 = 7;
const TAG_MAP: u8 = 8;

/// A value that can be framed with TLV encoding.
///
/// `Map` is a `Vec` of key/value pairs rather than a `HashMap` so that
/// encode and decode preserve field order exactly, which is what makes
/// "decode yields the structurally equal value" hold without needing a
/// separate canonicalisation pass.
#[derive(Clone, Debug, PartialEq)]
pub enum TlvValue {
    Null,
    Bool(bool),
    /// Non-negative integer; encoded as `UINT`.
    UInt(u64),
    /// Negative integer; encoded as `INT`.
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
    Array(Vec<TlvValue>),
    Map(Vec<(String, TlvValue)>),
}

impl TlvValue {
    /// Convenience constructor that picks `UInt` or `Int` based on sign.
    pub fn from_i64(n: i64) -> Self {
        if n >= 0 {
            TlvValue::UInt(n as u64)
        } else {
            TlvValue::Int(n)
        }
    }
}

fn write_frame(tag: u8, value_bytes: &[u8], out: &mut Vec<u8>) {
    out.push(tag);
    out.extend_from_slice(&(value_bytes.len() as u32).to_be_bytes());
    out.extend_from_slice(value_bytes);
}

fn encode_uint(n: u64) -> Vec<u8> {
    if n == 0 {
        return Vec::new();
    }
    let full = n.to_be_bytes();
    let first_nonzero = full.iter().position(|&b| b != 0).unwrap_or(full.len() - 1);
    full[first_nonzero..].to_vec()
}

fn decode_uint(bytes: &[u8]) -> u64 {
    let mut n: u64 = 0;
    for &b in bytes {
        n = (n << 8) | b as u64;
    }
    n
}

/// Encodes `value` as a complete TLV frame (tag + length + bytes).
pub fn encode(value: &TlvValue) -> Vec<u8> {
    let mut out = Vec::new();
    match value {
        TlvValue::Null => write_frame(TAG_NULL, &[], &mut out),
        TlvValue::Bool(b) => write_frame(TAG_BOOLEAN, &[if *b { 1 } else { 0 }], &mut out),
        TlvValue::UInt(n) => write_frame(TAG_UINT, &encode_uint(*n), &mut out),
        TlvValue::Int(n) => write_frame(TAG_INT, &n.to_be_bytes(), &mut out),
        TlvValue::Float(f) => write_frame(TAG_FLOAT, &f.to_be_bytes(), &mut out),
        TlvValue::Str(s) => write_frame(TAG_STRING, s.as_bytes(), &mut out),
        TlvValue::Bytes(b) => write_frame(TAG_BYTES, b, &mut out),
        TlvValue::Array(items) => {
            let mut body = Vec::new();
            for item in items {
                body.extend_from_slice(&encode(item));
            }
            write_frame(TAG_ARRAY, &body, &mut out);
        }
        TlvValue::Map(pairs) => {
            let mut body = Vec::new();
            for (key, val) in pairs {
                body.extend_from_slice(&encode(&TlvValue::Str(key.clone())));
                body.extend_from_slice(&encode(val));
            }
            write_frame(TAG_MAP, &body, &mut out);
        }
    }
    out
}

/// Reads one complete TLV frame from the start of `bytes`, returning the
/// decoded value and the number of bytes consumed.
fn decode_one(bytes: &[u8]) -> Result<(TlvValue, usize), EncodingError> {
    if bytes.len() < 5 {
        return Err(EncodingError::TlvTruncated);
    }
    let tag = bytes[0];
    let len = u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]) as usize;
    let value_start = 5;
    let value_end = value_start
        .checked_add(len)
        .ok_or(EncodingError::TlvTruncated)?;
    if value_end > bytes.len() {
        return Err(EncodingError::TlvTruncated);
    }
    let body = &bytes[value_start..value_end];

    let value = match tag {
        TAG_NULL => TlvValue::Null,
        TAG_BOOLEAN => {
            if body.len() != 1 {
                return Err(EncodingError::TlvTruncated);
            }
            TlvValue::Bool(body[0] != 0)
        }
        TAG_UINT => TlvValue::UInt(decode_uint(body)),
        TAG_INT => {
            if body.len() != 8 {
                return Err(EncodingError::TlvTruncated);
            }
            let mut arr = [0u8; 8];
            arr.copy_from_slice(body);
            TlvValue::Int(i64::from_be_bytes(arr))
        }
        TAG_FLOAT => {
            if body.len() != 8 {
                return Err(EncodingError::TlvTruncated);
            }
            let mut arr = [0u8; 8];
            arr.copy_from_slice(body);
            TlvValue::Float(f64::from_be_bytes(arr))
        }
        TAG_STRING => {
            let s = String::from_utf8(body.to_vec()).map_err(|_| EncodingError::TlvTruncated)?;
            TlvValue::Str(s)
        }
        TAG_BYTES => TlvValue::Bytes(body.to_vec()),
        TAG_ARRAY => {
            let mut items = Vec::new();
            let mut offset = 0;
            while offset < body.len() {
                let (item, consumed) = decode_one(&body[offset..])?;
                items.push(item);
                offset += consumed;
            }
            TlvValue::Array(items)
        }
        TAG_MAP => {
            let mut pairs = Vec::new();
            let mut offset = 0;
            while offset < body.len() {
                let (key_value, key_consumed) = decode_one(&body[offset..])?;
                offset += key_consumed;
                let key = match key_value {
                    TlvValue::Str(s) => s,
                    _ => return Err(EncodingError::TlvTruncated),
                };
                let (val, val_consumed) = decode_one(&body[offset..])?;
                offset += val_consumed;
                pairs.push((key, val));
            }
            TlvValue::Map(pairs)
        }
        other => return Err(EncodingError::TlvUnknownType(other)),
    };

    Ok((value, value_end))
}

/// Decodes a single TLV-framed value from `bytes`.
///
/// Trailing bytes beyond the first complete frame are ignored; callers
/// that expect the buffer to contain exactly one value should check
/// `bytes.len()` against the returned frame size themselves.
pub fn decode(bytes: &[u8]) -> Result<TlvValue, EncodingError> {
    decode_one(bytes).map(|(value, _consumed)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(value: TlvValue) {
        let bytes = encode(&value);
        let decoded = decode(&bytes).expect("decode should succeed");
        assert_eq!(decoded, value);
    }

    #[test]
    fn scalars_round_trip() {
        round_trip(TlvValue::Null);
        round_trip(TlvValue::Bool(true));
        round_trip(TlvValue::Bool(false));
        round_trip(TlvValue::UInt(0));
        round_trip(TlvValue::UInt(987_654_321));
        round_trip(TlvValue::Int(-42));
        round_trip(TlvValue::Float(3.5));
        round_trip(TlvValue::Str("hello".to_string()));
        round_trip(TlvValue::Bytes(vec![1, 2, 3, 4]));
    }

    #[test]
    fn uint_zero_encodes_with_empty_body() {
        let bytes = encode(&TlvValue::UInt(0));
        // tag (1) + length (4) + 0 body bytes
        assert_eq!(bytes.len(), 5);
        assert_eq!(&bytes[1..5], &[0, 0, 0, 0]);
    }

    #[test]
    fn int_is_always_eight_bytes() {
        let bytes = encode(&TlvValue::Int(-1));
        assert_eq!(u32::from_be_bytes([bytes[1], bytes[2], bytes[3], bytes[4]]), 8);
    }

    #[test]
    fn array_and_map_round_trip() {
        let arr = TlvValue::Array(vec![
            TlvValue::UInt(1),
            TlvValue::Str("two".to_string()),
            TlvValue::Bool(true),
        ]);
        round_trip(arr);

        let map = TlvValue::Map(vec![
            ("a".to_string(), TlvValue::UInt(1)),
            ("b".to_string(), TlvValue::Str("x".to_string())),
        ]);
        round_trip(map);
    }

    #[test]
    fn nested_structures_round_trip() {
        let value = TlvValue::Map(vec![(
            "items".to_string(),
            TlvValue::Array(vec![
                TlvValue::Map(vec![("id".to_string(), TlvValue::UInt(1))]),
                TlvValue::Map(vec![("id".to_string(), TlvValue::UInt(2))]),
            ]),
        )]);
        round_trip(value);
    }

    #[test]
    fn truncated_length_is_rejected() {
        let mut bytes = encode(&TlvValue::Str("hello".to_string()));
        // Claim a length far larger than what follows.
        bytes[1] = 0xff;
        let err = decode(&bytes).unwrap_err();
        match err {
            EncodingError::TlvTruncated => {}
            other => panic!("expected TlvTruncated, got {other:?}"),
        }
    }

    #[test]
    fn from_i64_picks_uint_or_int_by_sign() {
        assert_eq!(TlvValue::from_i64(5), TlvValue::UInt(5));
        assert_eq!(TlvValue::from_i64(-5), TlvValue::Int(-5));
        assert_eq!(TlvValue::from_i64(0), TlvValue::UInt(0));
    }
}
