use std::fmt;

/// Errors raised by the encoding primitives (canonical JSON, digests, TLV).
#[derive(Debug)]
pub enum EncodingError {
    /// An encoding name was requested that this core does not implement.
    UnsupportedEncoding(String),
    /// A string failed to decode under the encoding it was claimed to be.
    DecodeFailed,
    /// A TLV length field would read past the end of the buffer.
    TlvTruncated,
    /// A TLV type tag did not match any known scalar layout.
    TlvUnknownType(u8),
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingError::UnsupportedEncoding(name) => {
                write!(f, "unsupported encoding: {name}")
            }
            EncodingError::DecodeFailed => write!(f, "failed to decode value"),
            EncodingError::TlvTruncated => write!(f, "TLV value runs past end of buffer"),
            EncodingError::TlvUnknownType(tag) => write!(f, "unknown TLV type tag: {tag}"),
        }
    }
}

impl std::error::Error for EncodingError {}
