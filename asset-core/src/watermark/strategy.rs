//! Watermark strategy slot.
//!
//! The text strategy is fully specified (four channels). Image, audio,
//! and ai-model resources get a typed slot with the same
//! embed/extract/verify contract, but this core does not fix their
//! embedding algorithm: their strategies declare zero carrier capacity,
//! so embed always reports `InsufficientCarrierCapacity` and extract
//! always reports `NotFound`.
//!
//! Before a payload's bits reach a channel, `frame_bits` prefixes them
//! with a 32-bit big-endian bit-length header. Without it, decode would
//! read a bit out of every candidate position to the end of the carrier,
//! not just the positions the embed actually touched, and trailing
//! unmodified positions would decode as spurious zero bits appended
//! after the real payload.

use super::channels::{EmbedOptions, punctuation, space, synonym};
use super::combined;
use super::error::WatermarkError;
use super::payload::Payload;

const MIN_BITS_SPACE_PUNCTUATION: usize = 16;
const MIN_BITS_SYNONYM: usize = 8;
const LENGTH_HEADER_BITS: usize = 32;

/// Prepends a 32-bit big-endian bit-length header to `payload_bits`, so a
/// decoder knows exactly how many payload bits follow and never reads
/// unmodified carrier positions past the end of the real payload as bits.
fn frame_bits(payload_bits: Vec<bool>) -> Vec<bool> {
    let len = payload_bits.len() as u32;
    let mut framed = Vec::with_capacity(LENGTH_HEADER_BITS + payload_bits.len());
    for i in (0..LENGTH_HEADER_BITS).rev() {
        framed.push((len >> i) & 1 == 1);
    }
    framed.extend(payload_bits);
    framed
}

/// Reads the 32-bit length header off `bits` and returns exactly that many
/// payload bits, or `None` if the header is missing or claims more bits
/// than are actually present.
fn unframe_bits(bits: &[bool]) -> Option<Vec<bool>> {
    if bits.len() < LENGTH_HEADER_BITS {
        return None;
    }
    let mut len: u32 = 0;
    for &bit in &bits[..LENGTH_HEADER_BITS] {
        len = (len << 1) | (bit as u32);
    }
    let end = LENGTH_HEADER_BITS.checked_add(len as usize)?;
    bits.get(LENGTH_HEADER_BITS..end).map(|slice| slice.to_vec())
}

/// Which text channel a `TextStrategy` embeds through.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextChannel {
    Space,
    Punctuation,
    Synonym,
    Combined,
}

/// A carrier a watermark can be embedded in or extracted from.
#[derive(Clone, Debug)]
pub enum Resource {
    Text(String),
    Image(Vec<u8>),
    Audio(Vec<u8>),
    AiModel(Vec<u8>),
}

/// The embed/extract/verify contract every media-type strategy satisfies.
pub trait WatermarkStrategy {
    fn embed(&self, resource: &Resource, payload: &Payload, opts: &EmbedOptions) -> Result<Resource, WatermarkError>;
    fn extract(&self, resource: &Resource, opts: &EmbedOptions) -> Result<Payload, WatermarkError>;
    fn verify(&self, resource: &Resource, expected: &Payload, opts: &EmbedOptions) -> bool {
        match self.extract(resource, opts) {
            Ok(found) => {
                found.did == expected.did
                    && (expected.metadata_hash.is_none() || found.metadata_hash == expected.metadata_hash)
            }
            Err(_) => false,
        }
    }
}

/// The fully-specified text watermark strategy.
pub struct TextStrategy {
    pub channel: TextChannel,
}

fn channel_embed(channel: TextChannel, text: &str, bits: &[bool], opts: &EmbedOptions) -> Result<String, WatermarkError> {
    match channel {
        TextChannel::Space => space::embed(text, bits, opts),
        TextChannel::Punctuation => punctuation::embed(text, bits, opts),
        TextChannel::Synonym => synonym::embed(text, bits, opts),
        TextChannel::Combined => combined::embed(text, bits, opts),
    }
}

fn channel_decode(channel: TextChannel, text: &str) -> Vec<bool> {
    match channel {
        TextChannel::Space => space::decode(text),
        TextChannel::Punctuation => punctuation::decode(text),
        TextChannel::Synonym => synonym::decode(text),
        TextChannel::Combined => combined::decode(text),
    }
}

fn min_recoverable_bits(channel: TextChannel) -> usize {
    match channel {
        TextChannel::Synonym => MIN_BITS_SYNONYM,
        TextChannel::Space | TextChannel::Punctuation | TextChannel::Combined => {
            MIN_BITS_SPACE_PUNCTUATION
        }
    }
}

impl WatermarkStrategy for TextStrategy {
    fn embed(&self, resource: &Resource, payload: &Payload, opts: &EmbedOptions) -> Result<Resource, WatermarkError> {
        let framed = frame_bits(payload.to_bits());
        let Resource::Text(text) = resource else {
            return Err(WatermarkError::InsufficientCarrierCapacity {
                available: 0,
                required: framed.len(),
            });
        };
        let embedded = channel_embed(self.channel, text, &framed, opts)?;
        Ok(Resource::Text(embedded))
    }

    fn extract(&self, resource: &Resource, _opts: &EmbedOptions) -> Result<Payload, WatermarkError> {
        let Resource::Text(text) = resource else {
            return Err(WatermarkError::NotFound);
        };
        let raw = channel_decode(self.channel, text);
        let bits = unframe_bits(&raw).ok_or(WatermarkError::NotFound)?;
        if bits.len() < min_recoverable_bits(self.channel) {
            return Err(WatermarkError::NotFound);
        }
        Payload::from_bits(&bits).ok_or(WatermarkError::NotFound)
    }
}

macro_rules! unimplemented_strategy {
    ($name:ident) => {
        /// Strategy slot whose embedding algorithm is left unspecified;
        /// always reports zero carrier capacity.
        pub struct $name;

        impl WatermarkStrategy for $name {
            fn embed(&self, _resource: &Resource, payload: &Payload, _opts: &EmbedOptions) -> Result<Resource, WatermarkError> {
                Err(WatermarkError::InsufficientCarrierCapacity {
                    available: 0,
                    required: frame_bits(payload.to_bits()).len(),
                })
            }

            fn extract(&self, _resource: &Resource, _opts: &EmbedOptions) -> Result<Payload, WatermarkError> {
                Err(WatermarkError::NotFound)
            }
        }
    };
}

unimplemented_strategy!(ImageStrategy);
unimplemented_strategy!(AudioStrategy);
unimplemented_strategy!(AiModelStrategy);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> Payload {
        Payload {
            did: "did:asset:text:abc123".to_string(),
            timestamp: 1_700_000_000,
            metadata_hash: None,
            issuer: None,
            expiration_date: None,
        }
    }

    /// A carrier with enough ASCII spaces to hold a framed payload's
    /// bits (32-bit header plus the serialized JSON's bits) via the
    /// space channel.
    fn long_carrier() -> String {
        "word ".repeat(600)
    }

    #[test]
    fn text_strategy_round_trips_via_space_channel() {
        let strategy = TextStrategy { channel: TextChannel::Space };
        let resource = Resource::Text(long_carrier());
        let payload = sample_payload();
        let opts = EmbedOptions::default();
        let embedded = strategy.embed(&resource, &payload, &opts).unwrap();
        let extracted = strategy.extract(&embedded, &opts).unwrap();
        assert_eq!(extracted, payload);
        assert!(strategy.verify(&embedded, &payload, &opts));
    }

    #[test]
    fn verify_fails_on_mismatched_did() {
        let strategy = TextStrategy { channel: TextChannel::Space };
        let resource = Resource::Text(long_carrier());
        let payload = sample_payload();
        let opts = EmbedOptions::default();
        let embedded = strategy.embed(&resource, &payload, &opts).unwrap();
        let mut other = payload.clone();
        other.did = "did:asset:text:other".to_string();
        assert!(!strategy.verify(&embedded, &other, &opts));
    }

    #[test]
    fn unimplemented_strategies_always_report_zero_capacity() {
        let strategy = ImageStrategy;
        let resource = Resource::Image(vec![1, 2, 3]);
        let payload = sample_payload();
        let opts = EmbedOptions::default();
        assert!(matches!(
            strategy.embed(&resource, &payload, &opts),
            Err(WatermarkError::InsufficientCarrierCapacity { available: 0, .. })
        ));
        assert!(matches!(strategy.extract(&resource, &opts), Err(WatermarkError::NotFound)));
    }
}
