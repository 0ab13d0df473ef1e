//! Combined strategy: split the payload bitstring in half, embed the
//! prefix via the space channel and the suffix via the punctuation
//! channel on the already-rewritten text.

use super::channels::{EmbedOptions, punctuation, space};
use super::error::WatermarkError;

/// Embeds `bits` using both the space and punctuation channels.
pub fn embed(text: &str, bits: &[bool], opts: &EmbedOptions) -> Result<String, WatermarkError> {
    let split = bits.len() / 2;
    let (prefix, suffix) = bits.split_at(split);
    let after_space = space::embed(text, prefix, opts)?;
    punctuation::embed(&after_space, suffix, opts)
}

/// Decodes bits recovered from the space channel followed by bits
/// recovered from the punctuation channel.
pub fn decode(text: &str) -> Vec<bool> {
    let mut bits = space::decode(text);
    bits.extend(punctuation::decode(text));
    bits
}
