//! Space channel: each ASCII space (U+0020) is a candidate position. A
//! bit 0 leaves the space unchanged; a bit 1 replaces it with U+00A0, or
//! with the pair U+200B U+0020 when `use_zero_width` is set.

use super::EmbedOptions;
use crate::watermark::error::WatermarkError;

const NBSP: char = '\u{00A0}';
const ZWSP: char = '\u{200B}';

/// Number of candidate positions (plain ASCII spaces) in `text`.
pub fn candidate_count(text: &str) -> usize {
    text.chars().filter(|&c| c == ' ').count()
}

/// Embeds `bits` into the space channel of `text`.
pub fn embed(text: &str, bits: &[bool], opts: &EmbedOptions) -> Result<String, WatermarkError> {
    let available = candidate_count(text);
    if available < bits.len() {
        return Err(WatermarkError::InsufficientCarrierCapacity {
            available,
            required: bits.len(),
        });
    }

    let mut out = String::with_capacity(text.len() + bits.len());
    let mut bit_idx = 0;
    for c in text.chars() {
        if c == ' ' && bit_idx < bits.len() {
            let bit = bits[bit_idx];
            bit_idx += 1;
            if bit {
                if opts.use_zero_width {
                    out.push(ZWSP);
                    out.push(' ');
                } else {
                    out.push(NBSP);
                }
            } else {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Recovers bits from the space channel of `text`.
pub fn decode(text: &str) -> Vec<bool> {
    let mut bits = Vec::new();
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ' ' => bits.push(false),
            NBSP => bits.push(true),
            ZWSP => {
                if chars.peek() == Some(&' ') {
                    chars.next();
                    bits.push(true);
                }
            }
            _ => {}
        }
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_then_decode_recovers_bits() {
        let text = "a b c d e f g h";
        let bits = vec![false, true, false, true, true, false, false];
        let opts = EmbedOptions::default();
        let embedded = embed(text, &bits, &opts).unwrap();
        let decoded = decode(&embedded);
        assert_eq!(&decoded[..bits.len()], bits.as_slice());
    }

    #[test]
    fn zero_width_variant_round_trips() {
        let text = "a b c d";
        let bits = vec![true, false, true];
        let opts = EmbedOptions { use_zero_width: true };
        let embedded = embed(text, &bits, &opts).unwrap();
        assert!(embedded.contains(ZWSP));
        let decoded = decode(&embedded);
        assert_eq!(&decoded[..bits.len()], bits.as_slice());
    }

    #[test]
    fn too_few_candidates_is_rejected() {
        let text_one_space = "a b";
        let bits = vec![true, true, true];
        let err = embed(text_one_space, &bits, &EmbedOptions::default()).unwrap_err();
        match err {
            WatermarkError::InsufficientCarrierCapacity { available, required } => {
                assert_eq!(available, 1);
                assert_eq!(required, 3);
            }
            other => panic!("expected InsufficientCarrierCapacity, got {other:?}"),
        }
    }

    #[test]
    fn non_candidate_characters_are_untouched() {
        let text = "x y";
        let bits = vec![false];
        let embedded = embed(text, &bits, &EmbedOptions::default()).unwrap();
        assert!(embedded.starts_with('x'));
        assert!(embedded.ends_with('y'));
    }
}
