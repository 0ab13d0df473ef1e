//! Punctuation channel: fixed original/alternative pairs. The "original"
//! character at a candidate position encodes bit 0, the "alternative"
//! encodes bit 1.
//!
//! Both quote pairs have two typographic alternatives (opening and
//! closing curly variants); this codec always emits the opening variant
//! on embed and also recognises it on decode. A closing curly quote
//! appearing in input text (not produced by this channel) is not a
//! candidate position.

use super::EmbedOptions;
use crate::watermark::error::WatermarkError;

const PAIRS: [(char, char); 4] = [('.', '…'), ('-', '–'), ('"', '\u{201C}'), ('\'', '\u{2018}')];

fn alt_for(original: char) -> Option<char> {
    PAIRS.iter().find(|(o, _)| *o == original).map(|(_, a)| *a)
}

fn is_original(c: char) -> bool {
    PAIRS.iter().any(|(o, _)| *o == c)
}

fn bit_for_alt(c: char) -> Option<bool> {
    if is_original(c) {
        Some(false)
    } else if PAIRS.iter().any(|(_, a)| *a == c) {
        Some(true)
    } else {
        None
    }
}

/// Number of candidate positions (original or alternative punctuation
/// characters) in `text`.
pub fn candidate_count(text: &str) -> usize {
    text.chars().filter(|&c| bit_for_alt(c).is_some()).count()
}

/// Embeds `bits` into the punctuation channel of `text`.
pub fn embed(text: &str, bits: &[bool], _opts: &EmbedOptions) -> Result<String, WatermarkError> {
    let available = candidate_count(text);
    if available < bits.len() {
        return Err(WatermarkError::InsufficientCarrierCapacity {
            available,
            required: bits.len(),
        });
    }

    let mut out = String::with_capacity(text.len());
    let mut bit_idx = 0;
    for c in text.chars() {
        if is_original(c) && bit_idx < bits.len() {
            let bit = bits[bit_idx];
            bit_idx += 1;
            if bit {
                out.push(alt_for(c).expect("original char has an alternative"));
            } else {
                out.push(c);
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}

/// Recovers bits from the punctuation channel of `text`.
pub fn decode(text: &str) -> Vec<bool> {
    text.chars().filter_map(bit_for_alt).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_then_decode_recovers_bits() {
        let text = "Hello. World- \"Quoted\" 'text'.";
        let bits = vec![true, false, true, false];
        let embedded = embed(text, &bits, &EmbedOptions::default()).unwrap();
        let decoded = decode(&embedded);
        assert_eq!(&decoded[..bits.len()], bits.as_slice());
    }

    #[test]
    fn alternative_characters_are_recognised_on_decode() {
        assert_eq!(bit_for_alt('.'), Some(false));
        assert_eq!(bit_for_alt('…'), Some(true));
        assert_eq!(bit_for_alt('-'), Some(false));
        assert_eq!(bit_for_alt('–'), Some(true));
        assert_eq!(bit_for_alt('x'), None);
    }

    #[test]
    fn too_few_candidates_is_rejected() {
        let text = "no punctuation";
        let bits = vec![true];
        let err = embed(text, &bits, &EmbedOptions::default()).unwrap_err();
        assert!(matches!(err, WatermarkError::InsufficientCarrierCapacity { .. }));
    }
}
