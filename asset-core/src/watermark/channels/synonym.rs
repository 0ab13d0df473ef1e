//! Synonym channel: a fixed table of word pairs. At each matched token the
//! original word encodes bit 0, the alternative encodes bit 1; case of
//! the first letter is preserved across substitution.

use super::EmbedOptions;
use crate::watermark::error::WatermarkError;

const PAIRS: [(&str, &str); 8] = [
    ("big", "large"),
    ("fast", "quick"),
    ("happy", "glad"),
    ("small", "tiny"),
    ("start", "begin"),
    ("end", "finish"),
    ("easy", "simple"),
    ("old", "ancient"),
];

enum Token<'a> {
    Word(&'a str),
    Other(&'a str),
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < text.len() {
        let c = text[i..].chars().next().unwrap();
        let start = i;
        if c.is_alphabetic() {
            while i < text.len() {
                let c = text[i..].chars().next().unwrap();
                if c.is_alphabetic() {
                    i += c.len_utf8();
                } else {
                    break;
                }
            }
            tokens.push(Token::Word(&text[start..i]));
        } else {
            while i < text.len() {
                let c = text[i..].chars().next().unwrap();
                if !c.is_alphabetic() {
                    i += c.len_utf8();
                } else {
                    break;
                }
            }
            tokens.push(Token::Other(&text[start..i]));
        }
    }
    tokens
}

fn match_pair(word: &str) -> Option<(usize, bool)> {
    let lower = word.to_lowercase();
    PAIRS.iter().enumerate().find_map(|(idx, (orig, alt))| {
        if lower == *orig {
            Some((idx, false))
        } else if lower == *alt {
            Some((idx, true))
        } else {
            None
        }
    })
}

fn with_case_of(template: &str, replacement: &str) -> String {
    let mut chars = replacement.chars();
    match chars.next() {
        Some(first) => {
            let first_upper = template.chars().next().is_some_and(|c| c.is_uppercase());
            let first = if first_upper {
                first.to_uppercase().collect::<String>()
            } else {
                first.to_lowercase().collect::<String>()
            };
            first + chars.as_str()
        }
        None => String::new(),
    }
}

/// Number of candidate tokens (words matching the synonym table) in `text`.
pub fn candidate_count(text: &str) -> usize {
    tokenize(text)
        .iter()
        .filter(|t| matches!(t, Token::Word(w) if match_pair(w).is_some()))
        .count()
}

/// Embeds `bits` into the synonym channel of `text`.
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
    for token in tokenize(text) {
        match token {
            Token::Word(w) => {
                if let Some((idx, _)) = match_pair(w) {
                    if bit_idx < bits.len() {
                        let bit = bits[bit_idx];
                        bit_idx += 1;
                        let (orig, alt) = PAIRS[idx];
                        let replacement = if bit { alt } else { orig };
                        out.push_str(&with_case_of(w, replacement));
                        continue;
                    }
                }
                out.push_str(w);
            }
            Token::Other(s) => out.push_str(s),
        }
    }
    Ok(out)
}

/// Recovers bits from the synonym channel of `text`.
pub fn decode(text: &str) -> Vec<bool> {
    tokenize(text)
        .iter()
        .filter_map(|t| match t {
            Token::Word(w) => match_pair(w).map(|(_, bit)| bit),
            Token::Other(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_then_decode_recovers_bits() {
        let text = "The big fast happy small dog was old.";
        let bits = vec![true, false, true, false, true];
        let embedded = embed(text, &bits, &EmbedOptions::default()).unwrap();
        let decoded = decode(&embedded);
        assert_eq!(&decoded[..bits.len()], bits.as_slice());
    }

    #[test]
    fn case_of_first_letter_is_preserved() {
        let text = "Big dog.";
        let embedded = embed(text, &[true], &EmbedOptions::default()).unwrap();
        assert!(embedded.starts_with("Large"));
    }

    #[test]
    fn non_synonym_words_are_left_untouched() {
        let text = "The quick brown fox";
        assert_eq!(candidate_count(text), 0);
        let embedded = embed(text, &[], &EmbedOptions::default()).unwrap();
        assert_eq!(embedded, text);
    }

    #[test]
    fn too_few_candidates_is_rejected() {
        let text = "big";
        let err = embed(text, &[true, false], &EmbedOptions::default()).unwrap_err();
        assert!(matches!(err, WatermarkError::InsufficientCarrierCapacity { .. }));
    }
}
