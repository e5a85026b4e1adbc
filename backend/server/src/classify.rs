//! # Classification
//!
//! Splits the `data` array of a request into numbers and single letters.
//!
//! Each element is tagged in this order:
//! 1. **Number**: a JSON number, or a string holding a number literal (surrounding whitespace allowed):
//!    decimal or exponent form, `Infinity`, or a `0x`/`0o`/`0b` prefixed integer
//! 2. **Alphabet**: a string of exactly one ASCII letter
//! 3. **Dropped**: everything else (longer strings, empty strings, booleans, null, arrays, objects)
//!
//! Numbers keep their original text, so `"007"` stays `"007"` and `1.50` becomes `"1.50"`.
//! Decimals too large for `f64` (`"1e400"`) still count as numbers.
use bank::payloads::Classification;
use serde_json::Value;

enum Element {
    Number(String),
    Alphabet(String),
    Dropped,
}

fn tag(value: &Value) -> Element {
    match value {
        Value::Number(number) => Element::Number(number.to_string()),
        Value::String(s) if is_numeric(s) => Element::Number(s.clone()),
        Value::String(s) if is_letter(s) => Element::Alphabet(s.clone()),
        _ => Element::Dropped,
    }
}

fn is_numeric(s: &str) -> bool {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return false;
    }

    if is_radix_literal(trimmed) {
        return true;
    }

    match trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed) {
        "Infinity" => true,
        // f64 parsing also takes `inf`, `infinity` and `nan` in any case
        unsigned if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) => false,
        _ => trimmed.parse::<f64>().is_ok_and(|n| !n.is_nan()),
    }
}

/// Unsigned `0x1F`, `0o17`, `0b101`, prefix in either case.
fn is_radix_literal(s: &str) -> bool {
    let radix = match s.get(..2).map(str::to_ascii_lowercase).as_deref() {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ => return false,
    };

    let digits = &s[2..];

    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

fn is_letter(s: &str) -> bool {
    let mut chars = s.chars();

    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

pub fn classify(data: &[Value]) -> Classification {
    let mut classification = Classification::default();

    for value in data {
        match tag(value) {
            Element::Number(number) => classification.numbers.push(number),
            Element::Alphabet(letter) => classification.alphabets.push(letter),
            Element::Dropped => {}
        }
    }

    classification.highest_alphabet = highest_alphabet(&classification.alphabets)
        .into_iter()
        .collect();

    classification
}

/// Case-insensitive maximum, first one wins on ties.
pub fn highest_alphabet(alphabets: &[String]) -> Option<String> {
    alphabets
        .iter()
        .reduce(|best, letter| {
            if letter.to_ascii_lowercase() > best.to_ascii_lowercase() {
                letter
            } else {
                best
            }
        })
        .cloned()
}
