//! Decimal number grammar.
//!
//! Converts spoken decimals to written form:
//! - "three point one four" → "3.14"
//! - "point five" → ".5"
//! - "five point two million" → "5.2 million"

use super::cardinal::{strip_sign, words_to_number};

/// Scale words large enough to stay spelled out in written form.
/// "one thousand" remains a plain cardinal ("1000"); "fifty billion"
/// reads better as "50 billion" than as a wall of zeros.
pub(crate) const LARGE_SCALES: [&str; 3] = ["trillion", "billion", "million"];

/// Parse a spoken decimal expression to written form.
pub fn parse(input: &str) -> Option<String> {
    let original = input.trim();
    let lowered = original.to_lowercase();

    if let Some(result) = parse_scaled(original, &lowered) {
        return Some(result);
    }
    parse_point(&lowered)
}

/// "X [point Y] million/billion/trillion" → "X[.Y] million".
fn parse_scaled(original: &str, lowered: &str) -> Option<String> {
    for scale in LARGE_SCALES {
        let Some(number_part) = lowered.strip_suffix(scale) else {
            continue;
        };
        // Require a word boundary so "vermillion" is not a number.
        if !number_part.ends_with(' ') {
            continue;
        }
        let number_part = number_part.trim_end();

        // Keep the caller's casing on the scale word.
        let scale_orig = &original[original.len() - scale.len()..];

        if has_point(number_part) {
            let decimal = parse_point(number_part)?;
            return Some(format!("{decimal} {scale_orig}"));
        }
        let n = words_to_number(number_part)?;
        return Some(format!("{n} {scale_orig}"));
    }
    None
}

pub(crate) fn has_point(phrase: &str) -> bool {
    phrase.contains(" point ") || phrase.starts_with("point ")
}

/// "X point Y" → "X.Y"; a missing integer part yields ".Y".
fn parse_point(input: &str) -> Option<String> {
    let (negative, rest) = strip_sign(input);

    let (integer_words, fraction_words) = if let Some(frac) = rest.strip_prefix("point ") {
        ("", frac)
    } else {
        rest.split_once(" point ")?
    };

    let integer = if integer_words.is_empty() {
        String::new()
    } else {
        words_to_number(integer_words)?.to_string()
    };
    let fraction = spell_digits(fraction_words)?;
    let sign = if negative { "-" } else { "" };
    Some(format!("{sign}{integer}.{fraction}"))
}

/// Spell a fraction digit by digit: "one four" → "14", "o five" → "05".
/// Compound words fall back to cardinal parsing ("twenty six" → "26").
pub(crate) fn spell_digits(input: &str) -> Option<String> {
    let mut out = String::new();
    for word in input.split_whitespace() {
        match word {
            "zero" | "o" | "oh" => out.push('0'),
            "one" => out.push('1'),
            "two" => out.push('2'),
            "three" => out.push('3'),
            "four" => out.push('4'),
            "five" => out.push('5'),
            "six" => out.push('6'),
            "seven" => out.push('7'),
            "eight" => out.push('8'),
            "nine" => out.push('9'),
            _ => {
                let n = words_to_number(word)?;
                out.push_str(&n.to_string());
            }
        }
    }
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}
