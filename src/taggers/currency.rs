//! Currency grammar.
//!
//! Converts spoken money expressions to written form:
//! - "five dollars" → "$5"
//! - "five dollars and fifty cents" → "$5.50"
//! - "one cent" → "$0.01"
//! - "two point five billion dollars" → "$2.5 billion"

use super::cardinal::words_to_number;
use super::decimal::{spell_digits, LARGE_SCALES};

/// Parse a spoken money expression to written form.
pub fn parse(input: &str) -> Option<String> {
    let original = input.trim();
    let lowered = original.to_lowercase();

    // Ungrammatical singular amount; leave it alone.
    if lowered == "one dollars" {
        return None;
    }

    parse_asian_currency(&lowered)
        .or_else(|| parse_scaled_dollars(original, &lowered))
        .or_else(|| parse_decimal_dollars(&lowered))
        .or_else(|| parse_dollars_and_cents(&lowered))
        .or_else(|| parse_dollars(&lowered))
        .or_else(|| parse_cents(&lowered))
}

/// Won, yen and yuan at million scale and above. Won and yen take a
/// currency symbol; yuan is conventionally written out.
fn parse_asian_currency(lowered: &str) -> Option<String> {
    for (unit, symbol) in [("won", "₩"), ("yen", "¥"), ("yuan", "")] {
        for scale in LARGE_SCALES {
            let pattern = format!(" {scale} {unit}");
            let Some(number_part) = lowered.strip_suffix(&pattern) else {
                continue;
            };
            let amount = scaled_amount(number_part)?;
            if symbol.is_empty() {
                return Some(format!("{amount} {scale} {unit}"));
            }
            return Some(format!("{symbol}{amount} {scale}"));
        }
    }
    None
}

/// "fifty billion dollars" → "$50 billion", keeping the scale word's casing.
fn parse_scaled_dollars(original: &str, lowered: &str) -> Option<String> {
    for scale in LARGE_SCALES {
        let pattern = format!(" {scale} dollars");
        let Some(number_part) = lowered.strip_suffix(&pattern) else {
            continue;
        };
        let scale_end = original.len() - " dollars".len();
        let scale_orig = &original[scale_end - scale.len()..scale_end];
        let amount = scaled_amount(number_part)?;
        return Some(format!("${amount} {scale_orig}"));
    }
    None
}

/// Amount in front of a scale word, with an optional decimal part.
fn scaled_amount(number_part: &str) -> Option<String> {
    if let Some((integer_words, fraction_words)) = number_part.split_once(" point ") {
        let integer = words_to_number(integer_words)?;
        let fraction = spell_digits(fraction_words)?;
        return Some(format!("{integer}.{fraction}"));
    }
    words_to_number(number_part).map(|n| n.to_string())
}

/// "twenty point five o six dollars" → "$20.506".
fn parse_decimal_dollars(lowered: &str) -> Option<String> {
    let number_part = lowered.strip_suffix(" dollars")?;

    if let Some(fraction_words) = number_part.strip_prefix("point ") {
        let fraction = spell_digits(fraction_words)?;
        return Some(format!("$.{fraction}"));
    }
    let (integer_words, fraction_words) = number_part.split_once(" point ")?;
    let integer = words_to_number(integer_words)?;
    let fraction = spell_digits(fraction_words)?;
    Some(format!("${integer}.{fraction}"))
}

/// "X dollars and Y cents" and the implied-cents shorthand
/// "seventy five dollars sixty three" → "$75.63".
fn parse_dollars_and_cents(lowered: &str) -> Option<String> {
    let separators = [
        " united states dollars and ",
        " dollars and ",
        " dollar and ",
    ];
    for sep in separators {
        let Some((dollar_words, rest)) = lowered.split_once(sep) else {
            continue;
        };
        let Some(cents_words) = rest
            .strip_suffix(" cents")
            .or_else(|| rest.strip_suffix(" cent"))
        else {
            continue;
        };
        let dollars = words_to_number(dollar_words)?;
        let cents = words_to_number(cents_words)?;
        return Some(format!("${dollars}.{cents:02}"));
    }

    let (dollar_words, rest) = lowered.split_once(" dollars ")?;
    if let Some(cents_words) = rest.strip_suffix(" cents") {
        let dollars = words_to_number(dollar_words)?;
        let cents = words_to_number(cents_words)?;
        return Some(format!("${dollars}.{cents:02}"));
    }

    // Implied cents. words_to_number rejects a leading "and", which keeps
    // "two hundred dollars and three cats" from matching as "$200.03".
    let cents = words_to_number(rest)?;
    if !(1..100).contains(&cents) {
        return None;
    }
    let dollars = dollar_amount(dollar_words)?;
    Some(format!("${dollars}.{cents:02}"))
}

/// "X dollars" → "$X".
fn parse_dollars(lowered: &str) -> Option<String> {
    if lowered == "one dollar" {
        return Some("$1".to_string());
    }
    let number_part = lowered
        .strip_suffix(" dollars")
        .or_else(|| lowered.strip_suffix(" dollar"))?;
    let amount = dollar_amount(number_part)?;
    Some(format!("${amount}"))
}

/// Dollar amounts allow the spoken shorthand "one fifty five" = 155:
/// a single leading digit word followed by a two-digit number.
fn dollar_amount(phrase: &str) -> Option<i128> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() >= 2 {
        let leading_digit = matches!(
            words[0],
            "one" | "two" | "three" | "four" | "five" | "six" | "seven" | "eight" | "nine"
        );
        if leading_digit {
            let first = words_to_number(words[0])?;
            if let Some(rest) = words_to_number(&words[1..].join(" ")) {
                if (10..=99).contains(&rest) {
                    return Some(first * 100 + rest);
                }
            }
        }
    }
    words_to_number(phrase)
}

/// "X cents" → "$0.XX".
fn parse_cents(lowered: &str) -> Option<String> {
    if lowered == "one cent" {
        return Some("$0.01".to_string());
    }
    let number_part = lowered.strip_suffix(" cents")?;
    let cents = words_to_number(number_part)?;
    if !(0..=99).contains(&cents) {
        return None;
    }
    Some(format!("$0.{cents:02}"))
}
