//! Ordinal number grammar.
//!
//! Converts spoken ordinals to suffixed digit form:
//! - "first" → "1st"
//! - "twenty first" → "21st"
//! - "one hundredth" → "100th"

use super::cardinal::words_to_number;

/// Parse a spoken ordinal expression to written form.
pub fn parse(input: &str) -> Option<String> {
    value(input).map(format_ordinal)
}

/// Numeric value of a spoken ordinal expression ("twenty first" → 21).
pub(crate) fn value(input: &str) -> Option<i64> {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let last = *words.last()?;

    let last_value = ordinal_word_value(last)?;
    if words.len() == 1 {
        return Some(last_value);
    }

    // Cardinal prefix + ordinal tail: "one hundred twenty first" = 100+20+1.
    let prefix = words[..words.len() - 1].join(" ");
    let prefix_value = i64::try_from(words_to_number(&prefix)?).ok()?;

    // Ordinal scale words multiply: "twenty five thousandth" = 25000th.
    if let Some(scale) = ordinal_scale(last) {
        return prefix_value.checked_mul(scale);
    }
    prefix_value.checked_add(last_value)
}

fn ordinal_word_value(word: &str) -> Option<i64> {
    ordinal_small(word)
        .or_else(|| ordinal_tens(word))
        .or_else(|| ordinal_scale(word))
}

fn ordinal_small(word: &str) -> Option<i64> {
    let value = match word {
        "zeroth" => 0,
        "first" => 1,
        "second" => 2,
        "third" => 3,
        "fourth" => 4,
        "fifth" => 5,
        "sixth" => 6,
        "seventh" => 7,
        "eighth" => 8,
        "ninth" => 9,
        "tenth" => 10,
        "eleventh" => 11,
        "twelfth" => 12,
        "thirteenth" => 13,
        "fourteenth" => 14,
        "fifteenth" => 15,
        "sixteenth" => 16,
        "seventeenth" => 17,
        "eighteenth" => 18,
        "nineteenth" => 19,
        _ => return None,
    };
    Some(value)
}

fn ordinal_tens(word: &str) -> Option<i64> {
    let value = match word {
        "twentieth" => 20,
        "thirtieth" => 30,
        "fortieth" => 40,
        "fiftieth" => 50,
        "sixtieth" => 60,
        "seventieth" => 70,
        "eightieth" => 80,
        "ninetieth" => 90,
        _ => return None,
    };
    Some(value)
}

fn ordinal_scale(word: &str) -> Option<i64> {
    let value = match word {
        "hundredth" => 100,
        "thousandth" => 1_000,
        "millionth" => 1_000_000,
        "billionth" => 1_000_000_000,
        _ => return None,
    };
    Some(value)
}

/// Attach the English ordinal suffix (1st, 2nd, 3rd, 11th, 21st, ...).
fn format_ordinal(n: i64) -> String {
    let suffix = match n % 100 {
        11 | 12 | 13 => "th",
        _ => match n % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{n}{suffix}")
}
