//! Date grammar.
//!
//! Converts spoken date expressions to written form:
//! - "july twenty fifth two thousand twelve" → "july 25 2012"
//! - "the fifteenth of january" → "15 january"
//! - "nineteen eighties" → "1980s"
//! - "second quarter of twenty twenty two" → "Q2 2022"

use super::cardinal::words_to_number;
use super::ordinal;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parse a spoken date expression to written form.
pub fn parse(input: &str) -> Option<String> {
    let original = input.trim();
    let lowered = original.to_lowercase();

    // Most specific shapes first.
    parse_quarter(&lowered)
        .or_else(|| parse_era_year(&lowered))
        .or_else(|| parse_decade(&lowered))
        .or_else(|| parse_day_of_month(original, &lowered))
        // Month+year must run before month+day+year so "july two thousand
        // twelve" does not read "two" as a day.
        .or_else(|| parse_month_year(original, &lowered))
        .or_else(|| parse_month_day_year(original, &lowered))
        .or_else(|| parse_year(&lowered))
}

/// "second quarter of twenty twenty two" → "Q2 2022".
fn parse_quarter(lowered: &str) -> Option<String> {
    let quarters = [
        ("first quarter of ", "Q1"),
        ("second quarter of ", "Q2"),
        ("third quarter of ", "Q3"),
        ("fourth quarter of ", "Q4"),
    ];
    for (prefix, quarter) in quarters {
        if let Some(year_words) = lowered.strip_prefix(prefix) {
            let year = parse_year_number(year_words)?;
            return Some(format!("{quarter} {year}"));
        }
    }
    None
}

/// "seven fifty b c" → "750BC", "twelve oh six a d" → "1206AD".
fn parse_era_year(lowered: &str) -> Option<String> {
    for suffix in [" b c", " bc", " a d", " ad"] {
        let Some(number_part) = lowered.strip_suffix(suffix) else {
            continue;
        };
        // Century-pair reading first ("seven fifty" = 750), then plain
        // cardinal ("forty four" = 44, "four hundred" = 400).
        let year = parse_century_pair(number_part).or_else(|| {
            let n = i64::try_from(words_to_number(number_part)?).ok()?;
            (n > 0).then_some(n)
        })?;
        let era: String = suffix
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_uppercase();
        return Some(format!("{year}{era}"));
    }
    None
}

/// Two-part year reading: "seven fifty" → 750, "twelve thirty four" → 1234,
/// "twelve oh six" → 1206. The leading word must be a unit or teen so
/// "forty four" stays the plain cardinal 44.
fn parse_century_pair(phrase: &str) -> Option<i64> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() < 2 {
        return None;
    }
    let century = i64::try_from(words_to_number(words[0])?).ok()?;
    if !(1..=19).contains(&century) {
        return None;
    }
    let tail = &words[1..];
    if let Some(digit_word) = strip_oh(tail) {
        let digit = i64::try_from(words_to_number(digit_word)?).ok()?;
        return (0..=9).contains(&digit).then_some(century * 100 + digit);
    }
    let low = i64::try_from(words_to_number(&tail.join(" "))?).ok()?;
    (10..=99).contains(&low).then_some(century * 100 + low)
}

/// "nineteen eighties" → "1980s", bare "eighties" → "80s".
fn parse_decade(lowered: &str) -> Option<String> {
    let decades = [
        ("twenties", 20),
        ("thirties", 30),
        ("forties", 40),
        ("fifties", 50),
        ("sixties", 60),
        ("seventies", 70),
        ("eighties", 80),
        ("nineties", 90),
    ];
    for (suffix, decade) in decades {
        let Some(prefix) = lowered.strip_suffix(suffix) else {
            continue;
        };
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return Some(format!("{decade}s"));
        }
        let century = century_value(prefix)?;
        return Some(format!("{century}{decade}s"));
    }
    None
}

/// Century prefix of a decade or year: "nineteen" → 19.
fn century_value(phrase: &str) -> Option<i64> {
    let value = match phrase {
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "twenty one" => 21,
        _ => return None,
    };
    Some(value)
}

/// "the fifteenth of january [two thousand five]" → "15 january [2005]".
fn parse_day_of_month(original: &str, lowered: &str) -> Option<String> {
    let rest = lowered.strip_prefix("the ")?;
    let (day_words, month_year) = rest.split_once(" of ")?;

    let day = ordinal::value(day_words)?;
    let words: Vec<&str> = month_year.split_whitespace().collect();
    let month = *words.first()?;
    month_index(month)?;
    let month_cased = original_casing(original, month);

    if words.len() == 1 {
        return Some(format!("{day} {month_cased}"));
    }
    let year = parse_year_number(&words[1..].join(" "))?;
    Some(format!("{day} {month_cased} {year}"))
}

/// "july twenty fifth [two thousand twelve]" / "june thirty" forms.
fn parse_month_day_year(original: &str, lowered: &str) -> Option<String> {
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let month = *words.first()?;
    month_index(month)?;
    if words.len() < 2 {
        return None;
    }
    let month_cased = original_casing(original, month);

    // Ordinal day, trying successively longer day phrases.
    for split in 2..=words.len().min(4) {
        let day_words = words[1..split].join(" ");
        let Some(day) = ordinal::value(&day_words) else {
            continue;
        };
        if split == words.len() {
            return Some(format!("{month_cased} {day}"));
        }
        if let Some(year) = parse_year_number(&words[split..].join(" ")) {
            return Some(format!("{month_cased} {day} {year}"));
        }
    }

    // Cardinal day ("june thirty").
    let day = i64::try_from(words_to_number(words[1])?).ok()?;
    if !(1..=31).contains(&day) {
        return None;
    }
    if words.len() == 2 {
        return Some(format!("{month_cased} {day}"));
    }
    let year = parse_year_number(&words[2..].join(" "))?;
    Some(format!("{month_cased} {day} {year}"))
}

/// "july two thousand twelve" → "july 2012".
fn parse_month_year(original: &str, lowered: &str) -> Option<String> {
    let words: Vec<&str> = lowered.split_whitespace().collect();
    if words.len() < 2 {
        return None;
    }
    month_index(words[0])?;
    let month_cased = original_casing(original, words[0]);
    let year = parse_year_number(&words[1..].join(" "))?;
    Some(format!("{month_cased} {year}"))
}

/// Standalone year. Only recognized year shapes match here so plain
/// cardinals ("twenty one") are left to the cardinal tagger.
fn parse_year(lowered: &str) -> Option<String> {
    let words: Vec<&str> = lowered.split_whitespace().collect();

    if lowered.starts_with("two thousand") || lowered.starts_with("one thousand") {
        return parse_year_number(lowered).map(|y| y.to_string());
    }

    if words.len() == 2 {
        let (century, suffix) = (words[0], words[1]);
        // "twenty X" is a year only for teen suffixes ("twenty twelve"),
        // never "twenty one" which must stay cardinal 21.
        if century == "twenty" && is_teen_word(suffix) {
            return parse_year_number(lowered).map(|y| y.to_string());
        }
        if is_teen_word(century) && century != "ten" && (is_teen_word(suffix) || is_tens_word(suffix)) {
            return parse_year_number(lowered).map(|y| y.to_string());
        }
        return None;
    }

    // "nineteen seventy six" style: century word plus a spelled two-digit tail.
    if words.len() >= 3 && (is_teen_word(words[0]) && words[0] != "ten" || words[0] == "twenty") {
        return parse_year_number(lowered).map(|y| y.to_string());
    }

    None
}

fn is_teen_word(word: &str) -> bool {
    matches!(
        word,
        "ten" | "eleven"
            | "twelve"
            | "thirteen"
            | "fourteen"
            | "fifteen"
            | "sixteen"
            | "seventeen"
            | "eighteen"
            | "nineteen"
    )
}

fn is_tens_word(word: &str) -> bool {
    matches!(
        word,
        "twenty" | "thirty" | "forty" | "fifty" | "sixty" | "seventy" | "eighty" | "ninety"
    )
}

/// Numeric year from a spoken year phrase.
pub(crate) fn parse_year_number(phrase: &str) -> Option<i64> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.is_empty() {
        return None;
    }

    // "two thousand [and] X" → 2000 + X, "one thousand X" → 1000 + X.
    for (prefix, base) in [("two thousand", 2000), ("one thousand", 1000)] {
        let Some(rest) = phrase.strip_prefix(prefix) else {
            continue;
        };
        let rest = rest.trim().trim_start_matches("and ").trim();
        if rest.is_empty() {
            return Some(base);
        }
        let tail = i64::try_from(words_to_number(rest)?).ok()?;
        return Some(base + tail);
    }

    // Century word plus two-digit tail: "nineteen seventy six" → 1976,
    // "nineteen oh five" → 1905, "twenty twelve" → 2012.
    if words.len() >= 2 {
        if let Some(century) = century_value(words[0]) {
            let tail_words = &words[1..];
            if let Some(digit_word) = strip_oh(tail_words) {
                let digit = i64::try_from(words_to_number(digit_word)?).ok()?;
                if (0..=9).contains(&digit) {
                    return Some(century * 100 + digit);
                }
                return None;
            }
            let tail = i64::try_from(words_to_number(&tail_words.join(" "))?).ok()?;
            if (0..=99).contains(&tail) {
                return Some(century * 100 + tail);
            }
        }
    }

    // Plain cardinal, accepted only in a plausible year range.
    let n = i64::try_from(words_to_number(phrase)?).ok()?;
    if (100..=9999).contains(&n) {
        return Some(n);
    }
    None
}

/// "oh five"/"o five" tail of a year; returns the digit phrase.
fn strip_oh<'a>(tail: &[&'a str]) -> Option<&'a str> {
    if tail.len() == 2 && (tail[0] == "oh" || tail[0] == "o") {
        Some(tail[1])
    } else {
        None
    }
}

fn month_index(word: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == word)
}

/// Recover the caller's casing for a month word ("July" from "july").
fn original_casing(original: &str, lowered_word: &str) -> String {
    original
        .split_whitespace()
        .find(|w| w.to_lowercase() == lowered_word)
        .unwrap_or(lowered_word)
        .to_string()
}
