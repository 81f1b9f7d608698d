//! Telephone and digit-sequence grammar.
//!
//! Converts spoken digit strings to grouped written form:
//! - "one two three one two three five six seven eight" → "123-123-5678"
//! - "plus nine one one two three ..." → "+91 123-..."
//! - "one two three dot one two three dot o dot four o" → "123.123.0.40"
//!
//! Spoken digit strings over-fire on natural language ("she counted one
//! two three"), so this grammar only runs on single expressions and is
//! kept out of sentence scanning.

use super::cardinal::words_to_number;
use super::digit;

const SCALE_WORDS: [&str; 5] = ["hundred", "thousand", "million", "billion", "trillion"];

const DIGIT_WORDS: [&str; 13] = [
    "zero", "oh", "o", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "double",
];

/// Parse a spoken digit sequence to written form.
pub fn parse(input: &str) -> Option<String> {
    let lowered = input.trim().to_lowercase();
    if lowered.contains(',') {
        return None;
    }
    if lowered.contains(" dot ") {
        return parse_ip(&lowered);
    }
    if !has_digit_words(&lowered) || has_scale_words(&lowered) {
        return None;
    }
    parse_phone(&lowered)
}

fn has_digit_words(lowered: &str) -> bool {
    lowered
        .split_whitespace()
        .any(|w| DIGIT_WORDS.contains(&w))
}

/// Scale words mark an amount, not a digit string; those belong to the
/// cardinal and currency grammars.
fn has_scale_words(lowered: &str) -> bool {
    lowered
        .split_whitespace()
        .any(|w| SCALE_WORDS.contains(&w))
}

/// Dotted digit groups read as an IP address.
fn parse_ip(lowered: &str) -> Option<String> {
    let mut octets = Vec::new();
    for part in lowered.split(" dot ") {
        let words: Vec<&str> = part.split_whitespace().collect();
        octets.push(digit_run(&words)?);
    }
    (octets.len() >= 2).then(|| octets.join("."))
}

fn parse_phone(lowered: &str) -> Option<String> {
    let words: Vec<&str> = lowered.split_whitespace().collect();
    let (prefix, rest) = if words.first() == Some(&"plus") {
        let (code, used) = country_code(&words[1..])?;
        (format!("+{code} "), &words[1 + used..])
    } else {
        (String::new(), &words[..])
    };

    let digits = digit_run(rest)?;
    // Without a country code, one or two digits are a number, not a phone.
    if prefix.is_empty() && digits.len() < 3 {
        return None;
    }
    Some(format!("{prefix}{}", group_digits(&digits)))
}

/// Country codes are one or two digit words ("nine one" → 91) or a
/// tens-unit compound ("forty four" → 44).
fn country_code(words: &[&str]) -> Option<(String, usize)> {
    if words.len() >= 2 {
        if let Some(n) = words_to_number(&words[..2].join(" ")) {
            if (10..=99).contains(&n) {
                return Some((n.to_string(), 2));
            }
        }
    }

    let mut code = String::new();
    let mut used = 0;
    for word in words {
        let Some(d) = digit(word) else { break };
        code.push(d);
        used += 1;
        if code.len() == 2 {
            break;
        }
    }
    if code.is_empty() {
        return None;
    }
    Some((code, used))
}

/// Spell a word run digit by digit, expanding "double"/"triple" and
/// two-word compounds ("twenty three" → "23").
fn digit_run(words: &[&str]) -> Option<String> {
    let mut out = String::new();
    let mut i = 0;
    while i < words.len() {
        let word = words[i];

        if let Some(reps) = repeat_count(word) {
            if let Some(d) = words.get(i + 1).and_then(|w| digit(w)) {
                for _ in 0..reps {
                    out.push(d);
                }
                i += 2;
                continue;
            }
        }

        if let Some(d) = digit(word) {
            out.push(d);
            i += 1;
            continue;
        }

        if i + 1 < words.len() {
            if let Some(n) = words_to_number(&format!("{} {}", word, words[i + 1])) {
                out.push_str(&n.to_string());
                i += 2;
                continue;
            }
        }
        if let Some(n) = words_to_number(word) {
            out.push_str(&n.to_string());
            i += 1;
            continue;
        }

        return None;
    }
    (!out.is_empty()).then_some(out)
}

fn repeat_count(word: &str) -> Option<usize> {
    match word {
        "double" => Some(2),
        "triple" => Some(3),
        _ => None,
    }
}

/// Hyphenate a digit string by length: 11 and 10 digits as phone numbers,
/// 7 as a local number, short runs as-is.
fn group_digits(digits: &str) -> String {
    match digits.len() {
        11 => format!(
            "{} {}-{}-{}",
            &digits[..1],
            &digits[1..4],
            &digits[4..7],
            &digits[7..]
        ),
        10 => format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        7 => format!("{}-{}", &digits[..3], &digits[3..]),
        0..=3 => digits.to_string(),
        _ => format!("{}-{}", &digits[..3], &digits[3..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_digit_phone() {
        assert_eq!(
            parse("one two three one two three five six seven eight"),
            Some("123-123-5678".to_string())
        );
    }

    #[test]
    fn test_country_code() {
        assert_eq!(
            parse("plus nine one one two three one two three five six seven eight"),
            Some("+91 123-123-5678".to_string())
        );
        assert_eq!(
            parse("plus forty four one two three one two three five six seven eight"),
            Some("+44 123-123-5678".to_string())
        );
    }

    #[test]
    fn test_double_and_triple() {
        assert_eq!(
            parse("double oh three one two three five six seven eight"),
            Some("003-123-5678".to_string())
        );
        assert_eq!(
            parse("triple five one two three four"),
            Some("555-1234".to_string())
        );
    }

    #[test]
    fn test_short_runs() {
        assert_eq!(parse("seven nine nine"), Some("799".to_string()));
        assert_eq!(parse("nine nine"), None);
        assert_eq!(parse("seven"), None);
    }

    #[test]
    fn test_compound_digits() {
        assert_eq!(
            parse("twenty three forty five sixty seven eight"),
            Some("234-5678".to_string())
        );
    }

    #[test]
    fn test_ip_address() {
        assert_eq!(
            parse("one two three dot one two three dot o dot four o"),
            Some("123.123.0.40".to_string())
        );
        assert_eq!(parse("ten dot zero dot zero dot one"), Some("10.0.0.1".to_string()));
    }

    #[test]
    fn test_amounts_are_not_phones() {
        assert_eq!(parse("five hundred"), None);
        assert_eq!(parse("two thousand five"), None);
    }

    #[test]
    fn test_prose_is_rejected() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse("one two three, four"), None);
        assert_eq!(parse("call me one two three maybe"), None);
    }
}
