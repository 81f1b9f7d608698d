//! Cardinal number grammar.
//!
//! Converts spoken number words to digit strings:
//! - "one" → "1"
//! - "twenty one" → "21"
//! - "one thousand two hundred thirty four" → "1234"
//! - "minus sixty" → "-60"

/// Parse a complete spoken cardinal expression.
///
/// Returns `None` if any word falls outside the number grammar.
pub fn parse(input: &str) -> Option<String> {
    let input = input.trim().to_lowercase();

    // Bare "zero" stays spoken; written "0" reads worse in running text.
    if input == "zero" {
        return Some("zero".to_string());
    }

    let (negative, rest) = strip_sign(&input);
    let value = words_to_number(rest)?;
    if negative {
        Some(format!("-{value}"))
    } else {
        Some(value.to_string())
    }
}

/// Split a leading "minus"/"negative" marker off a lowercase phrase.
pub(crate) fn strip_sign(input: &str) -> (bool, &str) {
    if let Some(rest) = input.strip_prefix("minus ") {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix("negative ") {
        (true, rest)
    } else {
        (false, input)
    }
}

/// Words that may appear inside a number phrase without carrying value.
fn is_connective(word: &str) -> bool {
    matches!(word, "and" | "a")
}

fn unit_value(word: &str) -> Option<i64> {
    let value = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
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
        _ => return None,
    };
    Some(value)
}

fn tens_value(word: &str) -> Option<i64> {
    let value = match word {
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(value)
}

/// Scale words of a thousand or more. "hundred" is handled separately
/// because it multiplies within a group instead of closing one.
fn scale_value(word: &str) -> Option<i128> {
    let value = match word {
        "thousand" => 1_000,
        "million" => 1_000_000,
        "billion" => 1_000_000_000,
        "trillion" => 1_000_000_000_000,
        "quadrillion" => 1_000_000_000_000_000,
        "quintillion" => 1_000_000_000_000_000_000,
        "sextillion" => 1_000_000_000_000_000_000_000_i128,
        // Indian numbering system
        "lakh" => 100_000,
        "crore" => 10_000_000,
        _ => return None,
    };
    Some(value)
}

/// Accumulate spoken number words into an integer.
///
/// Left to right: unit and tens words add into the current group, "hundred"
/// multiplies the group, and larger scale words close the group into the
/// result. "twenty one hundred" accumulates to 2100 and "one thousand two
/// hundred thirty four" to 1234.
///
/// Connectives ("and", "a") are skipped inside a number but may not start
/// or end one — otherwise sentence scanning would swallow a neighboring
/// "and" into a match.
///
/// Within a group the grammar is tens-then-unit at most: "twenty one" is
/// a number, "one two three" is a spoken digit string and is rejected
/// here (the telephone grammar handles those).
pub fn words_to_number(input: &str) -> Option<i128> {
    let lowered = input.to_lowercase();
    let raw: Vec<&str> = lowered.split_whitespace().collect();
    let first = *raw.first()?;
    let last = *raw.last()?;
    if is_connective(first) || is_connective(last) {
        return None;
    }

    let mut result: i128 = 0;
    let mut group: i128 = 0;
    let mut saw_number_word = false;
    let mut slot = Slot::Empty;

    for word in raw.into_iter().filter(|w| !is_connective(w)) {
        if let Some(v) = tens_value(word) {
            if slot != Slot::Empty {
                return None;
            }
            group = group.checked_add(v as i128)?;
            saw_number_word = true;
            slot = Slot::Tens;
        } else if let Some(v) = unit_value(word) {
            match slot {
                Slot::Empty => {}
                // Only a plain unit may follow a tens word; a teen cannot.
                Slot::Tens if v <= 9 => {}
                _ => return None,
            }
            group = group.checked_add(v as i128)?;
            saw_number_word = true;
            slot = Slot::Small;
        } else if word == "hundred" {
            if group == 0 {
                group = 1;
            }
            group = group.checked_mul(100)?;
            saw_number_word = true;
            slot = Slot::Empty;
        } else if let Some(scale) = scale_value(word) {
            if group == 0 {
                group = 1;
            }
            result = result.checked_add(group.checked_mul(scale)?)?;
            group = 0;
            saw_number_word = true;
            slot = Slot::Empty;
        } else {
            return None;
        }
    }

    if saw_number_word {
        result.checked_add(group)
    } else {
        None
    }
}

/// Position within the current hundreds group.
#[derive(PartialEq)]
enum Slot {
    Empty,
    Tens,
    Small,
}
