//! Time grammar.
//!
//! Converts spoken clock times to written form:
//! - "two thirty" → "02:30"
//! - "two thirty p m" → "02:30 p.m."
//! - "quarter past one" → "01:15"
//! - "eight oclock g m t" → "08:00 gmt"

use super::cardinal::words_to_number;

const TZ_PATTERNS: [&str; 10] = [
    "g m t", "gmt", "e s t", "est", "p s t", "pst", "c s t", "cst", "m s t", "mst",
];

const PERIOD_PATTERNS: [&str; 7] = [
    " a m",
    " am",
    " p m",
    " pm",
    " in the morning",
    " in the afternoon",
    " in the evening",
];

/// Parse a spoken time expression to written form.
pub fn parse(input: &str) -> Option<String> {
    let original = input.trim();
    let (time_part, period, timezone) = split_suffixes(original);

    parse_quarter_half(&time_part, &period, &timezone)
        .or_else(|| parse_oclock(&time_part, &period, &timezone))
        .or_else(|| parse_minutes_to(&time_part, &period, &timezone))
        .or_else(|| parse_hour_minute(&time_part, &period, &timezone))
}

/// Strip a trailing timezone and am/pm marker, keeping the caller's casing
/// for both ("seven A M e s t" keeps "A.M." and "est").
fn split_suffixes(original: &str) -> (String, String, String) {
    let lowered = original.to_lowercase();
    // Suffix extraction indexes the original by lowered offsets, which only
    // lines up when lowercasing did not change byte lengths.
    let original = if original.len() == lowered.len() {
        original
    } else {
        &lowered
    };

    let mut end = lowered.len();
    let mut timezone = String::new();
    for tz in TZ_PATTERNS {
        if lowered[..end].ends_with(tz) {
            timezone = original[end - tz.len()..end].replace(' ', "");
            end -= tz.len();
            break;
        }
    }

    let mut time_part = lowered[..end].trim_end();
    let mut period = String::new();
    for pattern in PERIOD_PATTERNS {
        if time_part.ends_with(pattern) {
            let orig_suffix = &original[time_part.len() - pattern.len()..time_part.len()];
            period = format_period(orig_suffix, pattern);
            time_part = lowered[..time_part.len() - pattern.len()].trim_end();
            break;
        }
    }

    (time_part.to_string(), period, timezone)
}

fn format_period(orig_suffix: &str, pattern: &str) -> String {
    if pattern.contains("in the") {
        return if pattern.contains("morning") {
            "a.m.".to_string()
        } else {
            "p.m.".to_string()
        };
    }
    let uppercase = orig_suffix
        .chars()
        .filter(|c| c.is_alphabetic())
        .all(|c| c.is_uppercase());
    match (pattern.contains('a'), uppercase) {
        (true, true) => "A.M.".to_string(),
        (true, false) => "a.m.".to_string(),
        (false, true) => "P.M.".to_string(),
        (false, false) => "p.m.".to_string(),
    }
}

fn format_time(hour: i64, minute: i64, period: &str, timezone: &str) -> String {
    let mut result = format!("{hour:02}:{minute:02}");
    if !period.is_empty() {
        result.push(' ');
        result.push_str(period);
    }
    if !timezone.is_empty() {
        result.push(' ');
        result.push_str(timezone);
    }
    result
}

fn clock_hour(phrase: &str) -> Option<i64> {
    let hour = i64::try_from(words_to_number(phrase)?).ok()?;
    (1..=24).contains(&hour).then_some(hour)
}

/// "quarter past one" → "01:15", "half past three" → "03:30".
fn parse_quarter_half(input: &str, period: &str, timezone: &str) -> Option<String> {
    if let Some(hour_words) = input.strip_prefix("quarter past ") {
        let hour = clock_hour(hour_words)?;
        return Some(format_time(hour, 15, period, timezone));
    }
    if let Some(hour_words) = input.strip_prefix("half past ") {
        let hour = clock_hour(hour_words)?;
        return Some(format_time(hour, 30, period, timezone));
    }
    None
}

/// "three o'clock" → "03:00".
fn parse_oclock(input: &str, period: &str, timezone: &str) -> Option<String> {
    for suffix in [" o'clock", " oclock"] {
        if let Some(hour_words) = input.strip_suffix(suffix) {
            let hour = clock_hour(hour_words)?;
            return Some(format_time(hour, 0, period, timezone));
        }
    }
    None
}

/// "quarter to one" → "12:45", "ten minutes to nine" → "08:50".
///
/// The bare "N to H" form is ambiguous with ranges ("five to nine" as in
/// 5-9), so it only matches with an explicit "minutes" word or an am/pm
/// or timezone anchor.
fn parse_minutes_to(input: &str, period: &str, timezone: &str) -> Option<String> {
    if let Some(hour_words) = input.strip_prefix("quarter to ") {
        let hour = clock_hour(hour_words)?;
        let prev = if hour == 1 { 12 } else { hour - 1 };
        return Some(format_time(prev, 45, period, timezone));
    }

    let (minute_part, hour_part) = input.split_once(" to ")?;
    let stripped = minute_part
        .trim_end_matches(" min")
        .trim_end_matches(" mins")
        .trim_end_matches(" minute")
        .trim_end_matches(" minutes");
    let explicit_minutes = stripped.len() != minute_part.len();
    if !explicit_minutes && period.is_empty() && timezone.is_empty() {
        return None;
    }

    let before = i64::try_from(words_to_number(stripped)?).ok()?;
    if !(1..=59).contains(&before) {
        return None;
    }
    let hour = clock_hour(hour_part)?;
    let prev = if hour == 1 { 12 } else { hour - 1 };
    Some(format_time(prev, 60 - before, period, timezone))
}

/// Plain "hour minute" time ("two thirty", "eight o six", "seven a m").
fn parse_hour_minute(input: &str, period: &str, timezone: &str) -> Option<String> {
    let words: Vec<&str> = input.split_whitespace().collect();
    let anchored = !period.is_empty() || !timezone.is_empty();

    // A lone number is only a time when anchored, otherwise "one" would
    // become "01:00" instead of the cardinal "1".
    if words.len() == 1 {
        if !anchored {
            return None;
        }
        let hour = clock_hour(words[0])?;
        return Some(format_time(hour, 0, period, timezone));
    }

    // Hour must be a single simple word so "twenty one" never reads as 20:01.
    let hour = simple_hour(*words.first()?)?;
    let minute = minute_value(&words[1..])?;

    // Unanchored hour-minute pairs in the 10-19 range collide with spoken
    // years ("eleven fifty five" is 1155); leave those to the date grammar.
    if !anchored && (10..=19).contains(&hour) && (10..=99).contains(&minute) {
        return None;
    }

    Some(format_time(hour, minute, period, timezone))
}

fn simple_hour(word: &str) -> Option<i64> {
    let hour = match word {
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
        _ => return None,
    };
    Some(hour)
}

/// Minute words: "oh five" → 5, "thirty" → 30, "forty five" → 45.
///
/// A lone minute word must be ten or more; single-digit minutes take the
/// "oh" form, so digit pairs like "nine nine" or "one two" never fuse
/// into a clock time.
fn minute_value(words: &[&str]) -> Option<i64> {
    match words {
        [oh, digit] if *oh == "o" || *oh == "oh" => {
            let minute = i64::try_from(words_to_number(digit)?).ok()?;
            (0..=9).contains(&minute).then_some(minute)
        }
        [word] => {
            let minute = i64::try_from(words_to_number(word)?).ok()?;
            (10..=59).contains(&minute).then_some(minute)
        }
        [tens, unit] => {
            if !matches!(*tens, "twenty" | "thirty" | "forty" | "fifty") {
                return None;
            }
            if words_to_number(unit)? > 9 {
                return None;
            }
            let minute = i64::try_from(words_to_number(&words.join(" "))?).ok()?;
            (0..=59).contains(&minute).then_some(minute)
        }
        _ => None,
    }
}
