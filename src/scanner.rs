//! Sentence scanner.
//!
//! Walks the token stream left to right, trying the rule table and then
//! each grammar in priority order at every non-whitespace position. The
//! first match wins and consumes its span; everything else, whitespace
//! runs included, is emitted verbatim.

use tracing::debug;

use crate::rules::RuleTable;
use crate::taggers::{Match, PRIORITY};
use crate::tokenizer::{tokenize, Token};

/// Default cap on how many non-whitespace tokens one match may consume.
pub const DEFAULT_MAX_SPAN_TOKENS: usize = 16;

/// Rewrite every matchable span in `input`, preserving original spacing
/// and any text no rule or grammar claims.
pub fn scan(input: &str, rules: &RuleTable, max_span_tokens: usize) -> String {
    // A zero cap would make every position unmatchable; clamp to one.
    let max_span = max_span_tokens.max(1);

    let tokens: Vec<Token> = tokenize(input).collect();
    let word_idx: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, tok)| !tok.is_whitespace())
        .map(|(i, _)| i)
        .collect();
    let words: Vec<&str> = word_idx.iter().map(|&i| tokens[i].text).collect();

    let mut out = String::with_capacity(input.len());
    let mut t = 0;
    let mut w = 0;
    while t < tokens.len() {
        let token = &tokens[t];
        if token.is_whitespace() {
            out.push_str(token.text);
            t += 1;
            continue;
        }

        let window = &words[w..];
        match match_at(rules, window, max_span) {
            Some(m) if m.consumed > 0 => {
                debug!(
                    consumed = m.consumed,
                    replacement = %m.replacement,
                    offset = token.start,
                    "span match"
                );
                out.push_str(&m.replacement);
                t = word_idx[w + m.consumed - 1] + 1;
                w += m.consumed;
            }
            _ => {
                out.push_str(token.text);
                t += 1;
                w += 1;
            }
        }
    }
    out
}

/// Best match at the start of `window`: rule table first, then grammars
/// in priority order, longest span first within each.
fn match_at(rules: &RuleTable, window: &[&str], max_span: usize) -> Option<Match> {
    let m = rules.lookup(window, max_span).or_else(|| {
        PRIORITY.iter().find_map(|tagger| {
            let span = max_span.min(tagger.sentence_span_limit());
            let m = tagger.try_match(window, span)?;
            // A grammar may accept a phrase without changing it ("zero"
            // stays "zero"); emitting the source verbatim keeps its casing.
            if m.replacement
                .eq_ignore_ascii_case(&window[..m.consumed].join(" "))
            {
                return None;
            }
            Some(m)
        })
    })?;
    debug_assert!(m.consumed > 0, "a match must consume at least one token");
    Some(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_plain(input: &str) -> String {
        scan(input, &RuleTable::new(), DEFAULT_MAX_SPAN_TOKENS)
    }

    #[test]
    fn test_unmatched_text_round_trips_exactly() {
        let inputs = [
            "no spoken spans here",
            "odd   spacing\tand\nnewlines  kept",
            "",
            "   ",
        ];
        for input in inputs {
            assert_eq!(scan_plain(input), input);
        }
    }

    #[test]
    fn test_replaces_spans_in_context() {
        assert_eq!(
            scan_plain("I have twenty one apples"),
            "I have 21 apples"
        );
        assert_eq!(
            scan_plain("I have two hundred dollars and three cats"),
            "I have $200 and 3 cats"
        );
    }

    #[test]
    fn test_whitespace_around_matches_is_preserved() {
        assert_eq!(scan_plain("a  twenty one  b"), "a  21  b");
    }

    #[test]
    fn test_rules_outrank_grammars() {
        let mut rules = RuleTable::new();
        rules.add("twenty one", "XXI").unwrap();
        assert_eq!(
            scan("I have twenty one apples", &rules, DEFAULT_MAX_SPAN_TOKENS),
            "I have XXI apples"
        );
    }

    #[test]
    fn test_span_cap() {
        assert_eq!(
            scan("twenty one apples", &RuleTable::new(), 1),
            "20 1 apples"
        );
    }

    #[test]
    fn test_zero_cap_clamps_to_one() {
        assert_eq!(scan("seven apples", &RuleTable::new(), 0), "7 apples");
    }

    #[test]
    fn test_punctuation_breaks_spans() {
        // The comma token splits "twenty, one" into two windows.
        assert_eq!(scan_plain("twenty, one"), "20, 1");
    }

    #[test]
    fn test_zero_keeps_its_casing() {
        assert_eq!(scan_plain("Zero chance"), "Zero chance");
    }

    #[test]
    fn test_spoken_digit_strings_stay_separate() {
        // Digit-by-digit sequences are phone material, not cardinals;
        // in prose each digit converts on its own.
        assert_eq!(
            scan_plain("she counted one two three and left"),
            "she counted 1 2 3 and left"
        );
        assert_eq!(
            scan_plain("roll nine nine nine nine nine tonight"),
            "roll 9 9 9 9 9 tonight"
        );
    }

    #[test]
    fn test_cardinal_span_is_capped_in_sentences() {
        // A cardinal claims at most four words of a sentence, even when a
        // longer span would parse.
        let words = ["sixty", "five", "thousand", "four", "hundred"];
        let m = match_at(&RuleTable::new(), &words, DEFAULT_MAX_SPAN_TOKENS).unwrap();
        assert_eq!(m.consumed, 4);

        assert_eq!(
            scan_plain("nearly five thousand two hundred people"),
            "nearly 5200 people"
        );
    }

    #[test]
    fn test_emails_are_rewritten_in_context() {
        assert_eq!(
            scan_plain("email me at john at gmail dot com"),
            "email me at john@gmail.com"
        );
    }

    #[test]
    fn test_written_output_is_idempotent() {
        let once = scan_plain("I have two hundred dollars and three cats");
        assert_eq!(scan_plain(&once), once);
    }
}
