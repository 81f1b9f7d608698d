//! End-to-end behavior of the public API: strict expression conversion,
//! sentence scanning, rule precedence and the error surface.

use wordform::{
    normalize, normalize_sentence, normalize_sentence_with_max_span, NormalizeError, Normalizer,
};

#[test]
fn expression_conversion_covers_every_grammar() {
    assert_eq!(normalize("two hundred").unwrap(), "200");
    assert_eq!(normalize("twenty first").unwrap(), "21st");
    assert_eq!(normalize("three point one four").unwrap(), "3.14");
    assert_eq!(normalize("five dollars and fifty cents").unwrap(), "$5.50");
    assert_eq!(normalize("two thirty p m").unwrap(), "02:30 p.m.");
    assert_eq!(normalize("nineteen ninety four").unwrap(), "1994");
    assert_eq!(normalize("ninety grams").unwrap(), "90 g");
    assert_eq!(normalize("question mark").unwrap(), "?");
    assert_eq!(
        normalize("one two three one two three five six seven eight").unwrap(),
        "123-123-5678"
    );
    assert_eq!(normalize("a at gmail dot com").unwrap(), "a@gmail.com");
    assert_eq!(normalize("nvidia dot com").unwrap(), "nvidia.com");
}

#[test]
fn digit_strings_group_in_expressions_but_not_in_sentences() {
    // "one two three" is a digit run, not the sum 6; as a whole expression
    // it reads as a phone-style group, in prose each digit stands alone.
    assert_eq!(normalize("one two three").unwrap(), "123");
    assert_eq!(
        normalize_sentence("she counted one two three and left"),
        "she counted 1 2 3 and left"
    );
    assert_eq!(
        normalize_sentence("roll nine nine nine nine nine tonight"),
        "roll 9 9 9 9 9 tonight"
    );
}

#[test]
fn emails_are_rewritten_in_sentences() {
    assert_eq!(
        normalize_sentence("email me at john at gmail dot com"),
        "email me at john@gmail.com"
    );
    assert_eq!(
        normalize_sentence("visit w w w dot example dot com today"),
        "visit www.example.com today"
    );
}

#[test]
fn expression_conversion_is_strict() {
    assert!(matches!(
        normalize("I have two hundred"),
        Err(NormalizeError::NoMatch)
    ));
    assert!(matches!(normalize("hello"), Err(NormalizeError::NoMatch)));
    assert!(matches!(normalize(""), Err(NormalizeError::NoMatch)));
}

#[test]
fn sentence_scan_rewrites_spans_in_place() {
    assert_eq!(
        normalize_sentence("I have two hundred dollars and three cats"),
        "I have $200 and 3 cats"
    );
    assert_eq!(
        normalize_sentence("I have twenty one apples"),
        "I have 21 apples"
    );
    assert_eq!(
        normalize_sentence("she arrived at quarter past three"),
        "she arrived at 03:15"
    );
    assert_eq!(
        normalize_sentence("July twenty fifth, two thousand twelve"),
        "July 25, 2012"
    );
    assert_eq!(
        normalize_sentence("five dollars and fifty cents for the coffee"),
        "$5.50 for the coffee"
    );
}

#[test]
fn unmatched_sentences_round_trip_with_original_spacing() {
    let inputs = [
        "no  spoken   spans here",
        "tabs\tand\nnewlines survive",
        "plain words only",
    ];
    for input in inputs {
        assert_eq!(normalize_sentence(input), input);
    }
}

#[test]
fn written_output_is_a_fixed_point() {
    let once = normalize_sentence("I have two hundred dollars and three cats");
    assert_eq!(normalize_sentence(&once), once);

    let once = normalize_sentence("July twenty fifth, two thousand twelve");
    assert_eq!(normalize_sentence(&once), once);
}

#[test]
fn span_cap_limits_match_length() {
    assert_eq!(
        normalize_sentence_with_max_span("twenty one apples", 1),
        "20 1 apples"
    );
    assert_eq!(
        normalize_sentence_with_max_span("twenty one apples", 2),
        "21 apples"
    );
}

#[test]
fn rules_outrank_grammars() {
    let mut n = Normalizer::new();
    n.add_rule("two hundred", "CC").unwrap();
    assert_eq!(n.normalize("two hundred").unwrap(), "CC");
    assert_eq!(n.normalize_sentence("give me two hundred now"), "give me CC now");
}

#[test]
fn multi_word_rules_match_inside_sentences() {
    let mut n = Normalizer::new();
    n.add_rule("gee pee tee", "GPT").unwrap();
    assert_eq!(
        n.normalize_sentence("we fine tuned gee pee tee yesterday"),
        "we fine tuned GPT yesterday"
    );
}

#[test]
fn rule_lifecycle() {
    let mut n = Normalizer::new();
    n.add_rule("foo", "bar").unwrap();
    n.add_rule("foo", "baz").unwrap();
    assert_eq!(n.rule_count(), 1);
    assert_eq!(n.normalize("foo").unwrap(), "baz");

    assert!(n.remove_rule("foo"));
    assert!(!n.remove_rule("foo"));
    assert!(matches!(n.normalize("foo"), Err(NormalizeError::NoMatch)));

    n.add_rule("a", "1").unwrap();
    n.add_rule("b", "2").unwrap();
    n.clear_rules();
    assert_eq!(n.rule_count(), 0);
}

#[test]
fn invalid_rules_are_rejected() {
    let mut n = Normalizer::new();
    assert!(matches!(
        n.add_rule("", "x"),
        Err(NormalizeError::InvalidRule)
    ));
    assert!(matches!(
        n.add_rule("x", "   "),
        Err(NormalizeError::InvalidRule)
    ));
    assert_eq!(n.rule_count(), 0);
}

#[test]
fn invalid_utf8_is_reported() {
    let n = Normalizer::new();
    assert!(matches!(
        n.normalize_utf8(&[0xc3, 0x28]),
        Err(NormalizeError::InvalidEncoding { .. })
    ));
    assert!(matches!(
        n.normalize_sentence_utf8(&[0xc3, 0x28]),
        Err(NormalizeError::InvalidEncoding { .. })
    ));
    assert_eq!(n.normalize_utf8("forty two".as_bytes()).unwrap(), "42");
}
