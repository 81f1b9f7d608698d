//! Spoken punctuation names.
//!
//! - "period" → "."
//! - "question mark" → "?"
//! - "open parenthesis" → "("
//!
//! Only a full-input match counts; partial phrases never rewrite.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref PUNCTUATION: HashMap<&'static str, &'static str> = HashMap::from([
        ("exclamation point", "!"),
        ("exclamation mark", "!"),
        ("question mark", "?"),
        ("open parenthesis", "("),
        ("close parenthesis", ")"),
        ("left parenthesis", "("),
        ("right parenthesis", ")"),
        ("open bracket", "["),
        ("close bracket", "]"),
        ("left bracket", "["),
        ("right bracket", "]"),
        ("open brace", "{"),
        ("close brace", "}"),
        ("left brace", "{"),
        ("right brace", "}"),
        ("double quote", "\""),
        ("single quote", "'"),
        ("forward slash", "/"),
        ("back slash", "\\"),
        ("period", "."),
        ("dot", "."),
        ("comma", ","),
        ("colon", ":"),
        ("semicolon", ";"),
        ("hyphen", "-"),
        ("dash", "-"),
        ("ellipsis", "..."),
        ("ampersand", "&"),
        ("asterisk", "*"),
        ("at sign", "@"),
        ("hash", "#"),
        ("percent", "%"),
        ("plus", "+"),
        ("equals", "="),
        ("tilde", "~"),
        ("underscore", "_"),
        ("pipe", "|"),
        ("slash", "/"),
    ]);
}

/// Parse a spoken punctuation name to its symbol.
pub fn parse(input: &str) -> Option<String> {
    let lowered = input.trim().to_lowercase();
    PUNCTUATION.get(lowered.as_str()).map(|s| s.to_string())
}
