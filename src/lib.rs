//! Spoken-form to written-form English text conversion.
//!
//! Converts number-like spoken phrases into their written rendering:
//! cardinals, ordinals, decimals, dates, times, money, measurements,
//! phone numbers, electronic addresses and spoken punctuation names.
//! Two entry points cover the common cases:
//!
//! ```
//! use wordform::{normalize, normalize_sentence};
//!
//! // Strict: the whole input must be one spoken expression.
//! assert_eq!(normalize("two hundred").unwrap(), "200");
//!
//! // Best effort: rewrite what matches, keep the rest verbatim.
//! assert_eq!(
//!     normalize_sentence("I have two hundred dollars and three cats"),
//!     "I have $200 and 3 cats"
//! );
//! ```
//!
//! A [`Normalizer`] carries per-instance configuration: user rules that
//! outrank every grammar, and a cap on match span length.
//!
//! ```
//! use wordform::Normalizer;
//!
//! let mut n = Normalizer::new();
//! n.add_rule("gee pee tee", "GPT").unwrap();
//! assert_eq!(n.normalize_sentence("the gee pee tee paper"), "the GPT paper");
//! ```

pub mod error;
pub mod normalizer;
pub mod rules;
pub mod scanner;
pub mod taggers;
pub mod tokenizer;

pub use error::{NormalizeError, Result};
pub use normalizer::Normalizer;
pub use rules::{Rule, RuleTable};
pub use scanner::DEFAULT_MAX_SPAN_TOKENS;
pub use taggers::{Match, Tagger, PRIORITY, STRICT_PRIORITY};
pub use tokenizer::{tokenize, Token, TokenClass, Tokens};

/// Convert one complete spoken expression with default configuration.
pub fn normalize(input: &str) -> Result<String> {
    Normalizer::new().normalize(input)
}

/// Rewrite every matchable span in a sentence with default configuration.
pub fn normalize_sentence(input: &str) -> String {
    Normalizer::new().normalize_sentence(input)
}

/// [`normalize_sentence`] with an explicit span cap.
pub fn normalize_sentence_with_max_span(input: &str, max_span_tokens: usize) -> String {
    Normalizer::new().normalize_sentence_with_max_span(input, max_span_tokens)
}
