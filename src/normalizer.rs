//! Normalizer facade.
//!
//! A [`Normalizer`] owns its rule table and span cap and exposes the two
//! entry points: strict single-expression conversion ([`Normalizer::normalize`])
//! and best-effort sentence scanning ([`Normalizer::normalize_sentence`]).

use tracing::debug;

use crate::error::{NormalizeError, Result};
use crate::rules::RuleTable;
use crate::scanner::{scan, DEFAULT_MAX_SPAN_TOKENS};
use crate::taggers::STRICT_PRIORITY;

/// Spoken-to-written form converter with per-instance configuration.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    rules: RuleTable,
    max_span_tokens: usize,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            rules: RuleTable::new(),
            max_span_tokens: DEFAULT_MAX_SPAN_TOKENS,
        }
    }

    /// Set the maximum number of tokens one match may consume. Zero is
    /// clamped to one.
    pub fn with_max_span(mut self, max_span_tokens: usize) -> Self {
        self.max_span_tokens = max_span_tokens.max(1);
        self
    }

    pub fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Convert one complete spoken expression.
    ///
    /// The whole input must match a rule or a single grammar; anything
    /// less returns [`NormalizeError::NoMatch`].
    pub fn normalize(&self, input: &str) -> Result<String> {
        let phrase = input.trim();
        if phrase.is_empty() {
            return Err(NormalizeError::NoMatch);
        }
        if let Some(written) = self.rules.get(phrase) {
            return Ok(written.to_string());
        }
        // Single expressions run the full grammar set, including the
        // telephone grammar kept out of sentence scanning.
        for tagger in STRICT_PRIORITY {
            if let Some(written) = tagger.parse(phrase) {
                debug!(tagger = tagger.name(), "expression match");
                return Ok(written);
            }
        }
        Err(NormalizeError::NoMatch)
    }

    /// [`Normalizer::normalize`] over raw bytes that must be valid UTF-8.
    pub fn normalize_utf8(&self, input: &[u8]) -> Result<String> {
        self.normalize(std::str::from_utf8(input)?)
    }

    /// Rewrite every matchable span in a sentence, leaving the rest
    /// untouched. Never fails; unmatched text passes through verbatim.
    pub fn normalize_sentence(&self, input: &str) -> String {
        scan(input, &self.rules, self.max_span_tokens)
    }

    /// [`Normalizer::normalize_sentence`] with a one-off span cap.
    pub fn normalize_sentence_with_max_span(&self, input: &str, max_span_tokens: usize) -> String {
        scan(input, &self.rules, max_span_tokens.max(1))
    }

    /// [`Normalizer::normalize_sentence`] over raw bytes that must be
    /// valid UTF-8.
    pub fn normalize_sentence_utf8(&self, input: &[u8]) -> Result<String> {
        Ok(self.normalize_sentence(std::str::from_utf8(input)?))
    }

    /// Add a spoken → written rule, replacing any rule with the same
    /// spoken phrase.
    pub fn add_rule(&mut self, spoken: &str, written: &str) -> Result<()> {
        self.rules.add(spoken, written)
    }

    /// Remove a rule. Returns whether a rule was present.
    pub fn remove_rule(&mut self, spoken: &str) -> bool {
        self.rules.remove(spoken)
    }

    pub fn clear_rules(&mut self) {
        self.rules.clear();
    }

    pub fn rule_count(&self) -> usize {
        self.rules.count()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleTable {
        &mut self.rules
    }
}
