//! User-defined replacement rules.
//!
//! A [`RuleTable`] maps spoken phrases to fixed written forms and is
//! consulted before any grammar tagger, so callers can pin domain terms
//! ("gee pee tee" → "GPT") or override a grammar's output. Each table is
//! an explicit value owned by its [`Normalizer`](crate::Normalizer); there
//! is no shared global state.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NormalizeError, Result};
use crate::taggers::Match;

/// One spoken → written rule, the unit of JSON import and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub spoken: String,
    pub written: String,
}

/// Case-insensitive spoken-phrase lookup table.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: HashMap<String, String>,
}

/// Lowercase and collapse interior whitespace so lookups are insensitive
/// to both case and spacing.
fn normalize_key(phrase: &str) -> String {
    phrase
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule, replacing any existing rule for the same spoken phrase.
    pub fn add(&mut self, spoken: &str, written: &str) -> Result<()> {
        let key = normalize_key(spoken);
        if key.is_empty() || written.trim().is_empty() {
            return Err(NormalizeError::InvalidRule);
        }
        self.rules.insert(key, written.to_string());
        Ok(())
    }

    /// Remove a rule. Returns whether a rule was present.
    pub fn remove(&mut self, spoken: &str) -> bool {
        self.rules.remove(&normalize_key(spoken)).is_some()
    }

    pub fn clear(&mut self) {
        self.rules.clear();
    }

    pub fn count(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Exact lookup of a complete phrase.
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.rules.get(&normalize_key(phrase)).map(String::as_str)
    }

    /// Greedy longest-prefix lookup against a word window, mirroring
    /// [`Tagger::try_match`](crate::taggers::Tagger::try_match).
    pub fn lookup(&self, words: &[&str], max_span: usize) -> Option<Match> {
        if self.rules.is_empty() {
            return None;
        }
        let upper = max_span.min(words.len());
        for len in (1..=upper).rev() {
            let key = normalize_key(&words[..len].join(" "));
            if let Some(written) = self.rules.get(&key) {
                return Some(Match {
                    consumed: len,
                    replacement: written.clone(),
                });
            }
        }
        None
    }

    /// Rules as a sorted list, for stable serialization.
    pub fn to_rules(&self) -> Vec<Rule> {
        let mut rules: Vec<Rule> = self
            .rules
            .iter()
            .map(|(spoken, written)| Rule {
                spoken: spoken.clone(),
                written: written.clone(),
            })
            .collect();
        rules.sort_by(|a, b| a.spoken.cmp(&b.spoken));
        rules
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_rules())?)
    }

    /// Build a table from a JSON rule list. Invalid entries fail the whole
    /// load rather than half-applying.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Vec<Rule> = serde_json::from_str(json)?;
        let mut table = Self::new();
        for rule in &rules {
            table.add(&rule.spoken, &rule.written)?;
        }
        Ok(table)
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut table = RuleTable::new();
        table.add("gee pee tee", "GPT").unwrap();
        assert_eq!(table.get("gee pee tee"), Some("GPT"));
        assert_eq!(table.count(), 1);
    }

    #[test]
    fn test_lookup_is_case_and_spacing_insensitive() {
        let mut table = RuleTable::new();
        table.add("Gee  Pee   Tee", "GPT").unwrap();
        assert_eq!(table.get("gee pee tee"), Some("GPT"));
        assert_eq!(table.get("GEE PEE TEE"), Some("GPT"));
    }

    #[test]
    fn test_replacement_keeps_single_entry() {
        let mut table = RuleTable::new();
        table.add("foo", "bar").unwrap();
        table.add("foo", "baz").unwrap();
        assert_eq!(table.count(), 1);
        assert_eq!(table.get("foo"), Some("baz"));
    }

    #[test]
    fn test_remove() {
        let mut table = RuleTable::new();
        table.add("foo", "bar").unwrap();
        assert!(table.remove("FOO"));
        assert!(!table.remove("foo"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut table = RuleTable::new();
        table.add("a", "1").unwrap();
        table.add("b", "2").unwrap();
        table.clear();
        assert_eq!(table.count(), 0);
    }

    #[test]
    fn test_empty_phrases_are_rejected() {
        let mut table = RuleTable::new();
        assert!(matches!(
            table.add("", "x"),
            Err(NormalizeError::InvalidRule)
        ));
        assert!(matches!(
            table.add("   ", "x"),
            Err(NormalizeError::InvalidRule)
        ));
        assert!(matches!(
            table.add("x", "  "),
            Err(NormalizeError::InvalidRule)
        ));
    }

    #[test]
    fn test_window_lookup_prefers_longest() {
        let mut table = RuleTable::new();
        table.add("new york", "NY").unwrap();
        table.add("new york city", "NYC").unwrap();

        let words = ["new", "york", "city", "today"];
        let m = table.lookup(&words, 16).unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(m.replacement, "NYC");

        let m = table.lookup(&words, 2).unwrap();
        assert_eq!(m.consumed, 2);
        assert_eq!(m.replacement, "NY");
    }

    #[test]
    fn test_json_round_trip() {
        let mut table = RuleTable::new();
        table.add("gee pee tee", "GPT").unwrap();
        table.add("doctor", "Dr.").unwrap();

        let json = table.to_json().unwrap();
        let loaded = RuleTable::from_json(&json).unwrap();
        assert_eq!(loaded.count(), 2);
        assert_eq!(loaded.get("doctor"), Some("Dr."));
        assert_eq!(loaded.get("gee pee tee"), Some("GPT"));
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(RuleTable::from_json("not json").is_err());
        assert!(RuleTable::from_json(r#"[{"spoken": "", "written": "x"}]"#).is_err());
    }
}
