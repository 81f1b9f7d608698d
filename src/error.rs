use thiserror::Error;

/// Errors surfaced by the public normalization API.
///
/// Sentence-level normalization never fails: unmatched spans pass through
/// verbatim. Single-expression normalization and rule mutation report
/// failures explicitly instead of panicking.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Input bytes are not valid UTF-8.
    #[error("input is not valid UTF-8: {source}")]
    InvalidEncoding {
        #[from]
        source: std::str::Utf8Error,
    },

    /// No rule or tagger matched the entire input expression.
    #[error("no rule or tagger matched the full input")]
    NoMatch,

    /// A rule's spoken or written form was empty.
    #[error("rule spoken and written forms must be non-empty")]
    InvalidRule,

    /// A rule file could not be parsed.
    #[error("malformed rule file: {source}")]
    RuleFile {
        #[from]
        source: serde_json::Error,
    },

    /// A rule file could not be read or written.
    #[error("rule file I/O failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NormalizeError>;
