//! Grammar taggers for spoken-form spans.
//!
//! Each tagger owns one semiotic class and exposes a `parse` function that
//! either converts a complete spoken phrase or declines with `None`. The
//! [`Tagger`] enum closes the set so the scanner can hold the priority
//! order as plain data.

pub mod cardinal;
pub mod currency;
pub mod date;
pub mod decimal;
pub mod electronic;
pub mod measure;
pub mod ordinal;
pub mod punctuation;
pub mod telephone;
pub mod time;

/// A successful tagger or rule match over a word span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Number of non-whitespace tokens the match consumed.
    pub consumed: usize,
    /// Written-form replacement text.
    pub replacement: String,
}

/// The closed set of grammars, one per semiotic class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tagger {
    Punctuation,
    Currency,
    Measure,
    Date,
    Time,
    Electronic,
    Decimal,
    Telephone,
    Ordinal,
    Cardinal,
}

/// Sentence-scan order. More specific grammars run first so "five dollars"
/// is money before "five" is a number, and "two thirty p m" is a time
/// before "two" and "thirty" are numbers. Telephone is absent: bare digit
/// strings over-fire on prose, so that grammar only runs on single
/// expressions.
pub const PRIORITY: [Tagger; 9] = [
    Tagger::Punctuation,
    Tagger::Currency,
    Tagger::Measure,
    Tagger::Date,
    Tagger::Time,
    Tagger::Electronic,
    Tagger::Decimal,
    Tagger::Ordinal,
    Tagger::Cardinal,
];

/// Single-expression order: every grammar. Telephone sits after Decimal
/// so "sixty point two" stays a decimal, before Electronic so dotted
/// digit groups read as IP addresses, and before Cardinal so digit
/// strings are grouped rather than summed.
pub const STRICT_PRIORITY: [Tagger; 10] = [
    Tagger::Punctuation,
    Tagger::Currency,
    Tagger::Measure,
    Tagger::Date,
    Tagger::Time,
    Tagger::Decimal,
    Tagger::Telephone,
    Tagger::Electronic,
    Tagger::Ordinal,
    Tagger::Cardinal,
];

impl Tagger {
    pub fn name(&self) -> &'static str {
        match self {
            Tagger::Punctuation => "punctuation",
            Tagger::Currency => "currency",
            Tagger::Measure => "measure",
            Tagger::Date => "date",
            Tagger::Time => "time",
            Tagger::Electronic => "electronic",
            Tagger::Decimal => "decimal",
            Tagger::Telephone => "telephone",
            Tagger::Ordinal => "ordinal",
            Tagger::Cardinal => "cardinal",
        }
    }

    /// Run this grammar over a complete phrase.
    pub fn parse(&self, phrase: &str) -> Option<String> {
        match self {
            Tagger::Punctuation => punctuation::parse(phrase),
            Tagger::Currency => currency::parse(phrase),
            Tagger::Measure => measure::parse(phrase),
            Tagger::Date => date::parse(phrase),
            Tagger::Time => time::parse(phrase),
            Tagger::Electronic => electronic::parse(phrase),
            Tagger::Decimal => decimal::parse(phrase),
            Tagger::Telephone => telephone::parse(phrase),
            Tagger::Ordinal => ordinal::parse(phrase),
            Tagger::Cardinal => cardinal::parse(phrase),
        }
    }

    /// Widest span this grammar may claim during sentence scanning.
    ///
    /// Cardinal is capped at four words: longer windows of mixed prose
    /// would otherwise accumulate into spurious numbers, and spoken
    /// numbers beyond four words are rare outside single expressions.
    pub fn sentence_span_limit(&self) -> usize {
        match self {
            Tagger::Cardinal => 4,
            _ => usize::MAX,
        }
    }

    /// Greedy longest-prefix match against a word window.
    ///
    /// Tries spans of `max_span` words down to one, joining with single
    /// spaces, and returns the first phrase this grammar accepts.
    pub fn try_match(&self, words: &[&str], max_span: usize) -> Option<Match> {
        let upper = max_span.min(words.len());
        for len in (1..=upper).rev() {
            let phrase = words[..len].join(" ");
            if let Some(replacement) = self.parse(&phrase) {
                return Some(Match {
                    consumed: len,
                    replacement,
                });
            }
        }
        None
    }
}

/// Single spoken digit, with "o"/"oh" for zero.
pub(crate) fn digit(word: &str) -> Option<char> {
    let d = match word {
        "zero" | "o" | "oh" => '0',
        "one" => '1',
        "two" => '2',
        "three" => '3',
        "four" => '4',
        "five" => '5',
        "six" => '6',
        "seven" => '7',
        "eight" => '8',
        "nine" => '9',
        _ => return None,
    };
    Some(d)
}
