//! Whitespace-preserving tokenizer.
//!
//! Splits input text into a lazy, restartable sequence of tokens covering
//! the whole input with no gaps, so the scanner can reconstruct original
//! spacing exactly for spans it leaves untouched.

/// Coarse classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Run of letters, including interior apostrophes ("o'clock", "don't").
    Word,
    /// Run of ASCII digits.
    Digits,
    /// A single punctuation or symbol character.
    Punctuation,
    /// Run of whitespace, preserved verbatim for reconstruction.
    Whitespace,
}

/// An immutable slice of the input with its byte span and class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the first byte of this token.
    pub start: usize,
    /// Byte offset one past the last byte of this token.
    pub end: usize,
    pub class: TokenClass,
}

impl<'a> Token<'a> {
    pub fn is_whitespace(&self) -> bool {
        self.class == TokenClass::Whitespace
    }
}

/// Lazy token iterator over `text`. Calling [`tokenize`] again restarts
/// the sequence; the iterator itself is `Clone` for lookahead.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

/// Tokenize `text` into a contiguous, gap-free token sequence.
pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { text, pos: 0 }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.pos >= self.text.len() {
            return None;
        }
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;

        let (class, len) = if first.is_whitespace() {
            (TokenClass::Whitespace, run_len(rest, char::is_whitespace))
        } else if first.is_ascii_digit() {
            (TokenClass::Digits, run_len(rest, |c| c.is_ascii_digit()))
        } else if first.is_alphabetic() {
            (TokenClass::Word, word_len(rest))
        } else {
            (TokenClass::Punctuation, first.len_utf8())
        };

        let start = self.pos;
        let end = start + len;
        self.pos = end;
        Some(Token {
            text: &self.text[start..end],
            start,
            end,
            class,
        })
    }
}

/// Byte length of the leading run of chars satisfying `pred`.
fn run_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Byte length of a leading word token. An apostrophe stays inside the word
/// only when letters continue after it, so "o'clock" is one token but the
/// trailing quote in "dogs'" is not.
fn word_len(s: &str) -> usize {
    let mut iter = s.char_indices().peekable();
    let mut end = 0;
    while let Some((i, c)) = iter.next() {
        if c.is_alphabetic() {
            end = i + c.len_utf8();
        } else if c == '\''
            && end == i
            && matches!(iter.peek(), Some(&(_, next)) if next.is_alphabetic())
        {
            end = i + 1;
        } else {
            break;
        }
    }
    end
}
