//! Electronic address grammar.
//!
//! Converts spoken emails, URLs and domains to written form:
//! - "a at gmail dot com" → "a@gmail.com"
//! - "h t t p colon slash slash w w w dot example dot com" → "http://www.example.com"
//! - "nvidia dot com" → "nvidia.com"

use super::digit;

/// Endings a bare spoken domain may carry. Without this anchor, prose
/// like "polka dot dress" would read as a domain.
const TLDS: [&str; 14] = [
    "com", "org", "net", "edu", "gov", "mil", "io", "ai", "co", "uk", "us", "de", "jp", "dev",
];

/// Parse a spoken electronic address to written form.
pub fn parse(input: &str) -> Option<String> {
    let original = input.trim();
    let lowered = original.to_lowercase();

    parse_email(original, &lowered)
        .or_else(|| parse_url(&lowered))
        .or_else(|| parse_domain(&lowered))
}

/// "local at domain dot tld" → "local@domain.tld".
fn parse_email(original: &str, lowered: &str) -> Option<String> {
    // Local-part extraction indexes the original by lowered offsets,
    // which only lines up when lowercasing kept byte lengths.
    let original = if original.len() == lowered.len() {
        original
    } else {
        lowered
    };

    let (local_words, domain_words) = lowered.split_once(" at ")?;
    if !local_is_plausible(local_words) || !domain_is_plausible(domain_words) {
        return None;
    }

    let local = spell_local(&original[..local_words.len()]);
    let domain = spell_address(domain_words);
    Some(format!("{local}@{domain}"))
}

/// A multi-word local part must be spelled out letter by letter; two
/// ordinary words in a row ("email me at ...") are prose, not an address.
fn local_is_plausible(local: &str) -> bool {
    let words: Vec<&str> = local.split_whitespace().collect();
    match words.len() {
        0 => false,
        1 => true,
        _ => words
            .iter()
            .all(|w| w.len() == 1 || digit(w).is_some() || is_separator(w)),
    }
}

fn is_separator(word: &str) -> bool {
    matches!(word, "dot" | "dash" | "hyphen" | "underscore")
}

/// Each dot-separated segment must be one word or a spelled-out run, and
/// the final segment must be a known TLD.
fn domain_is_plausible(domain: &str) -> bool {
    let segments: Vec<&str> = domain.split(" dot ").collect();
    if segments.len() < 2 {
        return false;
    }
    match segments.last() {
        Some(last) if TLDS.contains(&last.trim()) => {}
        _ => return false,
    }
    segments.iter().all(|segment| {
        let words: Vec<&str> = segment.split_whitespace().collect();
        words.len() == 1 || words.iter().all(|w| w.len() == 1 || digit(w).is_some())
    })
}

/// Protocol-anchored URLs and bare "w w w dot ..." hosts.
fn parse_url(lowered: &str) -> Option<String> {
    let protocols = [
        ("h t t p s colon slash slash ", "https://"),
        ("h t t p colon slash slash ", "http://"),
        ("https colon slash slash ", "https://"),
        ("http colon slash slash ", "http://"),
    ];
    for (spoken, written) in protocols {
        let Some(rest) = lowered.strip_prefix(spoken) else {
            continue;
        };
        if rest.trim().is_empty() {
            return None;
        }
        return Some(format!("{written}{}", spell_address(rest)));
    }

    // Unlike the protocol forms, "w w w dot ..." borders on prose, so the
    // tail must look like a domain.
    let rest = lowered.strip_prefix("w w w dot ")?;
    if !domain_is_plausible(rest) {
        return None;
    }
    Some(format!("www.{}", spell_address(rest)))
}

/// Bare domain like "nvidia dot com".
fn parse_domain(lowered: &str) -> Option<String> {
    // A span with an embedded " at " is either an email or prose.
    if lowered.contains(" at ") || !domain_is_plausible(lowered) {
        return None;
    }
    Some(spell_address(lowered))
}

/// Email local part, keeping the caller's casing on spelled letters.
fn spell_local(original: &str) -> String {
    let mut out = String::new();
    for word in original.split_whitespace() {
        let lowered = word.to_lowercase();
        match lowered.as_str() {
            "dot" => out.push('.'),
            "dash" | "hyphen" => out.push('-'),
            "underscore" => out.push('_'),
            _ => {
                if let Some(d) = digit(&lowered) {
                    out.push(d);
                } else if word.chars().count() == 1 {
                    out.push_str(word);
                } else {
                    out.push_str(&lowered);
                }
            }
        }
    }
    out
}

/// Domain or URL tail: separators become symbols, digit words become
/// digits, everything else concatenates.
fn spell_address(lowered: &str) -> String {
    let mut out = String::new();
    for word in lowered.split_whitespace() {
        match word {
            "dot" => out.push('.'),
            "slash" => out.push('/'),
            "colon" => out.push(':'),
            "dash" | "hyphen" => out.push('-'),
            _ => {
                if let Some(d) = digit(word) {
                    out.push(d);
                } else {
                    out.push_str(word);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_email() {
        assert_eq!(parse("a at gmail dot com"), Some("a@gmail.com".to_string()));
        assert_eq!(
            parse("john at gmail dot com"),
            Some("john@gmail.com".to_string())
        );
    }

    #[test]
    fn test_spelled_local_parts() {
        assert_eq!(
            parse("a dot b c at gmail dot com"),
            Some("a.bc@gmail.com".to_string())
        );
        assert_eq!(
            parse("a one b two at a b c dot com"),
            Some("a1b2@abc.com".to_string())
        );
        assert_eq!(
            parse("j underscore doe at example dot org"),
            Some("j_doe@example.org".to_string())
        );
    }

    #[test]
    fn test_prose_around_at_is_not_an_email() {
        assert_eq!(parse("email me at john at gmail dot com"), None);
        assert_eq!(parse("set alarm at ten"), None);
    }

    #[test]
    fn test_url_with_protocol() {
        assert_eq!(
            parse("h t t p colon slash slash w w w dot example dot com"),
            Some("http://www.example.com".to_string())
        );
        assert_eq!(
            parse("https colon slash slash example dot com"),
            Some("https://example.com".to_string())
        );
    }

    #[test]
    fn test_www_domain() {
        assert_eq!(
            parse("w w w dot example dot com"),
            Some("www.example.com".to_string())
        );
        assert_eq!(parse("w w w dot example dot com today"), None);
    }

    #[test]
    fn test_bare_domain_needs_known_tld() {
        assert_eq!(parse("nvidia dot com"), Some("nvidia.com".to_string()));
        assert_eq!(
            parse("example dot co dot uk"),
            Some("example.co.uk".to_string())
        );
        assert_eq!(parse("polka dot dress"), None);
        assert_eq!(parse("the nvidia dot com"), None);
    }

    #[test]
    fn test_no_match() {
        assert_eq!(parse("hello world"), None);
        assert_eq!(parse("two hundred"), None);
    }
}
