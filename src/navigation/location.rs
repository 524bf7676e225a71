//! Location classification and formatting.
//!
//! Turns whatever the user typed into the address field into something a
//! viewer can load: the text itself, the text behind `https://`, or a
//! search-engine query.

use url::Url;

/// Default search engine query prefix.
pub const DEFAULT_SEARCH_ENGINE: &str = "https://www.google.com/search?q=";

/// Result of classifying raw address-field input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Nothing left after trimming; no navigation should happen.
    Empty,
    /// Input already carried an `http://` or `https://` scheme.
    Direct(String),
    /// Input looked like a network location and was given `https://`.
    Network(String),
    /// Input was treated as a search query.
    Search(String),
}

impl Classification {
    /// The navigable location, if any.
    pub fn location(&self) -> Option<&str> {
        match self {
            Classification::Empty => None,
            Classification::Direct(loc)
            | Classification::Network(loc)
            | Classification::Search(loc) => Some(loc),
        }
    }

    /// Consume the classification, returning the navigable location.
    pub fn into_location(self) -> Option<String> {
        match self {
            Classification::Empty => None,
            Classification::Direct(loc)
            | Classification::Network(loc)
            | Classification::Search(loc) => Some(loc),
        }
    }
}

/// Search engine used for input that does not look like a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    prefix: String,
}

impl SearchEngine {
    /// Create a search engine from a query prefix such as
    /// `https://duckduckgo.com/?q=`. The encoded query is appended verbatim.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The query prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build the search URL for a query.
    pub fn query_url(&self, query: &str) -> String {
        format!("{}{}", self.prefix, urlencoding::encode(query))
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_ENGINE)
    }
}

/// Classify raw input using the given search engine.
///
/// Never fails: anything that is not recognisably a location becomes a
/// search query.
pub fn classify(input: &str, engine: &SearchEngine) -> Classification {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Classification::Empty;
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Classification::Direct(trimmed.to_string());
    }

    if looks_like_location(trimmed) {
        return Classification::Network(format!("https://{}", trimmed));
    }

    Classification::Search(engine.query_url(trimmed))
}

/// Format raw input into a navigable location with the default search engine.
///
/// Returns `None` for empty or whitespace-only input.
pub fn format_location(input: &str) -> Option<String> {
    classify(input, &SearchEngine::default()).into_location()
}

/// Whether already-trimmed text should be treated as a network location.
pub fn looks_like_location(text: &str) -> bool {
    Url::parse(text).is_ok()
        || is_domain_shaped(text)
        || is_localhost(text)
        // Broad fallback: "end." or "e.g" count as locations too.
        || text.contains('.')
}

/// `label.tld` where the label is 3-63 alphanumerics or hyphens that start
/// and end alphanumeric, and the tld is 2+ ASCII letters.
fn is_domain_shaped(text: &str) -> bool {
    let Some((label, tld)) = text.split_once('.') else {
        return false;
    };

    let bytes = label.as_bytes();
    if !(3..=63).contains(&bytes.len()) {
        return false;
    }

    let edges_ok = bytes[0].is_ascii_alphanumeric() && bytes[bytes.len() - 1].is_ascii_alphanumeric();
    let middle_ok = bytes[1..bytes.len() - 1]
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'-');
    let tld_ok = tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic());

    edges_ok && middle_ok && tld_ok
}

/// `localhost` with an optional `:<port>`.
fn is_localhost(text: &str) -> bool {
    match text.strip_prefix("localhost") {
        Some("") => true,
        Some(rest) => rest
            .strip_prefix(':')
            .map(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
            .unwrap_or(false),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_scheme_is_returned_unchanged() {
        assert_eq!(
            format_location("https://example.com/a?b=c").as_deref(),
            Some("https://example.com/a?b=c")
        );
        assert_eq!(
            format_location("http://what is this").as_deref(),
            Some("http://what is this")
        );
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(
            format_location("   https://rust-lang.org  ").as_deref(),
            Some("https://rust-lang.org")
        );
        assert_eq!(
            format_location("\texample.com\n").as_deref(),
            Some("https://example.com")
        );
    }

    #[test]
    fn bare_domain_gets_https() {
        assert_eq!(
            format_location("example.com").as_deref(),
            Some("https://example.com")
        );
        assert_eq!(
            format_location("docs.rs/url").as_deref(),
            Some("https://docs.rs/url")
        );
    }

    #[test]
    fn localhost_with_port_gets_https() {
        assert_eq!(
            format_location("localhost:8080").as_deref(),
            Some("https://localhost:8080")
        );
        assert_eq!(
            format_location("localhost").as_deref(),
            Some("https://localhost")
        );
    }

    #[test]
    fn words_become_a_search() {
        let url = format_location("what is rust").unwrap();
        assert!(url.starts_with(DEFAULT_SEARCH_ENGINE));
        assert!(url.contains("q=what%20is%20rust"));
    }

    #[test]
    fn single_word_is_a_search() {
        assert_eq!(
            classify("ferris", &SearchEngine::default()),
            Classification::Search("https://www.google.com/search?q=ferris".to_string())
        );
    }

    #[test]
    fn query_is_percent_encoded() {
        let url = format_location("c++ & rust?").unwrap();
        assert_eq!(url, "https://www.google.com/search?q=c%2B%2B%20%26%20rust%3F");
    }

    #[test]
    fn empty_and_blank_input_produce_nothing() {
        assert_eq!(format_location(""), None);
        assert_eq!(format_location("   \t "), None);
        assert_eq!(classify("  ", &SearchEngine::default()), Classification::Empty);
    }

    #[test]
    fn dot_fallback_is_permissive() {
        assert_eq!(format_location("end.").as_deref(), Some("https://end."));
        assert_eq!(format_location("e.g").as_deref(), Some("https://e.g"));
    }

    #[test]
    fn own_scheme_counts_as_location() {
        assert_eq!(
            classify("mailto:ferris", &SearchEngine::default()),
            Classification::Network("https://mailto:ferris".to_string())
        );
    }

    #[test]
    fn custom_search_engine_prefix() {
        let engine = SearchEngine::new("https://duckduckgo.com/?q=");
        assert_eq!(
            classify("borrow checker", &engine),
            Classification::Search("https://duckduckgo.com/?q=borrow%20checker".to_string())
        );
    }

    #[test]
    fn domain_shape_rules() {
        assert!(is_domain_shaped("example.com"));
        assert!(is_domain_shaped("my-site.io"));
        assert!(!is_domain_shaped("ab.com"));
        assert!(!is_domain_shaped("-abc.com"));
        assert!(!is_domain_shaped("abc-.com"));
        assert!(!is_domain_shaped("example.c"));
        assert!(!is_domain_shaped("example.c0m"));
        assert!(!is_domain_shaped("example"));
    }

    #[test]
    fn localhost_rules() {
        assert!(is_localhost("localhost"));
        assert!(is_localhost("localhost:3000"));
        assert!(!is_localhost("localhost:"));
        assert!(!is_localhost("localhost:http"));
        assert!(!is_localhost("localhostx"));
    }

    #[test]
    fn classification_location_accessors() {
        let c = classify("example.com", &SearchEngine::default());
        assert_eq!(c.location(), Some("https://example.com"));
        assert_eq!(c.into_location().as_deref(), Some("https://example.com"));
        assert_eq!(Classification::Empty.location(), None);
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        fn arb_prefixed() -> impl Strategy<Value = String> {
            (
                prop_oneof![Just("http://"), Just("https://")],
                "[A-Za-z0-9.:/?=&%_~-]{0,40}",
            )
                .prop_map(|(scheme, rest)| format!("{scheme}{rest}"))
        }

        proptest! {
            #[test]
            fn http_input_is_returned_unchanged(
                input in arb_prefixed(),
                engine in "https://[a-z]{3,8}\\.com/\\?q=",
            ) {
                let engine = SearchEngine::new(engine);
                prop_assert_eq!(
                    classify(&input, &engine),
                    Classification::Direct(input.clone())
                );
            }

            #[test]
            fn surrounding_whitespace_is_ignored(
                input in arb_prefixed(),
                pad in "[ \\t]{0,4}",
            ) {
                let padded = format!("{pad}{input}{pad}");
                prop_assert_eq!(format_location(&padded), Some(input));
            }
        }
    }
}
