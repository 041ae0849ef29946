use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use std::fmt;

/// Regex flags that mean the same thing to the `regex` crate and to
/// JavaScript's `RegExp`.
const PORTABLE_FLAGS: &str = "ims";

/// Text to look for in a URL or in an element's text content.
///
/// Both variants match anywhere in the haystack. A `Literal` is never read as
/// a regular expression: `"a.b"` matches `"a.b"` and not `"axb"`.
///
/// A `Regex` is matched locally for URL waits and shipped into the page as
/// `new RegExp(source, flags)` for text waits, so both must agree. Options set
/// through [`RegexBuilder`] are not visible on a compiled [`Regex`]; converting
/// one recompiles it from its source alone. Put flags inline (`(?i)saved`) or
/// use [`Pattern::regex_with_flags`] instead.
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(String),
    Regex {
        regex: Regex,
        source: String,
        flags: String,
    },
}

impl Pattern {
    /// Compiles `source` with JavaScript-style `flags`, any of `i`, `m`, `s`.
    pub fn regex_with_flags(source: &str, flags: &str) -> Result<Self, regex::Error> {
        if let Some(flag) = flags.chars().find(|c| !PORTABLE_FLAGS.contains(*c)) {
            return Err(regex::Error::Syntax(format!(
                "unsupported regex flag {flag:?}, expected any of {PORTABLE_FLAGS:?}"
            )));
        }
        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.contains('i'))
            .multi_line(flags.contains('m'))
            .dot_matches_new_line(flags.contains('s'))
            .build()?;
        Ok(Pattern::Regex {
            regex,
            source: source.to_string(),
            flags: normalize_flags(flags),
        })
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        match self {
            Pattern::Literal(text) => haystack.contains(text.as_str()),
            Pattern::Regex { regex, .. } => regex.is_match(haystack),
        }
    }

    /// Regular-expression source for this pattern, with literals escaped.
    ///
    /// Shipped into the page next to [`Pattern::flags`], so regex patterns
    /// should stick to syntax JavaScript shares with the `regex` crate.
    pub fn source(&self) -> Cow<'_, str> {
        match self {
            Pattern::Literal(text) => Cow::Owned(regex::escape(text)),
            Pattern::Regex { source, .. } => Cow::Borrowed(source.as_str()),
        }
    }

    /// JavaScript `RegExp` flags; empty for literals.
    pub fn flags(&self) -> &str {
        match self {
            Pattern::Literal(_) => "",
            Pattern::Regex { flags, .. } => flags,
        }
    }
}

/// Splits a leading inline group such as `(?im)` into its flags and the rest
/// of the source. Groups with flags JavaScript lacks, or with negations, are
/// left in place.
fn split_inline_flags(source: &str) -> Option<(&str, &str)> {
    let rest = source.strip_prefix("(?")?;
    let end = rest.find(')')?;
    let flags = &rest[..end];
    if flags.is_empty() || !flags.chars().all(|c| PORTABLE_FLAGS.contains(c)) {
        return None;
    }
    Some((flags, &rest[end + 1..]))
}

fn normalize_flags(flags: &str) -> String {
    PORTABLE_FLAGS.chars().filter(|c| flags.contains(*c)).collect()
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(text) => write!(f, "{text:?}"),
            Pattern::Regex { source, flags, .. } => write!(f, "/{source}/{flags}"),
        }
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::Literal(text.to_string())
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::Literal(text)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        // Drops builder-only options so local and in-page matching agree.
        let regex = Regex::new(regex.as_str()).unwrap_or(regex);
        let (source, flags) = match split_inline_flags(regex.as_str()) {
            Some((flags, rest)) => (rest.to_string(), normalize_flags(flags)),
            None => (regex.as_str().to_string(), String::new()),
        };
        Pattern::Regex {
            regex,
            source,
            flags,
        }
    }
}

impl From<&Regex> for Pattern {
    fn from(regex: &Regex) -> Self {
        Pattern::from(regex.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mirrors `new RegExp(source, flags)` in the page.
    fn as_shipped(pattern: &Pattern) -> Regex {
        RegexBuilder::new(&pattern.source())
            .case_insensitive(pattern.flags().contains('i'))
            .multi_line(pattern.flags().contains('m'))
            .dot_matches_new_line(pattern.flags().contains('s'))
            .build()
            .unwrap()
    }

    #[test]
    fn literal_dot_is_not_a_wildcard() {
        let pattern = Pattern::from("a.b");
        assert!(pattern.is_match("a.b"));
        assert!(pattern.is_match("xx a.b yy"));
        assert!(!pattern.is_match("axb"));
    }

    #[test]
    fn literal_source_is_escaped() {
        let pattern = Pattern::from("price (1.5$)");
        let source = pattern.source();
        assert_eq!(source, r"price \(1\.5\$\)");
        assert_eq!(pattern.flags(), "");

        let compiled = Regex::new(&source).unwrap();
        assert!(compiled.is_match("the price (1.5$) today"));
        assert!(!compiled.is_match("price 1x5$"));
    }

    #[test]
    fn regex_pattern_keeps_its_source() {
        let pattern = Pattern::from(Regex::new(r"/orders/\d+$").unwrap());
        assert_eq!(pattern.source(), r"/orders/\d+$");
        assert_eq!(pattern.flags(), "");
        assert!(pattern.is_match("http://localhost:9000/orders/17"));
        assert!(!pattern.is_match("http://localhost:9000/orders/new"));
    }

    #[test]
    fn inline_flags_are_shipped_as_regexp_flags() {
        let pattern = Pattern::from(Regex::new("(?si)saved.done").unwrap());
        assert_eq!(pattern.source(), "saved.done");
        assert_eq!(pattern.flags(), "is");

        for haystack in ["Status: SAVED\nDONE", "saved-done", "Saved"] {
            assert_eq!(
                pattern.is_match(haystack),
                as_shipped(&pattern).is_match(haystack),
                "{haystack:?}"
            );
        }
    }

    #[test]
    fn unportable_inline_groups_stay_in_the_source() {
        let pattern = Pattern::from(Regex::new("(?-i)Saved").unwrap());
        assert_eq!(pattern.source(), "(?-i)Saved");
        assert_eq!(pattern.flags(), "");

        let grouped = Pattern::from(Regex::new("(?i:sa)ved").unwrap());
        assert_eq!(grouped.source(), "(?i:sa)ved");
    }

    #[test]
    fn builder_options_do_not_split_local_and_page_matching() {
        let built = RegexBuilder::new("saved")
            .case_insensitive(true)
            .build()
            .unwrap();
        let pattern = Pattern::from(built);

        assert_eq!(
            pattern.is_match("Status: SAVED"),
            as_shipped(&pattern).is_match("Status: SAVED")
        );
    }

    #[test]
    fn explicit_flags_apply_locally_and_in_the_page() {
        let pattern = Pattern::regex_with_flags("saved", "i").unwrap();
        assert_eq!(pattern.source(), "saved");
        assert_eq!(pattern.flags(), "i");
        assert!(pattern.is_match("Status: SAVED"));
        assert!(as_shipped(&pattern).is_match("Status: SAVED"));
    }

    #[test]
    fn unsupported_flags_are_rejected() {
        assert!(matches!(
            Pattern::regex_with_flags("saved", "g"),
            Err(regex::Error::Syntax(_))
        ));
        assert!(Pattern::regex_with_flags("(", "").is_err());
    }

    #[test]
    fn display_distinguishes_variants() {
        assert_eq!(Pattern::from("Saved").to_string(), "\"Saved\"");
        assert_eq!(
            Pattern::from(Regex::new("^Sav").unwrap()).to_string(),
            "/^Sav/"
        );
        assert_eq!(
            Pattern::regex_with_flags("^sav", "i").unwrap().to_string(),
            "/^sav/i"
        );
    }
}
