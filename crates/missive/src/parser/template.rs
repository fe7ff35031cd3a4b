//! Bundle entry parsing.
//!
//! A bundle entry separates an argument selector list from a sprintf-style
//! format string with a single `~`:
//!
//! ```text
//! manager.lastName,employee.lastName~The manager %s does not manage %s.
//! ```
//!
//! Everything before the first `~` is a comma-separated list of dotted path
//! selectors; everything after it is the literal format string. Uses
//! text-level splitting rather than a grammar because both delimiters are
//! hard: commas cannot be escaped and only the first `~` counts.

/// A parsed bundle entry: selector tokens and a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    selectors: Vec<String>,
    format: String,
}

impl Template {
    /// Parse an already-trimmed bundle entry.
    ///
    /// With no `~` at all the entire text is the final result: zero
    /// selectors and the text itself as the format string, which the
    /// renderer returns verbatim. An empty selector list (`~` as the first
    /// character) likewise yields zero selectors.
    pub fn parse(entry: &str) -> Template {
        match entry.split_once('~') {
            None => Template {
                selectors: Vec::new(),
                format: entry.to_string(),
            },
            Some((head, tail)) => {
                let selectors = if head.is_empty() {
                    Vec::new()
                } else {
                    head.split(',').map(str::to_string).collect()
                };
                Template {
                    selectors,
                    format: tail.to_string(),
                }
            }
        }
    }

    /// The raw selector tokens, in template order. Tokens are not trimmed;
    /// a token with stray whitespace is a malformed path.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// The literal format string.
    pub fn format(&self) -> &str {
        &self.format
    }
}
