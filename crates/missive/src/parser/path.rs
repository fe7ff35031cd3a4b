//! Path segment classification.
//!
//! A dotted path is split on `.` and each segment is classified as either a
//! bare identifier (map key) or a non-negative integer (list index). A
//! segment that is neither is malformed, which the navigator reports as a
//! caller-visible argument error rather than missing data.

use winnow::prelude::*;
use winnow::token::{any, take_while};

/// The syntactic class of a single path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Segment {
    /// A legal bare identifier, usable as a map key.
    Identifier,
    /// A non-negative base-10 integer, usable as a list index.
    Index(usize),
}

/// Classify a path segment, or `None` when it is malformed.
pub(crate) fn classify(segment: &str) -> Option<Segment> {
    if let Ok(index) = index.parse(segment) {
        return Some(Segment::Index(index));
    }
    if identifier.parse(segment).is_ok() {
        return Some(Segment::Identifier);
    }
    None
}

/// Parse a run of ASCII digits as a list index.
fn index(input: &mut &str) -> ModalResult<usize> {
    take_while(1.., |c: char| c.is_ascii_digit())
        // A run of digits too large for usize cannot address an element
        // anyway; saturate so it reads as out of range.
        .map(|digits: &str| digits.parse().unwrap_or(usize::MAX))
        .parse_next(input)
}

/// Parse a bare identifier.
fn identifier(input: &mut &str) -> ModalResult<()> {
    let first = any.parse_next(input)?;
    if !is_ident_start(first) {
        return Err(winnow::error::ErrMode::Backtrack(
            winnow::error::ContextError::new(),
        ));
    }
    take_while(0.., is_ident_cont).void().parse_next(input)
}

/// Check if a character can start an identifier.
///
/// `$` is a legal start so that positional keys (`$1`, `$2`, ...) are
/// navigable paths.
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier.
fn is_ident_cont(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}
