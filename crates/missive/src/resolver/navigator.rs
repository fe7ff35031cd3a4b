//! Dotted-path navigation over variable trees.
//!
//! A path is split on `.` with empty segments preserved, then walked one
//! segment at a time with a pattern match on the current node:
//!
//! - In a map, the segment must be a legal identifier; a missing key yields
//!   the null leaf, from which no further descent is possible.
//! - In a list, the segment must be a non-negative integer. An identifier is
//!   a clean "no such element"; anything else is malformed.
//! - Any other leaf with segments remaining is "no such element".
//!
//! Navigation is read-only and deterministic: the same path against the same
//! tree always yields the same result.

use crate::parser::path::{self, Segment};
use crate::resolver::PathError;
use crate::types::Variable;

const NULL: &Variable = &Variable::Null;

/// Walk `path` from `root`, yielding the value it names.
///
/// A missing map key on the final segment is a successful navigation to
/// [`Variable::Null`], not an error; the distinction between absent and
/// explicitly null data is deliberately not drawn.
pub fn navigate<'a>(root: &'a Variable, path: &str) -> Result<&'a Variable, PathError> {
    let mut current = root;
    for segment in path.split('.') {
        match current {
            Variable::Map(entries) => match path::classify(segment) {
                Some(Segment::Identifier) => {
                    current = entries.get(segment).unwrap_or(NULL);
                }
                _ => {
                    return Err(PathError::Malformed {
                        segment: segment.to_string(),
                    });
                }
            },
            Variable::List(items) => match path::classify(segment) {
                Some(Segment::Index(index)) => {
                    current = items.get(index).ok_or_else(|| PathError::NotFound {
                        path: path.to_string(),
                    })?;
                }
                Some(Segment::Identifier) => {
                    return Err(PathError::NotFound {
                        path: path.to_string(),
                    });
                }
                None => {
                    return Err(PathError::Malformed {
                        segment: segment.to_string(),
                    });
                }
            },
            // A scalar or null with segments remaining: nothing to descend
            // into, regardless of what the segment looks like.
            _ => {
                return Err(PathError::NotFound {
                    path: path.to_string(),
                });
            }
        }
    }
    Ok(current)
}

/// Evaluate `path` against `root`, absorbing absent data into `None`.
///
/// This is the public face of navigation: absent data is an expected,
/// non-exceptional outcome, so both a `NotFound` and a navigation that ends
/// on the null leaf come back as `None`. A malformed segment still fails,
/// because it indicates a bug worth surfacing.
pub fn get<'a>(root: &'a Variable, path: &str) -> Result<Option<&'a Variable>, PathError> {
    match navigate(root, path) {
        Ok(Variable::Null) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(PathError::NotFound { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}
