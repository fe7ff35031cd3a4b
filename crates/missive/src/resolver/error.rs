//! Error types for path navigation.

use thiserror::Error;

/// A failed path navigation.
///
/// The two outcomes are deliberately distinct: `Malformed` indicates a
/// template authoring or caller bug (an illegal segment) and is surfaced to
/// callers of [`get`](crate::get), while `NotFound` is ordinary absent data
/// and is absorbed into a `None` result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    /// A path segment is neither a legal identifier nor a list index.
    #[error("path segment '{segment}' is not a legal identifier or index")]
    Malformed { segment: String },

    /// The path leads past the data that is actually present.
    #[error("no value at path '{path}'")]
    NotFound { path: String },
}
