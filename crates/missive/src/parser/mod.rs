//! Parsing of bundle entries and dotted path segments.

pub(crate) mod path;
mod template;

pub use template::Template;
