//! Internationalized, sprintf-style message resolution.
//!
//! A message is named by a context, a bundle name, and a key; its template
//! selects arguments out of a caller-supplied variable tree with dotted
//! paths and formats them through a printf-family format string. Failures
//! never surface as errors: the resolver degrades into a self-describing
//! diagnostic message rendered through the same pipeline.

pub mod bundle;
pub mod format;
pub mod parser;
pub mod resolver;
pub mod types;

pub use bundle::{
    Bundle, BundleCache, BundleProvider, CachedProvider, SharedSource, StaticBundles,
    TemplateSource,
};
pub use format::{FormatError, Formatter, Sprintf};
pub use parser::Template;
pub use resolver::{PathError, Resolver, get, navigate};
pub use types::{Message, Variable};

/// Creates a [`Variable::Map`] from key-value pairs.
///
/// Values are converted via `Into<Variable>`, so integers, floats, strings,
/// vectors, and nested `vars!` maps can be passed directly.
///
/// # Example
///
/// ```
/// use missive::vars;
///
/// let tree = vars! {
///     "name" => "Alice",
///     "scores" => vec![10, 12],
/// };
/// assert_eq!(missive::get(&tree, "scores.1").unwrap().unwrap().to_string(), "12");
/// ```
#[macro_export]
macro_rules! vars {
    {} => {
        $crate::Variable::Map(::std::collections::HashMap::new())
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<::std::string::String, $crate::Variable>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Variable>::into($value));
            )+
            $crate::Variable::Map(map)
        }
    };
}
