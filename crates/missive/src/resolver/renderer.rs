//! The message render pipeline.
//!
//! Resolution runs bundle lookup, key lookup, template parsing, argument
//! navigation, and formatting in sequence. Every failure along the way is
//! absorbed and converted into a self-describing diagnostic message rendered
//! through the same pipeline against the compiled-in diagnostic table, so
//! `render` always returns text and never an error.

use std::collections::HashMap;

use crate::bundle::{BundleProvider, TemplateSource};
use crate::format::{Formatter, Sprintf};
use crate::parser::Template;
use crate::resolver::navigator::navigate;
use crate::resolver::{PathError, diagnostic};
use crate::types::{Message, Variable};

/// Resolves messages against a bundle provider and a formatter.
///
/// The resolver holds no mutable state; any caching belongs to the provider
/// (see [`CachedProvider`](crate::CachedProvider)), so a single resolver can
/// serve concurrent render calls.
///
/// # Example
///
/// ```
/// use missive::{Bundle, Message, Resolver, StaticBundles, vars};
///
/// let mut bundles = StaticBundles::new();
/// bundles.insert(
///     "example.app.errors",
///     Bundle::from_pairs([("stale", "path,age~File %s is %d days old.")]),
/// );
/// let resolver = Resolver::new(bundles);
///
/// let text = resolver.resolve(
///     "example.app.Sweeper",
///     "errors",
///     "stale",
///     vars! { "path" => "/tmp/x", "age" => 14 },
/// );
/// assert_eq!(text, "File /tmp/x is 14 days old.");
/// ```
pub struct Resolver<P, F = Sprintf> {
    provider: P,
    formatter: F,
}

impl<P: BundleProvider> Resolver<P, Sprintf> {
    /// Create a resolver over `provider` with the default sprintf formatter.
    pub fn new(provider: P) -> Self {
        Resolver {
            provider,
            formatter: Sprintf,
        }
    }
}

impl<P: BundleProvider, F: Formatter> Resolver<P, F> {
    /// Create a resolver with a custom formatter.
    pub fn with_formatter(provider: P, formatter: F) -> Self {
        Resolver {
            provider,
            formatter,
        }
    }

    /// Resolve a message to its final text. Never fails: any internal
    /// failure produces diagnostic text instead.
    pub fn render(&self, message: &Message) -> String {
        let Some(bundle_path) = message.bundle_path() else {
            // A context without a separator is rooted in the top-level
            // namespace and cannot resolve a companion bundle.
            return self.diagnostic(
                "defaultPackage",
                &[message.context(), message.message_key()],
            );
        };
        let Some(source) = self.provider.lookup(&bundle_path) else {
            return self.diagnostic("missingBundle", &[&bundle_path, message.message_key()]);
        };
        self.render_from(source.as_ref(), &bundle_path, message)
    }

    /// Convenience over [`render`](Resolver::render) building the request in
    /// place.
    pub fn resolve(
        &self,
        context: &str,
        bundle_name: &str,
        message_key: &str,
        variables: impl Into<Variable>,
    ) -> String {
        self.render(&Message::new(context, bundle_name, message_key, variables))
    }

    /// Render a message from an already-resolved template source.
    fn render_from(
        &self,
        source: &dyn TemplateSource,
        bundle_path: &str,
        message: &Message,
    ) -> String {
        let key = message.message_key();
        let Some(entry) = source.entry(key) else {
            return self.diagnostic("missingKey", &[key, bundle_path]);
        };
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            return self.diagnostic("blankMessage", &[key, bundle_path]);
        }
        let template = Template::parse(trimmed);
        if template.selectors().is_empty() {
            // No selectors means no substitution: the text passes through
            // untouched even if it contains specifier-like sequences.
            return template.format().to_string();
        }
        let mut arguments = Vec::with_capacity(template.selectors().len());
        for selector in template.selectors() {
            if selector == "$@" {
                expand_positional(message.variables(), &mut arguments);
                continue;
            }
            match navigate(message.variables(), selector) {
                Ok(value) => arguments.push(display_form(value)),
                Err(PathError::Malformed { .. }) => {
                    return self.diagnostic("badFormatArgument", &[selector, key, bundle_path]);
                }
                Err(PathError::NotFound { .. }) => {
                    return self.diagnostic("missingArgument", &[selector, key, bundle_path]);
                }
            }
        }
        match self.formatter.format(template.format(), &arguments) {
            Ok(text) => text,
            Err(err) => {
                self.diagnostic("formatException", &[&err.to_string(), key, bundle_path])
            }
        }
    }

    /// Render a diagnostic message through the same pipeline, against the
    /// compiled-in table and with positional string arguments.
    fn diagnostic(&self, diagnostic_key: &str, arguments: &[&str]) -> String {
        let variables = Message::position(HashMap::new(), arguments.iter().copied());
        let message = Message::builder()
            .context(diagnostic::CONTEXT)
            .bundle_name(diagnostic::BUNDLE_NAME)
            .message_key(diagnostic_key)
            .variables(Variable::Map(variables))
            .build();
        let bundle_path = message
            .bundle_path()
            .unwrap_or_else(|| diagnostic::CONTEXT.to_string());
        self.render_from(diagnostic::templates(), &bundle_path, &message)
    }
}

/// Append the values of the contiguous positional keys `$1`, `$2`, ... to
/// the argument list, stopping at the first gap.
fn expand_positional(variables: &Variable, arguments: &mut Vec<Variable>) {
    let Variable::Map(entries) = variables else {
        return;
    };
    for i in 1.. {
        match entries.get(&format!("${i}")) {
            Some(value) => arguments.push(display_form(value)),
            None => break,
        }
    }
}

/// Normalize a resolved value for display: a type descriptor is replaced by
/// its fully-qualified name.
fn display_form(value: &Variable) -> Variable {
    match value {
        Variable::TypeName(name) => Variable::String(name.clone()),
        other => other.clone(),
    }
}
