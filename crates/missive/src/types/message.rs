use std::collections::HashMap;

use bon::Builder;

use crate::resolver::{PathError, get};
use crate::types::Variable;

/// An immutable message resolution request.
///
/// A message names a template through three coordinates and carries the
/// variable tree the template's selectors are evaluated against:
///
/// - `context` — a fully-qualified, dot-separated identifier (typically the
///   name of the component reporting the message). Everything up to its last
///   `.` is the package the bundle lives in.
/// - `bundle_name` — appended to the context's package to form the bundle
///   path, so different aspects of a program can pull different bundles from
///   the same package (`example.app.errors` vs. `example.app.stderr`).
/// - `message_key` — the entry to render within the bundle.
///
/// A `Message` is built once per message to render and never mutated.
///
/// # Example
///
/// ```
/// use missive::{Bundle, Message, Resolver, StaticBundles, vars};
///
/// let mut bundles = StaticBundles::new();
/// bundles.insert(
///     "example.app.messages",
///     Bundle::from_pairs([("greet", "name~Hello, %s.")]),
/// );
///
/// let message = Message::builder()
///     .context("example.app.Widget")
///     .bundle_name("messages")
///     .message_key("greet")
///     .variables(vars! { "name" => "Alice" })
///     .build();
///
/// assert_eq!(Resolver::new(bundles).render(&message), "Hello, Alice.");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Message {
    /// The message context, a dot-separated qualified name.
    context: String,

    /// The bundle name appended to the context's package.
    bundle_name: String,

    /// The key of the message within the bundle.
    message_key: String,

    /// The variable tree selectors are evaluated against.
    variables: Variable,
}

impl Message {
    /// Create a message from its four parts.
    pub fn new(
        context: impl Into<String>,
        bundle_name: impl Into<String>,
        message_key: impl Into<String>,
        variables: impl Into<Variable>,
    ) -> Message {
        Message::builder()
            .context(context)
            .bundle_name(bundle_name)
            .message_key(message_key)
            .variables(variables.into())
            .build()
    }

    /// Insert positional values into `arguments` under the keys `$1`, `$2`,
    /// and so on, and return the map.
    ///
    /// Positional keys are referenced from templates like any other named
    /// variable, or all at once with the `$@` selector.
    pub fn position<I>(
        mut arguments: HashMap<String, Variable>,
        values: I,
    ) -> HashMap<String, Variable>
    where
        I: IntoIterator,
        I::Item: Into<Variable>,
    {
        for (i, value) in values.into_iter().enumerate() {
            arguments.insert(format!("${}", i + 1), value.into());
        }
        arguments
    }

    /// The message context.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The bundle name.
    pub fn bundle_name(&self) -> &str {
        &self.bundle_name
    }

    /// The message key.
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// The variable tree.
    pub fn variables(&self) -> &Variable {
        &self.variables
    }

    /// The bundle path: the context's package joined with the bundle name.
    ///
    /// `None` when the context contains no `.` separator, in which case no
    /// companion bundle can be resolved.
    pub fn bundle_path(&self) -> Option<String> {
        let (package, _) = self.context.rsplit_once('.')?;
        Some(format!("{package}.{}", self.bundle_name))
    }

    /// Evaluate a dotted path against this message's variable tree.
    ///
    /// Returns `None` when the path leads to absent data. Fails only when a
    /// path segment is syntactically illegal, which indicates a template
    /// authoring bug rather than missing runtime data.
    pub fn get(&self, path: &str) -> Result<Option<&Variable>, PathError> {
        get(&self.variables, path)
    }
}
