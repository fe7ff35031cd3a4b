use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A node in the variable tree passed alongside a message.
///
/// Templates select their format arguments out of a heterogeneous tree of
/// maps, lists, and scalar leaves using dotted paths. The engine only ever
/// reads a `Variable` tree; it never mutates one.
///
/// # Example
///
/// ```
/// use missive::{Variable, vars};
///
/// let tree = vars! {
///     "player" => vars! { "name" => "Alice", "score" => 42 },
///     "tags" => vec!["new", "vip"],
/// };
///
/// let name = missive::get(&tree, "player.name").unwrap();
/// assert_eq!(name, Some(&Variable::from("Alice")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variable {
    /// A mapping from string keys to child nodes. Insertion order is
    /// irrelevant; keys are navigated by identifier segments.
    Map(HashMap<String, Variable>),

    /// An ordered list of child nodes, navigated by integer segments.
    List(Vec<Variable>),

    /// A string leaf.
    String(String),

    /// An integer leaf.
    Number(i64),

    /// A floating-point leaf.
    Float(f64),

    /// A type descriptor leaf: the fully-qualified name of a type rather
    /// than a value. Substituted by its name when used as a format argument.
    TypeName(String),

    /// An explicitly absent value. Also the result of navigating to a map
    /// key that does not exist.
    Null,
}

impl Variable {
    /// A type descriptor leaf for `T`, carrying its fully-qualified name.
    pub fn type_name<T: ?Sized>() -> Variable {
        Variable::TypeName(std::any::type_name::<T>().to_string())
    }

    /// Get this variable as an integer, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Variable::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this variable as a float. Integer leaves widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Variable::Float(f) => Some(*f),
            Variable::Number(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get this variable as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Variable::String(s) => Some(s),
            _ => None,
        }
    }

    /// True if this variable is the null leaf.
    pub fn is_null(&self) -> bool {
        matches!(self, Variable::Null)
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variable::Map(entries) => write!(f, "{{{} entries}}", entries.len()),
            Variable::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Variable::String(s) => write!(f, "{s}"),
            Variable::Number(n) => write!(f, "{n}"),
            Variable::Float(v) => write!(f, "{v}"),
            Variable::TypeName(name) => write!(f, "{name}"),
            Variable::Null => write!(f, "null"),
        }
    }
}

// From implementations for common types

impl From<i32> for Variable {
    fn from(n: i32) -> Self {
        Variable::Number(n as i64)
    }
}

impl From<i64> for Variable {
    fn from(n: i64) -> Self {
        Variable::Number(n)
    }
}

impl From<u32> for Variable {
    fn from(n: u32) -> Self {
        Variable::Number(n as i64)
    }
}

impl From<usize> for Variable {
    fn from(n: usize) -> Self {
        Variable::Number(n as i64)
    }
}

impl From<f32> for Variable {
    fn from(n: f32) -> Self {
        Variable::Float(n as f64)
    }
}

impl From<f64> for Variable {
    fn from(n: f64) -> Self {
        Variable::Float(n)
    }
}

impl From<String> for Variable {
    fn from(s: String) -> Self {
        Variable::String(s)
    }
}

impl From<&str> for Variable {
    fn from(s: &str) -> Self {
        Variable::String(s.to_string())
    }
}

impl<T: Into<Variable>> From<Vec<T>> for Variable {
    fn from(items: Vec<T>) -> Self {
        Variable::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<HashMap<String, Variable>> for Variable {
    fn from(entries: HashMap<String, Variable>) -> Self {
        Variable::Map(entries)
    }
}
