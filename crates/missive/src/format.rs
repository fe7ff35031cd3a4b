//! The sprintf bridge: a formatter trait and a printf-family default.
//!
//! The renderer hands a literal format string and an ordered argument list
//! to a [`Formatter`]. [`Sprintf`] is the built-in implementation, covering
//! the printf subset bundles actually use: `%s %d %x %X %o %f %e %E %%`,
//! the flags `-`, `0`, and `+`, width, precision, and explicit `%n$`
//! argument indices (which let a translation reorder its arguments).
//!
//! Specifier scanning is text-level, one pass over the format string.

use thiserror::Error;

use crate::types::Variable;

/// Turns a format string and an ordered argument list into final text.
pub trait Formatter {
    /// Apply `format` to `arguments`.
    fn format(&self, format: &str, arguments: &[Variable]) -> Result<String, FormatError>;
}

/// A format string and its arguments are incompatible.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The conversion character is not supported.
    #[error("unknown conversion '{conversion}'")]
    UnknownConversion { conversion: char },

    /// The format string ends in the middle of a specifier.
    #[error("format string ends inside a conversion specifier")]
    UnterminatedSpecifier,

    /// A specifier could not be parsed (e.g. a zero argument index).
    #[error("malformed conversion specifier '%{specifier}'")]
    MalformedSpecifier { specifier: String },

    /// A specifier addressed an argument past the end of the list.
    #[error("conversion {index} requested but only {available} arguments were supplied")]
    MissingArgument { index: usize, available: usize },

    /// A numeric conversion was applied to a non-numeric argument.
    #[error("conversion '{conversion}' cannot format [{value}]")]
    WrongType { conversion: char, value: String },
}

/// The default printf-family formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sprintf;

impl Formatter for Sprintf {
    /// Apply `format` to `arguments`.
    ///
    /// # Example
    ///
    /// ```
    /// use missive::{Formatter, Sprintf, Variable};
    ///
    /// let text = Sprintf
    ///     .format("%s scored %d", &[Variable::from("Alice"), Variable::from(42)])
    ///     .unwrap();
    /// assert_eq!(text, "Alice scored 42");
    /// ```
    fn format(&self, format: &str, arguments: &[Variable]) -> Result<String, FormatError> {
        let mut output = String::with_capacity(format.len());
        let mut rest = format;
        let mut next_argument = 0usize;
        while let Some(percent) = rest.find('%') {
            output.push_str(&rest[..percent]);
            rest = &rest[percent + 1..];
            if let Some(tail) = rest.strip_prefix('%') {
                output.push('%');
                rest = tail;
                continue;
            }
            let (spec, consumed) = parse_specifier(rest)?;
            rest = &rest[consumed..];
            let index = match spec.index {
                Some(explicit) => explicit - 1,
                None => {
                    let sequential = next_argument;
                    next_argument += 1;
                    sequential
                }
            };
            let value = arguments.get(index).ok_or(FormatError::MissingArgument {
                index: index + 1,
                available: arguments.len(),
            })?;
            output.push_str(&render_argument(value, &spec)?);
        }
        output.push_str(rest);
        Ok(output)
    }
}

/// A parsed conversion specifier: `%[index$][flags][width][.precision]conv`.
struct Specifier {
    index: Option<usize>,
    left_justify: bool,
    zero_pad: bool,
    plus_sign: bool,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
}

/// Parse the specifier starting just after a `%`, returning it and the
/// number of bytes consumed.
fn parse_specifier(input: &str) -> Result<(Specifier, usize), FormatError> {
    let bytes = input.as_bytes();
    let mut pos = 0;

    // Explicit argument index: digits followed by '$'. Indices are 1-based.
    let mut index = None;
    let digits_end = scan_digits(bytes, pos);
    if digits_end > pos && bytes.get(digits_end) == Some(&b'$') {
        let explicit = parse_count(&input[pos..digits_end])?;
        if explicit == 0 {
            return Err(FormatError::MalformedSpecifier {
                specifier: input[..=digits_end].to_string(),
            });
        }
        index = Some(explicit);
        pos = digits_end + 1;
    }

    let mut left_justify = false;
    let mut zero_pad = false;
    let mut plus_sign = false;
    loop {
        match bytes.get(pos) {
            Some(b'-') => {
                left_justify = true;
                pos += 1;
            }
            Some(b'0') => {
                zero_pad = true;
                pos += 1;
            }
            Some(b'+') => {
                plus_sign = true;
                pos += 1;
            }
            _ => break,
        }
    }

    let width_end = scan_digits(bytes, pos);
    let width = if width_end > pos {
        Some(parse_count(&input[pos..width_end])?)
    } else {
        None
    };
    pos = width_end;

    let mut precision = None;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let precision_end = scan_digits(bytes, pos);
        precision = if precision_end > pos {
            Some(parse_count(&input[pos..precision_end])?)
        } else {
            // A bare '.' means zero precision, as in printf.
            Some(0)
        };
        pos = precision_end;
    }

    let conversion = input[pos..]
        .chars()
        .next()
        .ok_or(FormatError::UnterminatedSpecifier)?;
    pos += conversion.len_utf8();

    Ok((
        Specifier {
            index,
            left_justify,
            zero_pad,
            plus_sign,
            width,
            precision,
            conversion,
        },
        pos,
    ))
}

/// Advance past a run of ASCII digits.
fn scan_digits(bytes: &[u8], from: usize) -> usize {
    let mut pos = from;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// Parse a run of digits as a width, precision, or argument index.
fn parse_count(digits: &str) -> Result<usize, FormatError> {
    digits.parse().map_err(|_| FormatError::MalformedSpecifier {
        specifier: digits.to_string(),
    })
}

/// Render one argument through its specifier.
fn render_argument(value: &Variable, spec: &Specifier) -> Result<String, FormatError> {
    let body = match spec.conversion {
        's' => {
            let text = value.to_string();
            match spec.precision {
                Some(precision) => text.chars().take(precision).collect(),
                None => text,
            }
        }
        'd' => {
            let n = integer(value, spec)?;
            if spec.plus_sign && n >= 0 {
                format!("+{n}")
            } else {
                n.to_string()
            }
        }
        'x' => format!("{:x}", integer(value, spec)?),
        'X' => format!("{:X}", integer(value, spec)?),
        'o' => format!("{:o}", integer(value, spec)?),
        'f' => {
            let v = float(value, spec)?;
            let precision = spec.precision.unwrap_or(6);
            let text = format!("{v:.precision$}");
            if spec.plus_sign && v >= 0.0 {
                format!("+{text}")
            } else {
                text
            }
        }
        'e' => {
            let v = float(value, spec)?;
            match spec.precision {
                Some(precision) => format!("{v:.precision$e}"),
                None => format!("{v:e}"),
            }
        }
        'E' => {
            let v = float(value, spec)?;
            match spec.precision {
                Some(precision) => format!("{v:.precision$E}"),
                None => format!("{v:E}"),
            }
        }
        other => return Err(FormatError::UnknownConversion { conversion: other }),
    };
    Ok(pad(body, spec))
}

/// The argument as an integer, or a wrong-type failure.
fn integer(value: &Variable, spec: &Specifier) -> Result<i64, FormatError> {
    value.as_number().ok_or_else(|| FormatError::WrongType {
        conversion: spec.conversion,
        value: value.to_string(),
    })
}

/// The argument as a float, or a wrong-type failure.
fn float(value: &Variable, spec: &Specifier) -> Result<f64, FormatError> {
    value.as_float().ok_or_else(|| FormatError::WrongType {
        conversion: spec.conversion,
        value: value.to_string(),
    })
}

/// Pad a rendered body to the specifier's width. Zero padding applies to
/// numeric conversions only and goes after any sign.
fn pad(body: String, spec: &Specifier) -> String {
    let Some(width) = spec.width else {
        return body;
    };
    let len = body.chars().count();
    if len >= width {
        return body;
    }
    let fill = width - len;
    if spec.left_justify {
        let mut out = body;
        out.push_str(&" ".repeat(fill));
        out
    } else if spec.zero_pad && spec.conversion != 's' {
        let (sign, digits) = match body.strip_prefix(['-', '+']) {
            Some(unsigned) => (&body[..1], unsigned),
            None => ("", body.as_str()),
        };
        format!("{sign}{}{digits}", "0".repeat(fill))
    } else {
        format!("{}{body}", " ".repeat(fill))
    }
}
