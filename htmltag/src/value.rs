use std::fmt;

use crate::{HtmlError, Result};

/// A primitive value that can be written as text or used as an attribute value.
///
/// This is the closed set of value kinds accepted by [`crate::HtmlWriter::write_value`]
/// and by the dynamic façade.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// No value. Writes nothing and becomes an empty attribute value.
    Null,
    /// A boolean, written as `true` or `false`.
    Bool(bool),
    /// A single character.
    Char(char),
    /// A double-precision float.
    F64(f64),
    /// A single-precision float.
    F32(f32),
    /// A 32-bit signed integer.
    I32(i32),
    /// A 64-bit signed integer.
    I64(i64),
    /// A string.
    Str(String),
    /// Any other value, already rendered through its [`fmt::Display`] impl.
    Object(String),
}

impl Value {
    /// Render an arbitrary displayable value as [`Value::Object`].
    pub fn object(value: impl fmt::Display) -> Self {
        Value::Object(value.to_string())
    }

    /// The name of this value's kind, as used in overload signatures.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Char(_) => "char",
            Value::F64(_) => "f64",
            Value::F32(_) => "f32",
            Value::I32(_) => "i32",
            Value::I64(_) => "i64",
            Value::Str(_) => "str",
            Value::Object(_) => "object",
        }
    }

    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::Str(s) | Value::Object(s) => f.write_str(s),
        }
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}
value_from! {
    bool => Bool, char => Char, f64 => F64, f32 => F32, i32 => I32, i64 => I64,
    String => Str, &str => Str, &String => Str
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Alignments at least this wide are rejected.
const ALIGNMENT_LIMIT: u64 = 1_000_000;

/// Apply a composite format string such as `"{0} of {1}"` to `args`.
///
/// `{{` and `}}` produce literal braces. A placeholder may carry an alignment
/// (`{0,5}` right-aligns in five columns, `{0,-5}` left-aligns); format
/// specifiers after `:` are not supported.
pub fn format_composite(format: &str, args: &[Value]) -> Result<String> {
    let error = |reason: String| HtmlError::Format {
        format: format.to_owned(),
        reason,
    };

    let mut output = String::with_capacity(format.len());
    let mut chars = format.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                output.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                output.push('}');
            }
            '}' => return Err(error("unmatched `}`".to_owned())),
            '{' => {
                let mut item = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => item.push(c),
                        None => return Err(error("unterminated placeholder".to_owned())),
                    }
                }
                let (index, alignment) = match item.split_once(',') {
                    Some((index, alignment)) => (index, Some(alignment)),
                    None => (item.as_str(), None),
                };
                if index.contains(':') || alignment.is_some_and(|a| a.contains(':')) {
                    return Err(error(format!("format specifiers are not supported in {{{item}}}")));
                }
                let index: usize = index
                    .trim()
                    .parse()
                    .map_err(|_| error(format!("invalid placeholder {{{item}}}")))?;
                let value = args.get(index).ok_or_else(|| {
                    error(format!(
                        "placeholder {{{index}}} refers past the {} argument(s)",
                        args.len()
                    ))
                })?;
                let text = value.to_string();
                match alignment {
                    None => output.push_str(&text),
                    Some(alignment) => {
                        let width: i64 = alignment
                            .trim()
                            .parse()
                            .map_err(|_| error(format!("invalid alignment in {{{item}}}")))?;
                        if width.unsigned_abs() >= ALIGNMENT_LIMIT {
                            return Err(error("alignment out of range".to_owned()));
                        }
                        let pad = (width.unsigned_abs() as usize)
                            .saturating_sub(text.chars().count());
                        if width < 0 {
                            output.push_str(&text);
                            output.extend(std::iter::repeat(' ').take(pad));
                        } else {
                            output.extend(std::iter::repeat(' ').take(pad));
                            output.push_str(&text);
                        }
                    }
                }
            }
            c => output.push(c),
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_locale_free() {
        assert_eq!(Value::from(3.5_f64).to_string(), "3.5");
        assert_eq!(Value::from(10_i32).to_string(), "10");
        assert_eq!(Value::from(-7_i64).to_string(), "-7");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::from('x').to_string(), "x");
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert!(Value::from(None::<i32>).is_null());
        assert!(!Value::from("").is_null());
    }

    #[test]
    fn formats_placeholders_in_any_order() {
        let output =
            format_composite("{1} of {0}", &[Value::from(10), Value::from(3)]).unwrap();
        assert_eq!(output, "3 of 10");
    }

    #[test]
    fn formats_escaped_braces_and_alignment() {
        let output = format_composite("{{{0,4}|{0,-4}}}", &[Value::from("ab")]).unwrap();
        assert_eq!(output, "{  ab|ab  }");
    }

    #[test]
    fn rejects_out_of_range_placeholders() {
        let result = format_composite("{2}", &[Value::from(1)]);
        assert!(matches!(result, Err(HtmlError::Format { .. })));
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert!(format_composite("{0", &[Value::from(1)]).is_err());
        assert!(format_composite("0}", &[Value::from(1)]).is_err());
        assert!(format_composite("{0:N2}", &[Value::from(1)]).is_err());
    }

    #[test]
    fn rejects_oversized_alignment() {
        for format in ["{0,-9223372036854775808}", "{0,1000000}", "{0,-1000000}"] {
            match format_composite(format, &[Value::from(1)]) {
                Err(HtmlError::Format { reason, .. }) => {
                    assert_eq!(reason, "alignment out of range")
                }
                other => panic!("expected Format error for {format}, got {other:?}"),
            }
        }
        assert_eq!(
            format_composite("{0,999999}", &[Value::from(1)]).unwrap().len(),
            999_999
        );
    }
}
