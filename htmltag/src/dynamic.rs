//! A dynamic calling convention: any method name becomes a tag.
//!
//! [`HtmlWriter::invoke`] takes a method name and an ordered list of named
//! arguments. The lowercased name is the tag, the argument names (with `_`
//! replaced by `-`) are the attribute names, and the argument values are
//! stringified. Self-closing elements are written in one step; everything
//! else comes back as an open [`HtmlTag`].
//!
//! The name `write` is reserved: it writes its argument values as text
//! instead of opening a `<write>` tag. See [`HtmlWriter::write_args`].
//!
//! With the `macros` feature, [`crate::dynamic!`] offers the call syntax
//! directly:
//!
//! ```
//! use htmltag::{dynamic, HtmlWriter};
//!
//! let mut w = HtmlWriter::buffer();
//! if let Some(mut anchor) = dynamic!(w, anchor(href = "/x", data_ga = "y"))? {
//!     dynamic!(anchor, img(src = "/a.png"))?;
//! }
//! assert_eq!(w.into_string()?, r#"<anchor href="/x" data-ga="y"><img src="/a.png"/></anchor>"#);
//! # Ok::<(), htmltag::HtmlError>(())
//! ```

use std::io::Write;

use crate::value::format_composite;
use crate::{is_self_closing, Attribute, HtmlError, HtmlTag, HtmlWriter, LayoutStyle, Result, Value};

/// The method name that writes text instead of opening a tag.
pub const WRITE_METHOD: &str = "write";

/// Turn a dynamic argument name into an attribute name.
pub fn attribute_name(argument: &str) -> String {
    argument.replace('_', "-")
}

impl<W: Write> HtmlWriter<W> {
    /// Emit the tag named by `method` with `args` as its attributes.
    ///
    /// Returns the open scope for ordinary elements, and `None` for
    /// self-closing elements and for `write`.
    pub fn invoke<N, V>(
        &mut self,
        method: &str,
        args: impl IntoIterator<Item = (N, V)>,
    ) -> Result<Option<HtmlTag<'_, W>>>
    where
        N: AsRef<str>,
        V: Into<Value>,
    {
        let tag = method.to_lowercase();
        if tag.is_empty() {
            return Err(HtmlError::EmptyTagName);
        }

        if tag == WRITE_METHOD {
            let values: Vec<Value> = args
                .into_iter()
                .map(|(_, value)| -> Value { value.into() })
                .collect();
            log::trace!("dynamic write with {} argument(s)", values.len());
            self.write_args(&values)?;
            return Ok(None);
        }

        let attributes: Vec<Attribute> = args
            .into_iter()
            .map(|(name, value)| {
                let value: Value = value.into();
                Attribute::new(attribute_name(name.as_ref()), value.to_string())
            })
            .collect();
        log::trace!("dynamic call {method} -> <{tag}> with {} attribute(s)", attributes.len());

        if is_self_closing(&tag) {
            self.render_self_closing_tag(&tag, attributes)?;
            Ok(None)
        } else {
            HtmlTag::open(self, &tag, LayoutStyle::Inline, attributes).map(Some)
        }
    }

    /// Write `args` the way a `write` call with those arguments would.
    ///
    /// The accepted shapes are:
    ///
    /// * a single value of any kind, written as text;
    /// * a [`Value::Str`] format string followed by one or more values, applied
    ///   with [`format_composite`].
    ///
    /// Anything else fails with [`HtmlError::UnsupportedOverload`].
    pub fn write_args(&mut self, args: &[Value]) -> Result<()> {
        match args {
            [value] => self.write_value(value),
            [Value::Str(format), rest @ ..] if !rest.is_empty() => {
                let text = format_composite(format, rest)?;
                self.write_str(&text)
            }
            _ => Err(HtmlError::UnsupportedOverload {
                signature: format!(
                    "{WRITE_METHOD}({})",
                    args.iter().map(Value::kind).collect::<Vec<_>>().join(", ")
                ),
            }),
        }
    }
}
