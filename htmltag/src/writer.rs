use std::io::Write;

use crate::{Attribute, HtmlError, Result, Value};

/// Formatting options for an [`HtmlWriter`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WriterOptions {
    /// Written once per indentation level at the start of each line.
    pub tab_string: String,
    /// Written by [`HtmlWriter::write_line`].
    pub new_line: String,
}
impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            tab_string: "\t".to_owned(),
            new_line: "\n".to_owned(),
        }
    }
}
impl WriterOptions {
    /// Set the string written per indentation level.
    pub fn with_tab_string(mut self, tab_string: impl Into<String>) -> Self {
        self.tab_string = tab_string.into();
        self
    }

    /// Set the line terminator.
    pub fn with_new_line(mut self, new_line: impl Into<String>) -> Self {
        self.new_line = new_line.into();
        self
    }
}

/// A streaming HTML writer.
///
/// The writer keeps the state a tag-at-a-time renderer needs: an indentation
/// level, a buffer of attributes waiting for the next opening tag, and the
/// stack of tags that are currently open. Closing always applies to the most
/// recently opened tag.
///
/// Attribute values are written verbatim unless added through
/// [`HtmlWriter::add_encoded_attribute`]; escaping text is the caller's choice
/// via [`HtmlWriter::write_encoded_text`].
///
/// # Example
///
/// ```
/// use htmltag::HtmlWriter;
///
/// let mut w = HtmlWriter::buffer();
/// w.add_attribute("class", "note")?;
/// w.render_begin_tag("p")?;
/// w.write_encoded_text("1 < 2")?;
/// w.render_end_tag()?;
/// assert_eq!(w.into_string()?, r#"<p class="note">1 &lt; 2</p>"#);
/// # Ok::<(), htmltag::HtmlError>(())
/// ```
#[derive(Debug)]
pub struct HtmlWriter<W: Write> {
    sink: W,
    options: WriterOptions,
    indent: usize,
    tabs_pending: bool,
    pending_attributes: Vec<Attribute>,
    open_tags: Vec<String>,
}

impl HtmlWriter<Vec<u8>> {
    /// Create a writer that renders into memory.
    pub fn buffer() -> Self {
        Self::new(Vec::new())
    }

    /// Finish writing and return the rendered HTML.
    pub fn into_string(self) -> Result<String> {
        Ok(String::from_utf8(self.finish()?)?)
    }
}

impl<W: Write> HtmlWriter<W> {
    /// Create a writer with default [`WriterOptions`].
    pub fn new(sink: W) -> Self {
        Self::with_options(sink, WriterOptions::default())
    }

    /// Create a writer with the given options.
    pub fn with_options(sink: W, options: WriterOptions) -> Self {
        HtmlWriter {
            sink,
            options,
            indent: 0,
            tabs_pending: false,
            pending_attributes: Vec::new(),
            open_tags: Vec::new(),
        }
    }

    /// The options this writer was created with.
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// A reference to the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    /// The current indentation level.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Set the indentation level used for subsequent lines.
    pub fn set_indent(&mut self, indent: usize) {
        self.indent = indent;
    }

    /// The names of the tags that are currently open, outermost first.
    pub fn open_tags(&self) -> &[String] {
        &self.open_tags
    }

    /// The number of tags that are currently open.
    pub fn depth(&self) -> usize {
        self.open_tags.len()
    }

    pub(crate) fn pending_attribute_count(&self) -> usize {
        self.pending_attributes.len()
    }

    /// Drop open tags and buffered attributes past the given counts.
    pub(crate) fn rewind(&mut self, depth: usize, pending_attributes: usize) {
        self.open_tags.truncate(depth);
        self.pending_attributes.truncate(pending_attributes);
    }

    fn output(&mut self, text: &str) -> Result<()> {
        if self.tabs_pending {
            self.tabs_pending = false;
            for _ in 0..self.indent {
                self.sink.write_all(self.options.tab_string.as_bytes())?;
            }
        }
        self.sink.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write raw text, preceded by any pending indentation.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.output(text)
    }

    /// Write the text form of a primitive value. [`Value::Null`] writes nothing.
    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        if value.is_null() {
            return Ok(());
        }
        match value {
            Value::Str(s) | Value::Object(s) => self.output(s),
            other => self.output(&other.to_string()),
        }
    }

    /// Write text with HTML special characters escaped.
    pub fn write_encoded_text(&mut self, text: &str) -> Result<()> {
        let encoded = html_escape::encode_text(text);
        self.output(&encoded)
    }

    /// Write a line terminator. The next output starts with the current indentation.
    pub fn write_line(&mut self) -> Result<()> {
        self.sink.write_all(self.options.new_line.as_bytes())?;
        self.tabs_pending = true;
        Ok(())
    }

    /// Buffer an attribute for the next opening tag. The value is written verbatim.
    pub fn add_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        check_attribute_name(name, value)?;
        self.pending_attributes.push(Attribute::new(name, value));
        Ok(())
    }

    /// Buffer an attribute for the next opening tag, escaping its value.
    pub fn add_encoded_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        let encoded = html_escape::encode_double_quoted_attribute(value);
        self.add_attribute(name, &encoded)
    }

    /// Write an opening tag carrying all buffered attributes, and mark it open.
    pub fn render_begin_tag(&mut self, name: &str) -> Result<()> {
        check_tag_name(name)?;
        self.write_begin_tag(name)?;
        self.write_pending_attributes()?;
        self.output(">")?;
        self.open_tags.push(name.to_owned());
        log::trace!("opened <{name}> at depth {}", self.open_tags.len());
        Ok(())
    }

    /// Write the closing tag for the most recently opened tag.
    pub fn render_end_tag(&mut self) -> Result<()> {
        let name = self.open_tags.pop().ok_or(HtmlError::UnbalancedEndTag)?;
        self.output("</")?;
        self.output(&name)?;
        self.output(">")?;
        log::trace!("closed </{name}> at depth {}", self.open_tags.len() + 1);
        Ok(())
    }

    /// Write `<name` without completing the tag.
    pub fn write_begin_tag(&mut self, name: &str) -> Result<()> {
        check_tag_name(name)?;
        self.output("<")?;
        self.output(name)
    }

    /// Write ` name="value"` directly, bypassing the attribute buffer.
    pub fn write_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        check_attribute_name(name, value)?;
        self.output(" ")?;
        self.output(name)?;
        self.output("=\"")?;
        self.output(value)?;
        self.output("\"")
    }

    /// Write the `/>` that completes a self-closing tag.
    pub fn write_self_closing_tag_end(&mut self) -> Result<()> {
        self.output("/>")
    }

    /// Write a complete self-closing tag in one step.
    ///
    /// Buffered attributes are written first, followed by `attributes` in order.
    pub fn render_self_closing_tag(
        &mut self,
        name: impl AsRef<str>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<()> {
        let name = name.as_ref();
        check_tag_name(name)?;
        let attributes: Vec<Attribute> = attributes.into_iter().collect();
        for attribute in &attributes {
            check_attribute_name(&attribute.name, &attribute.value)?;
        }

        self.write_begin_tag(name)?;
        self.write_pending_attributes()?;
        for attribute in &attributes {
            self.write_attribute(&attribute.name, &attribute.value)?;
        }
        self.write_self_closing_tag_end()?;
        log::debug!("wrote self-closing <{name}/> with {} attribute(s)", attributes.len());
        Ok(())
    }

    fn write_pending_attributes(&mut self) -> Result<()> {
        for attribute in std::mem::take(&mut self.pending_attributes) {
            self.write_attribute(&attribute.name, &attribute.value)?;
        }
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Check that every tag has been closed, flush, and return the sink.
    pub fn finish(mut self) -> Result<W> {
        if !self.open_tags.is_empty() {
            return Err(HtmlError::UnclosedTags(std::mem::take(&mut self.open_tags)));
        }
        if !self.pending_attributes.is_empty() {
            log::debug!(
                "discarding {} attribute(s) buffered without a tag",
                self.pending_attributes.len()
            );
        }
        self.sink.flush()?;
        Ok(self.sink)
    }
}

fn check_tag_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(HtmlError::EmptyTagName);
    }
    Ok(())
}

pub(crate) fn check_attribute_name(name: &str, value: &str) -> Result<()> {
    if name.is_empty() {
        return Err(HtmlError::EmptyAttributeName {
            value: value.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffered_attributes_go_on_the_next_tag() {
        let mut w = HtmlWriter::buffer();
        w.add_attribute("id", "a").unwrap();
        w.add_attribute("id", "b").unwrap();
        w.render_begin_tag("div").unwrap();
        w.render_begin_tag("span").unwrap();
        w.render_end_tag().unwrap();
        w.render_end_tag().unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            r#"<div id="a" id="b"><span></span></div>"#
        );
    }

    #[test]
    fn attribute_values_are_verbatim_unless_encoded() {
        let mut w = HtmlWriter::buffer();
        w.add_attribute("title", "a \"b\"").unwrap();
        w.add_encoded_attribute("alt", "a \"b\" & c").unwrap();
        w.render_begin_tag("p").unwrap();
        w.render_end_tag().unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            r#"<p title="a "b"" alt="a &quot;b&quot; &amp; c"></p>"#
        );
    }

    #[test]
    fn indentation_is_written_after_line_breaks() {
        let mut w = HtmlWriter::with_options(
            Vec::new(),
            WriterOptions::default().with_tab_string("  "),
        );
        w.write_str("a").unwrap();
        w.set_indent(2);
        w.write_line().unwrap();
        w.write_str("b").unwrap();
        w.write_str("c").unwrap();
        w.set_indent(0);
        w.write_line().unwrap();
        w.write_str("d").unwrap();
        assert_eq!(w.into_string().unwrap(), "a\n    bc\nd");
    }

    #[test]
    fn write_value_covers_every_kind() {
        let mut w = HtmlWriter::buffer();
        for value in [
            Value::from(true),
            Value::from('|'),
            Value::from(1.5_f64),
            Value::from(2.5_f32),
            Value::from(3_i32),
            Value::from(4_i64),
            Value::Null,
            Value::from("s"),
            Value::object(std::net::Ipv4Addr::LOCALHOST),
        ] {
            w.write_value(&value).unwrap();
        }
        assert_eq!(w.into_string().unwrap(), "true|1.52.534s127.0.0.1");
    }

    #[test]
    fn self_closing_tag_uses_slash_syntax() {
        let mut w = HtmlWriter::buffer();
        w.render_self_closing_tag("br", []).unwrap();
        w.render_self_closing_tag(
            crate::KnownTag::Img,
            [Attribute::new("src", "/a.png"), Attribute::new("alt", "")],
        )
        .unwrap();
        assert_eq!(w.into_string().unwrap(), r#"<br/><img src="/a.png" alt=""/>"#);
    }

    #[test]
    fn end_tag_without_open_tag_fails() {
        let mut w = HtmlWriter::buffer();
        assert!(matches!(
            w.render_end_tag(),
            Err(HtmlError::UnbalancedEndTag)
        ));
    }

    #[test]
    fn empty_names_are_rejected() {
        let mut w = HtmlWriter::buffer();
        assert!(matches!(w.render_begin_tag(""), Err(HtmlError::EmptyTagName)));
        assert!(matches!(
            w.add_attribute("", "x"),
            Err(HtmlError::EmptyAttributeName { value }) if value == "x"
        ));
        assert!(matches!(
            w.render_self_closing_tag("img", [Attribute::new("", "x")]),
            Err(HtmlError::EmptyAttributeName { .. })
        ));
        assert_eq!(w.into_string().unwrap(), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_deserialize_with_defaults() {
        let options: WriterOptions = serde_json::from_str(r#"{"tab_string":"  "}"#).unwrap();
        assert_eq!(options, WriterOptions::default().with_tab_string("  "));
    }

    #[test]
    fn finish_reports_unclosed_tags() {
        let mut w = HtmlWriter::buffer();
        w.render_begin_tag("ul").unwrap();
        w.render_begin_tag("li").unwrap();
        match w.finish() {
            Err(HtmlError::UnclosedTags(tags)) => assert_eq!(tags, ["ul", "li"]),
            other => panic!("expected UnclosedTags, got {other:?}"),
        }
    }
}
