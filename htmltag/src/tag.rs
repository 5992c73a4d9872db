use std::io::Write;
use std::ops::{Deref, DerefMut};

use crate::writer::check_attribute_name;
use crate::{Attribute, HtmlError, HtmlWriter, Result};

/// How a tag is framed in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutStyle {
    /// The tag is written where the cursor is.
    #[default]
    Inline,
    /// The tag starts on its own, further indented line, and the line ends after it closes.
    TagOnOwnLine,
    /// Like [`LayoutStyle::TagOnOwnLine`], with line breaks just inside the tag as well.
    TagOnOwnLineWithBreaks,
}
impl LayoutStyle {
    /// Whether a line break (and one extra level of indentation) precedes the tag.
    pub fn breaks_before(self) -> bool {
        !matches!(self, LayoutStyle::Inline)
    }

    /// Whether line breaks follow the opening tag and precede the closing tag.
    pub fn breaks_inside(self) -> bool {
        matches!(self, LayoutStyle::TagOnOwnLineWithBreaks)
    }
}

/// An open HTML element.
///
/// The opening tag is written when the scope is created; the closing tag is
/// written exactly once, by [`HtmlTag::close`] or when the scope is dropped.
/// The scope dereferences to its [`HtmlWriter`], so inner content is written
/// through it, and nested scopes borrow their parent. That borrow means an
/// outer scope cannot be released while an inner one is alive.
///
/// Errors while closing in [`Drop`] cannot be returned and are logged instead;
/// call [`HtmlTag::close`] to observe them.
///
/// # Example
///
/// ```
/// use htmltag::{CoreAttrs, HtmlWriter};
///
/// let mut w = HtmlWriter::buffer();
/// {
///     let mut ul = w.render_ul(CoreAttrs::default().with_class("links"))?;
///     let mut li = ul.render_li(CoreAttrs::default())?;
///     li.write_str("first")?;
/// }
/// assert_eq!(w.into_string()?, r#"<ul class="links"><li>first</li></ul>"#);
/// # Ok::<(), htmltag::HtmlError>(())
/// ```
#[derive(Debug)]
#[must_use = "the tag is closed as soon as the scope is dropped"]
pub struct HtmlTag<'w, W: Write> {
    writer: &'w mut HtmlWriter<W>,
    name: String,
    layout: LayoutStyle,
    depth: usize,
    outer_indent: usize,
    closed: bool,
}

impl<'w, W: Write> HtmlTag<'w, W> {
    /// Open `name` on `writer` with the given layout and attributes.
    ///
    /// Attributes are written in order; duplicates are kept.
    pub fn open(
        writer: &'w mut HtmlWriter<W>,
        name: impl AsRef<str>,
        layout: LayoutStyle,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<Self> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(HtmlError::EmptyTagName);
        }
        let attributes: Vec<Attribute> = attributes.into_iter().collect();
        for attribute in &attributes {
            check_attribute_name(&attribute.name, &attribute.value)?;
        }

        let outer_indent = writer.indent();
        let outer_depth = writer.depth();
        let pending = writer.pending_attribute_count();
        if let Err(err) = write_opening(writer, name, layout, &attributes) {
            writer.set_indent(outer_indent);
            writer.rewind(outer_depth, pending);
            return Err(err);
        }

        let depth = writer.depth();
        Ok(HtmlTag {
            writer,
            name: name.to_owned(),
            layout,
            depth,
            outer_indent,
            closed: false,
        })
    }

    /// The name of the open tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layout this tag was opened with.
    pub fn layout(&self) -> LayoutStyle {
        self.layout
    }

    /// Write the closing tag, reporting any error.
    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let result = self.write_closing();
        if self.layout.breaks_before() {
            self.writer.set_indent(self.outer_indent);
        }
        result
    }

    fn write_closing(&mut self) -> Result<()> {
        let found = self.writer.depth();
        let innermost = self.writer.open_tags().last();
        if found != self.depth || innermost != Some(&self.name) {
            return Err(HtmlError::MismatchedScope {
                tag: self.name.clone(),
                expected: self.depth,
                found,
            });
        }

        if self.layout.breaks_inside() {
            if let Err(err) = self.writer.write_line() {
                let pending = self.writer.pending_attribute_count();
                self.writer.rewind(self.depth - 1, pending);
                return Err(err);
            }
        }
        self.writer.render_end_tag()?;
        if self.layout.breaks_before() {
            self.writer.write_line()?;
        }
        Ok(())
    }
}

fn write_opening<W: Write>(
    writer: &mut HtmlWriter<W>,
    name: &str,
    layout: LayoutStyle,
    attributes: &[Attribute],
) -> Result<()> {
    if layout.breaks_before() {
        writer.set_indent(writer.indent() + 1);
        writer.write_line()?;
    }
    for attribute in attributes {
        writer.add_attribute(&attribute.name, &attribute.value)?;
    }
    writer.render_begin_tag(name)?;
    if layout.breaks_inside() {
        writer.write_line()?;
    }
    Ok(())
}

impl<W: Write> Deref for HtmlTag<'_, W> {
    type Target = HtmlWriter<W>;

    fn deref(&self) -> &Self::Target {
        &*self.writer
    }
}
impl<W: Write> DerefMut for HtmlTag<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.writer
    }
}

impl<W: Write> Drop for HtmlTag<'_, W> {
    fn drop(&mut self) {
        if let Err(err) = self.release() {
            log::warn!("failed to close <{}>: {err}", self.name);
        }
    }
}

impl<W: Write> HtmlWriter<W> {
    /// Open `name` with the given layout and attributes, returning its scope.
    pub fn render_tag_with_layout(
        &mut self,
        name: impl AsRef<str>,
        layout: LayoutStyle,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<HtmlTag<'_, W>> {
        HtmlTag::open(self, name, layout, attributes)
    }

    /// Open `name`, run `content` inside it, and close it again.
    ///
    /// The tag is closed even if `content` fails. The error from `content`
    /// takes precedence over an error from closing.
    pub fn with_tag<T>(
        &mut self,
        name: impl AsRef<str>,
        layout: LayoutStyle,
        attributes: impl IntoIterator<Item = Attribute>,
        content: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        let mut tag = HtmlTag::open(self, name, layout, attributes)?;
        let result = content(&mut *tag);
        let closed = tag.close();
        let value = result?;
        closed?;
        Ok(value)
    }
}
