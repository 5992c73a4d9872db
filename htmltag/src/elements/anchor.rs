use std::io::Write;

use crate::attribute::present;
use crate::{Attribute, HtmlTag, HtmlWriter, KnownTag, Result};

/// Attributes for an `<a>` element.
///
/// Emitted in the order `href`, `target`, `title`, `id`, `class`, `data-ga`,
/// `data-gaeventcategory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnchorAttrs<'a> {
    /// The link target URL.
    pub href: Option<&'a str>,
    /// The browsing context to open the link in.
    pub target: Option<&'a str>,
    /// Advisory text for the link.
    pub title: Option<&'a str>,
    /// The element id.
    pub id: Option<&'a str>,
    /// The CSS classes.
    pub class: Option<&'a str>,
    /// The value of `data-ga`.
    pub data_ga: Option<&'a str>,
    /// The value of `data-gaeventcategory`.
    pub data_ga_event_category: Option<&'a str>,
}
impl<'a> AnchorAttrs<'a> {
    /// Attributes for a link to `href`.
    pub fn new(href: &'a str) -> Self {
        AnchorAttrs {
            href: Some(href),
            ..Default::default()
        }
    }

    /// The present attributes, in order.
    pub fn into_attributes(self) -> Vec<Attribute> {
        present([
            ("href", self.href),
            ("target", self.target),
            ("title", self.title),
            ("id", self.id),
            ("class", self.class),
            ("data-ga", self.data_ga),
            ("data-gaeventcategory", self.data_ga_event_category),
        ])
    }
}

impl<W: Write> HtmlWriter<W> {
    /// Open an `<a>` element.
    pub fn render_a(&mut self, attrs: AnchorAttrs) -> Result<HtmlTag<'_, W>> {
        self.render_a_attrs(attrs.into_attributes())
    }

    /// Open an `<a>` element with arbitrary attributes.
    pub fn render_a_attrs(
        &mut self,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<HtmlTag<'_, W>> {
        self.render_tag_attrs(KnownTag::A, attributes)
    }
}
