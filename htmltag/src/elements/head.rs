use std::io::Write;

use crate::attribute::present;
use crate::{Attribute, HtmlWriter, KnownTag, Result};

/// Attributes for a `<link>` element, emitted as `rel`, `href`, `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkAttrs<'a> {
    /// The linked resource.
    pub href: Option<&'a str>,
    /// The relationship to the linked resource.
    pub rel: Option<&'a str>,
    /// The MIME type of the linked resource.
    pub r#type: Option<&'a str>,
}
impl<'a> LinkAttrs<'a> {
    /// A stylesheet link to `href`.
    pub fn stylesheet(href: &'a str) -> Self {
        LinkAttrs {
            href: Some(href),
            rel: Some("stylesheet"),
            r#type: Some("text/css"),
        }
    }

    /// The present attributes, in order.
    pub fn into_attributes(self) -> Vec<Attribute> {
        present([("rel", self.rel), ("href", self.href), ("type", self.r#type)])
    }
}

impl<W: Write> HtmlWriter<W> {
    /// Write a `<link/>` element.
    pub fn render_link(&mut self, attrs: LinkAttrs) -> Result<()> {
        self.render_link_attrs(attrs.into_attributes())
    }

    /// Write a `<link/>` element with arbitrary attributes.
    pub fn render_link_attrs(
        &mut self,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<()> {
        self.render_self_closing_tag(KnownTag::Link, attributes)
    }

    /// Write a `<meta/>` element with `name` and `content`, skipping empty values.
    pub fn render_meta(&mut self, name: &str, content: &str) -> Result<()> {
        self.render_meta_attrs(present([("name", Some(name)), ("content", Some(content))]))
    }

    /// Write a `<meta/>` element with arbitrary attributes.
    pub fn render_meta_attrs(
        &mut self,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<()> {
        self.render_self_closing_tag(KnownTag::Meta, attributes)
    }
}
