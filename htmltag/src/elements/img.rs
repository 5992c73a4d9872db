use std::io::Write;

use crate::attribute::present;
use crate::{Attribute, HtmlWriter, KnownTag, Result};

/// Attributes for an `<img>` element, emitted as `id`, `class`, `src`, `alt`, `title`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImgAttrs<'a> {
    /// The image URL.
    pub src: Option<&'a str>,
    /// Replacement text.
    pub alt: Option<&'a str>,
    /// Advisory text.
    pub title: Option<&'a str>,
    /// The element id.
    pub id: Option<&'a str>,
    /// The CSS classes.
    pub class: Option<&'a str>,
}
impl<'a> ImgAttrs<'a> {
    /// Attributes for an image at `src`.
    pub fn new(src: &'a str) -> Self {
        ImgAttrs {
            src: Some(src),
            ..Default::default()
        }
    }

    /// The present attributes, in order.
    pub fn into_attributes(self) -> Vec<Attribute> {
        present([
            ("id", self.id),
            ("class", self.class),
            ("src", self.src),
            ("alt", self.alt),
            ("title", self.title),
        ])
    }
}

impl<W: Write> HtmlWriter<W> {
    /// Write an `<img/>` element.
    pub fn render_img(&mut self, attrs: ImgAttrs) -> Result<()> {
        self.render_img_attrs(attrs.into_attributes())
    }

    /// Write an `<img/>` element with arbitrary attributes.
    pub fn render_img_attrs(&mut self, attributes: impl IntoIterator<Item = Attribute>) -> Result<()> {
        self.render_self_closing_tag(KnownTag::Img, attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn img_orders_id_and_class_first() {
        let mut w = HtmlWriter::buffer();
        w.render_img(ImgAttrs {
            alt: Some("logo"),
            class: Some("brand"),
            ..ImgAttrs::new("/a.png")
        })
        .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            r#"<img class="brand" src="/a.png" alt="logo"/>"#
        );
    }

    #[test]
    fn img_inside_a_tag() {
        let mut w = HtmlWriter::buffer();
        {
            let mut a = w.render_a(crate::AnchorAttrs::new("/")).unwrap();
            a.render_img(ImgAttrs::new("/a.png")).unwrap();
        }
        assert_eq!(
            w.into_string().unwrap(),
            r#"<a href="/"><img src="/a.png"/></a>"#
        );
    }
}
