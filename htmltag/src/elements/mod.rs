//! Typed helpers for common elements.
//!
//! Every element comes in two forms: one that takes the element's usual
//! attributes as optional values, and an `_attrs` form that takes an arbitrary
//! attribute list. Optional values that are absent or empty are left out
//! entirely, and the attributes are always emitted in a fixed order per element.
//!
//! All helpers are methods on [`HtmlWriter`], so they are also available on an
//! open [`HtmlTag`] when writing nested content.

use std::io::Write;

use crate::attribute::present;
use crate::{Attribute, HtmlTag, HtmlWriter, LayoutStyle, Result};

mod anchor;
pub use anchor::AnchorAttrs;

mod dialog;

mod head;
pub use head::LinkAttrs;

mod img;
pub use img::ImgAttrs;

mod label;

mod menu;
pub use menu::MenuItemAttrs;

mod progress;

mod time;
pub use time::format_utc;

/// The `id` and `class` attributes shared by most helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoreAttrs<'a> {
    /// The value of the `id` attribute.
    pub id: Option<&'a str>,
    /// The value of the `class` attribute.
    pub class: Option<&'a str>,
}
impl<'a> CoreAttrs<'a> {
    /// Set the `id` attribute.
    pub fn with_id(mut self, id: &'a str) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the `class` attribute.
    pub fn with_class(mut self, class: &'a str) -> Self {
        self.class = Some(class);
        self
    }

    /// The present attributes, `id` before `class`.
    pub fn into_attributes(self) -> Vec<Attribute> {
        present([("id", self.id), ("class", self.class)])
    }
}

impl<W: Write> HtmlWriter<W> {
    /// Open an inline tag with `id` and `class` attributes.
    pub fn render_tag(&mut self, name: impl AsRef<str>, core: CoreAttrs) -> Result<HtmlTag<'_, W>> {
        self.render_tag_attrs(name, core.into_attributes())
    }

    /// Open an inline tag with arbitrary attributes.
    pub fn render_tag_attrs(
        &mut self,
        name: impl AsRef<str>,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<HtmlTag<'_, W>> {
        HtmlTag::open(self, name, LayoutStyle::Inline, attributes)
    }

    /// Write a self-closing tag with `id` and `class` attributes.
    pub fn render_self_closing(&mut self, name: impl AsRef<str>, core: CoreAttrs) -> Result<()> {
        self.render_self_closing_tag(name, core.into_attributes())
    }
}

macro_rules! core_renderers {
    ($($method:ident, $attrs_method:ident => $tag:literal;)*) => {
        impl<W: Write> HtmlWriter<W> {
            $(
                #[doc = concat!("Open a `<", $tag, ">` element with `id` and `class` attributes.")]
                pub fn $method(&mut self, core: CoreAttrs) -> Result<HtmlTag<'_, W>> {
                    self.$attrs_method(core.into_attributes())
                }

                #[doc = concat!("Open a `<", $tag, ">` element with arbitrary attributes.")]
                pub fn $attrs_method(
                    &mut self,
                    attributes: impl IntoIterator<Item = Attribute>,
                ) -> Result<HtmlTag<'_, W>> {
                    self.render_tag_attrs($tag, attributes)
                }
            )*
        }
        /// The elements that have an `id`/`class` helper.
        pub const CORE_RENDERED_TAGS: &[&str] = &[$($tag),*];
    };
}
core_renderers! {
    render_details, render_details_attrs => "details";
    render_div, render_div_attrs => "div";
    render_em, render_em_attrs => "em";
    render_h1, render_h1_attrs => "h1";
    render_h2, render_h2_attrs => "h2";
    render_h3, render_h3_attrs => "h3";
    render_h4, render_h4_attrs => "h4";
    render_h5, render_h5_attrs => "h5";
    render_h6, render_h6_attrs => "h6";
    render_li, render_li_attrs => "li";
    render_menu, render_menu_attrs => "menu";
    render_nav, render_nav_attrs => "nav";
    render_ol, render_ol_attrs => "ol";
    render_p, render_p_attrs => "p";
    render_section, render_section_attrs => "section";
    render_span, render_span_attrs => "span";
    render_strong, render_strong_attrs => "strong";
    render_ul, render_ul_attrs => "ul";
}
