use std::io::Write;

use crate::attribute::present;
use crate::{Attribute, HtmlTag, HtmlWriter, KnownTag, Result};

/// Attributes for a `<menuitem>` element, emitted as `id`, `class`, `label`, `icon`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuItemAttrs<'a> {
    /// The text shown for the command.
    pub label: Option<&'a str>,
    /// The URL of an icon for the command.
    pub icon: Option<&'a str>,
    /// The element id.
    pub id: Option<&'a str>,
    /// The CSS classes.
    pub class: Option<&'a str>,
}
impl MenuItemAttrs<'_> {
    /// The present attributes, in order.
    pub fn into_attributes(self) -> Vec<Attribute> {
        present([
            ("id", self.id),
            ("class", self.class),
            ("label", self.label),
            ("icon", self.icon),
        ])
    }
}

impl<W: Write> HtmlWriter<W> {
    /// Open a `<menuitem>` element.
    pub fn render_menu_item(&mut self, attrs: MenuItemAttrs) -> Result<HtmlTag<'_, W>> {
        self.render_menu_item_attrs(attrs.into_attributes())
    }

    /// Open a `<menuitem>` element with arbitrary attributes.
    pub fn render_menu_item_attrs(
        &mut self,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<HtmlTag<'_, W>> {
        self.render_tag_attrs(KnownTag::MenuItem, attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreAttrs;

    #[test]
    fn menu_with_items() {
        let mut w = HtmlWriter::buffer();
        {
            let mut menu = w.render_menu(CoreAttrs::default().with_id("ctx")).unwrap();
            menu.render_menu_item(MenuItemAttrs {
                label: Some("Copy"),
                icon: Some("/copy.png"),
                class: Some("cmd"),
                ..Default::default()
            })
            .unwrap()
            .close()
            .unwrap();
            menu.render_menu_item(MenuItemAttrs::default())
                .unwrap()
                .close()
                .unwrap();
        }
        assert_eq!(
            w.into_string().unwrap(),
            concat!(
                r#"<menu id="ctx">"#,
                r#"<menuitem class="cmd" label="Copy" icon="/copy.png"></menuitem>"#,
                "<menuitem></menuitem>",
                "</menu>"
            )
        );
    }
}
