use std::io::Write;

use crate::elements::CoreAttrs;
use crate::{Attribute, HtmlTag, HtmlWriter, KnownTag, Result};

impl<W: Write> HtmlWriter<W> {
    /// Open a `<progress>` element.
    ///
    /// `value` and `max` are always emitted, after `id` and `class`.
    pub fn render_progress(
        &mut self,
        value: i32,
        max: i32,
        core: CoreAttrs,
    ) -> Result<HtmlTag<'_, W>> {
        let mut attributes = core.into_attributes();
        attributes.push(Attribute::new("value", value.to_string()));
        attributes.push(Attribute::new("max", max.to_string()));
        self.render_progress_attrs(attributes)
    }

    /// Open a `<progress>` element with arbitrary attributes.
    pub fn render_progress_attrs(
        &mut self,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<HtmlTag<'_, W>> {
        self.render_tag_attrs(KnownTag::Progress, attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_always_has_value_and_max() {
        let mut w = HtmlWriter::buffer();
        w.render_progress(3, 10, CoreAttrs::default())
            .unwrap()
            .close()
            .unwrap();
        w.render_progress(0, 0, CoreAttrs::default().with_class("bar"))
            .unwrap()
            .close()
            .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            concat!(
                r#"<progress value="3" max="10"></progress>"#,
                r#"<progress class="bar" value="0" max="0"></progress>"#
            )
        );
    }

    #[test]
    fn negative_values_are_plain_integers() {
        let mut w = HtmlWriter::buffer();
        w.render_progress(-1_000, 1_000_000, CoreAttrs::default())
            .unwrap()
            .close()
            .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            r#"<progress value="-1000" max="1000000"></progress>"#
        );
    }
}
