use std::io::Write;

use crate::elements::CoreAttrs;
use crate::{Attribute, HtmlTag, HtmlWriter, KnownTag, Result};

impl<W: Write> HtmlWriter<W> {
    /// Open a `<dialog>` element.
    ///
    /// Attributes are emitted as `id`, `class`, then `open="open"` when `open` is set.
    pub fn render_dialog(&mut self, open: bool, core: CoreAttrs) -> Result<HtmlTag<'_, W>> {
        let mut attributes = core.into_attributes();
        if open {
            attributes.push(Attribute::new("open", "open"));
        }
        self.render_dialog_attrs(attributes)
    }

    /// Open a `<dialog>` element with arbitrary attributes.
    pub fn render_dialog_attrs(
        &mut self,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<HtmlTag<'_, W>> {
        self.render_tag_attrs(KnownTag::Dialog, attributes)
    }
}
