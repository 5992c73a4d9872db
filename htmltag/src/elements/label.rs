use std::io::Write;

use crate::elements::CoreAttrs;
use crate::{Attribute, HtmlTag, HtmlWriter, KnownTag, Result};

impl<W: Write> HtmlWriter<W> {
    /// Open a `<label>` for the control with id `for_element`.
    ///
    /// Attributes are emitted as `id`, `class`, `for`.
    pub fn render_label(&mut self, for_element: &str, core: CoreAttrs) -> Result<HtmlTag<'_, W>> {
        let mut attributes = core.into_attributes();
        attributes.extend(Attribute::optional("for", Some(for_element)));
        self.render_label_attrs(attributes)
    }

    /// Open a `<label>` with arbitrary attributes.
    pub fn render_label_attrs(
        &mut self,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<HtmlTag<'_, W>> {
        self.render_tag_attrs(KnownTag::Label, attributes)
    }
}
