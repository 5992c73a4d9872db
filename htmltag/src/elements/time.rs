use std::io::Write;

use chrono::{DateTime, TimeZone, Utc};

use crate::elements::CoreAttrs;
use crate::{Attribute, HtmlTag, HtmlWriter, KnownTag, Result};

/// Format `date_time` in UTC as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_utc<Tz: TimeZone>(date_time: &DateTime<Tz>) -> String {
    date_time
        .with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%SZ")
        .to_string()
}

impl<W: Write> HtmlWriter<W> {
    /// Open a `<time>` element with a pre-formatted `datetime` value.
    ///
    /// The value is passed through unchanged. Attributes are emitted as `id`,
    /// `class`, `datetime`.
    pub fn render_time(
        &mut self,
        datetime: Option<&str>,
        core: CoreAttrs,
    ) -> Result<HtmlTag<'_, W>> {
        let mut attributes = core.into_attributes();
        attributes.extend(Attribute::optional("datetime", datetime));
        self.render_time_attrs(attributes)
    }

    /// Open a `<time>` element for `date_time`, normalized to UTC.
    pub fn render_time_at<Tz: TimeZone>(
        &mut self,
        date_time: &DateTime<Tz>,
        core: CoreAttrs,
    ) -> Result<HtmlTag<'_, W>> {
        self.render_time(Some(&format_utc(date_time)), core)
    }

    /// Open a `<time>` element with arbitrary attributes.
    pub fn render_time_attrs(
        &mut self,
        attributes: impl IntoIterator<Item = Attribute>,
    ) -> Result<HtmlTag<'_, W>> {
        self.render_tag_attrs(KnownTag::Time, attributes)
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    #[test]
    fn utc_timestamp_renders_with_zulu_suffix() {
        let date_time = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_utc(&date_time), "2020-01-02T03:04:05Z");
    }

    #[test]
    fn offset_timestamp_is_normalized_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let date_time = offset.with_ymd_and_hms(2020, 1, 1, 1, 30, 0).unwrap();
        assert_eq!(format_utc(&date_time), "2019-12-31T23:30:00Z");
    }

    #[test]
    fn time_from_structured_value() {
        let mut w = HtmlWriter::buffer();
        let date_time = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        {
            let mut time = w
                .render_time_at(&date_time, CoreAttrs::default().with_id("posted"))
                .unwrap();
            time.write_str("January 2nd").unwrap();
        }
        assert_eq!(
            w.into_string().unwrap(),
            r#"<time id="posted" datetime="2020-01-02T03:04:05Z">January 2nd</time>"#
        );
    }

    #[test]
    fn time_string_passes_through() {
        let mut w = HtmlWriter::buffer();
        w.render_time(Some("2020-01-02"), CoreAttrs::default())
            .unwrap()
            .close()
            .unwrap();
        w.render_time(None, CoreAttrs::default())
            .unwrap()
            .close()
            .unwrap();
        assert_eq!(
            w.into_string().unwrap(),
            r#"<time datetime="2020-01-02"></time><time></time>"#
        );
    }
}
