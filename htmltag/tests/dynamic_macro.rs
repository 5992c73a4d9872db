use htmltag::{dynamic, HtmlError, HtmlWriter, Value};

#[test]
fn anchor_call_opens_a_scope() {
    let mut w = HtmlWriter::buffer();
    {
        let anchor = dynamic!(w, anchor(href = "/x", data_ga = "y")).unwrap();
        let mut anchor = anchor.expect("anchor is not self-closing");
        anchor.write_str("x").unwrap();
    }
    assert_eq!(
        w.into_string().unwrap(),
        r#"<anchor href="/x" data-ga="y">x</anchor>"#
    );
}

#[test]
fn img_call_is_self_closing() {
    let mut w = HtmlWriter::buffer();
    assert!(dynamic!(w, img(src = "/a.png")).unwrap().is_none());
    assert_eq!(w.into_string().unwrap(), r#"<img src="/a.png"/>"#);
}

#[test]
fn method_names_are_lowercased_and_raw_identifiers_unwrapped() {
    let mut w = HtmlWriter::buffer();
    dynamic!(w, Input(r#type = "text", aria_label = "Name",)).unwrap();
    assert_eq!(
        w.into_string().unwrap(),
        r#"<input type="text" aria-label="Name"/>"#
    );
}

#[test]
fn values_of_every_kind() {
    let missing: Option<&str> = None;
    let mut w = HtmlWriter::buffer();
    dynamic!(
        w,
        meter(value = 0.25, min = 0, max = 1_i64, optimum = missing, low = 'l', high = true)
    )
    .unwrap();
    assert_eq!(
        w.into_string().unwrap(),
        r#"<meter value="0.25" min="0" max="1" optimum="" low="l" high="true"></meter>"#
    );
}

#[test]
fn calls_without_attributes() {
    let mut w = HtmlWriter::buffer();
    if let Some(mut p) = dynamic!(w, p()).unwrap() {
        dynamic!(p, br()).unwrap();
    }
    assert_eq!(w.into_string().unwrap(), "<p><br/></p>");
}

#[test]
fn write_passes_through() {
    let count = 3;
    let mut w = HtmlWriter::buffer();
    if let Some(mut span) = dynamic!(w, span(class = "count")).unwrap() {
        dynamic!(span, write("{0} of {1}", count, 10)).unwrap();
        dynamic!(span, Write(';')).unwrap();
        dynamic!(span, write(Value::Null)).unwrap();
    }
    assert_eq!(
        w.into_string().unwrap(),
        r#"<span class="count">3 of 10;</span>"#
    );
}

#[test]
fn write_with_unsupported_shape_fails() {
    let mut w = HtmlWriter::buffer();
    let result = dynamic!(w, write(1, 2));
    assert!(matches!(
        result,
        Err(HtmlError::UnsupportedOverload { signature }) if signature == "write(i32, i32)"
    ));
}
