#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

#[cfg(test)]
mod template_tests {
    use folio::test_utils::*;

    #[test]
    fn test_parse_simple_element() -> Result<()> {
        let page = parse_template(r#"<div class="box">hello</div>"#)?;

        assert_eq!(page.len(), 1);
        let el = page.first().and_then(Node::as_element).unwrap();
        assert_eq!(el.tag, "div");
        assert_eq!(el.attr_value("class"), Some("box"));
        assert_eq!(el.text_content(), "hello");
        Ok(())
    }

    #[test]
    fn test_parse_attribute_variants() -> Result<()> {
        let page = parse_template(r#"<input type='text' disabled value=abc>"#)?;

        let el = page.first().and_then(Node::as_element).unwrap();
        assert_eq!(el.attr_value("type"), Some("text"));
        assert_eq!(el.attr_value("disabled"), Some(""));
        assert_eq!(el.attr_value("value"), Some("abc"));
        // input is void: no children, no close tag required
        assert!(el.children.is_empty());
        Ok(())
    }

    #[test]
    fn test_parse_doctype_and_comment() -> Result<()> {
        let page = parse_template("<!DOCTYPE html><!-- note --><p>x</p>")?;

        assert!(matches!(page.first(), Some(Node::Doctype(d)) if d == "DOCTYPE html"));
        assert!(matches!(page.get(1), Some(Node::Comment(c)) if c == " note "));
        assert!(matches!(page.get(2), Some(Node::Element(_))));
        Ok(())
    }

    #[test]
    fn test_parse_nested_elements() -> Result<()> {
        let page = parse_template("<ul><li>a</li><li>b</li></ul>")?;

        let list = page.first().and_then(Node::as_element).unwrap();
        assert_eq!(list.children.len(), 2);
        let items = collect_elements(&page, &|el| el.tag == "li");
        assert_eq!(items.len(), 2);
        assert_eq!(items.first().unwrap().text_content(), "a");
        Ok(())
    }

    #[test]
    fn test_entities_decoded_in_text_and_attrs() -> Result<()> {
        let page = parse_template(r#"<a title="a &amp; b">x &lt; y&#33;</a>"#)?;

        let el = page.first().and_then(Node::as_element).unwrap();
        assert_eq!(el.attr_value("title"), Some("a & b"));
        assert_eq!(el.text_content(), "x < y!");
        Ok(())
    }

    #[test]
    fn test_script_body_is_raw() -> Result<()> {
        let page = parse_template("<script>if (a < b && c > d) run();</script>")?;

        let el = page.first().and_then(Node::as_element).unwrap();
        assert_eq!(el.text_content(), "if (a < b && c > d) run();");
        Ok(())
    }

    #[test]
    fn test_self_closing_element() -> Result<()> {
        let page = parse_template("<div><svg width=\"60\"/></div>")?;

        let svg = first_element(&page, &|el| el.tag == "svg", "svg");
        assert_eq!(svg.attr_value("width"), Some("60"));
        assert!(svg.children.is_empty());
        Ok(())
    }

    #[test]
    fn test_invalid_template_samples() {
        for (input, description) in INVALID_TEMPLATE_SAMPLES {
            let result = parse_template(input);
            assert!(result.is_err(), "Expected failure for: {}", description);
        }
    }

    #[test]
    fn test_mismatched_close_tag_reports_both_tags() {
        let error = parse_template("<div></span>").expect_err("Mismatch accepted");
        match error.kind() {
            RenderErrorKind::Syntax(SyntaxError::MismatchedCloseTag { expected, found }) => {
                assert_eq!(expected, "div");
                assert_eq!(found, "span");
            }
            other => panic!("Wrong error kind: {:?}", other),
        }
    }

    #[test]
    fn test_serialize_escapes_text_and_attrs() -> Result<()> {
        let page = vec![Node::Element(
            Element::new("a")
                .attr("title", "a<b\"c")
                .text("x & y"),
        )];

        let html = render_html(&page)?;
        assert_eq!(html, r#"<a title="a&lt;b&quot;c">x &amp; y</a>"#);
        Ok(())
    }

    #[test]
    fn test_serialize_void_and_raw_elements() -> Result<()> {
        let page = vec![
            Node::Element(Element::new("br")),
            Node::Element(Element::new("script").text("a < b")),
        ];

        let html = render_html(&page)?;
        assert_eq!(html, "<br><script>a < b</script>");
        Ok(())
    }

    #[test]
    fn test_empty_attribute_values_serialize_explicitly() -> Result<()> {
        let page = vec![Node::Element(Element::new("a").attr("href", ""))];
        assert_eq!(render_html(&page)?, r#"<a href=""></a>"#);

        // Boolean attributes come back as name="", which parses to the
        // same tree
        let parsed = parse_template("<input disabled>")?;
        let html = render_html(&parsed)?;
        assert_eq!(html, r#"<input disabled="">"#);
        let reparsed = parse_template(&html)?;
        let el = reparsed.first().and_then(Node::as_element).unwrap();
        assert_eq!(el.attr_value("disabled"), Some(""));
        Ok(())
    }

    #[test]
    fn test_parse_serialize_parse_is_stable() -> Result<()> {
        let page = parse_template(TEMPLATE_HTML)?;
        let html = render_html(&page)?;
        let reparsed = parse_template(&html)?;
        let html_again = render_html(&reparsed)?;

        assert_eq!(html, html_again);
        Ok(())
    }

    #[test]
    fn test_indented_output_rejects_oversized_indent() {
        let page = vec![Node::Element(Element::new("div"))];
        let config = FormatConfig {
            indent_spaces: 12,
            indent: true,
        };
        assert!(render_html_with(&page, &config).is_err());
    }

    #[test]
    fn test_full_template_fixture_parses() -> Result<()> {
        let page = parse_template(TEMPLATE_HTML)?;

        let title = first_element(&page, &|el| el.tag == "title", "title");
        assert_eq!(title.text_content(), "Portfolio");
        let targets = collect_elements(&page, &|el| el.attr_value(CONFIG_ATTR).is_some());
        assert_eq!(targets.len(), 25);
        Ok(())
    }
}
