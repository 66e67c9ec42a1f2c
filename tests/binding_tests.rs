#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

#[cfg(test)]
mod binding_tests {
    use folio::test_utils::*;

    fn bind_fixture() -> (ContentDocument, Vec<Node>) {
        let doc = ContentDocument::from_json(SITE_JSON).unwrap();
        let mut page = parse_template(TEMPLATE_HTML).unwrap();
        Binder::new(&doc).bind(&mut page);
        (doc, page)
    }

    #[test]
    fn test_section_classification() {
        assert_eq!(Section::classify("nav.links"), Section::NavLinks);
        assert_eq!(Section::classify("projects.items"), Section::ProjectCards);
        assert_eq!(Section::classify("contact.methods"), Section::ContactMethods);
        assert_eq!(
            Section::classify("about.skills.tech.items"),
            Section::SkillTags
        );
        assert_eq!(
            Section::classify("about.skills.tools.items"),
            Section::SkillTags
        );
        // `.items` alone is not a skills list
        assert_eq!(Section::classify("projects.items.extra"), Section::Text);
        assert_eq!(Section::classify("nav.logo"), Section::Text);
    }

    #[test]
    fn test_scalar_text_binding() {
        let (_, page) = bind_fixture();

        let logo = first_element(&page, &|el| el.has_class("nav-logo"), "nav logo");
        assert_eq!(logo.text_content(), "李算老几");
        let badge = first_element(&page, &|el| el.has_class("hero-badge"), "hero badge");
        assert_eq!(badge.text_content(), "开放合作机会");
    }

    #[test]
    fn test_document_title_set() {
        let (_, page) = bind_fixture();

        let title = first_element(&page, &|el| el.tag == "title", "title");
        assert_eq!(title.text_content(), "李算老几 - 个人主页");
    }

    #[test]
    fn test_nav_links_rendered_in_order() {
        let (_, page) = bind_fixture();

        let anchors = collect_elements(&page, &|el| el.has_class("nav-link"));
        assert_eq!(anchors.len(), 3);
        let hrefs: Vec<_> = anchors
            .iter()
            .map(|a| a.attr_value("href").unwrap())
            .collect();
        assert_eq!(hrefs, vec!["#about", "#projects", "#contact"]);
        assert_eq!(anchors.first().unwrap().text_content(), "关于");
    }

    #[test]
    fn test_single_nav_link_end_to_end() -> Result<()> {
        let doc = ContentDocument::from_json(
            r##"{ "nav": { "links": [ { "href": "#about", "text": "关于" } ] } }"##,
        )?;
        let mut page = parse_template(r#"<div class="nav-links" data-config="nav.links"></div>"#)?;
        Binder::new(&doc).bind(&mut page);

        let anchors = collect_elements(&page, &|el| el.has_class("nav-link"));
        assert_eq!(anchors.len(), 1);
        let anchor = anchors.first().unwrap();
        assert_eq!(anchor.attr_value("href"), Some("#about"));
        assert_eq!(anchor.text_content(), "关于");
        Ok(())
    }

    #[test]
    fn test_skill_tags_rendered() {
        let (_, page) = bind_fixture();

        let tags = collect_elements(&page, &|el| el.has_class("skill-tag"));
        // 5 tech + 4 tools
        assert_eq!(tags.len(), 9);
        assert_eq!(tags.first().unwrap().text_content(), "JavaScript");
        assert_eq!(tags.last().unwrap().text_content(), "Figma");
    }

    #[test]
    fn test_project_cards_preserve_order() {
        let (_, page) = bind_fixture();

        let titles: Vec<_> = collect_elements(&page, &|el| el.has_class("project-title"))
            .iter()
            .map(|el| el.text_content())
            .collect();
        assert_eq!(titles, vec!["项目 Alpha", "项目 Beta", "项目 Gamma"]);
    }

    #[test]
    fn test_project_placeholder_is_deterministic() {
        let (_, page) = bind_fixture();

        let gradients = collect_elements(&page, &|el| el.tag == "linearGradient");
        assert_eq!(gradients.len(), 3);
        let ids: Vec<_> = gradients
            .iter()
            .map(|el| el.attr_value("id").unwrap())
            .collect();
        // id is gradient{index}{(index % 3) + 1}
        assert_eq!(ids, vec!["gradient01", "gradient12", "gradient23"]);

        // index % 3 picks the shape glyph: triangle, circle, square
        let cards = collect_elements(&page, &|el| el.has_class("project-card"));
        let shape_tags: Vec<_> = cards
            .iter()
            .map(|card| {
                let svg = first_element(&card.children, &|el| el.tag == "svg", "svg");
                svg.children
                    .get(1)
                    .and_then(Node::as_element)
                    .map(|el| el.tag.clone())
                    .unwrap()
            })
            .collect();
        assert_eq!(shape_tags, vec!["path", "circle", "rect"]);

        // Same input, same artwork on every pass
        let (_, second) = bind_fixture();
        let second_ids: Vec<_> = collect_elements(&second, &|el| el.tag == "linearGradient")
            .iter()
            .map(|el| el.attr_value("id").unwrap().to_string())
            .collect();
        assert_eq!(ids, second_ids);
    }

    #[test]
    fn test_fourth_project_reuses_first_variant() -> Result<()> {
        let doc = ContentDocument::from_json(
            r##"{ "projects": { "items": [
                { "title": "a", "description": "", "tags": [], "link": { "text": "", "href": "#" } },
                { "title": "b", "description": "", "tags": [], "link": { "text": "", "href": "#" } },
                { "title": "c", "description": "", "tags": [], "link": { "text": "", "href": "#" } },
                { "title": "d", "description": "", "tags": [], "link": { "text": "", "href": "#" } }
            ] } }"##,
        )?;
        let mut page = parse_template(r#"<div data-config="projects.items"></div>"#)?;
        Binder::new(&doc).bind(&mut page);

        let gradients = collect_elements(&page, &|el| el.tag == "linearGradient");
        let ids: Vec<_> = gradients
            .iter()
            .map(|el| el.attr_value("id").unwrap())
            .collect();
        // index 3 wraps back to the first gradient/shape pair
        assert_eq!(ids, vec!["gradient01", "gradient12", "gradient23", "gradient31"]);
        Ok(())
    }

    #[test]
    fn test_contact_methods_rendered() {
        let (_, page) = bind_fixture();

        let methods = collect_elements(&page, &|el| el.has_class("contact-method"));
        assert_eq!(methods.len(), 2);

        let email = methods.first().unwrap();
        assert_eq!(email.attr_value("href"), Some("mailto:al90slj23@gmail.com"));
        assert_eq!(email.attr_value("target"), None);

        let github = methods.last().unwrap();
        assert_eq!(github.attr_value("target"), Some("_blank"));
        assert_eq!(github.attr_value("rel"), Some("noopener noreferrer"));
    }

    #[test]
    fn test_unknown_contact_type_renders_without_icon() -> Result<()> {
        let doc = ContentDocument::from_json(
            r##"{ "contact": { "methods": [
                { "type": "carrier-pigeon", "label": "鸽子", "value": "roof", "href": "#" }
            ] } }"##,
        )?;
        let mut page = parse_template(r#"<div data-config="contact.methods"></div>"#)?;
        Binder::new(&doc).bind(&mut page);

        let method = first_element(&page, &|el| el.has_class("contact-method"), "method");
        assert_eq!(method.attr_value("target"), None);

        let icon = first_element(&method.children, &|el| el.has_class("contact-icon"), "icon");
        assert!(icon.children.is_empty());
        let label = first_element(&method.children, &|el| el.has_class("contact-label"), "label");
        assert_eq!(label.text_content(), "鸽子");
        let value = first_element(&method.children, &|el| el.has_class("contact-value"), "value");
        assert_eq!(value.text_content(), "roof");
        Ok(())
    }

    #[test]
    fn test_unresolved_path_leaves_target_untouched() -> Result<()> {
        let doc = ContentDocument::from_json(r#"{ "nav": { "logo": "x" } }"#)?;
        let mut page =
            parse_template(r#"<span data-config="nav.missing">placeholder</span>"#)?;
        Binder::new(&doc).bind(&mut page);

        let el = page.first().and_then(Node::as_element).unwrap();
        assert_eq!(el.text_content(), "placeholder");
        Ok(())
    }

    #[test]
    fn test_wrong_shape_leaves_target_untouched() -> Result<()> {
        // nav.links resolves to a scalar; the link renderer needs a sequence
        let doc = ContentDocument::from_json(r#"{ "nav": { "links": "oops" } }"#)?;
        let mut page = parse_template(r#"<div data-config="nav.links">keep</div>"#)?;
        Binder::new(&doc).bind(&mut page);

        let el = page.first().and_then(Node::as_element).unwrap();
        assert_eq!(el.text_content(), "keep");
        Ok(())
    }

    #[test]
    fn test_nested_target_binds_when_parent_is_skipped() -> Result<()> {
        let doc = ContentDocument::from_json(r#"{ "site": { "author": "A" } }"#)?;
        let mut page = parse_template(
            r#"<div data-config="missing.section"><span data-config="site.author">old</span></div>"#,
        )?;
        Binder::new(&doc).bind(&mut page);

        // The unresolved parent keeps its children, but each nested target
        // still binds on its own
        let span = first_element(&page, &|el| el.tag == "span", "nested target");
        assert_eq!(span.text_content(), "A");
        Ok(())
    }

    #[test]
    fn test_binding_is_idempotent() {
        let doc = ContentDocument::from_json(SITE_JSON).unwrap();
        let mut once = parse_template(TEMPLATE_HTML).unwrap();
        Binder::new(&doc).bind(&mut once);

        let mut twice = once.clone();
        Binder::new(&doc).bind(&mut twice);

        assert_eq!(once, twice);
        assert_eq!(
            render_html(&once).unwrap(),
            render_html(&twice).unwrap()
        );
    }

    #[test]
    fn test_footer_copyright_uses_given_year() -> Result<()> {
        let doc = ContentDocument::from_json(
            r#"{ "site": { "author": "A", "copyright": "P" } }"#,
        )?;
        let mut page = parse_template(
            r#"<footer><div class="footer-content"><p>old</p></div></footer>"#,
        )?;
        update_footer(&mut page, &doc, 2025);

        let paragraph = first_element(&page, &|el| el.tag == "p", "footer paragraph");
        assert_eq!(paragraph.text_content(), "© 2025 A. P");
        Ok(())
    }

    #[test]
    fn test_footer_copyright_untouched_without_site_section() -> Result<()> {
        let doc = ContentDocument::from_json(r#"{ "nav": { "logo": "L" } }"#)?;
        let mut page = parse_template(
            r#"<footer><div class="footer-content"><p>hand-written line</p></div></footer>"#,
        )?;
        update_footer(&mut page, &doc, 2025);

        let paragraph = first_element(&page, &|el| el.tag == "p", "footer paragraph");
        assert_eq!(paragraph.text_content(), "hand-written line");
        Ok(())
    }

    #[test]
    fn test_footer_links_rebuilt_with_safe_opener() {
        let (doc, mut page) = bind_fixture();
        update_footer(&mut page, &doc, 2026);
        // Running it again must not duplicate anything
        update_footer(&mut page, &doc, 2026);

        let container = first_element(&page, &|el| el.has_class("footer-links"), "footer links");
        assert_eq!(container.children.len(), 3);
        for child in &container.children {
            let anchor = child.as_element().unwrap();
            assert_eq!(anchor.attr_value("target"), Some("_blank"));
            assert_eq!(anchor.attr_value("rel"), Some("noopener noreferrer"));
        }
        let first = container.children.first().and_then(Node::as_element).unwrap();
        assert_eq!(first.text_content(), "GitHub");
    }

    #[test]
    fn test_footer_absent_anchors_are_skipped() -> Result<()> {
        let doc = ContentDocument::from_json(SITE_JSON)?;
        let mut page = parse_template("<div>no footer here</div>")?;
        let before = page.clone();
        update_footer(&mut page, &doc, 2026);

        assert_eq!(page, before);
        Ok(())
    }

    #[test]
    fn test_render_page_end_to_end() -> Result<()> {
        use chrono::Datelike;

        let content_path = tmp_file_path("e2e_site.json");
        let template_path = tmp_file_path("e2e_index.html");
        write_file(&content_path.to_string_lossy(), SITE_JSON)?;
        write_file(&template_path.to_string_lossy(), TEMPLATE_HTML)?;

        let html = render_page(
            &content_path.to_string_lossy(),
            &template_path.to_string_lossy(),
        )?;

        assert!(html.contains("<title>李算老几 - 个人主页</title>"));
        assert!(html.contains("class=\"nav-link\""));
        assert!(html.contains("项目 Alpha"));
        let year = chrono::Local::now().year();
        assert!(html.contains(&format!("© {} 李算老几. 用心打造", year)));
        Ok(())
    }

    #[test]
    fn test_render_page_missing_content_is_fatal() {
        let template_path = tmp_file_path("orphan_index.html");
        write_file(&template_path.to_string_lossy(), TEMPLATE_HTML).unwrap();

        let error = render_page(
            "/nonexistent/site.json",
            &template_path.to_string_lossy(),
        )
        .expect_err("Missing content document accepted");
        assert!(matches!(
            error.kind(),
            RenderErrorKind::IO(IOError::FileNotFound(_))
        ));
    }
}
