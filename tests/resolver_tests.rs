#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

#[cfg(test)]
mod resolver_tests {
    use folio::test_utils::*;

    fn sample() -> ContentDocument {
        ContentDocument::from_json(
            r##"{
                "nav": {
                    "logo": "folio",
                    "links": [ { "href": "#about", "text": "About" } ]
                },
                "about": {
                    "skills": {
                        "tech": { "items": ["Rust"] }
                    }
                }
            }"##,
        )
        .unwrap()
    }

    #[test]
    fn test_resolves_nested_scalar() {
        let doc = sample();
        assert_eq!(
            doc.resolve("nav.logo"),
            Resolved::Found(&Value::String("folio".to_string()))
        );
        assert_eq!(doc.get_str("nav.logo"), Some("folio"));
    }

    #[test]
    fn test_resolves_deep_path() {
        let doc = sample();
        let value = doc.resolve("about.skills.tech.items").value().unwrap();
        assert_eq!(value.as_array().map(<[Value]>::len), Some(1));
    }

    #[test]
    fn test_resolves_intermediate_map() {
        let doc = sample();
        // A path naming a section rather than a leaf still resolves
        assert!(!doc.resolve("about.skills").is_undefined());
    }

    #[test]
    fn test_missing_segment_is_undefined() {
        let doc = sample();
        assert!(doc.resolve("nav.missing").is_undefined());
        assert!(doc.resolve("missing.logo").is_undefined());
        assert!(doc.resolve("about.skills.design.items").is_undefined());
    }

    #[test]
    fn test_traversal_through_non_map_is_undefined() {
        let doc = sample();
        // nav.logo is a string; descending further must short-circuit
        assert!(doc.resolve("nav.logo.deeper").is_undefined());
        // arrays are not traversable by key segment
        assert!(doc.resolve("nav.links.0").is_undefined());
        assert!(doc.resolve("nav.links.href").is_undefined());
    }

    #[test]
    fn test_degenerate_paths_are_undefined() {
        let doc = sample();
        assert!(doc.resolve("").is_undefined());
        assert!(doc.resolve(".").is_undefined());
        assert!(doc.resolve("nav..logo").is_undefined());
        assert!(doc.resolve(".nav").is_undefined());
        assert!(doc.resolve("nav.").is_undefined());
    }

    #[test]
    fn test_resolve_on_bare_value() {
        // The free function works on any value, not just documents
        let value = Value::String("leaf".to_string());
        assert!(resolve(&value, "anything").is_undefined());
    }

    #[test]
    fn test_every_template_path_resolves_in_fixture() {
        let doc = ContentDocument::from_json(SITE_JSON).unwrap();
        let page = parse_template(TEMPLATE_HTML).unwrap();

        let targets = collect_elements(&page, &|el| el.attr_value(CONFIG_ATTR).is_some());
        assert!(!targets.is_empty());
        for el in targets {
            let path = el.attr_value(CONFIG_ATTR).unwrap();
            assert!(
                !doc.resolve(path).is_undefined(),
                "Fixture path does not resolve: {}",
                path
            );
        }
    }
}
