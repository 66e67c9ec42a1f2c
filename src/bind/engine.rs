//! The binding engine.
//!
//! Walks the template tree, resolves every `data-config` target against the
//! injected [`ContentDocument`], and replaces each target's children with
//! the rendered fragment. Unresolved paths are logged and left untouched;
//! one bad target never aborts the pass. Because children are replaced
//! rather than appended, binding the same tree twice produces the same
//! output as binding it once.

use tracing::{debug, warn};

use super::render;
use crate::content::{ContentDocument, Resolved, Value};
use crate::markup::{find_element_mut, Node};

/// Attribute that marks an element as a binding target; its value is the
/// dot path into the content document
pub const CONFIG_ATTR: &str = "data-config";

/// Content sections a path can dispatch to, each with its own renderer.
/// Classification happens once per target, so the walk itself carries no
/// stringly-typed branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    NavLinks,
    SkillTags,
    ProjectCards,
    ContactMethods,
    Text,
}

impl Section {
    pub fn classify(path: &str) -> Self {
        match path {
            "nav.links" => Self::NavLinks,
            "projects.items" => Self::ProjectCards,
            "contact.methods" => Self::ContactMethods,
            p if p.contains("skills") && p.ends_with(".items") => Self::SkillTags,
            _ => Self::Text,
        }
    }

    /// Builds the replacement fragment for a resolved value, or `None` when
    /// the value's shape does not fit the section
    fn fragment(self, value: &Value) -> Option<Vec<Node>> {
        match self {
            Self::NavLinks => render::nav_links(value),
            Self::SkillTags => render::skill_tags(value),
            Self::ProjectCards => render::project_cards(value),
            Self::ContactMethods => render::contact_methods(value),
            Self::Text => Some(vec![Node::Text(value.render_text())]),
        }
    }
}

/// Binds one content document into template trees
pub struct Binder<'a> {
    doc: &'a ContentDocument,
}

impl<'a> Binder<'a> {
    pub fn new(doc: &'a ContentDocument) -> Self {
        Self { doc }
    }

    /// Runs the full binding pass over a page: document title, then every
    /// `data-config` target
    pub fn bind(&self, page: &mut [Node]) {
        if let Some(title) = self.doc.get_str("site.title") {
            let title = title.to_string();
            if let Some(el) = find_element_mut(page, &|el| el.tag.eq_ignore_ascii_case("title")) {
                el.set_text(title);
            }
        }

        for node in page.iter_mut() {
            self.bind_node(node);
        }
    }

    fn bind_node(&self, node: &mut Node) {
        let Node::Element(el) = node else {
            return;
        };

        let Some(path) = el.attr_value(CONFIG_ATTR).map(str::to_string) else {
            for child in &mut el.children {
                self.bind_node(child);
            }
            return;
        };

        match self.doc.resolve(&path) {
            Resolved::Undefined => {
                warn!("Content path not found: {}", path);
            }
            Resolved::Found(value) => {
                let section = Section::classify(&path);
                match section.fragment(value) {
                    Some(children) => {
                        debug!("Bound {} as {:?}", path, section);
                        el.children = children;
                        // Rendered fragments carry no data-config
                        // attributes, so there is nothing to descend into
                        return;
                    }
                    None => {
                        warn!("Content at {} has the wrong shape for {:?}", path, section);
                    }
                }
            }
        }

        // A skipped target keeps its template children; any targets nested
        // inside them still bind on their own
        for child in &mut el.children {
            self.bind_node(child);
        }
    }
}
