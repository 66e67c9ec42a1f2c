//! Markup node tree.
//!
//! The parsed template and every rendered fragment share this one node type.
//! Text is stored unescaped; escaping happens at serialization time only, so
//! renderers can hand content through without worrying about entities.

use std::fmt;

/// Elements that never carry children and are serialized without a close tag
const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Elements whose text content is taken verbatim, entities and all
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// One node of a markup tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// `<!DOCTYPE ...>` declaration, stored without the angle brackets
    Doctype(String),
    /// `<!-- ... -->` comment
    Comment(String),
    /// Text content, unescaped
    Text(String),
    /// An element with attributes and children
    Element(Element),
}

/// An element with its tag, ordered attributes, and ordered children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute append
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Builder-style child append
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Builder-style text child append
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Looks up an attribute value by name
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the `class` attribute contains the given class name
    pub fn has_class(&self, class: &str) -> bool {
        self.attr_value("class")
            .is_some_and(|v| v.split_whitespace().any(|c| c == class))
    }

    /// Replaces all children with a single text node
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.children = vec![Node::Text(text.into())];
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    pub fn is_void(&self) -> bool {
        is_void_tag(&self.tag)
    }

    pub fn is_raw_text(&self) -> bool {
        is_raw_text_tag(&self.tag)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Self::Element(el)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doctype(d) => write!(f, "<!{}>", d),
            Self::Comment(c) => write!(f, "<!--{}-->", c),
            Self::Text(t) => write!(f, "{}", t),
            Self::Element(el) => write!(f, "<{}>", el.tag),
        }
    }
}

pub fn is_void_tag(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| tag.eq_ignore_ascii_case(v))
}

pub fn is_raw_text_tag(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.iter().any(|v| tag.eq_ignore_ascii_case(v))
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(t) => out.push_str(t),
            Node::Element(el) => collect_text(&el.children, out),
            _ => {}
        }
    }
}

/// Depth-first search for the first element matching the predicate
pub fn find_element_mut<'a, F>(nodes: &'a mut [Node], pred: &F) -> Option<&'a mut Element>
where
    F: Fn(&Element) -> bool,
{
    for node in nodes.iter_mut() {
        if let Node::Element(el) = node {
            if pred(el) {
                return Some(el);
            }
            if let Some(found) = find_element_mut(&mut el.children, pred) {
                return Some(found);
            }
        }
    }
    None
}

/// Immutable counterpart of [`find_element_mut`]
pub fn find_element<'a, F>(nodes: &'a [Node], pred: &F) -> Option<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    for node in nodes {
        if let Node::Element(el) = node {
            if pred(el) {
                return Some(el);
            }
            if let Some(found) = find_element(&el.children, pred) {
                return Some(found);
            }
        }
    }
    None
}
