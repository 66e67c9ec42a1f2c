//! HTML serialization.
//!
//! Turns a bound node tree back into page text. Compact output (the
//! default) adds no whitespace of its own, so serializing the same tree
//! twice is byte-identical; indented output is for eyeballing.

use super::node::Node;
use crate::error::{RenderError, RenderErrorKind, Result, SyntaxError};

/// Configuration options for serialization
#[derive(Debug, Clone)]
pub struct FormatConfig {
    /// Number of spaces for indentation (indented mode only)
    pub indent_spaces: usize,
    /// Whether to emit indented output
    pub indent: bool,
}

/// Default configuration: compact output
impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            indent: false,
        }
    }
}

/// Trait for serializing a node tree as a string
pub trait Formatter {
    fn format(&self, nodes: &[Node], config: &FormatConfig) -> Result<String>;
}

pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
    fn format(&self, nodes: &[Node], config: &FormatConfig) -> Result<String> {
        Self::validate_config(config)?;
        let mut out = String::new();
        for node in nodes {
            Self::format_node(node, 0, config, &mut out);
            if config.indent {
                out.push('\n');
            }
        }
        Ok(out)
    }
}

impl HtmlFormatter {
    fn validate_config(config: &FormatConfig) -> Result<()> {
        if config.indent_spaces > 8 {
            return Err(RenderError::new(RenderErrorKind::Syntax(
                SyntaxError::InvalidValue(format!(
                    "Indentation of {} spaces exceeds maximum allowed (8)",
                    config.indent_spaces
                )),
            )));
        }
        Ok(())
    }

    fn format_node(node: &Node, depth: usize, config: &FormatConfig, out: &mut String) {
        match node {
            Node::Doctype(d) => {
                out.push_str("<!");
                out.push_str(d);
                out.push('>');
            }
            Node::Comment(c) => {
                out.push_str("<!--");
                out.push_str(c);
                out.push_str("-->");
            }
            Node::Text(t) => out.push_str(&escape_text(t)),
            Node::Element(el) => {
                out.push('<');
                out.push_str(&el.tag);
                // Empty values still serialize as name="", so href="" is
                // not conflated with a boolean attribute
                for (name, value) in &el.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                out.push('>');

                if el.is_void() {
                    return;
                }

                if el.is_raw_text() {
                    // Raw-text bodies are emitted verbatim
                    for child in &el.children {
                        if let Node::Text(t) = child {
                            out.push_str(t);
                        }
                    }
                } else if config.indent && has_element_child(el) {
                    let indent = " ".repeat((depth + 1) * config.indent_spaces);
                    for child in &el.children {
                        if is_blank_text(child) {
                            continue;
                        }
                        out.push('\n');
                        out.push_str(&indent);
                        Self::format_node(child, depth + 1, config, out);
                    }
                    out.push('\n');
                    out.push_str(&" ".repeat(depth * config.indent_spaces));
                } else {
                    for child in &el.children {
                        Self::format_node(child, depth + 1, config, out);
                    }
                }

                out.push_str("</");
                out.push_str(&el.tag);
                out.push('>');
            }
        }
    }
}

fn has_element_child(el: &super::node::Element) -> bool {
    el.children.iter().any(|c| matches!(c, Node::Element(_)))
}

fn is_blank_text(node: &Node) -> bool {
    matches!(node, Node::Text(t) if t.trim().is_empty())
}

/// Escapes text content
pub fn escape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escapes attribute values (double-quoted context)
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
