//! Fragment renderers.
//!
//! Each renderer is a pure function from a resolved content value to the
//! nodes that replace a binding target's children. Returning `None` means
//! the value does not have the shape the section needs (for example a
//! scalar where a sequence is required); the binder logs and skips the
//! target in that case. Missing string fields inside a record degrade to
//! empty strings rather than failing the whole pass.

use crate::content::Value;
use crate::markup::{Element, Node};

/// Gradient color pairs for project placeholders, selected by `index % 3`
const PLACEHOLDER_GRADIENTS: [(&str, &str); 3] = [
    ("#667eea", "#764ba2"),
    ("#f093fb", "#f5576c"),
    ("#4facfe", "#00f2fe"),
];

/// Contact method types that link out of the page and get safe-opener
/// attributes
const EXTERNAL_METHOD_TYPES: [&str; 1] = ["github"];

/// Renders `nav.links` as anchor elements
pub fn nav_links(value: &Value) -> Option<Vec<Node>> {
    let links = value.as_array()?;
    Some(
        links
            .iter()
            .map(|link| {
                Element::new("a")
                    .attr("href", field(link, "href"))
                    .attr("class", "nav-link")
                    .text(field(link, "text"))
                    .into()
            })
            .collect(),
    )
}

/// Renders a skills item list as tag chips
pub fn skill_tags(value: &Value) -> Option<Vec<Node>> {
    let items = value.as_array()?;
    Some(
        items
            .iter()
            .map(|item| {
                Element::new("span")
                    .attr("class", "skill-tag")
                    .text(item.render_text())
                    .into()
            })
            .collect(),
    )
}

/// Renders `projects.items` as project cards
pub fn project_cards(value: &Value) -> Option<Vec<Node>> {
    let projects = value.as_array()?;
    Some(
        projects
            .iter()
            .enumerate()
            .map(|(index, project)| project_card(index, project))
            .collect(),
    )
}

fn project_card(index: usize, project: &Value) -> Node {
    let tags: Vec<Node> = project
        .as_map()
        .and_then(|m| m.get("tags"))
        .and_then(Value::as_array)
        .unwrap_or(&[])
        .iter()
        .map(|tag| {
            Element::new("span")
                .attr("class", "project-tag")
                .text(tag.render_text())
                .into()
        })
        .collect();

    let (link_text, link_href) = match project.as_map().and_then(|m| m.get("link")) {
        Some(link) => (field(link, "text"), field(link, "href")),
        None => (String::new(), String::new()),
    };

    let mut tag_list = Element::new("div").attr("class", "project-tags");
    tag_list.children = tags;

    let content = Element::new("div")
        .attr("class", "project-content")
        .child(
            Element::new("h3")
                .attr("class", "project-title")
                .text(field(project, "title")),
        )
        .child(
            Element::new("p")
                .attr("class", "project-description")
                .text(field(project, "description")),
        )
        .child(tag_list)
        .child(
            Element::new("div").attr("class", "project-links").child(
                Element::new("a")
                    .attr("href", link_href)
                    .attr("class", "project-link")
                    .text(link_text),
            ),
        );

    Element::new("article")
        .attr("class", "project-card")
        .child(
            Element::new("div")
                .attr("class", "project-image")
                .child(
                    Element::new("div")
                        .attr("class", "project-placeholder")
                        .child(placeholder_svg(index)),
                ),
        )
        .child(content)
        .into()
}

/// Deterministic placeholder graphic: `index % 3` picks both the gradient
/// pair and the shape glyph, so re-rendering a project always produces the
/// same artwork
fn placeholder_svg(index: usize) -> Element {
    let variant = index % 3;
    let (start_color, end_color) = match variant {
        0 => PLACEHOLDER_GRADIENTS[0],
        1 => PLACEHOLDER_GRADIENTS[1],
        _ => PLACEHOLDER_GRADIENTS[2],
    };
    let gradient_id = format!("gradient{}{}", index, variant + 1);

    let shape = match variant {
        0 => Element::new("path")
            .attr("d", "M30 15L45 37.5H15L30 15Z")
            .attr("fill", "white")
            .attr("opacity", "0.3"),
        1 => Element::new("circle")
            .attr("cx", "30")
            .attr("cy", "30")
            .attr("r", "12")
            .attr("fill", "white")
            .attr("opacity", "0.3"),
        _ => Element::new("rect")
            .attr("x", "15")
            .attr("y", "15")
            .attr("width", "30")
            .attr("height", "30")
            .attr("rx", "4")
            .attr("fill", "white")
            .attr("opacity", "0.3"),
    };

    let gradient = Element::new("linearGradient")
        .attr("id", gradient_id.as_str())
        .attr("x1", "0")
        .attr("y1", "0")
        .attr("x2", "60")
        .attr("y2", "60")
        .child(Element::new("stop").attr("stop-color", start_color))
        .child(
            Element::new("stop")
                .attr("offset", "1")
                .attr("stop-color", end_color),
        );

    Element::new("svg")
        .attr("width", "60")
        .attr("height", "60")
        .attr("viewBox", "0 0 60 60")
        .attr("fill", "none")
        .attr("xmlns", "http://www.w3.org/2000/svg")
        .child(
            Element::new("rect")
                .attr("width", "60")
                .attr("height", "60")
                .attr("rx", "8")
                .attr("fill", format!("url(#{})", gradient_id)),
        )
        .child(shape)
        .child(Element::new("defs").child(gradient))
}

/// Renders `contact.methods` as icon/label/value anchors
pub fn contact_methods(value: &Value) -> Option<Vec<Node>> {
    let methods = value.as_array()?;
    Some(methods.iter().map(contact_method).collect())
}

fn contact_method(method: &Value) -> Node {
    let kind = field(method, "type");

    let mut anchor = Element::new("a")
        .attr("href", field(method, "href"))
        .attr("class", "contact-method");
    if EXTERNAL_METHOD_TYPES.contains(&kind.as_str()) {
        anchor = anchor
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer");
    }

    // Unknown types keep the (empty) icon container so layout stays intact
    let mut icon = Element::new("div").attr("class", "contact-icon");
    if let Some(svg) = method_icon(&kind) {
        icon = icon.child(svg);
    }

    anchor
        .child(icon)
        .child(
            Element::new("div")
                .attr("class", "contact-info")
                .child(
                    Element::new("span")
                        .attr("class", "contact-label")
                        .text(field(method, "label")),
                )
                .child(
                    Element::new("span")
                        .attr("class", "contact-value")
                        .text(field(method, "value")),
                ),
        )
        .into()
}

/// Fixed type→icon table; anything unrecognized renders without an icon
fn method_icon(kind: &str) -> Option<Element> {
    match kind {
        "email" => Some(
            Element::new("svg")
                .attr("width", "24")
                .attr("height", "24")
                .attr("viewBox", "0 0 24 24")
                .attr("fill", "none")
                .attr("stroke", "currentColor")
                .attr("stroke-width", "2")
                .child(Element::new("path").attr(
                    "d",
                    "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                ))
                .child(Element::new("polyline").attr("points", "22,6 12,13 2,6")),
        ),
        "github" => Some(
            Element::new("svg")
                .attr("width", "24")
                .attr("height", "24")
                .attr("viewBox", "0 0 24 24")
                .attr("fill", "currentColor")
                .child(Element::new("path").attr(
                    "d",
                    "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z",
                )),
        ),
        _ => None,
    }
}

/// String field of a record, empty when absent or not a string
fn field(record: &Value, name: &str) -> String {
    record
        .as_map()
        .and_then(|m| m.get(name))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
