//! Footer updater.
//!
//! Runs once after the main binding pass. Rewrites the copyright line from
//! the document's author/copyright fields and the given year, and rebuilds
//! the footer link list with safe-opener attributes. Pages without the
//! footer anchors are left alone; both updates are idempotent.

use crate::content::{ContentDocument, Resolved, Value};
use crate::markup::{find_element_mut, Element, Node};

pub fn update_footer(page: &mut [Node], doc: &ContentDocument, year: i32) {
    update_copyright(page, doc, year);
    update_links(page, doc);
}

fn update_copyright(page: &mut [Node], doc: &ContentDocument, year: i32) {
    let author = doc.get_str("site.author");
    let phrase = doc.get_str("site.copyright");
    // Documents without a site section keep whatever the template shipped.
    if author.is_none() && phrase.is_none() {
        return;
    }
    let author = author.unwrap_or_default().to_string();
    let phrase = phrase.unwrap_or_default().to_string();

    let Some(container) = find_element_mut(page, &|el| el.has_class("footer-content")) else {
        return;
    };
    let Some(paragraph) =
        find_element_mut(&mut container.children, &|el| el.tag.eq_ignore_ascii_case("p"))
    else {
        return;
    };

    paragraph.set_text(format!("© {} {}. {}", year, author, phrase));
}

fn update_links(page: &mut [Node], doc: &ContentDocument) {
    let links = match doc.resolve("footer.links") {
        Resolved::Found(Value::Array(links)) => links,
        _ => return,
    };

    let Some(container) = find_element_mut(page, &|el| el.has_class("footer-links")) else {
        return;
    };

    container.children = links
        .iter()
        .map(|link| {
            let href = link
                .as_map()
                .and_then(|m| m.get("href"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            let text = link
                .as_map()
                .and_then(|m| m.get("text"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            Element::new("a")
                .attr("href", href)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .text(text)
                .into()
        })
        .collect();
}
