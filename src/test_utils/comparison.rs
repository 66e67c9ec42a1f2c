use crate::markup::{Element, Node};
use crate::Value;

pub fn compare_values(left: &Value, right: &Value) -> bool {
    crate::content::value::values_equal(left, right)
}

/// Asserts that two values are equal
///
/// # Panics
///
/// Panics if the values are not equal
pub fn assert_values_equal(left: &Value, right: &Value, message: &str) {
    assert!(
        compare_values(left, right),
        "{}\nLeft: {:?}\nRight: {:?}",
        message,
        left,
        right
    );
}

/// Collects every element in the tree matching the predicate, in document
/// order
pub fn collect_elements<'a, F>(nodes: &'a [Node], pred: &F) -> Vec<&'a Element>
where
    F: Fn(&Element) -> bool,
{
    let mut found = Vec::new();
    collect_into(nodes, pred, &mut found);
    found
}

fn collect_into<'a, F>(nodes: &'a [Node], pred: &F, found: &mut Vec<&'a Element>)
where
    F: Fn(&Element) -> bool,
{
    for node in nodes {
        if let Node::Element(el) = node {
            if pred(el) {
                found.push(el);
            }
            collect_into(&el.children, pred, found);
        }
    }
}

/// First element matching the predicate, panicking with a readable message
/// when absent
///
/// # Panics
///
/// Panics if no element matches
pub fn first_element<'a, F>(nodes: &'a [Node], pred: &F, what: &str) -> &'a Element
where
    F: Fn(&Element) -> bool,
{
    crate::markup::node::find_element(nodes, pred)
        .unwrap_or_else(|| panic!("No element found: {}", what))
}

/// Concatenated text content of an element
pub fn element_text(el: &Element) -> String {
    el.text_content()
}
