//! HTML extraction (settings page → content nodes)
//!
//! Pipeline: HTML string → RcDom → content container → [`ContentNode`] per direct child

use super::nodes::ContentNode;
use crate::error::ParseError;
use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse `html` and classify the direct children of the first `<container_tag>` element.
pub fn extract_content_nodes(
    html: &str,
    container_tag: &str,
) -> Result<Vec<ContentNode>, ParseError> {
    // Step 1: HTML string → DOM
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);

    // Step 2: locate the content container
    let container =
        find_element(&dom.document, container_tag).ok_or_else(|| ParseError::MissingContainer {
            tag: container_tag.to_string(),
        })?;

    // Step 3: classify its children, in document order
    let children: Vec<Handle> = container.children.borrow().clone();
    let nodes = children
        .iter()
        .enumerate()
        .map(|(index, child)| classify(child, &children[index + 1..]))
        .collect();
    Ok(nodes)
}

fn classify(handle: &Handle, later_siblings: &[Handle]) -> ContentNode {
    let Some(name) = element_name(handle) else {
        return ContentNode::Other;
    };
    match name {
        "p" => ContentNode::Paragraph {
            text: text_content(handle),
            code: following_code(handle, later_siblings),
        },
        "ul" => ContentNode::List {
            items: handle
                .children
                .borrow()
                .iter()
                .filter(|child| element_name(child) == Some("li"))
                .map(text_content)
                .collect(),
        },
        "div" => ContentNode::Block {
            text: text_content(handle),
            classes: classes(handle),
        },
        other => match heading_level(other) {
            Some(level) => ContentNode::Heading {
                level,
                text: text_content(handle),
                code: following_code(handle, later_siblings),
            },
            None => ContentNode::Other,
        },
    }
}

/// `h1`..`h6` → 1..6
fn heading_level(name: &str) -> Option<u8> {
    let level: u8 = name.strip_prefix('h')?.parse().ok()?;
    (1..=6).contains(&level).then_some(level)
}

fn element_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

/// Pre-order search for the first element named `tag`, the node itself included.
///
/// Iterative: page nesting depth is not bounded by the call stack.
fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    let mut pending = vec![handle.clone()];
    while let Some(node) = pending.pop() {
        if element_name(&node) == Some(tag) {
            return Some(node);
        }
        pending.extend(node.children.borrow().iter().rev().cloned());
    }
    None
}

/// The nearest `<code>` at or after `handle`: inside it first, then inside later siblings.
fn following_code(handle: &Handle, later_siblings: &[Handle]) -> Option<String> {
    find_element(handle, "code")
        .or_else(|| {
            later_siblings
                .iter()
                .find_map(|sibling| find_element(sibling, "code"))
        })
        .map(|code| text_content(&code))
}

/// Concatenated text of all descendant text nodes, in document order.
fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    let mut pending = vec![handle.clone()];
    while let Some(node) = pending.pop() {
        if let NodeData::Text { contents } = &node.data {
            text.push_str(&contents.borrow());
        }
        pending.extend(node.children.borrow().iter().rev().cloned());
    }
    text
}

fn classes(handle: &Handle) -> Vec<String> {
    let NodeData::Element { attrs, .. } = &handle.data else {
        return Vec::new();
    };
    attrs
        .borrow()
        .iter()
        .find(|attr| &*attr.name.local == "class")
        .map(|attr| attr.value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
