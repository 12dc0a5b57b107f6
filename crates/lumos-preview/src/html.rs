use tera::escape_html;

use crate::tree::{Element, Node};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: [&str; 4] = ["br", "link", "meta", "hr"];

/// Serialize a node to HTML. Text and attribute values are escaped; raw
/// nodes are written as-is.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize a root `<html>` element as a complete document.
pub fn to_html_document(root: &Element) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    write_element(root, &mut out);
    out.push('\n');
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => write_element(el, out),
        Node::Text { text } => out.push_str(&escape_html(text)),
        Node::Raw { raw } => out.push_str(raw),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    if !el.classes.is_empty() {
        write_attribute("class", &el.classes.join(" "), out);
    }
    for (name, value) in &el.attributes {
        write_attribute(name, value, out);
    }
    if !el.style.is_empty() {
        write_attribute("style", &el.style.to_css(), out);
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }

    for child in &el.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn write_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}
