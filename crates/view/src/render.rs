use crate::node::{Element, Node};

const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "link", "meta"];

/// Renders `node` as an HTML fragment.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        Node::Fragment(nodes) => nodes.iter().for_each(|n| write_node(n, out)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());
    for (name, value) in el.attrs() {
        out.push(' ');
        out.push_str(name);
        if let Some(value) = value {
            out.push_str("=\"");
            out.push_str(&html_escape::encode_double_quoted_attribute(value));
            out.push('"');
        }
    }
    out.push('>');
    if VOID_ELEMENTS.contains(&el.tag()) {
        return;
    }
    for child in el.child_nodes() {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}
