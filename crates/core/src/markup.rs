//! A small markup tree and its HTML serialisation.
//!
//! The page renderer builds a [`Node`] tree and the host turns it into HTML with
//! [`Node::to_html`]. Text and attribute values are always escaped; only [`Node::Raw`] is
//! written verbatim, and it is reserved for trusted fragments compiled into the binary such as
//! the stylesheet.

use std::fmt::Write as _;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "link", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl Node {
    /// Concatenated text of this node and all of its descendants, unescaped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Raw(_) => {}
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// All elements in the subtree (including this one) whose `class` list contains `class`,
    /// in document order.
    pub fn find_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.walk_class(class, &mut found);
        found
    }

    fn walk_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        if let Node::Element(element) = self {
            let matches = element
                .attr_value("class")
                .is_some_and(|v| v.split_whitespace().any(|c| c == class));
            if matches {
                found.push(element);
            }
            for child in &element.children {
                child.walk_class(class, found);
            }
        }
    }

    /// Serialise the tree to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Raw(raw) => out.push_str(raw),
            Node::Element(element) => {
                out.push('<');
                out.push_str(element.tag);
                for (name, value) in &element.attrs {
                    // Writing to a String cannot fail.
                    let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&element.tag) {
                    return;
                }

                for child in &element.children {
                    child.write_html(out);
                }
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

/// Escape text for use in HTML content or a double-quoted attribute value.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_element_serialises_attrs_and_children() {
        let node: Node = Element::new("a")
            .attr("href", "https://example.com/?a=1&b=2")
            .class("btn")
            .text("Git Repo")
            .into();

        assert_eq!(
            node.to_html(),
            r#"<a href="https://example.com/?a=1&amp;b=2" class="btn">Git Repo</a>"#
        );
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let node: Node = Element::new("img")
            .attr("src", "/assets/headshot")
            .attr("alt", "")
            .into();
        assert_eq!(node.to_html(), r#"<img src="/assets/headshot" alt="">"#);
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let node: Node = Element::new("style")
            .child(Node::Raw(".chip > span {}".into()))
            .into();
        assert_eq!(node.to_html(), "<style>.chip > span {}</style>");
    }

    #[test]
    fn test_text_content_and_find_by_class() {
        let node: Node = Element::new("div")
            .child(Element::new("span").class("chip").text("SQL"))
            .child(Element::new("span").class("chip muted").text("ETL"))
            .child(Element::new("p").text("About"))
            .into();

        let chips = node.find_by_class("chip");
        assert_eq!(chips.len(), 2);
        assert_eq!(node.text_content(), "SQLETLAbout");
    }
}
