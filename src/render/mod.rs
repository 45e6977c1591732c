//! HTML rendering.
//!
//! Pages are built as a [`Node`] tree. Tag and attribute names are
//! `&'static str`, so they can only come from the program itself; every
//! runtime string lands in a text node or an attribute value and is escaped on
//! output. Shopper- or admin-typed input therefore always renders as inert
//! text, whatever tags it contains.

use std::fmt::{self, Write};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

/// Elements that never have children or a closing tag.
const VOID_TAGS: &[&str] = &["img", "input", "br", "meta", "link", "hr"];

pub fn el(tag: &'static str) -> Element {
    Element { tag, attrs: Vec::new(), children: Vec::new() }
}

pub fn text(value: impl Into<String>) -> Node { Node::Text(value.into()) }

impl Element {
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Boolean attribute such as `required` or `disabled`.
    pub fn flag(self, name: &'static str) -> Self { self.attr(name, "") }

    pub fn flag_if(self, name: &'static str, on: bool) -> Self {
        if on { self.flag(name) } else { self }
    }

    pub fn class(self, name: &'static str) -> Self { self.attr("class", name) }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, value: impl Into<String>) -> Self { self.child(text(value)) }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self { Node::Element(element) }
}

impl Node {
    /// Number of elements named `tag` in this subtree, ignoring ASCII case.
    pub fn count_elements(&self, tag: &str) -> usize {
        match self {
            Node::Text(_) => 0,
            Node::Element(e) => {
                let own = usize::from(e.tag.eq_ignore_ascii_case(tag));
                own + e.children.iter().map(|c| c.count_elements(tag)).sum::<usize>()
            }
        }
    }

    /// Concatenated text content of this subtree, unescaped.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(t) => t.clone(),
            Node::Element(e) => e.children.iter().map(Node::text_content).collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) -> fmt::Result {
        match self {
            Node::Text(t) => escape_into(out, t),
            Node::Element(e) => {
                write!(out, "<{}", e.tag)?;
                for (name, value) in &e.attrs {
                    if value.is_empty() {
                        write!(out, " {name}")?;
                    } else {
                        write!(out, " {name}=\"")?;
                        escape_into(out, value)?;
                        out.push('"');
                    }
                }
                out.push('>');
                if VOID_TAGS.contains(&e.tag) {
                    return Ok(());
                }
                for child in &e.children {
                    child.write_html(out)?;
                }
                write!(out, "</{}>", e.tag)
            }
        }
    }
}

/// A full page: doctype plus the `<html>` tree.
#[derive(Clone, Debug)]
pub struct Document {
    title: String,
    body: Vec<Node>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self { Self { title: title.into(), body: Vec::new() } }

    pub fn push(mut self, node: impl Into<Node>) -> Self {
        self.body.push(node.into());
        self
    }

    pub fn root(&self) -> Node {
        el("html")
            .attr("lang", "en")
            .child(
                el("head")
                    .child(el("meta").attr("charset", "utf-8"))
                    .child(el("title").text(self.title.clone())),
            )
            .child(el("body").children(self.body.iter().cloned()))
            .into()
    }

    pub fn to_html(&self) -> String { format!("<!DOCTYPE html>{}", self.root().to_html()) }
}

fn escape_into(out: &mut String, raw: &str) -> fmt::Result {
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Ok(())
}
