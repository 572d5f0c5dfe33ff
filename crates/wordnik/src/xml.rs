//! Owned XML document tree and the extraction primitives the decode
//! routines are built on.
//!
//! Every primitive is total: a missing path, child, or attribute yields the
//! empty string, zero, or false instead of an error, and so does a failed
//! numeric parse. The decode routines rely on this to zero-fill absent
//! fields.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, WordnikError};

/// A parsed response document.
#[derive(Debug, Clone)]
pub(crate) struct XmlDocument {
    root: XmlNode,
}

/// One element: tag name, attributes, character data, child elements.
#[derive(Debug, Clone, Default)]
pub(crate) struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlNode>,
}

/// Parse a response body into a document tree.
///
/// A blank body is the explicit "no document" state, not an error; whether
/// that is acceptable is the caller's decision.
pub(crate) fn parse(body: &str) -> Result<Option<XmlDocument>> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let mut reader = Reader::from_str(body);
    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root: Option<XmlNode> = None;

    loop {
        let event = reader.read_event().map_err(parse_error)?;
        match event {
            Event::Start(start) => {
                stack.push(node_from_start(&start)?);
            }
            Event::Empty(start) => {
                let node = node_from_start(&start)?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::End(_) => {
                let node = stack
                    .pop()
                    .ok_or_else(|| malformed("unexpected closing tag"))?;
                attach(&mut stack, &mut root, node)?;
            }
            Event::Text(text) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&text.unescape().map_err(parse_error)?);
                }
            }
            Event::CData(data) => {
                if let Some(parent) = stack.last_mut() {
                    parent
                        .text
                        .push_str(&String::from_utf8_lossy(&data.into_inner()));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(malformed("document ended with unclosed elements"));
    }
    match root {
        Some(root) => Ok(Some(XmlDocument { root })),
        None => Err(malformed("document has no root element")),
    }
}

fn node_from_start(start: &BytesStart<'_>) -> Result<XmlNode> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| malformed(&e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(parse_error)?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(XmlNode {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    if root.is_some() {
        return Err(malformed("document has more than one root element"));
    }
    *root = Some(node);
    Ok(())
}

fn parse_error(cause: impl std::fmt::Display) -> WordnikError {
    WordnikError::Decode(format!("unable to parse XML document: {cause}"))
}

fn malformed(detail: &str) -> WordnikError {
    WordnikError::Decode(format!("unable to parse XML document: {detail}"))
}

impl XmlDocument {
    pub fn root(&self) -> &XmlNode {
        &self.root
    }

    /// The root element, if it carries the given tag name. Mirrors a named
    /// lookup among the document's top-level nodes.
    pub fn named_child(&self, name: &str) -> Option<&XmlNode> {
        (self.root.name == name).then_some(&self.root)
    }

    /// All elements with the given tag, in document order, root included.
    pub fn elements_by_tag<'a>(&'a self, name: &str) -> Vec<&'a XmlNode> {
        let mut found = Vec::new();
        collect_by_tag(&self.root, name, &mut found);
        found
    }

    /// Trimmed text at an absolute `/a/b/c` path, or the empty string when
    /// the path does not resolve.
    pub fn value_at(&self, path: &str) -> String {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        let Some(first) = segments.next() else {
            return String::new();
        };
        if self.root.name != first {
            return String::new();
        }
        let mut node = &self.root;
        for segment in segments {
            match node.child(segment) {
                Some(child) => node = child,
                None => return String::new(),
            }
        }
        node.text_content().trim().to_string()
    }

    pub fn value_at_i32(&self, path: &str) -> i32 {
        self.value_at(path).parse().unwrap_or(0)
    }

    pub fn value_at_i64(&self, path: &str) -> i64 {
        self.value_at(path).parse().unwrap_or(0)
    }

    /// True only when the value at the path is exactly `"true"`.
    pub fn value_at_bool(&self, path: &str) -> bool {
        self.value_at(path) == "true"
    }
}

fn collect_by_tag<'a>(node: &'a XmlNode, name: &str, found: &mut Vec<&'a XmlNode>) {
    if node.name == name {
        found.push(node);
    }
    for child in &node.children {
        collect_by_tag(child, name, found);
    }
}

impl XmlNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Character data of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone();
        for child in &self.children {
            out.push_str(&child.text_content());
        }
        out
    }

    pub fn children(&self) -> impl Iterator<Item = &XmlNode> {
        self.children.iter()
    }

    /// First child element with the given tag. Later same-named siblings are
    /// ignored; callers that need every repeat iterate `children()`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Trimmed text of the first child with the given tag, or the empty
    /// string when there is none.
    pub fn child_text(&self, name: &str) -> String {
        self.child(name)
            .map(|c| c.text_content().trim().to_string())
            .unwrap_or_default()
    }

    pub fn child_text_as_i32(&self, name: &str) -> i32 {
        self.child_text(name).parse().unwrap_or(0)
    }

    pub fn child_text_as_f64(&self, name: &str) -> f64 {
        self.child_text(name).parse().unwrap_or(0.0)
    }

    /// Trimmed value of the named attribute, or the empty string.
    pub fn attr(&self, name: &str) -> String {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.trim().to_string())
            .unwrap_or_default()
    }

    pub fn attr_as_i32(&self, name: &str) -> i32 {
        self.attr(name).parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> XmlDocument {
        parse(body).unwrap().unwrap()
    }

    #[test]
    fn blank_body_is_no_document() {
        assert!(parse("").unwrap().is_none());
        assert!(parse("   \n ").unwrap().is_none());
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = parse("<a><b></a>").unwrap_err();
        assert!(matches!(err, WordnikError::Decode(_)));
    }

    #[test]
    fn value_at_walks_the_path() {
        let doc = doc("<user><email> a@b.c </email><id>42</id></user>");
        assert_eq!(doc.value_at("/user/email"), "a@b.c");
        assert_eq!(doc.value_at_i32("/user/id"), 42);
    }

    #[test]
    fn unresolved_path_yields_empty_string_and_zero() {
        let doc = doc("<user><id>42</id></user>");
        assert_eq!(doc.value_at("/user/email"), "");
        assert_eq!(doc.value_at("/account/id"), "");
        assert_eq!(doc.value_at_i32("/user/email"), 0);
        assert_eq!(doc.value_at_i64("/user/missing"), 0);
        assert!(!doc.value_at_bool("/user/missing"));
    }

    #[test]
    fn value_at_bool_requires_literal_true() {
        let doc = doc("<s><a>true</a><b>TRUE</b><c>1</c></s>");
        assert!(doc.value_at_bool("/s/a"));
        assert!(!doc.value_at_bool("/s/b"));
        assert!(!doc.value_at_bool("/s/c"));
    }

    #[test]
    fn first_named_child_wins() {
        let doc = doc("<w><s>first</s><s>second</s></w>");
        assert_eq!(doc.root().child_text("s"), "first");
    }

    #[test]
    fn attribute_and_child_lookups_are_distinct() {
        let doc = doc(r#"<definition sequence="3"><word>cat</word></definition>"#);
        let node = doc.root();
        assert_eq!(node.attr_as_i32("sequence"), 3);
        assert_eq!(node.child_text("word"), "cat");
        // swapped mechanisms must come back empty
        assert_eq!(node.child_text("sequence"), "");
        assert_eq!(node.attr("word"), "");
    }

    #[test]
    fn missing_attribute_is_empty_and_zero() {
        let doc = doc("<syllable><text>hy</text></syllable>");
        assert_eq!(doc.root().attr("type"), "");
        assert_eq!(doc.root().attr_as_i32("seq"), 0);
    }

    #[test]
    fn elements_by_tag_scans_the_whole_tree() {
        let doc = doc("<r><a><word>x</word></a><word>y</word></r>");
        let words = doc.elements_by_tag("word");
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text_content(), "x");
    }

    #[test]
    fn entities_are_unescaped() {
        let doc = doc("<t><v>a &amp; b</v></t>");
        assert_eq!(doc.value_at("/t/v"), "a & b");
    }

    #[test]
    fn empty_elements_have_empty_text() {
        let doc = doc("<defs><text/></defs>");
        assert_eq!(doc.root().child_text("text"), "");
    }
}
