//! HTML5 serializer for view nodes.
//!
//! This is the rendering boundary: raw and safe trees both end up here.
//! Serialization follows HTML5 rules:
//!
//! - Void elements never get end tags
//! - Text content is properly escaped
//! - Attribute values are escaped and double-quoted
//! - Style declarations are folded into a single `style` attribute
//! - Event handlers have no markup form and are skipped
//! - Raw text elements (script, style) are not escaped
//! - RCDATA elements (title, textarea) escape only `&` and `<`; element
//!   children inside raw text or RCDATA elements are written as their text content
//! - Tag and attribute names that are not valid HTML names are never written:
//!   such an element is unwrapped (its children are kept), such an attribute is skipped

use crate::raw::{Attribute, Element, RawNode};
use crate::safe::SafeNode;
use std::fmt::Write;
use tracing::debug;

/// Options for HTML serialization.
#[derive(Clone, Debug)]
pub struct SerializeOptions {
    /// Whether to pretty-print with indentation (default: false for minified output)
    pub pretty: bool,
    /// Indentation string for pretty-printing (default: "  ")
    pub indent: String,
    /// Whether to sort attributes alphabetically (default: false, keeps insertion order).
    pub sort_attributes: bool,
    /// Whether to escape `</script` sequences in script content (default: true for safety)
    pub escape_script_end_tags: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: "  ".to_string(),
            sort_attributes: false,
            escape_script_end_tags: true,
        }
    }
}

impl SerializeOptions {
    /// Create new default options (minified output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable pretty-printing with default indentation.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Set a custom indentation string (implies pretty-printing).
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self.pretty = true;
        self
    }

    /// Enable sorting attributes alphabetically for deterministic output.
    pub fn sort_attributes(mut self) -> Self {
        self.sort_attributes = true;
        self
    }

    /// Disable escaping `</script` in script content (not recommended).
    pub fn no_escape_script_end_tags(mut self) -> Self {
        self.escape_script_end_tags = false;
        self
    }
}

/// Serialize a raw node and its descendants to an HTML string.
pub fn serialize_node<Msg>(node: &RawNode<Msg>, opts: &SerializeOptions) -> String {
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out, opts);
    ser.write_node(node);
    out
}

/// Serialize a sequence of safe nodes to an HTML string (fragment).
pub fn serialize_fragment<Msg>(nodes: &[SafeNode<Msg>], opts: &SerializeOptions) -> String {
    let mut out = String::new();
    let mut ser = Serializer::new(&mut out, opts);
    for node in nodes {
        ser.write_node(node.as_raw());
    }
    out
}

/// HTML5 void elements - these never have end tags.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Raw text elements - content is not escaped.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// RCDATA elements - only `&` and `<` are escaped.
const RCDATA_ELEMENTS: &[&str] = &["title", "textarea"];

fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

fn is_raw_text_element(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

fn is_rcdata_element(tag: &str) -> bool {
    RCDATA_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
}

/// Whether `name` can be written as a tag or attribute name without changing
/// how the surrounding markup parses.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_ascii_whitespace() || matches!(c, '\0' | '/' | '>' | '=' | '"' | '\'' | '<')
        })
}

struct Serializer<'a, W: Write> {
    out: &'a mut W,
    options: &'a SerializeOptions,
    depth: usize,
}

impl<'a, W: Write> Serializer<'a, W> {
    fn new(out: &'a mut W, options: &'a SerializeOptions) -> Self {
        Self {
            out,
            options,
            depth: 0,
        }
    }

    fn write_indent(&mut self) {
        if self.options.pretty {
            for _ in 0..self.depth {
                let _ = write!(self.out, "{}", self.options.indent);
            }
        }
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            let _ = writeln!(self.out);
        }
    }

    fn write_escaped(&mut self, text: &str, escape_gt: bool, escape_quote: bool) {
        for c in text.chars() {
            let _ = match c {
                '&' => write!(self.out, "&amp;"),
                '<' => write!(self.out, "&lt;"),
                '>' if escape_gt => write!(self.out, "&gt;"),
                '"' if escape_quote => write!(self.out, "&quot;"),
                _ => write!(self.out, "{}", c),
            };
        }
    }

    /// Write raw text content, optionally escaping script end tags.
    fn write_raw_text(&mut self, text: &str, tag: &str) {
        if self.options.escape_script_end_tags && tag.eq_ignore_ascii_case("script") {
            // ASCII case-insensitive match on the original bytes keeps indices aligned
            const PATTERN: &[u8] = b"</script";
            let bytes = text.as_bytes();
            let mut last_end = 0;

            for i in 0..bytes.len().saturating_sub(PATTERN.len() - 1) {
                if i >= last_end && bytes[i..i + PATTERN.len()].eq_ignore_ascii_case(PATTERN) {
                    let _ = write!(self.out, "{}", &text[last_end..i]);
                    let _ = write!(self.out, "<\\/script");
                    last_end = i + PATTERN.len();
                }
            }
            let _ = write!(self.out, "{}", &text[last_end..]);
        } else {
            let _ = write!(self.out, "{}", text);
        }
    }

    fn write_attr(&mut self, name: &str, value: &str) {
        let _ = write!(self.out, " {}=\"", name);
        self.write_escaped(value, true, true);
        let _ = write!(self.out, "\"");
    }

    fn write_attrs<Msg>(&mut self, elem: &Element<Msg>) {
        let mut attrs: Vec<(&str, String)> = Vec::with_capacity(elem.attrs.len());
        let mut style: Option<String> = None;

        for attr in &elem.attrs {
            match attr {
                Attribute::Attr { name, value } => attrs.push((name.as_str(), value.to_string())),
                Attribute::Style { name, value } => {
                    let decls = style.get_or_insert_with(String::new);
                    if !decls.is_empty() {
                        decls.push_str("; ");
                    }
                    let _ = write!(decls, "{name}: {value}");
                }
                Attribute::On { .. } => {}
            }
        }

        if let Some(decls) = style {
            // Explicit style attributes come first, declarations are appended
            match attrs.iter_mut().find(|(n, _)| *n == "style") {
                Some((_, existing)) if !existing.is_empty() => {
                    existing.push_str("; ");
                    existing.push_str(&decls);
                }
                Some((_, existing)) => *existing = decls,
                None => attrs.push(("style", decls)),
            }
        }

        if self.options.sort_attributes {
            attrs.sort_by(|(a, _), (b, _)| a.cmp(b));
        }

        for (name, value) in attrs {
            if is_valid_name(name) {
                self.write_attr(name, &value);
            } else {
                debug!(attribute = name, tag = %elem.tag, "skipping attribute with invalid name");
            }
        }
    }

    fn write_element<Msg>(&mut self, elem: &Element<Msg>) {
        let tag = elem.tag.as_str();
        if !is_valid_name(tag) {
            debug!(tag, "unwrapping element with invalid tag name");
            for child in &elem.children {
                self.write_node(child);
            }
            return;
        }

        let is_raw = is_raw_text_element(tag);
        let is_rcdata = is_rcdata_element(tag);

        self.write_indent();
        let _ = write!(self.out, "<{}", tag);
        self.write_attrs(elem);

        if is_void_element(tag) {
            let _ = write!(self.out, ">");
            self.write_newline();
            return;
        }

        let _ = write!(self.out, ">");

        if elem.children.is_empty() {
            let _ = write!(self.out, "</{}>", tag);
            self.write_newline();
            return;
        }

        let all_text = elem.children.iter().all(RawNode::is_text);

        if is_raw || is_rcdata || all_text {
            for child in &elem.children {
                // Only reachable for raw text / RCDATA parents: markup has no place there
                let text = child.text_content();
                if is_raw {
                    self.write_raw_text(&text, tag);
                } else if is_rcdata {
                    self.write_escaped(&text, false, false);
                } else {
                    self.write_escaped(&text, true, false);
                }
            }
            let _ = write!(self.out, "</{}>", tag);
            self.write_newline();
        } else {
            self.write_newline();
            self.depth += 1;
            for child in &elem.children {
                self.write_node(child);
            }
            self.depth -= 1;
            self.write_indent();
            let _ = write!(self.out, "</{}>", tag);
            self.write_newline();
        }
    }

    fn write_node<Msg>(&mut self, node: &RawNode<Msg>) {
        match node {
            RawNode::Element(elem) => self.write_element(elem),
            RawNode::Text(text) => {
                self.write_indent();
                self.write_escaped(text, true, false);
                if self.options.pretty && !text.is_empty() {
                    self.write_newline();
                }
            }
        }
    }
}

// =============================================================================
// Convenience methods
// =============================================================================

impl<Msg> RawNode<Msg> {
    /// Serialize this node to an HTML string with default options.
    pub fn to_html(&self) -> String {
        serialize_node(self, &SerializeOptions::default())
    }

    /// Serialize this node with custom options.
    pub fn to_html_with_options(&self, opts: &SerializeOptions) -> String {
        serialize_node(self, opts)
    }
}

impl<Msg> SafeNode<Msg> {
    /// Serialize this node to an HTML string with default options.
    pub fn to_html(&self) -> String {
        serialize_node(self.as_raw(), &SerializeOptions::default())
    }

    /// Serialize this node to a pretty-printed HTML string.
    pub fn to_html_pretty(&self) -> String {
        serialize_node(self.as_raw(), &SerializeOptions::default().pretty())
    }

    /// Serialize this node with custom options.
    pub fn to_html_with_options(&self, opts: &SerializeOptions) -> String {
        serialize_node(self.as_raw(), opts)
    }
}

// =============================================================================
// Tests
// =============================================================================
