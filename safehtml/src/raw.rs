//! Raw (unrestricted) view nodes.
//!
//! This is the host-side node model that everything in safehtml eventually
//! renders to. Nothing here is validated: [`create_raw_node`] builds any
//! element you ask for, including `<script>`. Code that wants the safety
//! guarantee goes through [`crate::SafeNode`] instead.
//!
//! Nodes are generic over the message type `Msg` produced by event handlers,
//! so a view can be wired into an application's update loop.
//!
//! # Example
//!
//! ```rust
//! use safehtml::raw::{RawNode, create_raw_node};
//! use safehtml::attributes::class;
//!
//! let p: RawNode<()> = create_raw_node("p", [class("lead")], [RawNode::text("Hello")]);
//! assert_eq!(p.tag(), Some("p"));
//! assert_eq!(p.text_content(), "Hello");
//! ```

use std::fmt;

use crate::Stem;

/// A single attribute binding on an element.
///
/// Bindings are kept in the order they were given; duplicates are kept too,
/// it is up to the renderer to decide which one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attribute<Msg> {
    /// A plain `name="value"` attribute.
    Attr { name: Stem, value: Stem },
    /// One inline style declaration, `name: value`.
    Style { name: Stem, value: Stem },
    /// An event handler producing `msg` when `event` fires.
    On { event: Stem, msg: Msg },
}

impl<Msg> Attribute<Msg> {
    /// Transform the message carried by an event handler.
    pub fn map<B>(self, f: impl FnOnce(Msg) -> B) -> Attribute<B> {
        match self {
            Attribute::Attr { name, value } => Attribute::Attr { name, value },
            Attribute::Style { name, value } => Attribute::Style { name, value },
            Attribute::On { event, msg } => Attribute::On { event, msg: f(msg) },
        }
    }
}

/// Short human-readable form, used in diagnostics. Handler messages are left out.
impl<Msg> fmt::Display for Attribute<Msg> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Attr { name, value } => write!(f, "{name}={value:?}"),
            Attribute::Style { name, value } => write!(f, "style:{name}={value:?}"),
            Attribute::On { event, .. } => write!(f, "on:{event}"),
        }
    }
}

/// View content - either an element or text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNode<Msg> {
    /// An element node
    Element(Element<Msg>),
    /// A text node
    Text(Stem),
}

impl<Msg> RawNode<Msg> {
    /// Create a text node.
    pub fn text(text: impl Into<Stem>) -> Self {
        RawNode::Text(text.into())
    }

    /// Returns true if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, RawNode::Element(_))
    }

    /// Returns true if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, RawNode::Text(_))
    }

    /// Get as element reference.
    pub fn as_element(&self) -> Option<&Element<Msg>> {
        match self {
            RawNode::Element(e) => Some(e),
            RawNode::Text(_) => None,
        }
    }

    /// Get as text reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawNode::Text(t) => Some(t),
            RawNode::Element(_) => None,
        }
    }

    /// Tag name, if this is an element.
    pub fn tag(&self) -> Option<&str> {
        self.as_element().map(|e| e.tag.as_str())
    }

    /// Get text content of this node and all descendants.
    pub fn text_content(&self) -> Stem {
        match self {
            RawNode::Text(t) => t.clone(),
            RawNode::Element(e) => e.text_content(),
        }
    }

    /// Whether this node or any descendant is an element with exactly this tag.
    pub fn contains_tag(&self, tag: &str) -> bool {
        match self {
            RawNode::Text(_) => false,
            RawNode::Element(e) => e.tag == tag || e.children.iter().any(|c| c.contains_tag(tag)),
        }
    }

    /// Transform every handler message in this subtree.
    pub fn map<B>(self, f: &impl Fn(Msg) -> B) -> RawNode<B> {
        match self {
            RawNode::Text(t) => RawNode::Text(t),
            RawNode::Element(e) => RawNode::Element(e.map(f)),
        }
    }
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<Msg> {
    /// The tag name, exactly as given
    pub tag: Stem,
    /// Attribute bindings in insertion order
    pub attrs: Vec<Attribute<Msg>>,
    /// Child nodes
    pub children: Vec<RawNode<Msg>>,
}

impl<Msg> Element<Msg> {
    /// Create a new element with no attributes or children.
    pub fn new(tag: impl Into<Stem>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get the value of the first plain attribute called `name`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find_map(|a| match a {
            Attribute::Attr { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Get the value of the first style declaration called `name`.
    pub fn get_style(&self, name: &str) -> Option<&str> {
        self.styles()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }

    /// Iterate over style declarations in order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().filter_map(|a| match a {
            Attribute::Style { name, value } => Some((name.as_str(), value.as_str())),
            _ => None,
        })
    }

    /// Iterate over event handlers in order.
    pub fn handlers(&self) -> impl Iterator<Item = (&str, &Msg)> {
        self.attrs.iter().filter_map(|a| match a {
            Attribute::On { event, msg } => Some((event.as_str(), msg)),
            _ => None,
        })
    }

    /// Get text content of this element and all descendants.
    pub fn text_content(&self) -> Stem {
        let mut out = Stem::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut Stem) {
        for child in &self.children {
            match child {
                RawNode::Text(t) => out.push_str(t),
                RawNode::Element(e) => e.collect_text(out),
            }
        }
    }

    fn map<B>(self, f: &impl Fn(Msg) -> B) -> Element<B> {
        Element {
            tag: self.tag,
            attrs: self.attrs.into_iter().map(|a| a.map(f)).collect(),
            children: self.children.into_iter().map(|c| c.map(f)).collect(),
        }
    }
}

/// The host rendering primitive: build an element from a tag, attributes and children.
///
/// Total for every input. This does **not** check the tag.
pub fn create_raw_node<Msg>(
    tag: impl Into<Stem>,
    attrs: impl IntoIterator<Item = Attribute<Msg>>,
    children: impl IntoIterator<Item = RawNode<Msg>>,
) -> RawNode<Msg> {
    RawNode::Element(Element {
        tag: tag.into(),
        attrs: attrs.into_iter().collect(),
        children: children.into_iter().collect(),
    })
}
