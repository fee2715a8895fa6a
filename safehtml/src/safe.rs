//! Validated node construction.
//!
//! [`SafeNode`] wraps a [`RawNode`] that is known not to contain a
//! [`DISALLOWED_TAG`] element anywhere in its subtree. The only ways to get one
//! are the constructors in this module, text nodes, and [`SafeNode::map`];
//! children are always `SafeNode`s themselves, so the guarantee holds by
//! induction over construction.
//!
//! All constructors share one check and differ only in what happens when it
//! fails:
//!
//! | constructor            | on refusal                                      |
//! |------------------------|-------------------------------------------------|
//! | [`try_create`]         | `Err(UnsafeUsageReason)`                        |
//! | [`create_or_none`]     | `None`                                          |
//! | [`create_or_default`]  | placeholder image + a message for the caller    |
//! | [`create_or_log`]      | empty text + one `tracing` WARN record          |
//! | [`create_or_fallback`] | the fallback node, unchanged                    |
//!
//! Nothing beyond the tag name is checked. Attributes (event handlers,
//! `javascript:` URLs, ...) and text pass through as given.

use tracing::{debug, trace};

use crate::Stem;
use crate::diagnostic::RejectionRecord;
use crate::error::UnsafeUsageReason;
use crate::raw::{Attribute, RawNode, create_raw_node};

/// The one tag name safe constructors refuse. Compared case-sensitively.
pub const DISALLOWED_TAG: &str = "script";

/// A view node built only through validated construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeNode<Msg>(RawNode<Msg>);

impl<Msg> SafeNode<Msg> {
    /// A text node. Text never carries a tag, so it is always safe.
    pub fn text(text: impl Into<Stem>) -> Self {
        SafeNode(RawNode::text(text))
    }

    /// An empty text node.
    pub fn empty() -> Self {
        Self::text(Stem::new())
    }

    /// Tag name, if this is an element.
    pub fn tag(&self) -> Option<&str> {
        self.0.tag()
    }

    /// Borrow the underlying raw node.
    pub fn as_raw(&self) -> &RawNode<Msg> {
        &self.0
    }

    /// Strip the wrapper for handoff to the renderer.
    pub fn into_raw(self) -> RawNode<Msg> {
        self.0
    }

    /// Transform every handler message in this subtree. Tags are untouched.
    pub fn map<B>(self, f: impl Fn(Msg) -> B) -> SafeNode<B> {
        SafeNode(self.0.map(&f))
    }
}

impl<Msg> From<SafeNode<Msg>> for RawNode<Msg> {
    fn from(node: SafeNode<Msg>) -> Self {
        node.into_raw()
    }
}

/// Strip the safety wrapper. Total.
pub fn into_raw<Msg>(node: SafeNode<Msg>) -> RawNode<Msg> {
    node.into_raw()
}

/// A refused call, with the inputs handed back so recovery can inspect them.
struct Rejected<Msg> {
    reason: UnsafeUsageReason,
    attrs: Vec<Attribute<Msg>>,
    children: Vec<SafeNode<Msg>>,
}

impl<Msg> Rejected<Msg> {
    fn record(&self) -> RejectionRecord {
        RejectionRecord::new(&self.reason, &self.attrs, &self.children)
    }
}

fn build<Msg>(
    tag: impl Into<Stem>,
    attrs: impl IntoIterator<Item = Attribute<Msg>>,
    children: impl IntoIterator<Item = SafeNode<Msg>>,
) -> Result<SafeNode<Msg>, Rejected<Msg>> {
    let tag = tag.into();

    if tag == DISALLOWED_TAG {
        debug!(%tag, "refusing disallowed tag");
        return Err(Rejected {
            reason: UnsafeUsageReason::DisallowedTag { tag },
            attrs: attrs.into_iter().collect(),
            children: children.into_iter().collect(),
        });
    }

    trace!(%tag, "building safe node");
    Ok(SafeNode(create_raw_node(
        tag,
        attrs,
        children.into_iter().map(SafeNode::into_raw),
    )))
}

/// Build an element, or say why it cannot be built safely.
///
/// ```rust
/// use safehtml::{SafeNode, try_create};
///
/// let div: SafeNode<()> = try_create("div", [], []).unwrap();
/// assert_eq!(div.tag(), Some("div"));
///
/// let err = try_create::<()>("script", [], []).unwrap_err();
/// assert_eq!(err.tag(), "script");
/// ```
pub fn try_create<Msg>(
    tag: impl Into<Stem>,
    attrs: impl IntoIterator<Item = Attribute<Msg>>,
    children: impl IntoIterator<Item = SafeNode<Msg>>,
) -> Result<SafeNode<Msg>, UnsafeUsageReason> {
    build(tag, attrs, children).map_err(|rejected| rejected.reason)
}

/// Build an element, or `None` if it cannot be built safely.
pub fn create_or_none<Msg>(
    tag: impl Into<Stem>,
    attrs: impl IntoIterator<Item = Attribute<Msg>>,
    children: impl IntoIterator<Item = SafeNode<Msg>>,
) -> Option<SafeNode<Msg>> {
    build(tag, attrs, children).ok()
}

/// Build an element, or `fallback` if it cannot be built safely.
pub fn create_or_fallback<Msg>(
    fallback: SafeNode<Msg>,
    tag: impl Into<Stem>,
    attrs: impl IntoIterator<Item = Attribute<Msg>>,
    children: impl IntoIterator<Item = SafeNode<Msg>>,
) -> SafeNode<Msg> {
    build(tag, attrs, children).unwrap_or(fallback)
}

/// Build an element, or log the refused call and render nothing.
///
/// The refusal is emitted as one WARN event on the
/// [`DIAGNOSTIC_TARGET`](crate::diagnostic::DIAGNOSTIC_TARGET) target. This is
/// a development aid: the page itself shows an empty text node.
pub fn create_or_log<Msg>(
    tag: impl Into<Stem>,
    attrs: impl IntoIterator<Item = Attribute<Msg>>,
    children: impl IntoIterator<Item = SafeNode<Msg>>,
) -> SafeNode<Msg> {
    build(tag, attrs, children).unwrap_or_else(|rejected| {
        rejected.record().log();
        SafeNode::empty()
    })
}

/// A node plus a message that the caller should feed into its update loop.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "the message is lost unless it is dispatched"]
pub struct Reported<Msg> {
    pub node: SafeNode<Msg>,
    pub message: Option<Msg>,
}

impl<Msg> Reported<Msg> {
    /// Push the message (if any) into `queue` and keep the node.
    pub fn dispatch(self, queue: &mut impl Extend<Msg>) -> SafeNode<Msg> {
        queue.extend(self.message);
        self.node
    }

    /// Split into the node and the message, for callers with their own dispatch.
    pub fn into_parts(self) -> (SafeNode<Msg>, Option<Msg>) {
        (self.node, self.message)
    }
}

/// Build an element, or render an invisible placeholder and report why.
///
/// On refusal the placeholder is a zero-size `img` whose `src` encodes the
/// [`RejectionRecord`], and `on_unsafe` is called right away with the reason.
/// The message it returns comes back in [`Reported::message`].
///
/// ```rust
/// use safehtml::{UnsafeUsageReason, create_or_default};
///
/// #[derive(Debug, PartialEq)]
/// enum Msg {
///     Unsafe(UnsafeUsageReason),
/// }
///
/// let mut queue = Vec::new();
/// let node = create_or_default(Msg::Unsafe, "script", [], []).dispatch(&mut queue);
///
/// assert_eq!(node.tag(), Some("img"));
/// assert_eq!(queue.len(), 1);
/// ```
pub fn create_or_default<Msg>(
    on_unsafe: impl FnOnce(UnsafeUsageReason) -> Msg,
    tag: impl Into<Stem>,
    attrs: impl IntoIterator<Item = Attribute<Msg>>,
    children: impl IntoIterator<Item = SafeNode<Msg>>,
) -> Reported<Msg> {
    match build(tag, attrs, children) {
        Ok(node) => Reported {
            node,
            message: None,
        },
        Err(rejected) => Reported {
            node: rejected.record().placeholder(),
            message: Some(on_unsafe(rejected.reason)),
        },
    }
}
