//! Safe HTML node construction.
//!
//! safehtml provides:
//! - **Raw nodes**: a small, unrestricted element/text tree ([`RawNode`])
//! - **Safe nodes**: [`SafeNode`], which can only be built through constructors
//!   that refuse `<script>`
//! - **Recovery styles**: result, option, log, report-a-message, or fallback
//! - **Serialization**: HTML5-correct rendering with proper escaping
//!
//! The guarantee is deliberately narrow: a `SafeNode` tree never contains a
//! `script` element. Attributes and text are not sanitized.
//!
//! # Example
//!
//! ```rust
//! use safehtml::attributes::class;
//! use safehtml::{SafeNode, create_or_fallback, create_or_log, try_create};
//!
//! let greeting: SafeNode<()> = try_create("p", [class("greeting")], [SafeNode::text("Hello!")])
//!     .unwrap();
//!
//! // Refused: the fallback comes back untouched.
//! let blocked = create_or_fallback(SafeNode::text("blocked"), "script", [], []);
//! assert_eq!(blocked, SafeNode::text("blocked"));
//!
//! // Refused: logged on the `safehtml::unsafe_usage` target, renders nothing.
//! let nothing = create_or_log("script", [], []);
//!
//! let page = try_create("main", [], [greeting, blocked, nothing]).unwrap();
//! assert_eq!(
//!     page.to_html(),
//!     "<main><p class=\"greeting\">Hello!</p>blocked</main>"
//! );
//! ```

pub mod attributes;
pub mod diagnostic;
mod error;
pub mod raw;
mod safe;
pub mod serialize;
mod stem;

pub use error::UnsafeUsageReason;
pub use raw::{Attribute, RawNode, create_raw_node};
pub use safe::{
    DISALLOWED_TAG, Reported, SafeNode, create_or_default, create_or_fallback, create_or_log,
    create_or_none, into_raw, try_create,
};
pub use serialize::{SerializeOptions, serialize_fragment, serialize_node};
pub use stem::Stem;
