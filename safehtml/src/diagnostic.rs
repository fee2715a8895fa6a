//! Diagnostics for refused construction.
//!
//! A [`RejectionRecord`] captures everything the caller passed to a safe
//! constructor that refused it. It is logged by `create_or_log` and encoded
//! into the placeholder image that `create_or_default` renders.

use facet::Facet;
use tracing::{debug, warn};

use crate::attributes::{attr, src, style};
use crate::error::UnsafeUsageReason;
use crate::raw::Attribute;
use crate::safe::{SafeNode, create_or_fallback};

/// URL scheme prefix of the placeholder image `src`.
pub const DIAGNOSTIC_SRC_SCHEME: &str = "safehtml-unsafe-usage:";

/// tracing target for rejection records.
pub const DIAGNOSTIC_TARGET: &str = "safehtml::unsafe_usage";

/// Everything a refused constructor call was given.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
pub struct RejectionRecord {
    /// Display form of the [`UnsafeUsageReason`]
    pub reason: String,
    /// The refused tag name
    pub tag: String,
    /// Attributes in their short display form (handler messages left out)
    pub attributes: Vec<String>,
    /// Children rendered as HTML
    pub children: Vec<String>,
}

impl RejectionRecord {
    /// Capture a refused call: the reason, its attributes and its (rendered) children.
    pub fn new<Msg>(
        reason: &UnsafeUsageReason,
        attrs: &[Attribute<Msg>],
        children: &[SafeNode<Msg>],
    ) -> Self {
        Self {
            reason: reason.to_string(),
            tag: reason.tag().to_string(),
            attributes: attrs.iter().map(ToString::to_string).collect(),
            children: children.iter().map(SafeNode::to_html).collect(),
        }
    }

    /// JSON form of the record, or its `Debug` form if encoding fails.
    pub fn to_json(&self) -> String {
        match facet_json::to_string(self) {
            Ok(json) => json,
            Err(err) => {
                debug!(error = ?err, "falling back to Debug for rejection record");
                format!("{self:?}")
            }
        }
    }

    /// Emit this record on the diagnostic channel.
    pub(crate) fn log(&self) {
        warn!(
            target: DIAGNOSTIC_TARGET,
            tag = %self.tag,
            attributes = ?self.attributes,
            children = ?self.children,
            "{}",
            self.reason
        );
    }

    /// Invisible zero-size image whose `src` carries this record.
    pub(crate) fn placeholder<Msg>(&self) -> SafeNode<Msg> {
        create_or_fallback(
            SafeNode::empty(),
            "img",
            [
                src(format!("{DIAGNOSTIC_SRC_SCHEME}{}", self.to_json())),
                attr("alt", ""),
                style("width", "0"),
                style("height", "0"),
            ],
            [],
        )
    }
}
