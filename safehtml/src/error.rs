//! Why a node could not be built safely.

use facet::Facet;

use crate::Stem;

/// Reason a safe constructor refused to build a node.
#[derive(Facet, Debug, Clone, PartialEq, Eq)]
#[facet(derive(Error))]
#[repr(u8)]
pub enum UnsafeUsageReason {
    /// refusing to create disallowed tag `{tag}`
    DisallowedTag { tag: Stem },
}

impl UnsafeUsageReason {
    /// The tag name that was refused.
    pub fn tag(&self) -> &str {
        match self {
            UnsafeUsageReason::DisallowedTag { tag } => tag,
        }
    }
}
