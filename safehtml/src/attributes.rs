//! Attribute constructors.
//!
//! Attributes are passed through to the raw node untouched. In particular,
//! event handler names and URL values are **not** inspected.

use crate::Stem;
use crate::raw::Attribute;

/// A plain `name="value"` attribute.
pub fn attr<Msg>(name: impl Into<Stem>, value: impl Into<Stem>) -> Attribute<Msg> {
    Attribute::Attr {
        name: name.into(),
        value: value.into(),
    }
}

/// One inline style declaration.
pub fn style<Msg>(name: impl Into<Stem>, value: impl Into<Stem>) -> Attribute<Msg> {
    Attribute::Style {
        name: name.into(),
        value: value.into(),
    }
}

/// An event handler that produces `msg` when `event` fires.
pub fn on<Msg>(event: impl Into<Stem>, msg: Msg) -> Attribute<Msg> {
    Attribute::On {
        event: event.into(),
        msg,
    }
}

/// The `src` attribute.
pub fn src<Msg>(url: impl Into<Stem>) -> Attribute<Msg> {
    attr("src", url)
}

/// The `class` attribute.
pub fn class<Msg>(name: impl Into<Stem>) -> Attribute<Msg> {
    attr("class", name)
}

/// The `id` attribute.
pub fn id<Msg>(id: impl Into<Stem>) -> Attribute<Msg> {
    attr("id", id)
}
