/*
 * mark.rs
 * Copyright (c) 2025 Posit, PBC
 */

use crate::attrs::SubSupType;

/// An inline formatting annotation attached to a text node.
///
/// Several marks may be stacked on one text node. The order of the marks
/// reflects the nesting of the source formatting at the point the text was
/// emitted, outermost first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Mark {
    Strong,
    Em,
    Code,
    Strike,
    Underline,
    Link(LinkMark),
    SubSup(SubSupType),
    TextColor(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkMark {
    pub href: String,
    pub title: Option<String>,
}

impl Mark {
    pub fn strong() -> Self {
        Mark::Strong
    }

    pub fn em() -> Self {
        Mark::Em
    }

    pub fn code() -> Self {
        Mark::Code
    }

    pub fn strike() -> Self {
        Mark::Strike
    }

    pub fn underline() -> Self {
        Mark::Underline
    }

    /// Create a link mark. An empty title is treated as no title.
    pub fn link(href: impl Into<String>, title: impl Into<String>) -> Self {
        let title = title.into();
        Mark::Link(LinkMark {
            href: href.into(),
            title: (!title.is_empty()).then_some(title),
        })
    }

    pub fn subsup(kind: SubSupType) -> Self {
        Mark::SubSup(kind)
    }

    /// Create a text color mark from a `#rrggbb` hex color.
    pub fn text_color(color: impl Into<String>) -> Self {
        Mark::TextColor(color.into())
    }

    /// The ADF `type` discriminator of this mark.
    pub fn mark_type(&self) -> &'static str {
        match self {
            Mark::Strong => "strong",
            Mark::Em => "em",
            Mark::Code => "code",
            Mark::Strike => "strike",
            Mark::Underline => "underline",
            Mark::Link(_) => "link",
            Mark::SubSup(_) => "subsup",
            Mark::TextColor(_) => "textColor",
        }
    }
}
