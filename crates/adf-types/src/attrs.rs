/*
 * attrs.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Enumerated attribute values shared by ADF nodes and marks.
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a string does not name any variant of an attribute enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {})", .expected.join(", "))]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
    pub expected: Vec<&'static str>,
}

/// Layout of a `table` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableLayout {
    #[default]
    Default,
    Center,
    Wide,
    FullWidth,
}

impl TableLayout {
    pub const ALL: [TableLayout; 4] = [
        TableLayout::Default,
        TableLayout::Center,
        TableLayout::Wide,
        TableLayout::FullWidth,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TableLayout::Default => "default",
            TableLayout::Center => "center",
            TableLayout::Wide => "wide",
            TableLayout::FullWidth => "full-width",
        }
    }
}

/// Layout of a `mediaSingle` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MediaLayout {
    #[default]
    Center,
    Wide,
    FullWidth,
    WrapLeft,
    WrapRight,
    AlignStart,
    AlignEnd,
}

impl MediaLayout {
    pub const ALL: [MediaLayout; 7] = [
        MediaLayout::Center,
        MediaLayout::Wide,
        MediaLayout::FullWidth,
        MediaLayout::WrapLeft,
        MediaLayout::WrapRight,
        MediaLayout::AlignStart,
        MediaLayout::AlignEnd,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MediaLayout::Center => "center",
            MediaLayout::Wide => "wide",
            MediaLayout::FullWidth => "full-width",
            MediaLayout::WrapLeft => "wrap-left",
            MediaLayout::WrapRight => "wrap-right",
            MediaLayout::AlignStart => "align-start",
            MediaLayout::AlignEnd => "align-end",
        }
    }
}

/// The `type` attribute of a `media` node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    File,
    Link,
    External,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::File => "file",
            MediaType::Link => "link",
            MediaType::External => "external",
        }
    }
}

/// The `type` attribute of a `subsup` mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubSupType {
    Sub,
    Sup,
}

impl SubSupType {
    pub fn as_str(self) -> &'static str {
        match self {
            SubSupType::Sub => "sub",
            SubSupType::Sup => "sup",
        }
    }
}

fn parse_variant<T: Copy>(
    kind: &'static str,
    value: &str,
    all: &[T],
    name: impl Fn(T) -> &'static str,
) -> Result<T, UnknownVariant> {
    all.iter()
        .copied()
        .find(|variant| name(*variant) == value)
        .ok_or_else(|| UnknownVariant {
            kind,
            value: value.to_string(),
            expected: all.iter().map(|variant| name(*variant)).collect(),
        })
}

impl FromStr for TableLayout {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("table layout", s, &TableLayout::ALL, TableLayout::as_str)
    }
}

impl FromStr for MediaLayout {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_variant("media layout", s, &MediaLayout::ALL, MediaLayout::as_str)
    }
}

impl fmt::Display for TableLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MediaLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
