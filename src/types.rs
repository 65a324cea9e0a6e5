//! Core types for the vision board.
//!
//! This module defines the data structures shared by the viewport, the item
//! store, the interaction controller and the persistence codec: item
//! identity, geometry, and the per-kind payload.

use crate::constants::{AUTO_LINK_HEIGHT, AUTO_TEXT_HEIGHT};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Unique, monotonically allocated item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Item height: either a fixed world-space value or computed from content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemHeight {
    /// Height follows the rendered content (text and link items)
    Auto,
    /// Explicit height in world units
    Fixed(f64),
}

impl ItemHeight {
    pub fn is_auto(&self) -> bool {
        matches!(self, ItemHeight::Auto)
    }

    /// The fixed height, if any
    pub fn fixed(&self) -> Option<f64> {
        match self {
            ItemHeight::Fixed(h) => Some(*h),
            ItemHeight::Auto => None,
        }
    }
}

// Wire format: the literal string "auto" or a number.
impl Serialize for ItemHeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ItemHeight::Auto => serializer.serialize_str("auto"),
            ItemHeight::Fixed(h) => serializer.serialize_f64(*h),
        }
    }
}

impl<'de> Deserialize<'de> for ItemHeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(h) => Ok(ItemHeight::Fixed(h)),
            Raw::Text(s) if s == "auto" => Ok(ItemHeight::Auto),
            Raw::Text(s) => Err(serde::de::Error::custom(format!(
                "height must be a number or \"auto\", got {s:?}"
            ))),
        }
    }
}

/// Encoded image bytes held by an image item.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePayload {
    /// `data:` URI carrying the compressed image
    pub data_uri: String,
    /// Whether the bytes were (or will be) included in a save
    pub persisted: bool,
}

/// The kind-specific content of a board item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemContent {
    /// Rich-text note; the HTML fragment is edited in place by the renderer
    Text { html: String },
    /// Compressed image
    Image(ImagePayload),
    /// Hyperlink with a display title
    Link { url: String, title: String },
}

/// Discriminant of [`ItemContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Text,
    Image,
    Link,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Text => "text",
            ItemKind::Image => "image",
            ItemKind::Link => "link",
        }
    }

    /// Whether resizing changes the height as well as the width.
    pub fn resizes_height(&self) -> bool {
        matches!(self, ItemKind::Image)
    }
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemContent::Text { .. } => ItemKind::Text,
            ItemContent::Image(_) => ItemKind::Image,
            ItemContent::Link { .. } => ItemKind::Link,
        }
    }

    /// Footprint height used when the item's height is auto
    pub fn auto_height(&self) -> f64 {
        match self {
            ItemContent::Link { .. } => AUTO_LINK_HEIGHT,
            _ => AUTO_TEXT_HEIGHT,
        }
    }
}

/// An item placed on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier for this item
    pub id: ItemId,
    /// Top-left corner in world coordinates
    pub position: Point,
    /// Width in world units
    pub width: f64,
    /// Height in world units, or auto
    pub height: ItemHeight,
    /// The content this item displays
    pub content: ItemContent,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }

    /// Width and height used for placement and hit testing.
    pub fn footprint(&self) -> (f64, f64) {
        let height = self
            .height
            .fixed()
            .unwrap_or_else(|| self.content.auto_height());
        (self.width, height)
    }

    /// Text content, if this is a text item
    pub fn text_html(&self) -> Option<&str> {
        match &self.content {
            ItemContent::Text { html } => Some(html),
            _ => None,
        }
    }
}

/// Prepend `https://` to URLs that do not already carry an http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Escape plain text so it can be stored as a rich-text fragment.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
