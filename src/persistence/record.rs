//! Saved-board wire format.
//!
//! ```json
//! {
//!   "items": [{"id": 1, "x": 0.0, "y": 0.0, "width": 200.0, "height": "auto",
//!              "type": "text", "content": "Hello"}],
//!   "nextId": 2,
//!   "version": "1.0",
//!   "savedAt": "2026-01-01T00:00:00.000Z",
//!   "includesImages": true
//! }
//! ```

use crate::types::{ImagePayload, Item, ItemContent, ItemHeight, ItemId, Point};
use serde::{Deserialize, Deserializer, Serialize};

/// Top-level saved board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDocument {
    pub items: Vec<ItemRecord>,
    /// Absent, null, zero or non-integer values read as `None`
    #[serde(default, deserialize_with = "lenient_next_id")]
    pub next_id: Option<u64>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub saved_at: Option<String>,
    #[serde(default)]
    pub includes_images: bool,
}

/// One saved item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    #[serde(default = "auto_height")]
    pub height: ItemHeight,
    #[serde(flatten)]
    pub payload: RecordPayload,
}

/// Kind-specific fields, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RecordPayload {
    Text {
        content: String,
    },
    Image {
        src: Option<String>,
        #[serde(rename = "imageSaved", default, skip_serializing_if = "Option::is_none")]
        image_saved: Option<bool>,
    },
    Link {
        url: String,
        title: String,
    },
}

fn auto_height() -> ItemHeight {
    ItemHeight::Auto
}

fn lenient_next_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_u64()).filter(|&n| n >= 1))
}

impl ItemRecord {
    /// Snapshot a live item. Image bytes are dropped unless `include_images`.
    pub fn from_item(item: &Item, include_images: bool) -> Self {
        let payload = match &item.content {
            ItemContent::Text { html } => RecordPayload::Text {
                content: html.clone(),
            },
            ItemContent::Image(image) => RecordPayload::Image {
                src: include_images.then(|| image.data_uri.clone()),
                image_saved: Some(include_images),
            },
            ItemContent::Link { url, title } => RecordPayload::Link {
                url: url.clone(),
                title: title.clone(),
            },
        };

        Self {
            id: item.id,
            x: item.position.x,
            y: item.position.y,
            width: item.width,
            height: item.height,
            payload,
        }
    }

    /// Whether this record is an image whose bytes were left out of the file.
    pub fn is_omitted_image(&self) -> bool {
        matches!(
            &self.payload,
            RecordPayload::Image {
                image_saved: Some(false),
                ..
            } | RecordPayload::Image { src: None, .. }
        )
    }

    /// Rebuild the live item. Omitted images yield `None`.
    pub fn into_item(self) -> Option<Item> {
        if self.is_omitted_image() {
            return None;
        }

        let content = match self.payload {
            RecordPayload::Text { content } => ItemContent::Text { html: content },
            RecordPayload::Image { src, .. } => ItemContent::Image(ImagePayload {
                data_uri: src?,
                persisted: true,
            }),
            RecordPayload::Link { url, title } => ItemContent::Link { url, title },
        };

        Some(Item {
            id: self.id,
            position: Point::new(self.x, self.y),
            width: self.width,
            height: self.height,
            content,
        })
    }
}
