//! Board document codec.
//!
//! Encoding snapshots the item store into a [`BoardDocument`]; decoding
//! validates a document and produces the item set that replaces the store.
//! Neither side touches the store, so a failed decode leaves the board
//! exactly as it was.

use super::record::{BoardDocument, ItemRecord};
use crate::constants::{CONTROL_AFFORDANCE_CLASSES, DOCUMENT_VERSION};
use crate::error::{BoardError, BoardResult};
use crate::profile_scope;
use crate::types::Item;
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Serialized board, ready to hand to the file channel.
#[derive(Debug, Clone)]
pub struct EncodedBoard {
    pub bytes: Vec<u8>,
    pub item_count: usize,
    /// Image items written without their bytes
    pub omitted_images: usize,
}

impl EncodedBoard {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is over the soft size limit and needs confirmation.
    pub fn exceeds(&self, threshold_bytes: usize) -> bool {
        self.bytes.len() > threshold_bytes
    }

    /// Human-readable size, e.g. "5.12 MB"
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.bytes.len() as f64 / (1024.0 * 1024.0))
    }
}

/// Result of decoding a saved board.
#[derive(Debug, Clone)]
pub struct DecodedBoard {
    pub items: Vec<Item>,
    pub next_id: u64,
    /// Image items dropped because their bytes were not saved
    pub omitted_images: usize,
    pub version: String,
}

/// Serialize items into a board document.
pub fn encode_board<'a, I>(
    items: I,
    next_id: u64,
    include_images: bool,
    saved_at: DateTime<Utc>,
) -> BoardResult<EncodedBoard>
where
    I: IntoIterator<Item = &'a Item>,
{
    profile_scope!("encode_board");

    let records: Vec<ItemRecord> = items
        .into_iter()
        .map(|item| ItemRecord::from_item(item, include_images))
        .collect();
    let omitted_images = records.iter().filter(|r| r.is_omitted_image()).count();
    let item_count = records.len();

    let document = BoardDocument {
        items: records,
        next_id: Some(next_id),
        version: DOCUMENT_VERSION.to_string(),
        saved_at: Some(saved_at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        includes_images: include_images,
    };

    let bytes = serde_json::to_vec(&document).map_err(|e| BoardError::Encode(e.to_string()))?;
    debug!(items = item_count, bytes = bytes.len(), "Board encoded");

    Ok(EncodedBoard {
        bytes,
        item_count,
        omitted_images,
    })
}

/// Parse and validate a saved board.
///
/// `next_id` is never lower than one past the highest loaded id, whatever
/// the file claims.
pub fn decode_board(bytes: &[u8]) -> BoardResult<DecodedBoard> {
    profile_scope!("decode_board");

    let document: BoardDocument = serde_json::from_slice(bytes)?;

    let mut seen = HashSet::with_capacity(document.items.len());
    if let Some(dup) = document.items.iter().find(|r| !seen.insert(r.id)) {
        return Err(BoardError::InvalidDocument(format!(
            "item id {} appears more than once",
            dup.id.0
        )));
    }

    let total = document.items.len();
    let items: Vec<Item> = document
        .items
        .into_iter()
        .filter_map(ItemRecord::into_item)
        .collect();
    let omitted_images = total - items.len();
    if omitted_images > 0 {
        warn!(omitted_images, "Board was saved without some images");
    }

    let declared = document.next_id.unwrap_or(items.len() as u64 + 1);
    let mut next_id = declared;
    for item in &items {
        let after = item.id.0.checked_add(1).ok_or_else(|| {
            BoardError::InvalidDocument(format!(
                "item id {} leaves no room for new items",
                item.id.0
            ))
        })?;
        next_id = next_id.max(after);
    }
    // allocate_id hands out next_id and then increments it
    if next_id == u64::MAX {
        return Err(BoardError::InvalidDocument(format!(
            "nextId {} leaves no room for new items",
            next_id
        )));
    }
    if next_id != declared {
        warn!(declared, next_id, "Saved nextId was behind the loaded ids");
    }

    Ok(DecodedBoard {
        items,
        next_id,
        omitted_images,
        version: document.version,
    })
}

/// Remove delete/duplicate/resize affordances the renderer injected into
/// a text item's markup.
pub fn strip_control_markup(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match control_element_len(tail) {
            Some(len) => rest = &tail[len..],
            None => {
                out.push('<');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Byte length of the control element starting at `s[0] == '<'`, if it is one.
fn control_element_len(s: &str) -> Option<usize> {
    let tag_end = s.find('>')?;
    let open = &s[1..tag_end];
    let name = tag_name(open)?;
    if !has_control_class(open) {
        return None;
    }
    if open.trim_end().ends_with('/') {
        return Some(tag_end + 1);
    }

    let mut depth = 1usize;
    let mut pos = tag_end + 1;
    while depth > 0 {
        let Some(offset) = s[pos..].find('<') else {
            // Unclosed: the rest of the fragment belongs to the affordance.
            return Some(s.len());
        };
        let at = pos + offset;
        let (tag, close) = match s[at..].find('>') {
            Some(e) => (&s[at + 1..at + e], at + e + 1),
            None => (&s[at + 1..], s.len()),
        };

        if let Some(closing) = tag.strip_prefix('/') {
            if closing.trim().eq_ignore_ascii_case(name) {
                depth -= 1;
            }
        } else if tag_name(tag).is_some_and(|n| n.eq_ignore_ascii_case(name))
            && !tag.trim_end().ends_with('/')
        {
            depth += 1;
        }
        pos = close;
    }
    Some(pos)
}

fn tag_name(tag: &str) -> Option<&str> {
    let end = tag
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(tag.len());
    (end > 0).then(|| &tag[..end])
}

fn has_control_class(tag: &str) -> bool {
    let lower = tag.to_ascii_lowercase();
    let Some(idx) = lower.find("class=") else {
        return false;
    };
    let value = &tag[idx + "class=".len()..];
    let classes = match value.chars().next() {
        Some(q @ ('"' | '\'')) => value[1..].split(q).next().unwrap_or(""),
        _ => value.split(|c: char| c.is_whitespace() || c == '/').next().unwrap_or(""),
    };
    classes
        .split_whitespace()
        .any(|class| CONTROL_AFFORDANCE_CLASSES.contains(&class))
}

/// `<prefix>YYYY-MM-DD.json`
pub fn export_filename(prefix: &str, date: DateTime<Utc>) -> String {
    format!("{}{}.json", prefix, date.format("%Y-%m-%d"))
}
