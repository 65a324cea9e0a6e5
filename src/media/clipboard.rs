//! Paste routing.
//!
//! Images win over text; text only becomes a new note when it has
//! non-whitespace content; pastes aimed at a text item being edited are left
//! to the native editor.

use crate::host::ClipboardSource;
use crate::types::ItemId;

/// Where the paste event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteTarget {
    /// The board surface or anything that is not an editable text item
    Board,
    /// Inside an editable text item
    EditableText(ItemId),
}

/// What a paste should turn into.
#[derive(Debug, Clone, PartialEq)]
pub enum PasteRoute {
    /// Let the native in-place editor handle it
    Native,
    /// Run the image pipeline on these bytes
    Image { mime: String, bytes: Vec<u8> },
    /// Create a text item from this plain text
    Text(String),
    /// Nothing usable on the clipboard
    Ignored,
}

impl PasteRoute {
    /// Whether the host should suppress the default paste behavior.
    pub fn is_intercepted(&self) -> bool {
        matches!(self, PasteRoute::Image { .. } | PasteRoute::Text(_))
    }
}

/// Decide what a paste event should do.
pub fn route_paste(target: PasteTarget, clipboard: &dyn ClipboardSource) -> PasteRoute {
    if let PasteTarget::EditableText(_) = target {
        return PasteRoute::Native;
    }

    for mime in clipboard.mime_types() {
        if !mime.contains("image") {
            continue;
        }
        if let Some(bytes) = clipboard.read(&mime) {
            return PasteRoute::Image { mime, bytes };
        }
    }

    match clipboard.plain_text() {
        Some(text) if !text.trim().is_empty() => PasteRoute::Text(text),
        _ => PasteRoute::Ignored,
    }
}
