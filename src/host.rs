//! Host collaborators.
//!
//! The board core never draws, prompts, touches the clipboard or opens
//! files itself. The embedding application implements these traits and
//! passes them into the session's handlers.

use crate::types::{Item, ItemId};
use crate::viewport::Viewport;

/// Draws items and the board transform.
pub trait Renderer {
    /// Create the visual node for a new item, with its delete, duplicate and
    /// resize affordances wired back into the session.
    fn draw_item(&mut self, item: &Item);

    /// Reflect a position or size change.
    fn update_item(&mut self, item: &Item);

    fn remove_item(&mut self, id: ItemId);

    /// Move an item's node to the top of the visual stack.
    fn raise_item(&mut self, id: ItemId);

    /// Drop every node.
    fn clear(&mut self);

    /// Apply the current scale/pan.
    fn apply_transform(&mut self, viewport: &Viewport);

    /// Current markup of an editable text node, including any control
    /// affordances the renderer injected. `None` when nothing is rendered.
    fn live_text_html(&self, id: ItemId) -> Option<String>;
}

/// Synchronous user prompts.
pub trait InputProvider {
    /// Ask for a line of text. `None` means cancelled.
    fn prompt_text(&mut self, message: &str) -> Option<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;

    /// Tell the user something; no answer expected.
    fn notify(&mut self, message: &str);
}

/// User-facing file download / file picker.
pub trait FileChannel {
    /// Offer `bytes` to the user under `filename`.
    fn save(&mut self, filename: &str, bytes: &[u8]) -> anyhow::Result<()>;

    /// Let the user pick a board file. `None` means the picker was dismissed.
    fn open(&mut self) -> anyhow::Result<Option<Vec<u8>>>;
}

/// Payloads available for one paste event.
pub trait ClipboardSource {
    /// MIME types on offer, in clipboard order.
    fn mime_types(&self) -> Vec<String>;

    /// Read the payload for one MIME type.
    fn read(&self, mime: &str) -> Option<Vec<u8>>;

    /// The `text/plain` payload, if any
    fn plain_text(&self) -> Option<String> {
        self.read("text/plain")
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }
}
