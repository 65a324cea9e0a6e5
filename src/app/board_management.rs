//! Board management methods - add, edit, delete, duplicate, clear.

use super::VisionBoard;
use crate::constants::{AUTO_LINK_HEIGHT, AUTO_TEXT_HEIGHT, DEFAULT_ITEM_WIDTH};
use crate::error::BoardResult;
use crate::host::{InputProvider, Renderer};
use crate::persistence::strip_control_markup;
use crate::types::{Item, ItemContent, ItemHeight, ItemId, escape_html, normalize_url};
use tracing::{debug, info};

impl VisionBoard {
    // ==================== Adding Items ====================

    /// Prompt for text and add it as a note. `None` if the prompt was cancelled.
    pub fn add_text_item(
        &mut self,
        input: &mut impl InputProvider,
        renderer: &mut impl Renderer,
    ) -> Option<ItemId> {
        let text = input.prompt_text("Enter your text:").filter(|t| !t.is_empty())?;
        Some(self.add_text_item_with(&text, renderer))
    }

    /// Add plain text as a note centered in view.
    pub fn add_text_item_with(&mut self, text: &str, renderer: &mut impl Renderer) -> ItemId {
        self.place_item(
            ItemContent::Text {
                html: escape_html(text),
            },
            DEFAULT_ITEM_WIDTH,
            ItemHeight::Auto,
            AUTO_TEXT_HEIGHT,
            renderer,
        )
    }

    /// Prompt for a URL and optional title. `None` if the URL prompt was cancelled.
    pub fn add_link_item(
        &mut self,
        input: &mut impl InputProvider,
        renderer: &mut impl Renderer,
    ) -> Option<ItemId> {
        let url = input.prompt_text("Enter URL:").filter(|u| !u.trim().is_empty())?;
        let title = input.prompt_text("Enter link title (optional):");
        Some(self.add_link_item_with(&url, title.as_deref(), renderer))
    }

    /// Add a link centered in view. A blank title falls back to the URL as typed.
    pub fn add_link_item_with(
        &mut self,
        url: &str,
        title: Option<&str>,
        renderer: &mut impl Renderer,
    ) -> ItemId {
        let title = title
            .filter(|t| !t.is_empty())
            .unwrap_or(url)
            .to_string();
        self.place_item(
            ItemContent::Link {
                url: normalize_url(url),
                title,
            },
            DEFAULT_ITEM_WIDTH,
            ItemHeight::Auto,
            AUTO_LINK_HEIGHT,
            renderer,
        )
    }

    /// Allocate an id, center the footprint in view, store and draw.
    pub(crate) fn place_item(
        &mut self,
        content: ItemContent,
        width: f64,
        height: ItemHeight,
        footprint_height: f64,
        renderer: &mut impl Renderer,
    ) -> ItemId {
        let position = self.viewport.initial_placement(width, footprint_height);
        let id = self.store.allocate_id();
        let item = self.store.add(Item {
            id,
            position,
            width,
            height,
            content,
        });
        renderer.draw_item(item);
        id
    }

    // ==================== Editing ====================

    /// Store markup from an in-place edit, minus any injected affordances.
    pub fn edit_text(&mut self, id: ItemId, html: &str) -> BoardResult<()> {
        self.store.set_text(id, strip_control_markup(html))
    }

    /// Remove an item from the board. Unknown ids are a no-op.
    pub fn delete_item(&mut self, id: ItemId, renderer: &mut impl Renderer) -> bool {
        if self.store.remove(id).is_none() {
            debug!(%id, "Delete of unknown item ignored");
            return false;
        }
        renderer.remove_item(id);

        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.interaction.target_item() == Some(id) {
            self.interaction.finish();
        }
        true
    }

    /// Copy an item, draw the copy and select it.
    pub fn duplicate_item(
        &mut self,
        id: ItemId,
        renderer: &mut impl Renderer,
    ) -> BoardResult<ItemId> {
        let copy = self.store.duplicate(id)?;
        let copy_id = copy.id;
        renderer.draw_item(copy);
        self.selected = Some(copy_id);
        Ok(copy_id)
    }

    // ==================== Clearing ====================

    /// Empty the board after confirmation. Returns whether it was cleared.
    pub fn clear_board(
        &mut self,
        input: &mut impl InputProvider,
        renderer: &mut impl Renderer,
    ) -> bool {
        if !input
            .confirm("Are you sure you want to clear the entire board? This cannot be undone.")
        {
            return false;
        }

        let removed = self.store.len();
        self.store.clear();
        renderer.clear();
        self.reset_interaction();
        self.bump_epoch();
        info!(removed, "Board cleared");
        true
    }
}
