//! Save and load through the host file channel.

use super::VisionBoard;
use crate::error::BoardResult;
use crate::host::{FileChannel, InputProvider, Renderer};
use crate::persistence::{decode_board, encode_board, export_filename, strip_control_markup};
use crate::profile_scope;
use crate::types::{ItemContent, ItemId, ItemKind};
use chrono::Utc;
use tracing::{debug, error, info, warn};

/// Outcome of a completed save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveReport {
    pub filename: String,
    pub size_bytes: usize,
    pub item_count: usize,
    pub includes_images: bool,
    /// Image items written without their bytes
    pub omitted_images: usize,
}

/// Outcome of a completed load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub item_count: usize,
    pub next_id: u64,
    /// Images dropped because the file did not carry their bytes
    pub omitted_images: usize,
    pub version: String,
}

impl VisionBoard {
    /// Snapshot the board and hand it to the file channel.
    ///
    /// Returns `Ok(None)` when the user backed out of a large save.
    pub fn save_board(
        &mut self,
        input: &mut impl InputProvider,
        files: &mut impl FileChannel,
        renderer: &impl Renderer,
    ) -> anyhow::Result<Option<SaveReport>> {
        profile_scope!("save_board");

        self.sync_live_text(renderer);

        let has_images = self.store.iter().any(|item| item.kind() == ItemKind::Image);
        let include_images = if has_images {
            input.confirm(
                "Include images in the save file? (Choosing \"No\" will make the file smaller, \
                 but images will need to be re-added later)",
            )
        } else {
            self.settings.persistence.include_images_by_default
        };

        let now = Utc::now();
        let encoded = encode_board(self.store.iter(), self.store.next_id(), include_images, now)?;
        debug!(size = %encoded.size_label(), "Save size");

        let threshold = self.settings.persistence.large_save_warning_bytes;
        if encoded.exceeds(threshold) {
            warn!(bytes = encoded.size(), threshold, "Large save");
            let message = format!(
                "Warning: The save file is large ({}). This may cause performance issues. Continue?",
                encoded.size_label()
            );
            if !input.confirm(&message) {
                info!("Save cancelled at size warning");
                return Ok(None);
            }
        }

        let filename = export_filename(&self.settings.persistence.export_prefix, now);
        if let Err(e) = files.save(&filename, &encoded.bytes) {
            error!(filename = %filename, "Save failed: {:#}", e);
            input.notify(&format!("Error saving vision board: {}", e));
            return Err(e);
        }

        self.mark_images_persisted(include_images);
        info!(
            filename = %filename,
            items = encoded.item_count,
            include_images,
            "Board saved"
        );

        Ok(Some(SaveReport {
            filename,
            size_bytes: encoded.size(),
            item_count: encoded.item_count,
            includes_images: include_images,
            omitted_images: encoded.omitted_images,
        }))
    }

    /// Ask the file channel for a board and replace the current one with it.
    ///
    /// Returns `Ok(None)` when the picker was dismissed.
    pub fn load_board(
        &mut self,
        input: &mut impl InputProvider,
        files: &mut impl FileChannel,
        renderer: &mut impl Renderer,
    ) -> anyhow::Result<Option<LoadReport>> {
        let bytes = match files.open() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Ok(None),
            Err(e) => {
                error!("Open failed: {:#}", e);
                input.notify(&format!("Error loading vision board: {}", e));
                return Err(e);
            }
        };
        Ok(Some(self.load_board_bytes(&bytes, input, renderer)?))
    }

    /// Replace the board with a saved document.
    ///
    /// On any error the current board is left exactly as it was.
    pub fn load_board_bytes(
        &mut self,
        bytes: &[u8],
        input: &mut impl InputProvider,
        renderer: &mut impl Renderer,
    ) -> BoardResult<LoadReport> {
        profile_scope!("load_board");

        let decoded = match decode_board(bytes) {
            Ok(decoded) => decoded,
            Err(e) => {
                error!("Load failed: {}", e);
                input.notify(&format!("Error loading vision board: {}", e));
                return Err(e);
            }
        };

        if decoded.omitted_images > 0 {
            input.notify(
                "Note: Some images were not saved with this board and will need to be re-added.",
            );
        }

        let item_count = decoded.items.len();
        renderer.clear();
        self.store.replace_all(decoded.items, decoded.next_id);
        for item in self.store.iter() {
            renderer.draw_item(item);
        }
        self.reset_interaction();
        self.bump_epoch();

        info!(
            items = item_count,
            next_id = self.store.next_id(),
            omitted_images = decoded.omitted_images,
            "Board loaded"
        );

        Ok(LoadReport {
            item_count,
            next_id: self.store.next_id(),
            omitted_images: decoded.omitted_images,
            version: decoded.version,
        })
    }

    /// Pull edited markup back from the renderer into the store.
    fn sync_live_text(&mut self, renderer: &impl Renderer) {
        let text_ids: Vec<ItemId> = self
            .store
            .iter()
            .filter(|item| item.kind() == ItemKind::Text)
            .map(|item| item.id)
            .collect();

        for id in text_ids {
            if let Some(html) = renderer.live_text_html(id) {
                if let Err(e) = self.store.set_text(id, strip_control_markup(&html)) {
                    debug!(%id, "Live text not synced: {}", e);
                }
            }
        }
    }

    fn mark_images_persisted(&mut self, persisted: bool) {
        let image_ids: Vec<ItemId> = self
            .store
            .iter()
            .filter(|item| item.kind() == ItemKind::Image)
            .map(|item| item.id)
            .collect();

        for id in image_ids {
            let marked = self.store.update(id, |item| {
                if let ItemContent::Image(image) = &mut item.content {
                    image.persisted = persisted;
                }
            });
            if let Err(e) = marked {
                debug!(%id, "Persisted flag not updated: {}", e);
            }
        }
    }
}
