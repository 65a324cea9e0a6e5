//! Image upload and clipboard paste.
//!
//! Compression is the one latent step. Hosts that run it off the event
//! thread call [`VisionBoard::begin_image_ingest`], run
//! [`prepare_image`](crate::media::prepare_image) wherever they like, then
//! hand the result to [`VisionBoard::complete_image_ingest`]. A board
//! cleared or reloaded in between makes the ticket stale and the result is
//! dropped.

use super::{IngestTicket, VisionBoard};
use crate::constants::IMAGE_PREPARE_BUDGET_MS;
use crate::error::BoardResult;
use crate::host::{ClipboardSource, InputProvider, Renderer};
use crate::media::{PasteRoute, PasteTarget, PreparedImage, prepare_image, route_paste};
use crate::perf::measure_and_log;
use crate::types::{ImagePayload, ItemContent, ItemHeight, ItemId};
use tracing::{error, info, warn};

/// What a paste event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Not intercepted; the native editor handles it
    Native,
    /// A new item was added
    Added(ItemId),
    /// Intercepted, but the image could not be processed
    Failed,
    /// Nothing usable on the clipboard
    Ignored,
}

impl VisionBoard {
    pub fn begin_image_ingest(&self) -> IngestTicket {
        IngestTicket {
            epoch: self.ingest_epoch,
        }
    }

    /// Place a prepared image, or report why it could not be prepared.
    ///
    /// Returns `Ok(None)` when the ticket is stale.
    pub fn complete_image_ingest(
        &mut self,
        ticket: IngestTicket,
        prepared: BoardResult<PreparedImage>,
        input: &mut impl InputProvider,
        renderer: &mut impl Renderer,
    ) -> BoardResult<Option<ItemId>> {
        if !self.is_ticket_current(ticket) {
            warn!(
                ticket = ticket.epoch,
                current = self.ingest_epoch,
                "Discarding image from before the board was replaced"
            );
            return Ok(None);
        }

        let image = match prepared {
            Ok(image) => image,
            Err(e) => {
                error!("Image ingest failed: {}", e);
                input.notify("Error processing image. Please try again with a different image.");
                return Err(e);
            }
        };

        let (width, height) = image.display_size;
        let id = self.place_item(
            ItemContent::Image(ImagePayload {
                data_uri: image.data_uri,
                persisted: true,
            }),
            width,
            ItemHeight::Fixed(height),
            height,
            renderer,
        );
        info!(
            %id,
            stored = format!("{}x{}", image.pixel_size.0, image.pixel_size.1),
            "Image added"
        );
        Ok(Some(id))
    }

    /// Compress and place an image synchronously.
    pub fn ingest_image_bytes(
        &mut self,
        bytes: &[u8],
        input: &mut impl InputProvider,
        renderer: &mut impl Renderer,
    ) -> BoardResult<Option<ItemId>> {
        let ticket = self.begin_image_ingest();
        let prepared = measure_and_log("prepare_image", IMAGE_PREPARE_BUDGET_MS, || {
            prepare_image(bytes, &self.settings.media)
        });
        self.complete_image_ingest(ticket, prepared, input, renderer)
    }

    /// Route a paste event: image first, then non-blank plain text.
    pub fn handle_paste(
        &mut self,
        target: PasteTarget,
        clipboard: &dyn ClipboardSource,
        input: &mut impl InputProvider,
        renderer: &mut impl Renderer,
    ) -> PasteOutcome {
        match route_paste(target, clipboard) {
            PasteRoute::Native => PasteOutcome::Native,
            PasteRoute::Ignored => PasteOutcome::Ignored,
            PasteRoute::Text(text) => PasteOutcome::Added(self.add_text_item_with(&text, renderer)),
            PasteRoute::Image { mime, bytes } => {
                info!(mime = %mime, bytes = bytes.len(), "Pasted image");
                match self.ingest_image_bytes(&bytes, input, renderer) {
                    Ok(Some(id)) => PasteOutcome::Added(id),
                    Ok(None) | Err(_) => PasteOutcome::Failed,
                }
            }
        }
    }
}
