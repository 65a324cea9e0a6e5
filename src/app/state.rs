//! Session state - the VisionBoard struct.

use crate::input::{InteractionMode, InteractionState};
use crate::settings::Settings;
use crate::store::ItemStore;
use crate::types::ItemId;
use crate::viewport::Viewport;

/// One open board: view transform, items, selection and input state.
///
/// All mutation happens through `&mut self` on the host's event thread.
/// The only latent work, image compression, re-enters through
/// [`VisionBoard::complete_image_ingest`] with an [`IngestTicket`].
pub struct VisionBoard {
    pub(crate) settings: Settings,
    pub(crate) viewport: Viewport,
    pub(crate) store: ItemStore,
    /// Input state machine
    pub(crate) interaction: InteractionState,
    /// At most one selected item
    pub(crate) selected: Option<ItemId>,
    pub(crate) gesture_counter: u64,
    /// Bumped whenever the item set is replaced wholesale
    pub(crate) ingest_epoch: u64,
}

/// Token handed out when an image ingest starts.
///
/// A completion whose ticket predates the latest clear or load is discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestTicket {
    pub(crate) epoch: u64,
}

impl VisionBoard {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    /// Direct store access for hosts that edit items outside a gesture.
    /// Changes made here are not drawn; call the renderer yourself.
    pub fn store_mut(&mut self) -> &mut ItemStore {
        &mut self.store
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Whether a ticket is still valid for the current board.
    pub fn is_ticket_current(&self, ticket: IngestTicket) -> bool {
        ticket.epoch == self.ingest_epoch
    }
}
