//! Pointer-move handling: item drag, item resize, canvas pan.
//!
//! Moves arrive at display refresh rate, so every branch exits early when
//! there is nothing to do.

use super::state::InteractionState;
use crate::app::VisionBoard;
use crate::constants::{MIN_RESIZE_HEIGHT, MIN_RESIZE_WIDTH};
use crate::host::Renderer;
use crate::perf::TARGET_FRAME_MS;
use crate::profile_scope;
use crate::types::{ItemHeight, ItemId, Point};
use tracing::debug;

impl VisionBoard {
    /// Apply a pointer move. Returns whether the board or view changed.
    pub fn handle_pointer_move(&mut self, screen: Point, renderer: &mut impl Renderer) -> bool {
        profile_scope!("handle_pointer_move", TARGET_FRAME_MS);

        self.interaction.promote_press();

        match self.interaction {
            InteractionState::Idle | InteractionState::ItemPressed { .. } => false,
            InteractionState::PanningCanvas { last_pos, .. } => {
                let (dx, dy) = (screen.x - last_pos.x, screen.y - last_pos.y);
                self.interaction.set_last_pos(screen);
                self.viewport.pan_by(dx, dy);
                renderer.apply_transform(&self.viewport);
                true
            }
            InteractionState::DraggingItem {
                item_id, last_pos, ..
            } => {
                self.interaction.set_last_pos(screen);
                self.drag_item(item_id, screen.x - last_pos.x, screen.y - last_pos.y, renderer)
            }
            InteractionState::ResizingItem { item_id, .. } => {
                self.resize_item(item_id, screen, renderer)
            }
        }
    }

    fn drag_item(
        &mut self,
        item_id: ItemId,
        dx: f64,
        dy: f64,
        renderer: &mut impl Renderer,
    ) -> bool {
        profile_scope!("item_drag");

        let (wx, wy) = self.viewport.screen_delta_to_world(dx, dy);
        let moved = self
            .store
            .update(item_id, |item| {
                item.position.x += wx;
                item.position.y += wy;
            })
            .ok();
        match moved {
            Some(item) => {
                renderer.update_item(item);
                true
            }
            None => self.abandon_gesture(item_id),
        }
    }

    fn resize_item(
        &mut self,
        item_id: ItemId,
        screen: Point,
        renderer: &mut impl Renderer,
    ) -> bool {
        profile_scope!("item_resize");

        let Some(item) = self.store.find_by_id(item_id).ok() else {
            return self.abandon_gesture(item_id);
        };

        let origin = self.item_screen_origin(item.position);
        let scale = self.viewport.scale();
        let width = (screen.x - origin.x).max(MIN_RESIZE_WIDTH) / scale;
        let height = item
            .kind()
            .resizes_height()
            .then(|| (screen.y - origin.y).max(MIN_RESIZE_HEIGHT) / scale);

        let resized = self
            .store
            .update(item_id, |item| {
                item.width = width;
                if let Some(h) = height {
                    item.height = ItemHeight::Fixed(h);
                }
            })
            .ok();
        match resized {
            Some(item) => {
                renderer.update_item(item);
                true
            }
            None => self.abandon_gesture(item_id),
        }
    }

    /// The gesture's item vanished underneath it.
    fn abandon_gesture(&mut self, item_id: ItemId) -> bool {
        debug!(%item_id, "Gesture target gone, returning to idle");
        self.interaction.finish();
        self.selected = None;
        false
    }
}
