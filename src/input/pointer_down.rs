//! Pointer-down handling: gesture start, selection, affordance activation.

use super::state::{InteractionState, PointerTarget};
use crate::app::VisionBoard;
use crate::host::Renderer;
use crate::input::GestureId;
use crate::profile_scope;
use crate::types::Point;
use tracing::{debug, warn};

impl VisionBoard {
    /// Start a gesture at `screen` on `target`.
    ///
    /// Returns the new gesture token, or `None` when the press activated an
    /// affordance (delete/duplicate) or hit nothing usable.
    pub fn handle_pointer_down(
        &mut self,
        screen: Point,
        target: PointerTarget,
        renderer: &mut impl Renderer,
    ) -> Option<GestureId> {
        profile_scope!("handle_pointer_down");

        // A previous gesture never saw its pointer-up
        if let Some(stale) = self.interaction.finish() {
            warn!(gesture = stale.0, "Pointer down during an active gesture, resetting");
            self.selected = None;
        }

        match target {
            PointerTarget::Canvas => {
                let gesture = self.next_gesture();
                self.interaction = InteractionState::PanningCanvas {
                    gesture,
                    last_pos: screen,
                };
                debug!(gesture = gesture.0, "Pan started");
                Some(gesture)
            }
            PointerTarget::Item(item_id) => {
                if !self.store.contains(item_id) {
                    debug!(%item_id, "Pointer down on unknown item ignored");
                    return None;
                }
                let gesture = self.next_gesture();
                self.selected = Some(item_id);
                if self.store.bring_to_front(item_id) {
                    renderer.raise_item(item_id);
                }
                self.interaction = InteractionState::ItemPressed {
                    gesture,
                    item_id,
                    last_pos: screen,
                };
                debug!(gesture = gesture.0, %item_id, "Item pressed");
                Some(gesture)
            }
            PointerTarget::ResizeHandle(item_id) => {
                if !self.store.contains(item_id) {
                    debug!(%item_id, "Resize on unknown item ignored");
                    return None;
                }
                let gesture = self.next_gesture();
                self.selected = Some(item_id);
                self.interaction = InteractionState::ResizingItem { gesture, item_id };
                debug!(gesture = gesture.0, %item_id, "Resize started");
                Some(gesture)
            }
            PointerTarget::DeleteButton(item_id) => {
                self.delete_item(item_id, renderer);
                None
            }
            PointerTarget::DuplicateButton(item_id) => {
                if let Err(e) = self.duplicate_item(item_id, renderer) {
                    debug!(%item_id, "Duplicate ignored: {}", e);
                }
                None
            }
        }
    }

    fn next_gesture(&mut self) -> GestureId {
        self.gesture_counter += 1;
        GestureId(self.gesture_counter)
    }
}
