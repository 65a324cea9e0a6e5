//! Pointer-up handling.

use crate::app::VisionBoard;
use crate::input::GestureId;
use tracing::debug;

impl VisionBoard {
    /// End whatever gesture is active and clear the selection.
    ///
    /// Safe to call without a preceding pointer-down.
    pub fn handle_pointer_up(&mut self) -> Option<GestureId> {
        let finished = self.interaction.finish();
        if let Some(gesture) = finished {
            debug!(gesture = gesture.0, "Gesture finished");
        }
        self.selected = None;
        finished
    }
}
