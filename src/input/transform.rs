//! Wheel zoom and view reset.

use crate::app::VisionBoard;
use crate::host::Renderer;
use crate::profile_scope;
use crate::types::Point;
use crate::viewport::ZoomDirection;
use tracing::debug;

impl VisionBoard {
    /// Zoom around the cursor. Does not touch the interaction state.
    ///
    /// Returns false when the scale is already at the limit in that direction.
    pub fn handle_wheel(
        &mut self,
        screen: Point,
        delta_y: f64,
        renderer: &mut impl Renderer,
    ) -> bool {
        profile_scope!("handle_wheel");

        let direction = ZoomDirection::from_wheel_delta(delta_y);
        if !self.viewport.zoom_at(screen.x, screen.y, direction) {
            return false;
        }
        debug!(scale = self.viewport.scale(), "Zoomed");
        renderer.apply_transform(&self.viewport);
        true
    }

    /// Scale 1, reference frame centered in the window.
    pub fn reset_view(&mut self, renderer: &mut impl Renderer) {
        self.viewport.reset();
        renderer.apply_transform(&self.viewport);
    }

    /// The host window was resized.
    pub fn set_window_size(&mut self, width: f64, height: f64) {
        self.viewport.set_window_size(width, height);
    }
}
