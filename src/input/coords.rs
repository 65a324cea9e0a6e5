//! Screen-space hit resolution for hosts that do not track item nodes.

use super::state::PointerTarget;
use crate::app::VisionBoard;
use crate::types::Point;

impl VisionBoard {
    /// Classify a screen position as canvas, item body or resize handle.
    ///
    /// Delete and duplicate affordances are drawn by the renderer, so hosts
    /// report those targets directly.
    pub fn resolve_target(&self, screen: Point) -> PointerTarget {
        let world = self.viewport.screen_to_world(screen);
        self.store.hit_test(world, self.viewport.scale()).into()
    }

    /// Screen position of an item's top-left corner.
    pub(crate) fn item_screen_origin(&self, world: Point) -> Point {
        self.viewport.world_to_screen(world)
    }
}
