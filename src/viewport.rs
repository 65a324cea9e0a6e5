//! Viewport - scale/pan state and world <-> screen transforms.
//!
//! The composed transform is "translate then scale":
//!
//! ```text
//! screen = scale * (world + pan)
//! world  = screen / scale - pan
//! ```
//!
//! Pan is therefore stored in pre-scale (world) units, which is why pointer
//! deltas are divided by `scale` before they are added to it.

use crate::constants::{
    DEFAULT_SCALE, DEFAULT_WINDOW_SIZE, MAX_SCALE, MIN_SCALE, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR,
};
use crate::types::Point;

/// Which way a wheel notch zooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Map a wheel delta to a zoom direction (positive delta scrolls away, zooming out).
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y > 0.0 { Self::Out } else { Self::In }
    }

    fn factor(self) -> f64 {
        match self {
            Self::In => ZOOM_IN_FACTOR,
            Self::Out => ZOOM_OUT_FACTOR,
        }
    }
}

/// Pan/zoom state of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    pan: Point,
    /// Size of the viewing surface in screen pixels
    window: (f64, f64),
    /// Size of the reference content frame centered by `reset`
    frame: (f64, f64),
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SIZE, (0.0, 0.0))
    }
}

impl Viewport {
    /// Create a viewport centered on the content frame.
    pub fn new(window: (f64, f64), frame: (f64, f64)) -> Self {
        let mut viewport = Self {
            scale: DEFAULT_SCALE,
            pan: Point::default(),
            window,
            frame,
        };
        viewport.reset();
        viewport
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn window_size(&self) -> (f64, f64) {
        self.window
    }

    pub fn set_window_size(&mut self, width: f64, height: f64) {
        self.window = (width, height);
    }

    pub fn set_frame_size(&mut self, width: f64, height: f64) {
        self.frame = (width, height);
    }

    /// Set scale and pan directly. Scale is clamped to the zoom limits.
    pub fn set_transform(&mut self, scale: f64, pan: Point) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        self.pan = pan;
    }

    /// Convert a screen position to world coordinates.
    #[inline]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            screen.x / self.scale - self.pan.x,
            screen.y / self.scale - self.pan.y,
        )
    }

    /// Convert a world position to screen coordinates.
    #[inline]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(
            self.scale * (world.x + self.pan.x),
            self.scale * (world.y + self.pan.y),
        )
    }

    /// Convert a screen-space delta to a world-space delta.
    #[inline]
    pub fn screen_delta_to_world(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx / self.scale, dy / self.scale)
    }

    /// Pan by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let (wx, wy) = self.screen_delta_to_world(dx, dy);
        self.pan.x += wx;
        self.pan.y += wy;
    }

    /// Zoom one step around a screen point, keeping the world point under it fixed.
    ///
    /// Returns false when the scale was already pinned at a limit and nothing changed.
    pub fn zoom_at(&mut self, screen_x: f64, screen_y: f64, direction: ZoomDirection) -> bool {
        let anchor = self.screen_to_world(Point::new(screen_x, screen_y));

        let new_scale = (self.scale * direction.factor()).clamp(MIN_SCALE, MAX_SCALE);
        if new_scale == self.scale {
            return false;
        }
        self.scale = new_scale;

        // Back-solve pan with the new scale so `anchor` maps to the same screen point.
        self.pan.x = -(anchor.x - screen_x / self.scale);
        self.pan.y = -(anchor.y - screen_y / self.scale);
        true
    }

    /// Reset to scale 1 with the content frame centered in the window.
    pub fn reset(&mut self) {
        self.scale = DEFAULT_SCALE;
        self.pan = Point::new(
            self.window.0 / 2.0 - self.frame.0 / 2.0,
            self.window.1 / 2.0 - self.frame.1 / 2.0,
        );
    }

    /// World position for a new item so it appears centered in the visible window.
    pub fn initial_placement(&self, item_width: f64, item_height: f64) -> Point {
        let center = self.screen_to_world(Point::new(self.window.0 / 2.0, self.window.1 / 2.0));
        Point::new(center.x - item_width / 2.0, center.y - item_height / 2.0)
    }
}
