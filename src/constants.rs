//! Board-wide constants.
//!
//! Centralizes magic numbers for the viewport, item geometry, media
//! ingestion and persistence so the rest of the crate reads by name.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_SCALE: f64 = 0.1;

/// Maximum zoom level
pub const MAX_SCALE: f64 = 5.0;

/// Default zoom level
pub const DEFAULT_SCALE: f64 = 1.0;

/// Scale multiplier for one wheel notch towards the user
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Scale multiplier for one wheel notch away from the user
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

/// Window size assumed until the host reports the real one
pub const DEFAULT_WINDOW_SIZE: (f64, f64) = (1280.0, 800.0);

// ============================================================================
// Item Defaults
// ============================================================================

/// Default width for new text and link items
pub const DEFAULT_ITEM_WIDTH: f64 = 200.0;

/// Footprint height assumed for an auto-height text item
pub const AUTO_TEXT_HEIGHT: f64 = 100.0;

/// Footprint height assumed for an auto-height link item
pub const AUTO_LINK_HEIGHT: f64 = 50.0;

/// World-space nudge applied to duplicated items
pub const DUPLICATE_OFFSET: (f64, f64) = (20.0, 20.0);

// ============================================================================
// Input Handling
// ============================================================================

/// Resize floor for width, in screen pixels
pub const MIN_RESIZE_WIDTH: f64 = 100.0;

/// Resize floor for height, in screen pixels
pub const MIN_RESIZE_HEIGHT: f64 = 50.0;

/// Size of the resize corner area in screen pixels
pub const RESIZE_HANDLE_SIZE: f64 = 16.0;

// ============================================================================
// Media Ingestion
// ============================================================================

/// Images wider than this are downscaled before storage
pub const MAX_COMPRESSED_WIDTH: u32 = 800;

/// Lossy re-encode quality (0-100)
pub const JPEG_QUALITY: u8 = 70;

/// Bounding box for the initial on-board size of an image
pub const MAX_DISPLAY_SIZE: f64 = 300.0;

/// MIME type of the re-encoded image payload
pub const COMPRESSED_MIME: &str = "image/jpeg";

/// Decode + compress slower than this is logged
pub const IMAGE_PREPARE_BUDGET_MS: f64 = 250.0;

// ============================================================================
// Persistence
// ============================================================================

/// Document format version written on save
pub const DOCUMENT_VERSION: &str = "1.0";

/// Saves larger than this ask the user before continuing
pub const LARGE_SAVE_WARNING_BYTES: usize = 5000 * 1024;

/// Prefix for exported board file names
pub const EXPORT_PREFIX: &str = "vision_board_";

/// CSS classes of the control affordances the renderer injects into text items
pub const CONTROL_AFFORDANCE_CLASSES: [&str; 3] =
    ["delete-button", "duplicate-button", "resize-handle"];
