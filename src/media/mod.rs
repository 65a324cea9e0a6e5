//! Media ingestion - turning raw image bytes into board-ready payloads.
//!
//! Image bytes arrive from the file picker or from a paste. They are
//! decoded, downscaled when too wide, re-encoded as JPEG, and wrapped in a
//! `data:` URI. The initial on-board size is computed separately and never
//! changes the stored resolution.
//!
//! ## Modules
//!
//! - `compress` - decode, downscale, re-encode, display sizing
//! - `clipboard` - deciding what a paste event should turn into

mod clipboard;
mod compress;

pub use clipboard::{PasteRoute, PasteTarget, route_paste};
pub use compress::{PreparedImage, compress_image, data_uri, display_size, prepare_image};
