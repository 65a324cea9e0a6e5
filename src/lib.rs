//! Vision board canvas core.
//!
//! Text notes, images and links placed on a pannable, zoomable surface,
//! moved and resized with the pointer, and saved to or loaded from a JSON
//! document. Drawing, prompts, the clipboard and file dialogs belong to the
//! host, which implements the traits in [`host`] and drives a
//! [`VisionBoard`] with its input events.
//!
//! - `viewport` - Scale/pan and world/screen transforms
//! - `store` - Live items, stacking order, id allocation, hit testing
//! - `input` - Pointer/wheel/keyboard state machine
//! - `media` - Image compression and paste routing
//! - `persistence` - Document codec and filesystem channel
//! - `app` - The session tying it together

pub mod app;
pub mod constants;
pub mod error;
pub mod host;
pub mod input;
pub mod media;
pub mod perf;
pub mod persistence;
pub mod settings;
pub mod spatial_index;
pub mod store;
pub mod types;
pub mod viewport;

pub use app::{IngestTicket, LoadReport, PasteOutcome, SaveReport, VisionBoard, init_logging};
pub use error::{BoardError, BoardResult};
pub use types::{ImagePayload, Item, ItemContent, ItemHeight, ItemId, ItemKind, Point};
