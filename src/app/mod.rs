//! Application module - the board session and its user-facing commands.
//!
//! - `state` - The VisionBoard struct and accessors
//! - `lifecycle` - Construction and logging setup
//! - `board_management` - Add, edit, delete, duplicate, clear
//! - `ingest` - Image upload and paste
//! - `save_load` - Save and load through the host file channel
//!
//! Pointer, wheel and keyboard handlers live in `crate::input`.

mod board_management;
mod ingest;
mod lifecycle;
mod save_load;
mod state;

pub use ingest::PasteOutcome;
pub use lifecycle::init_logging;
pub use save_load::{LoadReport, SaveReport};
pub use state::{IngestTicket, VisionBoard};
