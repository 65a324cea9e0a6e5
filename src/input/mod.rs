//! Pointer, wheel and keyboard input for the board.
//!
//! ## Architecture
//!
//! The input system is an explicit state machine (`InteractionState`) owned
//! by the session. Handlers live in `impl VisionBoard` blocks split by event
//! kind, and take the host renderer as a parameter so the core never holds
//! on to it.
//!
//! ## Modules
//!
//! - `state` - State machine enum, gesture tokens, pointer targets
//! - `coords` - Screen position to pointer target
//! - `pointer_down` - Gesture start, selection, delete/duplicate affordances
//! - `drag` - Pointer move (item drag, item resize, canvas pan)
//! - `pointer_up` - Gesture end
//! - `transform` - Wheel zoom and view reset
//! - `keyboard` - Shortcuts

mod coords;
mod drag;
mod keyboard;
mod pointer_down;
mod pointer_up;
mod state;
mod transform;

pub use state::{GestureId, InteractionMode, InteractionState, Modifiers, PointerTarget};
