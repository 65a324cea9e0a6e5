//! Keyboard shortcuts.

use super::state::Modifiers;
use crate::app::VisionBoard;
use crate::host::Renderer;
use tracing::debug;

impl VisionBoard {
    /// Handle a key press. Returns true when the host should suppress the
    /// default action.
    ///
    /// Ctrl/Cmd+D duplicates the selected item.
    pub fn handle_key_down(
        &mut self,
        key: &str,
        modifiers: Modifiers,
        renderer: &mut impl Renderer,
    ) -> bool {
        if !(modifiers.secondary() && key.eq_ignore_ascii_case("d")) {
            return false;
        }
        let Some(selected) = self.selected else {
            return false;
        };

        match self.duplicate_item(selected, renderer) {
            Ok(_) => true,
            Err(e) => {
                debug!("Duplicate shortcut ignored: {}", e);
                false
            }
        }
    }
}
