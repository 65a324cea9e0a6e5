//! Session construction and process-level setup.

use super::VisionBoard;
use crate::input::InteractionState;
use crate::settings::Settings;
use crate::store::ItemStore;
use crate::viewport::Viewport;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`, defaulting to `visionboard=info`. Calling this more
/// than once, or after the host installed its own subscriber, is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("visionboard=info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

impl VisionBoard {
    pub fn new(settings: Settings) -> Self {
        let view = &settings.viewport;
        let viewport = Viewport::new(
            (view.window_width, view.window_height),
            (view.frame_width, view.frame_height),
        );
        info!(
            window = format!("{}x{}", view.window_width, view.window_height),
            "Board session created"
        );

        Self {
            settings,
            viewport,
            store: ItemStore::new(),
            interaction: InteractionState::default(),
            selected: None,
            gesture_counter: 0,
            ingest_epoch: 0,
        }
    }

    /// Session with settings read from the platform config directory.
    pub fn with_user_settings() -> Self {
        Self::new(Settings::load())
    }

    /// Drop selection and any in-flight gesture.
    pub(crate) fn reset_interaction(&mut self) {
        self.interaction = InteractionState::default();
        self.selected = None;
    }

    /// Invalidate outstanding ingest tickets.
    pub(crate) fn bump_epoch(&mut self) {
        self.ingest_epoch += 1;
    }
}

impl Default for VisionBoard {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
