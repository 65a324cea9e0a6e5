//! Interaction state machine.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> PanningCanvas      (pointer down on empty canvas)
//! Idle -> ItemPressed        (pointer down on an item body)
//! ItemPressed -> DraggingItem (first pointer move while pressed)
//! Idle -> ResizingItem       (pointer down on an item's resize handle)
//!
//! Any -> Idle                (pointer up, also clears the selection)
//! ```
//!
//! Every gesture carries its own [`GestureId`], and moves are applied to the
//! item the gesture recorded at pointer-down rather than to whatever happens
//! to be selected when the move arrives.

use crate::store::HitTarget;
use crate::types::{ItemId, Point};

/// Token identifying one pointer-down..pointer-up sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GestureId(pub u64);

/// Full interaction state, including gesture bookkeeping.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// No pointer held
    #[default]
    Idle,

    /// Pointer held on an item body, no movement yet
    ItemPressed {
        gesture: GestureId,
        item_id: ItemId,
        /// Screen position of the press
        last_pos: Point,
    },

    /// Dragging the background to pan
    PanningCanvas {
        gesture: GestureId,
        /// Last pointer position for delta calculation
        last_pos: Point,
    },

    /// Moving an item
    DraggingItem {
        gesture: GestureId,
        item_id: ItemId,
        last_pos: Point,
    },

    /// Dragging an item's resize handle
    ResizingItem { gesture: GestureId, item_id: ItemId },
}

/// Observable interaction mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    PanningCanvas,
    DraggingItem,
    ResizingItem,
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Empty board background
    Canvas,
    /// An item body
    Item(ItemId),
    /// An item's resize corner
    ResizeHandle(ItemId),
    /// An item's delete affordance
    DeleteButton(ItemId),
    /// An item's duplicate affordance
    DuplicateButton(ItemId),
}

impl From<Option<HitTarget>> for PointerTarget {
    fn from(hit: Option<HitTarget>) -> Self {
        match hit {
            Some(HitTarget::Item(id)) => PointerTarget::Item(id),
            Some(HitTarget::ResizeHandle(id)) => PointerTarget::ResizeHandle(id),
            None => PointerTarget::Canvas,
        }
    }
}

/// Keyboard modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub control: bool,
    /// Command on macOS, Windows key elsewhere
    pub platform: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Control or Command, whichever the platform uses for shortcuts
    pub fn secondary(&self) -> bool {
        self.control || self.platform
    }
}

impl InteractionState {
    /// The mode a host should observe. A press that has not moved yet is `Idle`.
    pub fn mode(&self) -> InteractionMode {
        match self {
            Self::Idle | Self::ItemPressed { .. } => InteractionMode::Idle,
            Self::PanningCanvas { .. } => InteractionMode::PanningCanvas,
            Self::DraggingItem { .. } => InteractionMode::DraggingItem,
            Self::ResizingItem { .. } => InteractionMode::ResizingItem,
        }
    }

    /// Active gesture, if the pointer is down
    pub fn gesture(&self) -> Option<GestureId> {
        match self {
            Self::Idle => None,
            Self::ItemPressed { gesture, .. }
            | Self::PanningCanvas { gesture, .. }
            | Self::DraggingItem { gesture, .. }
            | Self::ResizingItem { gesture, .. } => Some(*gesture),
        }
    }

    /// Item the active gesture operates on
    pub fn target_item(&self) -> Option<ItemId> {
        match self {
            Self::ItemPressed { item_id, .. }
            | Self::DraggingItem { item_id, .. }
            | Self::ResizingItem { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::PanningCanvas { .. })
    }

    pub fn is_dragging_item(&self) -> bool {
        matches!(self, Self::DraggingItem { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::ResizingItem { .. })
    }

    /// Record the latest pointer position for delta-tracking states.
    pub(crate) fn set_last_pos(&mut self, pos: Point) {
        match self {
            Self::ItemPressed { last_pos, .. }
            | Self::PanningCanvas { last_pos, .. }
            | Self::DraggingItem { last_pos, .. } => *last_pos = pos,
            _ => {}
        }
    }

    /// Promote a press into a drag once the pointer moves.
    pub(crate) fn promote_press(&mut self) {
        if let Self::ItemPressed {
            gesture,
            item_id,
            last_pos,
        } = *self
        {
            *self = Self::DraggingItem {
                gesture,
                item_id,
                last_pos,
            };
        }
    }

    /// Return to idle, handing back the gesture that ended.
    pub(crate) fn finish(&mut self) -> Option<GestureId> {
        let gesture = self.gesture();
        *self = Self::Idle;
        gesture
    }
}
