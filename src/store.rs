//! Item store - the live set of board items and id allocation.
//!
//! Items are kept in insertion order (the order `iter` yields and the order
//! they are saved in). Visual stacking order is tracked separately so that
//! bringing an item to the front does not reorder the saved document.

use crate::constants::{DUPLICATE_OFFSET, RESIZE_HANDLE_SIZE};
use crate::error::{BoardError, BoardResult};
use crate::spatial_index::SpatialIndex;
use crate::types::{Item, ItemContent, ItemId, Point};
use tracing::debug;

/// What lies under a world-space point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The item's body
    Item(ItemId),
    /// The item's bottom-right resize corner
    ResizeHandle(ItemId),
}

/// Owns the board items, their stacking order and the id counter.
pub struct ItemStore {
    items: Vec<Item>,
    /// Back to front
    stacking: Vec<ItemId>,
    next_id: u64,
    index: SpatialIndex,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            stacking: Vec::new(),
            next_id: 1,
            index: SpatialIndex::new(),
        }
    }

    /// The id the next allocation will return
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Hand out the next id. Ids are never reused until `clear`.
    pub fn allocate_id(&mut self) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an item on top of the stacking order.
    pub fn add(&mut self, item: Item) -> &Item {
        debug_assert!(
            self.position(item.id).is_none(),
            "item {} already on the board",
            item.id
        );
        debug!(id = %item.id, kind = item.kind().label(), "Item added");
        self.index.upsert(&item);
        self.stacking.push(item.id);
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// Remove an item. Absent ids are a no-op.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let pos = self.position(id)?;
        self.stacking.retain(|&s| s != id);
        self.index.remove(id);
        debug!(%id, "Item removed");
        Some(self.items.remove(pos))
    }

    pub fn find_by_id(&self, id: ItemId) -> BoardResult<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(BoardError::NotFound(id))
    }

    pub fn find_mut(&mut self, id: ItemId) -> BoardResult<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(BoardError::NotFound(id))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.position(id).is_some()
    }

    /// Items in insertion order. The iterator is cheap to clone and restart.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply a mutation to an item and refresh its footprint in the hit-test index.
    pub fn update<F>(&mut self, id: ItemId, f: F) -> BoardResult<&Item>
    where
        F: FnOnce(&mut Item),
    {
        let pos = self.position(id).ok_or(BoardError::NotFound(id))?;
        let item = &mut self.items[pos];
        f(item);
        self.index.upsert(item);
        Ok(&self.items[pos])
    }

    /// Replace the rich-text content of a text item. Other kinds are left alone.
    pub fn set_text(&mut self, id: ItemId, html: impl Into<String>) -> BoardResult<()> {
        let item = self.find_mut(id)?;
        if let ItemContent::Text { html: current } = &mut item.content {
            *current = html.into();
        }
        Ok(())
    }

    /// Deep-copy an item under a fresh id, nudged by the duplicate offset.
    pub fn duplicate(&mut self, id: ItemId) -> BoardResult<&Item> {
        let mut copy = self.find_by_id(id)?.clone();
        copy.id = self.allocate_id();
        copy.position = Point::new(
            copy.position.x + DUPLICATE_OFFSET.0,
            copy.position.y + DUPLICATE_OFFSET.1,
        );
        debug!(source = %id, copy = %copy.id, "Item duplicated");
        Ok(self.add(copy))
    }

    /// Move an item to the top of the stacking order.
    pub fn bring_to_front(&mut self, id: ItemId) -> bool {
        let Some(pos) = self.stacking.iter().position(|&s| s == id) else {
            return false;
        };
        let id = self.stacking.remove(pos);
        self.stacking.push(id);
        true
    }

    /// Stacking order, back to front
    pub fn stacking_order(&self) -> &[ItemId] {
        &self.stacking
    }

    /// Find the top-most item at a world point.
    ///
    /// `scale` converts the screen-sized resize corner into world units.
    pub fn hit_test(&self, world: Point, scale: f64) -> Option<HitTarget> {
        let candidates = self.index.query_point(world.x, world.y);
        if candidates.is_empty() {
            return None;
        }

        let id = *self
            .stacking
            .iter()
            .rev()
            .find(|id| candidates.contains(id))?;

        let entry = self.index.entry(id)?;
        let handle = RESIZE_HANDLE_SIZE / scale;
        if world.x >= entry.max_x - handle && world.y >= entry.max_y - handle {
            Some(HitTarget::ResizeHandle(id))
        } else {
            Some(HitTarget::Item(id))
        }
    }

    /// Empty the board and restart id allocation at 1.
    pub fn clear(&mut self) {
        self.items.clear();
        self.stacking.clear();
        self.index.clear();
        self.next_id = 1;
    }

    /// Swap in a whole new item set, e.g. from a loaded document.
    pub fn replace_all(&mut self, items: Vec<Item>, next_id: u64) {
        self.stacking = items.iter().map(|item| item.id).collect();
        self.index.rebuild(items.iter());
        self.items = items;
        self.next_id = next_id.max(1);
    }

    fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }
}
