//! Spatial Index Module
//!
//! R-tree over item footprints in world coordinates. Point queries return
//! every item whose footprint contains the point; the store resolves z-order.

use crate::types::{Item, ItemId};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// A spatial entry representing an item's bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub item_id: ItemId,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl SpatialEntry {
    pub fn from_item(item: &Item) -> Self {
        let (width, height) = item.footprint();
        Self {
            item_id: item.id,
            min_x: item.position.x,
            min_y: item.position.y,
            max_x: item.position.x + width,
            max_y: item.position.y + height,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index for board items using an R-tree.
#[derive(Default)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<ItemId, SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or refresh the footprint of an item.
    pub fn upsert(&mut self, item: &Item) {
        if let Some(old_entry) = self.entries.remove(&item.id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::from_item(item);
        self.tree.insert(entry);
        self.entries.insert(item.id, entry);
    }

    pub fn remove(&mut self, item_id: ItemId) -> bool {
        if let Some(entry) = self.entries.remove(&item_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Footprint currently indexed for an item
    pub fn entry(&self, item_id: ItemId) -> Option<&SpatialEntry> {
        self.entries.get(&item_id)
    }

    /// Query all items whose footprint contains the given world point.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<ItemId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rebuild<'a, I>(&mut self, items: I)
    where
        I: Iterator<Item = &'a Item>,
    {
        let entries: Vec<SpatialEntry> = items.map(SpatialEntry::from_item).collect();

        self.entries = entries.iter().map(|e| (e.item_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }
}
