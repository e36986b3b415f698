//! Insertion-ordered tile store keyed by grid coordinate and by tile id
//!
//! Iteration follows insertion order, which is the order the render passes
//! visit tiles. Coordinate and id lookups go through hash indexes, so removing
//! a tile never shifts the identity of another.

use std::collections::HashMap;

use crate::spatial::geometry::GridPosition;
use crate::tile::blend::NeighborLookup;
use crate::tile::record::{TileId, TileRecord};

/// Sparse collection of tiles with at most one tile per coordinate
#[derive(Debug, Clone, Default)]
pub struct GridStore<'a> {
    /// Tile ids in insertion order
    order: Vec<TileId>,
    records: HashMap<TileId, TileRecord<'a>>,
    by_position: HashMap<GridPosition, TileId>,
    next_id: TileId,
}

impl<'a> GridStore<'a> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Smallest id never handed out or stored so far
    pub const fn next_id(&self) -> TileId {
        self.next_id
    }

    /// Append a record at `(x, y)`, moving the record to that coordinate
    ///
    /// Every tile the record displaces is returned: a tile stored under the
    /// same id first, then a different tile already at `(x, y)`. A coordinate
    /// never resolves to more than one tile. The new record goes to the end
    /// of iteration order.
    pub fn add(&mut self, mut record: TileRecord<'a>, x: i32, y: i32) -> Vec<TileRecord<'a>> {
        let position = GridPosition::new(x, y);
        record.relocate(position);

        let id = record.id();
        let mut evicted: Vec<TileRecord<'a>> = self.remove_by_id(id).into_iter().collect();
        if let Some(occupant) = self.by_position.get(&position).copied() {
            tracing::trace!(x, y, evicted = occupant, "coordinate already occupied");
            evicted.extend(self.remove_by_id(occupant));
        }

        self.order.push(id);
        self.by_position.insert(position, id);
        self.records.insert(id, record);
        self.next_id = self.next_id.max(id.saturating_add(1));
        evicted
    }

    /// Tile at a coordinate
    pub fn get(&self, x: i32, y: i32) -> Option<&TileRecord<'a>> {
        self.get_at(GridPosition::new(x, y))
    }

    /// Tile at a grid position
    pub fn get_at(&self, position: GridPosition) -> Option<&TileRecord<'a>> {
        self.by_position
            .get(&position)
            .and_then(|id| self.records.get(id))
    }

    /// Mutable tile at a coordinate, for editing layers
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut TileRecord<'a>> {
        let id = self.by_position.get(&GridPosition::new(x, y))?;
        self.records.get_mut(id)
    }

    /// Tile with a given id, unaffected by earlier removals
    pub fn get_by_id(&self, id: TileId) -> Option<&TileRecord<'a>> {
        self.records.get(&id)
    }

    /// Mutable tile with a given id
    pub fn get_by_id_mut(&mut self, id: TileId) -> Option<&mut TileRecord<'a>> {
        self.records.get_mut(&id)
    }

    /// Tile at a position in iteration order
    ///
    /// Positions shift when earlier tiles are removed, so after any removal
    /// `nth(i)` is generally not the tile whose id is `i`. Use
    /// [`Self::get_by_id`] for identity.
    pub fn nth(&self, index: usize) -> Option<&TileRecord<'a>> {
        self.order
            .get(index)
            .and_then(|id| self.records.get(id))
    }

    /// Remove the tile with a given id; absent ids are ignored
    pub fn remove_by_id(&mut self, id: TileId) -> Option<TileRecord<'a>> {
        let record = self.records.remove(&id)?;
        self.order.retain(|&stored| stored != id);
        if self.by_position.get(&record.grid_position()) == Some(&id) {
            self.by_position.remove(&record.grid_position());
        }
        tracing::debug!(id, "removed tile");
        Some(record)
    }

    /// Remove the tile at a coordinate; empty coordinates are ignored
    pub fn remove_at(&mut self, x: i32, y: i32) -> Option<TileRecord<'a>> {
        let id = self.by_position.get(&GridPosition::new(x, y)).copied()?;
        self.remove_by_id(id)
    }

    /// Remove a stored record by identity; records not in the store are ignored
    pub fn remove_record(&mut self, record: &TileRecord<'a>) -> Option<TileRecord<'a>> {
        let stored = self.records.get(&record.id())?;
        if stored.grid_position() != record.grid_position() {
            return None;
        }
        self.remove_by_id(record.id())
    }

    /// Number of live tiles
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the store holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Tiles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TileRecord<'a>> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Ids in insertion order
    pub fn ids(&self) -> &[TileId] {
        &self.order
    }
}

impl<'a> NeighborLookup<'a> for GridStore<'a> {
    fn tile_at(&self, position: GridPosition) -> Option<&TileRecord<'a>> {
        self.get_at(position)
    }
}
