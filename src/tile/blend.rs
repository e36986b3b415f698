//! Terrain edge blending between a tile and its four cardinal neighbors
//!
//! A neighbor whose terrain outranks the tile's own terrain bleeds its edge
//! sprite onto the tile. Ranks are strict, so of two adjacent terrains only
//! the dominant one ever spills, whichever tile is drawn first.

use crate::io::catalog::Sprite;
use crate::spatial::geometry::{Direction, GridExtent, GridPosition};
use crate::tile::record::TileRecord;

/// Source of neighboring tiles for blending
pub trait NeighborLookup<'a> {
    /// Tile at a grid position, if one is stored there
    fn tile_at(&self, position: GridPosition) -> Option<&TileRecord<'a>>;
}

/// An edge sprite to overlay onto a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spill<'a> {
    /// Side of the tile the spilling neighbor lies on
    pub direction: Direction,
    /// Neighbor edge sprite to draw at the tile's own position
    pub sprite: &'a Sprite,
}

/// Neighbor edge sprite that spills onto `tile` from `direction`, if any
///
/// All of the following must hold: the tile has a base, the neighbor's
/// terrain differs from it, the neighbor has an edge sprite for
/// `direction`, and the tile ranks strictly below the neighbor.
pub fn can_spill<'a>(
    tile: &TileRecord<'a>,
    direction: Direction,
    neighbor: &TileRecord<'a>,
) -> Option<&'a Sprite> {
    let base = tile.base()?;
    let neighbor_base = neighbor.base();

    if neighbor_base.is_some_and(|other| other.name == base.name) {
        return None;
    }
    if tile.base_rank() >= neighbor.base_rank() {
        return None;
    }
    neighbor_base.and_then(|other| other.edge(direction))
}

/// Every edge sprite to draw onto `tile`, in blend order
///
/// Directions facing off the board are never looked up, and missing
/// neighbors are skipped. A neighbor coordinate past the `i32` range counts
/// as missing.
pub fn spill_sprites<'a, L>(tile: &TileRecord<'a>, lookup: &L, extent: GridExtent) -> Vec<Spill<'a>>
where
    L: NeighborLookup<'a> + ?Sized,
{
    let position = tile.grid_position();
    Direction::SPILL_ORDER
        .iter()
        .filter(|&&direction| extent.has_neighbor(position, direction))
        .filter_map(|&direction| {
            let neighbor = lookup.tile_at(position.step(direction)?)?;
            can_spill(tile, direction, neighbor).map(|sprite| Spill { direction, sprite })
        })
        .collect()
}
