//! Per-cell tile record with its terrain base and object layer
//!
//! A record never owns pixel data: every layer points into the shared
//! [`SpriteCatalog`], which outlives the grid. Setters resolve sprites at
//! edit time so the draw passes only follow references.

use crate::io::catalog::{Sprite, SpriteCatalog};
use crate::io::configuration::DEFAULT_SHADOW_OFFSET;
use crate::spatial::geometry::{Direction, GridPosition, PixelPosition, pixel_position};
use crate::tile::hierarchy::{INITIAL_RANK, TerrainHierarchy};
use crate::tile::rules;

/// Stable identity of a tile, assigned once and never reused
pub type TileId = usize;

/// Terrain ground layer with the edge sprites it bleeds into neighbors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseLayer<'a> {
    /// Canonical terrain name (suffix stripped)
    pub name: String,
    /// Full-cell terrain sprite, if the catalog has one
    pub sprite: Option<&'a Sprite>,
    /// Edge sprites indexed by [`Direction::index`]
    pub edges: [Option<&'a Sprite>; 4],
}

impl<'a> BaseLayer<'a> {
    /// Edge sprite drawn onto a cell that finds this terrain toward `direction`
    pub fn edge(&self, direction: Direction) -> Option<&'a Sprite> {
        self.edges.get(direction.index()).copied().flatten()
    }
}

/// A named sprite slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer<'a> {
    /// Name the layer was set with (after name rules)
    pub name: String,
    /// Resolved sprite, if the catalog has one
    pub sprite: Option<&'a Sprite>,
}

/// The single object occupying a cell on top of its base
///
/// Decorations, breakables and obstacles are mutually exclusive: setting one
/// replaces whichever is present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ObjectLayer<'a> {
    /// No object
    #[default]
    Empty,
    /// Flat decoration drawn in the first pass
    Decoration(Layer<'a>),
    /// Destructible object drawn in the second pass
    Breakable(Layer<'a>),
    /// Solid shadow-casting object drawn in the third pass
    Obstacle(Layer<'a>),
}

/// One cell of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileRecord<'a> {
    id: TileId,
    grid_position: GridPosition,
    cell_size: u32,
    base: Option<BaseLayer<'a>>,
    base_rank: u8,
    object: ObjectLayer<'a>,
    shadow_offset: u32,
}

impl<'a> TileRecord<'a> {
    /// Create an empty record at a grid position
    pub const fn new(id: TileId, grid_position: GridPosition, cell_size: u32) -> Self {
        Self {
            id,
            grid_position,
            cell_size,
            base: None,
            base_rank: INITIAL_RANK,
            object: ObjectLayer::Empty,
            shadow_offset: DEFAULT_SHADOW_OFFSET,
        }
    }

    /// Stable identity
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Cell coordinate
    pub const fn grid_position(&self) -> GridPosition {
        self.grid_position
    }

    /// Top-left drawing offset, `grid_position * cell_size`
    pub const fn pixel_position(&self) -> PixelPosition {
        pixel_position(self.grid_position, self.cell_size)
    }

    /// Edge length of the cell in pixels
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub(crate) const fn relocate(&mut self, grid_position: GridPosition) {
        self.grid_position = grid_position;
    }

    /// Terrain layer, if set
    pub const fn base(&self) -> Option<&BaseLayer<'a>> {
        self.base.as_ref()
    }

    /// Canonical terrain name, if a base is set
    pub fn base_name(&self) -> Option<&str> {
        self.base.as_ref().map(|base| base.name.as_str())
    }

    /// Hierarchy rank of the terrain
    ///
    /// Unknown terrain names keep the rank of the previous base, and a
    /// record that never had a known terrain sits at [`INITIAL_RANK`].
    pub const fn base_rank(&self) -> u8 {
        self.base_rank
    }

    /// Object layer
    pub const fn object(&self) -> &ObjectLayer<'a> {
        &self.object
    }

    /// Decoration, if that is the current object
    pub const fn decoration(&self) -> Option<&Layer<'a>> {
        match &self.object {
            ObjectLayer::Decoration(layer) => Some(layer),
            _ => None,
        }
    }

    /// Breakable, if that is the current object
    pub const fn breakable(&self) -> Option<&Layer<'a>> {
        match &self.object {
            ObjectLayer::Breakable(layer) => Some(layer),
            _ => None,
        }
    }

    /// Obstacle, if that is the current object
    pub const fn obstacle(&self) -> Option<&Layer<'a>> {
        match &self.object {
            ObjectLayer::Obstacle(layer) => Some(layer),
            _ => None,
        }
    }

    /// Distance in pixels the obstacle shadow is pushed down and right
    ///
    /// Keeps its last value after the obstacle is cleared.
    pub const fn shadow_offset(&self) -> u32 {
        self.shadow_offset
    }

    /// Set the terrain base and resolve its sprite and edge sprites
    pub fn set_base(&mut self, name: &str, catalog: &'a SpriteCatalog) {
        let canonical = rules::canonical_base_name(name);
        let sprite = catalog.get(&rules::base_sprite_name(&canonical));
        let edges = Direction::ALL
            .map(|direction| catalog.get(&rules::edge_sprite_name(&canonical, direction)));

        if let Some(rank) = TerrainHierarchy::rank(&canonical) {
            self.base_rank = rank;
        } else {
            tracing::debug!(
                terrain = canonical.as_str(),
                rank = self.base_rank,
                "terrain outside hierarchy keeps previous rank"
            );
        }

        self.base = Some(BaseLayer {
            name: canonical,
            sprite,
            edges,
        });
    }

    /// Set or clear the decoration
    ///
    /// Clearing only affects a decoration; another object is left in place.
    pub fn set_decoration(&mut self, name: Option<&str>, catalog: &'a SpriteCatalog) {
        match name {
            Some(name) => {
                self.object = ObjectLayer::Decoration(Layer {
                    name: name.to_string(),
                    sprite: catalog.get(name),
                });
            }
            None => {
                if matches!(self.object, ObjectLayer::Decoration(_)) {
                    self.object = ObjectLayer::Empty;
                }
            }
        }
    }

    /// Set or clear the breakable, mapping tier aliases before lookup
    pub fn set_breakable(&mut self, name: Option<&str>, catalog: &'a SpriteCatalog) {
        match name {
            Some(name) => {
                let name = rules::breakable_sprite_name(name);
                let sprite = catalog.get(&name);
                self.object = ObjectLayer::Breakable(Layer { name, sprite });
            }
            None => {
                if matches!(self.object, ObjectLayer::Breakable(_)) {
                    self.object = ObjectLayer::Empty;
                }
            }
        }
    }

    /// Set or clear the obstacle
    ///
    /// Setting replaces any decoration or breakable and recomputes the
    /// shadow offset from the name rules. Clearing keeps the shadow offset.
    pub fn set_obstacle(&mut self, name: Option<&str>, catalog: &'a SpriteCatalog) {
        match name {
            Some(name) => {
                self.shadow_offset = rules::shadow_offset(name);
                self.object = ObjectLayer::Obstacle(Layer {
                    name: name.to_string(),
                    sprite: catalog.get(name),
                });
            }
            None => {
                if matches!(self.object, ObjectLayer::Obstacle(_)) {
                    self.object = ObjectLayer::Empty;
                }
            }
        }
    }
}
