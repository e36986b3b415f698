//! Board context owning the tile store and borrowing the sprite catalog
//!
//! Every component reaches the grid and the catalog through a [`World`]
//! instead of shared globals. The orchestrator drives frames through
//! [`World::render_frame`] and edits through [`World::apply`].

use image::Rgba;

use crate::io::catalog::SpriteCatalog;
use crate::render::canvas::{Canvas, FrameCanvas};
use crate::render::passes::RenderPass;
use crate::spatial::geometry::{GridExtent, GridGeometry, GridPosition};
use crate::spatial::grid::GridStore;
use crate::tile::record::TileRecord;
use crate::world::edit::{EditAction, TileEdit};

/// The board: geometry, tiles and the catalog their sprites come from
#[derive(Debug, Clone)]
pub struct World<'a> {
    catalog: &'a SpriteCatalog,
    geometry: GridGeometry,
    tiles: GridStore<'a>,
}

impl<'a> World<'a> {
    /// Create a board with one empty tile per cell of the geometry
    ///
    /// Tiles are added row by row, so a tile's id is its setup index.
    pub fn new(catalog: &'a SpriteCatalog, geometry: GridGeometry) -> Self {
        let mut tiles = GridStore::new();
        for position in geometry.cells() {
            let record = TileRecord::new(tiles.next_id(), position, geometry.cell_size);
            tiles.add(record, position.x, position.y);
        }
        tracing::info!(
            columns = geometry.columns() + 1,
            rows = geometry.rows() + 1,
            tiles = tiles.len(),
            "board populated"
        );

        Self {
            catalog,
            geometry,
            tiles,
        }
    }

    /// Catalog sprites are resolved from
    pub const fn catalog(&self) -> &'a SpriteCatalog {
        self.catalog
    }

    /// Board geometry
    pub const fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Inclusive grid bounds used for neighbor lookups
    pub const fn extent(&self) -> GridExtent {
        self.geometry.extent()
    }

    /// Tile store
    pub const fn tiles(&self) -> &GridStore<'a> {
        &self.tiles
    }

    /// Mutable tile store
    pub const fn tiles_mut(&mut self) -> &mut GridStore<'a> {
        &mut self.tiles
    }

    /// Canvas sized to the whole board
    pub fn canvas(&self) -> FrameCanvas {
        let (width, height) = self.geometry.canvas_dimensions();
        FrameCanvas::new(width, height)
    }

    /// Set the same terrain base on every tile
    pub fn fill_base(&mut self, name: &str) {
        let catalog = self.catalog;
        let ids = self.tiles.ids().to_vec();
        for id in ids {
            if let Some(tile) = self.tiles.get_by_id_mut(id) {
                tile.set_base(name, catalog);
            }
        }
    }

    /// Apply an edit; returns `false` when no tile exists at the target
    pub fn apply(&mut self, edit: &TileEdit) -> bool {
        let GridPosition { x, y } = edit.position;
        tracing::debug!(x, y, action = ?edit.action, "applying edit");

        match &edit.action {
            EditAction::Add => {
                let record =
                    TileRecord::new(self.tiles.next_id(), edit.position, self.geometry.cell_size);
                self.tiles.add(record, x, y);
                true
            }
            EditAction::Remove => self.tiles.remove_at(x, y).is_some(),
            action => {
                let catalog = self.catalog;
                let Some(tile) = self.tiles.get_mut(x, y) else {
                    return false;
                };
                match action {
                    EditAction::SetBase(name) => tile.set_base(name, catalog),
                    EditAction::SetDecoration(name) => tile.set_decoration(name.as_deref(), catalog),
                    EditAction::SetBreakable(name) => tile.set_breakable(name.as_deref(), catalog),
                    EditAction::SetObstacle(name) => tile.set_obstacle(name.as_deref(), catalog),
                    EditAction::Add | EditAction::Remove => {}
                }
                true
            }
        }
    }

    /// Run one pass over every tile in store order
    pub fn render_pass<C>(&self, pass: RenderPass, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        let extent = self.extent();
        for tile in self.tiles.iter() {
            tile.draw_pass(pass, canvas, &self.tiles, extent);
        }
    }

    /// Render a frame: each pass over the whole grid before the next begins
    pub fn render_frame<C>(&self, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        for pass in RenderPass::ORDER {
            self.render_pass(pass, canvas);
        }
    }

    /// Outline a cell; returns `false` when no tile exists there
    pub fn highlight<C>(&self, position: GridPosition, color: Rgba<u8>, canvas: &mut C) -> bool
    where
        C: Canvas + ?Sized,
    {
        self.tiles.get_at(position).is_some_and(|tile| {
            tile.highlight(canvas, color);
            true
        })
    }
}
