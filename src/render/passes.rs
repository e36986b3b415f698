//! The three per-tile draw passes and their whole-grid ordering
//!
//! Each pass runs over every tile before the next pass starts. Shadows are
//! all drawn in the second pass and solid obstacles only in the third, so a
//! neighbor's shadow can never cover an obstacle.

use image::Rgba;

use crate::render::canvas::{Canvas, Tint};
use crate::spatial::geometry::GridExtent;
use crate::tile::blend::{NeighborLookup, spill_sprites};
use crate::tile::record::TileRecord;

/// One full-grid draw pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPass {
    /// Terrain base, blended neighbor edges, then decoration
    BaseAndDecoration,
    /// Breakable, then the obstacle's drop shadow
    BreakableAndShadow,
    /// Obstacle at full opacity
    Obstacle,
}

impl RenderPass {
    /// Passes in the order a frame must run them
    pub const ORDER: [Self; 3] = [
        Self::BaseAndDecoration,
        Self::BreakableAndShadow,
        Self::Obstacle,
    ];
}

impl<'a> TileRecord<'a> {
    /// Run one pass for this tile
    pub fn draw_pass<C, L>(&self, pass: RenderPass, canvas: &mut C, lookup: &L, extent: GridExtent)
    where
        C: Canvas + ?Sized,
        L: NeighborLookup<'a> + ?Sized,
    {
        match pass {
            RenderPass::BaseAndDecoration => self.draw_base_and_decoration(canvas, lookup, extent),
            RenderPass::BreakableAndShadow => self.draw_breakable_and_shadow(canvas),
            RenderPass::Obstacle => self.draw_obstacle(canvas),
        }
    }

    /// First pass: base sprite, neighbor edge blends, decoration
    pub fn draw_base_and_decoration<C, L>(&self, canvas: &mut C, lookup: &L, extent: GridExtent)
    where
        C: Canvas + ?Sized,
        L: NeighborLookup<'a> + ?Sized,
    {
        let at = self.pixel_position();
        if let Some(sprite) = self.base().and_then(|base| base.sprite) {
            canvas.draw_sprite(sprite, at, Tint::NONE);
        }
        for spill in spill_sprites(self, lookup, extent) {
            canvas.draw_sprite(spill.sprite, at, Tint::NONE);
        }
        if let Some(sprite) = self.decoration().and_then(|layer| layer.sprite) {
            canvas.draw_sprite(sprite, at, Tint::NONE);
        }
    }

    /// Second pass: breakable, then a faded copy of the obstacle offset down and right
    pub fn draw_breakable_and_shadow<C>(&self, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        let at = self.pixel_position();
        if let Some(sprite) = self.breakable().and_then(|layer| layer.sprite) {
            canvas.draw_sprite(sprite, at, Tint::NONE);
        }
        if let Some(sprite) = self.obstacle().and_then(|layer| layer.sprite) {
            canvas.draw_sprite(
                sprite,
                at.offset_diagonal(self.shadow_offset()),
                Tint::shadow(),
            );
        }
    }

    /// Third pass: obstacle at full opacity
    pub fn draw_obstacle<C>(&self, canvas: &mut C)
    where
        C: Canvas + ?Sized,
    {
        if let Some(sprite) = self.obstacle().and_then(|layer| layer.sprite) {
            canvas.draw_sprite(sprite, self.pixel_position(), Tint::NONE);
        }
    }

    /// Outline the cell bounds, for editing and debug overlays
    pub fn highlight<C>(&self, canvas: &mut C, color: Rgba<u8>)
    where
        C: Canvas + ?Sized,
    {
        canvas.stroke_rect(self.pixel_position(), self.cell_size(), color);
    }
}
