//! Command-line interface: build a board, apply edits, render frames to PNG

use crate::io::catalog::SpriteCatalog;
use crate::io::configuration::{
    BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_BASE, DEFAULT_FRAMES, DEFAULT_OUTPUT, HIGHLIGHT_COLOR,
    TILE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_canvas_as_png;
use crate::io::progress::FrameProgress;
use crate::render::canvas::FrameCanvas;
use crate::spatial::geometry::{GridGeometry, GridPosition};
use crate::world::context::World;
use crate::world::edit::TileEdit;
use clap::Parser;
use image::Rgba;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spillgrid")]
#[command(
    author,
    version,
    about = "Render a layered tile board with terrain edge blending"
)]
/// Command-line arguments for the board renderer
pub struct Cli {
    /// Directory of sprite PNGs (subdirectories are loaded as animations)
    #[arg(short, long, value_name = "DIR")]
    pub sprites: PathBuf,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Terrain painted on every cell before edits
    #[arg(short, long, default_value = DEFAULT_BASE)]
    pub base: String,

    /// Tile edit, e.g. `base=water@3,4`, `obstacle=treeBL@5,5`, `decoration=-@5,5`, `remove@2,2`
    #[arg(short, long = "edit", value_name = "EDIT")]
    pub edits: Vec<TileEdit>,

    /// Outline a cell after rendering, as `x,y`
    #[arg(long = "highlight", value_name = "X,Y", value_parser = parse_grid_position)]
    pub highlights: Vec<GridPosition>,

    /// Number of frames to render
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    pub frames: usize,

    /// Cell edge length in pixels
    #[arg(long, default_value_t = TILE_SIZE)]
    pub cell_size: u32,

    /// Board width in pixels
    #[arg(long, default_value_t = BOARD_WIDTH)]
    pub board_width: u32,

    /// Board height in pixels
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    pub board_height: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Board geometry described by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the cell size is zero
    pub fn geometry(&self) -> Result<GridGeometry> {
        GridGeometry::new(self.cell_size, self.board_width, self.board_height)
    }
}

/// Parse `x,y` into a grid position
///
/// # Errors
///
/// Returns an error if either coordinate is missing or not an integer
pub fn parse_grid_position(text: &str) -> Result<GridPosition> {
    let reason = "expected 'x,y' with integer coordinates";
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| invalid_parameter("highlight", &text, &reason))?;
    let x = x
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid_parameter("highlight", &text, &e))?;
    let y = y
        .trim()
        .parse::<i32>()
        .map_err(|e| invalid_parameter("highlight", &text, &e))?;
    Ok(GridPosition::new(x, y))
}

/// Runs one render session described by the command line
pub struct Session {
    cli: Cli,
}

impl Session {
    /// Create a session from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load sprites, build and edit the board, render and export
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry is invalid, the sprite directory
    /// cannot be loaded or the frame cannot be written
    pub fn run(&self) -> Result<FrameCanvas> {
        let geometry = self.cli.geometry()?;
        let catalog = SpriteCatalog::from_dir(&self.cli.sprites)?;

        let canvas = self.render(&catalog, geometry);
        export_canvas_as_png(&canvas, &self.cli.output)?;
        Ok(canvas)
    }

    /// Build, edit and render the board against an already loaded catalog
    pub fn render(&self, catalog: &SpriteCatalog, geometry: GridGeometry) -> FrameCanvas {
        let mut world = World::new(catalog, geometry);
        world.fill_base(&self.cli.base);

        for edit in &self.cli.edits {
            if !world.apply(edit) {
                tracing::warn!(
                    x = edit.position.x,
                    y = edit.position.y,
                    "edit targets a cell with no tile"
                );
            }
        }

        let mut canvas = world.canvas();
        let progress = FrameProgress::new(self.cli.frames, self.cli.quiet);
        for _ in 0..self.cli.frames {
            canvas.clear();
            world.render_frame(&mut canvas);
            progress.tick();
        }
        progress.finish();

        for &position in &self.cli.highlights {
            if !world.highlight(position, Rgba(HIGHLIGHT_COLOR), &mut canvas) {
                tracing::warn!(x = position.x, y = position.y, "no tile to highlight");
            }
        }

        canvas
    }
}
