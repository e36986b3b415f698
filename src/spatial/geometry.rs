//! Grid coordinates, pixel coordinates and the fixed board extent
//!
//! Grid coordinates address cells; pixel coordinates are only used as drawing
//! offsets and are always derived as `grid * cell_size`.

use crate::io::configuration::{BOARD_HEIGHT, BOARD_WIDTH, TILE_SIZE};
use crate::io::error::{Result, invalid_parameter};

/// Integer cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl GridPosition {
    /// Create a grid position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell in the given direction, `None` past the `i32` range
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }
}

/// Top-left pixel of a cell on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelPosition {
    /// Horizontal offset in pixels
    pub x: i64,
    /// Vertical offset in pixels
    pub y: i64,
}

impl PixelPosition {
    /// Create a pixel position
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift down and to the right by the same distance
    pub const fn offset_diagonal(self, distance: u32) -> Self {
        Self {
            x: self.x + distance as i64,
            y: self.y + distance as i64,
        }
    }
}

/// Cardinal direction; the discriminant is the edge sprite index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller `y`
    North = 0,
    /// Toward larger `x`
    East = 1,
    /// Toward larger `y`
    South = 2,
    /// Toward smaller `x`
    West = 3,
}

impl Direction {
    /// All directions in edge index order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Order in which neighbors are blended onto a cell
    pub const SPILL_ORDER: [Self; 4] = [Self::North, Self::West, Self::South, Self::East];

    /// Index into a four-slot edge sprite array
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Unit step `(dx, dy)` toward the neighbor in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

/// Inclusive bounds of the populated board in grid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtent {
    /// Last column index
    pub max_x: i32,
    /// Last row index
    pub max_y: i32,
}

impl GridExtent {
    /// Whether a cell lies inside the board
    pub const fn contains(&self, position: GridPosition) -> bool {
        position.x >= 0 && position.x <= self.max_x && position.y >= 0 && position.y <= self.max_y
    }

    /// Whether a neighbor lookup is allowed from `position` toward `direction`
    ///
    /// Cells on the outermost row or column have no neighbor on that side.
    pub const fn has_neighbor(&self, position: GridPosition, direction: Direction) -> bool {
        match direction {
            Direction::North => position.y != 0,
            Direction::East => position.x != self.max_x,
            Direction::South => position.y != self.max_y,
            Direction::West => position.x != 0,
        }
    }
}

/// Cell size and board size from which the grid extent is derived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    /// Board width in pixels
    pub board_width: u32,
    /// Board height in pixels
    pub board_height: u32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            cell_size: TILE_SIZE,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
        }
    }
}

impl GridGeometry {
    /// Create a geometry, rejecting boards that cannot be addressed or drawn
    ///
    /// # Errors
    ///
    /// Returns an error if `cell_size` is zero, if the last column or row
    /// index does not fit in `i32`, or if the canvas size overflows `u32`
    pub fn new(cell_size: u32, board_width: u32, board_height: u32) -> Result<Self> {
        if cell_size == 0 {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &"must be at least one pixel",
            ));
        }
        let geometry = Self {
            cell_size,
            board_width,
            board_height,
        };
        for (name, length, cells) in [
            ("board_width", board_width, geometry.columns()),
            ("board_height", board_height, geometry.rows()),
        ] {
            if i32::try_from(cells).is_err() {
                return Err(invalid_parameter(
                    name,
                    &length,
                    &"too many cells for a signed 32-bit grid index",
                ));
            }
            if cells.checked_add(1).and_then(|count| count.checked_mul(cell_size)).is_none() {
                return Err(invalid_parameter(
                    name,
                    &length,
                    &format!("canvas side overflows u32 at cell size {cell_size}"),
                ));
            }
        }
        Ok(geometry)
    }

    /// Last column index (`board_width / cell_size`, inclusive)
    pub const fn columns(&self) -> u32 {
        self.board_width / self.cell_size
    }

    /// Last row index (`board_height / cell_size`, inclusive)
    pub const fn rows(&self) -> u32 {
        self.board_height / self.cell_size
    }

    /// Inclusive grid bounds of the board
    pub const fn extent(&self) -> GridExtent {
        GridExtent {
            max_x: self.columns() as i32,
            max_y: self.rows() as i32,
        }
    }

    /// Number of cells populated at setup
    pub const fn cell_count(&self) -> usize {
        (self.columns() as usize + 1) * (self.rows() as usize + 1)
    }

    /// Top-left pixel of a cell
    pub const fn pixel_position(&self, position: GridPosition) -> PixelPosition {
        pixel_position(position, self.cell_size)
    }

    /// Every cell of the board in setup order (row by row, left to right)
    pub fn cells(&self) -> impl Iterator<Item = GridPosition> + use<> {
        let extent = self.extent();
        (0..=extent.max_y)
            .flat_map(move |y| (0..=extent.max_x).map(move |x| GridPosition::new(x, y)))
    }

    /// Canvas size in pixels that fits every cell, boundary row and column included
    ///
    /// Saturates at `u32::MAX` for geometries built without [`Self::new`].
    pub const fn canvas_dimensions(&self) -> (u32, u32) {
        (
            self.columns().saturating_add(1).saturating_mul(self.cell_size),
            self.rows().saturating_add(1).saturating_mul(self.cell_size),
        )
    }
}

/// Top-left pixel of a cell for a given cell size
pub const fn pixel_position(position: GridPosition, cell_size: u32) -> PixelPosition {
    PixelPosition {
        x: position.x as i64 * cell_size as i64,
        y: position.y as i64 * cell_size as i64,
    }
}
