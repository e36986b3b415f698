//! Board geometry, sprite naming and rendering constants

// Board geometry
/// Edge length of one grid cell in pixels
pub const TILE_SIZE: u32 = 50;
/// Board width in pixels (the last column starts exactly at this offset)
pub const BOARD_WIDTH: u32 = 1100;
/// Board height in pixels (the last row starts exactly at this offset)
pub const BOARD_HEIGHT: u32 = 900;
/// Target frame rate of the external orchestrator
pub const FRAMERATE: u32 = 60;

/// Color used to clear a frame before the first pass
pub const BACKGROUND_COLOR: [u8; 4] = [0, 15, 45, 255];

// Sprite naming for terrain bases
/// Suffix of a full terrain base sprite, stripped from names passed to `set_base`
pub const BASE_SUFFIX: &str = "Ba_TL";
/// Edge sprite suffixes indexed by direction (north, east, south, west)
pub const EDGE_SUFFIXES: [&str; 4] = ["Ba_T_TL", "Ba_R_TL", "Ba_B_TL", "Ba_L_TL"];

// Breakable tier substitution
/// Breakable name fragment that shares sprites with another tier
pub const BREAKABLE_ALIAS_FROM: &str = "ultimate";
/// Breakable name fragment whose sprites are used instead
pub const BREAKABLE_ALIAS_TO: &str = "titanium";

// Obstacle shadows
/// Shadow offset for obstacles no rule matches
pub const DEFAULT_SHADOW_OFFSET: u32 = 3;
/// Shadow offset for small trees
pub const SMALL_TREE_SHADOW_OFFSET: u32 = 3;
/// Shadow offset for the corner pieces of large trees
pub const TREE_CORNER_SHADOW_OFFSET: u32 = 8;
/// Corner suffixes that mark a piece of a multi-cell tree
pub const CORNER_SUFFIXES: [&str; 4] = ["BL", "BR", "TL", "TR"];
/// Alpha applied to the shadow copy of an obstacle (out of 255)
pub const SHADOW_ALPHA: u8 = 60;

// Command line defaults
/// Terrain painted on every cell before edits are applied
pub const DEFAULT_BASE: &str = "grass";
/// Number of frames rendered by default
pub const DEFAULT_FRAMES: usize = 1;
/// Output file written when none is given
pub const DEFAULT_OUTPUT: &str = "board.png";
/// Outline color used by `--highlight`
pub const HIGHLIGHT_COLOR: [u8; 4] = [255, 255, 0, 255];
/// Width of the frame progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
