//! Fixed-size tile grid rendered through stacked sprite layers
//!
//! Each cell carries a terrain base, and at most one decoration, breakable
//! or obstacle. Terrain edges blend into neighboring cells according to a
//! fixed dominance order, and frames are drawn in three whole-grid passes so
//! shadows never cover solid obstacles.

#![forbid(unsafe_code)]

/// Sprite catalog, configuration, errors and command-line plumbing
pub mod io;
/// Draw surface and the three render passes
pub mod render;
/// Grid coordinates, board geometry and the tile store
pub mod spatial;
/// Tile records, terrain hierarchy, name rules and edge blending
pub mod tile;
/// Board context tying the store to the catalog, and tile edits
pub mod world;

pub use io::error::{GridError, Result};
