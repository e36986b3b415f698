//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - Grid and pixel coordinates, directions and board geometry
//! - The insertion-ordered tile store

/// Coordinates, directions and board extent
pub mod geometry;
/// Tile store keyed by coordinate and id
pub mod grid;

pub use geometry::{Direction, GridExtent, GridGeometry, GridPosition, PixelPosition};
pub use grid::GridStore;
