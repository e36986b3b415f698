/// Neighbor edge blending
pub mod blend;
/// Terrain dominance order
pub mod hierarchy;
/// Per-cell layers and their setters
pub mod record;
/// Name-pattern rules for sprite lookup and shadows
pub mod rules;

pub use record::{ObjectLayer, TileId, TileRecord};
