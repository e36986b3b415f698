/// Board context
pub mod context;
/// Tile edits and their text form
pub mod edit;

pub use context::World;
pub use edit::{EditAction, TileEdit};
