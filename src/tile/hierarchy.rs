//! Fixed terrain dominance order deciding which terrain bleeds into which

/// Terrain names and their ranks; a higher rank spills onto a lower one
const HIERARCHY: [(&str, u8); 7] = [
    ("snow", 6),
    ("grass", 5),
    ("yellowGrass", 4),
    ("dirt", 3),
    ("sand", 2),
    ("stone", 1),
    ("water", 0),
];

/// Rank given to a tile before any known terrain has been assigned
pub const INITIAL_RANK: u8 = 0;

/// Total order over the known terrain types
#[derive(Debug, Clone, Copy, Default)]
pub struct TerrainHierarchy;

impl TerrainHierarchy {
    /// Rank of a canonical terrain name, `None` for names outside the table
    pub fn rank(name: &str) -> Option<u8> {
        HIERARCHY
            .iter()
            .find(|(terrain, _)| *terrain == name)
            .map(|&(_, rank)| rank)
    }

    /// Every known terrain name, highest rank first
    pub fn terrains() -> impl Iterator<Item = &'static str> {
        HIERARCHY.iter().map(|&(terrain, _)| terrain)
    }
}
