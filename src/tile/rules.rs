//! Name-pattern rules applied to sprite names before catalog lookup
//!
//! Kept as data so the classification policy can be read and tested without
//! going through a tile.

use crate::io::configuration::{
    BASE_SUFFIX, BREAKABLE_ALIAS_FROM, BREAKABLE_ALIAS_TO, CORNER_SUFFIXES, DEFAULT_SHADOW_OFFSET,
    EDGE_SUFFIXES, SMALL_TREE_SHADOW_OFFSET, TREE_CORNER_SHADOW_OFFSET,
};
use crate::spatial::geometry::Direction;

/// A substring test over a sprite name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePattern {
    /// Name contains the fragment anywhere
    Contains(&'static str),
    /// Name contains the fragment immediately followed by a corner suffix
    ContainsWithCorner(&'static str),
}

impl NamePattern {
    /// Whether the name matches this pattern
    pub fn matches(&self, name: &str) -> bool {
        match *self {
            Self::Contains(fragment) => name.contains(fragment),
            Self::ContainsWithCorner(fragment) => CORNER_SUFFIXES
                .iter()
                .any(|corner| name.contains(&format!("{fragment}{corner}"))),
        }
    }
}

/// Assigns a shadow offset to obstacles whose name matches a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowRule {
    /// Pattern the obstacle name must match
    pub pattern: NamePattern,
    /// Shadow offset in pixels when matched
    pub offset: u32,
}

/// Shadow rules in evaluation order; the last matching rule wins
pub const SHADOW_RULES: [ShadowRule; 2] = [
    ShadowRule {
        pattern: NamePattern::Contains("smallTree"),
        offset: SMALL_TREE_SHADOW_OFFSET,
    },
    ShadowRule {
        pattern: NamePattern::ContainsWithCorner("tree"),
        offset: TREE_CORNER_SHADOW_OFFSET,
    },
];

/// Shadow offset for an obstacle name
pub fn shadow_offset(name: &str) -> u32 {
    SHADOW_RULES
        .iter()
        .rev()
        .find(|rule| rule.pattern.matches(name))
        .map_or(DEFAULT_SHADOW_OFFSET, |rule| rule.offset)
}

/// Canonical terrain name with every base suffix removed
pub fn canonical_base_name(name: &str) -> String {
    name.replace(BASE_SUFFIX, "")
}

/// Catalog key of the full base sprite for a canonical terrain name
pub fn base_sprite_name(canonical: &str) -> String {
    format!("{canonical}{BASE_SUFFIX}")
}

/// Catalog key of the edge sprite for a canonical terrain name
pub fn edge_sprite_name(canonical: &str, direction: Direction) -> String {
    let suffix = EDGE_SUFFIXES
        .get(direction.index())
        .copied()
        .unwrap_or_default();
    format!("{canonical}{suffix}")
}

/// Catalog key for a breakable, with tier aliases resolved
pub fn breakable_sprite_name(name: &str) -> String {
    name.replace(BREAKABLE_ALIAS_FROM, BREAKABLE_ALIAS_TO)
}
