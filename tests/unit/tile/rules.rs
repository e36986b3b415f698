//! Tests for the sprite name rules

#[cfg(test)]
mod tests {

    use spillgrid::spatial::geometry::Direction;
    use spillgrid::tile::rules::{
        NamePattern, SHADOW_RULES, base_sprite_name, breakable_sprite_name, canonical_base_name,
        edge_sprite_name, shadow_offset,
    };

    // Tests the shadow length policy for small trees, tree corners and everything else
    // Verified by letting the first matching rule win
    #[test]
    fn test_shadow_offsets() {
        assert_eq!(shadow_offset("smallTreeA"), 3);
        assert_eq!(shadow_offset("treeBL"), 8);
        assert_eq!(shadow_offset("treeTR"), 8);
        assert_eq!(shadow_offset("pineTreeBR"), 3);
        assert_eq!(shadow_offset("rock"), 3);
        assert_eq!(SHADOW_RULES.len(), 2);
    }

    // Tests corner patterns need the corner right after the fragment
    // Verified by matching the fragment and the corner independently
    #[test]
    fn test_corner_pattern() {
        let pattern = NamePattern::ContainsWithCorner("tree");

        assert!(pattern.matches("bigtreeTL"));
        assert!(!pattern.matches("treeTop"));
        assert!(!pattern.matches("TLtree"));
        assert!(NamePattern::Contains("smallTree").matches("smallTreeB"));
    }

    // Tests the base suffix is stripped to the canonical terrain name
    // Verified by stripping only a trailing suffix
    #[test]
    fn test_canonical_base_name() {
        assert_eq!(canonical_base_name("grassBa_TL"), "grass");
        assert_eq!(canonical_base_name("grass"), "grass");
        assert_eq!(base_sprite_name("grass"), "grassBa_TL");
    }

    // Tests edge sprite names by direction
    // Verified by indexing suffixes in spill order
    #[test]
    fn test_edge_sprite_names() {
        assert_eq!(edge_sprite_name("sand", Direction::North), "sandBa_T_TL");
        assert_eq!(edge_sprite_name("sand", Direction::East), "sandBa_R_TL");
        assert_eq!(edge_sprite_name("sand", Direction::South), "sandBa_B_TL");
        assert_eq!(edge_sprite_name("sand", Direction::West), "sandBa_L_TL");
    }

    // Tests the ultimate tier resolves to titanium sprites
    // Verified by replacing only the first occurrence
    #[test]
    fn test_breakable_alias() {
        assert_eq!(breakable_sprite_name("ultimateCrate"), "titaniumCrate");
        assert_eq!(breakable_sprite_name("titaniumCrate"), "titaniumCrate");
        assert_eq!(breakable_sprite_name("woodCrate"), "woodCrate");
    }
}
