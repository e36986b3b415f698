//! Unit tests mirroring the `src` tree, one file per source file


/// Test doubles shared across the unit tests
mod support {
    use image::{Rgba, RgbaImage};
    use spillgrid::io::catalog::{Sprite, SpriteCatalog};
    use spillgrid::render::canvas::{Canvas, Tint};
    use spillgrid::spatial::geometry::PixelPosition;

    /// One recorded canvas operation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum DrawCall {
        Sprite {
            name: String,
            at: PixelPosition,
            tint: Tint,
        },
        Rect {
            at: PixelPosition,
            size: u32,
            color: Rgba<u8>,
        },
    }

    /// Canvas that records draw calls instead of rasterizing
    #[derive(Debug, Default)]
    pub(crate) struct RecordingCanvas {
        pub(crate) calls: Vec<DrawCall>,
    }

    impl RecordingCanvas {
        /// Names of the sprites drawn, in order
        pub(crate) fn sprite_names(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Sprite { name, .. } => Some(name.as_str()),
                    DrawCall::Rect { .. } => None,
                })
                .collect()
        }

        /// Outlines drawn, in order
        pub(crate) fn rects(&self) -> Vec<(PixelPosition, u32, Rgba<u8>)> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    DrawCall::Rect { at, size, color } => Some((*at, *size, *color)),
                    DrawCall::Sprite { .. } => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        fn draw_sprite(&mut self, sprite: &Sprite, at: PixelPosition, tint: Tint) {
            self.calls.push(DrawCall::Sprite {
                name: sprite.name().to_string(),
                at,
                tint,
            });
        }

        fn stroke_rect(&mut self, at: PixelPosition, size: u32, color: Rgba<u8>) {
            self.calls.push(DrawCall::Rect { at, size, color });
        }
    }

    /// Opaque single-color image
    pub(crate) fn solid(size: u32, color: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(size, size, Rgba(color))
    }

    /// Catalog with a small opaque sprite under every name
    pub(crate) fn catalog_with(names: &[&str]) -> SpriteCatalog {
        let mut catalog = SpriteCatalog::new();
        for (index, name) in names.iter().enumerate() {
            let shade = (index * 10 % 250) as u8;
            catalog.insert(*name, solid(2, [shade, shade, shade, 255]));
        }
        catalog
    }

    /// Base sprite plus all four edge sprites for each terrain
    pub(crate) fn terrain_catalog(terrains: &[&str]) -> SpriteCatalog {
        let names: Vec<String> = terrains
            .iter()
            .flat_map(|terrain| {
                ["Ba_TL", "Ba_T_TL", "Ba_R_TL", "Ba_B_TL", "Ba_L_TL"]
                    .map(|suffix| format!("{terrain}{suffix}"))
            })
            .collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        catalog_with(&refs)
    }
}
