//! Drawing surface used by the render passes
//!
//! [`Canvas`] is the seam between tiles and whatever presents the frame.
//! [`FrameCanvas`] composites sprites into an in-memory RGBA image.

use crate::io::catalog::Sprite;
use crate::io::configuration::{BACKGROUND_COLOR, SHADOW_ALPHA};
use crate::spatial::geometry::PixelPosition;
use image::{Pixel, Rgba, RgbaImage};

/// Multiplier applied to a sprite's channels while drawing
///
/// `gray` scales the color channels and `alpha` scales opacity, both out of
/// 255, so `Tint::NONE` leaves the sprite unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    /// Color channel multiplier
    pub gray: u8,
    /// Alpha channel multiplier
    pub alpha: u8,
}

impl Tint {
    /// Draw the sprite as is
    pub const NONE: Self = Self {
        gray: 255,
        alpha: 255,
    };

    /// Reduced opacity, no color shift, used for obstacle shadows
    pub const fn shadow() -> Self {
        Self {
            gray: 255,
            alpha: SHADOW_ALPHA,
        }
    }

    /// Whether drawing with this tint changes any pixel
    pub const fn is_identity(self) -> bool {
        self.gray == 255 && self.alpha == 255
    }

    /// Apply the tint to one pixel
    pub fn apply(self, pixel: Rgba<u8>) -> Rgba<u8> {
        if self.is_identity() {
            return pixel;
        }
        let [r, g, b, a] = pixel.0;
        Rgba([
            scale(r, self.gray),
            scale(g, self.gray),
            scale(b, self.gray),
            scale(a, self.alpha),
        ])
    }
}

fn scale(channel: u8, factor: u8) -> u8 {
    ((u16::from(channel) * u16::from(factor) + 127) / 255) as u8
}

/// Target of the tile draw operations
pub trait Canvas {
    /// Draw a sprite with its top-left corner at `at`
    fn draw_sprite(&mut self, sprite: &Sprite, at: PixelPosition, tint: Tint);

    /// Draw an unfilled one-pixel square outline of edge `size` at `at`
    fn stroke_rect(&mut self, at: PixelPosition, size: u32, color: Rgba<u8>);
}

/// Canvas backed by an RGBA image with alpha compositing
#[derive(Debug, Clone)]
pub struct FrameCanvas {
    image: RgbaImage,
}

impl FrameCanvas {
    /// Create a canvas filled with the background color
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR)),
        }
    }

    /// Refill the whole canvas with the background color
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(BACKGROUND_COLOR);
        }
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Take the rendered pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut Rgba<u8>> {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return None;
        };
        self.image.get_pixel_mut_checked(x, y)
    }
}

impl Canvas for FrameCanvas {
    fn draw_sprite(&mut self, sprite: &Sprite, at: PixelPosition, tint: Tint) {
        for (sx, sy, source) in sprite.image().enumerate_pixels() {
            let Some(target) = self.pixel_mut(at.x + i64::from(sx), at.y + i64::from(sy)) else {
                continue;
            };

            let source = tint.apply(*source);
            match source[3] {
                0 => {}
                255 => *target = source,
                _ => target.blend(&source),
            }
        }
    }

    fn stroke_rect(&mut self, at: PixelPosition, size: u32, color: Rgba<u8>) {
        if size == 0 {
            return;
        }
        let last = i64::from(size) - 1;
        for offset in 0..=last {
            for (x, y) in [
                (at.x + offset, at.y),
                (at.x + offset, at.y + last),
                (at.x, at.y + offset),
                (at.x + last, at.y + offset),
            ] {
                if let Some(pixel) = self.pixel_mut(x, y) {
                    *pixel = color;
                }
            }
        }
    }
}
