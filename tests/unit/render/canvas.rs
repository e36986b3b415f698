//! Tests for tinting and RGBA compositing

#[cfg(test)]
mod tests {

    use crate::support::solid;
    use image::{Rgba, RgbaImage};
    use spillgrid::io::catalog::Sprite;
    use spillgrid::io::configuration::{BACKGROUND_COLOR, SHADOW_ALPHA};
    use spillgrid::render::canvas::{Canvas, FrameCanvas, Tint};
    use spillgrid::spatial::geometry::PixelPosition;

    // Tests the shadow tint only reduces alpha
    // Verified by darkening the color channels as well
    #[test]
    fn test_shadow_tint_keeps_color() {
        let tinted = Tint::shadow().apply(Rgba([200, 100, 50, 255]));

        assert_eq!(tinted, Rgba([200, 100, 50, SHADOW_ALPHA]));
        assert!(!Tint::shadow().is_identity());
        assert!(Tint::NONE.is_identity());
        assert_eq!(Tint::NONE.apply(Rgba([1, 2, 3, 4])), Rgba([1, 2, 3, 4]));
    }

    // Tests opaque sprites replace canvas pixels at the given offset
    // Verified by ignoring the draw offset
    #[test]
    fn test_draw_opaque_sprite() {
        let mut canvas = FrameCanvas::new(4, 4);
        let sprite = Sprite::new("red", solid(2, [255, 0, 0, 255]));

        canvas.draw_sprite(&sprite, PixelPosition::new(2, 2), Tint::NONE);

        assert_eq!(canvas.image().get_pixel(3, 3), &Rgba([255, 0, 0, 255]));
        assert_eq!(canvas.image().get_pixel(1, 1), &Rgba(BACKGROUND_COLOR));
    }

    // Tests transparent sprite pixels leave the canvas untouched
    // Verified by copying pixels without blending
    #[test]
    fn test_transparent_pixels_blend() {
        let mut canvas = FrameCanvas::new(2, 1);
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([0, 255, 0, 255]));
        let sprite = Sprite::new("half", image);

        canvas.draw_sprite(&sprite, PixelPosition::new(0, 0), Tint::NONE);

        assert_eq!(canvas.image().get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.image().get_pixel(1, 0), &Rgba(BACKGROUND_COLOR));
    }

    // Tests a shadow-tinted sprite only partly covers the background
    // Verified by drawing the shadow at full opacity
    #[test]
    fn test_tinted_draw_is_translucent() {
        let mut canvas = FrameCanvas::new(1, 1);
        let sprite = Sprite::new("white", solid(1, [255, 255, 255, 255]));

        canvas.draw_sprite(&sprite, PixelPosition::new(0, 0), Tint::shadow());

        let pixel = canvas.image().get_pixel(0, 0);
        assert!(pixel[0] > BACKGROUND_COLOR[0]);
        assert!(pixel[0] < 255);
    }

    // Tests sprites hanging off the canvas edges are clipped
    // Verified by panicking on out-of-range writes
    #[test]
    fn test_draw_clipped() {
        let mut canvas = FrameCanvas::new(2, 2);
        let sprite = Sprite::new("blue", solid(3, [0, 0, 255, 255]));

        canvas.draw_sprite(&sprite, PixelPosition::new(-2, 1), Tint::NONE);

        assert_eq!(canvas.image().get_pixel(0, 1), &Rgba([0, 0, 255, 255]));
        assert_eq!(canvas.image().get_pixel(1, 1), &Rgba(BACKGROUND_COLOR));
    }

    // Tests rectangle outlines leave the interior unfilled
    // Verified by filling the rectangle
    #[test]
    fn test_stroke_rect_outline() {
        let mut canvas = FrameCanvas::new(5, 5);
        let yellow = Rgba([255, 255, 0, 255]);

        canvas.stroke_rect(PixelPosition::new(1, 1), 3, yellow);

        for (x, y) in [(1, 1), (3, 1), (1, 3), (3, 3), (2, 1), (1, 2)] {
            assert_eq!(canvas.image().get_pixel(x, y), &yellow);
        }
        assert_eq!(canvas.image().get_pixel(2, 2), &Rgba(BACKGROUND_COLOR));
        assert_eq!(canvas.image().get_pixel(4, 4), &Rgba(BACKGROUND_COLOR));
    }

    // Tests clearing restores the background everywhere
    // Verified by clearing only the first row
    #[test]
    fn test_clear() {
        let mut canvas = FrameCanvas::new(3, 3);
        canvas.stroke_rect(PixelPosition::new(0, 0), 3, Rgba([1, 1, 1, 255]));
        canvas.stroke_rect(PixelPosition::new(-5, -5), 0, Rgba([9, 9, 9, 255]));

        canvas.clear();

        let image = canvas.into_image();
        assert!(image.pixels().all(|pixel| *pixel == Rgba(BACKGROUND_COLOR)));
    }
}
