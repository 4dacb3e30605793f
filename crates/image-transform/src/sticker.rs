//! Sticker canvas: fit the photo into a transparent square.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

/// Placement of the resized photo on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickerLayout {
    pub width: u32,
    pub height: u32,
    pub x: u32,
    pub y: u32,
}

/// Size and offset of a `width × height` image scaled so its longer side equals `max_size`.
pub fn sticker_layout(width: u32, height: u32, max_size: u32) -> StickerLayout {
    let scale = max_size as f64 / width.max(height) as f64;
    let new_w = ((width as f64 * scale).round() as u32).clamp(1, max_size);
    let new_h = ((height as f64 * scale).round() as u32).clamp(1, max_size);
    StickerLayout {
        width: new_w,
        height: new_h,
        x: (max_size - new_w) / 2,
        y: (max_size - new_h) / 2,
    }
}

/// Resizes `img` (Lanczos3, aspect preserved) and pastes it centered on a fully transparent
/// `max_size × max_size` RGBA canvas, compositing by the image's own alpha.
pub fn sticker_fit(img: &DynamicImage, max_size: u32) -> DynamicImage {
    let layout = sticker_layout(img.width(), img.height(), max_size);
    let resized = imageops::resize(&img.to_rgba8(), layout.width, layout.height, FilterType::Lanczos3);

    let mut canvas = RgbaImage::new(max_size, max_size);
    imageops::overlay(&mut canvas, &resized, layout.x as i64, layout.y as i64);
    DynamicImage::ImageRgba8(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_layout_landscape() {
        let layout = sticker_layout(300, 150, 512);
        assert_eq!(
            layout,
            StickerLayout {
                width: 512,
                height: 256,
                x: 0,
                y: 128
            }
        );
    }

    #[test]
    fn test_layout_portrait_and_square() {
        assert_eq!(sticker_layout(100, 400, 512).width, 128);
        assert_eq!(sticker_layout(100, 400, 512).x, 192);
        let square = sticker_layout(64, 64, 512);
        assert_eq!((square.width, square.height, square.x, square.y), (512, 512, 0, 0));
    }

    #[test]
    fn test_sticker_fit_canvas_and_transparency() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 150, Rgb([200, 10, 10])));
        let out = sticker_fit(&img, 512);
        assert!(out.color().has_alpha());

        let canvas = out.to_rgba8();
        assert_eq!(canvas.dimensions(), (512, 512));
        assert_eq!(canvas.get_pixel(256, 0)[3], 0);
        assert_eq!(canvas.get_pixel(256, 127)[3], 0);
        assert!(canvas.get_pixel(256, 256)[3] >= 250);
        assert_eq!(canvas.get_pixel(256, 384)[3], 0);
        assert_eq!(canvas.get_pixel(511, 511)[3], 0);
    }
}
