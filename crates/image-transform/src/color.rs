//! Per-pixel color mappings: inversion and luminance heat-map.

use image::{DynamicImage, Rgb, RgbImage};

use crate::luma::grayscale;

/// Inverts every channel (`255 - v`) after normalizing to three-channel RGB.
pub fn invert(img: &DynamicImage) -> DynamicImage {
    let mut rgb = img.to_rgb8();
    image::imageops::invert(&mut rgb);
    DynamicImage::ImageRgb8(rgb)
}

/// Heat-map color for luminance `l`: blue at 0, red at 255, linear in between, no green.
#[inline]
pub fn heat_color(l: u8) -> Rgb<u8> {
    Rgb([l, 0, 255 - l])
}

/// Colorizes `img` by luminance with [`heat_color`].
pub fn heatmap(img: &DynamicImage) -> DynamicImage {
    let gray = grayscale(img);
    let out = RgbImage::from_fn(gray.width(), gray.height(), |x, y| {
        heat_color(gray.get_pixel(x, y)[0])
    });
    DynamicImage::ImageRgb8(out)
}
