//! Single-channel luminance.

use image::{DynamicImage, GrayImage, Luma};

/// ITU-R 601-2 luma of one RGB pixel, `(299 R + 587 G + 114 B) / 1000`, in 16-bit fixed point with rounding.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let l = (r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16;
    l as u8
}

/// Converts any image to a grayscale image using [`luminance`]. Alpha is ignored.
pub fn grayscale(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let p = rgb.get_pixel(x, y);
        Luma([luminance(p[0], p[1], p[2])])
    })
}
