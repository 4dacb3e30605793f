//! Block pixelation by nearest-neighbor down- and up-sampling.

use image::{DynamicImage, RgbaImage};

/// Nearest-neighbor source index for output index `i` when scaling `src_len` samples to `dst_len`,
/// sampling at pixel centres.
#[inline]
fn nearest(i: u32, src_len: u32, dst_len: u32) -> u32 {
    let pos = ((i as f64 + 0.5) * src_len as f64 / dst_len as f64) as u32;
    pos.min(src_len - 1)
}

/// Pixelates `img` with square blocks of `block_size`.
///
/// The image is downsampled to `(w / k, h / k)` (remainders discarded) and upsampled by `k`,
/// so the result is `k * floor(w / k)` by `k * floor(h / k)`. An image smaller than one block
/// in either axis yields an empty image.
pub fn pixelate(img: &DynamicImage, block_size: u32) -> DynamicImage {
    let k = block_size.max(1);
    let src = img.to_rgba8();
    let (w, h) = src.dimensions();
    let (small_w, small_h) = (w / k, h / k);

    if small_w == 0 || small_h == 0 {
        return DynamicImage::ImageRgba8(RgbaImage::new(small_w * k, small_h * k));
    }

    let small = RgbaImage::from_fn(small_w, small_h, |x, y| {
        *src.get_pixel(nearest(x, w, small_w), nearest(y, h, small_h))
    });
    let out = RgbaImage::from_fn(small_w * k, small_h * k, |x, y| *small.get_pixel(x / k, y / k));

    DynamicImage::ImageRgba8(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(w, h, |x, y| {
            Rgba([(x * 255 / w.max(1)) as u8, (y * 255 / h.max(1)) as u8, 77, 255])
        }))
    }

    #[test]
    fn test_pixelate_exact_multiple_keeps_size() {
        let out = pixelate(&gradient(100, 100), 20);
        assert_eq!((out.width(), out.height()), (100, 100));
    }

    #[test]
    fn test_pixelate_blocks_are_uniform() {
        let out = pixelate(&gradient(100, 100), 20).to_rgba8();
        for by in 0..5 {
            for bx in 0..5 {
                let first = *out.get_pixel(bx * 20, by * 20);
                for y in by * 20..(by + 1) * 20 {
                    for x in bx * 20..(bx + 1) * 20 {
                        assert_eq!(*out.get_pixel(x, y), first);
                    }
                }
            }
        }
    }

    #[test]
    fn test_pixelate_drops_remainder() {
        let out = pixelate(&gradient(105, 47), 20);
        assert_eq!((out.width(), out.height()), (100, 40));
    }

    #[test]
    fn test_pixelate_samples_block_centres() {
        // 40x20 with block 20 -> 2x1 samples taken at (10, 10) and (30, 10).
        let src = RgbaImage::from_fn(40, 20, |x, _| Rgba([x as u8, 0, 0, 255]));
        let out = pixelate(&DynamicImage::ImageRgba8(src), 20).to_rgba8();
        assert_eq!(out.get_pixel(0, 0)[0], 10);
        assert_eq!(out.get_pixel(39, 19)[0], 30);
    }

    #[test]
    fn test_pixelate_smaller_than_block() {
        let out = pixelate(&gradient(10, 50), 20);
        assert_eq!((out.width(), out.height()), (0, 40));
    }
}
