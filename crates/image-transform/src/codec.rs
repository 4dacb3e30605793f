//! Byte-stream decoding and output encoding.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::DynamicImage;

use crate::error::{Result, TransformError};

/// Decodes an image of any supported format from raw bytes.
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| TransformError::Decode(e.to_string()))
}

fn ensure_not_empty(img: &DynamicImage) -> Result<()> {
    if img.width() == 0 || img.height() == 0 {
        return Err(TransformError::Encode(format!(
            "empty image ({}x{})",
            img.width(),
            img.height()
        )));
    }
    Ok(())
}

/// Encodes as baseline JPEG at `quality` (1..=100). Alpha is dropped.
pub fn encode_jpeg(img: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    ensure_not_empty(img)?;
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
    rgb.write_with_encoder(encoder)
        .map_err(|e| TransformError::Encode(e.to_string()))?;
    Ok(bytes)
}

/// Encodes as PNG, keeping alpha.
pub fn encode_png(img: &DynamicImage) -> Result<Vec<u8>> {
    ensure_not_empty(img)?;
    let rgba = DynamicImage::ImageRgba8(img.to_rgba8());
    let mut bytes = Vec::new();
    rgba.write_with_encoder(PngEncoder::new(&mut bytes))
        .map_err(|e| TransformError::Encode(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn sample() -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 6, Rgba([1, 2, 3, 128])))
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(decode(b"not an image"), Err(TransformError::Decode(_))));
    }

    #[test]
    fn test_jpeg_output_is_jpeg() {
        let bytes = encode_jpeg(&sample(), 75).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Jpeg);
        let back = decode(&bytes).unwrap();
        assert_eq!((back.width(), back.height()), (8, 6));
    }

    #[test]
    fn test_png_keeps_alpha() {
        let bytes = encode_png(&sample()).unwrap();
        assert_eq!(image::guess_format(&bytes).unwrap(), ImageFormat::Png);
        let back = decode(&bytes).unwrap().to_rgba8();
        assert_eq!(*back.get_pixel(0, 0), Rgba([1, 2, 3, 128]));
    }

    #[test]
    fn test_jpeg_rejects_empty_image() {
        let empty = DynamicImage::ImageRgba8(RgbaImage::new(0, 40));
        assert!(matches!(encode_jpeg(&empty, 75), Err(TransformError::Encode(_))));
    }
}
