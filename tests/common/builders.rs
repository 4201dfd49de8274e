//! Builders for synthetic test images

use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};
use std::io::Cursor;

/// Grayscale image with a deterministic non-uniform pattern
pub fn gradient_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
        Luma([((x * 16 + y * 3) % 256) as u8])
    }))
}

/// Grayscale image where every pixel holds `value`
pub fn uniform_image(width: u32, height: u32, value: u8) -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
}

/// Color image exercising the luminance-weighted reduction
pub fn color_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 40) as u8, (y * 40) as u8, 128, 255])
    }))
}

/// Encode an image into an in-memory byte buffer
pub fn encoded_bytes(image: &DynamicImage, format: image::ImageFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut buf), format)
        .expect("encoding a synthetic test image should not fail");
    buf
}
