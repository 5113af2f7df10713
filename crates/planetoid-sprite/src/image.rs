//! RGBA raster images stored as flat, row-major byte arrays.

use std::io::{BufWriter, Write};
use std::path::Path;

/// Errors produced when encoding a [`RasterImage`] to disk.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// Failed to create or write the output file.
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// The PNG encoder rejected the pixel data.
    #[error("failed to encode png: {0}")]
    Encode(#[from] png::EncodingError),
}

/// An RGBA8 image stored top-down (row 0 is the top row).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel data in row-major RGBA format. Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// Create a fully transparent (all-zero) image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Create a fully transparent `size × size` image.
    pub fn square(size: u32) -> Self {
        Self::new(size, size)
    }

    /// Create an image where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity((width as usize) * (height as usize) * 4);
        for _ in 0..(width as usize) * (height as usize) {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + x as usize) * 4
    }

    /// Set a single pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let idx = self.index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Get a pixel's RGBA value.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Bytes per row of pixel data.
    pub fn stride(&self) -> u32 {
        self.width * 4
    }

    /// Pixel bytes with the row order reversed.
    ///
    /// Generation is top-down; textures handed to the display expect the
    /// bottom row first.
    pub fn to_bottom_up(&self) -> Vec<u8> {
        let stride = self.stride() as usize;
        if stride == 0 {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.pixels.len());
        for row in self.pixels.chunks_exact(stride).rev() {
            out.extend_from_slice(row);
        }
        out
    }

    /// Encode the image as an 8-bit RGBA PNG into `writer`.
    pub fn encode_png<W: Write>(&self, writer: W) -> Result<(), ImageError> {
        let mut encoder = png::Encoder::new(writer, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut png_writer = encoder.write_header()?;
        png_writer.write_image_data(&self.pixels)?;
        png_writer.finish()?;
        Ok(())
    }

    /// Write the image to `path` as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), ImageError> {
        let file = std::fs::File::create(path)?;
        self.encode_png(BufWriter::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_image_is_transparent() {
        let image = RasterImage::square(16);
        assert_eq!(image.dimensions(), (16, 16));
        assert_eq!(image.pixels.len(), 16 * 16 * 4);
        assert!(image.pixels.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_set_pixel_layout() {
        let mut image = RasterImage::new(10, 4);
        image.set_pixel(3, 2, [255, 128, 64, 255]);

        let idx = (2 * 10 + 3) * 4;
        assert_eq!(&image.pixels[idx..idx + 4], &[255, 128, 64, 255]);
        assert_eq!(image.get_pixel(3, 2), [255, 128, 64, 255]);
    }

    #[test]
    fn test_bottom_up_reverses_rows() {
        let mut image = RasterImage::new(2, 3);
        image.set_pixel(0, 0, [1, 0, 0, 255]);
        image.set_pixel(1, 2, [3, 0, 0, 255]);

        let flipped = image.to_bottom_up();
        let stride = image.stride() as usize;
        // Old bottom row is now first.
        assert_eq!(&flipped[4..8], &[3, 0, 0, 255]);
        // Old top row is now last.
        assert_eq!(&flipped[2 * stride..2 * stride + 4], &[1, 0, 0, 255]);
    }

    #[test]
    fn test_filled_sets_every_pixel() {
        let image = RasterImage::filled(3, 2, [9, 8, 7, 6]);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(image.get_pixel(x, y), [9, 8, 7, 6]);
            }
        }
    }

    #[test]
    fn test_png_has_signature() {
        let mut image = RasterImage::square(4);
        image.set_pixel(1, 1, [255, 255, 255, 100]);

        let mut bytes = Vec::new();
        image.encode_png(&mut bytes).unwrap();
        assert_eq!(&bytes[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_save_png_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sprite.png");
        let image = RasterImage::filled(8, 8, [0, 0, 0, 255]);

        image.save_png(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_save_png_into_missing_dir_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("sprite.png");
        let err = RasterImage::square(2).save_png(&path).unwrap_err();
        assert!(matches!(err, ImageError::Io(_)));
    }
}
