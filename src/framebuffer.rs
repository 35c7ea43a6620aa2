//! RGBA pixel buffer.
//!
//! [`Framebuffer`] is the image type of the crate: bank images, the rendered
//! scatter figure and decoded PNGs all live in one. Rows are padded to a
//! 64-byte stride so row slices stay SIMD-aligned; the padding is never
//! written and is stripped by [`Framebuffer::to_compact_pixels`].

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::Vector;

/// Row alignment in bytes (64 bytes for AVX-512).
const SIMD_ALIGNMENT: usize = 64;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, `stride` bytes per row.
    pixels: Vec<u8>,
    /// Stride in bytes (includes alignment padding).
    stride: usize,
}

impl Framebuffer {
    /// Create a new zeroed (transparent) framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_imgswap::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.shape(), (600, 800, 4));
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let row_bytes = (width as usize) * CHANNELS;
        let stride = (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1);

        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * (height as usize)],
            stride,
        })
    }

    /// Build a framebuffer from tightly packed RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero or `data` is not exactly
    /// `width * height * 4` bytes.
    pub fn from_compact_pixels(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let mut fb = Self::new(width, height)?;
        let row_bytes = (width as usize) * CHANNELS;
        let expected = row_bytes * (height as usize);
        if data.len() != expected {
            return Err(Error::DataLengthMismatch {
                x_len: expected,
                y_len: data.len(),
            });
        }

        for (y, src) in data.chunks_exact(row_bytes).enumerate() {
            let start = y * fb.stride;
            fb.pixels[start..start + row_bytes].copy_from_slice(src);
        }
        Ok(fb)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Array shape as `(rows, cols, channels)`.
    #[must_use]
    pub const fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }

    /// Get the stride (row width in bytes, including any padding).
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get a row of pixels as a slice (padding excluded).
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * CHANNELS;
        Some(&self.pixels[start..end])
    }

    /// Get a row of pixels as a mutable slice (padding excluded).
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        let end = start + (self.width as usize) * CHANNELS;
        Some(&mut self.pixels[start..end])
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        for y in 0..self.height {
            if let Some(row) = self.row_mut(y) {
                for chunk in row.chunks_exact_mut(CHANNELS) {
                    chunk.copy_from_slice(&rgba);
                }
            }
        }
    }

    /// Fill a rectangular region with a solid color.
    ///
    /// Coordinates are clamped to framebuffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let rgba = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * CHANNELS;
            let row = &mut self.pixels[row_start..row_start + rect_width * CHANNELS];
            for chunk in row.chunks_exact_mut(CHANNELS) {
                chunk.copy_from_slice(&rgba);
            }
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + CHANNELS].copy_from_slice(&color.to_array());
    }

    /// Luminance statistics using trueno's SIMD reductions.
    ///
    /// Returns `(min, max, mean)` of ITU-R BT.709 luminance.
    #[must_use]
    pub fn luminance_stats(&self) -> (f32, f32, f32) {
        let mut luminances = Vec::with_capacity(self.pixel_count());

        for y in 0..self.height {
            if let Some(row) = self.row(y) {
                for chunk in row.chunks_exact(CHANNELS) {
                    let lum = 0.2126 * f32::from(chunk[0])
                        + 0.7152 * f32::from(chunk[1])
                        + 0.0722 * f32::from(chunk[2]);
                    luminances.push(lum);
                }
            }
        }

        let vec = Vector::from_vec(luminances);

        let min = vec.min().unwrap_or(0.0);
        let max = vec.max().unwrap_or(255.0);
        let mean = vec.mean().unwrap_or(127.5);

        (min, max, mean)
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * CHANNELS
    }

    /// Pixel data as a tightly packed `rows * cols * 4` buffer.
    ///
    /// This is the layout PNG encoding and external consumers expect.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * CHANNELS;

        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }
}
