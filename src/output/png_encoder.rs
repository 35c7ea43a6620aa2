//! PNG encoding and decoding.
//!
//! Pure Rust PNG I/O using the `png` crate. Images are always 8-bit RGBA, so
//! encode followed by decode reproduces every channel value exactly.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    fn encode<W: Write>(fb: &Framebuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        // Compact pixels strip the stride padding
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;
        Ok(())
    }

    /// Write a framebuffer to a PNG file.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(fb, BufWriter::new(file))
    }

    /// Encode a framebuffer to PNG bytes.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    /// Encode a framebuffer as a `data:image/png;base64,...` URI.
    pub fn to_data_uri(fb: &Framebuffer) -> Result<String> {
        let bytes = Self::to_bytes(fb)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(bytes)))
    }

    /// Decode an 8-bit RGBA PNG stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPng`] for any other color type or depth.
    pub fn decode<R: Read>(reader: R) -> Result<Framebuffer> {
        let decoder = png::Decoder::new(reader);
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;

        if info.color_type != png::ColorType::Rgba || info.bit_depth != png::BitDepth::Eight {
            return Err(Error::UnsupportedPng {
                color: info.color_type,
                depth: info.bit_depth,
            });
        }

        Framebuffer::from_compact_pixels(info.width, info.height, &buf[..info.buffer_size()])
    }

    /// Decode PNG bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Framebuffer> {
        Self::decode(bytes)
    }

    /// Decode a PNG file.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Framebuffer> {
        Self::decode(BufReader::new(File::open(path)?))
    }
}
