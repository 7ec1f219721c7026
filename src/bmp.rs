//! # 24-bit BMP Encoder
//!
//! Serializes a [`PixelBuffer`] into an uncompressed Windows bitmap.
//!
//! ## File Layout
//!
//! | Offset | Size | Field | Value |
//! |--------|------|-------|-------|
//! | 0 | 2 | magic | `BM` |
//! | 2 | 4 | file size | 54 + stride × height |
//! | 6 | 4 | reserved | 0 |
//! | 10 | 4 | pixel data offset | 54 |
//! | 14 | 4 | info header size | 40 |
//! | 18 | 4 | width | pixels |
//! | 22 | 4 | height | pixels, positive = bottom-up rows |
//! | 26 | 2 | planes | 1 |
//! | 28 | 2 | bits per pixel | 24 |
//! | 30 | 4 | compression | 0 |
//! | 34 | 4 | image size | stride × height |
//! | 38 | 16 | resolution, palette | 0 |
//!
//! All fields are little-endian. Each row is `B, G, R` triplets padded with
//! zeros to a multiple of 4 bytes. The buffer already stores its bottom row
//! first, so rows are written in storage order.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::canvas::PixelBuffer;
use crate::error::{Result, TurtleError};

pub const FILE_HEADER_SIZE: u32 = 14;
pub const INFO_HEADER_SIZE: u32 = 40;
pub const PIXEL_DATA_OFFSET: u32 = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
pub const BITS_PER_PIXEL: u16 = 24;

/// Bytes per stored row: three per pixel, rounded up to a multiple of four
#[inline]
pub fn row_stride(width: u32) -> usize {
    (3 * (width as usize + 1) / 4) * 4
}

// ============================================================================
// Header
// ============================================================================

/// The fields of a BITMAPFILEHEADER + BITMAPINFOHEADER pair that vary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
}

impl BmpHeader {
    pub fn for_buffer(buffer: &PixelBuffer) -> Self {
        let image_size = (row_stride(buffer.width()) * buffer.height() as usize) as u32;
        Self {
            file_size: PIXEL_DATA_OFFSET + image_size,
            width: buffer.width() as i32,
            height: buffer.height() as i32,
            planes: 1,
            bits_per_pixel: BITS_PER_PIXEL,
            compression: 0,
            image_size,
        }
    }

    pub fn to_bytes(&self) -> [u8; PIXEL_DATA_OFFSET as usize] {
        let mut out = [0u8; PIXEL_DATA_OFFSET as usize];
        out[0..2].copy_from_slice(b"BM");
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        // 6..10 reserved
        out[10..14].copy_from_slice(&PIXEL_DATA_OFFSET.to_le_bytes());
        out[14..18].copy_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
        out[18..22].copy_from_slice(&self.width.to_le_bytes());
        out[22..26].copy_from_slice(&self.height.to_le_bytes());
        out[26..28].copy_from_slice(&self.planes.to_le_bytes());
        out[28..30].copy_from_slice(&self.bits_per_pixel.to_le_bytes());
        out[30..34].copy_from_slice(&self.compression.to_le_bytes());
        out[34..38].copy_from_slice(&self.image_size.to_le_bytes());
        // 38..54: resolution and palette counts stay zero
        out
    }

    /// Parse the header of a bitmap file. Returns None unless the magic and
    /// header sizes match what `to_bytes` writes.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < PIXEL_DATA_OFFSET as usize || &bytes[0..2] != b"BM" {
            return None;
        }
        let u32_at = |at: usize| {
            u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        let u16_at = |at: usize| u16::from_le_bytes([bytes[at], bytes[at + 1]]);

        if u32_at(10) != PIXEL_DATA_OFFSET || u32_at(14) != INFO_HEADER_SIZE {
            return None;
        }
        Some(Self {
            file_size: u32_at(2),
            width: u32_at(18) as i32,
            height: u32_at(22) as i32,
            planes: u16_at(26),
            bits_per_pixel: u16_at(28),
            compression: u32_at(30),
            image_size: u32_at(34),
        })
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Write `buffer` as a bitmap to any byte sink
pub fn encode<W: Write>(buffer: &PixelBuffer, out: &mut W) -> Result<()> {
    let header = BmpHeader::for_buffer(buffer);
    out.write_all(&header.to_bytes())?;

    let stride = row_stride(buffer.width());
    let mut line: Vec<u8> = Vec::new();
    line.try_reserve_exact(stride)
        .map_err(|_| TurtleError::Allocation {
            what: "bitmap row",
            bytes: stride,
        })?;
    line.resize(stride, 0);

    for row in buffer.rows().take(buffer.height() as usize) {
        for (dst, color) in line.chunks_exact_mut(3).zip(row) {
            dst.copy_from_slice(&color.to_bgr());
        }
        out.write_all(&line)?;
    }
    Ok(())
}

/// Write `buffer` to a bitmap file at `path`, replacing any existing file
pub fn save(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| TurtleError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let written = encode(buffer, &mut writer)
        .and_then(|()| writer.flush().map_err(TurtleError::from));
    match written {
        Ok(()) => {
            log::debug!(
                "wrote {}x{} bitmap to {}",
                buffer.width(),
                buffer.height(),
                path.display()
            );
            Ok(())
        }
        Err(TurtleError::Stream(e)) => Err(TurtleError::io(path, e)),
        Err(e) => Err(e),
    }
}
