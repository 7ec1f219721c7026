use crate::color::Color;
use crate::error::{Result, TurtleError};

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGB pixel field the turtle draws on
///
/// Storage is row-major with row 0 at the bottom. Callers address pixels with
/// centered coordinates: (0, 0) is the middle of the field, +y points up.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: Vec<Color>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a white buffer with a custom resolution
    ///
    /// The reservation is fallible so an oversized field surfaces as
    /// `TurtleError::Allocation` instead of aborting.
    pub fn with_size(width: u32, height: u32) -> Result<Self> {
        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or(TurtleError::Allocation {
                what: "pixel buffer",
                bytes: usize::MAX,
            })?;
        let bytes = count.saturating_mul(std::mem::size_of::<Color>());

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(count)
            .map_err(|_| TurtleError::Allocation {
                what: "pixel buffer",
                bytes,
            })?;
        pixels.resize(count, Color::WHITE);

        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn half_width(&self) -> i64 {
        i64::from(self.width / 2)
    }

    #[inline]
    fn half_height(&self) -> i64 {
        i64::from(self.height / 2)
    }

    /// Check a centered coordinate against `[-w/2, w/2] x [-h/2, h/2]`
    ///
    /// Both ends are inclusive, so on even-sized fields the `+w/2` column
    /// lands on the next row's first pixel and the `+h/2` row falls off the
    /// end of storage. `index_of` drops the latter.
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        x >= -self.half_width()
            && x <= self.half_width()
            && y >= -self.half_height()
            && y <= self.half_height()
    }

    /// Flat storage index for a centered coordinate, if it lands in storage
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let idx = i64::from(self.width) * (i64::from(y) + self.half_height())
            + (i64::from(x) + self.half_width());
        if idx >= 0 && (idx as u64) < self.pixels.len() as u64 {
            Some(idx as usize)
        } else {
            None
        }
    }

    /// Write a pixel through the flat index check. Returns false when dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index_of(x, y) {
            Some(idx) => {
                self.pixels[idx] = color;
                true
            }
            None => false,
        }
    }

    /// Read a pixel through the same mapping `set_pixel` uses
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|idx| self.pixels[idx])
    }

    /// Storage rows from the bottom of the field to the top
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }
}
