//! 8-bit RGB color

use serde::{Deserialize, Serialize};

/// An opaque RGB triplet. Scripts spell it as `[r, g, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const GREEN: Color = Color::new(0, 255, 0);

    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Channels in the order bitmap files store them
    #[inline]
    pub const fn to_bgr(self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self { red, green, blue }
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.red, c.green, c.blue]
    }
}
