//! # turtlebmp - Turtle Graphics to Bitmap
//!
//! A turtle with a pen draws onto a fixed-size pixel field; the field is
//! written out as 24-bit BMP images, optionally one frame every N stroke
//! pixels to make an animation.
//!
//! - **Turtle**: pose, pen and fill state, moves, turns, backup and restore
//! - **Rasterizing**: lines, circle outlines, discs, scanline polygon fill
//! - **Glyphs**: a 4x5 digit font for printing integers
//! - **Output**: 24-bit BMP encoding and numbered video frames
//! - **Scripts**: JSON command lists driven by the `turtlebmp` binary
//!
//! ## Coordinates
//!
//! The origin is the center of the field, +x is right, +y is up. Stroke
//! pixels are accepted for `-w/2 <= x <= w/2` and `-h/2 <= y <= h/2`.
//! Headings are degrees counter-clockwise from +x.
//!
//! ## Quick Start
//!
//! ```no_run
//! use turtlebmp::Turtle;
//!
//! let mut turtle = Turtle::new(200, 200)?;
//! turtle.set_pen_color(0, 0, 255);
//! turtle.begin_fill();
//! for _ in 0..4 {
//!     turtle.forward(50)?;
//!     turtle.turn_left(90.0);
//! }
//! turtle.end_fill()?;
//! turtle.save_bitmap("square.bmp")?;
//! # Ok::<(), turtlebmp::TurtleError>(())
//! ```

pub mod bmp;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod glyphs;
pub mod raster;
pub mod script;
pub mod turtle;
pub mod video;

pub use canvas::PixelBuffer;
pub use color::Color;
pub use config::CanvasConfig;
pub use error::{Result, TurtleError};
pub use script::{Command, Script};
pub use turtle::{Turtle, TurtleState};
