//! The turtle: a pen with a pose that draws onto a [`PixelBuffer`]
//!
//! Stroke pixels (lines, outlines, digits) go through `draw_pixel`, which
//! checks the centered field range, counts and reports misses, and feeds the
//! video sequencer. Fill pixels (discs, polygons) go through `fill_pixel`,
//! which only drops writes that fall outside storage.

mod icon;
mod state;

pub use state::{normalize_heading, TurtleState};

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use crate::bmp;
use crate::canvas::PixelBuffer;
use crate::color::Color;
use crate::error::{Result, TurtleError};
use crate::glyphs;
use crate::raster;
use crate::video::FrameSequencer;

/// Vertices recorded per polygon; further moves are not recorded
pub const MAX_POLYGON_VERTICES: usize = 128;

/// Out-of-bounds stroke pixels reported per turtle before going quiet
const MAX_REPORTED_OUT_OF_BOUNDS: u64 = 100;

#[derive(Debug)]
pub struct Turtle {
    state: TurtleState,
    canvas: PixelBuffer,
    vertices: Vec<(f64, f64)>,
    out_of_bounds: u64,
    video: FrameSequencer,
}

impl Turtle {
    /// Create a white `width` x `height` field with the turtle at its center
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Self {
            state: TurtleState::default(),
            canvas: PixelBuffer::with_size(width, height)?,
            vertices: Vec::with_capacity(MAX_POLYGON_VERTICES),
            out_of_bounds: 0,
            video: FrameSequencer::new(),
        })
    }

    /// Replace the field with a fresh white one and reset everything else
    ///
    /// Video is disabled and the out-of-bounds counter restarts; the frame
    /// directory is kept.
    pub fn reinitialize(&mut self, width: u32, height: u32) -> Result<()> {
        self.canvas = PixelBuffer::with_size(width, height)?;
        self.out_of_bounds = 0;
        self.video = FrameSequencer::with_dir(self.video.dir());
        self.reset();
        Ok(())
    }

    /// Back to the origin, facing right, black pen, green fill, pen down,
    /// not filling
    pub fn reset(&mut self) {
        self.state = TurtleState::default();
        self.vertices.clear();
    }

    /// Snapshot of the current pose and pen settings
    pub fn backup(&self) -> TurtleState {
        self.state
    }

    /// Reinstate a snapshot taken with `backup`
    pub fn restore(&mut self, state: TurtleState) {
        self.state = state;
    }

    #[inline]
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    // ========================================================================
    // Movement
    // ========================================================================

    /// Move along the heading, drawing if the pen is down
    pub fn forward(&mut self, pixels: i32) -> Result<()> {
        let radians = self.state.heading * PI / 180.0;
        let dx = radians.cos() * f64::from(pixels);
        let dy = radians.sin() * f64::from(pixels);
        self.go_to_f(self.state.x + dx, self.state.y + dy)
    }

    pub fn backward(&mut self, pixels: i32) -> Result<()> {
        self.forward(-pixels)
    }

    /// Sidestep to the left without changing the heading
    pub fn strafe_left(&mut self, pixels: i32) -> Result<()> {
        let heading = self.state.heading;
        self.turn_left(90.0);
        self.forward(pixels)?;
        self.state.heading = heading;
        Ok(())
    }

    /// Sidestep to the right without changing the heading
    pub fn strafe_right(&mut self, pixels: i32) -> Result<()> {
        let heading = self.state.heading;
        self.turn_right(90.0);
        self.forward(pixels)?;
        self.state.heading = heading;
        Ok(())
    }

    /// Rotate counter-clockwise
    pub fn turn_left(&mut self, degrees: f64) {
        self.state.heading = normalize_heading(self.state.heading + degrees);
    }

    /// Rotate clockwise
    pub fn turn_right(&mut self, degrees: f64) {
        self.turn_left(-degrees);
    }

    /// Face an absolute direction: 0 is right, 90 is up
    pub fn set_heading(&mut self, degrees: f64) {
        self.state.heading = normalize_heading(degrees);
    }

    pub fn go_to(&mut self, x: i32, y: i32) -> Result<()> {
        self.go_to_f(f64::from(x), f64::from(y))
    }

    /// Move to an exact position, drawing if the pen is down
    ///
    /// While filling with the pen down the destination is also recorded as
    /// a polygon vertex.
    pub fn go_to_f(&mut self, x: f64, y: f64) -> Result<()> {
        if self.state.pen_down {
            self.draw_line(
                self.state.x.round() as i32,
                self.state.y.round() as i32,
                x.round() as i32,
                y.round() as i32,
            )?;
        }

        self.state.x = x;
        self.state.y = y;

        if self.state.filling
            && self.state.pen_down
            && self.vertices.len() < MAX_POLYGON_VERTICES
        {
            self.vertices.push((x, y));
        }
        Ok(())
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.state.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.state.y
    }

    #[inline]
    pub fn heading(&self) -> f64 {
        self.state.heading
    }

    // ========================================================================
    // Pen
    // ========================================================================

    pub fn pen_up(&mut self) {
        self.state.pen_down = false;
    }

    pub fn pen_down(&mut self) {
        self.state.pen_down = true;
    }

    pub fn set_pen_color(&mut self, red: u8, green: u8, blue: u8) {
        self.state.stroke_color = Color::new(red, green, blue);
    }

    pub fn set_fill_color(&mut self, red: u8, green: u8, blue: u8) {
        self.state.fill_color = Color::new(red, green, blue);
    }

    /// Start recording vertices for a polygon fill
    pub fn begin_fill(&mut self) {
        self.state.filling = true;
        self.vertices.clear();
    }

    /// Fill the recorded polygon, then re-stroke its edges
    ///
    /// The scanline fill can leave gaps along sharp edges; the re-stroke
    /// covers them with the pen color. The vertex list is consumed.
    pub fn end_fill(&mut self) -> Result<()> {
        self.state.filling = false;
        let vertices = std::mem::take(&mut self.vertices);
        if vertices.len() > MAX_POLYGON_VERTICES {
            return Err(TurtleError::VertexOverflow {
                count: vertices.len(),
            });
        }

        let half = (self.canvas.height() / 2) as i32;
        raster::scanline_fill(&vertices, -half..half, |x, y| {
            self.fill_pixel(x, y);
            Ok(())
        })?;

        for ((x0, y0), (x1, y1)) in raster::polygon_edges(&vertices) {
            self.draw_line(x0, y0, x1, y1)?;
        }

        // Hand the allocation back for the next polygon
        self.vertices = vertices;
        self.vertices.clear();
        Ok(())
    }

    /// Vertices recorded since `begin_fill`
    pub fn vertices(&self) -> &[(f64, f64)] {
        &self.vertices
    }

    // ========================================================================
    // Pixels
    // ========================================================================

    /// Stroke one pixel at the current position, regardless of pen state
    pub fn dot(&mut self) -> Result<()> {
        self.draw_pixel(self.state.x.round() as i32, self.state.y.round() as i32)
    }

    /// Set one pixel to the pen color, regardless of position or pen state
    ///
    /// Points outside the field are dropped and counted. When video is on,
    /// this may write a frame file.
    pub fn draw_pixel(&mut self, x: i32, y: i32) -> Result<()> {
        if !self.canvas.in_bounds(x, y) {
            self.out_of_bounds += 1;
            if self.out_of_bounds < MAX_REPORTED_OUT_OF_BOUNDS {
                log::warn!("pixel out of bounds: ({}, {})", x, y);
            } else if self.out_of_bounds == MAX_REPORTED_OUT_OF_BOUNDS {
                log::warn!(
                    "pixel out of bounds: ({}, {}); further out-of-bounds pixels will not be reported",
                    x,
                    y
                );
            }
            return Ok(());
        }

        self.canvas.set_pixel(x, y, self.state.stroke_color);

        if self.video.tick() {
            self.save_frame()?;
        }
        Ok(())
    }

    /// Set one pixel to the fill color; writes outside storage are dropped
    pub fn fill_pixel(&mut self, x: i32, y: i32) {
        self.canvas.set_pixel(x, y, self.state.fill_color);
    }

    /// Color at a centered coordinate, if it maps into storage
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.canvas.get_pixel(x, y)
    }

    /// Stroke pixels dropped for falling outside the field so far
    pub fn out_of_bounds_count(&self) -> u64 {
        self.out_of_bounds
    }

    #[inline]
    pub fn canvas(&self) -> &PixelBuffer {
        &self.canvas
    }

    // ========================================================================
    // Shapes
    // ========================================================================

    /// Stroke a line between two points, regardless of position or pen state
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<()> {
        raster::line(x0, y0, x1, y1, |x, y| self.draw_pixel(x, y))
    }

    /// Stroke a circle outline; while filling, the disc is filled first
    pub fn draw_circle(&mut self, x: i32, y: i32, radius: i32) -> Result<()> {
        if self.state.filling {
            self.fill_circle(x, y, radius)?;
        }
        raster::circle(x, y, radius, |px, py| self.draw_pixel(px, py))
    }

    /// Fill a disc with the fill color, regardless of position or pen state
    pub fn fill_circle(&mut self, x: i32, y: i32, radius: i32) -> Result<()> {
        raster::disc(x, y, radius, |px, py| {
            self.fill_pixel(px, py);
            Ok(())
        })
    }

    /// Fill a disc centered on the current position (truncated to pixels)
    pub fn fill_circle_here(&mut self, radius: i32) -> Result<()> {
        self.fill_circle(self.state.x as i32, self.state.y as i32, radius)
    }

    /// Print a non-negative integer with the 4x5 digit font
    ///
    /// The current position is the top-left corner of the first digit.
    pub fn draw_integer(&mut self, value: u32) -> Result<()> {
        let (x, y) = (self.state.x, self.state.y);
        for (dx, dy) in glyphs::integer_pixels(value) {
            self.draw_pixel((x + f64::from(dx)) as i32, (y + f64::from(dy)) as i32)?;
        }
        Ok(())
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Write the field to a bitmap file
    pub fn save_bitmap(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        bmp::save(&self.canvas, path)?;
        log::info!("saved {}", path.display());
        Ok(())
    }

    /// Emit a frame every `pixels_per_frame` stroke pixels from now on
    pub fn begin_video(&mut self, pixels_per_frame: u32) -> Result<()> {
        self.video.begin(pixels_per_frame)?;
        log::info!(
            "video started: one frame every {} pixels into {}",
            pixels_per_frame,
            self.video.dir().display()
        );
        Ok(())
    }

    /// Write the field as the next numbered frame
    pub fn save_frame(&mut self) -> Result<PathBuf> {
        let path = self.video.next_frame_path();
        bmp::save(&self.canvas, &path)?;
        log::debug!("frame {} -> {}", self.video.frame(), path.display());
        Ok(path)
    }

    pub fn end_video(&mut self) {
        if self.video.is_enabled() {
            log::info!("video stopped after {} frames", self.video.frame());
        }
        self.video.end();
    }

    /// Directory frame files are written into
    pub fn set_frame_dir(&mut self, dir: impl Into<PathBuf>) {
        self.video.set_dir(dir);
    }

    pub fn video(&self) -> &FrameSequencer {
        &self.video
    }
}
