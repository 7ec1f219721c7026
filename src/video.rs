//! Frame sequencing for turning a drawing session into an animation
//!
//! While enabled, every stroke pixel ticks a counter and a frame is due each
//! time the counter (checked before incrementing) is a multiple of the
//! interval, so the very first pixel after `begin` emits frame 1.

use std::path::{Path, PathBuf};

use crate::error::{Result, TurtleError};

/// Stroke pixels between frames when nothing else is configured
pub const DEFAULT_FRAME_INTERVAL: u32 = 10;

/// File name of the `n`th frame, e.g. `frame00001.bmp`
pub fn frame_file_name(n: u32) -> String {
    format!("frame{:05}.bmp", n)
}

/// Counts stroke pixels and numbers video frames
#[derive(Debug, Clone)]
pub struct FrameSequencer {
    enabled: bool,
    frame: u32,
    interval: u32,
    pixel_count: u64,
    dir: PathBuf,
}

impl FrameSequencer {
    /// Disabled sequencer writing frames into the current directory
    pub fn new() -> Self {
        Self::with_dir(".")
    }

    /// Disabled sequencer writing frames into `dir`
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            enabled: false,
            frame: 0,
            interval: DEFAULT_FRAME_INTERVAL,
            pixel_count: 0,
            dir: dir.into(),
        }
    }

    /// Enable emission and restart both the frame and pixel counters
    pub fn begin(&mut self, pixels_per_frame: u32) -> Result<()> {
        if pixels_per_frame == 0 {
            return Err(TurtleError::InvalidFrameInterval);
        }
        self.enabled = true;
        self.frame = 0;
        self.interval = pixels_per_frame;
        self.pixel_count = 0;
        Ok(())
    }

    /// Stop emitting; counters are kept
    pub fn end(&mut self) {
        self.enabled = false;
    }

    /// Record one stroke pixel. Returns true when a frame should be emitted.
    #[inline]
    pub fn tick(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        let due = self.pixel_count % u64::from(self.interval) == 0;
        self.pixel_count += 1;
        due
    }

    /// Advance the frame number and return where that frame goes
    pub fn next_frame_path(&mut self) -> PathBuf {
        self.frame += 1;
        self.dir.join(frame_file_name(self.frame))
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Number of the last frame handed out (0 before the first)
    #[inline]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.pixel_count
    }

    #[inline]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.dir = dir.into();
    }
}

impl Default for FrameSequencer {
    fn default() -> Self {
        Self::new()
    }
}
