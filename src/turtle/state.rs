//! Snapshot of the turtle's pose and pen

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Pose and pen settings of the turtle
///
/// A plain value: `Turtle::backup` hands one out and `Turtle::restore` takes
/// it back, so undo depth is whatever the caller keeps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    pub x: f64,
    pub y: f64,
    /// Degrees counter-clockwise from +x, always in `[0, 360)`
    pub heading: f64,
    pub stroke_color: Color,
    pub fill_color: Color,
    pub pen_down: bool,
    pub filling: bool,
}

impl Default for TurtleState {
    /// Origin, facing right, black pen, green fill, pen down, not filling
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            heading: 0.0,
            stroke_color: Color::BLACK,
            fill_color: Color::GREEN,
            pen_down: true,
            filling: false,
        }
    }
}

/// Wrap an angle in degrees into `[0, 360)`
#[inline]
pub fn normalize_heading(degrees: f64) -> f64 {
    let h = degrees.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360
    if h >= 360.0 {
        0.0
    } else {
        h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_heading() {
        assert_eq!(normalize_heading(370.0), 10.0);
        assert_eq!(normalize_heading(-90.0), 270.0);
        assert_eq!(normalize_heading(360.0), 0.0);
        assert_eq!(normalize_heading(1080.0 + 45.0), 45.0);
        let tiny = normalize_heading(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_default_pose() {
        let s = TurtleState::default();
        assert_eq!((s.x, s.y, s.heading), (0.0, 0.0, 0.0));
        assert_eq!(s.stroke_color, Color::BLACK);
        assert_eq!(s.fill_color, Color::GREEN);
        assert!(s.pen_down && !s.filling);
    }
}
