//! Canvas configuration shared by scripts and the command line

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::canvas::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::Result;
use crate::turtle::Turtle;

/// Size of the field and optional video settings
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Stroke pixels per video frame; `None` leaves video off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_interval: Option<u32>,
    /// Directory frame files are written into
    pub frame_dir: PathBuf,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            frame_interval: None,
            frame_dir: PathBuf::from("."),
        }
    }
}

impl CanvasConfig {
    /// Allocate a turtle for this configuration, with video already running
    /// if an interval is set
    pub fn build(&self) -> Result<Turtle> {
        let mut turtle = Turtle::new(self.width, self.height)?;
        turtle.set_frame_dir(&self.frame_dir);
        if let Some(interval) = self.frame_interval {
            turtle.begin_video(interval)?;
        }
        log::debug!("canvas {}x{}", self.width, self.height);
        Ok(turtle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TurtleError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_is_default() {
        let config: CanvasConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CanvasConfig::default());
        assert_eq!((config.width, config.height), (640, 480));
    }

    #[test]
    fn test_partial_override() {
        let config: CanvasConfig =
            serde_json::from_str(r#"{"width": 32, "frame_interval": 5}"#).unwrap();
        assert_eq!(config.width, 32);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.frame_interval, Some(5));
    }

    #[test]
    fn test_build() {
        let dir = tempfile::tempdir().unwrap();
        let config = CanvasConfig {
            width: 20,
            height: 10,
            frame_interval: Some(3),
            frame_dir: dir.path().to_path_buf(),
        };
        let turtle = config.build().unwrap();
        assert_eq!((turtle.canvas().width(), turtle.canvas().height()), (20, 10));
        assert!(turtle.video().is_enabled());
        assert_eq!(turtle.video().interval(), 3);
        assert_eq!(turtle.video().dir(), dir.path());
    }

    #[test]
    fn test_build_rejects_zero_interval() {
        let config = CanvasConfig {
            frame_interval: Some(0),
            ..CanvasConfig::default()
        };
        assert!(matches!(config.build(), Err(TurtleError::InvalidFrameInterval)));
    }
}
