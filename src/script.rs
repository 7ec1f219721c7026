//! JSON drawing scripts
//!
//! A script is a canvas configuration plus a list of turtle commands:
//!
//! ```json
//! {
//!   "canvas": { "width": 200, "height": 200 },
//!   "commands": [
//!     { "op": "set_pen_color", "color": [255, 0, 0] },
//!     { "op": "forward", "pixels": 50 },
//!     { "op": "turn_left", "degrees": 90 },
//!     { "op": "save", "path": "step.bmp" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::config::CanvasConfig;
use crate::error::{Result, TurtleError};
use crate::turtle::{Turtle, TurtleState};

/// One turtle operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    Forward { pixels: i32 },
    Backward { pixels: i32 },
    StrafeLeft { pixels: i32 },
    StrafeRight { pixels: i32 },
    TurnLeft { degrees: f64 },
    TurnRight { degrees: f64 },
    SetHeading { degrees: f64 },
    GoTo { x: f64, y: f64 },
    PenUp,
    PenDown,
    SetPenColor { color: Color },
    SetFillColor { color: Color },
    BeginFill,
    EndFill,
    Dot,
    DrawPixel { x: i32, y: i32 },
    DrawLine { x0: i32, y0: i32, x1: i32, y1: i32 },
    DrawCircle { x: i32, y: i32, radius: i32 },
    FillCircle { x: i32, y: i32, radius: i32 },
    FillCircleHere { radius: i32 },
    DrawInteger { value: u32 },
    DrawTurtle,
    /// Push the current state onto the script's snapshot stack
    Backup,
    /// Pop the most recent snapshot; ignored if the stack is empty
    Restore,
    Reset,
    BeginVideo { pixels_per_frame: u32 },
    EndVideo,
    /// Write the field as it is now
    Save { path: PathBuf },
}

/// A canvas configuration and the commands to run on it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl Script {
    /// Read and parse a script file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TurtleError::ScriptIo {
            path: path.to_path_buf(),
            source,
        })?;
        let script: Self = serde_json::from_str(&json).map_err(|source| TurtleError::Script {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded {} commands from {}", script.commands.len(), path.display());
        Ok(script)
    }

    /// Parse a script from a string; errors name the source as `<inline>`
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| TurtleError::Script {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Serialize back to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|source| TurtleError::Script {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Allocate a turtle for this script's canvas
    pub fn build(&self) -> Result<Turtle> {
        self.canvas.build()
    }

    /// Execute every command in order, stopping at the first failure
    pub fn run(&self, turtle: &mut Turtle) -> Result<()> {
        let mut snapshots: Vec<TurtleState> = Vec::new();
        for (index, command) in self.commands.iter().enumerate() {
            log::trace!("#{} {:?}", index, command);
            apply(turtle, command, &mut snapshots)?;
        }
        Ok(())
    }
}

fn apply(turtle: &mut Turtle, command: &Command, snapshots: &mut Vec<TurtleState>) -> Result<()> {
    match *command {
        Command::Forward { pixels } => turtle.forward(pixels)?,
        Command::Backward { pixels } => turtle.backward(pixels)?,
        Command::StrafeLeft { pixels } => turtle.strafe_left(pixels)?,
        Command::StrafeRight { pixels } => turtle.strafe_right(pixels)?,
        Command::TurnLeft { degrees } => turtle.turn_left(degrees),
        Command::TurnRight { degrees } => turtle.turn_right(degrees),
        Command::SetHeading { degrees } => turtle.set_heading(degrees),
        Command::GoTo { x, y } => turtle.go_to_f(x, y)?,
        Command::PenUp => turtle.pen_up(),
        Command::PenDown => turtle.pen_down(),
        Command::SetPenColor { color } => turtle.set_pen_color(color.red, color.green, color.blue),
        Command::SetFillColor { color } => {
            turtle.set_fill_color(color.red, color.green, color.blue)
        }
        Command::BeginFill => turtle.begin_fill(),
        Command::EndFill => turtle.end_fill()?,
        Command::Dot => turtle.dot()?,
        Command::DrawPixel { x, y } => turtle.draw_pixel(x, y)?,
        Command::DrawLine { x0, y0, x1, y1 } => turtle.draw_line(x0, y0, x1, y1)?,
        Command::DrawCircle { x, y, radius } => turtle.draw_circle(x, y, radius)?,
        Command::FillCircle { x, y, radius } => turtle.fill_circle(x, y, radius)?,
        Command::FillCircleHere { radius } => turtle.fill_circle_here(radius)?,
        Command::DrawInteger { value } => turtle.draw_integer(value)?,
        Command::DrawTurtle => turtle.draw_turtle_icon()?,
        Command::Backup => snapshots.push(turtle.backup()),
        Command::Restore => match snapshots.pop() {
            Some(state) => turtle.restore(state),
            None => log::warn!("restore with no saved state, ignored"),
        },
        Command::Reset => turtle.reset(),
        Command::BeginVideo { pixels_per_frame } => turtle.begin_video(pixels_per_frame)?,
        Command::EndVideo => turtle.end_video(),
        Command::Save { ref path } => turtle.save_bitmap(path)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_tagged_commands() {
        let script = Script::from_json(
            r#"{
                "canvas": {"width": 32, "height": 16},
                "commands": [
                    {"op": "pen_up"},
                    {"op": "go_to", "x": 1.5, "y": -2},
                    {"op": "set_pen_color", "color": [1, 2, 3]},
                    {"op": "draw_line", "x0": 0, "y0": 0, "x1": 3, "y1": 0},
                    {"op": "save", "path": "out.bmp"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(script.canvas.width, 32);
        assert_eq!(
            script.commands,
            vec![
                Command::PenUp,
                Command::GoTo { x: 1.5, y: -2.0 },
                Command::SetPenColor {
                    color: Color::new(1, 2, 3)
                },
                Command::DrawLine {
                    x0: 0,
                    y0: 0,
                    x1: 3,
                    y1: 0
                },
                Command::Save {
                    path: PathBuf::from("out.bmp")
                },
            ]
        );
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let err = Script::from_json(r#"{"commands": [{"op": "moonwalk"}]}"#).unwrap_err();
        assert!(matches!(err, TurtleError::Script { .. }));
    }

    #[test]
    fn test_missing_sections_default() {
        let script = Script::from_json("{}").unwrap();
        assert_eq!(script, Script::default());
    }

    #[test]
    fn test_run_draws_and_restores() {
        let script = Script::from_json(
            r#"{
                "canvas": {"width": 32, "height": 32},
                "commands": [
                    {"op": "backup"},
                    {"op": "set_pen_color", "color": [255, 0, 0]},
                    {"op": "forward", "pixels": 5},
                    {"op": "restore"},
                    {"op": "restore"},
                    {"op": "set_heading", "degrees": 90},
                    {"op": "forward", "pixels": 3}
                ]
            }"#,
        )
        .unwrap();
        let mut turtle = script.build().unwrap();
        script.run(&mut turtle).unwrap();

        assert_eq!(turtle.pixel(5, 0), Some(Color::new(255, 0, 0)));
        assert_eq!(turtle.pixel(0, 3), Some(Color::BLACK));
        assert!(turtle.x().abs() < 1e-9);
        assert_eq!(turtle.state().stroke_color, Color::BLACK);
    }

    #[test]
    fn test_run_stops_at_first_error() {
        let script = Script {
            canvas: CanvasConfig::default(),
            commands: vec![
                Command::BeginVideo { pixels_per_frame: 0 },
                Command::DrawPixel { x: 0, y: 0 },
            ],
        };
        let mut turtle = Turtle::new(8, 8).unwrap();
        assert!(matches!(
            script.run(&mut turtle),
            Err(TurtleError::InvalidFrameInterval)
        ));
        assert_eq!(turtle.pixel(0, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = Script::load(&path).unwrap_err();
        assert!(matches!(err, TurtleError::ScriptIo { path: p, .. } if p == path));
    }

    #[test]
    fn test_to_json_reloads() {
        let script = Script {
            canvas: CanvasConfig::default(),
            commands: vec![Command::DrawTurtle, Command::TurnLeft { degrees: 45.0 }],
        };
        let json = script.to_json().unwrap();
        assert!(json.contains(r#""op": "draw_turtle""#));
        assert_eq!(Script::from_json(&json).unwrap(), script);
    }
}
