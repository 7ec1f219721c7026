//! # turtlebmp CLI
//!
//! Runs a JSON drawing script and writes the final field as a bitmap.
//!
//! ```bash
//! # Render with the script's own canvas settings
//! turtlebmp drawing.json -o drawing.bmp
//!
//! # Override the size and record a frame every 50 stroke pixels
//! turtlebmp drawing.json --width 320 --height 240 --frames-every 50 --frames-dir frames
//! ```
//!
//! Set `RUST_LOG=debug` to see every frame written.

use std::path::PathBuf;

use clap::Parser;

use turtlebmp::{Script, TurtleError};

/// Turtle graphics to 24-bit BMP
#[derive(Parser, Debug)]
#[command(name = "turtlebmp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON script to run
    script: PathBuf,

    /// Where to write the final bitmap
    #[arg(short, long, value_name = "FILE", default_value = "out.bmp")]
    output: PathBuf,

    /// Field width in pixels (overrides the script)
    #[arg(long)]
    width: Option<u32>,

    /// Field height in pixels (overrides the script)
    #[arg(long)]
    height: Option<u32>,

    /// Write a video frame every N stroke pixels
    #[arg(long, value_name = "N")]
    frames_every: Option<u32>,

    /// Directory for video frames
    #[arg(long, value_name = "DIR")]
    frames_dir: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), TurtleError> {
    let cli = Cli::parse();

    let mut script = Script::load(&cli.script)?;
    if let Some(width) = cli.width {
        script.canvas.width = width;
    }
    if let Some(height) = cli.height {
        script.canvas.height = height;
    }
    if cli.frames_every.is_some() {
        script.canvas.frame_interval = cli.frames_every;
    }
    if let Some(dir) = cli.frames_dir {
        script.canvas.frame_dir = dir;
    }

    let mut turtle = script.build()?;
    script.run(&mut turtle)?;
    turtle.end_video();
    turtle.save_bitmap(&cli.output)?;

    if turtle.out_of_bounds_count() > 0 {
        log::warn!(
            "{} stroke pixels fell outside the field",
            turtle.out_of_bounds_count()
        );
    }
    Ok(())
}
