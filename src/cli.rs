// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::core::LineMode;
use crate::demo::DEFAULT_SIZE;

#[derive(Parser, Debug, Clone)]
#[command(name = "rasterizer")]
#[command(about = "Software rasterizer writing binary PPM images", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render the rectangles, circles and lines demo images
    Demo {
        /// Directory the images are written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Width and height of the square demo images
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: u32,

        #[arg(long, value_enum, default_value_t = LineModeArg::Exact)]
        line_mode: LineModeArg,
    },

    /// Render a JSON scene description to a PPM file
    Render {
        scene: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Override the scene's line mode
        #[arg(long, value_enum)]
        line_mode: Option<LineModeArg>,
    },

    /// Decode a PPM file and report its dimensions
    Info { image: PathBuf },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineModeArg {
    Exact,
    Bresenham,
}

impl From<LineModeArg> for LineMode {
    fn from(arg: LineModeArg) -> Self {
        match arg {
            LineModeArg::Exact => LineMode::Exact,
            LineModeArg::Bresenham => LineMode::Bresenham,
        }
    }
}

impl Cli {
    /// Log filter implied by the verbosity flag
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
