//! Responsible for creating and managing the settings of a raster run

mod cli;

use std::path::PathBuf;

use clap::Parser;
use math::Color;

pub use cli::Arguments;

/// The font that ships with the workspace, relative to the working directory
pub const DEFAULT_FONT: &str = "assets/font.txt";

/// Holds all the configurable information for a raster run
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Canvas dimensions in pixels
    pub width: usize,
    pub height: usize,

    /// The color every pixel starts out with
    pub background: Color,

    /// Bitmap font source used for text
    pub font: PathBuf,

    /// Size of a single font pixel on the canvas
    pub text_scale: i32,

    /// Advance of the space character, in unscaled font pixels
    pub space_width: i32,

    /// Where the rendered image is written to
    pub output: PathBuf,
}

impl Settings {
    /// Build the settings from the process' command line
    #[must_use]
    pub fn init() -> Self {
        Self::from_arguments(Arguments::parse())
    }

    #[must_use]
    pub fn from_arguments(arguments: Arguments) -> Self {
        let mut settings = Self::default();
        arguments.update_settings(&mut settings);
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            background: Color::BLACK,
            font: PathBuf::from(DEFAULT_FONT),
            text_scale: 3,
            space_width: 8,
            output: PathBuf::from("raster.ppm"),
        }
    }
}
