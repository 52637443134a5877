use std::path::PathBuf;

use math::Color;

use crate::Settings;

#[derive(clap::Parser, Debug, Default)]
#[command(name = "raster", version, about = "Draws the raster primitives demo scene", long_about = None)]
pub struct Arguments {
    /// Where to write the rendered image (binary PPM)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Bitmap font source to draw text with
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    font: Option<PathBuf>,

    /// Width of the canvas in pixels
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    width: Option<u16>,

    /// Height of the canvas in pixels
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    height: Option<u16>,

    /// Background color, as #rrggbb
    #[arg(long, value_parser = parse_color)]
    background: Option<Color>,

    /// Size of a single font pixel on the canvas
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..))]
    text_scale: Option<u8>,

    /// Advance of the space character in unscaled font pixels
    #[arg(long)]
    space_width: Option<u8>,
}

impl Arguments {
    pub(crate) fn update_settings(self, settings: &mut Settings) {
        if let Some(output) = self.output {
            settings.output = output;
        }

        if let Some(font) = self.font {
            settings.font = font;
        }

        if let Some(width) = self.width {
            settings.width = width.into();
        }

        if let Some(height) = self.height {
            settings.height = height.into();
        }

        if let Some(background) = self.background {
            settings.background = background;
        }

        if let Some(text_scale) = self.text_scale {
            settings.text_scale = text_scale.into();
        }

        if let Some(space_width) = self.space_width {
            settings.space_width = space_width.into();
        }
    }
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse().map_err(|e: math::InvalidColor| format!("{e}"))
}
