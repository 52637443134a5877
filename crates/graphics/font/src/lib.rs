//! Fixed-width 8x8 bitmap fonts.
//!
//! A font source is a plain text file of whitespace separated hex bytes. Every glyph
//! takes up eight consecutive bytes, one per row, with the most significant bit being
//! the leftmost pixel. The glyphs appear in a fixed order: `A` to `Z`, `0` to `9` and
//! finally the space character.

mod glyph;
mod table;
mod text;

pub use glyph::{Glyph, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use table::{load_font, FontLoadError, FontTable, GLYPH_COUNT, REQUIRED_TOKENS};
pub use text::{draw_char, draw_text, text_width};
