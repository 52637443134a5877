use canvas::Surface;
use math::{Color, Point};

use crate::{FontTable, GLYPH_WIDTH};

/// Draw a single character with its top left corner at `position`.
///
/// Every pixel of the glyph becomes a `scale` x `scale` square. Characters
/// without a glyph in `font` draw nothing.
pub fn draw_char<S: Surface>(
    surface: &mut S,
    position: Point,
    character: char,
    font: &FontTable,
    color: Color,
    scale: i32,
) {
    let Some(glyph) = font.get(character) else {
        return;
    };

    for (column, row) in glyph.set_pixels() {
        // Squares whose corner doesn't fit into an i32 are outside every surface
        let (Some(x), Some(y)) = (
            scaled_offset(position.x, column, scale),
            scaled_offset(position.y, row, scale),
        ) else {
            continue;
        };

        surface.fill_rect(x, y, scale, scale, color);
    }
}

/// `origin + index * scale`, if it fits into an `i32`
fn scaled_offset(origin: i32, index: usize, scale: i32) -> Option<i32> {
    let offset = i64::try_from(index).ok()? * i64::from(scale);
    i32::try_from(i64::from(origin) + offset).ok()
}

/// How far the cursor moves for a single character
fn advance(character: char, space_width: i32, scale: i32) -> i64 {
    if character == ' ' {
        i64::from(space_width) * i64::from(scale)
    } else {
        GLYPH_WIDTH as i64 * i64::from(scale)
    }
}

/// Draw a line of text, starting with the top left corner at `position`.
///
/// Spaces are not drawn and advance the cursor by `space_width * scale`.
/// Every other character advances it by one glyph width, even if the font has no
/// glyph for it.
pub fn draw_text<S: Surface>(
    surface: &mut S,
    position: Point,
    text: &str,
    font: &FontTable,
    color: Color,
    space_width: i32,
    scale: i32,
) {
    let mut cursor = i64::from(position.x);

    for character in text.chars() {
        if character != ' ' {
            // A character starting outside the i32 range can't be visible
            if let Ok(x) = i32::try_from(cursor) {
                draw_char(surface, Point::new(x, position.y), character, font, color, scale);
            }
        }
        cursor = cursor.saturating_add(advance(character, space_width, scale));
    }
}

/// The horizontal distance the cursor travels when drawing `text` with [draw_text]
#[must_use]
pub fn text_width(text: &str, space_width: i32, scale: i32) -> i64 {
    text.chars().fold(0, |width: i64, character| {
        width.saturating_add(advance(character, space_width, scale))
    })
}
