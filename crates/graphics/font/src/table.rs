//! Decoding of font sources into a [FontTable]

use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use error_derive::Error;

use crate::{Glyph, GLYPH_HEIGHT};

/// An inclusive range of characters whose glyphs are stored back to back
#[derive(Clone, Copy, Debug)]
struct CharacterRange {
    first: u8,
    last: u8,
}

impl CharacterRange {
    const fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    fn characters(&self) -> impl Iterator<Item = char> {
        (self.first..=self.last).map(char::from)
    }
}

/// The characters covered by a font source, in the order in which their glyphs appear
const CHARACTER_RANGES: [CharacterRange; 3] = [
    CharacterRange {
        first: b'A',
        last: b'Z',
    },
    CharacterRange {
        first: b'0',
        last: b'9',
    },
    CharacterRange {
        first: b' ',
        last: b' ',
    },
];

/// The number of glyphs in a complete font source
pub const GLYPH_COUNT: usize = {
    let mut count = 0;
    let mut i = 0;
    while i < CHARACTER_RANGES.len() {
        count += CHARACTER_RANGES[i].len();
        i += 1;
    }
    count
};

/// The number of hex tokens in a complete font source
pub const REQUIRED_TOKENS: usize = GLYPH_COUNT * GLYPH_HEIGHT;

/// Fonts only cover ASCII
const TABLE_SIZE: usize = 128;

#[derive(Debug, Error)]
pub enum FontLoadError {
    #[msg = "failed to read font source"]
    IO(io::Error),

    #[msg = "token {index} ({token:?}) is not a hexadecimal byte"]
    InvalidToken { index: usize, token: String },

    #[msg = "font source contains {found} tokens, but {required} are required"]
    TooFewTokens { found: usize, required: usize },
}

/// Maps characters to their [Glyph]
///
/// A table is either complete or empty, it is never partially populated.
#[derive(Clone, Debug)]
pub struct FontTable {
    glyphs: [Option<Glyph>; TABLE_SIZE],
}

impl Default for FontTable {
    fn default() -> Self {
        Self::empty()
    }
}

impl FontTable {
    /// A table without any glyphs. Drawing text with it draws nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            glyphs: [None; TABLE_SIZE],
        }
    }

    /// Decode a font from the text of a font source
    pub fn parse(source: &str) -> Result<Self, FontLoadError> {
        let tokens: Vec<&str> = source.split_ascii_whitespace().collect();

        if tokens.len() < REQUIRED_TOKENS {
            return Err(FontLoadError::TooFewTokens {
                found: tokens.len(),
                required: REQUIRED_TOKENS,
            });
        }

        if tokens.len() > REQUIRED_TOKENS {
            log::warn!(
                "Ignoring {} trailing tokens in font source",
                tokens.len() - REQUIRED_TOKENS
            );
        }

        let mut table = Self::empty();
        let characters = CHARACTER_RANGES
            .iter()
            .flat_map(CharacterRange::characters);
        for (glyph_index, character) in characters.enumerate() {
            let mut rows = [0; GLYPH_HEIGHT];

            for (row_index, row) in rows.iter_mut().enumerate() {
                let index = glyph_index * GLYPH_HEIGHT + row_index;
                let token = tokens[index];

                *row = parse_hex_byte(token).ok_or_else(|| FontLoadError::InvalidToken {
                    index,
                    token: token.to_owned(),
                })?;
            }

            table.glyphs[character as usize] = Some(Glyph::from_rows(rows));
        }

        Ok(table)
    }

    /// Decode a font from a reader, consuming all of its contents
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, FontLoadError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Self::parse(&source)
    }

    /// Decode the font source at the given path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, FontLoadError> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    #[must_use]
    pub fn get(&self, character: char) -> Option<&Glyph> {
        self.glyphs.get(character as usize)?.as_ref()
    }

    #[must_use]
    pub fn contains(&self, character: char) -> bool {
        self.get(character).is_some()
    }

    /// The number of characters with a glyph
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.iter().all(Option::is_none)
    }

    /// All characters with a glyph, in ascending order
    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs
            .iter()
            .enumerate()
            .filter(|(_, glyph)| glyph.is_some())
            .filter_map(|(code, _)| char::from_u32(code as u32))
    }
}

/// Parse a byte written as one or two hex digits, optionally prefixed with `0x`
fn parse_hex_byte(token: &str) -> Option<u8> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    u8::from_str_radix(digits, 16).ok()
}

/// Load the font source at `path`.
///
/// Any failure is logged and results in an empty [FontTable], text drawn with
/// it simply doesn't show up.
pub fn load_font<P: AsRef<Path>>(path: P) -> FontTable {
    let path = path.as_ref();

    match FontTable::from_path(path) {
        Ok(table) => {
            log::info!("Loaded {} glyphs from {}", table.len(), path.display());
            table
        },
        Err(error) => {
            log::error!("Failed to load font {}: {error}", path.display());
            FontTable::empty()
        },
    }
}
