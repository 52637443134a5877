pub const GLYPH_WIDTH: usize = 8;
pub const GLYPH_HEIGHT: usize = 8;

/// An 8x8 monochrome bitmap
///
/// Each byte is one row, top to bottom. Bit 7 is the leftmost column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Glyph([u8; GLYPH_HEIGHT]);

impl Glyph {
    #[inline]
    #[must_use]
    pub const fn from_rows(rows: [u8; GLYPH_HEIGHT]) -> Self {
        Self(rows)
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> &[u8; GLYPH_HEIGHT] {
        &self.0
    }

    /// Return `true` if the pixel in the given row and column is set
    #[inline]
    #[must_use]
    pub const fn is_set(&self, row: usize, column: usize) -> bool {
        self.0[row] & (0x80 >> column) != 0
    }

    /// The `(column, row)` coordinates of every set pixel, row by row
    pub fn set_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_HEIGHT).flat_map(move |row| {
            (0..GLYPH_WIDTH)
                .filter(move |&column| self.is_set(row, column))
                .map(move |column| (column, row))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Glyph;

    #[test]
    fn most_significant_bit_is_leftmost() {
        let glyph = Glyph::from_rows([0x80, 0x01, 0, 0, 0, 0, 0, 0xFF]);

        assert!(glyph.is_set(0, 0));
        assert!(!glyph.is_set(0, 1));
        assert!(glyph.is_set(1, 7));
        assert!(!glyph.is_set(1, 0));
        assert!((0..8).all(|column| glyph.is_set(7, column)));
    }

    #[test]
    fn set_pixels() {
        let glyph = Glyph::from_rows([0xC0, 0, 0, 0, 0, 0, 0, 0x01]);
        let pixels: Vec<_> = glyph.set_pixels().collect();

        assert_eq!(pixels, vec![(0, 0), (1, 0), (7, 7)]);
        assert_eq!(Glyph::default().set_pixels().count(), 0);
    }
}
