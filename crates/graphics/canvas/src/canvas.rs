use math::Color;

use crate::Surface;

/// A fixed-size grid of colors that content should be drawn to
///
/// Reads outside of the canvas yield the background color, writes outside
/// of the canvas are silently dropped.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: Color,
    data: Vec<Color>,
}

impl Canvas {
    /// Create a canvas where every pixel has the `background` color
    #[must_use]
    pub fn new(width: usize, height: usize, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            data: vec![background; width * height],
        }
    }

    #[must_use]
    pub fn from_data(data: Vec<Color>, width: usize, height: usize, background: Color) -> Self {
        debug_assert_eq!(data.len(), width * height);

        Self {
            width,
            height,
            background,
            data,
        }
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The color the canvas was created with
    ///
    /// This is also the value returned for reads outside of the canvas.
    #[must_use]
    pub const fn background(&self) -> Color {
        self.background
    }

    /// Row-major pixel data
    #[must_use]
    pub fn data(&self) -> &[Color] {
        &self.data
    }

    /// Reset every pixel to the background color
    pub fn clear(&mut self) {
        self.data.fill(self.background);
    }

    /// Return `true` if the coordinates are inside the bounds of the canvas
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.index_of_pixel(x, y).is_some()
    }

    /// Access a specific pixel
    ///
    /// If the coordinates are outside the canvas, `default` will be returned
    #[must_use]
    pub fn get_or(&self, x: i32, y: i32, default: Color) -> Color {
        match self.index_of_pixel(x, y) {
            Some(index) => self.data[index],
            None => default,
        }
    }

    /// Count the pixels that currently have the given color
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.data.iter().filter(|&&pixel| pixel == color).count()
    }

    /// Calculate the index of the pixel data for a given set of coordinates,
    /// or `None` if they are outside of the canvas
    #[must_use]
    fn index_of_pixel(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;

        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

impl Surface for Canvas {
    fn is_valid(&self, x: i32, y: i32) -> bool {
        self.contains(x, y)
    }

    fn get_pixel(&self, x: i32, y: i32) -> Color {
        self.get_or(x, y, self.background)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(index) = self.index_of_pixel(x, y) {
            self.data[index] = color;
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        // Clip once instead of checking every pixel
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(width).min(self.width as i32);
        let y1 = y.saturating_add(height).min(self.height as i32);

        for py in y0..y1 {
            let row_start = py as usize * self.width;
            for px in x0..x1 {
                self.data[row_start + px as usize] = color;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, Surface};
    use math::Color;

    #[test]
    fn validity() {
        let canvas = Canvas::new(4, 3, Color::BLACK);
        assert!(canvas.is_valid(0, 0));
        assert!(canvas.is_valid(3, 2));
        assert!(!canvas.is_valid(4, 2));
        assert!(!canvas.is_valid(3, 3));
        assert!(!canvas.is_valid(-1, 0));
        assert!(!canvas.is_valid(0, -1));
    }

    #[test]
    fn out_of_bounds_reads_yield_background() {
        let mut canvas = Canvas::new(2, 2, Color::BLUE);
        canvas.set_pixel(0, 0, Color::RED);

        assert_eq!(canvas.get_pixel(0, 0), Color::RED);
        assert_eq!(canvas.get_pixel(-5, 0), Color::BLUE);
        assert_eq!(canvas.get_pixel(0, 2), Color::BLUE);
        assert_eq!(canvas.get_or(7, 7, Color::GREEN), Color::GREEN);
    }

    #[test]
    fn out_of_bounds_writes_are_dropped() {
        let mut canvas = Canvas::new(2, 2, Color::BLACK);
        canvas.set_pixel(2, 0, Color::WHITE);
        canvas.set_pixel(0, -1, Color::WHITE);
        canvas.set_pixel(i32::MAX, i32::MIN, Color::WHITE);

        assert_eq!(canvas.count(Color::BLACK), 4);
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK);
        canvas.fill_rect(-1, -1, 3, 3, Color::RED);

        assert_eq!(canvas.count(Color::RED), 4);
        assert_eq!(canvas.get_pixel(1, 1), Color::RED);
        assert_eq!(canvas.get_pixel(2, 2), Color::BLACK);

        canvas.fill_rect(3, 3, 10, 10, Color::GREEN);
        assert_eq!(canvas.count(Color::GREEN), 1);
    }

    #[test]
    fn clear() {
        let mut canvas = Canvas::new(3, 1, Color::WHITE);
        canvas.set_pixel(1, 0, Color::RED);
        canvas.clear();

        assert_eq!(canvas.data(), &[Color::WHITE; 3]);
    }
}
