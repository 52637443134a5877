use canvas::Surface;
use math::{Color, Point};

/// The pixels of a straight line between two points, both endpoints included.
///
/// Both axes may advance in the same step, so consecutive pixels are 8-connected and
/// the line visits exactly `max(|dx|, |dy|) + 1` pixels.
#[derive(Clone, Debug)]
pub struct Line {
    current: Point,
    target: Point,
    dx: i64,
    dy: i64,
    step_x: i32,
    step_y: i32,

    /// Twice the error term.
    ///
    /// The error starts out at `(dx - dy) / 2`, doubling everything keeps
    /// the half-pixel exact without resorting to floats.
    error: i64,
    is_done: bool,
}

impl Line {
    #[must_use]
    pub fn new(from: Point, to: Point) -> Self {
        let dx = (i64::from(to.x) - i64::from(from.x)).abs();
        let dy = (i64::from(to.y) - i64::from(from.y)).abs();

        Self {
            current: from,
            target: to,
            dx,
            dy,
            step_x: if from.x < to.x { 1 } else { -1 },
            step_y: if from.y < to.y { 1 } else { -1 },
            error: dx - dy,
            is_done: false,
        }
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done {
            return None;
        }

        let point = self.current;
        if point == self.target {
            self.is_done = true;
            return Some(point);
        }

        let e2 = self.error;
        if e2 > -2 * self.dx {
            self.error -= 2 * self.dy;
            self.current.x += self.step_x;
        }
        if e2 < 2 * self.dy {
            self.error += 2 * self.dx;
            self.current.y += self.step_y;
        }

        Some(point)
    }
}

impl std::iter::FusedIterator for Line {}

/// Rasterize a line from `from` to `to` (inclusive)
pub fn draw_line<S: Surface>(surface: &mut S, from: Point, to: Point, color: Color) {
    for point in Line::new(from, to) {
        surface.set_pixel(point.x, point.y, color);
    }
}
