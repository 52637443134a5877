use math::Color;

/// Anything that pixels can be read from and written to.
///
/// These three operations are the whole contract between the drawing routines
/// and whatever ends up presenting the pixels.
pub trait Surface {
    /// Return `true` if `(x, y)` lies inside the surface
    fn is_valid(&self, x: i32, y: i32) -> bool;

    /// Read a pixel.
    ///
    /// Coordinates outside the surface must not panic, implementations return a fixed
    /// sentinel color instead.
    fn get_pixel(&self, x: i32, y: i32) -> Color;

    /// Write a pixel.
    ///
    /// Writes outside the surface are discarded.
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);

    /// Paint a `width` x `height` block whose top left corner is at `(x, y)`.
    ///
    /// The block is clipped against the surface like any other write.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        for py in y..y.saturating_add(height) {
            for px in x..x.saturating_add(width) {
                self.set_pixel(px, py, color);
            }
        }
    }
}
