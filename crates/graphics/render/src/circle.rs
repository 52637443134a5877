use canvas::Surface;
use math::{Color, Point};

/// Plot `(x, y)` reflected into all eight octants around `center`
///
/// Reflections whose coordinates don't fit into an `i32` lie outside every surface and are skipped.
fn plot_octants<S: Surface>(surface: &mut S, center: Point, x: i32, y: i32, color: Color) {
    let offsets = [
        Point::new(x, y),
        Point::new(-x, y),
        Point::new(x, -y),
        Point::new(-x, -y),
        Point::new(y, x),
        Point::new(-y, x),
        Point::new(y, -x),
        Point::new(-y, -x),
    ];

    for point in offsets
        .into_iter()
        .filter_map(|offset| center.checked_add(offset))
    {
        surface.set_pixel(point.x, point.y, color);
    }
}

/// Draw the outline of a circle using the midpoint algorithm.
///
/// Only one octant is computed, the remaining seven are mirrored from it.
/// Every pixel ends up at a distance from `center` that rounds to `radius`.
/// A radius of zero draws the center pixel, negative radii draw nothing.
pub fn draw_circle<S: Surface>(surface: &mut S, center: Point, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    if radius == 0 {
        surface.set_pixel(center.x, center.y, color);
        return;
    }

    let mut x = 0;
    let mut y = radius;
    let mut decision = 3 - 2 * i64::from(radius);

    plot_octants(surface, center, x, y, color);
    while y >= x {
        // The decision update uses the coordinates from before the step
        if decision > 0 {
            decision += 4 * i64::from(x - y) + 10;
            y -= 1;
        } else {
            decision += 4 * i64::from(x) + 6;
        }
        x += 1;

        plot_octants(surface, center, x, y, color);
    }
}

/// Draw a solid disk.
///
/// A pixel is painted iff its squared distance from `center` is at most `radius²`.
/// This is independent of [draw_circle], the disk's rim does not necessarily match
/// the outline pixel for pixel. Negative radii draw nothing.
pub fn draw_filled_circle<S: Surface>(surface: &mut S, center: Point, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }

    let radius_squared = i64::from(radius) * i64::from(radius);

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let offset = Point::new(dx, dy);
            if offset.distance_squared(Point::default()) > radius_squared {
                continue;
            }

            if let Some(point) = center.checked_add(offset) {
                surface.set_pixel(point.x, point.y, color);
            }
        }
    }
}
