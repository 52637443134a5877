use std::collections::HashSet;

use canvas::Surface;
use math::{Color, Point};
use render::{draw_circle, Line};

/// A surface without bounds that remembers every write
#[derive(Default)]
struct Recorder {
    writes: Vec<Point>,
}

impl Surface for Recorder {
    fn is_valid(&self, _x: i32, _y: i32) -> bool {
        true
    }

    fn get_pixel(&self, _x: i32, _y: i32) -> Color {
        Color::BLACK
    }

    fn set_pixel(&mut self, x: i32, y: i32, _color: Color) {
        self.writes.push(Point::new(x, y));
    }
}

/// Deterministic endpoints covering every octant and the axis-aligned cases
fn endpoints() -> impl Iterator<Item = (Point, Point)> {
    let coordinates = [-13, -7, -1, 0, 1, 2, 5, 9, 16];
    coordinates.into_iter().flat_map(move |x| {
        coordinates.into_iter().flat_map(move |y| {
            [(3, 4), (-8, 1), (0, 0), (11, -6)]
                .into_iter()
                .map(move |(fx, fy)| (Point::new(fx, fy), Point::new(x, y)))
        })
    })
}

#[test]
fn line_visits_chebyshev_distance_plus_one_points() {
    for (from, to) in endpoints() {
        let points: Vec<Point> = Line::new(from, to).collect();
        let expected = (to.x - from.x).abs().max((to.y - from.y).abs()) as usize + 1;

        assert_eq!(points.len(), expected, "{from:?} -> {to:?}");
        assert_eq!(points.first(), Some(&from));
        assert_eq!(points.last(), Some(&to));

        let unique: HashSet<Point> = points.iter().copied().collect();
        assert_eq!(unique.len(), points.len(), "{from:?} -> {to:?} plots a pixel twice");
    }
}

#[test]
fn line_is_connected_monotonic_and_close() {
    for (from, to) in endpoints() {
        let points: Vec<Point> = Line::new(from, to).collect();

        for pair in points.windows(2) {
            assert!(pair[0].touches(pair[1]), "{from:?} -> {to:?} has a gap");

            // Never step away from the target
            assert!((to.x - pair[1].x).abs() <= (to.x - pair[0].x).abs());
            assert!((to.y - pair[1].y).abs() <= (to.y - pair[0].y).abs());
        }

        // Distance to the ideal line, measured perpendicular to it
        let direction = to - from;
        let length = direction.magnitude();
        if length == 0. {
            continue;
        }
        for point in &points {
            let offset = *point - from;
            let cross = (direction.x * offset.y - direction.y * offset.x) as f32;
            assert!(cross.abs() / length < 1., "{point:?} strays from {from:?} -> {to:?}");
        }
    }
}

#[test]
fn circle_points_lie_on_the_radius() {
    let center = Point::new(5, -3);

    for radius in 0..=120 {
        let mut recorder = Recorder::default();
        draw_circle(&mut recorder, center, radius, Color::WHITE);

        assert!(!recorder.writes.is_empty());
        for point in &recorder.writes {
            let distance = (*point - center).magnitude();
            assert_eq!(distance.round() as i32, radius, "{point:?} for radius {radius}");
        }
    }
}

#[test]
fn circle_is_symmetric_in_all_octants() {
    for radius in 1..=60 {
        let mut recorder = Recorder::default();
        draw_circle(&mut recorder, Point::new(0, 0), radius, Color::WHITE);

        let points: HashSet<Point> = recorder.writes.into_iter().collect();
        for point in &points {
            let (x, y) = (point.x, point.y);
            for reflected in [
                (-x, y),
                (x, -y),
                (-x, -y),
                (y, x),
                (-y, x),
                (y, -x),
                (-y, -x),
            ] {
                assert!(
                    points.contains(&Point::new(reflected.0, reflected.1)),
                    "radius {radius}: ({x}, {y}) has no mirror image at {reflected:?}"
                );
            }
        }
    }
}
