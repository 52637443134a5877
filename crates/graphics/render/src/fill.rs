//! Breadth-first region filling
//!
//! Both fills walk the 4-connected neighbourhood of a seed pixel with an explicit queue,
//! so arbitrarily large regions don't grow the call stack.

use std::collections::{HashSet, VecDeque};

use canvas::Surface;
use math::{Color, Point};

/// Recolor the 4-connected region of `old_color` pixels around `seed` to `new_color`.
///
/// Pixels of the same color that are not connected to the seed are left alone.
/// Nothing happens if the seed is outside the surface or does not have `old_color`.
///
/// Returns the number of pixels that were recolored.
pub fn boundary_replace_fill<S: Surface>(
    surface: &mut S,
    seed: Point,
    old_color: Color,
    new_color: Color,
) -> usize {
    if !surface.is_valid(seed.x, seed.y) {
        log::debug!("Not filling from {seed:?}, the seed is outside the surface");
        return 0;
    }

    let seed_color = surface.get_pixel(seed.x, seed.y);
    if seed_color != old_color {
        log::debug!("Not filling from {seed:?}, expected {old_color:?} but found {seed_color:?}");
        return 0;
    }

    if old_color == new_color {
        return 0;
    }

    let filled = fill_connected(surface, seed, new_color, |color| color == old_color);
    log::debug!("Replaced {filled} pixels of {old_color:?} with {new_color:?} from {seed:?}");
    filled
}

/// Fill the region around `seed` that is enclosed by `boundary_color` pixels.
///
/// Every reachable pixel that is neither `boundary_color` nor `fill_color` is painted,
/// regardless of the color of the seed itself. The boundary is never overwritten.
///
/// If the boundary has a gap, the fill escapes through it. Callers that can't guarantee
/// a closed boundary can compare the returned number of painted pixels against the
/// size of the region they expected.
pub fn interior_bounded_fill<S: Surface>(
    surface: &mut S,
    seed: Point,
    boundary_color: Color,
    fill_color: Color,
) -> usize {
    if !surface.is_valid(seed.x, seed.y) {
        log::debug!("Not filling from {seed:?}, the seed is outside the surface");
        return 0;
    }

    let filled = fill_connected(surface, seed, fill_color, |color| {
        color != boundary_color && color != fill_color
    });
    log::debug!("Filled {filled} pixels inside {boundary_color:?} with {fill_color:?} from {seed:?}");
    filled
}

/// Paint every pixel reachable from `seed` through pixels accepted by `should_fill`
fn fill_connected<S, F>(surface: &mut S, seed: Point, fill_color: Color, should_fill: F) -> usize
where
    S: Surface,
    F: Fn(Color) -> bool,
{
    let mut queue = VecDeque::from([seed]);

    // Every pixel is queued at most once
    let mut queued = HashSet::from([seed]);
    let mut filled = 0;

    while let Some(point) = queue.pop_front() {
        // Check again, the pixel may have changed since it was queued
        if !should_fill(surface.get_pixel(point.x, point.y)) {
            continue;
        }

        surface.set_pixel(point.x, point.y, fill_color);
        filled += 1;

        for offset in Point::EDGE_NEIGHBOURS {
            let neighbour = point + offset;
            if surface.is_valid(neighbour.x, neighbour.y)
                && should_fill(surface.get_pixel(neighbour.x, neighbour.y))
                && queued.insert(neighbour)
            {
                queue.push_back(neighbour);
            }
        }
    }

    filled
}
