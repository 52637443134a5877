//! Pixel-exact drawing primitives
//!
//! Everything in here writes through a [Surface](canvas::Surface), so the routines
//! work with any pixel store and never touch memory outside of it.

mod circle;
mod fill;
mod line;

pub use circle::{draw_circle, draw_filled_circle};
pub use fill::{boundary_replace_fill, interior_bounded_fill};
pub use line::{draw_line, Line};
