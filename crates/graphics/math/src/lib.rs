//! Common utilities used in graphics-related libraries

mod color;
mod vec2d;

pub use color::{Color, InvalidColor};
pub use vec2d::{Point, Vec2D};
