//! The pixel buffer that everything else draws into

mod canvas;
mod surface;

pub use canvas::Canvas;
pub use surface::Surface;
