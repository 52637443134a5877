//! Binary PPM (`P6`) output
//!
//! The simplest format that stores raw RGB triples, readable by most image viewers.

use std::io::{self, Write};

use canvas::Canvas;

pub fn write<W: Write>(canvas: &Canvas, mut writer: W) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", canvas.width(), canvas.height())?;

    for pixel in canvas.data() {
        writer.write_all(&pixel.channels())?;
    }

    writer.flush()
}
