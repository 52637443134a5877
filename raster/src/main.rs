mod ppm;
mod scene;

use std::{fs, io, process::ExitCode};

use canvas::Canvas;
use error_derive::Error;
use settings::Settings;

#[derive(Debug, Error)]
enum Error {
    #[msg = "failed to write the rendered image"]
    IO(io::Error),
}

fn run(settings: &Settings) -> Result<(), Error> {
    let mut canvas = Canvas::new(settings.width, settings.height, settings.background);
    let font = font::load_font(&settings.font);

    scene::draw(&mut canvas, &font, settings);

    let file = io::BufWriter::new(fs::File::create(&settings.output)?);
    ppm::write(&canvas, file)?;
    log::info!(
        "Wrote {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        settings.output.display()
    );

    Ok(())
}

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::init();
    log::debug!("{settings:?}");

    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            match std::error::Error::source(&error) {
                Some(cause) => log::error!("{error}: {cause}"),
                None => log::error!("{error}"),
            }
            ExitCode::FAILURE
        },
    }
}
