// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render an angle gradient to an image file.
//!
//! Set `RUST_LOG=debug` to see what each pass is doing.

use piet_sweep_image::config::{RunConfig, HELP};
use piet_sweep_image::ImageSurface;

type BoxErr = Box<dyn std::error::Error>;

fn main() -> Result<(), BoxErr> {
    init_logging();

    let config = RunConfig::from_env()?;
    if config.help {
        print!("{}", HELP);
        return Ok(());
    }

    let gradient = config.gradient()?;
    log::info!(
        "drawing {} colors into {}x{}",
        gradient.colors().len(),
        config.width,
        config.height
    );

    let mut surface = ImageSurface::new(config.width, config.height);
    if let Some(background) = config.background.as_ref() {
        surface.clear(background.into());
    }
    gradient.paint(&mut surface)?;

    surface.into_image().save(&config.out)?;
    log::info!("wrote {}", config.out.display());
    Ok(())
}

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}
