// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command line configuration for the `sweep` runner.

use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

use piet_sweep::{AngleGradient, Color, SweepOptions};

use crate::samples;

type BoxErr = Box<dyn std::error::Error>;

pub const DEFAULT_SIZE: u32 = 512;
pub const DEFAULT_LINE_WIDTH: f64 = 2.0;

pub const HELP: &str = "\
Render an angle gradient to a PNG file.

USAGE:
  sweep [OPTIONS]

OPTIONS:
  --width <px>          image width (default 512)
  --height <px>         image height (default 512)
  --colors <list>       comma separated hex colors, rrggbb or rrggbbaa
  --locations <list>    comma separated stop locations in 0..1, one per color
  --sample <n>          use a built-in gradient instead of --colors
  --background <hex>    fill the image before drawing
  --line-width <px>     width of each radial line (default 2)
  --out <path>          output file (default sweep.png)
  -h, --help            print this message
";

/// Errors in the runner's arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidColor(String),
    InvalidLocation(String),
    InvalidLineWidth(String),
    NoSuchSample(usize),
    EmptyImage,
    UnexpectedArguments(Vec<OsString>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidColor(s) => write!(f, "invalid color '{}'", s),
            ConfigError::InvalidLocation(s) => write!(f, "invalid location '{}'", s),
            ConfigError::InvalidLineWidth(s) => {
                write!(f, "invalid line width '{}', expected a positive number", s)
            }
            ConfigError::NoSuchSample(n) => {
                write!(f, "no sample #{} (there are {})", n, samples::SAMPLE_COUNT)
            }
            ConfigError::EmptyImage => write!(f, "width and height must be non-zero"),
            ConfigError::UnexpectedArguments(args) => write!(f, "unexpected arguments {:?}", args),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the runner needs to produce one image.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub width: u32,
    pub height: u32,
    pub colors: Vec<Color>,
    pub locations: Vec<f64>,
    pub sample: Option<usize>,
    pub background: Option<Color>,
    pub line_width: f64,
    pub out: PathBuf,
    pub help: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            colors: Vec::new(),
            locations: Vec::new(),
            sample: None,
            background: None,
            line_width: DEFAULT_LINE_WIDTH,
            out: PathBuf::from("sweep.png"),
            help: false,
        }
    }
}

impl RunConfig {
    /// Parse the process arguments.
    pub fn from_env() -> Result<RunConfig, BoxErr> {
        RunConfig::from_args(pico_args::Arguments::from_env())
    }

    pub fn from_args(mut args: pico_args::Arguments) -> Result<RunConfig, BoxErr> {
        let defaults = RunConfig::default();
        let config = RunConfig {
            help: args.contains(["-h", "--help"]),
            width: args.opt_value_from_str("--width")?.unwrap_or(defaults.width),
            height: args.opt_value_from_str("--height")?.unwrap_or(defaults.height),
            colors: args
                .opt_value_from_fn("--colors", parse_colors)?
                .unwrap_or_default(),
            locations: args
                .opt_value_from_fn("--locations", parse_locations)?
                .unwrap_or_default(),
            sample: args.opt_value_from_str("--sample")?,
            background: args.opt_value_from_fn("--background", parse_hex_color)?,
            line_width: args
                .opt_value_from_fn("--line-width", parse_line_width)?
                .unwrap_or(defaults.line_width),
            out: args.opt_value_from_str("--out")?.unwrap_or(defaults.out),
        };

        let rest = args.finish();
        if !rest.is_empty() {
            return Err(Box::new(ConfigError::UnexpectedArguments(rest)));
        }
        if config.width == 0 || config.height == 0 {
            return Err(Box::new(ConfigError::EmptyImage));
        }
        Ok(config)
    }

    /// The gradient described by this configuration.
    ///
    /// A sample takes precedence over explicit colors. With neither, the
    /// gradient has no colors and draws the hue spectrum.
    pub fn gradient(&self) -> Result<AngleGradient, ConfigError> {
        let gradient = match self.sample {
            Some(number) => samples::get(number).ok_or(ConfigError::NoSuchSample(number))?,
            None => AngleGradient::new(self.colors.clone()).with_locations(self.locations.clone()),
        };
        let options = SweepOptions::new().with_line_width(self.line_width);
        Ok(gradient.with_options(options))
    }
}

/// Parse `rrggbb` or `rrggbbaa`, with an optional leading `#`.
pub fn parse_hex_color(s: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::InvalidColor(s.to_string());
    let hex = s.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(invalid());
    }

    let mut bytes = [0xff_u8; 4];
    for (i, byte) in bytes.iter_mut().enumerate().take(hex.len() / 2) {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }
    let [r, g, b, a] = bytes;
    Ok(Color::rgba8(r, g, b, a))
}

pub fn parse_colors(s: &str) -> Result<Vec<Color>, ConfigError> {
    s.split(',').map(parse_hex_color).collect()
}

pub fn parse_locations(s: &str) -> Result<Vec<f64>, ConfigError> {
    s.split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|l| l.is_finite())
                .ok_or_else(|| ConfigError::InvalidLocation(part.to_string()))
        })
        .collect()
}

/// Parse a stroke width, which must be finite and greater than zero.
pub fn parse_line_width(s: &str) -> Result<f64, ConfigError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
        .ok_or_else(|| ConfigError::InvalidLineWidth(s.to_string()))
}
