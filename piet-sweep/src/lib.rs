// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angle gradients for piet.
//!
//! An angle gradient (also called a sweep or conic gradient) assigns a color
//! to every direction around a center point. This crate rasterizes one by
//! sweeping a radial line around the center in small angular steps, stroking
//! each line in the color sampled for its angle. The result is the classic
//! radar-sweep look.
//!
//! The color logic is independent of any backend: [`build_transitions`] turns
//! a list of colors (and optional stop locations) into [`Transition`]s, and
//! [`color_for_percent`] samples them. Drawing goes through the [`Surface`]
//! trait, which is implemented for any [`piet::RenderContext`] by
//! [`PietSurface`].
//!
//! ```
//! use piet_sweep::kurbo::Rect;
//! use piet_sweep::{AngleGradient, Color, RecordingSurface};
//!
//! let gradient = AngleGradient::new(vec![Color::rgb8(0, 64, 0), Color::rgb8(0, 255, 0)]);
//! let mut surface = RecordingSurface::new(Rect::new(0.0, 0.0, 64.0, 48.0));
//! gradient.paint(&mut surface).unwrap();
//! assert!(!surface.strokes().is_empty());
//! ```

pub use piet;
pub use piet::kurbo;
pub use piet::Color;

/// utilities shared by the sampler and the rasterizer
pub mod util;

mod color;
mod error;
mod gradient;
mod rasterize;
mod recording;
mod sampler;
mod surface;
mod transition;

pub use crate::color::*;
pub use crate::error::*;
pub use crate::gradient::*;
pub use crate::rasterize::*;
pub use crate::recording::*;
pub use crate::sampler::*;
pub use crate::surface::*;
pub use crate::transition::*;
