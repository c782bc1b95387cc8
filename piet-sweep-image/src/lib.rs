// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A CPU raster backend for piet-sweep.
//!
//! [`ImageSurface`] draws into an [`image::RgbaImage`], which can then be
//! written out in any format the `image` crate supports. It plots aliased
//! lines only, which is all a sweep needs.

pub use image;

pub mod config;
pub mod samples;

mod surface;

pub use crate::surface::ImageSurface;
