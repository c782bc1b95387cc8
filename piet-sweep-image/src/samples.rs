// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made gradients for the `sweep` runner.

use piet_sweep::{AngleGradient, Color};

/// The total number of samples in this module.
pub const SAMPLE_COUNT: usize = 3;

/// Return a specific sample gradient, if it exists.
///
/// 0. a fading green radar trail
/// 1. the full hue spectrum (no colors configured)
/// 2. red, green and blue at explicit, uneven stops
pub fn get(number: usize) -> Option<AngleGradient> {
    let gradient = match number {
        0 => AngleGradient::new(vec![
            Color::rgba8(0x00, 0xff, 0x40, 0x00),
            Color::rgba8(0x00, 0xff, 0x40, 0x20),
            Color::rgba8(0x00, 0xff, 0x40, 0xff),
        ])
        .with_locations(vec![0.0, 0.75, 1.0]),
        1 => AngleGradient::default(),
        2 => AngleGradient::new(vec![
            Color::rgb8(0xff, 0x00, 0x00),
            Color::rgb8(0x00, 0xff, 0x00),
            Color::rgb8(0x00, 0x00, 0xff),
            Color::rgb8(0xff, 0x00, 0x00),
        ])
        .with_locations(vec![0.0, 0.2, 0.6, 1.0]),
        _ => return None,
    };
    Some(gradient)
}
