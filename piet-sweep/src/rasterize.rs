// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Approximating an angle gradient with radial strokes.

use std::f64::consts::{FRAC_PI_2, SQRT_2, TAU};

use piet::kurbo::{Point, Rect, Vec2};

use crate::{build_transitions, color_for_percent, Rgba, Surface, Transition};

/// The default width of each radial stroke.
pub const DEFAULT_LINE_WIDTH: f64 = 1.0;

/// Options controlling how a sweep is stroked.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepOptions {
    pub line_width: f64,
}

impl SweepOptions {
    pub fn new() -> SweepOptions {
        SweepOptions {
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// A builder-style method for changing the stroke width.
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }
}

impl Default for SweepOptions {
    fn default() -> Self {
        SweepOptions::new()
    }
}

/// Where and how finely a sweep samples a bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepGeometry {
    /// The point every radial line ends at.
    pub center: Point,
    /// The length of every radial line.
    ///
    /// This is the larger side times √2, so the lines always reach past the
    /// corners of the rectangle.
    pub radius: f64,
    /// The angle between consecutive lines, in radians.
    ///
    /// Scaled inversely with the radius, so the outer ends of neighboring
    /// lines are always π/2 units apart.
    pub step: f64,
}

impl SweepGeometry {
    /// The geometry for sweeping `bounds`.
    pub fn new(bounds: Rect) -> SweepGeometry {
        let bounds = bounds.abs();
        let radius = bounds.width().max(bounds.height()) * SQRT_2;
        SweepGeometry {
            center: bounds.center(),
            radius,
            step: FRAC_PI_2 / radius,
        }
    }

    /// Whether there is nothing to sweep.
    pub fn is_empty(&self) -> bool {
        !(self.radius > 0.0 && self.step.is_finite())
    }

    /// Iterate over the sampled angles, from 0 to 2π inclusive, coloring
    /// each one from `transitions`.
    pub fn samples<'a>(&self, transitions: &'a [Transition]) -> Sweep<'a> {
        Sweep {
            geometry: *self,
            transitions,
            angle: if self.is_empty() { f64::INFINITY } else { 0.0 },
        }
    }
}

/// A single sampled direction of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSample {
    /// The angle in radians, clockwise from the positive x axis in a y-down
    /// coordinate system.
    pub angle: f64,
    /// `angle` as a fraction of a full turn.
    pub percent: f64,
    /// The outer end of the radial line.
    pub point: Point,
    /// The color the line is stroked with.
    pub color: Rgba,
}

/// Iterator over the [`AngleSample`]s of a [`SweepGeometry`].
#[derive(Debug, Clone)]
pub struct Sweep<'a> {
    geometry: SweepGeometry,
    transitions: &'a [Transition],
    angle: f64,
}

impl Iterator for Sweep<'_> {
    type Item = AngleSample;

    fn next(&mut self) -> Option<AngleSample> {
        if self.angle > TAU {
            return None;
        }
        let angle = self.angle;
        self.angle += self.geometry.step;

        let (sin, cos) = angle.sin_cos();
        let point = self.geometry.center + Vec2::new(cos, sin) * self.geometry.radius;
        let percent = angle / TAU;
        Some(AngleSample {
            angle,
            percent,
            point,
            color: color_for_percent(percent, self.transitions),
        })
    }
}

/// Draw an angle gradient filling `bounds`.
///
/// Transitions are rebuilt from `colors` and `locations` (see
/// [`build_transitions`]) and then one line per [`AngleSample`] is stroked
/// from the sample's outer point to the center.
///
/// Lines extend well past `bounds`; clipping is up to the surface.
pub fn render<S, C>(
    surface: &mut S,
    bounds: Rect,
    colors: &[C],
    locations: &[f64],
    options: &SweepOptions,
) where
    S: Surface + ?Sized,
    C: Clone + Into<Rgba>,
{
    let geometry = SweepGeometry::new(bounds);
    if geometry.is_empty() {
        log::debug!("skipping sweep of empty rect {:?}", bounds);
        return;
    }

    let transitions = build_transitions(colors, locations);
    log::debug!(
        "sweeping {} transitions, radius {:.1}, step {:.5} rad",
        transitions.len(),
        geometry.radius,
        geometry.step
    );

    for sample in geometry.samples(&transitions) {
        surface.stroke_line(sample.point, geometry.center, sample.color, options.line_width);
    }
}
