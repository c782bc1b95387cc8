// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized color components used during interpolation.

use piet::Color;

use crate::util::lerp;

/// A color as four floating point components, each nominally in `0.0..=1.0`.
///
/// Alpha is straight (not premultiplied). Interpolation happens in this
/// representation; backends convert to their own color type only when
/// stroking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    /// Opaque black.
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    /// Create a color from its components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Rgba {
        Rgba { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Rgba {
        Rgba::new(r, g, b, 1.0)
    }

    /// Create a color from hue, saturation, brightness and alpha.
    ///
    /// All four values are in the range 0.0 to 1.0; `hue` is the fraction of
    /// a full turn around the color wheel, starting (and ending) at red.
    pub fn from_hsba(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Rgba {
        let s = saturation.clamp(0.0, 1.0);
        let v = brightness.clamp(0.0, 1.0);
        let h = hue.rem_euclid(1.0) * 6.0;

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Rgba::new(r + m, g + m, b + m, alpha.clamp(0.0, 1.0))
    }

    /// Interpolate component-wise between `self` and `other`.
    ///
    /// `t` is not clamped, so values outside `0.0..=1.0` extrapolate.
    pub fn lerp(self, other: Rgba, t: f64) -> Rgba {
        Rgba {
            r: lerp(self.r, other.r, t),
            g: lerp(self.g, other.g, t),
            b: lerp(self.b, other.b, t),
            a: lerp(self.a, other.a, t),
        }
    }

    /// Clamp every component into `0.0..=1.0`.
    pub fn clamped(self) -> Rgba {
        Rgba {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Returns true if every component is in `0.0..=1.0`.
    pub fn is_normalized(&self) -> bool {
        [self.r, self.g, self.b, self.a]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }

    /// The color as 8-bit components, rounding and clamping each one.
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        [c.r, c.g, c.b, c.a].map(|v| (v * 255.0).round() as u8)
    }

    /// Approximate equality, for comparing interpolated colors.
    pub fn approx_eq(&self, other: &Rgba, epsilon: f64) -> bool {
        (self.r - other.r).abs() <= epsilon
            && (self.g - other.g).abs() <= epsilon
            && (self.b - other.b).abs() <= epsilon
            && (self.a - other.a).abs() <= epsilon
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Rgba {
        let (r, g, b, a) = color.as_rgba();
        Rgba { r, g, b, a }
    }
}

impl From<&Color> for Rgba {
    fn from(color: &Color) -> Rgba {
        Rgba::from(color.clone())
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Color {
        let c = rgba.clamped();
        Color::rgba(c.r, c.g, c.b, c.a)
    }
}
