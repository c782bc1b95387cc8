// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range mapping helpers.

/// Linearly maps `value` from the range `old_min..old_max` onto
/// `new_min..new_max`.
///
/// Values outside the old range extrapolate. A zero-width old range maps
/// everything to `new_min`.
///
/// ```
/// use piet_sweep::util::rescale;
///
/// assert_eq!(rescale(0.25, 0.0, 0.5, 0.0, 1.0), 0.5);
/// assert_eq!(rescale(3.0, 1.0, 1.0, 10.0, 20.0), 10.0);
/// ```
pub fn rescale(value: f64, old_min: f64, old_max: f64, new_min: f64, new_max: f64) -> f64 {
    let old_range = old_max - old_min;
    if old_range == 0.0 {
        return new_min;
    }
    new_min + (value - old_min) * (new_max - new_min) / old_range
}

/// Linear interpolation between `from` and `to`.
///
/// `t` is not clamped.
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + t * (to - from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rescale_zero_range_returns_new_min() {
        for x in [-1.0, 0.0, 0.5, 42.0] {
            assert_eq!(rescale(x, 0.3, 0.3, 7.0, 9.0), 7.0);
            assert_eq!(rescale(x, 0.0, 0.0, 0.0, 1.0), 0.0);
        }
    }

    #[test]
    fn rescale_endpoints() {
        assert_eq!(rescale(0.2, 0.2, 0.7, 0.0, 1.0), 0.0);
        assert_eq!(rescale(0.7, 0.2, 0.7, 0.0, 1.0), 1.0);
        assert_eq!(rescale(-3.0, -3.0, 5.0, 0.0, 1.0), 0.0);
        assert_eq!(rescale(5.0, -3.0, 5.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn rescale_extrapolates() {
        assert_eq!(rescale(1.5, 0.0, 1.0, 0.0, 10.0), 15.0);
        assert_eq!(rescale(-0.5, 0.0, 1.0, 0.0, 10.0), -5.0);
    }

    #[test]
    fn rescale_to_hue_range() {
        assert_eq!(rescale(0.5, 0.0, 1.0, 0.0, 255.0), 127.5);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_eq!(lerp(2.0, 4.0, 2.0), 6.0);
    }
}
