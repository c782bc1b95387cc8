// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning color stops into interpolation segments.

use crate::util::rescale;
use crate::Rgba;

/// One interpolation segment of an angle gradient.
///
/// Locations are fractions of a full turn, in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from_location: f64,
    pub to_location: f64,
    pub from_color: Rgba,
    pub to_color: Rgba,
}

impl Transition {
    /// Create a new transition.
    pub const fn new(
        from_location: f64,
        to_location: f64,
        from_color: Rgba,
        to_color: Rgba,
    ) -> Self {
        Transition {
            from_location,
            to_location,
            from_color,
            to_color,
        }
    }

    /// Whether `percent` falls in the half-open range `from_location..to_location`.
    pub fn contains(&self, percent: f64) -> bool {
        percent >= self.from_location && percent < self.to_location
    }

    /// The interpolated color at `percent`.
    ///
    /// `percent` is not required to lie inside this transition; values
    /// outside it extrapolate linearly.
    pub fn color_at(&self, percent: f64) -> Rgba {
        let t = rescale(percent, self.from_location, self.to_location, 0.0, 1.0);
        self.from_color.lerp(self.to_color, t)
    }
}

/// Build the transitions between consecutive `colors`.
///
/// If `locations` has exactly one entry per color, transition `i` runs from
/// `locations[i]` to `locations[i + 1]`. Otherwise the colors are spaced
/// uniformly around the full turn. The locations are taken as given: they
/// are not sorted, clamped, or checked for coverage.
///
/// Fewer than two colors produce no transitions, and the sampler falls back
/// to the hue spectrum.
///
/// ```
/// use piet_sweep::{build_transitions, Color};
///
/// let transitions = build_transitions(&[Color::BLACK, Color::WHITE, Color::BLACK], &[]);
/// assert_eq!(transitions.len(), 2);
/// assert_eq!(transitions[1].from_location, 0.5);
/// ```
pub fn build_transitions<C>(colors: &[C], locations: &[f64]) -> Vec<Transition>
where
    C: Clone + Into<Rgba>,
{
    if colors.len() <= 1 {
        return Vec::new();
    }

    let count = colors.len() - 1;
    let explicit = locations.len() == colors.len();
    if !explicit && !locations.is_empty() {
        log::warn!(
            "{} locations given for {} colors, spacing stops uniformly",
            locations.len(),
            colors.len()
        );
    }
    let step = 1.0 / count as f64;

    colors
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let (from_location, to_location) = if explicit {
                (locations[i], locations[i + 1])
            } else {
                (step * i as f64, step * (i + 1) as f64)
            };
            Transition {
                from_location,
                to_location,
                from_color: pair[0].clone().into(),
                to_color: pair[1].clone().into(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(1.0, 0.0, 0.0);
    const GREEN: Rgba = Rgba::rgb(0.0, 1.0, 0.0);
    const BLUE: Rgba = Rgba::rgb(0.0, 0.0, 1.0);

    #[test]
    fn empty_and_single_color_have_no_transitions() {
        assert!(build_transitions::<Rgba>(&[], &[]).is_empty());
        assert!(build_transitions(&[RED], &[]).is_empty());
        assert!(build_transitions(&[RED], &[0.0]).is_empty());
        assert!(build_transitions(&[RED], &[0.0, 1.0]).is_empty());
    }

    #[test]
    fn two_colors_span_full_turn() {
        let transitions = build_transitions(&[RED, BLUE], &[]);
        assert_eq!(transitions, vec![Transition::new(0.0, 1.0, RED, BLUE)]);
    }

    #[test]
    fn uniform_spacing_is_contiguous() {
        let colors = [RED, GREEN, BLUE, RED, GREEN];
        let transitions = build_transitions(&colors, &[]);
        assert_eq!(transitions.len(), 4);
        assert_eq!(transitions[0].from_location, 0.0);
        assert_eq!(transitions[3].to_location, 1.0);
        for pair in transitions.windows(2) {
            assert_eq!(pair[0].to_location, pair[1].from_location);
            assert_eq!(pair[0].to_color, pair[1].from_color);
        }
    }

    #[test]
    fn explicit_locations_are_used() {
        let transitions = build_transitions(&[RED, GREEN, BLUE], &[0.0, 0.2, 0.9]);
        assert_eq!(
            transitions,
            vec![
                Transition::new(0.0, 0.2, RED, GREEN),
                Transition::new(0.2, 0.9, GREEN, BLUE),
            ]
        );
    }

    #[test]
    fn mismatched_locations_fall_back_to_uniform() {
        let uniform = build_transitions(&[RED, GREEN, BLUE], &[]);
        assert_eq!(build_transitions(&[RED, GREEN, BLUE], &[0.0, 0.1]), uniform);
        assert_eq!(
            build_transitions(&[RED, GREEN, BLUE], &[0.0, 0.1, 0.2, 0.3]),
            uniform
        );
        assert_eq!(uniform[0].to_location, 0.5);
    }

    #[test]
    fn non_monotonic_locations_are_not_validated() {
        let transitions = build_transitions(&[RED, GREEN, BLUE], &[0.8, 0.2, 0.5]);
        assert_eq!(transitions[0].from_location, 0.8);
        assert_eq!(transitions[0].to_location, 0.2);
    }

    #[test]
    fn contains_is_half_open() {
        let t = Transition::new(0.25, 0.5, RED, BLUE);
        assert!(t.contains(0.25));
        assert!(t.contains(0.4));
        assert!(!t.contains(0.5));
        assert!(!t.contains(0.1));
    }
}
