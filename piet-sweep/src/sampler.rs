// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampling a color for a position around the circle.

use crate::util::rescale;
use crate::{Rgba, Transition};

/// The top of the hue scale used by the spectrum fallback.
pub const MAX_HUE: f64 = 255.0;

/// The color at `percent` of a full turn.
///
/// The first transition whose half-open range contains `percent` is
/// interpolated. When no transition contains it, the first transition is
/// used for `percent <= 0.5` and the last one otherwise; this extrapolates
/// past the transition's end, which is what happens at exactly `1.0`.
/// Without any transitions the result is [`spectrum_color`].
///
/// ```
/// use piet_sweep::{build_transitions, color_for_percent, Rgba};
///
/// let transitions = build_transitions(&[Rgba::BLACK, Rgba::WHITE], &[]);
/// let gray = color_for_percent(0.5, &transitions);
/// assert!(gray.approx_eq(&Rgba::rgb(0.5, 0.5, 0.5), 1e-9));
/// ```
pub fn color_for_percent(percent: f64, transitions: &[Transition]) -> Rgba {
    let transition = match transitions.iter().find(|t| t.contains(percent)) {
        Some(transition) => transition,
        None => match default_transition(percent, transitions) {
            Some(transition) => {
                log::trace!("no transition contains {}, extrapolating", percent);
                transition
            }
            None => return spectrum_color(percent),
        },
    };
    transition.color_at(percent)
}

/// A fully saturated, fully bright hue for `percent` of a full turn.
pub fn spectrum_color(percent: f64) -> Rgba {
    let hue = rescale(percent, 0.0, 1.0, 0.0, MAX_HUE) / MAX_HUE;
    Rgba::from_hsba(hue, 1.0, 1.0, 1.0)
}

fn default_transition(percent: f64, transitions: &[Transition]) -> Option<&Transition> {
    if percent <= 0.5 {
        transitions.first()
    } else {
        transitions.last()
    }
}
