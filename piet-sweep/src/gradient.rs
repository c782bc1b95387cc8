// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A retained angle gradient description.

use std::f64::consts::TAU;
use std::fmt;

use crate::{
    build_transitions, color_for_percent, render, Color, Error, Rgba, Surface, SweepOptions,
    Transition,
};

/// An angle gradient: colors swept around the center of a rectangle.
///
/// The gradient owns its color stops. Hosts that cache rendered output can
/// register an invalidation handler with [`set_invalidate_handler`]; it is
/// called whenever the stops or options change, and is the signal to
/// schedule a repaint.
///
/// Transitions are not cached. Each [`paint`] rebuilds them from the current
/// stops.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use piet_sweep::{AngleGradient, Color};
///
/// let dirty = Rc::new(Cell::new(false));
/// let mut gradient = AngleGradient::new(vec![Color::BLACK, Color::WHITE]);
/// let flag = dirty.clone();
/// gradient.set_invalidate_handler(move || flag.set(true));
///
/// gradient.set_locations(vec![0.0, 0.25]);
/// assert!(dirty.get());
/// ```
///
/// [`set_invalidate_handler`]: AngleGradient::set_invalidate_handler
/// [`paint`]: AngleGradient::paint
pub struct AngleGradient {
    colors: Vec<Color>,
    locations: Vec<f64>,
    options: SweepOptions,
    on_invalidate: Option<Box<dyn FnMut()>>,
}

impl AngleGradient {
    /// Create a gradient with uniformly spaced colors.
    ///
    /// With fewer than two colors the gradient shows the full hue spectrum.
    pub fn new(colors: Vec<Color>) -> AngleGradient {
        AngleGradient {
            colors,
            locations: Vec::new(),
            options: SweepOptions::default(),
            on_invalidate: None,
        }
    }

    /// A builder-style method for setting explicit stop locations.
    ///
    /// See [`set_locations`](AngleGradient::set_locations).
    pub fn with_locations(mut self, locations: Vec<f64>) -> Self {
        self.locations = locations;
        self
    }

    /// A builder-style method for changing the [`SweepOptions`].
    pub fn with_options(mut self, options: SweepOptions) -> Self {
        self.options = options;
        self
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn locations(&self) -> &[f64] {
        &self.locations
    }

    pub fn options(&self) -> &SweepOptions {
        &self.options
    }

    /// Replace the colors.
    pub fn set_colors(&mut self, colors: Vec<Color>) {
        self.colors = colors;
        self.invalidate();
    }

    /// Replace the stop locations.
    ///
    /// Locations are fractions of a full turn, increasing from 0.0 to 1.0,
    /// one per color. A list of any other length is ignored in favor of
    /// uniform spacing; an empty list is the usual way to ask for that.
    pub fn set_locations(&mut self, locations: Vec<f64>) {
        self.locations = locations;
        self.invalidate();
    }

    pub fn set_options(&mut self, options: SweepOptions) {
        self.options = options;
        self.invalidate();
    }

    /// Register the function called after every change to the gradient.
    ///
    /// This replaces any previously registered handler.
    pub fn set_invalidate_handler(&mut self, handler: impl FnMut() + 'static) {
        self.on_invalidate = Some(Box::new(handler));
    }

    /// Remove the invalidation handler, if any.
    pub fn clear_invalidate_handler(&mut self) {
        self.on_invalidate = None;
    }

    fn invalidate(&mut self) {
        if let Some(handler) = self.on_invalidate.as_mut() {
            handler();
        }
    }

    /// The transitions for the current stops.
    pub fn transitions(&self) -> Vec<Transition> {
        build_transitions(&self.colors, &self.locations)
    }

    /// The color at `angle` radians. Any angle is accepted and taken modulo a
    /// full turn, so 2π gives the first color even though the closing line
    /// of a painted sweep is drawn with the last.
    pub fn color_at_angle(&self, angle: f64) -> Rgba {
        let percent = angle.rem_euclid(TAU) / TAU;
        color_for_percent(percent, &self.transitions())
    }

    /// Draw the gradient filling the surface's clip bounds.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<(), Error> {
        let bounds = surface.clip_bounds();
        surface.save()?;
        render(surface, bounds, &self.colors, &self.locations, &self.options);
        surface.restore()
    }
}

impl Default for AngleGradient {
    fn default() -> Self {
        AngleGradient::new(Vec::new())
    }
}

impl fmt::Debug for AngleGradient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AngleGradient")
            .field("colors", &self.colors)
            .field("locations", &self.locations)
            .field("options", &self.options)
            .field("on_invalidate", &self.on_invalidate.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use piet::kurbo::{Point, Rect};

    use super::*;
    use crate::{spectrum_color, ErrorKind, RecordingSurface};

    /// A surface whose device goes away partway through a paint.
    #[derive(Default)]
    struct LostDevice {
        fail_save: bool,
        strokes: usize,
    }

    impl Surface for LostDevice {
        fn clip_bounds(&self) -> Rect {
            Rect::new(0.0, 0.0, 8.0, 8.0)
        }

        fn stroke_line(&mut self, _: Point, _: Point, _: Rgba, _: f64) {
            self.strokes += 1;
        }

        fn save(&mut self) -> Result<(), Error> {
            if self.fail_save {
                return Err(crate::new_error(ErrorKind::StackUnbalance));
            }
            Ok(())
        }

        fn restore(&mut self) -> Result<(), Error> {
            let e: Box<dyn std::error::Error> = "device lost".into();
            Err(e.into())
        }
    }

    fn counter(gradient: &mut AngleGradient) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let handle = count.clone();
        gradient.set_invalidate_handler(move || handle.set(handle.get() + 1));
        count
    }

    #[test]
    fn every_mutation_invalidates() {
        let mut gradient = AngleGradient::new(vec![Color::BLACK]);
        let count = counter(&mut gradient);

        gradient.set_colors(vec![Color::BLACK, Color::WHITE]);
        gradient.set_locations(vec![0.0, 1.0]);
        gradient.set_options(SweepOptions::new().with_line_width(3.0));
        assert_eq!(count.get(), 3);

        gradient.clear_invalidate_handler();
        gradient.set_locations(Vec::new());
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn transitions_follow_current_stops() {
        let mut gradient = AngleGradient::new(vec![Color::BLACK, Color::WHITE, Color::BLACK]);
        assert_eq!(gradient.transitions()[0].to_location, 0.5);

        gradient.set_locations(vec![0.0, 0.8, 1.0]);
        assert_eq!(gradient.transitions()[0].to_location, 0.8);

        // Wrong length falls back to uniform spacing again.
        gradient.set_locations(vec![0.0, 0.8]);
        assert_eq!(gradient.transitions()[0].to_location, 0.5);
    }

    #[test]
    fn color_at_angle_wraps() {
        let gradient = AngleGradient::default();
        let quarter = gradient.color_at_angle(TAU / 4.0);
        assert!(gradient.color_at_angle(TAU / 4.0 + TAU).approx_eq(&quarter, 1e-9));
        assert!(gradient.color_at_angle(-3.0 * TAU / 4.0).approx_eq(&quarter, 1e-9));
        assert!(quarter.approx_eq(&spectrum_color(0.25), 1e-12));
    }

    #[test]
    fn full_turn_wraps_to_first_color() {
        let gradient = AngleGradient::new(vec![Color::BLACK, Color::WHITE]);
        assert_eq!(gradient.color_at_angle(TAU), gradient.color_at_angle(0.0));
        assert_eq!(gradient.color_at_angle(TAU), Rgba::BLACK);
    }

    #[test]
    fn failed_restore_reaches_caller() {
        let gradient = AngleGradient::new(vec![Color::BLACK, Color::WHITE]);
        let mut surface = LostDevice::default();
        let err = gradient.paint(&mut surface).unwrap_err();

        assert!(surface.strokes > 0);
        match err.kind() {
            ErrorKind::BackendError(e) => assert_eq!(e.to_string(), "device lost"),
            other => panic!("unexpected error {:?}", other),
        }
        assert_eq!(err.to_string(), "Backend error: device lost");
    }

    #[test]
    fn failed_save_draws_nothing() {
        let gradient = AngleGradient::default();
        let mut surface = LostDevice {
            fail_save: true,
            ..LostDevice::default()
        };
        let err = gradient.paint(&mut surface).unwrap_err();

        assert_eq!(surface.strokes, 0);
        assert!(matches!(err.kind(), ErrorKind::StackUnbalance));
    }

    #[test]
    fn paint_fills_clip_bounds_and_balances_stack() {
        let gradient = AngleGradient::new(vec![Color::BLACK, Color::WHITE])
            .with_options(SweepOptions::new().with_line_width(1.5));
        let bounds = Rect::new(0.0, 0.0, 20.0, 10.0);
        let mut surface = RecordingSurface::new(bounds);

        gradient.paint(&mut surface).unwrap();

        assert_eq!(surface.save_depth(), 0);
        assert!(!surface.strokes().is_empty());
        assert!(surface
            .strokes()
            .iter()
            .all(|s| s.to == bounds.center() && s.width == 1.5));
    }
}
