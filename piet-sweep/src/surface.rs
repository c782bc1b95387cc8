// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface a sweep is rendered onto.

use piet::kurbo::{Line, Point, Rect};
use piet::{Color, RenderContext};

use crate::{Error, Rgba};

/// The operations the rasterizer needs from a drawing backend.
///
/// Much smaller than [`RenderContext`]: solid straight strokes and state
/// save/restore are all a sweep uses.
pub trait Surface {
    /// The rectangle drawing is currently confined to.
    fn clip_bounds(&self) -> Rect;

    /// Stroke a straight line from `from` to `to`.
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64);

    /// Save the current drawing state.
    fn save(&mut self) -> Result<(), Error>;

    /// Restore the drawing state saved by the matching [`save`](Surface::save).
    fn restore(&mut self) -> Result<(), Error>;
}

/// A [`Surface`] backed by a piet [`RenderContext`].
///
/// piet has no way to query the current clip, so the bounds are supplied
/// when the surface is created. [`save`](Surface::save) also clips the
/// context to those bounds, so strokes reaching past the corners are cut off.
pub struct PietSurface<'a, R: RenderContext> {
    ctx: &'a mut R,
    bounds: Rect,
}

impl<'a, R: RenderContext> PietSurface<'a, R> {
    /// Wrap a render context, drawing inside `bounds`.
    pub fn new(ctx: &'a mut R, bounds: Rect) -> Self {
        PietSurface { ctx, bounds }
    }
}

impl<R: RenderContext> Surface for PietSurface<'_, R> {
    fn clip_bounds(&self) -> Rect {
        self.bounds
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        let color = Color::from(color);
        self.ctx.stroke(Line::new(from, to), &color, width);
    }

    fn save(&mut self) -> Result<(), Error> {
        self.ctx.save()?;
        self.ctx.clip(self.bounds);
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Error> {
        self.ctx.restore()?;
        self.ctx.status()?;
        Ok(())
    }
}
