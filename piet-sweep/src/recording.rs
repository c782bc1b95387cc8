// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A surface that remembers what was drawn.

use piet::kurbo::{Point, Rect};

use crate::{new_error, Error, ErrorKind, Rgba, Surface};

/// A single recorded [`Surface::stroke_line`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeRecord {
    pub from: Point,
    pub to: Point,
    pub color: Rgba,
    pub width: f64,
}

/// A surface that records strokes instead of rendering them.
///
/// This is useful largely for tests, but is made public in case
/// it might come in handy.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    bounds: Rect,
    strokes: Vec<StrokeRecord>,
    depth: usize,
}

impl RecordingSurface {
    pub fn new(bounds: Rect) -> RecordingSurface {
        RecordingSurface {
            bounds,
            strokes: Vec::new(),
            depth: 0,
        }
    }

    /// Every stroke drawn so far, in order.
    pub fn strokes(&self) -> &[StrokeRecord] {
        &self.strokes
    }

    /// The number of `save` calls not yet matched by a `restore`.
    pub fn save_depth(&self) -> usize {
        self.depth
    }

    /// Forget all recorded strokes.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

impl Surface for RecordingSurface {
    fn clip_bounds(&self) -> Rect {
        self.bounds
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.strokes.push(StrokeRecord {
            from,
            to,
            color,
            width,
        });
    }

    fn save(&mut self) -> Result<(), Error> {
        self.depth += 1;
        Ok(())
    }

    fn restore(&mut self) -> Result<(), Error> {
        if self.depth == 0 {
            return Err(new_error(ErrorKind::StackUnbalance));
        }
        self.depth -= 1;
        Ok(())
    }
}
