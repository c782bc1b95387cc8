// Copyright 2024 the Piet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use image::{Rgba as Pixel, RgbaImage};
use piet_sweep::kurbo::{Point, Rect};
use piet_sweep::{new_error, Error, ErrorKind, Rgba, Surface};

/// A [`Surface`] that rasterizes into an in-memory RGBA image.
///
/// Lines are plotted without anti-aliasing and composited with straight
/// alpha source-over blending. Everything outside the image is discarded.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    image: RgbaImage,
    depth: usize,
}

impl ImageSurface {
    /// Create a transparent surface of the given size in pixels.
    pub fn new(width: u32, height: u32) -> ImageSurface {
        ImageSurface::from_image(RgbaImage::new(width, height))
    }

    /// Draw on top of an existing image.
    pub fn from_image(image: RgbaImage) -> ImageSurface {
        ImageSurface { image, depth: 0 }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Fill the whole image with `color`, replacing what was there.
    pub fn clear(&mut self, color: Rgba) {
        let pixel = Pixel(color.to_rgba8());
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn blend_pixel(&mut self, x: i64, y: i64, src: [u8; 4]) {
        if x < 0 || y < 0 || x >= i64::from(self.image.width()) || y >= i64::from(self.image.height())
        {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        dst.0 = source_over(dst.0, src);
    }
}

impl Surface for ImageSurface {
    fn clip_bounds(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            f64::from(self.image.width()),
            f64::from(self.image.height()),
        )
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        let (w, h) = (i64::from(self.image.width()), i64::from(self.image.height()));
        // A brush wider than both sides together covers the whole image.
        let max_brush = 2.0 * (w + h) as f64;
        let brush = width.round().max(1.0).min(max_brush) as i64;
        let half = brush as f64 / 2.0;
        let bounds = self.clip_bounds().inflate(half, half);
        let (p0, p1) = match clip_line(from, to, bounds) {
            Some(segment) => segment,
            None => {
                log::trace!("line {:?} -> {:?} is outside the image", from, to);
                return;
            }
        };

        let src = color.to_rgba8();
        let offset = (brush - 1) / 2;
        let delta = p1 - p0;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;

        for i in 0..=steps {
            let p = p0 + delta * (i as f64 / steps as f64);
            let x = p.x.floor() as i64 - offset;
            let y = p.y.floor() as i64 - offset;
            for py in y.max(0)..(y + brush).min(h) {
                for px in x.max(0)..(x + brush).min(w) {
                    self.blend_pixel(px, py, src);
                }
            }
        }
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

/// Clip the segment `p0..p1` to `rect` (Liang-Barsky).
fn clip_line(p0: Point, p1: Point, rect: Rect) -> Option<(Point, Point)> {
    let d = p1 - p0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let edges = [
        (-d.x, p0.x - rect.x0),
        (d.x, rect.x1 - p0.x),
        (-d.y, p0.y - rect.y0),
        (d.y, rect.y1 - p0.y),
    ];
    for (p, q) in edges {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((p0 + d * t0, p0 + d * t1))
}

fn source_over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let sa = f64::from(src[3]) / 255.0;
    let da = f64::from(dst[3]) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return [0; 4];
    }

    let mut out = [0; 4];
    for i in 0..3 {
        let c = (f64::from(src[i]) * sa + f64::from(dst[i]) * da * (1.0 - sa)) / out_a;
        out[i] = c.round().clamp(0.0, 255.0) as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    out
}
