//! Rasterizing whole sweeps into images.

use piet_sweep::{AngleGradient, Color, Rgba, SweepOptions};
use piet_sweep_image::{samples, ImageSurface};

#[test]
fn gray_ramp_matches_angle() {
    let mut surface = ImageSurface::new(64, 64);
    let gradient = AngleGradient::new(vec![Color::BLACK, Color::WHITE]);
    gradient.paint(&mut surface).unwrap();

    // Straight below the center is a quarter turn.
    let [r, g, b, a] = surface.image().get_pixel(32, 42).0;
    assert_eq!(a, 255);
    assert_eq!(r, g);
    assert_eq!(g, b);
    assert!((55..=70).contains(&r), "got {}", r);

    // Straight above is three quarters.
    let [r, _, _, a] = surface.image().get_pixel(32, 21).0;
    assert_eq!(a, 255);
    assert!((180..=200).contains(&r), "got {}", r);
}

#[test]
fn center_is_fully_covered() {
    let mut surface = ImageSurface::new(32, 32);
    samples::get(1).unwrap().paint(&mut surface).unwrap();

    for (x, y, pixel) in surface.image().enumerate_pixels() {
        let dx = x as f64 + 0.5 - 16.0;
        let dy = y as f64 + 0.5 - 16.0;
        if dx.hypot(dy) < 8.0 {
            assert_eq!(pixel.0[3], 255, "gap at ({}, {})", x, y);
        }
    }
}

#[test]
fn background_shows_through_translucent_sweep() {
    let mut surface = ImageSurface::new(16, 16);
    surface.clear(Rgba::BLACK);
    let gradient = AngleGradient::new(vec![
        Color::rgba8(255, 255, 255, 0),
        Color::rgba8(255, 255, 255, 0),
    ])
    .with_options(SweepOptions::new().with_line_width(3.0));
    gradient.paint(&mut surface).unwrap();

    assert!(surface.image().pixels().all(|p| p.0 == [0, 0, 0, 255]));
}

#[test]
fn every_sample_renders() {
    for number in 0..samples::SAMPLE_COUNT {
        let mut surface = ImageSurface::new(24, 16);
        samples::get(number).unwrap().paint(&mut surface).unwrap();
        assert!(surface.image().pixels().any(|p| p.0[3] > 0), "sample {}", number);
    }
}
