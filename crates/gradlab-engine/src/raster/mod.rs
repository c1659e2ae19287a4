//! Raster rendering of a description into a PNG.
//!
//! Reproduces the base gradient and the pattern overlay only. Blend layers
//! (stack and legacy) and the noise overlay exist in the CSS output alone.
//!
//! Pipeline:
//! 1. fill the canvas with the base gradient, drawn as a linear gradient
//!    through the canvas center along `gradientAngle`
//! 2. if the pattern is on, paint pattern 2 then pattern 1 as rotated stripes
//! 3. encode as PNG

mod canvas;
mod export;

pub use canvas::{Canvas, StripePattern};
pub use export::{Exporter, download_file_name};

use std::io::Cursor;
use std::time::Instant;

use image::{ImageFormat, RgbaImage};
use thiserror::Error;

use crate::config::RenderConfig;
use crate::coords::{Vec2, css_angle_radians};
use crate::model::GradientDescription;
use crate::paint::{Color, LinearGradient};

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("cannot allocate a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("writing image failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The base gradient as a canvas gradient for a `width × height` surface.
///
/// The axis passes through the center along the CSS angle and reaches
/// `max(width, height)` out on each side; stops are padded beyond both ends.
/// Only the linear angle is used, whatever `gradientType` says.
pub fn base_gradient(desc: &GradientDescription, width: u32, height: u32) -> LinearGradient {
    let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
    let reach = width.max(height) as f32;
    let dir = Vec2::from_angle(css_angle_radians(desc.gradient_angle));

    let mut gradient = LinearGradient::new(center - dir * reach, center + dir * reach);
    for stop in desc.stops() {
        gradient.add_color_stop(
            f32::from(stop.position) / 100.0,
            Color::from_rgb_opacity(stop.color, stop.opacity),
        );
    }
    gradient
}

/// Pattern 2 then pattern 1, in paint order.
pub fn stripe_patterns(desc: &GradientDescription) -> [StripePattern; 2] {
    let color = Color::from_rgb_opacity(desc.pattern_rgb(), desc.pattern_opacity);
    let [top, under] = desc.stripes();
    [
        StripePattern { angle: under.angle, size: under.size, color },
        StripePattern { angle: top.angle, size: top.size, color },
    ]
}

/// Draws `desc` onto a fresh canvas.
pub fn render_canvas(desc: &GradientDescription, config: &RenderConfig) -> Result<Canvas, RasterError> {
    let mut canvas = Canvas::new(config.width, config.height)?;
    canvas.fill_gradient(&base_gradient(desc, config.width, config.height));

    if desc.pattern_enabled {
        for pattern in stripe_patterns(desc) {
            canvas.fill_stripes(&pattern, config.supersample);
        }
    }
    Ok(canvas)
}

/// Straight-alpha pixels of `desc`.
pub fn render_pixels(desc: &GradientDescription, config: &RenderConfig) -> Result<RgbaImage, RasterError> {
    render_canvas(desc, config)?.to_rgba_image()
}

pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, RasterError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Renders and encodes `desc` with the given settings.
pub fn try_render_png(desc: &GradientDescription, config: &RenderConfig) -> Result<Vec<u8>, RasterError> {
    let started = Instant::now();
    let image = render_pixels(desc, config)?;
    let bytes = encode_png(&image)?;
    log::debug!(
        "rendered {}x{} png ({} bytes) in {:?}",
        config.width,
        config.height,
        bytes.len(),
        started.elapsed()
    );
    Ok(bytes)
}

/// PNG bytes of `desc` on the default 1920×1080 canvas.
///
/// Failures are logged and yield `None`; no partial image is ever returned.
pub fn render_to_image(desc: &GradientDescription) -> Option<Vec<u8>> {
    render_to_image_with(desc, &RenderConfig::default())
}

/// [`render_to_image`] with explicit settings.
pub fn render_to_image_with(desc: &GradientDescription, config: &RenderConfig) -> Option<Vec<u8>> {
    match try_render_png(desc, config) {
        Ok(bytes) => Some(bytes),
        Err(err) => {
            log::error!("error generating image: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GradientLayer;

    fn small() -> RenderConfig {
        RenderConfig::default().with_size(64, 36)
    }

    fn two_tone(angle: i32) -> GradientDescription {
        GradientDescription {
            gradient_angle: angle,
            color1: "#000000".into(),
            color2: "#000000".into(),
            color3: "#ffffff".into(),
            color1_position: 0,
            color2_position: 50,
            color3_position: 50,
            ..Default::default()
        }
    }

    #[test]
    fn ninety_degrees_runs_left_to_right() {
        let img = render_pixels(&two_tone(90), &small()).unwrap();
        assert_eq!(img.get_pixel(2, 18).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(61, 18).0, [255, 255, 255, 255]);
    }

    #[test]
    fn zero_degrees_runs_bottom_to_top() {
        let img = render_pixels(&two_tone(0), &small()).unwrap();
        assert_eq!(img.get_pixel(32, 34).0, [0, 0, 0, 255]);
        assert_eq!(img.get_pixel(32, 1).0, [255, 255, 255, 255]);
    }

    #[test]
    fn axis_reaches_longest_side_each_way() {
        let g = base_gradient(&GradientDescription { gradient_angle: 90, ..Default::default() }, 64, 36);
        assert!((g.start.x - -32.0).abs() < 1e-4 && (g.start.y - 18.0).abs() < 1e-4);
        assert!((g.end.x - 96.0).abs() < 1e-4 && (g.end.y - 18.0).abs() < 1e-4);
        assert_eq!(g.stops().len(), 3);
    }

    #[test]
    fn stop_opacity_reaches_pixels() {
        let d = GradientDescription {
            color1_opacity: 50,
            color2_opacity: 50,
            color3_opacity: 50,
            ..Default::default()
        };
        let img = render_pixels(&d, &small()).unwrap();
        assert_eq!(img.get_pixel(10, 10).0[3], 128);
    }

    #[test]
    fn pattern_changes_pixels() {
        let plain = GradientDescription { pattern_opacity: 50, ..Default::default() };
        let patterned = GradientDescription { pattern_enabled: true, ..plain.clone() };
        let a = render_pixels(&plain, &small()).unwrap();
        let b = render_pixels(&patterned, &small()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn blend_layers_and_noise_are_not_rasterized() {
        let plain = GradientDescription::default();
        let mut decorated = GradientDescription {
            noise_enabled: true,
            blending_enabled: true,
            multi_layer_blending_enabled: true,
            ..plain.clone()
        };
        decorated.gradient_layers.push(GradientLayer::default());
        assert_eq!(
            render_pixels(&plain, &small()).unwrap(),
            render_pixels(&decorated, &small()).unwrap()
        );
    }

    #[test]
    fn pattern_paint_order_is_two_then_one() {
        let d = GradientDescription { pattern1_angle: 10, pattern2_angle: -20, ..Default::default() };
        let [first, second] = stripe_patterns(&d);
        assert_eq!(first.angle, -20);
        assert_eq!(second.angle, 10);
    }

    #[test]
    fn png_decodes_to_requested_size() {
        let bytes = render_to_image_with(&GradientDescription::default(), &small()).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (64, 36));
    }

    #[test]
    fn default_canvas_is_full_hd() {
        let bytes = render_to_image(&GradientDescription::default()).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1920, 1080));
    }

    #[test]
    fn unavailable_surface_returns_none() {
        let config = RenderConfig::default().with_size(0, 0);
        assert!(render_to_image_with(&GradientDescription::default(), &config).is_none());
    }

    #[test]
    fn huge_surface_returns_none_without_panicking() {
        let config = RenderConfig::default().with_size(u32::MAX, u32::MAX);
        let result = std::panic::catch_unwind(|| render_to_image_with(&GradientDescription::default(), &config));
        assert!(matches!(result, Ok(None)));
    }
}
