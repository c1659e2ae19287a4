use image::RgbaImage;

use crate::coords::{Vec2, css_angle_radians};
use crate::paint::{Color, LinearGradient};

use super::RasterError;

/// Repeating opaque stripes drawn in a rotated frame about the canvas center.
///
/// In the rotated frame stripes are vertical rectangles `size` px wide,
/// repeating every `size + 4` px from `-2 * max(w, h)`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StripePattern {
    /// CSS angle in degrees.
    pub angle: i32,
    pub size: u8,
    pub color: Color,
}

impl StripePattern {
    /// Distance between the leading edges of two stripes, in px.
    #[inline]
    pub fn stride(&self) -> f32 {
        f32::from(self.size) + 4.0
    }
}

/// CPU drawing surface holding premultiplied pixels, row-major.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Allocates a transparent canvas.
    ///
    /// Fails when either dimension is zero, when the byte size overflows or
    /// when the allocator refuses the request.
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        let surface = || RasterError::Surface { width, height };
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n > 0)
            .ok_or_else(surface)?;
        len.checked_mul(size_of::<Color>()).ok_or_else(surface)?;

        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| surface())?;
        pixels.resize(len, Color::transparent());
        Ok(Self { width, height, pixels })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    /// Paints `gradient` over every pixel (sampled at pixel centers).
    pub fn fill_gradient(&mut self, gradient: &LinearGradient) {
        if !gradient.is_valid() {
            log::warn!("skipping degenerate gradient fill");
            return;
        }
        let width = self.width as usize;
        for (i, dst) in self.pixels.iter_mut().enumerate() {
            let p = Vec2::new((i % width) as f32 + 0.5, (i / width) as f32 + 0.5);
            *dst = gradient.sample(p).over(*dst);
        }
    }

    /// Paints `pattern` with `samples × samples` coverage per pixel.
    pub fn fill_stripes(&mut self, pattern: &StripePattern, samples: u32) {
        if pattern.size == 0 || pattern.color.a <= 0.0 {
            return;
        }

        let samples = samples.max(1);
        let center = self.center();
        let (sin, cos) = css_angle_radians(pattern.angle).sin_cos();
        let max_dim = self.width.max(self.height) as f32 * 2.0;
        let stride = pattern.stride();
        let size = f32::from(pattern.size);
        let step = 1.0 / samples as f32;
        let weight = 1.0 / (samples * samples) as f32;
        let width = self.width as usize;

        for (i, dst) in self.pixels.iter_mut().enumerate() {
            let px = (i % width) as f32;
            let py = (i / width) as f32;

            let mut hits = 0u32;
            for sy in 0..samples {
                for sx in 0..samples {
                    let d = Vec2::new(px + (sx as f32 + 0.5) * step, py + (sy as f32 + 0.5) * step)
                        - center;
                    // Undo the frame rotation: only the across-stripe coordinate matters.
                    let local_x = center.x + cos * d.x + sin * d.y;
                    let u = local_x + max_dim;
                    if (0.0..2.0 * max_dim + size).contains(&u) && u.rem_euclid(stride) < size {
                        hits += 1;
                    }
                }
            }

            if hits > 0 {
                *dst = pattern.color.scaled(hits as f32 * weight).over(*dst);
            }
        }
    }

    /// Straight-alpha RGBA8 image of the canvas.
    pub fn to_rgba_image(&self) -> Result<RgbaImage, RasterError> {
        let surface = RasterError::Surface { width: self.width, height: self.height };
        let mut bytes = Vec::new();
        if bytes.try_reserve_exact(self.pixels.len() * 4).is_err() {
            return Err(surface);
        }
        bytes.extend(self.pixels.iter().flat_map(|c| c.to_rgba8()));
        RgbaImage::from_raw(self.width, self.height, bytes).ok_or(surface)
    }
}
