//! In-memory gradient description.
//!
//! A [`GradientDescription`] is a plain value: every edit produces a new one
//! (see [`crate::store`]). CSS and raster output are pure functions of it.
//!
//! Per-family parameters are carried flat on the description so switching
//! `gradientType` back and forth keeps the other families' settings; the
//! builders only ever see the projected [`GradientShape`].

mod description;
mod kind;
mod layer;
mod stack;

pub use description::GradientDescription;
pub use kind::{BlendMode, GradientKind, RadialShape, RadialSize};
pub use layer::GradientLayer;
pub use stack::{LayerId, LayerStack};

use crate::paint::Rgb;

/// Inclusive value ranges for every numeric field.
pub mod bounds {
    use std::ops::RangeInclusive;

    pub const OPACITY: RangeInclusive<u8> = 0..=100;
    pub const POSITION: RangeInclusive<u8> = 0..=100;
    pub const ANGLE: RangeInclusive<i32> = 0..=360;
    pub const CENTER: RangeInclusive<u8> = 0..=100;
    pub const PATTERN_OPACITY: RangeInclusive<u8> = 0..=50;
    pub const PATTERN1_ANGLE: RangeInclusive<i32> = 0..=360;
    pub const PATTERN2_ANGLE: RangeInclusive<i32> = -180..=180;
    pub const PATTERN_SIZE: RangeInclusive<u8> = 2..=50;
    pub const NOISE_OPACITY: RangeInclusive<u8> = 0..=100;
    pub const NOISE_SIZE: RangeInclusive<u8> = 1..=100;

    #[inline]
    pub(crate) fn clamp<T: Ord + Copy>(v: T, range: &RangeInclusive<T>) -> T {
        v.clamp(*range.start(), *range.end())
    }
}

/// Percentage position of a radial/conic center.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Center {
    pub x: u8,
    pub y: u8,
}

/// Geometry of one gradient layer, tagged by family.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GradientShape {
    Linear { angle: i32 },
    Radial { shape: RadialShape, size: RadialSize, center: Center },
    Conic { from_angle: i32, center: Center },
}

/// A resolved color stop: parsed color, `0`–`100` opacity, `0`–`100` position.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Stop {
    pub color: Rgb,
    pub opacity: u8,
    pub position: u8,
}

impl Stop {
    pub fn new(color: Rgb, opacity: u8, position: u8) -> Self {
        Self { color, opacity, position }
    }
}

/// One repeating stripe overlay: angle in degrees, stripe width in px.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct StripeSpec {
    pub angle: i32,
    pub size: u8,
}
