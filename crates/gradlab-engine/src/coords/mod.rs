//! Geometry used by the raster renderer.
//!
//! Canonical canvas space:
//! - Device pixels, origin top-left
//! - +X right, +Y down
//!
//! CSS angles (0deg = up, clockwise) are converted to canvas radians with
//! [`css_angle_radians`].

mod vec2;

pub use vec2::Vec2;

/// Converts a CSS gradient angle in degrees into a canvas rotation in radians.
///
/// CSS measures from the top edge, canvas measures from +X. In a y-down space
/// the unit vector `(cos r, sin r)` of the returned angle points the same way
/// as the CSS gradient line.
///
/// The PNG gradient axis and stripe rotation both go through this, so the
/// export points the same way as the CSS preview rather than using the raw
/// canvas rotation for the same number.
#[inline]
pub fn css_angle_radians(deg: i32) -> f32 {
    ((deg - 90) as f32).to_radians()
}
