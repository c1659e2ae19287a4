use crate::model::StripeSpec;
use crate::paint::{Rgb, rgba_token};

/// Width of the fade from stripe color to transparent, in px.
pub const STRIPE_FADE_PX: u32 = 4;
/// Transparent tail after the fade, in px.
pub const STRIPE_GAP_PX: u32 = 1;

/// One repeating diagonal stripe layer.
///
/// Stripe color runs from `0px` to `size`px, fades to transparent by
/// `size + 4`px and stays transparent to `size + 5`px, then repeats.
pub fn build_pattern_layer(angle: i32, size: u8, color: Rgb, opacity: &str) -> String {
    let rgba = rgba_token(color, opacity);
    let size = u32::from(size);
    let fade_end = size + STRIPE_FADE_PX;
    let period = fade_end + STRIPE_GAP_PX;
    format!(
        "repeating-linear-gradient({angle}deg, {rgba} 0px, {rgba} {size}px, transparent {fade_end}px, transparent {period}px)"
    )
}

/// [`build_pattern_layer`] for a [`StripeSpec`].
pub fn build_stripe(spec: StripeSpec, color: Rgb, opacity: &str) -> String {
    build_pattern_layer(spec.angle, spec.size, color, opacity)
}
