//! Paint model shared between the CSS emitter and the raster canvas.
//!
//! Scope:
//! - hex color codec and CSS color tokens
//! - premultiplied color for compositing
//! - linear gradient sampling

pub mod color;
pub mod gradient;

pub use color::{Color, Rgb, alpha_token, parse_hex_color, rgba_token};
pub use gradient::{ColorStop, LinearGradient};
