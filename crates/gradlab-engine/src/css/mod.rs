//! CSS code generation.
//!
//! Everything here is pure and deterministic: identical descriptions yield
//! byte-identical text. Numbers are formatted with integer arithmetic or
//! `Display`, never with locale-aware formatting.
//!
//! | Module | Produces |
//! |--------|----------|
//! | [`gradient`] | one `linear-`/`radial-`/`conic-gradient(...)` image |
//! | [`pattern`] | one `repeating-linear-gradient(...)` stripe image |
//! | [`compose`] | ordered layer list + blend modes |
//! | [`emit`] | copyable declaration text and the preview style |

pub mod compose;
pub mod emit;
pub mod gradient;
pub mod pattern;

pub use compose::{Composition, compose_background, emit_blend_mode_value};
pub use emit::{PreviewStyle, generate_css_code, preview_style};
pub use gradient::build_gradient_css;
pub use pattern::build_pattern_layer;

/// Separator between layers in a `background` value.
pub const LAYER_SEPARATOR: &str = ",\n";
