//! Gradient Labs engine.
//!
//! Turns a [`GradientDescription`] into layered CSS `background` text and a
//! PNG rendering of the same design.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`model`] | `GradientDescription`, `GradientLayer`, `LayerStack`, keyword enums |
//! | [`paint`] | hex color codec, premultiplied `Color`, `LinearGradient` |
//! | [`css`] | gradient/pattern builders, layer composition, CSS text |
//! | [`raster`] | CPU canvas, PNG encoding, file export |
//! | [`preset`] | built-in catalog |
//! | [`random`] | "Randomize style" |
//! | [`store`] | whole-value description store with undo |
//! | [`config`] | TOML configuration |
//! | [`logging`] | `env_logger` setup |
//!
//! # Quick start
//!
//! ```rust
//! use gradlab_engine::{GradientDescription, generate_css_code};
//!
//! let css = generate_css_code(&GradientDescription::default());
//! assert!(css.starts_with("background: linear-gradient(135deg, "));
//! assert!(css.ends_with("background-size: cover;"));
//! ```

pub mod config;
pub mod coords;
pub mod css;
pub mod logging;
pub mod model;
pub mod paint;
pub mod preset;
pub mod random;
pub mod raster;
pub mod store;

pub use config::{ConfigError, EngineConfig, RenderConfig};
pub use css::{
    Composition, PreviewStyle, build_gradient_css, build_pattern_layer, compose_background,
    emit_blend_mode_value, generate_css_code, preview_style,
};
pub use model::{BlendMode, GradientDescription, GradientKind, GradientLayer, LayerId, LayerStack};
pub use paint::{Rgb, parse_hex_color};
pub use raster::{Exporter, RasterError, render_to_image};
pub use store::DescriptionStore;
