use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::paint::{Rgb, parse_hex_color};

use super::bounds::{self, clamp};
use super::{
    BlendMode, Center, GradientKind, GradientShape, LayerStack, RadialShape, RadialSize, Stop,
    StripeSpec,
};

/// Everything that drives the preview, the CSS text and the PNG export.
///
/// Field names serialize in camelCase (`color1Opacity`, `pattern2Angle`, ...).
/// Missing fields take the values of [`Default`], which is the "Classic"
/// preset with every overlay switched off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientDescription {
    // ── base gradient ─────────────────────────────────────────────────────
    pub gradient_type: GradientKind,
    pub color1: String,
    pub color2: String,
    pub color3: String,
    pub color1_opacity: u8,
    pub color2_opacity: u8,
    pub color3_opacity: u8,
    pub color1_position: u8,
    pub color2_position: u8,
    pub color3_position: u8,
    pub gradient_angle: i32,
    pub radial_center_x: u8,
    pub radial_center_y: u8,
    pub radial_shape: RadialShape,
    pub radial_size: RadialSize,
    pub conic_angle: i32,
    pub conic_center_x: u8,
    pub conic_center_y: u8,

    // ── pattern overlay ───────────────────────────────────────────────────
    pub pattern_enabled: bool,
    pub pattern_color: String,
    pub pattern_opacity: u8,
    pub pattern1_angle: i32,
    pub pattern1_size: u8,
    pub pattern2_angle: i32,
    pub pattern2_size: u8,

    // ── noise overlay (CSS text only) ─────────────────────────────────────
    pub noise_enabled: bool,
    pub noise_opacity: u8,
    pub noise_size: u8,

    // ── legacy single blend layer ─────────────────────────────────────────
    pub blending_enabled: bool,
    pub blend_mode: BlendMode,
    pub second_gradient_type: GradientKind,
    pub second_gradient_angle: i32,
    pub second_color1: String,
    pub second_color2: String,
    pub second_color1_position: u8,
    pub second_color2_position: u8,

    // ── blend stack ───────────────────────────────────────────────────────
    pub multi_layer_blending_enabled: bool,
    pub gradient_layers: LayerStack,
}

impl Default for GradientDescription {
    fn default() -> Self {
        Self {
            gradient_type: GradientKind::Linear,
            color1: "#0088cc".to_string(),
            color2: "#ff8844".to_string(),
            color3: "#1a3a52".to_string(),
            color1_opacity: 100,
            color2_opacity: 100,
            color3_opacity: 100,
            color1_position: 0,
            color2_position: 50,
            color3_position: 100,
            gradient_angle: 135,
            radial_center_x: 50,
            radial_center_y: 50,
            radial_shape: RadialShape::Circle,
            radial_size: RadialSize::FarthestCorner,
            conic_angle: 0,
            conic_center_x: 50,
            conic_center_y: 50,

            pattern_enabled: false,
            pattern_color: "#ffffff".to_string(),
            pattern_opacity: 5,
            pattern1_angle: 45,
            pattern1_size: 10,
            pattern2_angle: -45,
            pattern2_size: 10,

            noise_enabled: false,
            noise_opacity: 20,
            noise_size: 50,

            blending_enabled: false,
            blend_mode: BlendMode::Overlay,
            second_gradient_type: GradientKind::Linear,
            second_gradient_angle: 45,
            second_color1: "#ff0080".to_string(),
            second_color2: "#00ffff".to_string(),
            second_color1_position: 0,
            second_color2_position: 100,

            multi_layer_blending_enabled: false,
            gradient_layers: LayerStack::new(),
        }
    }
}

impl GradientDescription {
    /// Parses a description from TOML. Omitted fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Geometry of the base gradient for the current `gradient_type`.
    pub fn shape(&self) -> GradientShape {
        shape_for(self.gradient_type, self.gradient_angle, self)
    }

    /// The three base stops, in field order (never sorted).
    pub fn stops(&self) -> [Stop; 3] {
        [
            Stop::new(parse_hex_color(&self.color1), self.color1_opacity, self.color1_position),
            Stop::new(parse_hex_color(&self.color2), self.color2_opacity, self.color2_position),
            Stop::new(parse_hex_color(&self.color3), self.color3_opacity, self.color3_position),
        ]
    }

    /// Geometry of the legacy blend gradient.
    ///
    /// Radial and conic parameters are shared with the base gradient.
    pub fn legacy_blend_shape(&self) -> GradientShape {
        shape_for(self.second_gradient_type, self.second_gradient_angle, self)
    }

    /// The legacy blend gradient's two stops, both fully opaque.
    pub fn legacy_blend_stops(&self) -> [Stop; 2] {
        [
            Stop::new(parse_hex_color(&self.second_color1), 100, self.second_color1_position),
            Stop::new(parse_hex_color(&self.second_color2), 100, self.second_color2_position),
        ]
    }

    pub fn pattern_rgb(&self) -> Rgb {
        parse_hex_color(&self.pattern_color)
    }

    /// Pattern 1 (painted on top) and pattern 2, in that order.
    pub fn stripes(&self) -> [StripeSpec; 2] {
        [
            StripeSpec { angle: self.pattern1_angle, size: self.pattern1_size },
            StripeSpec { angle: self.pattern2_angle, size: self.pattern2_size },
        ]
    }

    /// Multi-layer blending is on and has at least one layer.
    ///
    /// When true, the legacy blend layer is suppressed.
    #[inline]
    pub fn multi_layer_active(&self) -> bool {
        self.multi_layer_blending_enabled && !self.gradient_layers.is_empty()
    }

    /// Copy with every numeric field forced into its documented range.
    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            color1_opacity: clamp(self.color1_opacity, &bounds::OPACITY),
            color2_opacity: clamp(self.color2_opacity, &bounds::OPACITY),
            color3_opacity: clamp(self.color3_opacity, &bounds::OPACITY),
            color1_position: clamp(self.color1_position, &bounds::POSITION),
            color2_position: clamp(self.color2_position, &bounds::POSITION),
            color3_position: clamp(self.color3_position, &bounds::POSITION),
            gradient_angle: clamp(self.gradient_angle, &bounds::ANGLE),
            radial_center_x: clamp(self.radial_center_x, &bounds::CENTER),
            radial_center_y: clamp(self.radial_center_y, &bounds::CENTER),
            conic_angle: clamp(self.conic_angle, &bounds::ANGLE),
            conic_center_x: clamp(self.conic_center_x, &bounds::CENTER),
            conic_center_y: clamp(self.conic_center_y, &bounds::CENTER),
            pattern_opacity: clamp(self.pattern_opacity, &bounds::PATTERN_OPACITY),
            pattern1_angle: clamp(self.pattern1_angle, &bounds::PATTERN1_ANGLE),
            pattern1_size: clamp(self.pattern1_size, &bounds::PATTERN_SIZE),
            pattern2_angle: clamp(self.pattern2_angle, &bounds::PATTERN2_ANGLE),
            pattern2_size: clamp(self.pattern2_size, &bounds::PATTERN_SIZE),
            noise_opacity: clamp(self.noise_opacity, &bounds::NOISE_OPACITY),
            noise_size: clamp(self.noise_size, &bounds::NOISE_SIZE),
            second_gradient_angle: clamp(self.second_gradient_angle, &bounds::ANGLE),
            second_color1_position: clamp(self.second_color1_position, &bounds::POSITION),
            second_color2_position: clamp(self.second_color2_position, &bounds::POSITION),
            gradient_layers: self.gradient_layers.map_layers(|l| l.clamped()),
            ..self.clone()
        }
    }
}

fn shape_for(kind: GradientKind, linear_angle: i32, d: &GradientDescription) -> GradientShape {
    match kind {
        GradientKind::Linear => GradientShape::Linear { angle: linear_angle },
        GradientKind::Radial => GradientShape::Radial {
            shape: d.radial_shape,
            size: d.radial_size,
            center: Center { x: d.radial_center_x, y: d.radial_center_y },
        },
        GradientKind::Conic => GradientShape::Conic {
            from_angle: d.conic_angle,
            center: Center { x: d.conic_center_x, y: d.conic_center_y },
        },
    }
}
