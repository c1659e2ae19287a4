use serde::{Deserialize, Serialize};

use crate::paint::parse_hex_color;

use super::bounds::{self, clamp};
use super::{BlendMode, Center, GradientKind, GradientShape, RadialShape, RadialSize, Stop};

/// One entry of the blend stack: a two-stop gradient with a shared opacity,
/// composited over the layers below it with `blend_mode`.
///
/// Identity lives in [`LayerStack`](super::LayerStack), not here, so two
/// layers with equal values compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GradientLayer {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub color1: String,
    pub color2: String,
    pub color1_position: u8,
    pub color2_position: u8,
    pub opacity: u8,
    pub blend_mode: BlendMode,
    /// Linear angle.
    pub angle: i32,
    pub radial_center_x: u8,
    pub radial_center_y: u8,
    pub radial_shape: RadialShape,
    pub radial_size: RadialSize,
    pub conic_angle: i32,
    pub conic_center_x: u8,
    pub conic_center_y: u8,
}

impl Default for GradientLayer {
    /// The layer added by "Add layer": red to blue, 80% opacity, `screen`.
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            color1: "#ff0000".to_string(),
            color2: "#0000ff".to_string(),
            color1_position: 0,
            color2_position: 100,
            opacity: 80,
            blend_mode: BlendMode::Screen,
            angle: 45,
            radial_center_x: 50,
            radial_center_y: 50,
            radial_shape: RadialShape::Circle,
            radial_size: RadialSize::FarthestCorner,
            conic_angle: 0,
            conic_center_x: 50,
            conic_center_y: 50,
        }
    }
}

impl GradientLayer {
    pub fn shape(&self) -> GradientShape {
        match self.kind {
            GradientKind::Linear => GradientShape::Linear { angle: self.angle },
            GradientKind::Radial => GradientShape::Radial {
                shape: self.radial_shape,
                size: self.radial_size,
                center: Center { x: self.radial_center_x, y: self.radial_center_y },
            },
            GradientKind::Conic => GradientShape::Conic {
                from_angle: self.conic_angle,
                center: Center { x: self.conic_center_x, y: self.conic_center_y },
            },
        }
    }

    /// Both stops share the layer opacity.
    pub fn stops(&self) -> [Stop; 2] {
        [
            Stop::new(parse_hex_color(&self.color1), self.opacity, self.color1_position),
            Stop::new(parse_hex_color(&self.color2), self.opacity, self.color2_position),
        ]
    }

    #[must_use]
    pub fn clamped(&self) -> Self {
        Self {
            color1_position: clamp(self.color1_position, &bounds::POSITION),
            color2_position: clamp(self.color2_position, &bounds::POSITION),
            opacity: clamp(self.opacity, &bounds::OPACITY),
            angle: clamp(self.angle, &bounds::ANGLE),
            radial_center_x: clamp(self.radial_center_x, &bounds::CENTER),
            radial_center_y: clamp(self.radial_center_y, &bounds::CENTER),
            conic_angle: clamp(self.conic_angle, &bounds::ANGLE),
            conic_center_x: clamp(self.conic_center_x, &bounds::CENTER),
            conic_center_y: clamp(self.conic_center_y, &bounds::CENTER),
            ..self.clone()
        }
    }
}
