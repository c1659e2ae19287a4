use std::fmt;

use serde::{Deserialize, Serialize};

/// Gradient family of a layer.
///
/// Deserialization never fails: an unknown or empty keyword falls back to
/// [`GradientKind::Linear`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub fn from_keyword(s: &str) -> Self {
        match s {
            "radial" => GradientKind::Radial,
            "conic" => GradientKind::Conic,
            _ => GradientKind::Linear,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }
}

impl From<String> for GradientKind {
    fn from(s: String) -> Self {
        GradientKind::from_keyword(&s)
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `radial-gradient` ending shape.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadialShape {
    #[default]
    Circle,
    Ellipse,
}

impl RadialShape {
    pub const fn as_str(self) -> &'static str {
        match self {
            RadialShape::Circle => "circle",
            RadialShape::Ellipse => "ellipse",
        }
    }
}

impl fmt::Display for RadialShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `radial-gradient` size keyword.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadialSize {
    ClosestSide,
    ClosestCorner,
    FarthestSide,
    #[default]
    FarthestCorner,
}

impl RadialSize {
    pub const fn as_str(self) -> &'static str {
        match self {
            RadialSize::ClosestSide => "closest-side",
            RadialSize::ClosestCorner => "closest-corner",
            RadialSize::FarthestSide => "farthest-side",
            RadialSize::FarthestCorner => "farthest-corner",
        }
    }
}

impl fmt::Display for RadialSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CSS `<blend-mode>` keyword.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    #[default]
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
    Normal,
}

impl BlendMode {
    /// Every keyword, in the order the blend pickers list them.
    pub const ALL: [BlendMode; 16] = [
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
        BlendMode::Normal,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
            BlendMode::Normal => "normal",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
