use crate::model::{BlendMode, GradientDescription};
use crate::paint::alpha_token;

use super::LAYER_SEPARATOR;
use super::gradient::build_gradient_css;
use super::pattern::build_stripe;

/// Ordered CSS background layers, topmost first.
///
/// `blend_modes` lists only blend-stack modes (or the single legacy mode), so
/// it is usually shorter than `css_layers`: pattern and base layers stay at
/// the implicit `normal` and never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub css_layers: Vec<String>,
    pub blend_modes: Vec<BlendMode>,
}

impl Composition {
    /// The `background` property value.
    pub fn background(&self) -> String {
        self.css_layers.join(LAYER_SEPARATOR)
    }
}

/// Orders every active layer of `desc` into a CSS background stack.
///
/// With the blend stack active (enabled, at least one layer):
/// `[stack layers..., pattern1, pattern2, base]`, and the legacy blend layer is
/// skipped even if enabled.
///
/// Otherwise: `[pattern1, pattern2, legacy blend, base]`, each optional part
/// present only when its toggle is on.
pub fn compose_background(desc: &GradientDescription) -> Composition {
    let mut css_layers = Vec::new();
    let mut blend_modes = Vec::new();

    if desc.multi_layer_active() {
        for layer in desc.gradient_layers.layers() {
            css_layers.push(build_gradient_css(&layer.shape(), &layer.stops()));
            blend_modes.push(layer.blend_mode);
        }
        push_patterns(desc, &mut css_layers);
    } else {
        push_patterns(desc, &mut css_layers);
        if desc.blending_enabled {
            css_layers.push(build_gradient_css(
                &desc.legacy_blend_shape(),
                &desc.legacy_blend_stops(),
            ));
        }
    }

    css_layers.push(build_gradient_css(&desc.shape(), &desc.stops()));

    Composition { css_layers, blend_modes }
}

fn push_patterns(desc: &GradientDescription, out: &mut Vec<String>) {
    if !desc.pattern_enabled {
        return;
    }
    let color = desc.pattern_rgb();
    let opacity = alpha_token(desc.pattern_opacity);
    for stripe in desc.stripes() {
        out.push(build_stripe(stripe, color, &opacity));
    }
}

/// Value for `background-blend-mode`, or `None` to omit the property.
///
/// Blend stack modes joined with `", "` when the stack is active, else the
/// legacy mode when legacy blending is on.
pub fn emit_blend_mode_value(desc: &GradientDescription) -> Option<String> {
    if desc.multi_layer_active() {
        let modes: Vec<&str> = desc.gradient_layers.layers().map(|l| l.blend_mode.as_str()).collect();
        Some(modes.join(", "))
    } else if desc.blending_enabled {
        Some(desc.blend_mode.to_string())
    } else {
        None
    }
}
