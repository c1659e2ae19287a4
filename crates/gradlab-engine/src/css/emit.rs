use std::fmt::Write as _;

use serde::Serialize;

use crate::model::GradientDescription;

use super::compose::{compose_background, emit_blend_mode_value};

/// Texture referenced by the noise overlay rule.
pub const NOISE_TEXTURE_URL: &str = "/noise.png";

/// Paint style applied to the live preview surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewStyle {
    pub background: String,
    pub background_size: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_blend_mode: Option<String>,
}

/// Preview style for `desc`. The noise overlay is not part of it.
pub fn preview_style(desc: &GradientDescription) -> PreviewStyle {
    PreviewStyle {
        background: compose_background(desc).background(),
        background_size: "cover",
        background_blend_mode: emit_blend_mode_value(desc),
    }
}

/// Copyable CSS declarations for `desc`.
///
/// ```text
/// background: <layers joined by ",\n">;
/// background-size: cover;
/// [background-blend-mode: <modes>;]
/// [<blank line, comment, .noise-overlay rule>]
/// ```
pub fn generate_css_code(desc: &GradientDescription) -> String {
    let mut css = format!(
        "background: {};\nbackground-size: cover;",
        compose_background(desc).background()
    );

    if let Some(modes) = emit_blend_mode_value(desc) {
        let _ = write!(css, "\nbackground-blend-mode: {modes};");
    }

    if desc.noise_enabled {
        push_noise_rule(&mut css, desc.noise_size, desc.noise_opacity);
    }

    css
}

fn push_noise_rule(css: &mut String, size: u8, opacity: u8) {
    // Shortest round-trip decimal: 50 -> 0.5, 100 -> 1, 7 -> 0.07.
    let opacity = f64::from(opacity) / 100.0;
    let _ = write!(
        css,
        "\n\n/* Noise overlay - apply to a pseudo-element or overlay div */\n\
         .noise-overlay {{\n  \
         background-image: url('{NOISE_TEXTURE_URL}');\n  \
         background-position: 50%;\n  \
         background-repeat: repeat;\n  \
         background-size: {size}%;\n  \
         opacity: {opacity};\n\
         }}"
    );
}
