//! Built-in preset catalog.
//!
//! Each preset is a complete [`GradientDescription`]: base colors, angle and
//! pattern settings come from the table below, everything else is default
//! (linear, overlays off, no blend layers).

use crate::model::GradientDescription;

/// A named starting point.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub description: GradientDescription,
}

struct Row {
    name: &'static str,
    colors: [&'static str; 3],
    opacities: [u8; 3],
    positions: [u8; 3],
    angle: i32,
    pattern_opacity: u8,
    pattern_color: &'static str,
    pattern1: (i32, u8),
    pattern2: (i32, u8),
}

const FULL: [u8; 3] = [100, 100, 100];
const SPREAD: [u8; 3] = [0, 50, 100];

#[rustfmt::skip]
const CATALOG: [Row; 10] = [
    Row { name: "Classic",      colors: ["#0088cc", "#ff8844", "#1a3a52"], opacities: FULL, positions: SPREAD, angle: 135, pattern_opacity: 5,  pattern_color: "#ffffff", pattern1: (45, 10), pattern2: (-45, 10) },
    Row { name: "Ocean",        colors: ["#001a4d", "#0066ff", "#00ccff"], opacities: FULL, positions: SPREAD, angle: 45,  pattern_opacity: 3,  pattern_color: "#ffffff", pattern1: (30, 12), pattern2: (-30, 12) },
    Row { name: "Sunset",       colors: ["#ff6b00", "#ffaa00", "#ff0066"], opacities: FULL, positions: SPREAD, angle: 180, pattern_opacity: 8,  pattern_color: "#ffffff", pattern1: (60, 8),  pattern2: (-60, 8) },
    Row { name: "Forest",       colors: ["#0d3b0d", "#228b22", "#32cd32"], opacities: FULL, positions: SPREAD, angle: 120, pattern_opacity: 6,  pattern_color: "#ffffff", pattern1: (45, 15), pattern2: (-45, 15) },
    Row { name: "Purple Storm", colors: ["#2d1b4e", "#7b2cbf", "#b5179e"], opacities: FULL, positions: SPREAD, angle: 315, pattern_opacity: 7,  pattern_color: "#ffffff", pattern1: (75, 11), pattern2: (-75, 11) },
    Row { name: "Minimalist",   colors: ["#f5f5f5", "#cccccc", "#888888"], opacities: FULL, positions: SPREAD, angle: 90,  pattern_opacity: 2,  pattern_color: "#000000", pattern1: (45, 8),  pattern2: (-45, 8) },
    Row { name: "Neon",         colors: ["#ff006e", "#ffbe0b", "#00f5ff"], opacities: FULL, positions: SPREAD, angle: 225, pattern_opacity: 10, pattern_color: "#ffffff", pattern1: (90, 6),  pattern2: (0, 6) },
    Row { name: "Rose Gold",    colors: ["#d4a574", "#f4d4b0", "#b8860b"], opacities: FULL, positions: SPREAD, angle: 135, pattern_opacity: 4,  pattern_color: "#ffffff", pattern1: (45, 12), pattern2: (-45, 12) },
    Row { name: "Ruby Storm",   colors: ["#663135", "#0f89db", "#e2fa38"], opacities: [68, 91, 93], positions: [23, 63, 91], angle: 62, pattern_opacity: 3, pattern_color: "#ffffff", pattern1: (154, 8), pattern2: (-119, 6) },
    Row { name: "Cyber Teal",   colors: ["#31febc", "#1414be", "#58413a"], opacities: [87, 69, 83], positions: [20, 42, 75], angle: 12, pattern_opacity: 3, pattern_color: "#ffffff", pattern1: (93, 2),  pattern2: (-131, 2) },
];

impl Row {
    fn to_preset(&self) -> Preset {
        let [c1, c2, c3] = self.colors;
        let [o1, o2, o3] = self.opacities;
        let [p1, p2, p3] = self.positions;
        Preset {
            name: self.name,
            description: GradientDescription {
                color1: c1.to_string(),
                color2: c2.to_string(),
                color3: c3.to_string(),
                color1_opacity: o1,
                color2_opacity: o2,
                color3_opacity: o3,
                color1_position: p1,
                color2_position: p2,
                color3_position: p3,
                gradient_angle: self.angle,
                pattern_opacity: self.pattern_opacity,
                pattern_color: self.pattern_color.to_string(),
                pattern1_angle: self.pattern1.0,
                pattern1_size: self.pattern1.1,
                pattern2_angle: self.pattern2.0,
                pattern2_size: self.pattern2.1,
                ..GradientDescription::default()
            },
        }
    }
}

/// Every built-in preset, in menu order. "Classic" is first.
pub fn presets() -> Vec<Preset> {
    CATALOG.iter().map(Row::to_preset).collect()
}

/// Case-insensitive lookup by name; returns the catalog index too.
pub fn preset_by_name(name: &str) -> Option<(usize, Preset)> {
    CATALOG
        .iter()
        .position(|row| row.name.eq_ignore_ascii_case(name.trim()))
        .map(|idx| (idx, CATALOG[idx].to_preset()))
}
