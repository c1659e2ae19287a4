//! "Randomize style".
//!
//! Draws new base colors, stop layout, angle and pattern settings. Toggles,
//! gradient family, noise, blend settings and the blend stack are kept.

use rand::Rng;

use crate::model::GradientDescription;

/// Uniform `#rrggbb` below `#ffffff`.
pub fn random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..0xff_ffffu32))
}

/// A randomized copy of `desc`.
///
/// Stop positions are drawn from disjoint bands (`0..30`, `30..70`,
/// `70..100`) so the three stops stay in order.
pub fn randomize<R: Rng + ?Sized>(desc: &GradientDescription, rng: &mut R) -> GradientDescription {
    GradientDescription {
        color1: random_hex_color(rng),
        color2: random_hex_color(rng),
        color3: random_hex_color(rng),
        color1_opacity: rng.gen_range(60..100),
        color2_opacity: rng.gen_range(60..100),
        color3_opacity: rng.gen_range(60..100),
        color1_position: rng.gen_range(0..30),
        color2_position: rng.gen_range(30..70),
        color3_position: rng.gen_range(70..100),
        gradient_angle: rng.gen_range(0..360),
        pattern_opacity: rng.gen_range(2..22),
        pattern_color: "#ffffff".to_string(),
        pattern1_angle: rng.gen_range(0..90),
        pattern1_size: rng.gen_range(5..35),
        pattern2_angle: rng.gen_range(-90..0),
        pattern2_size: rng.gen_range(5..35),
        ..desc.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GradientLayer;
    use crate::paint::{Rgb, parse_hex_color};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn colors_are_valid_hex() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let c = random_hex_color(&mut rng);
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
            assert!(c[1..].bytes().all(|b| b.is_ascii_hexdigit()));
            // Never the white fallback, since #ffffff is excluded.
            assert_ne!(parse_hex_color(&c), Rgb::WHITE);
        }
    }

    #[test]
    fn keeps_toggles_and_layers() {
        let mut desc = GradientDescription {
            pattern_enabled: true,
            noise_enabled: true,
            multi_layer_blending_enabled: true,
            ..Default::default()
        };
        desc.gradient_layers.push(GradientLayer::default());

        let out = randomize(&desc, &mut StdRng::seed_from_u64(1));
        assert!(out.pattern_enabled && out.noise_enabled && out.multi_layer_blending_enabled);
        assert_eq!(out.gradient_layers, desc.gradient_layers);
        assert_eq!(out.gradient_type, desc.gradient_type);
    }

    #[test]
    fn same_seed_same_result() {
        let d = GradientDescription::default();
        let a = randomize(&d, &mut StdRng::seed_from_u64(42));
        let b = randomize(&d, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn stop_positions_stay_ordered() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let d = randomize(&GradientDescription::default(), &mut rng);
            assert!(d.color1_position < d.color2_position);
            assert!(d.color2_position < d.color3_position);
        }
    }
}
