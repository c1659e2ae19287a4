use std::fmt;

// ── Rgb ───────────────────────────────────────────────────────────────────

/// Straight 8-bit sRGB channels as parsed from a `#rrggbb` string.
///
/// Alpha never travels with the hex string; it is supplied separately as a
/// `0`–`100` opacity (see [`alpha_token`]).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Parses `#rrggbb` (the `#` is optional, digits are case-insensitive).
///
/// Anything else (shorthand `#fff`, alpha `#rrggbbaa`, stray whitespace, non-hex
/// digits) yields opaque white instead of an error.
pub fn parse_hex_color(s: &str) -> Rgb {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Rgb::WHITE;
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
    match (channel(0), channel(2), channel(4)) {
        (Ok(r), Ok(g), Ok(b)) => Rgb::new(r, g, b),
        _ => Rgb::WHITE,
    }
}

/// Formats a `0`–`100` opacity as a two-decimal alpha (`100` -> `"1.00"`).
///
/// Integer arithmetic only, so the output never depends on float rounding or
/// locale. Values above `100` saturate.
pub fn alpha_token(opacity: u8) -> String {
    let o = opacity.min(100);
    format!("{}.{:02}", o / 100, o % 100)
}

/// CSS `rgba(r, g, b, a)` token for a color and an already formatted alpha.
pub fn rgba_token(rgb: Rgb, alpha: &str) -> String {
    format!("rgba({}, {}, {}, {})", rgb.r, rgb.g, rgb.b, alpha)
}

impl fmt::Display for Rgb {
    /// Lowercase `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ── Color ─────────────────────────────────────────────────────────────────

/// Premultiplied RGBA color used by the raster canvas.
///
/// Invariant:
/// - `rgb` components are multiplied by `a`.
///
/// Channels are sRGB-encoded values in `[0, 1]`; no linearization happens, the
/// canvas blends in the same byte-level space the browser preview uses.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Premultiplied color from parsed channels and a `0`–`100` opacity.
    #[inline]
    pub fn from_rgb_opacity(rgb: Rgb, opacity: u8) -> Self {
        Self::from_straight(
            rgb.r as f32 / 255.0,
            rgb.g as f32 / 255.0,
            rgb.b as f32 / 255.0,
            opacity.min(100) as f32 / 100.0,
        )
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: (r.clamp(0.0, 1.0)) * a,
            g: (g.clamp(0.0, 1.0)) * a,
            b: (b.clamp(0.0, 1.0)) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha RGBA bytes, rounded to nearest.
    pub fn to_rgba8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [byte(r), byte(g), byte(b), byte(a)]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }

    /// Scales every channel (coverage / fractional paint).
    #[inline]
    pub fn scaled(self, k: f32) -> Self {
        Self { r: self.r * k, g: self.g * k, b: self.b * k, a: self.a * k }
    }

    /// Component-wise interpolation; `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Porter-Duff source-over: `self` painted on top of `dst`.
    #[inline]
    pub fn over(self, dst: Color) -> Self {
        let k = 1.0 - self.a;
        Self {
            r: self.r + dst.r * k,
            g: self.g + dst.g * k,
            b: self.b + dst.b * k,
            a: self.a + dst.a * k,
        }
    }
}
