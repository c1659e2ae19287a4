use crate::coords::Vec2;

use super::Color;

/// A single gradient stop.
///
/// `t` is the offset along the gradient axis, `0` at `start` and `1` at `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in canvas pixel space.
///
/// Semantics follow a 2D canvas gradient:
/// - stops are kept in offset order; equal offsets keep insertion order
/// - outside `[first.t, last.t]` the edge stop color is padded
/// - interpolation happens on premultiplied colors
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end, stops: Vec::new() }
    }

    /// Inserts a stop after every existing stop whose offset is `<= t`.
    pub fn add_color_stop(&mut self, t: f32, color: Color) {
        let idx = self.stops.partition_point(|s| s.t <= t);
        self.stops.insert(idx, ColorStop::new(t, color));
    }

    #[inline]
    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && !self.stops.is_empty()
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }

    /// Offset of `p` projected onto the start→end axis.
    #[inline]
    pub fn offset_at(&self, p: Vec2) -> f32 {
        let axis = self.end - self.start;
        (p - self.start).dot(axis) / axis.dot(axis)
    }

    /// Color at offset `t`.
    pub fn color_at(&self, t: f32) -> Color {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Color::transparent(),
        };
        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        // First stop strictly past `t`; the one before it is at or below `t`.
        let hi = self.stops.partition_point(|s| s.t <= t);
        let (a, b) = (self.stops[hi - 1], self.stops[hi]);
        let span = b.t - a.t;
        if span <= 0.0 {
            return b.color;
        }
        a.color.lerp(b.color, (t - a.t) / span)
    }

    /// Color at canvas point `p`.
    #[inline]
    pub fn sample(&self, p: Vec2) -> Color {
        self.color_at(self.offset_at(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(r: f32, g: f32, b: f32) -> Color {
        Color::from_straight(r, g, b, 1.0)
    }

    fn horizontal() -> LinearGradient {
        let mut g = LinearGradient::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0));
        g.add_color_stop(0.0, opaque(0.0, 0.0, 0.0));
        g.add_color_stop(1.0, opaque(1.0, 1.0, 1.0));
        g
    }

    #[test]
    fn stops_are_sorted_on_insert() {
        let mut g = LinearGradient::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        g.add_color_stop(0.7, Color::transparent());
        g.add_color_stop(0.2, Color::transparent());
        g.add_color_stop(0.5, Color::transparent());
        let ts: Vec<f32> = g.stops().iter().map(|s| s.t).collect();
        assert_eq!(ts, vec![0.2, 0.5, 0.7]);
    }

    #[test]
    fn equal_offsets_keep_insertion_order() {
        let red = opaque(1.0, 0.0, 0.0);
        let blue = opaque(0.0, 0.0, 1.0);
        let mut g = LinearGradient::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        g.add_color_stop(0.5, red);
        g.add_color_stop(0.5, blue);
        assert_eq!(g.stops()[0].color, red);
        assert_eq!(g.stops()[1].color, blue);
    }

    #[test]
    fn midpoint_interpolates() {
        let c = horizontal().sample(Vec2::new(50.0, 10.0));
        assert!((c.r - 0.5).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn pads_outside_the_axis() {
        let g = horizontal();
        assert_eq!(g.sample(Vec2::new(-40.0, 0.0)), opaque(0.0, 0.0, 0.0));
        assert_eq!(g.sample(Vec2::new(400.0, 0.0)), opaque(1.0, 1.0, 1.0));
    }

    #[test]
    fn hard_edge_at_coincident_stops() {
        let red = opaque(1.0, 0.0, 0.0);
        let blue = opaque(0.0, 0.0, 1.0);
        let mut g = LinearGradient::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        g.add_color_stop(0.0, red);
        g.add_color_stop(0.5, red);
        g.add_color_stop(0.5, blue);
        g.add_color_stop(1.0, blue);
        assert_eq!(g.color_at(0.49), red);
        assert_eq!(g.color_at(0.51), blue);
    }

    #[test]
    fn empty_gradient_is_transparent_and_invalid() {
        let g = LinearGradient::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0));
        assert!(!g.is_valid());
        assert_eq!(g.color_at(0.3), Color::transparent());
    }

    #[test]
    fn zero_length_axis_is_invalid() {
        let mut g = LinearGradient::new(Vec2::new(3.0, 3.0), Vec2::new(3.0, 3.0));
        g.add_color_stop(0.0, opaque(1.0, 0.0, 0.0));
        assert!(!g.is_valid());
    }
}
