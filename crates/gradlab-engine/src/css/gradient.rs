use crate::model::{GradientShape, Stop};
use crate::paint::{alpha_token, rgba_token};

/// CSS image function for one gradient layer.
///
/// Stops are emitted in the order given (three for the base gradient, two
/// for a blend layer); they are not sorted by position.
pub fn build_gradient_css(shape: &GradientShape, stops: &[Stop]) -> String {
    let stops = stop_list(stops);
    match shape {
        GradientShape::Linear { angle } => format!("linear-gradient({angle}deg, {stops})"),
        GradientShape::Radial { shape, size, center } => format!(
            "radial-gradient({shape} {size} at {}% {}%, {stops})",
            center.x, center.y
        ),
        GradientShape::Conic { from_angle, center } => format!(
            "conic-gradient(from {from_angle}deg at {}% {}%, {stops})",
            center.x, center.y
        ),
    }
}

fn stop_list(stops: &[Stop]) -> String {
    stops
        .iter()
        .map(|s| format!("{} {}%", rgba_token(s.color, &alpha_token(s.opacity)), s.position))
        .collect::<Vec<_>>()
        .join(", ")
}
