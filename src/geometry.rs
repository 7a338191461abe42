//! Planar geometry for track rows: heading, speed, oriented bounding box.

/// Direction of travel in degrees from the image x-axis, in [0, 360).
///
/// `atan2(0, 0)` is 0 by convention; callers that can tell stationary
/// vehicles apart by lane group overwrite that case themselves.
pub fn heading_deg(x_velocity: f64, y_velocity: f64) -> f64 {
    y_velocity.atan2(x_velocity).to_degrees().rem_euclid(360.0)
}

/// Scalar speed from the velocity components.
pub fn speed(x_velocity: f64, y_velocity: f64) -> f64 {
    x_velocity.hypot(y_velocity)
}

/// Corners of a rectangle centered at `center` with `half_length` along
/// the heading axis and `half_width` across it, rotated by `heading`
/// degrees.
///
/// Corner order is front-left, front-right, rear-right, rear-left; the
/// labeling is consumed downstream and must not change.
pub fn obb_corners(
    center: [f64; 2],
    half_length: f64,
    half_width: f64,
    heading: f64,
) -> [[f64; 2]; 4] {
    let theta = heading.to_radians();
    let (sin_t, cos_t) = theta.sin_cos();
    let lc = half_length * cos_t;
    let ls = half_length * sin_t;
    let wc = half_width * cos_t;
    let ws = half_width * sin_t;
    let [cx, cy] = center;

    [
        [cx + lc + ws, cy + ls - wc],
        [cx + lc - ws, cy + ls + wc],
        [cx - lc - ws, cy - ls + wc],
        [cx - lc + ws, cy - ls - wc],
    ]
}
