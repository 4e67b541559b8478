use super::{Point2, Tolerance};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for comparisons.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2], tol: Tolerance) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let eps = tol.value();
    let mut best = 0;
    for (i, pt) in points.iter().enumerate().skip(1) {
        let b = &points[best];
        if pt.x < b.x - eps || (pt.x - b.x).abs() <= eps && pt.y < b.y {
            best = i;
        }
    }
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}
