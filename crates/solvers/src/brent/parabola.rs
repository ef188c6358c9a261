//! Vertex of the parabola through three samples.
//!
//! Both functions return `None` instead of dividing by zero when the points
//! are collinear, and reject coincident abscissae.

use crate::Point;

/// Returns the abscissa of the vertex of the parabola through three points
/// given in strictly ascending order of `x`.
///
/// With `(x1, f1), (x2, f2), (x3, f3)` and `x1 < x2 < x3`:
///
/// ```text
/// a1 = (f2 - f1) / (x2 - x1)
/// a2 = ((f3 - f1) / (x3 - x1) - a1) / (x3 - x2)
/// u  = (x1 + x2 - a1 / a2) / 2
/// ```
///
/// Returns `None` if the points are not strictly ascending, if they are
/// collinear (`a2 == 0`), or if the vertex is not finite.
#[must_use]
pub fn vertex_sorted(points: [Point; 3]) -> Option<f64> {
    let [p1, p2, p3] = points;
    if !(p1.x < p2.x && p2.x < p3.x) {
        return None;
    }

    let a1 = (p2.objective - p1.objective) / (p2.x - p1.x);
    let a2 = ((p3.objective - p1.objective) / (p3.x - p1.x) - a1) / (p3.x - p2.x);
    if a2 == 0.0 {
        return None;
    }

    let u = 0.5 * (p1.x + p2.x - a1 / a2);
    u.is_finite().then_some(u)
}

/// Returns the vertex of the parabola through three points in any order.
///
/// The points are sorted by `x` before fitting, so every permutation of the
/// same three points gives the same result.
#[must_use]
pub fn vertex(mut points: [Point; 3]) -> Option<f64> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x));
    vertex_sorted(points)
}
