//! The outer (bounding) face: directional vertices whose simplex
//! conceptually covers all of `R^d` (§4.4).

use crate::point::Point;

/// The `d+1` points at infinity that seed a triangulation before any user
/// point is inserted: the `d` standard basis directions, plus the single
/// extra direction `(-1,...,-1)`.
///
/// This mirrors `outer_face_pts` in the Python original, kept here as its
/// own small, separately-tested function rather than inlined into the
/// constructor.
pub fn outer_face_points(dimension: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(dimension + 1);
    for i in 0..dimension {
        let mut coords = vec![0.0; dimension];
        coords[i] = 1.0;
        coords.push(0.0); // w = 0: a direction, not a finite point
        points.push(Point::from_homogeneous(coords));
    }
    let mut last = vec![-1.0; dimension];
    last.push(0.0);
    points.push(Point::from_homogeneous(last));
    points
}
