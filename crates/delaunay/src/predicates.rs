//! `orient` and `in_sphere`, the two geometric predicates the rest of the
//! engine consults. Both are defined over extended homogeneous coordinates
//! (§4.2) and return only a sign; callers assume the sign is correct for
//! inputs in general position (no exact-arithmetic filtering is attempted
//! here — see the crate's Non-goals).

use crate::config::PredicateConfig;
use crate::error::Result;
use crate::linalg::Matrix;
use crate::point::Point;

/// Orientation of `d+1` points in `d`-space.
///
/// Returns `+1` if the points are positively oriented, `-1` if negatively
/// oriented, `0` if affinely dependent. Points at infinity (all-`w=0`
/// input) are handled by recursing one dimension higher on an auxiliary
/// point, per §4.2.
pub fn orient(points: &[&Point]) -> Result<i32> {
    orient_impl(points, true)
}

fn orient_impl(points: &[&Point], homogeneous: bool) -> Result<i32> {
    if homogeneous {
        if points.iter().any(|p| p.weight() == 1.0) {
            let columns: Vec<Vec<f64>> = points.iter().map(|p| p.homogeneous().to_vec()).collect();
            return Ok(Matrix::from_columns(&columns)?.sign_det());
        }
        // All inputs are directions at infinity: the homogeneous determinant
        // is zero by construction. Append the auxiliary point (0,...,0,-1)
        // and recurse one dimension higher, treating every coordinate
        // (including the original w=0 slots) as plain non-homogeneous data.
        let d = points.first().map_or(0, |p| p.len().saturating_sub(1));
        let mut aux_coords = vec![0.0; d];
        aux_coords.push(-1.0);
        let aux = Point::from_homogeneous(aux_coords);
        let mut extended: Vec<&Point> = points.to_vec();
        extended.push(&aux);
        return orient_impl(&extended, false);
    }
    // Non-homogeneous mode: every point is lifted by a constant trailing 1,
    // regardless of its own contents.
    let columns: Vec<Vec<f64>> = points
        .iter()
        .map(|p| {
            let mut v = p.homogeneous().to_vec();
            v.push(1.0);
            v
        })
        .collect();
    Ok(Matrix::from_columns(&columns)?.sign_det())
}

/// `+1` if `query` lies strictly inside the ball circumscribing `simplex`,
/// `-1` if strictly outside, `0` if exactly on the sphere.
///
/// `simplex` must have `d+1` points for ambient dimension `d`; `query` is
/// the `d+2`th point tested against their circumsphere.
pub fn in_sphere(simplex: &[&Point], query: &Point, cfg: PredicateConfig) -> Result<i32> {
    let mut all: Vec<&Point> = simplex.to_vec();
    all.push(query);
    let mut columns = Vec::with_capacity(all.len());
    for p in &all {
        let mut coords = p.homogeneous().to_vec();
        if coords.last().copied() == Some(0.0) {
            // Finitize the direction: scale by K, then pin w back to 1.
            for c in coords.iter_mut() {
                *c *= cfg.in_sphere_scale;
            }
            *coords.last_mut().expect("point has at least one coordinate") = 1.0;
        }
        let norm_sq: f64 = coords[..coords.len() - 1].iter().map(|x| x * x).sum();
        coords.push(norm_sq);
        columns.push(coords);
    }
    let sign = Matrix::from_columns(&columns)?.sign_det();
    Ok(-sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(coords: &[f64]) -> Point {
        Point::from_euclidean(coords)
    }

    #[test]
    fn orient_ccw_triangle() {
        let a = pt(&[0.0, 0.0]);
        let b = pt(&[1.0, 0.0]);
        let c = pt(&[0.0, 1.0]);
        assert_eq!(orient(&[&a, &b, &c]).unwrap(), 1);
        assert_eq!(orient(&[&a, &c, &b]).unwrap(), -1);
    }

    #[test]
    fn orient_collinear_is_zero() {
        let a = pt(&[0.0, 0.0]);
        let b = pt(&[1.0, 0.0]);
        let c = pt(&[2.0, 0.0]);
        assert_eq!(orient(&[&a, &b, &c]).unwrap(), 0);
    }

    #[test]
    fn orient_all_infinite_uses_auxiliary_point() {
        let a = Point::from_homogeneous(vec![1.0, 0.0, 0.0]);
        let b = Point::from_homogeneous(vec![0.0, 1.0, 0.0]);
        let c = Point::from_homogeneous(vec![-1.0, -1.0, 0.0]);
        // Should not fall back to a zero determinant: the outer-face
        // directions must be consistently oriented among themselves.
        assert_ne!(orient(&[&a, &b, &c]).unwrap(), 0);
    }

    #[test]
    fn in_sphere_center_is_strictly_inside() {
        let a = pt(&[1.0, 0.0]);
        let b = pt(&[-1.0, 0.0]);
        let c = pt(&[0.0, 1.0]);
        let q = pt(&[0.0, 0.0]);
        let cfg = PredicateConfig::default();
        assert_eq!(in_sphere(&[&a, &b, &c], &q, cfg).unwrap(), 1);
    }

    #[test]
    fn in_sphere_far_point_is_strictly_outside() {
        let a = pt(&[1.0, 0.0]);
        let b = pt(&[-1.0, 0.0]);
        let c = pt(&[0.0, 1.0]);
        let q = pt(&[100.0, 100.0]);
        let cfg = PredicateConfig::default();
        assert_eq!(in_sphere(&[&a, &b, &c], &q, cfg).unwrap(), -1);
    }

    #[test]
    fn in_sphere_cocircular_point_is_zero() {
        // Unit circle through (1,0), (-1,0), (0,1); (0,-1) also lies on it.
        let a = pt(&[1.0, 0.0]);
        let b = pt(&[-1.0, 0.0]);
        let c = pt(&[0.0, 1.0]);
        let q = pt(&[0.0, -1.0]);
        let cfg = PredicateConfig::default();
        assert_eq!(in_sphere(&[&a, &b, &c], &q, cfg).unwrap(), 0);
    }

    #[test]
    fn in_sphere_handles_directional_simplex_point() {
        let a = pt(&[1.0, 0.0]);
        let b = pt(&[0.0, 1.0]);
        let direction = Point::from_homogeneous(vec![1.0, 1.0, 0.0]);
        let q = pt(&[0.2, 0.2]);
        let cfg = PredicateConfig::default();
        // Must not error; the direction is finitized per the K-scaling convention.
        assert!(in_sphere(&[&a, &b, &direction], &q, cfg).is_ok());
    }
}
