//! The dual Voronoi diagram (§4.8): one vertex per finite face, one edge
//! per shared facet between two finite faces, with unbounded edges
//! approximated by a directional endpoint.

use std::collections::HashSet;

use nalgebra::{DMatrix, DVector};

use crate::complex::{Complex, FaceId};
use crate::error::{Error, Result};
use crate::point::Point;
use crate::triangulation::Triangulation;

/// The Voronoi diagram dual to a [`Triangulation`]: a point set and an
/// unordered edge set over those points.
#[derive(Debug, Clone)]
pub struct Voronoi {
    points: HashSet<Point>,
    edges: HashSet<(Point, Point)>,
}

impl Voronoi {
    /// Extract the Voronoi dual of `triangulation`. Read-only: the
    /// triangulation is left untouched.
    pub fn extract(triangulation: &Triangulation) -> Result<Self> {
        let complex = triangulation.complex();
        // K must match whatever the triangulation actually used to finitize
        // directions in `in_sphere` (§4.8: "K matching the in-sphere
        // convention"), not a fresh default — a caller who built the
        // triangulation with a non-default `in_sphere_scale` would otherwise
        // get silently wrong directional Voronoi endpoints.
        let predicates = triangulation.predicate_config();
        let mut points = HashSet::new();
        let mut edges = HashSet::new();

        for (face_id, _) in complex.faces_iter() {
            if !is_finite_face(complex, face_id) {
                continue;
            }
            let center = circumcenter(&face_points(complex, face_id))?;
            points.insert(center.clone());

            let face = complex.face(face_id);
            for &hf_id in face.half_facets().values() {
                let hf = complex.half_facet(hf_id);
                let Some(twin_id) = hf.twin() else {
                    continue;
                };
                let twin_face = complex.half_facet(twin_id).face();
                let adjacent_points = face_points(complex, twin_face);
                let adjacent_center = circumcenter(&adjacent_points)?;
                let endpoint = if is_finite_face(complex, twin_face) {
                    adjacent_center
                } else {
                    directional_endpoint(&adjacent_center, predicates.in_sphere_scale)
                };
                edges.insert(unordered_pair(center.clone(), endpoint));
            }
        }

        Ok(Self { points, edges })
    }

    pub fn points(&self) -> &HashSet<Point> {
        &self.points
    }

    pub fn edges(&self) -> &HashSet<(Point, Point)> {
        &self.edges
    }
}

fn face_points(complex: &Complex, face_id: FaceId) -> Vec<Point> {
    complex
        .face(face_id)
        .vertices()
        .iter()
        .map(|&v| complex.vertex(v).point().clone())
        .collect()
}

fn is_finite_face(complex: &Complex, face_id: FaceId) -> bool {
    complex
        .face(face_id)
        .vertices()
        .iter()
        .all(|&v| !complex.is_infinite_vertex(v))
}

/// Rescale an infinite face's (degenerate) circumcenter down to a finite
/// direction, then re-lift it as a point at infinity. Mirrors the source
/// design's `1/K` shrink-and-relift treatment of unbounded Voronoi edges.
fn directional_endpoint(center: &Point, scale: f64) -> Point {
    let shrunk: Vec<f64> = center.euclidean().iter().map(|x| x / scale).collect();
    let mut coords = shrunk;
    coords.push(0.0);
    Point::from_homogeneous(coords)
}

fn unordered_pair(a: Point, b: Point) -> (Point, Point) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// The unique point equidistant from every point in `simplex` (`d+1` points
/// in ambient dimension `d`), found by solving the linear system
/// `(p_i - p_0) . x = (|p_i|^2 - |p_0|^2) / 2` for `i = 1..=d`.
pub fn circumcenter(simplex: &[Point]) -> Result<Point> {
    let d = simplex.len().saturating_sub(1);
    if simplex.len() != d + 1 || d == 0 {
        return Err(Error::SingularMatrix {
            context: "circumcenter requires d+1 points",
        });
    }
    let base = simplex[0].euclidean();
    let base_norm_sq: f64 = base.iter().map(|x| x * x).sum();

    let mut a = DMatrix::<f64>::zeros(d, d);
    let mut b = DVector::<f64>::zeros(d);
    for (row, p) in simplex[1..].iter().enumerate() {
        let coords = p.euclidean();
        let norm_sq: f64 = coords.iter().map(|x| x * x).sum();
        for col in 0..d {
            a[(row, col)] = coords[col] - base[col];
        }
        b[row] = (norm_sq - base_norm_sq) / 2.0;
    }

    let decomposition = a.lu();
    let solution = decomposition
        .solve(&b)
        .ok_or(Error::SingularMatrix {
            context: "circumcenter",
        })?;
    Ok(Point::from_euclidean(solution.as_slice()))
}
