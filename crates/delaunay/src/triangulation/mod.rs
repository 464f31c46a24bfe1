//! The incremental builder (§4.5, §4.6): point location, cavity discovery,
//! local-Delaunay testing, cavity re-triangulation, and twin re-linking.

mod observer;
mod outer;

pub use observer::Observer;
pub use outer::outer_face_points;

use std::collections::{BTreeSet, HashMap, HashSet};

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::complex::{Complex, FaceId, HalfFacetId, VertexId};
use crate::config::TriangulationConfig;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::predicates::{in_sphere, orient};

/// An incremental Delaunay triangulation of a finite point set.
///
/// Single-threaded and synchronous: every public method here either
/// mutates the complex inline (`insert`) or is a read-only query.
pub struct Triangulation {
    complex: Complex,
    point_history: Vec<Point>,
    outer_vertices: HashSet<VertexId>,
    config: TriangulationConfig,
    observer: Option<Box<dyn Observer>>,
}

impl Triangulation {
    /// Build the triangulation of `points`, seeded with the outer face and
    /// then inserted one at a time (optionally shuffled first, per
    /// `config.randomize`).
    pub fn new(points: Vec<Point>, config: TriangulationConfig) -> Result<Self> {
        Self::build(points, config, None)
    }

    /// As [`Triangulation::new`], but with a read-only observer notified at
    /// the named points described in §5.
    pub fn with_observer(
        points: Vec<Point>,
        config: TriangulationConfig,
        observer: Box<dyn Observer>,
    ) -> Result<Self> {
        Self::build(points, config, Some(observer))
    }

    fn build(
        mut points: Vec<Point>,
        config: TriangulationConfig,
        observer: Option<Box<dyn Observer>>,
    ) -> Result<Self> {
        let dimension = points
            .first()
            .map(|p| p.len().saturating_sub(1))
            .ok_or(Error::DimensionMismatch {
                expected: 1,
                found: 0,
            })?;
        for p in &points {
            p.check_dimension(dimension + 1)?;
        }

        let mut complex = Complex::new(dimension);
        let outer_points = outer_face_points(dimension);
        let outer_vertex_ids: Vec<VertexId> = outer_points
            .into_iter()
            .map(|p| complex.get_or_create_vertex(p))
            .collect();
        complex.build_face(outer_vertex_ids.clone(), HashMap::new())?;

        let mut triangulation = Self {
            complex,
            point_history: Vec::new(),
            outer_vertices: outer_vertex_ids.into_iter().collect(),
            config,
            observer,
        };

        if config.randomize {
            let mut rng = match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            points.shuffle(&mut rng);
        }
        for point in points {
            triangulation.insert(point)?;
        }
        Ok(triangulation)
    }

    pub fn dimension(&self) -> usize {
        self.complex.dimension()
    }

    /// Insert `point`, restoring the Delaunay property afterward.
    /// Re-inserting an already-inserted point is a no-op, by design.
    pub fn insert(&mut self, point: Point) -> Result<()> {
        point.check_dimension(self.complex.dimension() + 1)?;
        if self.point_history.contains(&point) {
            debug!("insert: point already in point_history, skipping");
            return Ok(());
        }

        let containing_face = self.locate(&point)?;
        debug!(
            "insert: located containing face, {} live faces before shatter",
            self.complex.face_count()
        );
        let mut stack: Vec<HalfFacetId> = self.complex.shatter_face(containing_face);
        for &h in &stack {
            self.notify_highlight_edge(h);
        }

        let new_vertex = self.complex.get_or_create_vertex(point.clone());
        self.point_history.push(point);

        let mut good: Vec<HalfFacetId> = Vec::new();
        while let Some(h) = stack.pop() {
            if self.locally_delaunay(h, new_vertex)? {
                good.push(h);
                self.notify_highlight_edge(h);
            } else {
                // `h` is not locally Delaunay, so it must separate the new
                // point from a neighboring face across a real twin.
                let twin = self.complex.half_facet(h).twin().expect(
                    "a half-facet that fails the local-Delaunay test always has a twin",
                );
                let twin_face = self.complex.half_facet(twin).face();
                if !self.complex.is_face_live(twin_face) {
                    // Already punctured from a different direction. `h`
                    // itself can't be reused (its own face is gone too), but
                    // its twin may still be sitting on `stack`, discovered
                    // through a different boundary facet and not yet popped
                    // — freeing `h` here would leave that twin dangling.
                    // Leave it in the arena; it is never looked at again
                    // once this insertion finishes.
                    trace!("cavity: half-facet's twin face already punctured, leaving orphaned");
                    continue;
                }
                trace!("cavity: popping face through a non-locally-Delaunay facet");
                self.notify_draw_circle(twin_face);
                self.notify_delete_edge(h);
                let freed = self.complex.pop_through(h);
                for &f in &freed {
                    self.notify_highlight_edge(f);
                }
                stack.extend(freed);
            }
        }

        // Cavity fill: one new face per retained half-facet, reusing it as
        // the facet opposite the new vertex.
        let mut new_faces = Vec::with_capacity(good.len());
        for h in good {
            let mut vertices: Vec<VertexId> =
                self.complex.half_facet(h).vertices().iter().copied().collect();
            vertices.push(new_vertex);
            let mut initial_half_facets = HashMap::with_capacity(1);
            initial_half_facets.insert(new_vertex, h);
            new_faces.push(self.complex.build_face(vertices, initial_half_facets)?);
        }

        // Twin-link every pair of new faces whose vertex sets differ by
        // exactly two vertices, one unique to each. O(k^2) over the new
        // faces, which is small per insertion.
        for i in 0..new_faces.len() {
            for j in (i + 1)..new_faces.len() {
                let vi: BTreeSet<VertexId> = self.complex.face(new_faces[i]).vertices().clone();
                let vj: BTreeSet<VertexId> = self.complex.face(new_faces[j]).vertices().clone();
                let diff: Vec<VertexId> = vi.symmetric_difference(&vj).copied().collect();
                if diff.len() != 2 {
                    continue;
                }
                let (unique_i, unique_j) = if vi.contains(&diff[0]) {
                    (diff[0], diff[1])
                } else {
                    (diff[1], diff[0])
                };
                let h_i = self
                    .complex
                    .face(new_faces[i])
                    .half_facet_opposite(unique_i)
                    .expect("unique_i belongs to face i");
                let h_j = self
                    .complex
                    .face(new_faces[j])
                    .half_facet_opposite(unique_j)
                    .expect("unique_j belongs to face j");
                self.complex.link_twins(h_i, h_j);
            }
        }

        debug!("insert: cavity filled with {} new faces", new_faces.len());
        self.notify_draw_triangulation();
        Ok(())
    }

    /// Point location by visibility walk (§4.6).
    pub fn locate(&self, point: &Point) -> Result<FaceId> {
        let mut current = self.complex.arbitrary_face();
        let mut steps = 0usize;
        loop {
            self.notify_draw_point_locate(current);
            let face = self.complex.face(current);
            let mut crossed = None;
            for (&_opposite, &hf_id) in face.half_facets() {
                if self.lineside(hf_id, point)? == -1 {
                    let twin = self.complex.half_facet(hf_id).twin().expect(
                        "every half-facet of a live face has a twin once the outer face is covered",
                    );
                    crossed = Some(self.complex.half_facet(twin).face());
                    break;
                }
            }
            match crossed {
                Some(next) => {
                    steps += 1;
                    trace!("locate: walk crossed into a neighboring face (step {steps})");
                    current = next;
                }
                None => {
                    trace!("locate: walk settled after {steps} step(s)");
                    return Ok(current);
                }
            }
        }
    }

    /// `test_is_delaunay`: verifies every half-facet of every current face
    /// is locally Delaunay, the engine's self-check invariant.
    pub fn test_is_delaunay(&self) -> bool {
        for (_, face) in self.complex.faces_iter() {
            for (&opposite, &hf_id) in face.half_facets() {
                match self.locally_delaunay(hf_id, opposite) {
                    Ok(true) => continue,
                    _ => return false,
                }
            }
        }
        true
    }

    /// The current faces as sets of points, with faces touching the
    /// initial outer (infinite) face filtered out. Coordinates are
    /// Euclidean unless `homogeneous` is set.
    pub fn face_point_sets(&self, homogeneous: bool) -> HashSet<BTreeSet<Point>> {
        let mut result = HashSet::new();
        for (_, face) in self.complex.faces_iter() {
            if face.vertices().iter().any(|v| self.outer_vertices.contains(v)) {
                continue;
            }
            let points: BTreeSet<Point> = face
                .vertices()
                .iter()
                .map(|&v| {
                    let p = self.complex.vertex(v).point();
                    if homogeneous {
                        p.clone()
                    } else {
                        Point::from_euclidean(p.euclidean())
                    }
                })
                .collect();
            result.insert(points);
        }
        result
    }

    /// The predicate tolerances this triangulation was built with, notably
    /// the in-sphere finitize scale `K` (§4.2) that the Voronoi extractor
    /// must reuse when rescaling unbounded edges (§4.8).
    pub fn predicate_config(&self) -> crate::config::PredicateConfig {
        self.config.predicates
    }

    pub(crate) fn complex(&self) -> &Complex {
        &self.complex
    }

    pub(crate) fn outer_vertices(&self) -> &HashSet<VertexId> {
        &self.outer_vertices
    }

    fn lineside(&self, h: HalfFacetId, point: &Point) -> Result<i32> {
        let hf = self.complex.half_facet(h);
        let mut points: Vec<&Point> = hf
            .vertices()
            .iter()
            .map(|&v| self.complex.vertex(v).point())
            .collect();
        points.push(point);
        Ok(orient(&points)? * hf.side() as i32)
    }

    /// `locally_delaunay(h, alt_vertex)`: `true` if `h` has no twin
    /// (boundary, trivially locally Delaunay) or if `alt_vertex` does not
    /// lie strictly inside the circumsphere of `h.twin`'s face.
    fn locally_delaunay(&self, h: HalfFacetId, alt_vertex: VertexId) -> Result<bool> {
        let hf = self.complex.half_facet(h);
        let Some(twin_id) = hf.twin() else {
            return Ok(true);
        };
        let twin = self.complex.half_facet(twin_id);
        let mut simplex: Vec<&Point> = twin
            .vertices()
            .iter()
            .map(|&v| self.complex.vertex(v).point())
            .collect();
        simplex.push(self.complex.vertex(twin.opposite()).point());
        let alt_point = self.complex.vertex(alt_vertex).point();
        let sign = in_sphere(&simplex, alt_point, self.config.predicates)?;
        Ok(twin.side() as i32 * sign <= 0)
    }

    fn notify_highlight_edge(&self, h: HalfFacetId) {
        if let Some(obs) = &self.observer {
            if !self.is_infinite_half_facet(h) {
                obs.highlight_edge(h);
            }
        }
    }

    fn notify_draw_circle(&self, face: FaceId) {
        if let Some(obs) = &self.observer {
            obs.draw_circle(face);
        }
    }

    fn notify_delete_edge(&self, h: HalfFacetId) {
        if let Some(obs) = &self.observer {
            if !self.is_infinite_half_facet(h) {
                obs.delete_edge(h);
            }
        }
    }

    fn notify_draw_triangulation(&self) {
        if let Some(obs) = &self.observer {
            obs.draw_triangulation();
        }
    }

    fn notify_draw_point_locate(&self, face: FaceId) {
        if let Some(obs) = &self.observer {
            obs.draw_point_locate(face);
        }
    }

    fn is_infinite_half_facet(&self, h: HalfFacetId) -> bool {
        self.complex
            .half_facet(h)
            .vertices()
            .iter()
            .any(|&v| self.complex.is_infinite_vertex(v))
    }
}

#[cfg(test)]
mod tests;
