//! The simplicial complex: arenas of vertices, faces, and half-facets, and
//! the operations from §4.3 that tie them together (construction, shatter,
//! pop). This module owns storage only; the incremental insertion
//! algorithm itself lives in [`crate::triangulation`].

mod face;
mod half_facet;
mod ids;
mod vertex;

pub use face::Face;
pub use half_facet::HalfFacet;
pub use ids::{FaceId, HalfFacetId, VertexId};
pub use vertex::Vertex;

use std::collections::{BTreeSet, HashMap};

use log::debug;
use slotmap::SlotMap;

use crate::error::{Error, Result};
use crate::point::Point;
use crate::predicates::orient;

/// Arena-backed simplicial complex.
pub struct Complex {
    vertices: SlotMap<VertexId, Vertex>,
    vertex_index: HashMap<Point, VertexId>,
    faces: SlotMap<FaceId, Face>,
    half_facets: SlotMap<HalfFacetId, HalfFacet>,
    dimension: usize,
}

impl Complex {
    pub fn new(dimension: usize) -> Self {
        Self {
            vertices: SlotMap::with_key(),
            vertex_index: HashMap::new(),
            faces: SlotMap::with_key(),
            half_facets: SlotMap::with_key(),
            dimension,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id]
    }

    pub fn half_facet(&self, id: HalfFacetId) -> &HalfFacet {
        &self.half_facets[id]
    }

    pub fn is_face_live(&self, id: FaceId) -> bool {
        self.faces.contains_key(id)
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn faces_iter(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces.iter()
    }

    pub fn vertices_iter(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter()
    }

    /// An arbitrary live face, used to seed point location. Panics if the
    /// complex has no faces (never true after construction, since the
    /// outer face is always present).
    pub fn arbitrary_face(&self) -> FaceId {
        self.faces
            .iter()
            .next()
            .map(|(id, _)| id)
            .expect("complex always has at least the outer face")
    }

    /// Returns the existing vertex for `point` if one was already created,
    /// or creates and returns a fresh one. Vertices are never destroyed.
    pub fn get_or_create_vertex(&mut self, point: Point) -> VertexId {
        if let Some(&id) = self.vertex_index.get(&point) {
            return id;
        }
        let id = self.vertices.insert(Vertex::new(point.clone()));
        self.vertex_index.insert(point, id);
        id
    }

    pub fn find_vertex(&self, point: &Point) -> Option<VertexId> {
        self.vertex_index.get(point).copied()
    }

    /// Build a new face from `vertices` (exactly `d+1` of them), reusing
    /// half-facets supplied in `initial_half_facets` (a partial map from
    /// vertex to pre-existing half-facet id, rewired to this face) and
    /// creating fresh half-facets — with side computed via `orient` — for
    /// the rest. Fails with [`Error::GeneralPositionError`] if any fresh
    /// half-facet would have side 0.
    pub fn build_face(
        &mut self,
        vertices: Vec<VertexId>,
        mut initial_half_facets: HashMap<VertexId, HalfFacetId>,
    ) -> Result<FaceId> {
        let vertex_set: BTreeSet<VertexId> = vertices.iter().copied().collect();
        let face_id = self.faces.insert(Face::new(vertex_set));
        let mut half_facets_map = HashMap::with_capacity(vertices.len());
        for &v in &vertices {
            if let Some(hf_id) = initial_half_facets.remove(&v) {
                self.half_facets[hf_id].rewire(face_id, v);
                half_facets_map.insert(v, hf_id);
            } else {
                let facet_vertices: BTreeSet<VertexId> =
                    vertices.iter().copied().filter(|&u| u != v).collect();
                let side = self.compute_side(&facet_vertices, v)?;
                let hf_id = self
                    .half_facets
                    .insert(HalfFacet::new(facet_vertices, v, face_id, side, None));
                half_facets_map.insert(v, hf_id);
            }
        }
        self.faces[face_id].set_half_facets(half_facets_map);
        Ok(face_id)
    }

    fn compute_side(&self, facet_vertices: &BTreeSet<VertexId>, opposite: VertexId) -> Result<i8> {
        let mut points: Vec<&Point> = facet_vertices.iter().map(|&v| self.vertices[v].point()).collect();
        points.push(self.vertices[opposite].point());
        let sign = orient(&points)?;
        if sign == 0 {
            debug!(
                "build_face: rejecting degenerate facet ({} vertices, side would be 0)",
                facet_vertices.len()
            );
            return Err(Error::GeneralPositionError {
                facet_size: facet_vertices.len(),
            });
        }
        Ok(sign as i8)
    }

    /// Remove a face from the complex, returning the ids of its half-facets
    /// for the caller to re-consume (§4.3 "Face shatter").
    pub fn shatter_face(&mut self, face_id: FaceId) -> Vec<HalfFacetId> {
        let face = self.faces.remove(face_id).expect("shatter of live face");
        face.half_facet_ids()
    }

    /// Puncture through `h`: shatter `h`'s twin's face, discard both `h` and
    /// its twin (they can no longer legally be referenced), and return the
    /// twin face's remaining half-facets (§4.3 "Facet pop").
    pub fn pop_through(&mut self, h: HalfFacetId) -> Vec<HalfFacetId> {
        let twin = self.half_facets[h]
            .twin()
            .expect("pop_through requires a twin");
        let twin_face = self.half_facets[twin].face();
        let mut remaining = self.shatter_face(twin_face);
        remaining.retain(|&id| id != twin);
        self.half_facets.remove(h);
        self.half_facets.remove(twin);
        remaining
    }

    /// Link two half-facets as each other's twin, both directions.
    pub fn link_twins(&mut self, a: HalfFacetId, b: HalfFacetId) {
        self.half_facets[a].set_twin(Some(b));
        self.half_facets[b].set_twin(Some(a));
    }

    pub fn is_infinite_vertex(&self, id: VertexId) -> bool {
        self.vertices[id].point().is_infinite()
    }
}
