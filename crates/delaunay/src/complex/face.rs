//! Faces: `d`-simplices, identified by their vertex set alone.

use std::collections::{BTreeSet, HashMap};

use super::ids::{HalfFacetId, VertexId};

/// A `d`-simplex: an unordered set of `d+1` vertices, each mapped to the
/// unique half-facet of this face opposite it.
#[derive(Clone, Debug)]
pub struct Face {
    vertices: BTreeSet<VertexId>,
    half_facets: HashMap<VertexId, HalfFacetId>,
}

impl Face {
    pub(super) fn new(vertices: BTreeSet<VertexId>) -> Self {
        Self {
            vertices,
            half_facets: HashMap::new(),
        }
    }

    pub(super) fn set_half_facets(&mut self, half_facets: HashMap<VertexId, HalfFacetId>) {
        debug_assert_eq!(half_facets.len(), self.vertices.len());
        self.half_facets = half_facets;
    }

    /// The `d+1` vertices of this face.
    pub fn vertices(&self) -> &BTreeSet<VertexId> {
        &self.vertices
    }

    /// The half-facet of this face opposite `vertex`, if `vertex` belongs
    /// to it.
    pub fn half_facet_opposite(&self, vertex: VertexId) -> Option<HalfFacetId> {
        self.half_facets.get(&vertex).copied()
    }

    /// All half-facets owned by this face, one per vertex.
    pub fn half_facet_ids(&self) -> Vec<HalfFacetId> {
        self.half_facets.values().copied().collect()
    }

    pub fn half_facets(&self) -> &HashMap<VertexId, HalfFacetId> {
        &self.half_facets
    }
}
