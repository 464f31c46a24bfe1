//! Half-facets: oriented `(d-1)`-faces carrying a side sign and a twin.

use std::collections::BTreeSet;

use super::ids::{FaceId, HalfFacetId, VertexId};

/// An oriented `(d-1)`-facet owned by exactly one [`super::Face`].
#[derive(Clone, Debug)]
pub struct HalfFacet {
    vertices: BTreeSet<VertexId>,
    opposite: VertexId,
    face: FaceId,
    side: i8,
    twin: Option<HalfFacetId>,
}

impl HalfFacet {
    pub(super) fn new(
        vertices: BTreeSet<VertexId>,
        opposite: VertexId,
        face: FaceId,
        side: i8,
        twin: Option<HalfFacetId>,
    ) -> Self {
        debug_assert_ne!(side, 0, "a half-facet's side must never be zero");
        Self {
            vertices,
            opposite,
            face,
            side,
            twin,
        }
    }

    /// The `d` vertices forming this facet (excludes `opposite`).
    pub fn vertices(&self) -> &BTreeSet<VertexId> {
        &self.vertices
    }

    pub fn opposite(&self) -> VertexId {
        self.opposite
    }

    pub fn face(&self) -> FaceId {
        self.face
    }

    pub fn side(&self) -> i8 {
        self.side
    }

    pub fn twin(&self) -> Option<HalfFacetId> {
        self.twin
    }

    pub(super) fn set_twin(&mut self, twin: Option<HalfFacetId>) {
        self.twin = twin;
    }

    /// Re-wire this half-facet to a new owning face and opposite vertex,
    /// keeping its existing side sign and facet vertex set. Used when a
    /// half-facet is reused by a newly created face (§4.3 "Face
    /// construction").
    pub(super) fn rewire(&mut self, face: FaceId, opposite: VertexId) {
        self.face = face;
        self.opposite = opposite;
    }
}
