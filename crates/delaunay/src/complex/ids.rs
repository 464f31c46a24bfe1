//! Typed arena keys for vertices, faces, and half-facets.
//!
//! Twin / face-owner / opposite-vertex relations are stored as these ids,
//! never as owning references, so the cyclic twin graph never needs `Rc`.

use slotmap::new_key_type;

new_key_type! {
    /// Key into the vertex arena. Vertices are never removed.
    pub struct VertexId;
    /// Key into the face arena. Removed when a face is shattered.
    pub struct FaceId;
    /// Key into the half-facet arena. Removed when a facet is punctured.
    pub struct HalfFacetId;
}
