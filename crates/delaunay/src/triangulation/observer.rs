//! Read-only observer hook for the optional visualization front-end this
//! crate does not itself implement (§5, §6: "Out of scope... any graphical
//! front-end... treated only as an optional observer hook").

use crate::complex::{FaceId, HalfFacetId};

/// Callbacks invoked by the builder at named points during insertion and
/// point location. All methods default to a no-op. Implementations must be
/// read-only: nothing here is given a way to mutate the triangulation.
pub trait Observer {
    /// A half-facet was just freed by shattering its owning face.
    fn highlight_edge(&self, half_facet: HalfFacetId) {
        let _ = half_facet;
    }
    /// A face's circumsphere is being tested against the new point.
    fn draw_circle(&self, face: FaceId) {
        let _ = face;
    }
    /// The triangulation reached a stable point (e.g. after cavity fill).
    fn draw_triangulation(&self) {}
    /// The visibility walk is currently inside `face`.
    fn draw_point_locate(&self, face: FaceId) {
        let _ = face;
    }
    /// A half-facet (and its twin) is about to be permanently discarded.
    fn delete_edge(&self, half_facet: HalfFacetId) {
        let _ = half_facet;
    }
}
