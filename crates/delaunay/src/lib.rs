//! Incremental n-dimensional Delaunay triangulation and its dual Voronoi
//! diagram.
//!
//! The engine maintains a simplicial complex over extended homogeneous
//! coordinates (an "outer face" of directional vertices stands in for the
//! unbounded region of space) and restores the Delaunay property after
//! each [`Triangulation::insert`] via point location, cavity expansion
//! driven by the local in-sphere test, and re-triangulation.

pub mod complex;
pub mod config;
pub mod error;
pub mod linalg;
pub mod point;
pub mod predicates;
pub mod triangulation;
pub mod voronoi;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use config::{PredicateConfig, TriangulationConfig};
pub use error::{Error, Result};
pub use point::Point;
pub use predicates::{in_sphere, orient};
pub use triangulation::{Observer, Triangulation};
pub use voronoi::{circumcenter, Voronoi};

/// Common imports for quick use by callers of this crate.
pub mod prelude {
    pub use crate::complex::{Complex, Face, FaceId, HalfFacet, HalfFacetId, Vertex, VertexId};
    pub use crate::config::{PredicateConfig, TriangulationConfig};
    pub use crate::error::{Error, Result};
    pub use crate::point::Point;
    pub use crate::triangulation::{Observer, Triangulation};
    pub use crate::voronoi::{circumcenter, Voronoi};
}
