//! Crate-wide error type.
//!
//! Mirrors the plain-enum-plus-manual-`Display` idiom used elsewhere in this
//! codebase (see `GeneratorError`) rather than pulling in a derive-macro error
//! crate for a handful of variants.

use std::fmt;

/// Everything that can go wrong while building or querying a triangulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A `Matrix` was built from columns of unequal length, or a caller
    /// supplied a point whose length disagrees with the triangulation's
    /// established dimension.
    DimensionMismatch { expected: usize, found: usize },
    /// A `HalfFacet` would have had side sign 0: its opposite vertex is
    /// affinely dependent with the facet's own vertices.
    GeneralPositionError { facet_size: usize },
    /// A linear solve (circumcenter) hit a singular system.
    SingularMatrix { context: &'static str },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {expected} coordinates, found {found}"
            ),
            Self::GeneralPositionError { facet_size } => write!(
                f,
                "general position violated: opposite vertex is affinely dependent with its {facet_size}-vertex facet"
            ),
            Self::SingularMatrix { context } => {
                write!(f, "singular matrix while computing {context}")
            }
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
