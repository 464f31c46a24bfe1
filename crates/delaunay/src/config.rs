//! Centralized tunables, in the spirit of `GeomCfg`.

/// Tolerances consumed by the geometric predicates.
///
/// The predicates themselves are exact-sign operations on the supplied
/// floating-point determinant (see §"Non-goals" on exact arithmetic
/// filtering: inputs in general position are assumed to produce the
/// correct sign). The only tunable here is the convention for "finitizing"
/// directional (infinite) points inside `in_sphere`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PredicateConfig {
    /// Scale factor `K` applied to a direction's coordinates before it is
    /// treated as a far-but-finite point by `in_sphere`. The source design
    /// uses `K = 1e9`; its safe range depends on the magnitude of the
    /// finite input coordinates.
    pub in_sphere_scale: f64,
}

impl Default for PredicateConfig {
    fn default() -> Self {
        Self {
            in_sphere_scale: 1e9,
        }
    }
}

/// Construction-time configuration for a [`crate::Triangulation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangulationConfig {
    /// Shuffle the input batch before inserting it. Recommended default:
    /// expected walk length under random order is sub-linear, vs. linear
    /// worst case for adversarial orderings.
    pub randomize: bool,
    /// Seed for the shuffle's RNG. `None` draws entropy from the OS;
    /// `Some(seed)` makes the shuffle (and therefore the sequence of
    /// intermediate states) reproducible, which benches and tests want.
    pub seed: Option<u64>,
    /// Tolerances forwarded to the predicates.
    pub predicates: PredicateConfig,
}

impl Default for TriangulationConfig {
    fn default() -> Self {
        Self {
            randomize: true,
            seed: None,
            predicates: PredicateConfig::default(),
        }
    }
}
