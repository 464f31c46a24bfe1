//! Property: the set of finite faces produced does not depend on the order
//! points are inserted in (only on the point set itself).

use delaunay::{Point, Triangulation, TriangulationConfig};
use proptest::prelude::*;

fn distinct_point_grid(n: usize) -> Vec<Point> {
    // A small perturbed grid: enough points to force several cavity
    // expansions without risking accidental exact cocircularity.
    (0..n)
        .map(|i| {
            let x = (i % 4) as f64 + 0.01 * (i as f64);
            let y = (i / 4) as f64 - 0.017 * (i as f64);
            Point::from_euclidean(&[x, y])
        })
        .collect()
}

fn config_with_seed(seed: u64) -> TriangulationConfig {
    TriangulationConfig {
        randomize: true,
        seed: Some(seed),
        ..Default::default()
    }
}

proptest! {
    #[test]
    fn insertion_order_does_not_change_the_triangulation(seed_a in 0u64..1000, seed_b in 0u64..1000) {
        let points = distinct_point_grid(9);
        let a = Triangulation::new(points.clone(), config_with_seed(seed_a)).unwrap();
        let b = Triangulation::new(points, config_with_seed(seed_b)).unwrap();
        prop_assert_eq!(a.face_point_sets(false), b.face_point_sets(false));
    }

    #[test]
    fn every_built_triangulation_passes_its_own_self_check(seed in 0u64..1000) {
        let points = distinct_point_grid(12);
        let t = Triangulation::new(points, config_with_seed(seed)).unwrap();
        prop_assert!(t.test_is_delaunay());
    }
}
