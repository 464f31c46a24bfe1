use super::*;

fn cfg_seeded(seed: u64) -> TriangulationConfig {
    TriangulationConfig {
        randomize: true,
        seed: Some(seed),
        predicates: crate::config::PredicateConfig::default(),
    }
}

fn cfg_unrandomized() -> TriangulationConfig {
    TriangulationConfig {
        randomize: false,
        seed: None,
        predicates: crate::config::PredicateConfig::default(),
    }
}

#[test]
fn single_triangle_has_one_finite_face() {
    let points = vec![
        Point::from_euclidean(&[0.0, 0.0]),
        Point::from_euclidean(&[1.0, 0.0]),
        Point::from_euclidean(&[0.0, 1.0]),
    ];
    let t = Triangulation::new(points, cfg_unrandomized()).unwrap();
    assert_eq!(t.face_point_sets(false).len(), 1);
    assert!(t.test_is_delaunay());
}

#[test]
fn square_splits_into_two_triangles() {
    let points = vec![
        Point::from_euclidean(&[0.0, 0.0]),
        Point::from_euclidean(&[1.0, 0.0]),
        Point::from_euclidean(&[1.0, 1.0]),
        Point::from_euclidean(&[0.0, 1.0]),
    ];
    let t = Triangulation::new(points, cfg_unrandomized()).unwrap();
    assert_eq!(t.face_point_sets(false).len(), 2);
    assert!(t.test_is_delaunay());
}

#[test]
fn cocircular_quad_is_rejected() {
    // Exactly cocircular: (1,0), (0,1), (-1,0), (0,-1) all lie on the unit
    // circle, so the fourth insertion produces a zero-side half-facet.
    let points = vec![
        Point::from_euclidean(&[1.0, 0.0]),
        Point::from_euclidean(&[0.0, 1.0]),
        Point::from_euclidean(&[-1.0, 0.0]),
        Point::from_euclidean(&[0.0, -1.0]),
    ];
    let err = Triangulation::new(points, cfg_unrandomized()).unwrap_err();
    assert!(matches!(err, Error::GeneralPositionError { .. }));
}

#[test]
fn convex_hull_with_interior_origin() {
    let points = vec![
        Point::from_euclidean(&[2.0, 0.0]),
        Point::from_euclidean(&[-2.0, 0.0]),
        Point::from_euclidean(&[0.0, 2.0]),
        Point::from_euclidean(&[0.0, -2.0]),
        Point::from_euclidean(&[0.0, 0.0]),
    ];
    let t = Triangulation::new(points, cfg_unrandomized()).unwrap();
    assert_eq!(t.face_point_sets(false).len(), 4);
    assert!(t.test_is_delaunay());
}

#[test]
fn duplicate_insertion_is_a_no_op() {
    let points = vec![
        Point::from_euclidean(&[0.0, 0.0]),
        Point::from_euclidean(&[1.0, 0.0]),
        Point::from_euclidean(&[0.0, 1.0]),
    ];
    let mut t = Triangulation::new(points, cfg_unrandomized()).unwrap();
    let before = t.face_point_sets(false);
    t.insert(Point::from_euclidean(&[0.0, 0.0])).unwrap();
    assert_eq!(t.face_point_sets(false), before);
}

#[test]
fn tetrahedron_in_three_dimensions() {
    let points = vec![
        Point::from_euclidean(&[0.0, 0.0, 0.0]),
        Point::from_euclidean(&[1.0, 0.0, 0.0]),
        Point::from_euclidean(&[0.0, 1.0, 0.0]),
        Point::from_euclidean(&[0.0, 0.0, 1.0]),
    ];
    let t = Triangulation::new(points, cfg_unrandomized()).unwrap();
    assert_eq!(t.dimension(), 3);
    assert_eq!(t.face_point_sets(false).len(), 1);
    assert!(t.test_is_delaunay());
}

#[test]
fn shuffled_insertion_order_reaches_the_same_triangulation() {
    let points = vec![
        Point::from_euclidean(&[0.0, 0.0]),
        Point::from_euclidean(&[3.0, 0.0]),
        Point::from_euclidean(&[3.0, 3.0]),
        Point::from_euclidean(&[0.0, 3.0]),
        Point::from_euclidean(&[1.5, 1.5]),
    ];
    let a = Triangulation::new(points.clone(), cfg_seeded(1)).unwrap();
    let b = Triangulation::new(points, cfg_seeded(2)).unwrap();
    assert_eq!(a.face_point_sets(false), b.face_point_sets(false));
}

#[test]
fn rejects_mismatched_point_dimension() {
    let points = vec![
        Point::from_euclidean(&[0.0, 0.0]),
        Point::from_euclidean(&[1.0, 0.0]),
        Point::from_euclidean(&[0.0, 1.0, 0.0]),
    ];
    let err = Triangulation::new(points, cfg_unrandomized()).unwrap_err();
    assert!(matches!(err, Error::DimensionMismatch { .. }));
}

#[test]
fn locate_finds_the_face_containing_a_query_point() {
    let points = vec![
        Point::from_euclidean(&[0.0, 0.0]),
        Point::from_euclidean(&[4.0, 0.0]),
        Point::from_euclidean(&[0.0, 4.0]),
    ];
    let t = Triangulation::new(points, cfg_unrandomized()).unwrap();
    let face = t.locate(&Point::from_euclidean(&[1.0, 1.0])).unwrap();
    assert!(t.complex().is_face_live(face));
}
