use crate::{Session, TriangleWinding, TriangulationConfig, TriangulationError};

use super::util;

const OUTER: [i32; 8] = [0, 0, 4, 0, 4, 4, 0, 4];
const HOLE: [i32; 8] = [1, 1, 1, 3, 3, 3, 3, 1];

fn vertices(rings: &[&[i32]]) -> Vec<[i32; 2]> {
    rings.iter().flat_map(|r| r.chunks_exact(2).map(|c| [c[0], c[1]])).collect()
}

#[test]
fn lifecycle() {
    let mut session = Session::new();
    assert!(!session.is_triangulated());
    assert!(session.indices().is_empty());

    session.add_ring(&OUTER).unwrap();
    session.add_ring(&HOLE).unwrap();
    assert_eq!(session.ring_count(), 2);
    assert_eq!(session.vertex_count(), 8);

    session.triangulate().unwrap();
    assert!(session.is_triangulated());
    assert_eq!(session.index_count(), 24);
    assert_eq!(session.triangle_count(), 8);
    util::assert_indices_in_range(session.indices(), 8);

    let vertices = vertices(&[&OUTER, &HOLE]);
    assert!((util::triangles_area(&vertices, session.indices()) - 12.).abs() < 1e-9);

    let indices = session.indices().to_vec();
    assert_eq!(session.into_indices(), indices);
}

#[test]
fn odd_coordinate_count() {
    let mut session = Session::new();
    let err = session.add_ring(&[1, 2, 3]).unwrap_err();
    assert!(matches!(err, TriangulationError::OddCoordinateCount(3)));
    assert_eq!(session.ring_count(), 0);
}

#[test]
fn already_triangulated() {
    let mut session = Session::new();
    session.add_ring(&OUTER).unwrap();
    session.triangulate().unwrap();

    let err = session.triangulate().unwrap_err();
    assert!(matches!(err, TriangulationError::AlreadyTriangulated(_)));
    let err = session.add_ring(&HOLE).unwrap_err();
    assert!(matches!(err, TriangulationError::AlreadyTriangulated(_)));

    // The first result is untouched
    assert_eq!(session.triangle_count(), 2);
    session.close();
}

#[test]
fn empty_session() {
    let mut session = Session::new();
    session.triangulate().unwrap();
    assert_eq!(session.index_count(), 0);

    let mut session = Session::new();
    session.add_ring(&[0, 0, 1, 1]).unwrap();
    session.triangulate().unwrap();
    assert_eq!(session.index_count(), 0);
}

#[test]
fn deterministic() {
    let run = || {
        let mut session = Session::new();
        session.add_ring(&OUTER).unwrap();
        session.add_ring(&HOLE).unwrap();
        session.triangulate().unwrap();
        session.into_indices()
    };
    assert_eq!(run(), run());
}

#[test]
fn winding_follows_outer_ring() {
    let counterclockwise = OUTER;
    let clockwise = [0, 0, 0, 4, 4, 4, 4, 0];

    let mut session = Session::new();
    session.add_ring(&counterclockwise).unwrap();
    session.triangulate().unwrap();
    util::assert_counterclockwise(&vertices(&[&counterclockwise]), session.indices(), true);

    let mut session = Session::new();
    session.add_ring(&clockwise).unwrap();
    session.triangulate().unwrap();
    util::assert_counterclockwise(&vertices(&[&clockwise]), session.indices(), false);
}

#[test]
fn forced_winding() {
    let config = TriangulationConfig::new().with_winding(TriangleWinding::Clockwise);
    let mut session = Session::with_config(config);
    session.add_ring(&OUTER).unwrap();
    session.add_ring(&HOLE).unwrap();
    session.triangulate().unwrap();

    assert_eq!(session.triangle_count(), 8);
    util::assert_counterclockwise(&vertices(&[&OUTER, &HOLE]), session.indices(), false);
}

#[test]
fn matches_polygon_list() {
    use crate::Triangulate;

    let mut session = Session::new();
    session.add_ring(&OUTER).unwrap();
    session.add_ring(&HOLE).unwrap();
    session.triangulate().unwrap();

    assert_eq!(session.indices(), util::polygon::square_with_hole().triangulate().unwrap().as_slice());
}
