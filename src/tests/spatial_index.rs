use crate::{PolygonList, Triangulate, TriangulationConfig, deviation, linked::NodeArena, math::Coords, zorder::{CurveFrame, interleave}};

use super::util;

#[test]
fn interleave_bits() {
    assert_eq!(interleave(0), 0);
    assert_eq!(interleave(1), 1);
    assert_eq!(interleave(2), 4);
    assert_eq!(interleave(3), 5);
    assert_eq!(interleave(0xFFFF), 0x5555_5555);
    // Only the low 16 bits are used
    assert_eq!(interleave(0x1_0001), 1);
}

#[test]
fn z_order() {
    let frame = CurveFrame::from_bounds(0., 0., 32767., 32767.);
    assert_eq!(frame.z_order(Coords([0., 0.])), 0);
    assert_eq!(frame.z_order(Coords([1., 0.])), 1);
    assert_eq!(frame.z_order(Coords([0., 1.])), 2);
    assert_eq!(frame.z_order(Coords([1., 1.])), 3);
    assert_eq!(frame.z_order(Coords([32767., 32767.])), 0x3FFF_FFFF);
}

#[test]
fn degenerate_frame() {
    let frame = CurveFrame::from_bounds(5., 5., 5., 5.);
    assert_eq!(frame.z_order(Coords([5., 5.])), 0);
}

#[test]
fn curve_list_is_sorted() {
    let polygon = util::polygon::regular(97);
    let mut arena = NodeArena::default();
    let start = arena.link_ring(&polygon, 0, 0, true).unwrap();

    arena.index_curve(start, CurveFrame::new(&polygon));

    let head = arena.iter_ring(start).find(|&n| arena[n].prev_z.is_none()).unwrap();
    let mut count = 1;
    let mut n = head;
    while let Some(next) = arena[n].next_z {
        assert_eq!(arena[next].prev_z, Some(n));
        assert!(arena[n].z <= arena[next].z);
        n = next;
        count += 1;
    }
    assert_eq!(count, 97);
}

#[test]
fn hashed_matches_exhaustive() {
    let exhaustive = TriangulationConfig::new().with_hash_threshold(usize::MAX);
    let hashed = TriangulationConfig::new().with_hash_threshold(0);

    let simple = util::random::polygons(0xc0ffee, 10, 300, false);
    let with_hole = util::random::polygons(0xbeef, 10, 300, true);
    for polygon in simple.iter().chain(&with_hole) {
        let expected = polygon.triangulate_with(&exhaustive, Vec::new()).unwrap();
        assert_eq!(expected.len() / 3, polygon.vertex_count() + 2 * (polygon.len() - 1) - 2);
        assert!(deviation(polygon, &expected) < 1e-9);
        assert_eq!(polygon.triangulate_with(&hashed, Vec::<u32>::new()).unwrap(), expected);
    }
}

#[test]
fn large_regular_polygon() {
    let polygon = util::polygon::regular(300);
    let indices = polygon.triangulate().unwrap();
    assert_eq!(indices.len() / 3, 298);
    assert!(deviation(&polygon, &indices) < 1e-9);
}
