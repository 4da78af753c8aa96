use crate::Vertex;
use num_traits::ToPrimitive;

/// Twice the signed area of a triangle, positive when counterclockwise (y axis up)
pub fn signed_area<V: Vertex>(a: &V, b: &V, c: &V) -> f64 {
    let f = |v: &V| (v.x().to_f64().unwrap(), v.y().to_f64().unwrap());
    let ((ax, ay), (bx, by), (cx, cy)) = (f(a), f(b), f(c));
    (bx - ax) * (cy - ay) - (cx - ax) * (by - ay)
}

/// Total area of the triangles in `indices` over `vertices`
pub fn triangles_area<V: Vertex>(vertices: &[V], indices: &[u32]) -> f64 {
    indices.chunks_exact(3)
        .map(|t| signed_area(&vertices[t[0] as usize], &vertices[t[1] as usize], &vertices[t[2] as usize]).abs() / 2.)
        .sum()
}

pub fn assert_indices_in_range(indices: &[u32], vertex_count: usize) {
    assert_eq!(indices.len() % 3, 0, "incomplete triangle in {:?}", indices);
    for &i in indices {
        assert!((i as usize) < vertex_count, "index {} out of range for {} vertices", i, vertex_count);
    }
}

/// Asserts every non-degenerate triangle winds counterclockwise (or clockwise if `!ccw`)
pub fn assert_counterclockwise<V: Vertex>(vertices: &[V], indices: &[u32], ccw: bool) {
    for t in indices.chunks_exact(3) {
        let area = signed_area(&vertices[t[0] as usize], &vertices[t[1] as usize], &vertices[t[2] as usize]);
        if ccw {
            assert!(area >= 0., "triangle {:?} is clockwise", t);
        } else {
            assert!(area <= 0., "triangle {:?} is counterclockwise", t);
        }
    }
}
