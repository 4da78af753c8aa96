use crate::{PolygonList, VertexExt, math::{self, Coords}};

/// Relative difference between the polygon's area and the total area of `indices`.
///
/// `indices` is a flat list of triangles over the concatenated vertices of `polygon`, as
/// returned by [Triangulate::triangulate](crate::Triangulate::triangulate). The polygon's
/// area is the outer ring's area minus each hole's area. A result of `0` means the
/// triangles cover exactly the polygon's area, which holds for any valid polygon. If the
/// polygon has no area, the result is the absolute area of the triangles.
///
/// Indices which are out of range are ignored. Trailing indices which do not form a full
/// triangle are ignored.
pub fn deviation<P: PolygonList + ?Sized>(polygon: &P, indices: &[u32]) -> f64 {
    let mut vertices: Vec<Coords> = Vec::with_capacity(polygon.vertex_count());
    let mut polygon_area = 0.;

    for ring in 0..polygon.ring_count() {
        let start = vertices.len();
        vertices.extend((0..polygon.ring_len(ring)).map(|index| polygon.get_vertex(ring, index).coords()));

        let ring_area = math::ring_double_area(vertices[start..].iter().copied()).abs();
        if ring == 0 {
            polygon_area += ring_area;
        } else {
            polygon_area -= ring_area;
        }
    }

    let triangles_area: f64 = indices.chunks_exact(3)
        .filter_map(|t| {
            let a = vertices.get(t[0] as usize)?;
            let b = vertices.get(t[1] as usize)?;
            let c = vertices.get(t[2] as usize)?;
            Some(math::area(*a, *b, *c).abs())
        })
        .sum();

    if polygon_area == 0. && triangles_area == 0. {
        0.
    } else if polygon_area == 0. {
        triangles_area / 2.
    } else {
        ((polygon_area - triangles_area) / polygon_area).abs()
    }
}
