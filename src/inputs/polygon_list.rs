use crate::{List, Ring, TriangulationConfig, TriangulationError, earcut};

use super::vertex::Vertex;

/// An indexable list of rings. The first ring is the outer boundary, every following ring is a hole.
///
/// Rings may be given in either winding and must not repeat their first vertex, although a
/// repeated closing vertex is tolerated. Vertices are identified in the output by their position
/// in the concatenation of all rings.
pub trait PolygonList {
    /// The type of vertices of the rings.
    type Vertex: Vertex;

    /// The number of rings, including the outer ring.
    fn ring_count(&self) -> usize;

    /// The number of vertices in ring `ring`.
    fn ring_len(&self, ring: usize) -> usize;

    /// Get the `index`th vertex of ring `ring`.
    fn get_vertex(&self, ring: usize, index: usize) -> Self::Vertex;

    /// The total number of vertices among all rings.
    fn vertex_count(&self) -> usize {
        (0..self.ring_count()).map(|ring| self.ring_len(ring)).sum()
    }
}

/// `Triangulate` provides the `triangulate()` functions to implementers of [PolygonList].
///
/// This trait is sealed and is not intended to be manually implemented.
pub trait Triangulate: private::Sealed {
    /// Triangulates with the default [TriangulationConfig], returning a flat index buffer.
    fn triangulate(&self) -> Result<Vec<u32>, TriangulationError>;

    /// Triangulates with `config`, appending the triangles to `output`.
    fn triangulate_with<L: List<u32>>(&self, config: &TriangulationConfig, output: L) -> Result<L, TriangulationError>;
}

impl<P: PolygonList + ?Sized> Triangulate for P {
    #[inline]
    fn triangulate(&self) -> Result<Vec<u32>, TriangulationError> {
        let capacity = self.vertex_count().saturating_mul(3);
        earcut::triangulate(self, &TriangulationConfig::default(), Vec::with_capacity(capacity))
    }

    #[inline]
    fn triangulate_with<L: List<u32>>(&self, config: &TriangulationConfig, output: L) -> Result<L, TriangulationError> {
        earcut::triangulate(self, config, output)
    }
}

impl<V: Vertex + Clone> PolygonList for [Vec<V>] {
    type Vertex = V;

    fn ring_count(&self) -> usize {
        self.len()
    }

    fn ring_len(&self, ring: usize) -> usize {
        self[ring].len()
    }

    fn get_vertex(&self, ring: usize, index: usize) -> Self::Vertex {
        self[ring][index].clone()
    }
}

impl<V: Vertex + Clone> PolygonList for Vec<Vec<V>> {
    type Vertex = V;

    fn ring_count(&self) -> usize {
        self.len()
    }

    fn ring_len(&self, ring: usize) -> usize {
        self[ring].len()
    }

    fn get_vertex(&self, ring: usize, index: usize) -> Self::Vertex {
        self[ring][index].clone()
    }
}

/// A single ring without holes
impl<V: Vertex + Clone> PolygonList for [V] {
    type Vertex = V;

    fn ring_count(&self) -> usize {
        1
    }

    fn ring_len(&self, _ring: usize) -> usize {
        self.len()
    }

    fn get_vertex(&self, _ring: usize, index: usize) -> Self::Vertex {
        self[index].clone()
    }
}

/// A single ring without holes
impl<V: Vertex + Clone> PolygonList for Vec<V> {
    type Vertex = V;

    fn ring_count(&self) -> usize {
        1
    }

    fn ring_len(&self, _ring: usize) -> usize {
        self.len()
    }

    fn get_vertex(&self, _ring: usize, index: usize) -> Self::Vertex {
        self[index].clone()
    }
}

impl<'a> PolygonList for [Ring<'a>] {
    type Vertex = [i32; 2];

    fn ring_count(&self) -> usize {
        self.len()
    }

    fn ring_len(&self, ring: usize) -> usize {
        self[ring].len()
    }

    fn get_vertex(&self, ring: usize, index: usize) -> Self::Vertex {
        self[ring].get(index)
    }
}

mod private {
    pub trait Sealed { }

    impl<P: super::PolygonList + ?Sized> Sealed for P { }
}
