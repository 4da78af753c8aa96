use crate::TriangulationError;

/// A ring borrowed from a flat `i32` coordinate buffer laid out as `x0, y0, x1, y1, ...`.
///
/// The buffer is referenced, not copied, so it must outlive the triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring<'a> {
    coords: &'a [i32],
}

impl<'a> Ring<'a> {
    /// Wraps `coords`, failing if it does not hold whole `(x, y)` pairs.
    pub fn new(coords: &'a [i32]) -> Result<Self, TriangulationError> {
        if coords.len() % 2 != 0 {
            return Err(TriangulationError::OddCoordinateCount(coords.len()));
        }
        Ok(Self { coords })
    }

    /// The number of vertices in the ring
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The `index`th vertex of the ring
    pub fn get(&self, index: usize) -> [i32; 2] {
        [self.coords[index * 2], self.coords[index * 2 + 1]]
    }

    pub fn coords(&self) -> &'a [i32] {
        self.coords
    }

    pub fn iter(&self) -> impl '_ + Iterator<Item=[i32; 2]> {
        self.coords.chunks_exact(2).map(|c| [c[0], c[1]])
    }
}
