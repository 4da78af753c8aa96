use smallvec::SmallVec;

use crate::{PolygonList, Ring, Triangulate, TriangulationConfig, TriangulationError};

/// Accumulates rings, triangulates them once and holds the resulting index buffer.
///
/// The first ring added is the outer boundary; every later ring is a hole. Coordinate
/// buffers are borrowed, not copied.
///
/// ```
/// let outer = [0, 0, 4, 0, 4, 4, 0, 4];
/// let hole = [1, 1, 1, 3, 3, 3, 3, 1];
///
/// let mut session = earclip::Session::new();
/// session.add_ring(&outer)?;
/// session.add_ring(&hole)?;
/// session.triangulate()?;
/// assert_eq!(session.triangle_count(), 8);
/// # Ok::<(), earclip::TriangulationError>(())
/// ```
#[derive(Debug, Default)]
pub struct Session<'a> {
    rings: SmallVec<[Ring<'a>; 4]>,
    config: TriangulationConfig,
    indices: Vec<u32>,
    triangulated: bool,
}

impl<'a> Session<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: TriangulationConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Adds a ring read from `coords` (`x0, y0, x1, y1, ...`).
    pub fn add_ring(&mut self, coords: &'a [i32]) -> Result<(), TriangulationError> {
        if self.triangulated {
            return Err(TriangulationError::already_triangulated("cannot add a ring after triangulation"));
        }
        let ring = Ring::new(coords)?;
        self.rings.push(ring);
        Ok(())
    }

    /// Triangulates every ring added so far.
    ///
    /// Geometric problems never fail; at worst fewer triangles are produced. A session can
    /// only be triangulated successfully once.
    pub fn triangulate(&mut self) -> Result<(), TriangulationError> {
        if self.triangulated {
            return Err(TriangulationError::already_triangulated("session was already triangulated"));
        }

        let vertex_count = self.vertex_count();
        let mut indices = Vec::with_capacity(vertex_count.saturating_mul(3));
        self.rings.as_slice().triangulate_with(&self.config, &mut indices)?;

        log::debug!("triangulated {} rings with {} vertices into {} triangles", self.rings.len(), vertex_count, indices.len() / 3);
        self.indices = indices;
        self.triangulated = true;
        Ok(())
    }

    /// The flat index buffer, three indices per triangle. Empty before triangulation.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn into_indices(self) -> Vec<u32> {
        self.indices
    }

    pub fn ring_count(&self) -> usize {
        self.rings.len()
    }

    /// The total number of vertices among all rings, which bounds every index.
    pub fn vertex_count(&self) -> usize {
        self.rings.as_slice().vertex_count()
    }

    pub fn is_triangulated(&self) -> bool {
        self.triangulated
    }

    pub fn config(&self) -> &TriangulationConfig {
        &self.config
    }

    /// Releases the session and its index buffer.
    pub fn close(self) {
        log::trace!("closing session with {} rings", self.rings.len());
    }
}
