use crate::TriangleWinding;

/// Tunables for a triangulation run.
///
/// None of these affect whether a valid polygon is triangulated correctly, only how fast
/// and in which vertex order the triangles come out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangulationConfig {
    /// Polygons with more vertices than this are clipped with the z-order curve index
    pub hash_threshold: usize,
    /// How many laps without an ear the fallback passes (filtering, curing, splitting) may take,
    /// measured in steps per vertex of the stalled ring, before the rest of the ring is emitted
    /// by force. The default of 3 lets all three passes run; `1` forces emission after the first
    /// lap and `0` at the first vertex which is not an ear.
    pub lap_factor: usize,
    /// Winding of emitted triangles. `None` follows the winding of the outer ring.
    pub winding: Option<TriangleWinding>,
}

impl TriangulationConfig {
    pub const DEFAULT_HASH_THRESHOLD: usize = 80;
    pub const DEFAULT_LAP_FACTOR: usize = 3;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash_threshold(mut self, hash_threshold: usize) -> Self {
        self.hash_threshold = hash_threshold;
        self
    }

    pub fn with_lap_factor(mut self, lap_factor: usize) -> Self {
        self.lap_factor = lap_factor;
        self
    }

    pub fn with_winding(mut self, winding: TriangleWinding) -> Self {
        self.winding = Some(winding);
        self
    }
}

impl Default for TriangulationConfig {
    fn default() -> Self {
        Self {
            hash_threshold: Self::DEFAULT_HASH_THRESHOLD,
            lap_factor: Self::DEFAULT_LAP_FACTOR,
            winding: None,
        }
    }
}
