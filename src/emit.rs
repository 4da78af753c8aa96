use crate::{List, TriangleWinding};

/// Writes clipped triangles to the caller's list in the requested winding.
///
/// Clipping always produces counterclockwise triangles (y axis up), so clockwise output
/// lists each triangle backwards.
pub(crate) struct Emitter<L: List<u32>> {
    list: L,
    winding: TriangleWinding,
    #[cfg(feature = "debugging")]
    triangles: Vec<[u32; 3]>,
}

impl<L: List<u32>> Emitter<L> {
    pub fn new(list: L, winding: TriangleWinding) -> Self {
        Self {
            list,
            winding,
            #[cfg(feature = "debugging")]
            triangles: Vec::new(),
        }
    }

    pub fn triangle(&mut self, a: u32, b: u32, c: u32) {
        log::trace!("triangle {} {} {}", a, b, c);

        #[cfg(feature = "debugging")]
        self.triangles.push([a, b, c]);

        match self.winding {
            TriangleWinding::Counterclockwise => self.list.push(a, b, c),
            TriangleWinding::Clockwise => self.list.push(c, b, a),
        }
    }

    /// Triangles emitted so far, in clipping order and winding
    #[cfg(feature = "debugging")]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn finish(self) -> L {
        log::debug!("emitted {} triangles", self.list.len());
        self.list
    }
}
