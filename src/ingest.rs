use crate::{PolygonList, VertexExt, linked::{NodeArena, NodeIdx}, math::{self, equals}};

impl NodeArena {
    /// Links ring `ring` of `polygon` into a new circular list.
    ///
    /// The outer ring is linked counterclockwise and holes clockwise (y axis up), reversing the
    /// input order where needed. `first_vi` is the buffer index of the ring's first vertex.
    /// Returns the last linked node, or `None` for an empty ring.
    pub fn link_ring<P: PolygonList + ?Sized>(&mut self, polygon: &P, ring: usize, first_vi: u32, outer: bool) -> Option<NodeIdx> {
        let len = polygon.ring_len(ring);
        let coords = (0..len).map(|index| polygon.get_vertex(ring, index).coords());
        let counterclockwise = math::ring_double_area(coords.clone()) > 0.;

        let mut last = None;
        if outer == counterclockwise {
            for (index, c) in coords.enumerate() {
                last = Some(self.insert(first_vi + index as u32, c, last));
            }
        } else {
            for (index, c) in coords.enumerate().rev() {
                last = Some(self.insert(first_vi + index as u32, c, last));
            }
        }

        // Closed rings repeat their first vertex
        if let Some(l) = last {
            let next = self.next(l);
            if equals(self.c(l), self.c(next)) {
                self.remove(l);
                last = Some(next);
            }
        }

        last
    }
}
