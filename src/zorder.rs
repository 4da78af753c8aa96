//! Z-order (Morton) curve index over the polygon's bounding box.
//!
//! Nodes of the ring being clipped are chained through `prev_z`/`next_z` in key order, so
//! an ear test only has to visit vertices whose keys fall between the keys of the ear's
//! bounding box corners.

use crate::{PolygonList, VertexExt, linked::{NodeArena, NodeIdx}, math::{Coords, area, point_in_triangle}};

/// Largest key component; coordinates are scaled into `0..=CURVE_MAX`
const CURVE_MAX: f64 = 32767.;

/// Maps coordinates into curve space
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CurveFrame {
    min_x: f64,
    min_y: f64,
    inv_size: f64,
}

impl CurveFrame {
    /// Frames the bounding box of every vertex of `polygon`.
    pub fn new<P: PolygonList + ?Sized>(polygon: &P) -> Self {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for ring in 0..polygon.ring_count() {
            for index in 0..polygon.ring_len(ring) {
                let c = polygon.get_vertex(ring, index).coords();
                min_x = min_x.min(c.x());
                min_y = min_y.min(c.y());
                max_x = max_x.max(c.x());
                max_y = max_y.max(c.y());
            }
        }

        Self::from_bounds(min_x, min_y, max_x, max_y)
    }

    pub fn from_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        let size = (max_x - min_x).max(max_y - min_y);
        let inv_size = if size > 0. && size.is_finite() { CURVE_MAX / size } else { 0. };
        Self { min_x, min_y, inv_size }
    }

    pub fn z_order(&self, c: Coords) -> u32 {
        // Float to int casts saturate, so stray points clamp to the frame edges
        let x = ((c.x() - self.min_x) * self.inv_size) as u32;
        let y = ((c.y() - self.min_y) * self.inv_size) as u32;
        interleave(x) | (interleave(y) << 1)
    }
}

/// Spreads the low 16 bits of `v` into the even bits of the result
pub(crate) fn interleave(v: u32) -> u32 {
    let mut v = v & 0x0000_FFFF;
    v = (v | (v << 8)) & 0x00FF_00FF;
    v = (v | (v << 4)) & 0x0F0F_0F0F;
    v = (v | (v << 2)) & 0x3333_3333;
    v = (v | (v << 1)) & 0x5555_5555;
    v
}

impl NodeArena {
    /// Keys every node of the ring and links them in key order
    pub fn index_curve(&mut self, start: NodeIdx, frame: CurveFrame) {
        let mut p = start;
        loop {
            if self[p].z.is_none() {
                self[p].z = Some(frame.z_order(self[p].c));
            }
            self[p].prev_z = Some(self[p].prev);
            self[p].next_z = Some(self[p].next);
            p = self[p].next;
            if p == start {
                break;
            }
        }

        let last = self[p].prev;
        self[last].next_z = None;
        self[p].prev_z = None;

        self.sort_linked(p);
    }

    /// Bottom-up merge sort of the z-list beginning at `list`, by key
    fn sort_linked(&mut self, list: NodeIdx) {
        let mut list = Some(list);
        let mut in_size = 1;

        loop {
            let mut p = list;
            list = None;
            let mut tail: Option<NodeIdx> = None;
            let mut merges = 0;

            while p.is_some() {
                merges += 1;
                let mut q = p;
                let mut p_size = 0;
                for _ in 0..in_size {
                    p_size += 1;
                    q = q.and_then(|q| self[q].next_z);
                    if q.is_none() {
                        break;
                    }
                }
                let mut q_size = in_size;

                while p_size > 0 || (q_size > 0 && q.is_some()) {
                    let take_p = p_size != 0 && (q_size == 0 || match (p, q) {
                        (Some(pn), Some(qn)) => self[pn].z <= self[qn].z,
                        (_, None) => true,
                        (None, Some(_)) => false,
                    });

                    let e = if take_p {
                        let e = p;
                        p = p.and_then(|pn| self[pn].next_z);
                        p_size -= 1;
                        e
                    } else {
                        let e = q;
                        q = q.and_then(|qn| self[qn].next_z);
                        q_size -= 1;
                        e
                    };

                    if let Some(e) = e {
                        match tail {
                            Some(tail) => self[tail].next_z = Some(e),
                            None => list = Some(e),
                        }
                        self[e].prev_z = tail;
                        tail = Some(e);
                    }
                }

                p = q;
            }

            if let Some(tail) = tail {
                self[tail].next_z = None;
            }

            if merges <= 1 {
                return;
            }
            in_size *= 2;
        }
    }

    /// [NodeArena::is_ear], restricted to vertices whose keys fall inside the ear's bounding box keys
    pub fn is_ear_hashed(&self, ear: NodeIdx, frame: CurveFrame) -> bool {
        let a = self.prev(ear);
        let c = self.next(ear);
        let (ac, bc, cc) = (self.c(a), self.c(ear), self.c(c));

        if area(ac, bc, cc) >= 0. {
            return false;
        }

        let x0 = ac.x().min(bc.x()).min(cc.x());
        let y0 = ac.y().min(bc.y()).min(cc.y());
        let x1 = ac.x().max(bc.x()).max(cc.x());
        let y1 = ac.y().max(bc.y()).max(cc.y());

        let min_z = frame.z_order(Coords([x0, y0]));
        let max_z = frame.z_order(Coords([x1, y1]));

        let blocks = |p: NodeIdx| {
            let pc = self.c(p);
            pc.x() >= x0 && pc.x() <= x1 && pc.y() >= y0 && pc.y() <= y1 &&
                p != a && p != c &&
                point_in_triangle(ac, bc, cc, pc) &&
                self.corner_area(p) >= 0.
        };
        let below = |p: Option<NodeIdx>| p.filter(|&p| self[p].z.map_or(false, |z| z >= min_z));
        let above = |n: Option<NodeIdx>| n.filter(|&n| self[n].z.map_or(false, |z| z <= max_z));

        let mut p = below(self[ear].prev_z);
        let mut n = above(self[ear].next_z);

        // Walk both directions at once while both stay in range
        while let (Some(pi), Some(ni)) = (p, n) {
            if blocks(pi) || blocks(ni) {
                return false;
            }
            p = below(self[pi].prev_z);
            n = above(self[ni].next_z);
        }

        while let Some(pi) = p {
            if blocks(pi) {
                return false;
            }
            p = below(self[pi].prev_z);
        }

        while let Some(ni) = n {
            if blocks(ni) {
                return false;
            }
            n = above(self[ni].next_z);
        }

        true
    }
}
