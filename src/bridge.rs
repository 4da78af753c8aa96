use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::{List, PolygonList, earcut::EarcutState, linked::{NodeArena, NodeIdx}, math::{Coords, area, point_in_triangle}};

impl<'c, L: List<u32>> EarcutState<'c, L> {
    /// Links every hole and bridges it into the outer ring, returning a node of the merged ring.
    pub(crate) fn eliminate_holes<P: PolygonList + ?Sized>(&mut self, polygon: &P, mut outer: NodeIdx) -> NodeIdx {
        let mut queue: SmallVec<[NodeIdx; 8]> = SmallVec::with_capacity(polygon.ring_count() - 1);

        let mut first_vi = polygon.ring_len(0) as u32;
        for ring in 1..polygon.ring_count() {
            if let Some(list) = self.arena.link_ring(polygon, ring, first_vi, false) {
                if list == self.arena.next(list) {
                    self.arena[list].steiner = true;
                }
                queue.push(self.arena.leftmost(list));
            }
            first_vi += polygon.ring_len(ring) as u32;
        }

        // Stable, so holes with equal leftmost points keep their input order
        let arena = &self.arena;
        queue.sort_by_key(|&ni| (OrderedFloat(arena.c(ni).x()), OrderedFloat(arena.c(ni).y())));

        for hole in queue {
            outer = self.eliminate_hole(hole, outer);
        }

        outer
    }

    fn eliminate_hole(&mut self, hole: NodeIdx, outer: NodeIdx) -> NodeIdx {
        let bridge = match self.arena.find_hole_bridge(hole, outer) {
            Some(bridge) => bridge,
            None => {
                let bridge = self.arena.nearest(hole, outer);
                log::warn!("hole at vertex {} is not visible from the outer ring, connecting it to vertex {}",
                    self.arena[hole].vi, self.arena[bridge].vi);
                bridge
            }
        };
        log::trace!("bridging hole vertex {} to vertex {}", self.arena[hole].vi, self.arena[bridge].vi);

        let bridge_reverse = self.arena.split(bridge, hole);

        // Filter both sides of the bridge
        let next = self.arena.next(bridge_reverse);
        self.arena.filter_points(bridge_reverse, Some(next));
        let next = self.arena.next(bridge);
        self.arena.filter_points(bridge, Some(next))
    }
}

impl NodeArena {
    /// Finds a vertex of the outer ring that the hole's leftmost vertex `hole` can connect to
    /// without crossing an edge (David Eberly's algorithm).
    pub fn find_hole_bridge(&self, hole: NodeIdx, outer: NodeIdx) -> Option<NodeIdx> {
        let hc = self.c(hole);
        let (hx, hy) = (hc.x(), hc.y());
        let mut qx = f64::NEG_INFINITY;
        let mut m = None;

        // Find the segment left of the hole point, closest to it, intersected by a horizontal ray
        for p in self.iter_ring(outer) {
            let next = self.next(p);
            let (pc, nc) = (self.c(p), self.c(next));
            if hy <= pc.y() && hy >= nc.y() && nc.y() != pc.y() {
                let x = pc.x() + (hy - pc.y()) * (nc.x() - pc.x()) / (nc.y() - pc.y());
                if x <= hx && x > qx {
                    qx = x;
                    let candidate = if pc.x() < nc.x() { p } else { next };
                    // The hole touches the outer segment
                    if x == hx {
                        return Some(candidate);
                    }
                    m = Some(candidate);
                }
            }
        }

        let mut m = m?;

        // Look for points inside the triangle of hole point, segment intersection and endpoint;
        // if there are none, the endpoint is visible. Otherwise pick the point with the minimum
        // angle to the ray.
        let stop = m;
        let mc = self.c(m);
        let (mx, my) = (mc.x(), mc.y());
        let mut tan_min = f64::INFINITY;

        let (t0, t2) = if hy < my {
            (Coords([hx, hy]), Coords([qx, hy]))
        } else {
            (Coords([qx, hy]), Coords([hx, hy]))
        };

        for p in self.iter_ring(stop) {
            let pc = self.c(p);
            if hx >= pc.x() && pc.x() >= mx && hx != pc.x() &&
                point_in_triangle(t0, mc, t2, pc) {
                let tan = (hy - pc.y()).abs() / (hx - pc.x());
                let current = self.c(m);
                if self.locally_inside(p, hole) &&
                    (tan < tan_min || (tan == tan_min && (pc.x() > current.x() || (pc.x() == current.x() && self.sector_contains_sector(m, p))))) {
                    m = p;
                    tan_min = tan;
                }
            }
        }

        Some(m)
    }

    /// Does the sector of `m` contain the sector of `p`?
    fn sector_contains_sector(&self, m: NodeIdx, p: NodeIdx) -> bool {
        area(self.c(self.prev(m)), self.c(m), self.c(self.prev(p))) < 0. &&
            area(self.c(self.next(p)), self.c(m), self.c(self.next(m))) < 0.
    }

    /// The vertex of the ring at `outer` closest to `hole`, earliest in ring order on ties
    pub fn nearest(&self, hole: NodeIdx, outer: NodeIdx) -> NodeIdx {
        let hc = self.c(hole);
        let distance = |p: NodeIdx| {
            let pc = self.c(p);
            let (dx, dy) = (pc.x() - hc.x(), pc.y() - hc.y());
            OrderedFloat(dx * dx + dy * dy)
        };

        let mut nearest = outer;
        let mut nearest_distance = distance(outer);
        for p in self.iter_ring(outer) {
            let d = distance(p);
            if d < nearest_distance {
                nearest = p;
                nearest_distance = d;
            }
        }
        nearest
    }
}
