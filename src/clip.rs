use crate::{List, earcut::{EarcutState, Pass}, linked::{NodeArena, NodeIdx}, math::{self, area, equals, point_in_triangle}};

impl NodeArena {
    /// Is `ear` a convex corner whose triangle contains no other reflex or collinear vertex of the ring?
    pub fn is_ear(&self, ear: NodeIdx) -> bool {
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

        let mut p = self.next(c);
        while p != a {
            let pc = self.c(p);
            if pc.x() >= x0 && pc.x() <= x1 && pc.y() >= y0 && pc.y() <= y1 &&
                point_in_triangle(ac, bc, cc, pc) &&
                self.corner_area(p) >= 0. {
                return false;
            }
            p = self.next(p);
        }
        true
    }
}

impl<'c, L: List<u32>> EarcutState<'c, L> {
    /// Counts a step which clipped nothing. Returns `true` once the steps since the last
    /// emitted triangle exceed `lap_factor` times the ring length at which the stall began.
    ///
    /// The count carries over from one fallback pass to the next, so `lap_factor` is the
    /// number of laps the ladder may spend before forced emission.
    fn stall(&mut self, remaining: usize) -> bool {
        if self.stalled == 0 {
            self.stall_limit = self.config.lap_factor.saturating_mul(remaining);
        }
        self.stalled += 1;
        self.stalled > self.stall_limit
    }

    fn is_ear(&self, ear: NodeIdx) -> bool {
        match self.frame {
            Some(frame) => self.arena.is_ear_hashed(ear, frame),
            None => self.arena.is_ear(ear),
        }
    }

    /// Clips ears off the ring at `ear` until at most two nodes remain, falling back to the
    /// next [Pass] whenever a full lap finds no ear.
    pub(crate) fn earcut_linked(&mut self, mut ear: NodeIdx, pass: Pass) {
        if pass == Pass::Initial {
            // Split halves are smaller than the stalled ring, so each starts with a fresh budget
            self.stalled = 0;
            if let Some(frame) = self.frame {
                self.arena.index_curve(ear, frame);
            }
        }

        let mut stop = ear;
        let mut remaining = self.arena.ring_len(ear);

        while self.arena.prev(ear) != self.arena.next(ear) {
            let prev = self.arena.prev(ear);
            let next = self.arena.next(ear);

            if self.is_ear(ear) {
                self.emit(prev, ear, next);
                self.arena.remove(ear);
                remaining -= 1;

                // Skipping the next vertex leads to less sliver triangles
                ear = self.arena.next(next);
                stop = ear;
                continue;
            }

            ear = next;

            if self.stall(remaining) {
                log::warn!("no ear found within {} steps on a ring of {} vertices, forcing emission", self.stalled, remaining);
                self.force_emit(ear);
                return;
            }

            // A whole lap without an ear
            if ear == stop {
                #[cfg(feature = "debugging")]
                self.output_svg("stuck", ear, crate::debug::svg::SvgOutputLevel::AllSteps);

                match pass {
                    Pass::Initial => {
                        log::debug!("no ear on a ring of {} vertices, filtering points", remaining);
                        let ear = self.arena.filter_points(ear, None);
                        self.earcut_linked(ear, Pass::Filtered);
                    }
                    Pass::Filtered => {
                        log::debug!("no ear on a filtered ring of {} vertices, curing local intersections", remaining);
                        let ear = self.arena.filter_points(ear, None);
                        let ear = self.cure_local_intersections(ear);
                        self.earcut_linked(ear, Pass::Cured);
                    }
                    Pass::Cured => {
                        log::debug!("no ear on a cured ring of {} vertices, splitting", remaining);
                        self.split_earcut(ear);
                    }
                }
                return;
            }
        }
    }

    /// Cuts off triangles where two consecutive edges cross (`a-p` and `p.next-b`), removing both inner nodes.
    fn cure_local_intersections(&mut self, mut start: NodeIdx) -> NodeIdx {
        let mut p = start;
        loop {
            let a = self.arena.prev(p);
            let p_next = self.arena.next(p);
            let b = self.arena.next(p_next);

            if !equals(self.arena.c(a), self.arena.c(b)) &&
                math::intersects(self.arena.c(a), self.arena.c(p), self.arena.c(p_next), self.arena.c(b)) &&
                self.arena.locally_inside(a, b) &&
                self.arena.locally_inside(b, a) {
                self.emit(a, p, b);

                self.arena.remove(p);
                self.arena.remove(p_next);

                p = b;
                start = b;
            }

            p = self.arena.next(p);
            if p == start {
                break;
            }
        }

        self.arena.filter_points(p, None)
    }

    /// Splits the ring along the first valid diagonal, scanning from its leftmost vertex, and
    /// clips both halves. Falls back to forced emission if the ring has no valid diagonal.
    fn split_earcut(&mut self, start: NodeIdx) {
        let start = self.arena.leftmost(start);
        let mut a = start;
        loop {
            let mut b = self.arena.next(self.arena.next(a));
            while b != self.arena.prev(a) {
                if self.arena[a].vi != self.arena[b].vi && self.arena.is_valid_diagonal(a, b) {
                    let c = self.arena.split(a, b);

                    let a_next = self.arena.next(a);
                    let a = self.arena.filter_points(a, Some(a_next));
                    let c_next = self.arena.next(c);
                    let c = self.arena.filter_points(c, Some(c_next));

                    self.earcut_linked(a, Pass::Initial);
                    self.earcut_linked(c, Pass::Initial);
                    return;
                }
                b = self.arena.next(b);
            }

            a = self.arena.next(a);
            if a == start {
                break;
            }
        }

        log::warn!("no valid diagonal on a ring of {} vertices, forcing emission", self.arena.ring_len(start));
        self.force_emit(start);
    }

    /// Emits the remaining ring without checking that triangles are empty, preferring convex corners.
    /// Once no convex corner is left, the rest of the ring is dropped without emitting, so every
    /// triangle keeps the output winding.
    fn force_emit(&mut self, start: NodeIdx) {
        let mut p = start;
        while self.arena.prev(p) != self.arena.next(p) {
            let candidate = self.arena.iter_ring(p)
                .find(|&q| self.arena.corner_area(q) < 0.)
                .unwrap_or(p);

            let prev = self.arena.prev(candidate);
            let next = self.arena.next(candidate);
            if self.arena.corner_area(candidate) < 0. {
                self.emit(prev, candidate, next);
            }
            self.arena.remove(candidate);
            p = next;
        }
    }
}
