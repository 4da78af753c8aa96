use std::ops;

use crate::{idx::{Idx, VecExt}, math::{self, Coords, area, equals}};

pub(crate) type NodeIdx = Idx<Node>;

/// A vertex in a circular doubly linked ring.
///
/// Removed nodes keep their links, so a caller holding a removed node can still step to
/// its former neighbours.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    /// Index of the vertex in the caller's buffer
    pub vi: u32,
    pub c: Coords,
    pub prev: NodeIdx,
    pub next: NodeIdx,
    /// z-order curve key, computed once on first indexing
    pub z: Option<u32>,
    pub prev_z: Option<NodeIdx>,
    pub next_z: Option<NodeIdx>,
    /// Single-point holes are never filtered away
    pub steiner: bool,
}

impl Node {
    fn new(vi: u32, c: Coords, ni: NodeIdx) -> Self {
        Self {
            vi,
            c,
            prev: ni,
            next: ni,
            z: None,
            prev_z: None,
            next_z: None,
            steiner: false,
        }
    }
}

/// Owns every node of a triangulation. Nodes are never freed until the arena is dropped.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl ops::Index<NodeIdx> for NodeArena {
    type Output = Node;

    #[inline(always)]
    fn index(&self, index: NodeIdx) -> &Self::Output {
        &self.nodes[index]
    }
}

impl ops::IndexMut<NodeIdx> for NodeArena {
    #[inline(always)]
    fn index_mut(&mut self, index: NodeIdx) -> &mut Self::Output {
        &mut self.nodes[index]
    }
}

impl NodeArena {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    #[inline(always)]
    pub fn c(&self, ni: NodeIdx) -> Coords {
        self[ni].c
    }

    #[inline(always)]
    pub fn next(&self, ni: NodeIdx) -> NodeIdx {
        self[ni].next
    }

    #[inline(always)]
    pub fn prev(&self, ni: NodeIdx) -> NodeIdx {
        self[ni].prev
    }

    /// Twice the (negated) signed area of the corner at `ni`, see [math::area]
    #[inline(always)]
    pub fn corner_area(&self, ni: NodeIdx) -> f64 {
        area(self.c(self.prev(ni)), self.c(ni), self.c(self.next(ni)))
    }

    /// Creates a node after `last`, or a new single-node ring if `last` is `None`.
    pub fn insert(&mut self, vi: u32, c: Coords, last: Option<NodeIdx>) -> NodeIdx {
        let ni = self.nodes.next_index();
        let ni = self.nodes.push_get_index(Node::new(vi, c, ni));

        if let Some(last) = last {
            let last_next = self[last].next;
            self[ni].next = last_next;
            self[ni].prev = last;
            self[last_next].prev = ni;
            self[last].next = ni;
        }
        ni
    }

    /// Unlinks `ni` from its ring and from the z-order list.
    pub fn remove(&mut self, ni: NodeIdx) {
        let Node { prev, next, prev_z, next_z, .. } = self[ni];

        self[next].prev = prev;
        self[prev].next = next;

        if let Some(prev_z) = prev_z {
            self[prev_z].next_z = next_z;
        }
        if let Some(next_z) = next_z {
            self[next_z].prev_z = prev_z;
        }
    }

    /// Splits the ring along the diagonal `a`-`b` into two rings, duplicating both endpoints.
    ///
    /// `a` stays in the ring `a -> b -> ...`; the returned node (the copy of `b`) belongs to the
    /// other ring. If `a` and `b` are in different rings, the rings are joined instead.
    pub fn split(&mut self, a: NodeIdx, b: NodeIdx) -> NodeIdx {
        let a2 = self.nodes.next_index();
        let a2 = self.nodes.push_get_index(Node::new(self[a].vi, self[a].c, a2));
        let b2 = self.nodes.next_index();
        let b2 = self.nodes.push_get_index(Node::new(self[b].vi, self[b].c, b2));

        let an = self[a].next;
        let bp = self[b].prev;

        self[a].next = b;
        self[b].prev = a;

        self[a2].next = an;
        self[an].prev = a2;

        self[b2].next = a2;
        self[a2].prev = b2;

        self[bp].next = b2;
        self[b2].prev = bp;

        b2
    }

    /// Removes duplicate and collinear points between `start` and `end` (the whole ring if `end` is `None`).
    /// Returns a node which is still in the ring.
    pub fn filter_points(&mut self, start: NodeIdx, end: Option<NodeIdx>) -> NodeIdx {
        let mut end = end.unwrap_or(start);
        let mut p = start;

        loop {
            let next = self.next(p);
            let again = if !self[p].steiner && (equals(self.c(p), self.c(next)) || self.corner_area(p) == 0.) {
                self.remove(p);
                p = self.prev(p);
                end = p;
                if p == self.next(p) {
                    break;
                }
                true
            } else {
                p = next;
                false
            };

            if !again && p == end {
                break;
            }
        }

        end
    }

    /// The node with the smallest x, ties broken by smallest y
    pub fn leftmost(&self, start: NodeIdx) -> NodeIdx {
        let mut leftmost = start;
        for p in self.iter_ring(start) {
            let (pc, lc) = (self.c(p), self.c(leftmost));
            if pc.x() < lc.x() || (pc.x() == lc.x() && pc.y() < lc.y()) {
                leftmost = p;
            }
        }
        leftmost
    }

    /// Iterates the ring once, beginning at `start`
    pub fn iter_ring(&self, start: NodeIdx) -> RingIter<'_> {
        RingIter { arena: self, start, next: Some(start) }
    }

    pub fn ring_len(&self, start: NodeIdx) -> usize {
        self.iter_ring(start).count()
    }

    /// Is the diagonal `a`-`b` locally inside the polygon at `a`?
    pub fn locally_inside(&self, a: NodeIdx, b: NodeIdx) -> bool {
        let (ac, bc) = (self.c(a), self.c(b));
        let (prev, next) = (self.c(self.prev(a)), self.c(self.next(a)));
        if area(prev, ac, next) < 0. {
            area(ac, bc, next) >= 0. && area(ac, prev, bc) >= 0.
        } else {
            area(ac, bc, prev) < 0. || area(ac, next, bc) < 0.
        }
    }

    /// Is the midpoint of the diagonal `a`-`b` inside the polygon (even-odd rule)?
    pub fn middle_inside(&self, a: NodeIdx, b: NodeIdx) -> bool {
        let (ac, bc) = (self.c(a), self.c(b));
        let px = (ac.x() + bc.x()) / 2.;
        let py = (ac.y() + bc.y()) / 2.;

        let mut inside = false;
        for p in self.iter_ring(a) {
            let pc = self.c(p);
            let nc = self.c(self.next(p));
            if ((pc.y() > py) != (nc.y() > py)) && nc.y() != pc.y() &&
                (px < (nc.x() - pc.x()) * (py - pc.y()) / (nc.y() - pc.y()) + pc.x()) {
                inside = !inside;
            }
        }
        inside
    }

    /// Does the diagonal `a`-`b` cross any edge of the ring which does not touch `a` or `b`?
    pub fn intersects_polygon(&self, a: NodeIdx, b: NodeIdx) -> bool {
        let (avi, bvi) = (self[a].vi, self[b].vi);
        self.iter_ring(a).any(|p| {
            let next = self.next(p);
            let (pvi, nvi) = (self[p].vi, self[next].vi);
            pvi != avi && nvi != avi && pvi != bvi && nvi != bvi &&
                math::intersects(self.c(p), self.c(next), self.c(a), self.c(b))
        })
    }

    /// Can the ring be split along `a`-`b` without creating crossings or inverted sectors?
    pub fn is_valid_diagonal(&self, a: NodeIdx, b: NodeIdx) -> bool {
        let (a_prev, a_next) = (self.prev(a), self.next(a));
        let (b_prev, b_next) = (self.prev(b), self.next(b));
        let (ac, bc) = (self.c(a), self.c(b));

        self[a_next].vi != self[b].vi && self[a_prev].vi != self[b].vi &&
            !self.intersects_polygon(a, b) &&
            (
                // Locally visible, without opposite-facing sectors
                (self.locally_inside(a, b) && self.locally_inside(b, a) && self.middle_inside(a, b) &&
                    (area(self.c(a_prev), ac, self.c(b_prev)) != 0. || area(ac, self.c(b_prev), bc) != 0.)) ||
                // Zero-length diagonal between two convex corners
                (equals(ac, bc) &&
                    area(self.c(a_prev), ac, self.c(a_next)) > 0. &&
                    area(self.c(b_prev), bc, self.c(b_next)) > 0.)
            )
    }
}

pub(crate) struct RingIter<'a> {
    arena: &'a NodeArena,
    start: NodeIdx,
    next: Option<NodeIdx>,
}

impl<'a> Iterator for RingIter<'a> {
    type Item = NodeIdx;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let next = self.arena.next(current);
        self.next = if next == self.start { None } else { Some(next) };
        Some(current)
    }
}
