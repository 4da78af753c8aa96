use std::{cmp, fmt};

/// A vertex position, converted to `f64` at ingestion.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct Coords(pub [f64; 2]);

impl Coords {
    #[inline(always)]
    pub fn x(&self) -> f64 { self.0[0] }
    #[inline(always)]
    pub fn y(&self) -> f64 { self.0[1] }
}

impl fmt::Debug for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Coords").field(&self.x()).field(&self.y()).finish()
    }
}

/// Twice the signed area of triangle `pqr`, negated: negative when `pqr` turns counterclockwise (y axis up).
#[inline(always)]
pub(crate) fn area(p: Coords, q: Coords, r: Coords) -> f64 {
    (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y())
}

#[inline(always)]
pub(crate) fn equals(p: Coords, q: Coords) -> bool {
    p.x() == q.x() && p.y() == q.y()
}

/// Is `p` inside or on the boundary of the counterclockwise triangle `abc`?
#[inline(always)]
pub(crate) fn point_in_triangle(a: Coords, b: Coords, c: Coords, p: Coords) -> bool {
    (c.x() - p.x()) * (a.y() - p.y()) >= (a.x() - p.x()) * (c.y() - p.y()) &&
    (a.x() - p.x()) * (b.y() - p.y()) >= (b.x() - p.x()) * (a.y() - p.y()) &&
    (b.x() - p.x()) * (c.y() - p.y()) >= (c.x() - p.x()) * (b.y() - p.y())
}

fn sign(v: f64) -> cmp::Ordering {
    v.partial_cmp(&0.).unwrap_or(cmp::Ordering::Equal)
}

/// For collinear `p`, `q`, `r`: does `q` lie on segment `pr`?
#[inline(always)]
fn on_segment(p: Coords, q: Coords, r: Coords) -> bool {
    q.x() <= p.x().max(r.x()) && q.x() >= p.x().min(r.x()) &&
    q.y() <= p.y().max(r.y()) && q.y() >= p.y().min(r.y())
}

/// Do segments `p1q1` and `p2q2` intersect (including touching)?
pub(crate) fn intersects(p1: Coords, q1: Coords, p2: Coords, q2: Coords) -> bool {
    use cmp::Ordering::Equal;

    let o1 = sign(area(p1, q1, p2));
    let o2 = sign(area(p1, q1, q2));
    let o3 = sign(area(p2, q2, p1));
    let o4 = sign(area(p2, q2, q1));

    (o1 != o2 && o3 != o4) ||
    (o1 == Equal && on_segment(p1, p2, q1)) ||
    (o2 == Equal && on_segment(p1, q2, q1)) ||
    (o3 == Equal && on_segment(p2, p1, q2)) ||
    (o4 == Equal && on_segment(p2, q1, q2))
}

/// Twice the signed area of a closed ring, positive when counterclockwise (y axis up).
pub(crate) fn ring_double_area(ring: impl ExactSizeIterator<Item=Coords> + Clone) -> f64 {
    let len = ring.len();
    if len == 0 {
        return 0.;
    }
    let prev = ring.clone().skip(len - 1).chain(ring.clone());
    ring.zip(prev)
        .map(|(c, p)| (p.x() - c.x()) * (c.y() + p.y()))
        .sum()
}
