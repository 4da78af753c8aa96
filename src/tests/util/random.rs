use rand::{Rng, SeedableRng, rngs::StdRng};

/// A random star-shaped (and so simple) counterclockwise ring of `n` vertices around the
/// origin, with radii between 50 and 100.
pub fn star_polygon(rng: &mut impl Rng, n: usize) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = (i as f64 + rng.gen_range(0.1..0.9)) * std::f64::consts::PI * 2. / (n as f64);
        let r = rng.gen_range(50.0..100.0);
        let (y, x) = theta.sin_cos();
        [x * r, y * r]
    }).collect()
}

/// A regular clockwise ring of `n` vertices with radius 10 around the origin, which fits
/// inside any [star_polygon].
pub fn center_hole(n: usize) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = -(i as f64) * std::f64::consts::PI * 2. / (n as f64);
        let (y, x) = theta.sin_cos();
        [x * 10., y * 10.]
    }).collect()
}

/// `count` random polygons of 16 to `max_len` vertices, each with a center hole if `holes`.
pub fn polygons(seed: u64, count: usize, max_len: usize, holes: bool) -> Vec<Vec<Vec<[f64; 2]>>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| {
        let n = rng.gen_range(16..=max_len.max(16));
        let mut polygon = vec![star_polygon(&mut rng, n)];
        if holes {
            let m = rng.gen_range(3..=12);
            polygon.push(center_hole(m));
        }
        polygon
    }).collect()
}

/// `count` rings of 50 to `max_len` vertices scattered uniformly over a 100 by 100 box.
/// Their edges cross each other almost everywhere.
pub fn tangled_rings(seed: u64, count: usize, max_len: usize) -> Vec<Vec<[f64; 2]>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| {
        let n = rng.gen_range(50..=max_len.max(50));
        (0..n).map(|_| [rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)]).collect()
    }).collect()
}
