use super::vtest::VTest;

/// Unit square, clockwise
pub fn square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (0.0, 1.0).into(),
        (1.0, 1.0).into(),
        (1.0, 0.0).into(),
    ]
}

/// Four-pointed star, counterclockwise
pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (-2.0, 2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (2.0, -2.0).into(),
    ]
}

pub fn half_frame() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (0.05, 0.05).into(), (0.95, 0.05).into(), (0.95, 0.95).into(), (1., 1.).into(), (1., 0.).into()
    ]
}

pub fn all() -> Vec<Vec<VTest>> {
    vec![square(), star(), half_frame()]
}

/// A 4x4 square with a 2x2 square hole in its center
pub fn square_with_hole() -> Vec<Vec<[i32; 2]>> {
    vec![
        vec![[0, 0], [4, 0], [4, 4], [0, 4]],
        vec![[1, 1], [1, 3], [3, 3], [3, 1]],
    ]
}

/// A regular `n`-gon of radius 100, counterclockwise
pub fn regular(n: usize) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
        let (y, x) = theta.sin_cos();
        [x * 100., y * 100.]
    }).collect()
}
