pub mod polygon;
pub mod random;
mod check;
mod vtest;

pub use check::{assert_counterclockwise, assert_indices_in_range, signed_area, triangles_area};
pub use vtest::VTest;
