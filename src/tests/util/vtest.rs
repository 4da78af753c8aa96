use crate::inputs::Vertex;

/// A vertex type defined outside the crate's own implementations
#[derive(Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct VTest {
    x: f32,
    y: f32,
}

impl VTest {
    pub fn new(x: f32, y: f32) -> Self { VTest {x, y} }
}

impl std::fmt::Debug for VTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Vertex for VTest {
    type Coordinate = f32;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate { self.x }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate { self.y }
}

impl From<(f32, f32)> for VTest {
    fn from((x, y): (f32, f32)) -> Self {
        VTest::new(x, y)
    }
}
