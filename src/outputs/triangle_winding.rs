/// The order the vertices in an emitted triangle are listed in (y axis up)
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TriangleWinding {
    Counterclockwise,
    Clockwise,
}

