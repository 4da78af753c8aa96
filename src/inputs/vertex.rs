use std::fmt::Debug;

use num_traits::ToPrimitive;

use crate::math::Coords;

/// A two-dimensional point.
///
/// The coordinate type must implement [num_traits::ToPrimitive]; all geometry is
/// evaluated in `f64`.
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: ToPrimitive;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;
}

pub(crate) trait VertexExt: Vertex {
    fn coords(&self) -> Coords {
        // Unrepresentable coordinates become NaN, which the clipper tolerates
        let x = self.x().to_f64().unwrap_or(f64::NAN);
        let y = self.y().to_f64().unwrap_or(f64::NAN);
        Coords([x, y])
    }
}

impl<V: Vertex + ?Sized> VertexExt for V { }

impl<C: Debug + Copy + ToPrimitive> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Copy + ToPrimitive> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}
