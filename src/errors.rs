use std::{error, fmt};

use backtrace::Backtrace;

/// Describes an error which prevented triangulation from running.
///
/// Malformed geometry (self-intersections, holes outside the outer ring, duplicate
/// points) is never reported here; it is absorbed by the triangulation itself.
#[derive(Debug)]
#[non_exhaustive]
pub enum TriangulationError {
    /// A flat coordinate buffer did not contain an even number of values
    OddCoordinateCount(usize),
    /// The rings contain more vertices than a `u32` index can address
    TooManyVertices(usize),
    /// The [Session](crate::Session) has already been triangulated
    AlreadyTriangulated(UsageError),
}

impl TriangulationError {
    #[cold]
    pub(crate) fn already_triangulated(msg: impl Into<String>) -> Self {
        Self::AlreadyTriangulated(UsageError::new(msg))
    }
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddCoordinateCount(count) => write!(f, "Ring buffer contains {} coordinates, expected an even count", count),
            Self::TooManyVertices(count) => write!(f, "Polygon contains {} vertices, more than a u32 index can address", count),
            Self::AlreadyTriangulated(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl error::Error for TriangulationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::AlreadyTriangulated(error) => Some(error),
            _ => None,
        }
    }
}

/// A session was used out of order. Carries the backtrace of the offending call.
#[derive(Debug)]
pub struct UsageError {
    pub msg: String,
    pub backtrace: Backtrace,
}

impl UsageError {
    #[cold]
    #[inline(always)]
    pub(crate) fn new(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            backtrace: Backtrace::new_unresolved(),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{:?}", self.msg, self.backtrace)
    }
}

impl error::Error for UsageError { }
