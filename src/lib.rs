//! Ear-clipping triangulation of polygons with holes.
//!
//! The first ring of a polygon is its outer boundary, every following ring is a hole.
//! Triangles are returned as indices into the concatenation of all rings. Geometry which
//! is degenerate or self-intersecting never fails; it is triangulated as well as possible.
//!
//! ```
//! use earclip::Triangulate;
//!
//! let polygon = vec![
//!     vec![[0, 0], [4, 0], [4, 4], [0, 4]],
//!     vec![[1, 1], [1, 3], [3, 3], [3, 1]],
//! ];
//! let indices = polygon.triangulate()?;
//! assert_eq!(indices.len(), 8 * 3);
//! # Ok::<(), earclip::TriangulationError>(())
//! ```

mod idx;
mod math;
mod errors;
mod config;
mod inputs;
mod outputs;
mod linked;
mod ingest;
mod bridge;
mod zorder;
mod clip;
mod earcut;
mod emit;
mod quality;
mod session;

#[cfg(feature = "ffi")]
pub mod ffi;

#[cfg(feature = "debugging")]
mod debug;

#[cfg(any(test, feature = "benchmarking"))]
pub mod tests;

pub use errors::{TriangulationError, UsageError};
pub use config::TriangulationConfig;
pub use inputs::*;
pub use outputs::*;
pub use quality::deviation;
pub use session::Session;
