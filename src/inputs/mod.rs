mod polygon_list;
pub use polygon_list::{PolygonList, Triangulate};
mod ring;
pub use ring::Ring;
mod vertex;
pub use vertex::Vertex;
pub(crate) use vertex::VertexExt;
