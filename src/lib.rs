//! Links between map markers.
//!
//! The core is [`triangulate`], a Delaunay triangulation of integer points
//! built by a left to right sweep. Around it sit the pieces of the map
//! tool: finding portal markers in a screenshot ([`portals`]), decoding the
//! screenshot ([`raster`]) and drawing the resulting links ([`svg`]).
pub mod edge;
pub mod error;
pub mod links;
pub mod portals;
pub mod raster;
pub mod svg;
pub mod triangle;
pub mod triangulation;
pub mod vertex;

pub use edge::{dedupe, Edge};
pub use error::{Error, Result};
pub use links::Link;
pub use triangle::Triangle;
pub use triangulation::{triangulate, Triangulation, MAX_COORDINATE};
pub use vertex::{Vertex, VertexIndex};
