//! Edges to draw. Unlike the sweep, which tells vertices apart by index,
//! drawing only cares where an edge is: two vertices at the same place give
//! one line.
use crate::triangulation::Triangulation;
use crate::vertex::Vertex;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A line between two map points, `from` preceding `to` in canonical order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Link {
    pub from: Vertex,
    pub to: Vertex,
}

impl Triangulation {
    /// Every distinct edge of the triangulation by coordinates, in the order
    /// the edges are first met.
    pub fn links(&self) -> Vec<Link> {
        let mut drawn = HashSet::with_capacity(self.len() * 2);
        let mut links = Vec::new();
        for edge in self.edges() {
            let (from, to) = edge.endpoints(self.vertices());
            let link = Link { from, to };
            if drawn.insert(link) {
                links.push(link);
            }
        }
        links
    }
}
