//! Edges of the sweep and the extraction of cavity boundaries.
use crate::vertex::*;

/// An undirected edge between two vertices of the arena.
///
/// Equality is identity equality on either orientation: `(a, b) == (b, a)`,
/// while two edges whose endpoints merely share coordinates are different
/// edges.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    pub a: VertexIndex,
    pub b: VertexIndex,
}

impl Edge {
    pub fn new(a: VertexIndex, b: VertexIndex) -> Self {
        Self { a, b }
    }

    /// The edge with its endpoints ordered by ascending x, then ascending y.
    pub fn canonical(vertices: &[Vertex], a: VertexIndex, b: VertexIndex) -> Self {
        if vertices[a].precedes(&vertices[b]) {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    pub fn endpoints(&self, vertices: &[Vertex]) -> (Vertex, Vertex) {
        (vertices[self.a], vertices[self.b])
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl Eq for Edge {}

/// Reduce the edges of a cavity to its boundary.
///
/// Working back from the last edge, every edge that has an equal edge earlier
/// in the list is removed together with the closest such edge. Edges shared
/// by two removed triangles cancel out; those left bound the cavity, in their
/// original relative order.
///
/// An edge present three or more times is only cancelled pairwise, so an odd
/// count leaves one copy behind. A clean cavity never produces that.
pub fn dedupe(edges: &mut Vec<Edge>) {
    let mut j = edges.len();
    while j > 0 {
        j -= 1;
        let edge = edges[j];
        if let Some(i) = edges[..j].iter().rposition(|other| *other == edge) {
            edges.remove(j);
            edges.remove(i);
            // Everything still to visit moved down by one.
            j -= 1;
        }
    }
}
