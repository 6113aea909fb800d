use crate::edge::Edge;
use crate::vertex::*;
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A triangle of the sweep. The corners are references into the vertex
/// arena, the circumcircle is fixed at construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Triangle {
    pub a: VertexIndex,
    pub b: VertexIndex,
    pub c: VertexIndex,
    /// Circumcenter x.
    pub x: f64,
    /// Circumcenter y.
    pub y: f64,
    /// Squared circumradius.
    pub r: f64,
}

impl Triangle {
    /// Build the triangle `(a, b, c)` and compute its circumcircle from the
    /// perpendicular bisectors of `ab` and `ac`.
    ///
    /// If the three points are collinear there is no circumcircle. Instead
    /// the circle around their bounding box is used: its center is the box
    /// center and its squared radius the squared half-diagonal. This is not
    /// a true circumcircle but it is what the sweep has always been fed for
    /// such triples.
    ///
    /// Panics if any index is out of bounds of `vertices`.
    pub fn new(vertices: &[Vertex], a: VertexIndex, b: VertexIndex, c: VertexIndex) -> Self {
        let (pa, pb, pc) = (vertices[a], vertices[b], vertices[c]);
        // Widened so products of coordinates near the super-triangle can't
        // overflow.
        let (ax, ay) = (i128::from(pa.x), i128::from(pa.y));
        let (bx, by) = (i128::from(pb.x), i128::from(pb.y));
        let (cx, cy) = (i128::from(pc.x), i128::from(pc.y));
        let ab_x = bx - ax;
        let ab_y = by - ay;
        let ac_x = cx - ax;
        let ac_y = cy - ay;
        let e = ab_x * (ax + bx) + ab_y * (ay + by);
        let f = ac_x * (ax + cx) + ac_y * (ay + cy);
        let g = 2 * (ab_x * (cy - by) - ab_y * (cx - bx));

        let (x, y, r) = if g == 0 {
            let min_x = pa.x.min(pb.x).min(pc.x) as f64;
            let min_y = pa.y.min(pb.y).min(pc.y) as f64;
            let half_w = (pa.x.max(pb.x).max(pc.x) as f64 - min_x) / 2.0;
            let half_h = (pa.y.max(pb.y).max(pc.y) as f64 - min_y) / 2.0;
            (
                min_x + half_w,
                min_y + half_h,
                half_w * half_w + half_h * half_h,
            )
        } else {
            let x = (ac_y * e - ab_y * f) as f64 / g as f64;
            let y = (ab_x * f - ac_x * e) as f64 / g as f64;
            (x, y, pa.distance_squared(x, y))
        };
        Self { a, b, c, x, y, r }
    }

    pub fn vertices(&self) -> [VertexIndex; 3] {
        [self.a, self.b, self.c]
    }

    pub fn circumcenter(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn contains_vertex(&self, index: VertexIndex) -> bool {
        self.a == index || self.b == index || self.c == index
    }

    /// Whether `vertex` lies inside or on the circumcircle. Uses the same
    /// floating point test as insertion.
    pub fn circumcircle_contains(&self, vertex: Vertex) -> bool {
        vertex.distance_squared(self.x, self.y) <= self.r
    }

    /// The three edges `ab`, `bc` and `ca` as consecutive pairs, each pair
    /// in canonical order.
    pub fn edges(&self, vertices: &[Vertex]) -> [VertexIndex; 6] {
        let [ab, bc, ca] = self.canonical_edges(vertices);
        [ab.a, ab.b, bc.a, bc.b, ca.a, ca.b]
    }

    pub fn canonical_edges(&self, vertices: &[Vertex]) -> [Edge; 3] {
        [
            Edge::canonical(vertices, self.a, self.b),
            Edge::canonical(vertices, self.b, self.c),
            Edge::canonical(vertices, self.c, self.a),
        ]
    }
}

impl Display for Triangle {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "A{:>4} B{:>4} C{:>4} X{:8.3} Y{:8.3} R{:8.3}",
            self.a, self.b, self.c, self.x, self.y, self.r
        )
    }
}
