//! Delaunay triangulation of integer points by a left to right sweep.
//!
//! Vertices are inserted in ascending x. Every inserted vertex removes the
//! triangles whose circumcircle contains it and fills the cavity with a fan
//! of new triangles. A triangle whose circumcircle lies entirely to the left
//! of the current vertex can never be touched again, so it is closed and no
//! longer tested.
use crate::edge::{dedupe, Edge};
use crate::error::{Error, Result};
use crate::triangle::Triangle;
use crate::vertex::*;
use log::{debug, trace};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use slab::Slab;

/// How far the super-triangle reaches past the input, in multiples of the
/// larger side of the bounding box.
const SUPER_TRIANGLE_SCALE: i64 = 20;

/// Largest coordinate magnitude [`triangulate`] accepts. Covers every `i32`
/// and `u32`, and keeps the super-triangle and the circumcircle products of
/// its corners within `i64` and `i128`.
pub const MAX_COORDINATE: i64 = 1 << 32;

/// The result of [`triangulate`]. Owns the vertex arena the triangles index
/// into.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Triangulation {
    /// The input in input order, followed by the super-triangle's corners
    /// when a sweep took place.
    vertices: Vec<Vertex>,
    n_input: usize,
    triangles: Vec<Triangle>,
}

impl Triangulation {
    /// The input vertices. Triangle indices point into this slice.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices[..self.n_input]
    }

    pub fn vertex(&self, index: VertexIndex) -> Vertex {
        self.vertices()[index]
    }

    /// The corners of the bootstrap triangle, empty if there were too few
    /// vertices to triangulate.
    pub fn super_vertices(&self) -> &[Vertex] {
        &self.vertices[self.n_input..]
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// True when no triangle was produced, which is always the case for
    /// fewer than three vertices.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn points(&self, triangle: &Triangle) -> [Vertex; 3] {
        let vertices = self.vertices();
        [
            vertices[triangle.a],
            vertices[triangle.b],
            vertices[triangle.c],
        ]
    }

    /// Every triangle edge in canonical form, in triangle order. Edges shared
    /// by two triangles appear twice.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.triangles
            .iter()
            .flat_map(move |t| t.canonical_edges(self.vertices()))
    }

    /// Check the result with exact predicates. Returns `(triangle, vertex)`
    /// for every input vertex strictly inside the circumcircle of a triangle
    /// it is not a corner of. Zero-area triangles have no circumcircle and
    /// are skipped.
    pub fn delaunay_violations(&self) -> Vec<(usize, VertexIndex)> {
        let vertices = self.vertices();
        let mut violations = Vec::new();
        for (n, triangle) in self.triangles.iter().enumerate() {
            let [pa, mut pb, mut pc] = self.points(triangle);
            let orientation = robust::orient2d(pa.into(), pb.into(), pc.into());
            if orientation == 0.0 {
                continue;
            }
            if orientation < 0.0 {
                std::mem::swap(&mut pb, &mut pc);
            }
            for (i, vertex) in vertices.iter().enumerate() {
                if triangle.contains_vertex(i) {
                    continue;
                }
                if robust::incircle(pa.into(), pb.into(), pc.into(), (*vertex).into()) > 0.0 {
                    violations.push((n, i));
                }
            }
        }
        violations
    }
}

#[cfg(feature = "serialize")]
impl Triangulation {
    pub fn debug_table(&self) -> String {
        use prettytable::{Cell, Row, Table};
        let mut table = Table::new();
        let mut headers = Row::empty();
        for name in ["-", "A", "B", "C", "X", "Y", "R"] {
            headers.add_cell(Cell::new(name));
        }
        table.add_row(headers);
        for (i, triangle) in self.triangles.iter().enumerate() {
            let mut row = Row::empty();
            row.add_cell(Cell::new(&format!("T{}", i)));
            for p in self.points(triangle) {
                row.add_cell(Cell::new(&format!("{}", p)));
            }
            row.add_cell(Cell::new(&format!("{:.3}", triangle.x)));
            row.add_cell(Cell::new(&format!("{:.3}", triangle.y)));
            row.add_cell(Cell::new(&format!("{:.3}", triangle.r)));
            table.add_row(row);
        }
        table.to_string()
    }
}

/// Corners of a triangle whose circumcircle contains the whole bounding box.
fn super_vertices(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> [Vertex; 3] {
    let d_max = (x_max - x_min).max(y_max - y_min);
    let x_mid = (x_max + x_min) / 2;
    let y_mid = (y_max + y_min) / 2;
    [
        Vertex::new(x_mid - SUPER_TRIANGLE_SCALE * d_max, y_mid - d_max),
        Vertex::new(x_mid, y_max + SUPER_TRIANGLE_SCALE * d_max),
        Vertex::new(x_mid + SUPER_TRIANGLE_SCALE * d_max, y_mid - d_max),
    ]
}

/// Triangulate `input`.
///
/// Vertices are identified by their position in `input`: duplicated
/// coordinates are separate vertices. With fewer than three vertices the
/// result is empty. The order of the returned triangles, and which corner is
/// `a`, `b` or `c`, is not meaningful.
///
/// Fails with [`Error::CoordinateOutOfRange`] if a coordinate lies beyond
/// ±[`MAX_COORDINATE`].
pub fn triangulate(input: &[Vertex]) -> Result<Triangulation> {
    if let Some(index) = input
        .iter()
        .position(|v| v.x.unsigned_abs().max(v.y.unsigned_abs()) > MAX_COORDINATE as u64)
    {
        return Err(Error::CoordinateOutOfRange {
            index,
            vertex: input[index],
            limit: MAX_COORDINATE,
        });
    }
    let mut vertices = input.to_vec();
    let n_input = vertices.len();
    if n_input < 3 {
        debug!("{} vertices, nothing to triangulate", n_input);
        return Ok(Triangulation {
            vertices,
            n_input,
            triangles: Vec::new(),
        });
    }

    // Descending x, walked from the back.
    let mut order: Vec<VertexIndex> = (0..n_input).collect();
    order.sort_unstable_by(|&i, &j| vertices[j].x.cmp(&vertices[i].x));
    let leftmost = vertices[order[n_input - 1]];
    let x_min = leftmost.x;
    let x_max = vertices[order[0]].x;
    let (y_min, y_max) = vertices
        .iter()
        .fold((leftmost.y, leftmost.y), |(lo, hi), v| (lo.min(v.y), hi.max(v.y)));

    let first_super = n_input;
    vertices.extend_from_slice(&super_vertices(x_min, x_max, y_min, y_max));
    let super_triangle = Triangle::new(&vertices, first_super, first_super + 1, first_super + 2);
    debug!(
        "triangulating {} vertices, super-triangle {}",
        n_input, super_triangle
    );

    let mut open: Slab<Triangle> = Slab::with_capacity(n_input);
    open.insert(super_triangle);
    let mut closed: Vec<Triangle> = Vec::with_capacity(n_input);
    let mut cavity: Vec<Edge> = Vec::with_capacity(n_input * 6);

    for &i in order.iter().rev() {
        let vertex = vertices[i];
        cavity.clear();
        open.retain(|_, t| {
            let dx = vertex.x as f64 - t.x;
            if dx > 0.0 && dx * dx > t.r {
                // Nothing right of this vertex can reach the circumcircle.
                closed.push(*t);
                return false;
            }
            let dy = vertex.y as f64 - t.y;
            if dx * dx + dy * dy > t.r {
                return true;
            }
            cavity.extend(t.canonical_edges(&vertices));
            false
        });
        dedupe(&mut cavity);
        trace!(
            "vertex {} {}: {} boundary edges, {} open, {} closed",
            i,
            vertex,
            cavity.len(),
            open.len(),
            closed.len()
        );
        for edge in cavity.iter().rev() {
            open.insert(Triangle::new(&vertices, edge.a, edge.b, i));
        }
    }

    closed.extend(open.drain());
    closed.retain(|t| t.vertices().iter().all(|&k| k < first_super));
    debug!("{} triangles", closed.len());

    Ok(Triangulation {
        vertices,
        n_input,
        triangles: closed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn vertices(points: &[(i64, i64)]) -> Vec<Vertex> {
        points.iter().copied().map(Vertex::from).collect()
    }

    /// The triangles as sets of corner coordinates, so results can be
    /// compared without depending on output order.
    fn shapes(triangulation: &Triangulation) -> BTreeSet<[Vertex; 3]> {
        triangulation
            .triangles()
            .iter()
            .map(|t| {
                let mut points = triangulation.points(t);
                points.sort();
                points
            })
            .collect()
    }

    fn shape(points: [(i64, i64); 3]) -> [Vertex; 3] {
        let mut shape = points.map(Vertex::from);
        shape.sort();
        shape
    }

    #[test]
    fn single_triangle() {
        let t = triangulate(&vertices(&[(3, 0), (5, 5), (0, 2)])).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(shapes(&t), BTreeSet::from([shape([(0, 2), (3, 0), (5, 5)])]));
        let triangle = t.triangles()[0];
        assert!((triangle.x - 107.0 / 38.0).abs() < 1e-9);
        assert!((triangle.y - 113.0 / 38.0).abs() < 1e-9);
    }

    #[test]
    fn two_triangles() {
        let t = triangulate(&vertices(&[(3, 0), (5, 5), (0, 2), (-1, -4)])).unwrap();
        assert_eq!(
            shapes(&t),
            BTreeSet::from([
                shape([(-1, -4), (0, 2), (3, 0)]),
                shape([(0, 2), (3, 0), (5, 5)]),
            ])
        );
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn three_triangles() {
        let t = triangulate(&vertices(&[(3, 0), (5, 5), (0, 2), (-1, -4), (1, 4)])).unwrap();
        assert_eq!(
            shapes(&t),
            BTreeSet::from([
                shape([(-1, -4), (0, 2), (3, 0)]),
                shape([(0, 2), (1, 4), (3, 0)]),
                shape([(1, 4), (3, 0), (5, 5)]),
            ])
        );
        assert_eq!(t.len(), 3);
        assert!(t.delaunay_violations().is_empty());
    }

    #[test]
    fn too_few_vertices() {
        let t = triangulate(&vertices(&[(0, 0), (1, 1)])).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.vertices().len(), 2);
        assert!(t.super_vertices().is_empty());
        assert!(triangulate(&[]).unwrap().is_empty());
    }

    /// Every triangle built on a line of vertices leans on a super-triangle
    /// corner, so nothing is left once those are stripped.
    #[test]
    fn collinear_vertices() {
        for points in [
            &[(0, 0), (1, 1), (2, 2)][..],
            &[(0, 0), (1, 0), (2, 0)],
            &[(0, 0), (0, 1), (0, 2)],
            &[(-5, -5), (0, 0), (5, 5), (10, 10)],
        ] {
            let t = triangulate(&vertices(points)).unwrap();
            assert!(t.is_empty(), "{:?}", points);
            assert_eq!(t.super_vertices().len(), 3);
        }
    }

    /// Vertices sharing coordinates are different vertices and both take
    /// part in the triangulation.
    #[test]
    fn duplicate_coordinates() {
        let t = triangulate(&vertices(&[(0, 0), (4, 0), (0, 4), (4, 4), (0, 0)])).unwrap();
        assert_eq!(t.len(), 3);
        for triangle in t.triangles() {
            let [a, b, c] = triangle.vertices();
            assert!(a != b && b != c && a != c);
        }
        assert!(t
            .triangles()
            .iter()
            .any(|tri| tri.contains_vertex(0) && tri.contains_vertex(4)));
    }

    #[test]
    fn super_vertices_enclose() {
        let [a, b, c] = super_vertices(-1, 5, -4, 5);
        assert_eq!(a, Vertex::new(2 - 180, -9));
        assert_eq!(b, Vertex::new(2, 185));
        assert_eq!(c, Vertex::new(2 + 180, -9));
        let all = [a, b, c];
        let st = Triangle::new(&all, 0, 1, 2);
        for p in vertices(&[(-1, -4), (5, 5), (-1, 5), (5, -4)]) {
            assert!(st.circumcircle_contains(p));
        }
    }

    #[test]
    fn square_grid() {
        let mut points = Vec::new();
        for x in 0..6 {
            for y in 0..6 {
                points.push(Vertex::new(x * 10, y * 10));
            }
        }
        let t = triangulate(&points).unwrap();
        // 5x5 cells, two triangles each.
        assert_eq!(t.len(), 50);
        assert!(t.delaunay_violations().is_empty());
    }

    #[test]
    fn extreme_coordinates() {
        let m = MAX_COORDINATE;
        let t = triangulate(&vertices(&[(-m, -m), (m, -m), (0, m), (1, 1)])).unwrap();
        assert_eq!(t.len(), 3);
        assert!(t.triangles().iter().all(|tri| tri.contains_vertex(3)));
        assert!(t.delaunay_violations().is_empty());

        let corners = [i32::MIN, i32::MAX].map(i64::from);
        let t = triangulate(&vertices(&[
            (corners[0], corners[0]),
            (corners[1], corners[0]),
            (0, corners[1]),
        ]))
        .unwrap();
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn coordinates_out_of_range() {
        let far = vertices(&[(0, 0), (1 << 60, 0), (0, 1 << 60)]);
        match triangulate(&far) {
            Err(Error::CoordinateOutOfRange { index, vertex, limit }) => {
                assert_eq!(index, 1);
                assert_eq!(vertex, Vertex::new(1 << 60, 0));
                assert_eq!(limit, MAX_COORDINATE);
            }
            other => panic!("expected a range error, got {:?}", other),
        }
        assert!(triangulate(&vertices(&[(0, i64::MIN)])).is_err());
        assert!(triangulate(&vertices(&[(MAX_COORDINATE + 1, 0), (0, 0), (1, 1)])).is_err());
    }

    fn audited(points: &[(i64, i64)], corners: &[[VertexIndex; 3]]) -> Triangulation {
        let vertices = vertices(points);
        let triangles = corners
            .iter()
            .map(|&[a, b, c]| Triangle::new(&vertices, a, b, c))
            .collect();
        Triangulation {
            n_input: vertices.len(),
            vertices,
            triangles,
        }
    }

    #[test]
    fn violation_found_in_either_winding() {
        let points = [(0, 0), (10, 0), (0, 10), (3, 3), (20, 20)];
        let ccw = audited(&points, &[[0, 1, 2]]);
        assert_eq!(ccw.delaunay_violations(), vec![(0, 3)]);
        let cw = audited(&points, &[[0, 2, 1]]);
        assert_eq!(cw.delaunay_violations(), vec![(0, 3)]);
    }

    #[test]
    fn zero_area_triangles_not_audited() {
        // (3, 1) lies inside the bounding-box circle of the flat triangle.
        let points = [(0, 0), (10, 0), (0, 10), (3, 3), (20, 0), (3, 1)];
        let t = audited(&points, &[[0, 1, 4], [0, 1, 2], [1, 4, 0]]);
        assert!(t.triangles()[0].circumcircle_contains(t.vertex(5)));
        assert_eq!(t.delaunay_violations(), vec![(1, 3), (1, 5)]);
    }

    fn distinct(points: Vec<Vertex>) -> Vec<Vertex> {
        let mut seen = BTreeSet::new();
        points.into_iter().filter(|p| seen.insert(*p)).collect()
    }

    #[quickcheck_macros::quickcheck]
    fn corners_are_distinct_input_vertices(points: Vec<Vertex>) -> bool {
        let t = triangulate(&points).unwrap();
        t.triangles().iter().all(|triangle| {
            let [a, b, c] = triangle.vertices();
            a != b && b != c && a != c && [a, b, c].iter().all(|&i| i < points.len())
        })
    }

    #[quickcheck_macros::quickcheck]
    fn empty_circumcircles(points: Vec<Vertex>) -> bool {
        let points = distinct(points);
        let t = triangulate(&points).unwrap();
        let float_check = t.triangles().iter().all(|triangle| {
            points.iter().enumerate().all(|(i, p)| {
                triangle.contains_vertex(i)
                    || p.distance_squared(triangle.x, triangle.y)
                        >= triangle.r - 1e-9 * (1.0 + triangle.r)
            })
        });
        float_check && t.delaunay_violations().is_empty()
    }

    #[quickcheck_macros::quickcheck]
    fn framed_points_triangulate(points: Vec<Vertex>) -> bool {
        let mut framed = vec![
            Vertex::new(SafeCoord::MIN.0, SafeCoord::MIN.0),
            Vertex::new(SafeCoord::MAX.0, SafeCoord::MIN.0),
            Vertex::new(0, SafeCoord::MAX.0),
        ];
        framed.extend(points);
        !triangulate(&framed).unwrap().is_empty()
    }

    /// Relabelling the input must not change the shape of the result.
    #[quickcheck_macros::quickcheck]
    fn input_order_irrelevant(points: Vec<Vertex>) -> bool {
        let points = distinct(points);
        let mut reversed = points.clone();
        reversed.reverse();
        let forward = triangulate(&points).unwrap();
        let backward = triangulate(&reversed).unwrap();
        // Cocircular vertices may be split along either diagonal.
        forward.len() == backward.len()
    }
}
