#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// An offset into the vertex arena of a single triangulation. Two vertices
/// are the same vertex only if they have the same index, regardless of their
/// coordinates.
pub type VertexIndex = usize;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Order two vertices by ascending x, then ascending y. If they share
    /// both coordinates the second one comes first.
    pub fn precedes(&self, other: &Self) -> bool {
        self.x < other.x || (self.x == other.x && self.y < other.y)
    }

    pub fn distance_squared(&self, x: f64, y: f64) -> f64 {
        let dx = self.x as f64 - x;
        let dy = self.y as f64 - y;
        dx * dx + dy * dy
    }
}

impl From<(i64, i64)> for Vertex {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<Vertex> for robust::Coord<f64> {
    fn from(s: Vertex) -> robust::Coord<f64> {
        robust::Coord {
            x: s.x as f64,
            y: s.y as f64,
        }
    }
}

/// A coordinate restricted to the range a screenshot can realistically
/// produce, for generated test inputs.
#[cfg(test)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct SafeCoord(pub i64);

#[cfg(test)]
impl SafeCoord {
    pub const MAX: SafeCoord = SafeCoord(4000);
    pub const MIN: SafeCoord = SafeCoord(-4000);

    pub fn new(c: i64) -> Option<Self> {
        let s = SafeCoord(c);
        if s <= SafeCoord::MAX && s >= SafeCoord::MIN {
            Some(s)
        } else {
            None
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for SafeCoord {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        // i16 keeps most draws in range, the rest are folded back in.
        let c = i64::from(i16::arbitrary(g));
        SafeCoord::new(c).unwrap_or(SafeCoord(c % (SafeCoord::MAX.0 + 1)))
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Vertex {
    fn arbitrary(g: &mut quickcheck::Gen) -> Vertex {
        Vertex {
            x: SafeCoord::arbitrary(g).0,
            y: SafeCoord::arbitrary(g).0,
        }
    }
}
