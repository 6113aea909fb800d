//! Finding portal markers in a map screenshot.
//!
//! Portals are drawn with a border of a known color. The first pixel of that
//! color seen while scanning claims a square the size of a portal below it,
//! further matching pixels inside the square belong to the same portal.
use crate::vertex::Vertex;
use std::fmt::{Display, Formatter};

/// Border color used by the map when none is given, `#FF9900`.
pub const DEFAULT_BORDER: u32 = 0xFF9900;
/// Portal diameter in pixels when none is given.
pub const DEFAULT_SIZE: u32 = 16;
/// Smallest portal diameter, below it the portal square has no width.
pub const MIN_SIZE: u32 = 2;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<u32> for Color {
    /// Read a `0xRRGGBB` value. Anything above the low 24 bits is ignored.
    fn from(rgb: u32) -> Self {
        Self {
            r: ((rgb & 0xFF0000) >> 16) as u8,
            g: ((rgb & 0x00FF00) >> 8) as u8,
            b: (rgb & 0x0000FF) as u8,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Anything that can be read pixel by pixel.
pub trait Raster {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);
    /// Color of the pixel at `(x, y)`, alpha dropped. Only called with
    /// coordinates inside [`Raster::dimensions`].
    fn rgb(&self, x: u32, y: u32) -> Color;
}

/// An axis aligned rectangle, `min` inclusive and `max` exclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Vertex,
    pub max: Vertex,
}

impl Rect {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self {
            min: Vertex::new(x0.min(x1), y0.min(y1)),
            max: Vertex::new(x0.max(x1), y0.max(y1)),
        }
    }

    pub fn width(&self) -> i64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i64 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, p: Vertex) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    pub fn center(&self) -> Vertex {
        Vertex::new(self.min.x + self.width() / 2, self.min.y + self.height() / 2)
    }
}

/// The square a portal whose topmost border pixel is at `p` occupies.
/// Sizes below [`MIN_SIZE`] are raised to it.
fn portal_at(p: Vertex, size: u32) -> Rect {
    let size = i64::from(size.max(MIN_SIZE));
    let half = size / 2;
    Rect::new(p.x - (half - 1), p.y, p.x + half + 1, p.y + size)
}

/// Scan `raster` row by row for pixels of `border` and return one rectangle
/// per portal, in the order they were found. `size` is at least
/// [`MIN_SIZE`].
pub fn find_portals<R: Raster + ?Sized>(raster: &R, border: Color, size: u32) -> Vec<Rect> {
    let (width, height) = raster.dimensions();
    let mut portals: Vec<Rect> = Vec::new();
    for y in 0..height {
        for x in 0..width {
            if raster.rgb(x, y) != border {
                continue;
            }
            let p = Vertex::new(i64::from(x), i64::from(y));
            if portals.iter().any(|portal| portal.contains(p)) {
                continue;
            }
            portals.push(portal_at(p, size));
        }
    }
    portals
}

pub fn portal_centers(portals: &[Rect]) -> Vec<Vertex> {
    portals.iter().map(Rect::center).collect()
}
