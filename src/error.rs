use crate::vertex::Vertex;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures reading screenshots, writing maps, and vertices too far out to
/// triangulate.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Tiff(#[from] tiff::TiffError),
    #[error(transparent)]
    Png(#[from] png::DecodingError),
    #[error("unsupported screenshot color type {0}")]
    UnsupportedColorType(String),
    #[error("screenshot is neither PNG nor TIFF")]
    UnknownFormat,
    #[error("raster of {width}x{height} with {channels} channels needs {expected} bytes, got {actual}")]
    RasterSize {
        width: u32,
        height: u32,
        channels: usize,
        expected: usize,
        actual: usize,
    },
    #[error("vertex {index} at {vertex} is outside of ±{limit}")]
    CoordinateOutOfRange {
        index: usize,
        vertex: Vertex,
        limit: i64,
    },
}
