//! Decoded screenshots.
use crate::error::{Error, Result};
use crate::portals::{Color, Raster};
use std::io::{Read, Seek};
use tiff::decoder::{Decoder, DecodingResult};
use tiff::ColorType;

/// An 8 bit RGB or RGBA image held in memory, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<u8>,
}

impl RgbImage {
    /// Wrap raw interleaved pixels. `channels` is 3 for RGB and 4 for RGBA.
    pub fn from_pixels(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * channels;
        if !(channels == 3 || channels == 4) || data.len() != expected {
            return Err(Error::RasterSize {
                width,
                height,
                channels,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Decode a PNG or TIFF screenshot, told apart by their signatures.
    pub fn read<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        reader.rewind()?;
        match &magic {
            [0x89, b'P', b'N', b'G'] => Self::from_png(reader),
            b"II*\0" | b"MM\0*" => Self::from_tiff(reader),
            _ => Err(Error::UnknownFormat),
        }
    }

    /// Decode a PNG of any bit depth. Palettes are expanded, 16 bit samples
    /// cut to 8 bit and grayscale copied into all three channels.
    pub fn from_png<R: Read>(reader: R) -> Result<Self> {
        let mut decoder = png::Decoder::new(reader);
        decoder.set_transformations(
            png::Transformations::EXPAND | png::Transformations::STRIP_16,
        );
        let mut png = decoder.read_info()?;
        let mut data = vec![0; png.output_buffer_size()];
        let frame = png.next_frame(&mut data)?;
        data.truncate(frame.buffer_size());
        if frame.bit_depth != png::BitDepth::Eight {
            return Err(Error::UnsupportedColorType(format!(
                "{:?}({:?})",
                frame.color_type, frame.bit_depth
            )));
        }
        let (channels, data) = match frame.color_type {
            png::ColorType::Rgb => (3, data),
            png::ColorType::Rgba => (4, data),
            png::ColorType::Grayscale => (3, data.iter().flat_map(|&v| [v, v, v]).collect()),
            png::ColorType::GrayscaleAlpha => (
                4,
                data.chunks_exact(2)
                    .flat_map(|p| [p[0], p[0], p[0], p[1]])
                    .collect(),
            ),
            other => return Err(Error::UnsupportedColorType(format!("{:?}", other))),
        };
        Self::from_pixels(frame.width, frame.height, channels, data)
    }

    pub fn from_tiff<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut decoder = Decoder::new(reader)?;
        let (width, height) = decoder.dimensions()?;
        let color_type = decoder.colortype()?;
        let channels = match color_type {
            ColorType::RGB(8) => 3,
            ColorType::RGBA(8) => 4,
            other => return Err(Error::UnsupportedColorType(format!("{:?}", other))),
        };
        match decoder.read_image()? {
            DecodingResult::U8(data) => Self::from_pixels(width, height, channels, data),
            _ => Err(Error::UnsupportedColorType(format!("{:?}", color_type))),
        }
    }
}

impl Raster for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn rgb(&self, x: u32, y: u32) -> Color {
        let i = (y as usize * self.width as usize + x as usize) * self.channels;
        Color::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }
}
