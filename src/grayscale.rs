use crate::raster::{clamp_offset, Raster};
use crate::rgb::Rgb;

/// Single-channel luma view of a raster, scoped to one filter run.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GrayRaster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayRaster {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    /// Clamped lookup, identical policy to [`Raster::sample`].
    pub fn sample(&self, x: usize, y: usize, dx: i64, dy: i64) -> u8 {
        let (x, y) = clamp_offset(x, y, dx, dy, self.width, self.height);
        self.get(x, y)
    }

    pub fn to_raster(&self) -> Raster {
        Raster::from_fn(self.width, self.height, |x, y| Rgb::gray(self.get(x, y)))
    }
}

impl From<&Raster> for GrayRaster {
    fn from(raster: &Raster) -> Self {
        GrayRaster {
            width: raster.width(),
            height: raster.height(),
            data: raster.pixels()
                .map(Rgb::luma)
                .collect(),
        }
    }
}

pub fn grayscale(raster: &Raster) -> GrayRaster {
    GrayRaster::from(raster)
}
