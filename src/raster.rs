use image::RgbImage;
use crate::error::{FilterError, FilterResult};
use crate::rgb::Rgb;

const CHANNELS: usize = 3;

/// Row-major RGB grid stored as `(y * width + x) * 3 + channel`.
///
/// Width and height are always at least one and the buffer always holds
/// exactly `width * height * 3` bytes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Raster {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Builds a raster by evaluating `f(x, y)` for every pixel.
    ///
    /// Panics if either dimension is zero.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> Rgb) -> Raster {
        assert!(width > 0 && height > 0, "raster must be non-empty");
        let data = (0..height)
            .flat_map(|y| (0..width)
                .map(move |x| (x, y)))
            .flat_map(|(x, y)| Into::<[u8; 3]>::into(f(x, y)))
            .collect();
        Raster { width, height, data }
    }

    pub fn new(width: usize, height: usize, fill: Rgb) -> Raster {
        Self::from_fn(width, height, move |_, _| fill)
    }

    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> FilterResult<Raster> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS));
        match expected {
            Some(len) if len > 0 && len == data.len() => Ok(Raster { width, height, data }),
            _ => Err(FilterError::MalformedRaster {
                width,
                height,
                len: data.len(),
            }),
        }
    }

    pub fn from_rows(rows: &[Vec<Rgb>]) -> FilterResult<Raster> {
        let height = rows.len();
        let width = rows.first()
            .map(|row| row.len())
            .unwrap_or(0);
        if rows.iter().any(|row| row.len() != width) {
            return Err(FilterError::MalformedRaster {
                width,
                height,
                len: rows.iter().map(|row| row.len() * CHANNELS).sum(),
            });
        }
        let data = rows.iter()
            .flatten()
            .flat_map(|&pixel| Into::<[u8; 3]>::into(pixel))
            .collect();
        Self::from_raw(width, height, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        let i = (y * self.width + x) * CHANNELS;
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Returns the pixel at `(x + dx, y + dy)` with each axis clamped into
    /// the raster, so out-of-range reads repeat the nearest edge pixel.
    pub fn sample(&self, x: usize, y: usize, dx: i64, dy: i64) -> Rgb {
        let (x, y) = clamp_offset(x, y, dx, dy, self.width, self.height);
        self.get(x, y)
    }

    pub fn similar(&self, f: impl Fn(usize, usize) -> Rgb) -> Raster {
        Raster::from_fn(self.width, self.height, f)
    }

    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
    }
}

/// Edge-replicating coordinate lookup.
pub(crate) fn clamp_offset(x: usize, y: usize, dx: i64, dy: i64, width: usize, height: usize) -> (usize, usize) {
    (
        (x as i64 + dx).min(width as i64 - 1).max(0) as usize,
        (y as i64 + dy).min(height as i64 - 1).max(0) as usize,
    )
}

impl TryFrom<RgbImage> for Raster {
    type Error = FilterError;

    fn try_from(image: RgbImage) -> FilterResult<Self> {
        let (width, height) = image.dimensions();
        Raster::from_raw(width as usize, height as usize, image.into_raw())
    }
}

impl From<Raster> for RgbImage {
    fn from(raster: Raster) -> Self {
        let (width, height) = (raster.width as u32, raster.height as u32);
        let data = raster.data;
        RgbImage::from_fn(width, height, |x, y| {
            let i = (y as usize * width as usize + x as usize) * CHANNELS;
            image::Rgb([data[i], data[i + 1], data[i + 2]])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Raster {
        Raster::from_fn(3, 2, |x, y| Rgb::gray((y * 3 + x) as u8))
    }

    #[test]
    fn layout_is_row_major() {
        let raster = ramp();
        assert_eq!(raster.as_raw()[..6], [0, 0, 0, 1, 1, 1]);
        assert_eq!(raster.get(0, 1), Rgb::gray(3));
        assert_eq!(raster.get(2, 1), Rgb::gray(5));
    }

    #[test]
    fn sample_replicates_edges() {
        let raster = ramp();
        assert_eq!(raster.sample(0, 0, -1, -1), Rgb::gray(0));
        assert_eq!(raster.sample(2, 0, 5, 0), Rgb::gray(2));
        assert_eq!(raster.sample(1, 1, 0, 9), Rgb::gray(4));
        assert_eq!(raster.sample(1, 0, -1, 1), Rgb::gray(3));
        // each axis clamps on its own
        assert_eq!(raster.sample(2, 1, 1, -1), Rgb::gray(2));
    }

    #[test]
    fn rejects_bad_buffers() {
        assert!(Raster::from_raw(2, 2, vec![0; 12]).is_ok());
        assert_eq!(
            Raster::from_raw(2, 2, vec![0; 11]),
            Err(FilterError::MalformedRaster { width: 2, height: 2, len: 11 })
        );
        assert!(Raster::from_raw(0, 4, Vec::new()).is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![Rgb::BLACK; 2], vec![Rgb::BLACK; 3]];
        assert!(Raster::from_rows(&rows).is_err());
        assert!(Raster::from_rows(&[]).is_err());
        let rows = vec![vec![Rgb::WHITE; 2]; 3];
        let raster = Raster::from_rows(&rows).unwrap();
        assert_eq!((raster.width(), raster.height()), (2, 3));
    }

    #[test]
    fn image_round_trip_keeps_pixels() {
        let raster = ramp();
        let image: RgbImage = raster.clone().into();
        assert_eq!(image.get_pixel(2, 1).0, [5, 5, 5]);
        assert_eq!(Raster::try_from(image).unwrap(), raster);
    }
}
