//! Single-pass binary dilation and erosion.
//!
//! A pixel is foreground iff all of its channels are 255. Neither operation
//! clamps coordinates: dilation skips element cells that land outside the
//! raster, erosion turns the pixel off when any active cell does.

use log::debug;
use crate::raster::Raster;
use crate::rgb::Rgb;
use crate::structuring::StructuringElement;

/// Foreground state of `(x + dx, y + dy)`, or `None` outside the raster.
fn probe(raster: &Raster, x: usize, y: usize, dx: i64, dy: i64) -> Option<bool> {
    let nx = usize::try_from(x as i64 + dx).ok()?;
    let ny = usize::try_from(y as i64 + dy).ok()?;
    if nx >= raster.width() || ny >= raster.height() {
        return None;
    }
    Some(raster.get(nx, ny).is_on())
}

pub fn dilate(raster: &Raster, element: &StructuringElement) -> Raster {
    debug!("dilate {}x{} element {}x{}", raster.width(), raster.height(), element.rows(), element.cols());
    raster.similar(|x, y| Rgb::binary(element
        .active_offsets()
        .any(|(dx, dy)| probe(raster, x, y, dx, dy) == Some(true))))
}

pub fn erode(raster: &Raster, element: &StructuringElement) -> Raster {
    debug!("erode {}x{} element {}x{}", raster.width(), raster.height(), element.rows(), element.cols());
    raster.similar(|x, y| Rgb::binary(element
        .active_offsets()
        .all(|(dx, dy)| probe(raster, x, y, dx, dy) == Some(true))))
}
