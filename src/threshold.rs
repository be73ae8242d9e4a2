use log::debug;
use crate::grayscale::GrayRaster;
use crate::raster::Raster;
use crate::rgb::Rgb;

/// Threshold used when none is given.
pub const DEFAULT_THRESHOLD: i32 = 128;

/// Maps luma `>= threshold` to white (black when `invert`), everything else
/// to the opposite. Thresholds outside `0..=255` make the output uniform.
pub fn binarize_filter(raster: &Raster, threshold: i32, invert: bool) -> Raster {
    debug!("binarize {}x{} t={threshold} invert={invert}", raster.width(), raster.height());
    let gray = GrayRaster::from(raster);
    raster.similar(|x, y| {
        let above = gray.get(x, y) as i32 >= threshold;
        Rgb::binary(above != invert)
    })
}
