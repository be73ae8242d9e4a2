use log::debug;
use crate::grayscale::GrayRaster;
use crate::raster::Raster;
use crate::rgb::Rgb;

/// Horizontal Sobel kernel, indexed `[dy + 1][dx + 1]`.
pub const SOBEL_X: [[i32; 3]; 3] = [
    [-1, 0, 1],
    [-2, 0, 2],
    [-1, 0, 1],
];

/// Vertical Sobel kernel, indexed `[dy + 1][dx + 1]`.
pub const SOBEL_Y: [[i32; 3]; 3] = [
    [1, 2, 1],
    [0, 0, 0],
    [-1, -2, -1],
];

fn correlate(gray: &GrayRaster, x: usize, y: usize, kernel: &[[i32; 3]; 3]) -> i32 {
    kernel.iter()
        .enumerate()
        .flat_map(|(j, row)| row.iter()
            .enumerate()
            .map(move |(i, &w)| (i as i64 - 1, j as i64 - 1, w)))
        .map(|(dx, dy, w)| w * gray.sample(x, y, dx, dy) as i32)
        .sum()
}

/// Gradient magnitude `|gx| + |gy|`, saturated at 255, written to all
/// three channels.
pub fn sobel_filter(raster: &Raster) -> Raster {
    debug!("sobel {}x{}", raster.width(), raster.height());
    let gray = GrayRaster::from(raster);
    raster.similar(|x, y| {
        let gx = correlate(&gray, x, y, &SOBEL_X);
        let gy = correlate(&gray, x, y, &SOBEL_Y);
        Rgb::gray((gx.abs() + gy.abs()).clamp(0, 255) as u8)
    })
}
