//! Box mean and channel-wise median over a clamped square window.

use log::debug;
use crate::error::FilterResult;
use crate::kernel::KernelSize;
use crate::raster::Raster;
use crate::rgb::Rgb;

/// Validates `size` and runs [`mean`].
pub fn mean_filter(raster: &Raster, size: i64) -> FilterResult<Raster> {
    Ok(mean(raster, KernelSize::new(size)?))
}

/// Validates `size` and runs [`median`].
pub fn median_filter(raster: &Raster, size: i64) -> FilterResult<Raster> {
    Ok(median(raster, KernelSize::new(size)?))
}

fn window_weights(raster: &Raster, kernel: KernelSize) -> (Vec<Vec<(usize, u64)>>, Vec<Vec<(usize, u64)>>) {
    let columns = (0..raster.width())
        .map(|x| kernel.axis_weights(x, raster.width()))
        .collect();
    let rows = (0..raster.height())
        .map(|y| kernel.axis_weights(y, raster.height()))
        .collect();
    (columns, rows)
}

/// Per-channel sum over the `k x k` window, floor-divided by `k²`.
///
/// Window positions past the border repeat the edge pixel, so each source
/// pixel is counted once per window position that clamps onto it.
pub fn mean(raster: &Raster, kernel: KernelSize) -> Raster {
    debug!("mean {}x{} k={}", raster.width(), raster.height(), kernel.size());
    let area = kernel.area();
    let (columns, rows) = window_weights(raster, kernel);
    raster.similar(|x, y| {
        let mut sums = [0u64; 3];
        for &(sy, wy) in &rows[y] {
            for &(sx, wx) in &columns[x] {
                for (sum, c) in sums.iter_mut().zip(raster.get(sx, sy)) {
                    *sum += wx * wy * c as u64;
                }
            }
        }
        sums.map(|sum| (sum / area) as u8).into()
    })
}

/// Each channel is ranked on its own; the output takes element `k² / 2`
/// of the sorted samples, read off a 256-bin histogram.
pub fn median(raster: &Raster, kernel: KernelSize) -> Raster {
    debug!("median {}x{} k={}", raster.width(), raster.height(), kernel.size());
    let rank = kernel.area() / 2;
    let (columns, rows) = window_weights(raster, kernel);
    raster.similar(|x, y| {
        let mut histograms = [[0u64; 256]; 3];
        for &(sy, wy) in &rows[y] {
            for &(sx, wx) in &columns[x] {
                for (histogram, c) in histograms.iter_mut().zip(raster.get(sx, sy)) {
                    histogram[c as usize] += wx * wy;
                }
            }
        }
        histograms.map(|histogram| {
            let mut seen = 0;
            histogram.iter()
                .position(|&count| {
                    seen += count;
                    seen > rank
                })
                .unwrap_or(255) as u8
        }).into()
    })
}
