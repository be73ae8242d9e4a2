pub mod pipeline;
pub mod cpu;
pub mod rgb;
pub mod raster;
pub mod grayscale;
pub mod kernel;
pub mod smooth;
pub mod edge;
pub mod threshold;
pub mod structuring;
pub mod morphology;
mod error;

use std::fmt;
use std::str::FromStr;

pub use error::{FilterError, FilterResult};
pub use kernel::KernelSize;
pub use raster::Raster;
pub use rgb::Rgb;
pub use structuring::StructuringElement;
pub use smooth::{mean_filter, median_filter};
pub use edge::sobel_filter;
pub use threshold::binarize_filter;
pub use morphology::{dilate, erode};

/// One filter with its parameters already validated.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Filter {
    Mean(KernelSize),
    Median(KernelSize),
    Sobel,
    Binarize { threshold: i32, invert: bool },
    Dilate(StructuringElement),
    Erode(StructuringElement),
}

impl Filter {
    pub const NAMES: [&'static str; 6] = ["mean", "median", "sobel", "binarize", "dilate", "erode"];

    pub fn name(&self) -> &'static str {
        match self {
            Filter::Mean(_) => "mean",
            Filter::Median(_) => "median",
            Filter::Sobel => "sobel",
            Filter::Binarize { .. } => "binarize",
            Filter::Dilate(_) => "dilate",
            Filter::Erode(_) => "erode",
        }
    }

    /// Runs the filter, returning a new raster; `raster` is left untouched.
    pub fn apply(&self, raster: &Raster) -> Raster {
        match self {
            Filter::Mean(k) => smooth::mean(raster, *k),
            Filter::Median(k) => smooth::median(raster, *k),
            Filter::Sobel => sobel_filter(raster),
            Filter::Binarize { threshold, invert } => binarize_filter(raster, *threshold, *invert),
            Filter::Dilate(element) => dilate(raster, element),
            Filter::Erode(element) => erode(raster, element),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Mean(k) | Filter::Median(k) => write!(f, "{}={}", self.name(), k.size()),
            Filter::Binarize { threshold, invert: false } => write!(f, "binarize={threshold}"),
            Filter::Binarize { threshold, invert: true } => write!(f, "binarize={threshold},invert"),
            Filter::Sobel => f.write_str("sobel"),
            Filter::Dilate(element) | Filter::Erode(element) => write!(f, "{}={element}", self.name()),
        }
    }
}

/// `name[=params]`: `mean=5`, `median`, `sobel`, `binarize=100,invert`,
/// `dilate`, `erode=010,111,010`. Missing parameters take their defaults.
impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> FilterResult<Self> {
        let mut opt = s.splitn(2, '=');
        let name = opt.next().unwrap_or_default().trim();
        let params = opt.next().map(str::trim);

        let kernel = |filter: &'static str| -> FilterResult<KernelSize> {
            match params {
                None => Ok(KernelSize::DEFAULT),
                Some(p) => KernelSize::new(p.parse().map_err(|_| FilterError::InvalidParameter {
                    filter,
                    value: p.to_string(),
                })?),
            }
        };
        let element = || -> FilterResult<StructuringElement> {
            params.map_or_else(|| Ok(StructuringElement::default()), |p| p.parse())
        };

        match name {
            "mean" => Ok(Filter::Mean(kernel("mean")?)),
            "median" => Ok(Filter::Median(kernel("median")?)),
            "sobel" => Ok(Filter::Sobel),
            "binarize" => {
                let mut parts = params.unwrap_or_default().split(',').map(str::trim);
                let threshold = match parts.next() {
                    None | Some("") => threshold::DEFAULT_THRESHOLD,
                    Some(t) => t.parse().map_err(|_| FilterError::InvalidParameter {
                        filter: "binarize",
                        value: t.to_string(),
                    })?,
                };
                let invert = match parts.next() {
                    None => false,
                    Some("invert") => true,
                    Some(other) => return Err(FilterError::InvalidParameter {
                        filter: "binarize",
                        value: other.to_string(),
                    }),
                };
                if let Some(extra) = parts.next() {
                    return Err(FilterError::InvalidParameter {
                        filter: "binarize",
                        value: extra.to_string(),
                    });
                }
                Ok(Filter::Binarize { threshold, invert })
            },
            "dilate" => Ok(Filter::Dilate(element()?)),
            "erode" => Ok(Filter::Erode(element()?)),
            unknown => Err(FilterError::UnknownFilter(unknown.to_string())),
        }
    }
}
