use thiserror::Error;

/// Errors raised before a filter touches any pixel.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Kernel size must be a positive odd integer
    #[error("invalid kernel size {0}: expected a positive odd integer")]
    InvalidKernelSize(i64),

    /// Raster dimensions do not match its buffer, or are zero
    #[error("malformed raster: {width}x{height} with {len} bytes")]
    MalformedRaster {
        width: usize,
        height: usize,
        len: usize,
    },

    #[error("invalid structuring element: {0}")]
    InvalidStructuringElement(String),

    #[error("unknown filter '{0}'")]
    UnknownFilter(String),

    #[error("invalid parameter '{value}' for filter '{filter}'")]
    InvalidParameter {
        filter: &'static str,
        value: String,
    },
}

pub type FilterResult<T> = Result<T, FilterError>;
