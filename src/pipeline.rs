use crate::error::FilterResult;
use crate::kernel::KernelSize;
use crate::raster::Raster;
use crate::structuring::StructuringElement;
use crate::Filter;

pub trait Pipeline: Sized {
    fn filter(self, filter: Filter) -> Self;
    fn apply(&self, raster: &Raster) -> Raster;

    fn mean(self, size: i64) -> FilterResult<Self> {
        Ok(self.filter(Filter::Mean(KernelSize::new(size)?)))
    }

    fn median(self, size: i64) -> FilterResult<Self> {
        Ok(self.filter(Filter::Median(KernelSize::new(size)?)))
    }

    fn sobel(self) -> Self {
        self.filter(Filter::Sobel)
    }

    fn binarize(self, threshold: i32, invert: bool) -> Self {
        self.filter(Filter::Binarize { threshold, invert })
    }

    fn dilate(self, element: StructuringElement) -> Self {
        self.filter(Filter::Dilate(element))
    }

    fn erode(self, element: StructuringElement) -> Self {
        self.filter(Filter::Erode(element))
    }
}
