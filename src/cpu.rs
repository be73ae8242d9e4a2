use log::trace;
use crate::pipeline::Pipeline;
use crate::raster::Raster;
use crate::Filter;

/// Filters recorded in order and run synchronously on the calling thread.
///
/// Applying never touches the input raster, so one pipeline can be reused
/// against the same original as many times as needed.
#[derive(Clone, Default, Debug)]
pub struct CpuPipeline {
    stages: Vec<Filter>,
}

impl CpuPipeline {
    fn commit(mut self, filter: Filter) -> Self {
        self.stages.push(filter);
        self
    }

    pub fn stages(&self) -> &[Filter] {
        &self.stages
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl FromIterator<Filter> for CpuPipeline {
    fn from_iter<T: IntoIterator<Item = Filter>>(iter: T) -> Self {
        iter.into_iter()
            .fold(CpuPipeline::default(), CpuPipeline::commit)
    }
}

impl Pipeline for CpuPipeline {
    fn filter(self, filter: Filter) -> Self {
        self.commit(filter)
    }

    fn apply(&self, raster: &Raster) -> Raster {
        self.stages.iter()
            .enumerate()
            .fold(raster.clone(), |image, (i, filter)| {
                trace!("stage {}/{}: {filter}", i + 1, self.stages.len());
                filter.apply(&image)
            })
    }
}
