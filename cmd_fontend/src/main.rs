extern crate image_filters;
extern crate image;

use anyhow::{bail, Context, Result};
use log::{info, warn};
use image::RgbImage;
use image_filters::cpu::CpuPipeline;
use image_filters::pipeline::Pipeline;
use image_filters::{Filter, FilterError, Raster};

const USAGE: &str = "usage: cmd_fontend <source> <destination> [--mean[=k]] [--median[=k]] [--sobel] \
    [--binarize[=t[,invert]]] [--dilate[=010,111,010]] [--erode[=...]]";

trait ParseArgs: Sized {
    fn parse(self, s: &str) -> Result<Self>;
}

impl ParseArgs for CpuPipeline {
    fn parse(self, s: &str) -> Result<Self> {
        let Some(option) = s.strip_prefix("--") else {
            bail!("Unexpected argument '{s}'\n{USAGE}");
        };
        match option.parse::<Filter>() {
            Ok(filter) => Ok(self.filter(filter)),
            Err(FilterError::InvalidKernelSize(k)) => {
                // leave the pipeline as it was, like the preview does on bad input
                warn!("Ignoring '{s}': kernel size {k} is not a positive odd integer");
                Ok(self)
            },
            Err(e) => Err(e).with_context(|| format!("Invalid option '{s}'")),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);

    let src_uri = args.next()
        .context(USAGE)?;

    let dest_uri = args.next()
        .context(USAGE)?;

    info!("Loading image {}", src_uri);

    let surface = Raster::try_from(image::open(&src_uri)
        .with_context(|| format!("Unable to load image '{}'", src_uri))?
        .into_rgb8())?;

    let pipeline = args.try_fold(
        CpuPipeline::default(),
        |pipeline, action| pipeline.parse(&action)
    )?;

    if pipeline.is_empty() {
        warn!("No filters given, writing the source image unchanged");
    }

    info!("Calculating");
    let data = pipeline.apply(&surface);
    info!("Calculated: {}x{}", data.width(), data.height());

    let dir = std::env::current_dir()
        .map(|dir| dir.join(&dest_uri))
        .context("Unable to open directory")?;

    RgbImage::from(data)
        .save(&dir)
        .with_context(|| format!("Unable to save image '{}'", dir.display()))?;

    Ok(())
}
