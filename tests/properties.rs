use image_filters::{
    binarize_filter, dilate, erode, mean_filter, median_filter, sobel_filter, Filter, FilterError,
    Raster, Rgb, StructuringElement,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_raster(rng: &mut StdRng) -> Raster {
    let width = rng.gen_range(1..12);
    let height = rng.gen_range(1..12);
    let data = (0..width * height * 3).map(|_| rng.gen()).collect();
    Raster::from_raw(width, height, data).unwrap()
}

fn random_binary(rng: &mut StdRng) -> Raster {
    let raster = random_raster(rng);
    binarize_filter(&raster, rng.gen_range(0..=255), false)
}

#[test]
fn smoothing_preserves_dimensions() {
    init();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let raster = random_raster(&mut rng);
        for k in [1, 3, 5, 9] {
            for out in [mean_filter(&raster, k).unwrap(), median_filter(&raster, k).unwrap()] {
                assert_eq!((out.width(), out.height()), (raster.width(), raster.height()));
            }
        }
    }
}

#[test]
fn kernel_size_one_is_identity() {
    let mut rng = StdRng::seed_from_u64(11);
    let raster = random_raster(&mut rng);
    assert_eq!(mean_filter(&raster, 1).unwrap(), raster);
    assert_eq!(median_filter(&raster, 1).unwrap(), raster);
}

#[test]
fn rejects_even_and_non_positive_kernels() {
    let raster = Raster::new(4, 4, Rgb::gray(9));
    for k in [2, 0, -1] {
        assert_eq!(mean_filter(&raster, k), Err(FilterError::InvalidKernelSize(k)));
        assert_eq!(median_filter(&raster, k), Err(FilterError::InvalidKernelSize(k)));
    }
}

#[test]
fn uniform_raster_scenario() {
    init();
    let color = Rgb::new(10, 20, 30);
    let raster = Raster::new(3, 3, color);
    let mean = mean_filter(&raster, 3).unwrap();
    assert!(mean.pixels().all(|p| p == color));
    assert_eq!(median_filter(&raster, 3).unwrap(), raster);
    assert!(sobel_filter(&raster).pixels().all(|p| p == Rgb::BLACK));
}

#[test]
fn binarize_row_scenario() {
    let raster = Raster::from_fn(3, 1, |x, _| Rgb::gray(if x == 1 { 255 } else { 0 }));
    let plain: Vec<u8> = binarize_filter(&raster, 128, false).pixels().map(|p| p.r).collect();
    assert_eq!(plain, vec![0, 255, 0]);
    let inverted: Vec<u8> = binarize_filter(&raster, 128, true).pixels().map(|p| p.r).collect();
    assert_eq!(inverted, vec![255, 0, 255]);
}

#[test]
fn binarize_variants_are_complementary() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let raster = random_raster(&mut rng);
        let t = rng.gen_range(-10..270);
        let plain = binarize_filter(&raster, t, false);
        let inverted = binarize_filter(&raster, t, true);
        for (a, b) in plain.pixels().zip(inverted.pixels()) {
            assert!(a == Rgb::BLACK || a == Rgb::WHITE);
            assert_eq!(a.is_on(), b == Rgb::BLACK);
        }
    }
}

#[test]
fn dilation_is_extensive_and_erosion_anti_extensive() {
    init();
    let mut rng = StdRng::seed_from_u64(5);
    let element = StructuringElement::default();
    for _ in 0..20 {
        let raster = random_binary(&mut rng);
        let dilated = dilate(&raster, &element);
        let eroded = erode(&raster, &element);
        for ((input, grown), shrunk) in raster.pixels().zip(dilated.pixels()).zip(eroded.pixels()) {
            if input.is_on() {
                assert!(grown.is_on());
            }
            if shrunk.is_on() {
                assert!(input.is_on());
            }
        }
    }
}

#[test]
fn corner_pixel_at_the_border() {
    let raster = Raster::from_fn(4, 4, |x, y| Rgb::binary((x, y) == (3, 0)));
    let element = StructuringElement::default();

    // erosion needs neighbours outside the raster, so the pixel is lost
    assert!(erode(&raster, &element).pixels().all(|p| !p.is_on()));

    let dilated = dilate(&raster, &element);
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(dilated.get(x, y).is_on(), x >= 2 && y <= 1, "({x}, {y})");
        }
    }
}

#[test]
fn filters_leave_input_untouched() {
    let mut rng = StdRng::seed_from_u64(13);
    let raster = random_raster(&mut rng);
    let copy = raster.clone();
    for arg in ["mean=3", "median=5", "sobel", "binarize=90,invert", "dilate", "erode=010,111,010"] {
        let filter: Filter = arg.parse().unwrap();
        let once = filter.apply(&raster);
        assert_eq!(filter.apply(&raster), once, "{arg}");
    }
    assert_eq!(raster, copy);
}
