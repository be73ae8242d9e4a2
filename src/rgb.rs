#[repr(C)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        r: 0,
        g: 0,
        b: 0,
    };

    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Luma weights in thousandths, so `luma` stays in integer arithmetic.
    pub const LUMA_FACTOR: [u32; 3] = [299, 587, 114];

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }
}

impl Rgb {
    /// `floor(0.299 R + 0.587 G + 0.114 B)`, truncated rather than rounded.
    pub fn luma(self) -> u8 {
        let weighted: u32 = self
            .into_iter()
            .zip(Self::LUMA_FACTOR)
            .map(|(c, w)| c as u32 * w)
            .sum();
        // weights add up to 1000, so the quotient never exceeds 255
        (weighted / 1000) as u8
    }

    /// Binary rasters mark foreground with 255 in every channel.
    pub fn is_on(self) -> bool {
        self == Self::WHITE
    }

    pub fn binary(on: bool) -> Self {
        if on {
            Self::WHITE
        } else {
            Self::BLACK
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(pixel: Rgb) -> Self {
        [pixel.r, pixel.g, pixel.b]
    }
}

impl From<&image::Rgb<u8>> for Rgb {
    fn from(pixel: &image::Rgb<u8>) -> Self {
        pixel.0.into()
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(pixel: Rgb) -> Self {
        image::Rgb(pixel.into())
    }
}

impl IntoIterator for Rgb {
    type Item = u8;
    type IntoIter = <[u8; 3] as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        Into::<[u8; 3]>::into(self).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_truncates() {
        // 0.299 * 10 + 0.587 * 20 + 0.114 * 30 = 18.15
        assert_eq!(Rgb::new(10, 20, 30).luma(), 18);
        // 0.299 * 1 = 0.299
        assert_eq!(Rgb::new(1, 0, 0).luma(), 0);
        assert_eq!(Rgb::new(0, 0, 9).luma(), 1);
    }

    #[test]
    fn luma_extremes() {
        assert_eq!(Rgb::BLACK.luma(), 0);
        assert_eq!(Rgb::WHITE.luma(), 255);
        assert_eq!(Rgb::gray(77).luma(), 77);
    }

    #[test]
    fn only_white_is_on() {
        assert!(Rgb::WHITE.is_on());
        assert!(!Rgb::new(255, 255, 254).is_on());
        assert!(!Rgb::new(255, 0, 0).is_on());
        assert!(!Rgb::BLACK.is_on());
    }

    #[test]
    fn converts_to_image_pixel() {
        let pixel: image::Rgb<u8> = Rgb::new(1, 2, 3).into();
        assert_eq!(pixel.0, [1, 2, 3]);
        assert_eq!(Rgb::from(&pixel), Rgb::new(1, 2, 3));
    }
}
