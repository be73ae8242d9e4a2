use crate::error::{FilterError, FilterResult};

/// Side length of a square, odd-sized filter window.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct KernelSize(usize);

impl KernelSize {
    pub const DEFAULT: KernelSize = KernelSize(3);

    /// Rejects even and non-positive sizes, and sizes whose per-channel
    /// window sum (`k² * 255`) would not fit in a `u64`.
    pub fn new(size: i64) -> FilterResult<Self> {
        if size < 1 || size % 2 == 0 {
            return Err(FilterError::InvalidKernelSize(size));
        }
        let fits = u64::try_from(size)
            .ok()
            .and_then(|k| k.checked_mul(k))
            .and_then(|area| area.checked_mul(255))
            .is_some();
        match usize::try_from(size) {
            Ok(k) if fits && k.checked_mul(k).is_some() => Ok(KernelSize(k)),
            _ => Err(FilterError::InvalidKernelSize(size)),
        }
    }

    pub fn size(self) -> usize {
        self.0
    }

    pub fn radius(self) -> usize {
        self.0 >> 1
    }

    pub fn area(self) -> u64 {
        self.0 as u64 * self.0 as u64
    }

    /// Clamped window along one axis of length `len`, centered on `pos`:
    /// each index the window reaches, with how many window positions land
    /// on it. Edge indices absorb every position past the border.
    pub fn axis_weights(self, pos: usize, len: usize) -> Vec<(usize, u64)> {
        let r = self.radius() as i64;
        let (lo, hi) = (pos as i64 - r, pos as i64 + r);
        let last = len as i64 - 1;
        (lo.max(0)..=hi.min(last))
            .map(|i| {
                let from = if i == 0 { lo } else { i };
                let to = if i == last { hi } else { i };
                (i as usize, (to - from + 1) as u64)
            })
            .collect()
    }
}

impl Default for KernelSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}
