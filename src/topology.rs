use core::ops::Range;

use crate::error::{Error, Result};

/// Maximum number of strips the engine can address.
pub const MAX_STRIPS: usize = 32;

/// Largest LED count a topology may describe, matching the signed settings.
#[allow(clippy::cast_sign_loss)]
const MAX_TOTAL_LEDS: usize = i32::MAX as usize;

/// Physical layout of the installation: equal strips chained end-to-end.
///
/// Pixels are addressed as `strip * leds_per_strip + offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    num_strips: usize,
    leds_per_strip: usize,
}

impl Topology {
    /// Validate stored settings.
    ///
    /// Settings are signed because the persisted store returns zero (or garbage)
    /// for an installation that was never set up.
    pub fn new(num_strips: i32, leds_per_strip: i32) -> Result<Self> {
        if num_strips <= 0 || leds_per_strip <= 0 {
            return Err(Error::Unconfigured);
        }
        #[allow(clippy::cast_sign_loss)]
        let (num_strips, leds_per_strip) = (num_strips as usize, leds_per_strip as usize);
        if num_strips > MAX_STRIPS {
            return Err(Error::CapacityExceeded {
                required: num_strips.saturating_mul(leds_per_strip),
                strips: num_strips,
                capacity: MAX_STRIPS,
            });
        }
        let total = num_strips.checked_mul(leds_per_strip);
        if total.is_none_or(|total| total > MAX_TOTAL_LEDS) {
            return Err(Error::CapacityExceeded {
                required: total.unwrap_or(usize::MAX),
                strips: num_strips,
                capacity: MAX_TOTAL_LEDS,
            });
        }

        Ok(Self {
            num_strips,
            leds_per_strip,
        })
    }

    pub const fn num_strips(self) -> usize {
        self.num_strips
    }

    pub const fn leds_per_strip(self) -> usize {
        self.leds_per_strip
    }

    pub const fn total_leds(self) -> usize {
        self.num_strips * self.leds_per_strip
    }

    /// Index of the first LED of the strip
    pub const fn strip_start(self, strip: usize) -> usize {
        strip * self.leds_per_strip
    }

    /// Address range occupied by the strip
    pub const fn strip_range(self, strip: usize) -> Range<usize> {
        let start = self.strip_start(strip);
        start..start + self.leds_per_strip
    }

    /// Returns the center LED of the strip, rounding down on even lengths
    pub const fn center_of(self, strip: usize) -> usize {
        self.strip_start(strip) + self.leds_per_strip / 2
    }

    /// Check whether a signed address lies on the given strip
    pub const fn contains(self, strip: usize, index: isize) -> bool {
        if index < 0 {
            return false;
        }
        #[allow(clippy::cast_sign_loss)]
        let index = index as usize;
        let start = self.strip_start(strip);
        index >= start && index < start + self.leds_per_strip
    }

    /// Iterate over strip indices
    pub fn strips(self) -> Range<usize> {
        0..self.num_strips
    }
}
