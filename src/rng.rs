use rand_core::{Error, RngCore, impls};

/// Linear congruential generator for visual randomness.
///
/// Not suitable for anything security related; it only scatters pixels.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    seed: u64,
}

impl SimpleRng {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Uniform-ish value in `0..bound`, zero when `bound` is zero
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.next_u32() as usize % bound
    }
}

impl RngCore for SimpleRng {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        self.seed = self
            .seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.seed >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let upper = u64::from(self.next_u32());
        let lower = u64::from(self.next_u32());
        (upper << 32) | lower
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
