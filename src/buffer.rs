//! Flat RGB frame buffer shared by every animation.

use heapless::Vec;

use crate::color::{BLACK, Channel, Rgb, add_scaled};
use crate::error::{Error, Result};
use crate::topology::Topology;

/// Pixel storage for the whole installation.
///
/// `N` is the static capacity; the live length equals the topology's LED count.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: Vec<Rgb, N>,
}

impl<const N: usize> PixelBuffer<N> {
    /// Allocate a black buffer for the topology
    pub fn new(topology: Topology) -> Result<Self> {
        let len = topology.total_leds();
        let mut pixels = Vec::new();
        pixels.resize(len, BLACK).map_err(|()| Error::CapacityExceeded {
            required: len,
            strips: topology.num_strips(),
            capacity: N,
        })?;

        Ok(Self { pixels })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn get(&self, index: usize) -> Result<Rgb> {
        self.pixels
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.pixels.len(),
            })
    }

    pub fn set(&mut self, index: usize, color: Rgb) -> Result<()> {
        *self.pixel_mut(index)? = color;
        Ok(())
    }

    /// Copy one pixel onto another
    pub fn copy(&mut self, from: usize, to: usize) -> Result<()> {
        let color = self.get(from)?;
        self.set(to, color)
    }

    /// Fill every LED with one color
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Subtract `amount` from every channel, clamping at zero
    pub fn fade_all(&mut self, amount: u8) {
        for pixel in &mut self.pixels {
            pixel.r = pixel.r.saturating_sub(amount);
            pixel.g = pixel.g.saturating_sub(amount);
            pixel.b = pixel.b.saturating_sub(amount);
        }
    }

    /// Subtract `amount` from a single channel, leaving the others untouched
    pub fn fade_channel(&mut self, channel: Channel, amount: u8) {
        for pixel in &mut self.pixels {
            let value = channel.of(pixel);
            *value = value.saturating_sub(amount);
        }
    }

    /// Add `color` scaled by `scale` on top of the current pixel (saturating)
    pub fn add_scaled(&mut self, index: usize, color: Rgb, scale: u8) -> Result<()> {
        let pixel = self.pixel_mut(index)?;
        *pixel = add_scaled(*pixel, color, scale);
        Ok(())
    }

    fn pixel_mut(&mut self, index: usize) -> Result<&mut Rgb> {
        let len = self.pixels.len();
        self.pixels
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })
    }
}
