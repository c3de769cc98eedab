//! Audio band to strip intensity mapping.
//!
//! The analyzer delivers seven frequency bands, low to high. Installations with
//! up to seven strips get a fixed grouping so that no band feeds two strips;
//! longer installations interpolate linearly between neighbouring bands.

use heapless::Vec;

use crate::topology::{MAX_STRIPS, Topology};

/// Number of frequency bands delivered by the spectrum analyzer
pub const BAND_COUNT: usize = 7;

/// One intensity per band, lowest frequency first
pub type BandVector = [u8; BAND_COUNT];

/// One intensity per strip
pub type StripIntensities = Vec<u8, MAX_STRIPS>;

/// Audio snapshot pushed by the analyzer once per analysis cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioInput {
    pub bands: BandVector,
    /// Overall level, used for audio-reactive brightness
    pub level: u8,
}

impl AudioInput {
    pub const fn new(bands: BandVector, level: u8) -> Self {
        Self { bands, level }
    }

    /// Build from raw analyzer readings, clamping every value into a byte
    pub fn from_raw(bands: &[i32; BAND_COUNT], level: i32) -> Self {
        Self {
            bands: bands.map(clamp_u8),
            level: clamp_u8(level),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Map the band vector onto every strip of the topology
pub fn map_to_strips(bands: &BandVector, topology: Topology) -> StripIntensities {
    topology
        .strips()
        .map(|strip| intensity_for_strip(bands, topology, strip))
        .collect()
}

/// Intensity of a single strip, zero for a strip outside the topology
pub fn intensity_for_strip(bands: &BandVector, topology: Topology, strip: usize) -> u8 {
    let num_strips = topology.num_strips();
    if strip >= num_strips {
        return 0;
    }

    let b = bands;
    match num_strips {
        1 => max_of(b),
        2 => match strip {
            0 => max_of(&b[0..4]),
            _ => max_of(&b[4..7]),
        },
        3 => match strip {
            0 => max_of(&b[0..2]),
            1 => max_of(&b[2..5]),
            _ => max_of(&b[5..7]),
        },
        4 => match strip {
            0 => b[0].max(b[1]),
            1 => b[2].max(b[3]),
            2 => b[4].max(b[5]),
            _ => b[6],
        },
        5 => match strip {
            0 => b[0].max(b[1]),
            1..=3 => b[strip + 1],
            _ => b[5].max(b[6]),
        },
        6 => match strip {
            0..=4 => b[strip],
            _ => b[5].max(b[6]),
        },
        7 => b[strip],
        _ => interpolate(b, strip, num_strips),
    }
}

fn max_of(bands: &[u8]) -> u8 {
    bands.iter().copied().max().unwrap_or(0)
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
fn interpolate(bands: &BandVector, strip: usize, num_strips: usize) -> u8 {
    let position = strip as f32 * 6.0 / (num_strips - 1) as f32;
    let low = position as usize;
    let high = low + 1;
    if high >= BAND_COUNT {
        return bands[BAND_COUNT - 1];
    }

    let fraction = position - low as f32;
    let value = f32::from(bands[low]) * (1.0 - fraction) + f32::from(bands[high]) * fraction;
    value as u8
}
