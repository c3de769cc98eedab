//! Strip-level drawing helpers shared by the audio-reactive animations.
//!
//! Writes that would leave the strip are dropped instead of spilling into the
//! neighbouring strip.

use crate::buffer::PixelBuffer;
use crate::color::Rgb;
use crate::error::Result;
use crate::math8::map_range;
use crate::topology::Topology;

/// Last offset from the center drawn with the near color
const NEAR_TIER_END: usize = 7;
/// Last offset from the center drawn with the mid color
const MID_TIER_END: usize = 11;

/// Tier color for a distance from the strip center
pub const fn pick_color(offset: usize, near: Rgb, mid: Rgb, far: Rgb) -> Rgb {
    if offset <= NEAR_TIER_END {
        near
    } else if offset <= MID_TIER_END {
        mid
    } else {
        far
    }
}

/// Number of LEDs on each side of the center lit for `intensity`
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn reach(intensity: u8, leds_per_strip: usize) -> usize {
    let half = leds_per_strip.div_ceil(2) as i32;
    map_range(i32::from(intensity), 0, 255, 0, half).max(0) as usize
}

/// Light a bar growing symmetrically from the strip center
pub fn fill_from_center<const N: usize>(
    leds: &mut PixelBuffer<N>,
    topology: Topology,
    strip: usize,
    intensity: u8,
    (near, mid, far): (Rgb, Rgb, Rgb),
) -> Result<()> {
    let center = topology.center_of(strip);
    leds.set(center, near)?;

    for offset in 1..=reach(intensity, topology.leds_per_strip()) {
        let color = pick_color(offset, near, mid, far);
        for index in mirrored(center, offset) {
            if let Some(index) = on_strip(topology, strip, index) {
                leds.set(index, color)?;
            }
        }
    }
    Ok(())
}

/// Push the strip content one LED outwards from the center
///
/// Runs from the strip ends towards the center so every source is read before
/// it is overwritten.
pub fn move_from_center<const N: usize>(
    leds: &mut PixelBuffer<N>,
    topology: Topology,
    strip: usize,
) -> Result<()> {
    let center = topology.center_of(strip);
    let strip_end = topology.strip_range(strip).end;

    for offset in (1..=topology.leds_per_strip() / 2).rev() {
        let outer = center + offset;
        if outer < strip_end {
            leds.copy(outer - 1, outer)?;
        }
        leds.copy(center - offset + 1, center - offset)?;
    }
    Ok(())
}

/// Shift every strip's content into the next strip, serpentine style
///
/// Odd strips receive the previous strip reversed, even strips receive it
/// reversed back, so the cascade runs continuously across strip boundaries.
/// Strip 0 keeps its content.
pub fn move_down<const N: usize>(leds: &mut PixelBuffer<N>, topology: Topology) -> Result<()> {
    let per_strip = topology.leds_per_strip();
    for strip in (1..topology.num_strips()).rev() {
        let target = topology.strip_start(strip);
        let source = topology.strip_start(strip - 1);
        for led in 0..per_strip {
            leds.copy(source + led, target + per_strip - led - 1)?;
        }
    }
    Ok(())
}

/// Index of a pixel written in serpentine order: odd strips run backwards
pub const fn serpentine_index(topology: Topology, strip: usize, led: usize) -> usize {
    let start = topology.strip_start(strip);
    if strip % 2 == 0 {
        start + led
    } else {
        start + topology.leds_per_strip() - 1 - led
    }
}

#[allow(clippy::cast_possible_wrap)]
pub(crate) const fn mirrored(center: usize, offset: usize) -> [isize; 2] {
    [center as isize + offset as isize, center as isize - offset as isize]
}

#[allow(clippy::cast_sign_loss)]
pub(crate) const fn on_strip(topology: Topology, strip: usize, index: isize) -> Option<usize> {
    if topology.contains(strip, index) {
        Some(index as usize)
    } else {
        None
    }
}
