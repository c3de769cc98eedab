//! 8- and 16-bit fixed-point helpers shared by the animations.

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a 16-bit factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Saturating 8-bit add
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

/// Re-map a number from one range to another.
///
/// Integer division truncates toward zero and the result is not clamped,
/// so callers keep `value` inside `in_min..=in_max`. A degenerate input range
/// maps everything to `out_min`.
#[inline]
pub const fn map_range(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    if in_max == in_min {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Same as [`map_range`], clamped into a byte
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn map8(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> u8 {
    let mapped = map_range(value, in_min, in_max, out_min, out_max);
    if mapped < 0 {
        0
    } else if mapped > 255 {
        255
    } else {
        mapped as u8
    }
}

/// 16-bit sine: a full turn is 0..65536, output spans -32767..=32767
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn sin16(theta: u16) -> i16 {
    let radians = f32::from(theta) * (2.0 * core::f32::consts::PI / 65536.0);
    (libm::sinf(radians) * 32767.0) as i16
}

/// Sawtooth that wraps `bpm` times a minute, driven by the wall clock
#[allow(clippy::cast_possible_truncation)]
pub const fn beat16(bpm: u8, now: Instant) -> u16 {
    // bpm in Q8.8 multiplied by 280 approximates 65536 / 60000 * 256
    let bpm88 = (bpm as u64) << 8;
    ((now.as_millis().wrapping_mul(bpm88).wrapping_mul(280)) >> 16) as u16
}

/// Sine wave oscillating between `low` and `high` at `bpm` beats a minute
#[allow(clippy::cast_sign_loss)]
pub fn beatsin16(bpm: u8, low: u16, high: u16, now: Instant) -> u16 {
    let beat = beat16(bpm, now);
    let beatsin = (i32::from(sin16(beat)) + 32768) as u16;
    let range = high.saturating_sub(low);
    low + scale16(beatsin, range)
}
