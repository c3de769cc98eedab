//! Full-installation white flash on heavy bass hits.
//!
//! Between flashes the strip centers glow in a color picked by the strip's
//! position: bass strips purple, mid strips cyan, treble strips yellow.

use embassy_time::{Duration, Instant};

use super::{Animation, FrameContext, shapes::serpentine_index};
use crate::{buffer::PixelBuffer, color::Rgb, error::Result, math8::map8};

/// Bass level (average of the three lowest bands) that counts as a beat
pub const BEAT_THRESHOLD: u16 = 200;
/// Minimum time between two detected beats
pub const BEAT_COOLDOWN: Duration = Duration::from_millis(100);
const FLASH_DECAY: u8 = 10;
const BACKGROUND_FADE: u8 = 30;
/// Strips quieter than this stay dark between flashes
const GLOW_THRESHOLD: u8 = 50;
const GLOW_MAX: i32 = 150;
const BASS_BANDS: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct BeatDropAnimation {
    flash: u8,
    last_beat: Option<Instant>,
}

impl BeatDropAnimation {
    /// Current flash brightness, zero when no flash is running
    pub const fn flash(&self) -> u8 {
        self.flash
    }

    #[allow(clippy::cast_possible_truncation)]
    fn detect_beat(&mut self, ctx: &FrameContext<'_>) {
        let bass: u16 = ctx.bands[..BASS_BANDS]
            .iter()
            .map(|band| u16::from(*band))
            .sum::<u16>()
            / BASS_BANDS as u16;
        let cooled_down = self.last_beat.is_none_or(|last| {
            ctx.now
                .checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= BEAT_COOLDOWN)
        });

        if bass > BEAT_THRESHOLD && cooled_down {
            self.flash = 255;
            self.last_beat = Some(ctx.now);
        }
    }

    fn glow_color(strip: usize, num_strips: usize, intensity: u8) -> Rgb {
        let level = map8(
            i32::from(intensity),
            i32::from(GLOW_THRESHOLD),
            255,
            0,
            GLOW_MAX,
        );
        if strip < num_strips / 3 {
            Rgb::new(level, 0, level / 2)
        } else if strip < 2 * num_strips / 3 {
            Rgb::new(0, level, level / 2)
        } else {
            Rgb::new(level / 2, level, 0)
        }
    }
}

impl Animation for BeatDropAnimation {
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        let topology = ctx.topology;
        self.detect_beat(ctx);

        if self.flash > 0 {
            let white = Rgb::new(self.flash, self.flash, self.flash);
            for strip in topology.strips() {
                for led in 0..topology.leds_per_strip() {
                    leds.set(serpentine_index(topology, strip, led), white)?;
                }
            }
            self.flash = self.flash.saturating_sub(FLASH_DECAY);
            return Ok(());
        }

        leds.fade_all(BACKGROUND_FADE);
        for strip in topology.strips() {
            let intensity = ctx.intensity(strip);
            if intensity > GLOW_THRESHOLD {
                let color = Self::glow_color(strip, topology.num_strips(), intensity);
                leds.set(topology.center_of(strip), color)?;
            }
        }
        Ok(())
    }
}
