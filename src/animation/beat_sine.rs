//! Rainbow whose start hue swings with two sine waves of different tempo

use super::{Animation, FrameContext};
use crate::{buffer::PixelBuffer, color::hsv, error::Result, math8::beatsin16};

const BEAT_A_BPM: u8 = 30;
const BEAT_B_BPM: u8 = 20;
const HUE_STEP: u8 = 2;
const SATURATION: u8 = 240;

/// Stateless: the phase comes from the clock, not from a frame counter
#[derive(Debug, Clone, Copy, Default)]
pub struct BeatSineAnimation;

impl BeatSineAnimation {
    /// Start hue of the rainbow at the frame time
    #[allow(clippy::cast_possible_truncation)]
    pub fn start_hue(ctx: &FrameContext<'_>) -> u8 {
        let beat_a = beatsin16(BEAT_A_BPM, 0, 255, ctx.now);
        let beat_b = beatsin16(BEAT_B_BPM, 0, 255, ctx.now);
        ((beat_a + beat_b) / 2) as u8
    }
}

impl Animation for BeatSineAnimation {
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        let mut hue = Self::start_hue(ctx);
        for index in 0..ctx.topology.total_leds() {
            leds.set(index, hsv(hue, SATURATION, 255))?;
            hue = hue.wrapping_add(HUE_STEP);
        }
        Ok(())
    }
}
