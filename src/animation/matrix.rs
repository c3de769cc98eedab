//! Green rain cascading down the strips, seeded by loud strips

use super::{Animation, FrameContext, shapes::move_down};
use crate::{
    buffer::PixelBuffer,
    color::{Channel, GREEN},
    error::Result,
    rng::SimpleRng,
};

const GREEN_FADE: u8 = 15;
/// Strips louder than this spawn a drop
const SPAWN_THRESHOLD: u8 = 180;

#[derive(Debug, Clone)]
pub struct MatrixAnimation {
    rng: SimpleRng,
}

impl MatrixAnimation {
    pub const fn new(rng: SimpleRng) -> Self {
        Self { rng }
    }
}

impl Animation for MatrixAnimation {
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        let topology = ctx.topology;
        move_down(leds, topology)?;
        leds.fade_channel(Channel::Green, GREEN_FADE);

        for strip in topology.strips() {
            if ctx.intensity(strip) > SPAWN_THRESHOLD {
                let offset = self.rng.below(topology.leds_per_strip());
                leds.set(topology.strip_start(strip) + offset, GREEN)?;
            }
        }
        Ok(())
    }
}
