//! Classic VU meter: one bar per strip growing from the center

use super::{Animation, FrameContext, shapes::fill_from_center};
use crate::{
    buffer::PixelBuffer,
    color::{GREEN, ORANGE, RED},
    error::Result,
};

const FADE: u8 = 20;

#[derive(Debug, Clone, Copy, Default)]
pub struct VuAnimation;

impl Animation for VuAnimation {
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        leds.fade_all(FADE);
        for strip in ctx.topology.strips() {
            fill_from_center(
                leds,
                ctx.topology,
                strip,
                ctx.intensity(strip),
                (GREEN, ORANGE, RED),
            )?;
        }
        Ok(())
    }
}
