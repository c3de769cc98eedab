//! Rainbow spread over the whole installation, rotating one hue step per frame

use super::{Animation, FrameContext};
use crate::{buffer::PixelBuffer, color::hsv, error::Result};

#[derive(Debug, Clone, Default)]
pub struct RainbowAnimation {
    hue: u8,
}

impl Animation for RainbowAnimation {
    #[allow(clippy::cast_possible_truncation)]
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        let total = ctx.topology.total_leds();
        for index in 0..total {
            let offset = (index * 256 / total) as u8;
            leds.set(index, hsv(offset.wrapping_add(self.hue), 255, 255))?;
        }
        self.hue = self.hue.wrapping_add(1);
        Ok(())
    }
}
