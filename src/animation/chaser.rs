//! Single pixel walking the entire buffer, switching color on every lap

use super::{Animation, FrameContext};
use crate::{
    buffer::PixelBuffer,
    color::{BLUE, GREEN, RED, Rgb},
    error::Result,
};

const PALETTE: [Rgb; 3] = [RED, GREEN, BLUE];

#[derive(Debug, Clone, Default)]
pub struct RgbChaserAnimation {
    cursor: usize,
    color_index: usize,
}

impl RgbChaserAnimation {
    pub const fn color(&self) -> Rgb {
        PALETTE[self.color_index]
    }
}

impl Animation for RgbChaserAnimation {
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        let total = ctx.topology.total_leds();
        if self.cursor >= total {
            self.cursor = 0;
        }

        leds.set(self.cursor, self.color())?;
        self.cursor += 1;
        if self.cursor == total {
            self.cursor = 0;
            self.color_index = (self.color_index + 1) % PALETTE.len();
        }
        Ok(())
    }
}
