//! Red scanner bouncing along every strip.
//!
//! Neighbouring strips mirror each other, so on a serpentine installation the
//! dots meet and part like a single scanner folded over.

use super::{Animation, FrameContext};
use crate::{buffer::PixelBuffer, color::RED, error::Result};

const FADE: u8 = 35;

#[derive(Debug, Clone)]
pub struct CylonAnimation {
    cursor: usize,
    forward: bool,
}

impl Default for CylonAnimation {
    fn default() -> Self {
        Self {
            cursor: 0,
            forward: true,
        }
    }
}

impl CylonAnimation {
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    fn step(&mut self, leds_per_strip: usize) {
        let last = leds_per_strip.saturating_sub(1);
        if last == 0 {
            self.cursor = 0;
            return;
        }
        if self.forward {
            self.cursor = (self.cursor + 1).min(last);
            if self.cursor == last {
                self.forward = false;
            }
        } else {
            self.cursor = self.cursor.saturating_sub(1);
            if self.cursor == 0 {
                self.forward = true;
            }
        }
    }
}

impl Animation for CylonAnimation {
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        let topology = ctx.topology;
        let per_strip = topology.leds_per_strip();
        let cursor = self.cursor.min(per_strip - 1);

        for strip in topology.strips() {
            let offset = if strip % 2 == 0 {
                cursor
            } else {
                per_strip - 1 - cursor
            };
            leds.set(topology.strip_start(strip) + offset, RED)?;
        }
        leds.fade_all(FADE);

        self.step(per_strip);
        Ok(())
    }
}
