//! Waves born at each strip center and pushed outwards every frame.
//!
//! All three variants share the same shape: fade, shift outwards, stamp the
//! center with a color derived from the strip's audio intensity.

use super::{Animation, FrameContext, shapes::move_from_center};
use crate::{
    buffer::PixelBuffer,
    color::{Channel, Rgb},
    error::Result,
    math8::map8,
};

const WAVE_FADE: u8 = 15;
const FIRE_GREEN_FADE: u8 = 15;
const FIRE_RED_FADE: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveVariant {
    /// Blue base, shifting from reddish to green with intensity
    Ice,
    /// Blue base, red added with intensity
    PurpleRain,
    /// Red base, green added with intensity; channels cool at different rates
    Fire,
}

impl WaveVariant {
    /// Color stamped at the strip center
    pub fn color(self, intensity: u8) -> Rgb {
        let level = i32::from(intensity);
        match self {
            Self::Ice => Rgb {
                r: map8(level, 0, 255, 100, 0),
                g: map8(level, 0, 255, 0, 255),
                b: 255,
            },
            Self::PurpleRain => Rgb {
                r: map8(level, 0, 255, 0, 255),
                g: 0,
                b: 255,
            },
            Self::Fire => Rgb {
                r: 255,
                g: map8(level, 0, 255, 0, 255),
                b: 0,
            },
        }
    }

    fn fade<const N: usize>(self, leds: &mut PixelBuffer<N>) {
        match self {
            Self::Ice | Self::PurpleRain => leds.fade_all(WAVE_FADE),
            Self::Fire => {
                leds.fade_channel(Channel::Green, FIRE_GREEN_FADE);
                leds.fade_channel(Channel::Red, FIRE_RED_FADE);
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CenterWaveAnimation {
    variant: WaveVariant,
}

impl CenterWaveAnimation {
    pub const fn new(variant: WaveVariant) -> Self {
        Self { variant }
    }
}

impl Animation for CenterWaveAnimation {
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        self.variant.fade(leds);
        for strip in ctx.topology.strips() {
            move_from_center(leds, ctx.topology, strip)?;
            let color = self.variant.color(ctx.intensity(strip));
            leds.set(ctx.topology.center_of(strip), color)?;
        }
        Ok(())
    }
}
