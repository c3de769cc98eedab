pub use smart_leds::hsv::hsv2rgb;

use crate::{
    color::{Hsv, Rgb},
    math8::{qadd8, scale8},
};

/// Single color channel of a pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Mutable access to the channel value of a pixel
    pub fn of(self, pixel: &mut Rgb) -> &mut u8 {
        match self {
            Self::Red => &mut pixel.r,
            Self::Green => &mut pixel.g,
            Self::Blue => &mut pixel.b,
        }
    }
}

/// Build an RGB color from hue, saturation and value
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Scale every channel of a color (0-255 = 0.0-1.0)
#[inline]
pub const fn scale_color(color: Rgb, scale: u8) -> Rgb {
    Rgb {
        r: scale8(color.r, scale),
        g: scale8(color.g, scale),
        b: scale8(color.b, scale),
    }
}

/// Saturating add of `color` scaled by `scale` on top of `base`
#[inline]
pub const fn add_scaled(base: Rgb, color: Rgb, scale: u8) -> Rgb {
    let color = scale_color(color, scale);
    Rgb {
        r: qadd8(base.r, color.r),
        g: qadd8(base.g, color.g),
        b: qadd8(base.b, color.b),
    }
}
