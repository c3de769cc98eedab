mod utils;

use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{Channel, add_scaled, hsv, hsv2rgb, scale_color};

pub type Rgb = RGB8;
pub type Hsv = HSV;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
/// Web green (half intensity), as most LED palettes define it
pub const GREEN: Rgb = Rgb { r: 0, g: 128, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const ORANGE: Rgb = Rgb {
    r: 255,
    g: 165,
    b: 0,
};
