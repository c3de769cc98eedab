#![no_std]

pub mod animation;
pub mod band_mapper;
pub mod brightness;
pub mod buffer;
pub mod color;
pub mod engine;
pub mod error;
pub mod intent;
pub mod math8;
pub mod rng;
pub mod scheduler;
pub mod topology;

pub use animation::{AnimationId, descriptions};
pub use band_mapper::{AudioInput, BAND_COUNT, BandVector, StripIntensities, map_to_strips};
pub use brightness::{BrightnessController, BrightnessMode};
pub use buffer::PixelBuffer;
pub use engine::{EngineConfig, Frame, LedEngine};
pub use error::{Error, Result};
pub use intent::{EngineIntent, IntentChannel, IntentReceiver, IntentSender};
pub use scheduler::AnimationScheduler;
pub use topology::{MAX_STRIPS, Topology};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Brightness is passed separately and must be applied by the driver,
/// the pixel data is never pre-scaled.
pub trait OutputDriver {
    /// Write colors to the LED strips
    fn write(&mut self, colors: &[Rgb], brightness: u8);
}
