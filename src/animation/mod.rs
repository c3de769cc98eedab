//! Animation library with a closed set of frame-advance algorithms
//!
//! Every animation owns its private state and lives for the whole engine
//! lifetime, so switching back and forth resumes where it stopped.

mod beat_drop;
mod beat_sine;
mod chaser;
mod cylon;
mod matrix;
mod rainbow;
pub mod shapes;
mod sound_ripple;
mod vu;
mod waves;

use embassy_time::Instant;

pub use beat_drop::{BEAT_COOLDOWN, BEAT_THRESHOLD, BeatDropAnimation};
pub use beat_sine::BeatSineAnimation;
pub use chaser::RgbChaserAnimation;
pub use cylon::CylonAnimation;
pub use matrix::MatrixAnimation;
pub use rainbow::RainbowAnimation;
pub use sound_ripple::{MAX_RIPPLES, Ripple, RipplePool, SPAWN_COOLDOWN, SoundRippleAnimation};
pub use vu::VuAnimation;
pub use waves::{CenterWaveAnimation, WaveVariant};

use crate::band_mapper::BandVector;
use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};
use crate::rng::SimpleRng;
use crate::topology::Topology;

const ANIMATION_NAME_RAINBOW: &str = "rainbow";
const ANIMATION_NAME_CYLON: &str = "cylon";
const ANIMATION_NAME_RGB_CHASER: &str = "rgb_chaser";
const ANIMATION_NAME_BEAT_SINE: &str = "beat_sine";
const ANIMATION_NAME_ICE_WAVES: &str = "ice_waves";
const ANIMATION_NAME_PURPLE_RAIN: &str = "purple_rain";
const ANIMATION_NAME_FIRE: &str = "fire";
const ANIMATION_NAME_MATRIX: &str = "matrix";
const ANIMATION_NAME_VU: &str = "vu";
const ANIMATION_NAME_BEAT_DROP: &str = "beat_drop";
const ANIMATION_NAME_SOUND_RIPPLE: &str = "sound_ripple";

const ANIMATION_ID_RAINBOW: u8 = 0;
const ANIMATION_ID_CYLON: u8 = 1;
const ANIMATION_ID_RGB_CHASER: u8 = 2;
const ANIMATION_ID_BEAT_SINE: u8 = 3;
const ANIMATION_ID_ICE_WAVES: u8 = 4;
const ANIMATION_ID_PURPLE_RAIN: u8 = 5;
const ANIMATION_ID_FIRE: u8 = 6;
const ANIMATION_ID_MATRIX: u8 = 7;
const ANIMATION_ID_VU: u8 = 8;
const ANIMATION_ID_BEAT_DROP: u8 = 9;
const ANIMATION_ID_SOUND_RIPPLE: u8 = 10;

/// Known animations, in selection-list order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum AnimationId {
    #[default]
    Rainbow = ANIMATION_ID_RAINBOW,
    Cylon = ANIMATION_ID_CYLON,
    RgbChaser = ANIMATION_ID_RGB_CHASER,
    BeatSine = ANIMATION_ID_BEAT_SINE,
    IceWaves = ANIMATION_ID_ICE_WAVES,
    PurpleRain = ANIMATION_ID_PURPLE_RAIN,
    Fire = ANIMATION_ID_FIRE,
    Matrix = ANIMATION_ID_MATRIX,
    Vu = ANIMATION_ID_VU,
    BeatDrop = ANIMATION_ID_BEAT_DROP,
    SoundRipple = ANIMATION_ID_SOUND_RIPPLE,
}

impl AnimationId {
    /// All animations in the order selection UIs list them
    pub const ALL: [Self; 11] = [
        Self::Rainbow,
        Self::Cylon,
        Self::RgbChaser,
        Self::BeatSine,
        Self::IceWaves,
        Self::PurpleRain,
        Self::Fire,
        Self::Matrix,
        Self::Vu,
        Self::BeatDrop,
        Self::SoundRipple,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ANIMATION_ID_RAINBOW => Self::Rainbow,
            ANIMATION_ID_CYLON => Self::Cylon,
            ANIMATION_ID_RGB_CHASER => Self::RgbChaser,
            ANIMATION_ID_BEAT_SINE => Self::BeatSine,
            ANIMATION_ID_ICE_WAVES => Self::IceWaves,
            ANIMATION_ID_PURPLE_RAIN => Self::PurpleRain,
            ANIMATION_ID_FIRE => Self::Fire,
            ANIMATION_ID_MATRIX => Self::Matrix,
            ANIMATION_ID_VU => Self::Vu,
            ANIMATION_ID_BEAT_DROP => Self::BeatDrop,
            ANIMATION_ID_SOUND_RIPPLE => Self::SoundRipple,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Machine name used by the web collaborator
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => ANIMATION_NAME_RAINBOW,
            Self::Cylon => ANIMATION_NAME_CYLON,
            Self::RgbChaser => ANIMATION_NAME_RGB_CHASER,
            Self::BeatSine => ANIMATION_NAME_BEAT_SINE,
            Self::IceWaves => ANIMATION_NAME_ICE_WAVES,
            Self::PurpleRain => ANIMATION_NAME_PURPLE_RAIN,
            Self::Fire => ANIMATION_NAME_FIRE,
            Self::Matrix => ANIMATION_NAME_MATRIX,
            Self::Vu => ANIMATION_NAME_VU,
            Self::BeatDrop => ANIMATION_NAME_BEAT_DROP,
            Self::SoundRipple => ANIMATION_NAME_SOUND_RIPPLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == s)
    }

    /// Human-readable name shown in selection lists
    pub const fn description(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Cylon => "Cylon",
            Self::RgbChaser => "RGB Chaser",
            Self::BeatSine => "Beat Sine",
            Self::IceWaves => "Ice Waves",
            Self::PurpleRain => "Purple Rain",
            Self::Fire => "Fire",
            Self::Matrix => "Matrix",
            Self::Vu => "VU",
            Self::BeatDrop => "Beat Drop",
            Self::SoundRipple => "Sound Ripple",
        }
    }
}

impl TryFrom<u8> for AnimationId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::from_raw(value).ok_or(Error::InvalidAnimationId(value))
    }
}

/// Ordered `(id, description)` pairs for populating selection UIs
pub fn descriptions() -> impl Iterator<Item = (AnimationId, &'static str)> {
    AnimationId::ALL.into_iter().map(|id| (id, id.description()))
}

/// Everything an animation may read while rendering one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub topology: Topology,
    /// Mapped audio intensity, one per strip
    pub intensities: &'a [u8],
    /// Raw analyzer bands
    pub bands: &'a BandVector,
    pub now: Instant,
}

impl FrameContext<'_> {
    /// Mapped intensity of a strip, zero if unknown
    pub fn intensity(&self, strip: usize) -> u8 {
        self.intensities.get(strip).copied().unwrap_or(0)
    }
}

pub trait Animation {
    /// Advance the animation by one frame
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()>;
}

/// Persistent state of every animation
#[derive(Debug, Clone)]
pub struct AnimationLibrary {
    rainbow: RainbowAnimation,
    cylon: CylonAnimation,
    rgb_chaser: RgbChaserAnimation,
    beat_sine: BeatSineAnimation,
    ice_waves: CenterWaveAnimation,
    purple_rain: CenterWaveAnimation,
    fire: CenterWaveAnimation,
    matrix: MatrixAnimation,
    vu: VuAnimation,
    beat_drop: BeatDropAnimation,
    sound_ripple: SoundRippleAnimation,
}

impl AnimationLibrary {
    pub fn new(seed: u64) -> Self {
        Self {
            rainbow: RainbowAnimation::default(),
            cylon: CylonAnimation::default(),
            rgb_chaser: RgbChaserAnimation::default(),
            beat_sine: BeatSineAnimation,
            ice_waves: CenterWaveAnimation::new(WaveVariant::Ice),
            purple_rain: CenterWaveAnimation::new(WaveVariant::PurpleRain),
            fire: CenterWaveAnimation::new(WaveVariant::Fire),
            matrix: MatrixAnimation::new(SimpleRng::new(seed)),
            vu: VuAnimation,
            beat_drop: BeatDropAnimation::default(),
            sound_ripple: SoundRippleAnimation::default(),
        }
    }

    /// Render one frame of `id`
    pub fn advance<const N: usize>(
        &mut self,
        id: AnimationId,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        match id {
            AnimationId::Rainbow => self.rainbow.advance(ctx, leds),
            AnimationId::Cylon => self.cylon.advance(ctx, leds),
            AnimationId::RgbChaser => self.rgb_chaser.advance(ctx, leds),
            AnimationId::BeatSine => self.beat_sine.advance(ctx, leds),
            AnimationId::IceWaves => self.ice_waves.advance(ctx, leds),
            AnimationId::PurpleRain => self.purple_rain.advance(ctx, leds),
            AnimationId::Fire => self.fire.advance(ctx, leds),
            AnimationId::Matrix => self.matrix.advance(ctx, leds),
            AnimationId::Vu => self.vu.advance(ctx, leds),
            AnimationId::BeatDrop => self.beat_drop.advance(ctx, leds),
            AnimationId::SoundRipple => self.sound_ripple.advance(ctx, leds),
        }
    }

    /// Ripple pool of the sound ripple animation
    pub fn ripples(&self) -> &RipplePool {
        self.sound_ripple.pool()
    }
}
