use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::animation::{AnimationId, AnimationLibrary, FrameContext, RipplePool};
use crate::band_mapper::{AudioInput, StripIntensities, intensity_for_strip, map_to_strips};
use crate::brightness::{BrightnessController, BrightnessMode};
use crate::buffer::PixelBuffer;
use crate::color::{RED, Rgb, WHITE};
use crate::error::{Error, Result};
use crate::intent::{EngineIntent, IntentReceiver};
use crate::scheduler::AnimationScheduler;
use crate::topology::Topology;

const DEFAULT_RNG_SEED: u64 = 0x5eed_1ed5;

/// Engine settings, read by the caller from persisted configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Stored strip count; zero means the installation was never set up
    pub num_strips: i32,
    pub leds_per_strip: i32,
    pub animation: AnimationId,
    pub animations_enabled: bool,
    pub brightness: BrightnessMode,
    /// Seed for animations that scatter pixels randomly
    pub rng_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_strips: 0,
            leds_per_strip: 0,
            animation: AnimationId::Rainbow,
            animations_enabled: false,
            brightness: BrightnessMode::default(),
            rng_seed: DEFAULT_RNG_SEED,
        }
    }
}

impl EngineConfig {
    pub fn new(num_strips: i32, leds_per_strip: i32) -> Self {
        Self {
            num_strips,
            leds_per_strip,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationId) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_animations_enabled(mut self, enabled: bool) -> Self {
        self.animations_enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_brightness(mut self, brightness: BrightnessMode) -> Self {
        self.brightness = brightness;
        self
    }

    #[must_use]
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = seed;
        self
    }
}

/// Read-only view of a finished frame, handed to the output driver
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub pixels: &'a [Rgb],
    /// Global brightness the driver applies on output
    pub brightness: u8,
}

/// Buffer and layout; only present for a valid topology
#[derive(Debug, Clone)]
struct Canvas<const MAX_LEDS: usize> {
    topology: Topology,
    leds: PixelBuffer<MAX_LEDS>,
}

/// LED animation engine - owns the frame buffer and runs one animation
///
/// Drive it with [`tick`](Self::tick) from the main loop and read the result
/// with [`frame`](Self::frame) in between ticks. An engine built from an invalid
/// topology stays disabled: every call is a no-op and all queries report zero.
pub struct LedEngine<const MAX_LEDS: usize> {
    canvas: Option<Canvas<MAX_LEDS>>,
    config_error: Option<Error>,

    // Selection
    animation: u8,
    animations_enabled: bool,
    white_mode: bool,

    // Inputs
    audio: AudioInput,
    intensities: StripIntensities,

    // Internal dependencies
    brightness: BrightnessController,
    scheduler: AnimationScheduler,
    library: AnimationLibrary,
    skipped_frames: u32,
}

impl<const MAX_LEDS: usize> LedEngine<MAX_LEDS> {
    /// Build an engine, falling back to the disabled state on a bad topology.
    ///
    /// The error stays available through [`config_error`](Self::config_error).
    pub fn new(config: &EngineConfig) -> Self {
        let canvas = Topology::new(config.num_strips, config.leds_per_strip).and_then(|topology| {
            Ok(Canvas {
                topology,
                leds: PixelBuffer::new(topology)?,
            })
        });

        let (canvas, config_error) = match canvas {
            Ok(canvas) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[LedEngine.new] {:?} strips, {:?} LEDs/strip, {:?} total",
                    canvas.topology.num_strips(),
                    canvas.topology.leds_per_strip(),
                    canvas.topology.total_leds()
                );
                (Some(canvas), None)
            }
            Err(error) => {
                #[cfg(feature = "esp32-log")]
                println!("[LedEngine.new] LED output disabled: {}", error);
                (None, Some(error))
            }
        };

        Self {
            canvas,
            config_error,
            animation: config.animation.as_raw(),
            animations_enabled: config.animations_enabled,
            white_mode: false,
            audio: AudioInput::default(),
            intensities: StripIntensities::new(),
            brightness: BrightnessController::new(config.brightness),
            scheduler: AnimationScheduler::new(),
            library: AnimationLibrary::new(config.rng_seed),
            skipped_frames: 0,
        }
    }

    /// Build an engine, returning the configuration error instead of a
    /// disabled engine
    pub fn try_new(config: &EngineConfig) -> Result<Self> {
        let engine = Self::new(config);
        match engine.config_error {
            Some(error) => Err(error),
            None => Ok(engine),
        }
    }

    /// Advance the current animation if its next frame is due.
    ///
    /// Returns `true` when the buffer changed. A frame that fails is dropped
    /// and the engine keeps ticking.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(canvas) = self.canvas.as_mut() else {
            return false;
        };
        self.brightness.tick(now);

        if !self.scheduler.poll_raw(now, self.animation) {
            return false;
        }
        if !self.animations_enabled || self.white_mode {
            return false;
        }
        let Some(id) = AnimationId::from_raw(self.animation) else {
            return false;
        };

        self.intensities = map_to_strips(&self.audio.bands, canvas.topology);
        let ctx = FrameContext {
            topology: canvas.topology,
            intensities: &self.intensities,
            bands: &self.audio.bands,
            now,
        };

        match self.library.advance(id, &ctx, &mut canvas.leds) {
            Ok(()) => true,
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[LedEngine.tick] skipping {} frame: {}", id.as_str(), _error);
                self.skipped_frames = self.skipped_frames.saturating_add(1);
                false
            }
        }
    }

    /// Tick and push the frame to the driver, once per main-loop iteration
    pub fn update<D: OutputDriver>(&mut self, now: Instant, driver: &mut D) -> bool {
        let advanced = self.tick(now);
        self.show(driver);
        advanced
    }

    /// Current frame, `None` while the engine is disabled
    pub fn frame(&self) -> Option<Frame<'_>> {
        let canvas = self.canvas.as_ref()?;
        Some(Frame {
            pixels: canvas.leds.as_slice(),
            brightness: self.effective_brightness(),
        })
    }

    /// Write the current frame to the driver
    pub fn show<D: OutputDriver>(&self, driver: &mut D) {
        if let Some(frame) = self.frame() {
            driver.write(frame.pixels, frame.brightness);
        }
    }

    /// Drain pending intents from the queue (non-blocking)
    pub fn process_intents<const SIZE: usize>(&mut self, intents: IntentReceiver<'_, SIZE>) {
        for intent in intents {
            self.apply(intent);
        }
    }

    /// Apply a single intent
    pub fn apply(&mut self, intent: EngineIntent) {
        match intent {
            EngineIntent::SelectAnimation(id) => {
                self.select_animation(id);
                self.set_animations_enabled(true);
            }
            EngineIntent::SelectRawAnimation(raw) => {
                if self.select_raw_animation(raw).is_ok() {
                    self.set_animations_enabled(true);
                }
            }
            EngineIntent::SetAnimationsEnabled(enabled) => self.set_animations_enabled(enabled),
            EngineIntent::SetBrightnessMode(mode) => self.set_brightness_mode(mode),
            EngineIntent::SetBrightness(level) => self.set_brightness(level),
            EngineIntent::SetAudioReactive(enabled) => self.set_audio_reactive(enabled),
            EngineIntent::SetColor(color) => self.set_color(color),
            EngineIntent::SetWhiteMode(enabled) => self.set_white_mode(enabled),
            EngineIntent::Audio(audio) => self.update_audio(audio),
        }
    }

    pub fn select_animation(&mut self, id: AnimationId) {
        #[cfg(feature = "esp32-log")]
        println!("[LedEngine.select_animation] {}", id.as_str());
        self.animation = id.as_raw();
    }

    /// Select by raw id.
    ///
    /// An unknown id is kept as the selection: it is paced at the default
    /// interval and renders nothing.
    pub fn select_raw_animation(&mut self, raw: u8) -> Result<AnimationId> {
        self.animation = raw;
        AnimationId::try_from(raw)
    }

    /// Selected animation, `None` for an unknown raw id
    pub fn animation(&self) -> Option<AnimationId> {
        AnimationId::from_raw(self.animation)
    }

    pub fn set_animations_enabled(&mut self, enabled: bool) {
        self.animations_enabled = enabled;
        if enabled {
            self.white_mode = false;
        }
    }

    pub fn animations_enabled(&self) -> bool {
        self.animations_enabled
    }

    pub fn update_audio(&mut self, audio: AudioInput) {
        self.audio = audio;
    }

    pub fn audio(&self) -> AudioInput {
        self.audio
    }

    pub fn set_brightness_mode(&mut self, mode: BrightnessMode) {
        self.brightness.set_mode(mode);
    }

    pub fn brightness_mode(&self) -> BrightnessMode {
        self.brightness.mode()
    }

    /// Set the static brightness
    pub fn set_brightness(&mut self, level: u8) {
        self.brightness.set_level(level);
    }

    /// Static brightness as chosen by the user
    pub fn brightness(&self) -> u8 {
        self.brightness.level()
    }

    pub fn set_audio_reactive(&mut self, enabled: bool) {
        self.brightness.set_audio_reactive(enabled);
    }

    /// Brightness the driver should apply to the current frame
    pub fn effective_brightness(&self) -> u8 {
        self.brightness.effective(i32::from(self.audio.level))
    }

    /// Fill the whole buffer, leaving mode flags untouched
    pub fn fill_color(&mut self, color: Rgb) {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.leds.fill(color);
        }
    }

    /// Show a solid color, stopping animations
    pub fn set_color(&mut self, color: Rgb) {
        self.animations_enabled = false;
        self.white_mode = false;
        self.fill_color(color);
    }

    /// Toggle full white output; enabling it stops animations
    pub fn set_white_mode(&mut self, enabled: bool) {
        self.white_mode = enabled;
        if enabled {
            self.animations_enabled = false;
            self.fill_color(WHITE);
        }
    }

    pub fn white_mode(&self) -> bool {
        self.white_mode
    }

    /// Show red and ramp brightness up from black without blocking
    pub fn start_fade_in(&mut self, now: Instant) {
        if self.canvas.is_none() {
            return;
        }
        self.fill_color(RED);
        self.brightness.start_fade_in(now);
    }

    pub fn is_fading_in(&self) -> bool {
        self.brightness.is_fading_in()
    }

    pub fn is_config_valid(&self) -> bool {
        self.canvas.is_some()
    }

    /// Error that disabled the engine at construction
    pub fn config_error(&self) -> Option<Error> {
        self.config_error
    }

    pub fn topology(&self) -> Option<Topology> {
        self.canvas.as_ref().map(|canvas| canvas.topology)
    }

    pub fn num_strips(&self) -> usize {
        self.topology().map_or(0, Topology::num_strips)
    }

    pub fn leds_per_strip(&self) -> usize {
        self.topology().map_or(0, Topology::leds_per_strip)
    }

    pub fn total_leds(&self) -> usize {
        self.topology().map_or(0, Topology::total_leds)
    }

    /// Audio intensity of a strip for the latest analyzer snapshot
    pub fn strip_intensity(&self, strip: usize) -> u8 {
        self.topology()
            .map_or(0, |topology| intensity_for_strip(&self.audio.bands, topology, strip))
    }

    /// Frames dropped because an animation failed
    pub fn skipped_frames(&self) -> u32 {
        self.skipped_frames
    }

    /// Live ripples of the sound ripple animation
    pub fn ripples(&self) -> &RipplePool {
        self.library.ripples()
    }
}
