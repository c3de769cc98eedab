//! Global output brightness
//!
//! Brightness never touches pixel data: the resolved byte travels to the
//! output driver next to the frame. Besides the static and audio-reactive
//! modes it runs the startup fade-in.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Time spent on each brightness step of the startup fade-in
pub const FADE_IN_STEP: Duration = Duration::from_millis(25);

/// Fade-in targets below this are considered a misconfiguration
const FADE_IN_MIN_TARGET: u8 = 64;
const FADE_IN_FALLBACK_TARGET: u8 = 128;

/// Linear ramp from black, one brightness step per [`FADE_IN_STEP`]
#[derive(Debug, Clone, Copy)]
struct FadeIn {
    target: u8,
    started: Instant,
    level: u8,
}

impl FadeIn {
    const fn new(target: u8, started: Instant) -> Self {
        Self {
            target,
            started,
            level: 0,
        }
    }

    /// Move the level to `now`; returns `false` once the target is reached
    #[allow(clippy::cast_possible_truncation)]
    fn advance(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started);
        let steps = elapsed.as_millis() / FADE_IN_STEP.as_millis();
        self.level = steps.min(u64::from(self.target)) as u8;
        self.level < self.target
    }
}

/// How the effective brightness is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessMode {
    /// Fixed user value
    Static(u8),
    /// Follows the overall audio level
    AudioReactive,
}

impl Default for BrightnessMode {
    fn default() -> Self {
        Self::Static(FADE_IN_FALLBACK_TARGET)
    }
}

/// Resolves the effective brightness once per frame
#[derive(Debug, Clone)]
pub struct BrightnessController {
    mode: BrightnessMode,
    /// Last static value, kept while audio-reactive mode is active
    level: u8,
    fade_in: Option<FadeIn>,
}

impl BrightnessController {
    pub fn new(mode: BrightnessMode) -> Self {
        let level = match mode {
            BrightnessMode::Static(level) => level,
            BrightnessMode::AudioReactive => FADE_IN_FALLBACK_TARGET,
        };
        Self {
            mode,
            level,
            fade_in: None,
        }
    }

    pub const fn mode(&self) -> BrightnessMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: BrightnessMode) {
        if let BrightnessMode::Static(level) = mode {
            self.level = level;
        }
        self.mode = mode;
    }

    /// Static user brightness, regardless of the active mode
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Set the user brightness and switch to static mode
    pub fn set_level(&mut self, level: u8) {
        self.set_mode(BrightnessMode::Static(level));
    }

    /// Enable or disable audio-reactive mode, restoring the static level on exit
    pub fn set_audio_reactive(&mut self, enabled: bool) {
        self.mode = if enabled {
            BrightnessMode::AudioReactive
        } else {
            BrightnessMode::Static(self.level)
        };
    }

    /// Resolve brightness for the current frame
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn effective(&self, audio_level: i32) -> u8 {
        if let Some(fade_in) = &self.fade_in {
            return fade_in.level;
        }
        match self.mode {
            BrightnessMode::Static(level) => level,
            BrightnessMode::AudioReactive => audio_level.clamp(0, 255) as u8,
        }
    }

    /// Ramp from black up to the static level, one step per [`FADE_IN_STEP`].
    ///
    /// A dim stored level ramps to the fallback target instead; the stored
    /// level and mode are left as they are and apply again once the ramp ends.
    pub fn start_fade_in(&mut self, now: Instant) {
        let target = if self.level < FADE_IN_MIN_TARGET {
            FADE_IN_FALLBACK_TARGET
        } else {
            self.level
        };
        #[cfg(feature = "esp32-log")]
        println!("[BrightnessController.start_fade_in] ramping to {:?}", target);

        self.fade_in = Some(FadeIn::new(target, now));
    }

    pub const fn is_fading_in(&self) -> bool {
        self.fade_in.is_some()
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(fade_in) = &mut self.fade_in {
            if !fade_in.advance(now) {
                self.fade_in = None;
            }
        }
    }
}
