//! Rings spawned by audio peaks, expanding from every strip center.
//!
//! Rings are additive: where two overlap the pixel gets brighter instead of
//! one ring painting over the other.

use embassy_time::{Duration, Instant};

use super::{
    Animation, FrameContext,
    shapes::{mirrored, on_strip},
};
use crate::{
    buffer::PixelBuffer,
    color::{BLACK, Rgb, hsv},
    error::Result,
    math8::map8,
};

/// Number of ripples that can be alive at the same time
pub const MAX_RIPPLES: usize = 10;
/// Minimum time between two spawned ripples
pub const SPAWN_COOLDOWN: Duration = Duration::from_millis(50);
/// Strips louder than this spawn a ripple
const SPAWN_THRESHOLD: u8 = 120;
const FADE: u8 = 25;
const BRIGHTNESS_DECAY: u8 = 8;
/// Ripples dimmer than this are retired
const MIN_BRIGHTNESS: u8 = 10;
/// How far past the strip half a ripple may travel before it is retired
const RADIUS_SLACK: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub radius: usize,
    pub brightness: u8,
    pub color: Rgb,
}

impl Ripple {
    const IDLE: Self = Self {
        radius: 0,
        brightness: 0,
        color: BLACK,
    };

    pub const fn is_active(&self) -> bool {
        self.brightness > 0
    }

    /// Brightness at the current radius, dimmer the further it travelled
    #[allow(clippy::cast_possible_truncation)]
    fn brightness_at(&self, half_strip: usize) -> u8 {
        if self.radius == 0 {
            return self.brightness;
        }
        let remaining = half_strip - self.radius + 1;
        (usize::from(self.brightness) * remaining / half_strip) as u8
    }

    /// Move one LED outwards and dim, retiring the ripple when spent
    fn expand(&mut self, leds_per_strip: usize) {
        self.radius += 1;
        self.brightness = self.brightness.saturating_sub(BRIGHTNESS_DECAY);
        if self.brightness < MIN_BRIGHTNESS || self.radius > leds_per_strip / 2 + RADIUS_SLACK {
            self.brightness = 0;
        }
    }
}

/// Fixed pool of ripple slots, reused round-robin
#[derive(Debug, Clone)]
pub struct RipplePool {
    slots: [Ripple; MAX_RIPPLES],
    next: usize,
}

impl Default for RipplePool {
    fn default() -> Self {
        Self {
            slots: [Ripple::IDLE; MAX_RIPPLES],
            next: 0,
        }
    }
}

impl RipplePool {
    /// Start a ripple in the next slot, replacing whatever lived there
    pub fn spawn(&mut self, color: Rgb) {
        self.slots[self.next] = Ripple {
            radius: 0,
            brightness: 255,
            color,
        };
        self.next = (self.next + 1) % MAX_RIPPLES;
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|ripple| ripple.is_active()).count()
    }

    pub fn slots(&self) -> &[Ripple] {
        &self.slots
    }

    /// Slot the next spawn will claim
    pub const fn next_slot(&self) -> usize {
        self.next
    }
}

#[derive(Debug, Clone, Default)]
pub struct SoundRippleAnimation {
    pool: RipplePool,
    last_spawn: Option<Instant>,
}

impl SoundRippleAnimation {
    pub const fn pool(&self) -> &RipplePool {
        &self.pool
    }

    fn cooled_down(&self, now: Instant) -> bool {
        self.last_spawn.is_none_or(|last| {
            now.checked_duration_since(last)
                .is_some_and(|elapsed| elapsed >= SPAWN_COOLDOWN)
        })
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    fn spawn_color(strip: usize, num_strips: usize, intensity: u8) -> Rgb {
        let hue = if num_strips > 1 {
            map8(strip as i32, 0, num_strips as i32 - 1, 0, 255)
        } else {
            0
        };
        let val = map8(i32::from(intensity), i32::from(SPAWN_THRESHOLD), 255, 150, 255);
        hsv(hue, 255, val)
    }

    fn spawn_ripples(&mut self, ctx: &FrameContext<'_>) {
        let num_strips = ctx.topology.num_strips();
        for strip in ctx.topology.strips() {
            let intensity = ctx.intensity(strip);
            if intensity > SPAWN_THRESHOLD && self.cooled_down(ctx.now) {
                self.pool
                    .spawn(Self::spawn_color(strip, num_strips, intensity));
                self.last_spawn = Some(ctx.now);
            }
        }
    }
}

impl Animation for SoundRippleAnimation {
    fn advance<const N: usize>(
        &mut self,
        ctx: &FrameContext<'_>,
        leds: &mut PixelBuffer<N>,
    ) -> Result<()> {
        let topology = ctx.topology;
        let half_strip = topology.leds_per_strip() / 2;

        leds.fade_all(FADE);
        self.spawn_ripples(ctx);

        for ripple in self.pool.slots.iter_mut().filter(|r| r.is_active()) {
            if ripple.radius <= half_strip {
                let brightness = ripple.brightness_at(half_strip);
                for strip in topology.strips() {
                    let center = topology.center_of(strip);
                    if ripple.radius == 0 {
                        leds.add_scaled(center, ripple.color, brightness)?;
                        continue;
                    }
                    for index in mirrored(center, ripple.radius) {
                        if let Some(index) = on_strip(topology, strip, index) {
                            leds.add_scaled(index, ripple.color, brightness)?;
                        }
                    }
                }
            }
            ripple.expand(topology.leds_per_strip());
        }
        Ok(())
    }
}
