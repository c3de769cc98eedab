//! Per-animation frame pacing.
//!
//! Every animation advances at its own fixed cadence. The scheduler is a
//! polling gate, not a timer: the caller invokes it far more often than the
//! fastest interval and gets a cheap `false` until the next frame is due.

use embassy_time::{Duration, Instant};

use crate::animation::AnimationId;

/// Interval used for raw ids outside the known animation set
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Frame interval of an animation
pub const fn interval(id: AnimationId) -> Duration {
    let ms = match id {
        AnimationId::Cylon => 30,
        AnimationId::Rainbow => 10,
        AnimationId::RgbChaser => 30,
        AnimationId::BeatSine => 50,
        AnimationId::IceWaves => 20,
        AnimationId::PurpleRain => 20,
        AnimationId::Fire => 20,
        AnimationId::Matrix => 50,
        AnimationId::Vu => 5,
        AnimationId::BeatDrop => 10,
        AnimationId::SoundRipple => 15,
    };
    Duration::from_millis(ms)
}

/// Frame interval of a raw animation id, falling back to [`DEFAULT_INTERVAL`]
pub const fn interval_for_raw(raw: u8) -> Duration {
    match AnimationId::from_raw(raw) {
        Some(id) => interval(id),
        None => DEFAULT_INTERVAL,
    }
}

/// Check whether the next frame of `id` is due.
///
/// Fires once `now - last_tick` reaches the interval; a clock that went
/// backwards never fires.
pub fn should_advance(now: Instant, last_tick: Instant, id: AnimationId) -> bool {
    interval_elapsed(now, last_tick, interval(id))
}

fn interval_elapsed(now: Instant, last_tick: Instant, interval: Duration) -> bool {
    now.checked_duration_since(last_tick)
        .is_some_and(|elapsed| elapsed >= interval)
}

/// Single-shot gate that remembers when the last frame ran
#[derive(Debug, Clone)]
pub struct AnimationScheduler {
    last_tick: Instant,
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationScheduler {
    pub const fn new() -> Self {
        Self {
            last_tick: Instant::from_millis(0),
        }
    }

    pub const fn last_tick(&self) -> Instant {
        self.last_tick
    }

    /// Returns `true` when a frame of `id` is due, recording `now` as the
    /// last tick before the caller renders it
    pub fn poll(&mut self, now: Instant, id: AnimationId) -> bool {
        self.poll_interval(now, interval(id))
    }

    /// Same as [`poll`](Self::poll) for a raw id that may be unknown
    pub fn poll_raw(&mut self, now: Instant, raw: u8) -> bool {
        self.poll_interval(now, interval_for_raw(raw))
    }

    fn poll_interval(&mut self, now: Instant, interval: Duration) -> bool {
        if !interval_elapsed(now, self.last_tick, interval) {
            return false;
        }
        self.last_tick = now;
        true
    }
}
