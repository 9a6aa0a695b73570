//! Shake-on-invalid animation
//!
//! A rising edge of the trigger pushes the content sideways, holds the target
//! for a moment, then lets a bouncy spring pull it back to rest:
//!
//! ```text
//! offset
//!  100 |    ___
//!      |   /   \
//!    0 |__/     \    _.-._______
//!      |         \__/
//!      +--|-----|------------------ time
//!       trigger +200ms release
//! ```
//!
//! The effect is cosmetic. It never blocks input, and dropping it drops any
//! pending release with it.

use std::time::{Duration, Instant};

use crate::spring::{Num, Spring, SpringParams};

/// Horizontal displacement the content is pushed to, in logical pixels
pub const SHAKE_DISPLACEMENT: f32 = 100.0;

/// How long the displaced target is held before release
pub const SHAKE_HOLD: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Rest,
    Holding { release_at: Instant },
    Releasing,
}

/// Horizontal shake driven by a boolean trigger.
#[derive(Debug, Clone)]
pub struct ShakeEffect {
    trigger: bool,
    phase: Phase,
    spring: Spring,
    displacement: Num,
    hold: Duration,
}

impl ShakeEffect {
    pub fn new(now: Instant) -> Self {
        Self {
            trigger: false,
            phase: Phase::Rest,
            spring: Spring::new(0.0, now).with_params(SpringParams::HIGH_BOUNCY_MEDIUM_LOW),
            displacement: SHAKE_DISPLACEMENT as Num,
            hold: SHAKE_HOLD,
        }
    }

    pub fn with_displacement(mut self, displacement: f32) -> Self {
        self.displacement = displacement as Num;
        self
    }

    pub fn with_hold(mut self, hold: Duration) -> Self {
        self.hold = hold;
        self
    }

    /// Replace the release spring's parameters
    pub fn with_params(mut self, params: SpringParams) -> Self {
        self.spring = self.spring.with_params(params);
        self
    }

    /// Current trigger value
    pub fn trigger(&self) -> bool {
        self.trigger
    }

    /// Record the trigger. Returns true when a rising edge started a shake.
    pub fn set_trigger(&mut self, active: bool, now: Instant) -> bool {
        let rising = active && !self.trigger;
        self.trigger = active;
        if rising {
            self.restart(now);
        }
        rising
    }

    /// Start the displace/hold/release sequence from wherever the content is now.
    pub fn restart(&mut self, now: Instant) {
        self.tick(now);
        self.spring.set_target(self.displacement, now);
        self.phase = Phase::Holding {
            release_at: now + self.hold,
        };
        tracing::debug!(displacement = self.displacement, "shake started");
    }

    /// Advance the sequence: release the held target once the hold has elapsed.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Holding { release_at } if now >= release_at => {
                // Release at the deadline, not at `now`, so frame jitter doesn't change the curve
                self.spring.set_target(0.0, release_at);
                self.phase = Phase::Releasing;
                tracing::debug!("shake released");
            }
            Phase::Releasing if self.spring.is_settled(now) => {
                self.spring.snap_to(0.0, now);
                self.phase = Phase::Rest;
            }
            _ => {}
        }
    }

    /// Horizontal offset at `now`.
    ///
    /// Correct even when `tick` lags behind: a hold that has already expired is
    /// evaluated as released.
    pub fn offset(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Holding { release_at } if now >= release_at => {
                let mut released = self.spring.clone();
                released.set_target(0.0, release_at);
                released.position(now) as f32
            }
            Phase::Rest => 0.0,
            _ => self.spring.position(now) as f32,
        }
    }

    /// Whether the host should keep requesting frames
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.phase {
            Phase::Rest => false,
            Phase::Holding { .. } => true,
            Phase::Releasing => !self.spring.is_settled(now),
        }
    }
}
