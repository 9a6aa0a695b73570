//! Spring physics for the shake animation
//!
//! Uses time-based analytical solutions rather than frame-by-frame integration,
//! so a spring can be sampled at any `Instant` and two samples at the same
//! instant always agree.
//!
//! With displacement `x0 = from - to`, initial velocity `v0`,
//! `wn = sqrt(stiffness / mass)` and `zeta = damping / (2 * sqrt(stiffness * mass))`:
//!
//! ### Underdamped (`zeta < 1`)
//! ```text
//! a  = zeta * wn
//! wd = wn * sqrt(1 - zeta^2)
//! x(t) = e^(-a t) * (x0 * cos(wd t) + (v0 + a x0) / wd * sin(wd t))
//! ```
//!
//! ### Critically damped (`zeta == 1`)
//! ```text
//! x(t) = (x0 + (v0 + wn x0) t) * e^(-wn t)
//! ```
//!
//! ### Overdamped (`zeta > 1`)
//! ```text
//! r1, r2 = -wn * (zeta -/+ sqrt(zeta^2 - 1))
//! x(t) = c1 e^(r1 t) + c2 e^(r2 t),  c2 = (v0 - r1 x0) / (r2 - r1),  c1 = x0 - c2
//! ```

use std::time::Instant;

pub type Num = f64;

/// Below this distance from the target a spring may count as settled
const REST_POSITION: Num = 0.01;

/// Below this speed a spring may count as settled
const REST_VELOCITY: Num = 0.1;

/// Tolerance for treating a spring as critically damped
const CRITICAL_EPSILON: Num = 1e-6;

/// Spring parameters for physics simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    /// Damping ratio 0.2, stiffness 400: a lively bounce that settles in ~2s
    pub const HIGH_BOUNCY_MEDIUM_LOW: Self = Self {
        mass: 1.0,
        // 2 * 0.2 * sqrt(400 * 1)
        damping: 8.0,
        stiffness: 400.0,
    };

    /// No overshoot, stiffness 400
    pub const NO_BOUNCE_MEDIUM_LOW: Self = Self {
        mass: 1.0,
        damping: 40.0,
        stiffness: 400.0,
    };

    /// Build parameters from a damping ratio (1.0 = critical) with unit mass
    pub fn from_damping_ratio(ratio: Num, stiffness: Num) -> Self {
        Self {
            mass: 1.0,
            damping: 2.0 * ratio * stiffness.sqrt(),
            stiffness,
        }
    }

    pub fn damping_ratio(&self) -> Num {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Check if overdamped: 1.0 <= damping / (2.0 * sqrt(stiffness * mass))
    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping_ratio()
    }

    fn natural_frequency(&self) -> Num {
        (self.stiffness / self.mass).sqrt()
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::HIGH_BOUNCY_MEDIUM_LOW
    }
}

/// Solve displacement and velocity at `t` seconds for a spring released from
/// displacement `x0` with velocity `v0`.
fn solve(params: &SpringParams, x0: Num, v0: Num, t: Num) -> (Num, Num) {
    let wn = params.natural_frequency();
    let zeta = params.damping_ratio();

    if (zeta - 1.0).abs() < CRITICAL_EPSILON {
        let b = v0 + wn * x0;
        let decay = (-wn * t).exp();
        let x = (x0 + b * t) * decay;
        let v = (b - wn * (x0 + b * t)) * decay;
        (x, v)
    } else if zeta < 1.0 {
        let a = zeta * wn;
        let wd = wn * (1.0 - zeta * zeta).sqrt();
        let b = (v0 + a * x0) / wd;
        let decay = (-a * t).exp();
        let (sin, cos) = (wd * t).sin_cos();
        let x = decay * (x0 * cos + b * sin);
        let v = decay * ((b * wd - a * x0) * cos - (a * b + x0 * wd) * sin);
        (x, v)
    } else {
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -wn * (zeta - root);
        let r2 = -wn * (zeta + root);
        let c2 = (v0 - r1 * x0) / (r2 - r1);
        let c1 = x0 - c2;
        let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
        (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
    }
}

/// Damped spring chasing a target value.
///
/// Each retarget starts a new analytical segment from the position and
/// velocity the previous segment had at that instant, so motion stays
/// continuous when the target jumps.
#[derive(Debug, Clone)]
pub struct Spring {
    params: SpringParams,
    /// Position when the current segment started
    origin: Num,
    /// Velocity when the current segment started
    initial_velocity: Num,
    target: Num,
    /// Start of the current segment
    started: Instant,
}

impl Spring {
    /// Create a spring resting at `position`
    pub fn new(position: Num, now: Instant) -> Self {
        Self {
            params: SpringParams::default(),
            origin: position,
            initial_velocity: 0.0,
            target: position,
            started: now,
        }
    }

    pub fn with_params(mut self, params: SpringParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> SpringParams {
        self.params
    }

    pub fn target(&self) -> Num {
        self.target
    }

    fn sample(&self, now: Instant) -> (Num, Num) {
        let t = now.saturating_duration_since(self.started).as_secs_f64();
        let (x, v) = solve(&self.params, self.origin - self.target, self.initial_velocity, t);
        (self.target + x, v)
    }

    /// Position at `now`
    pub fn position(&self, now: Instant) -> Num {
        self.sample(now).0
    }

    /// Velocity at `now`, in units per second
    pub fn velocity(&self, now: Instant) -> Num {
        self.sample(now).1
    }

    /// Move the target, keeping position and velocity continuous at `now`
    pub fn set_target(&mut self, target: Num, now: Instant) {
        let (position, velocity) = self.sample(now);
        self.origin = position;
        self.initial_velocity = velocity;
        self.target = target;
        self.started = now;
    }

    /// Jump to `position` at rest, cancelling any motion
    pub fn snap_to(&mut self, position: Num, now: Instant) {
        self.origin = position;
        self.initial_velocity = 0.0;
        self.target = position;
        self.started = now;
    }

    /// Whether the spring is close enough to its target and slow enough to stop drawing
    pub fn is_settled(&self, now: Instant) -> bool {
        let (position, velocity) = self.sample(now);
        (position - self.target).abs() < REST_POSITION && velocity.abs() < REST_VELOCITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn at(start: Instant, ms: u64) -> Instant {
        start + Duration::from_millis(ms)
    }

    #[test]
    fn test_preset_ratio() {
        let ratio = SpringParams::HIGH_BOUNCY_MEDIUM_LOW.damping_ratio();
        assert!((ratio - 0.2).abs() < 1e-9);
        assert!(!SpringParams::HIGH_BOUNCY_MEDIUM_LOW.is_overdamped());
        assert!(SpringParams::NO_BOUNCE_MEDIUM_LOW.is_overdamped());
        let built = SpringParams::from_damping_ratio(0.2, 400.0);
        assert!((built.damping - SpringParams::HIGH_BOUNCY_MEDIUM_LOW.damping).abs() < 1e-9);
    }

    #[test]
    fn test_rest_spring_stays_put() {
        let start = Instant::now();
        let spring = Spring::new(5.0, start);
        assert_eq!(spring.position(at(start, 1000)), 5.0);
        assert!(spring.is_settled(at(start, 1000)));
    }

    #[test]
    fn test_underdamped_overshoots_and_settles() {
        let start = Instant::now();
        let mut spring = Spring::new(100.0, start);
        spring.set_target(0.0, start);

        assert!((spring.position(start) - 100.0).abs() < 1e-9);

        let min = (0..2000)
            .map(|ms| spring.position(at(start, ms)))
            .fold(Num::INFINITY, Num::min);
        assert!(min < -10.0, "expected overshoot below zero, got {}", min);

        assert!(spring.is_settled(at(start, 5000)));
        assert!(spring.position(at(start, 5000)).abs() < REST_POSITION);
    }

    #[test]
    fn test_overdamped_never_crosses_target() {
        let start = Instant::now();
        let mut spring = Spring::new(100.0, start).with_params(SpringParams::from_damping_ratio(2.0, 400.0));
        spring.set_target(0.0, start);

        for ms in 0..3000 {
            assert!(spring.position(at(start, ms)) >= -1e-9);
        }
        assert!(spring.is_settled(at(start, 3000)));
    }

    #[test]
    fn test_critically_damped_reaches_target() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0, start).with_params(SpringParams::NO_BOUNCE_MEDIUM_LOW);
        assert_eq!(spring.params(), SpringParams::NO_BOUNCE_MEDIUM_LOW);
        spring.set_target(50.0, start);
        assert_eq!(spring.target(), 50.0);

        let mid = spring.position(at(start, 100));
        assert!(mid > 0.0 && mid < 50.0);
        assert!((spring.position(at(start, 2000)) - 50.0).abs() < REST_POSITION);
    }

    #[test]
    fn test_retarget_keeps_motion_continuous() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0, start);
        spring.set_target(100.0, start);

        let mid = at(start, 120);
        let before = (spring.position(mid), spring.velocity(mid));
        spring.set_target(0.0, mid);
        let after = (spring.position(mid), spring.velocity(mid));
        assert_eq!(spring.target(), 0.0);

        assert!((before.0 - after.0).abs() < 1e-9);
        assert!((before.1 - after.1).abs() < 1e-6);
    }

    #[test]
    fn test_velocity_matches_numerical_derivative() {
        let start = Instant::now();
        let mut spring = Spring::new(100.0, start);
        spring.set_target(0.0, start);

        let h = Duration::from_micros(100);
        let t = at(start, 300);
        let numeric = (spring.position(t + h) - spring.position(t - h)) / (2.0 * h.as_secs_f64());
        let analytic = spring.velocity(t);
        assert!((numeric - analytic).abs() < 1.0, "numeric {} vs analytic {}", numeric, analytic);
    }

    #[test]
    fn test_snap_to_stops_motion() {
        let start = Instant::now();
        let mut spring = Spring::new(0.0, start);
        spring.set_target(100.0, start);
        spring.snap_to(0.0, at(start, 50));
        assert!(spring.is_settled(at(start, 50)));
    }
}
