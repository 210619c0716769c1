// Animated Values
// Interpolation toward a target value, advanced explicitly by elapsed time
//
// Usage:
//   let mut width = AnimatedValue::new(0.0, Motion::spring(100.0, 8.0));
//   width.set_target(60.0);
//   width.advance(Duration::from_millis(16));  // once per frame
//   let w = width.value();

use std::collections::VecDeque;
use std::time::Duration;

/// Fixed integration step for spring physics
const SPRING_STEP: f32 = 0.001;

/// Longest frame a spring integrates in one call; longer stalls are truncated
const MAX_SPRING_FRAME: f32 = 0.25;

/// Below these thresholds a spring snaps to its target and stops
const REST_DISPLACEMENT: f32 = 0.001;
const REST_SPEED: f32 = 0.001;

/// Targets closer than this are considered equal
const TARGET_EPSILON: f32 = 0.0001;

/// Easing curve for timing animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Slow start and end (the default for timed fades)
    #[default]
    EaseInOut,
    EaseOut,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// How an animated value travels toward its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Motion {
    /// Damped spring; may overshoot slightly before settling
    Spring { stiffness: f32, damping: f32, mass: f32 },
    /// Fixed-duration interpolation from the value at retarget time
    Timing { duration: Duration, easing: Easing },
}

impl Motion {
    /// Spring configured by tension/friction, converted to stiffness/damping
    /// the way mobile animation runtimes do.
    pub fn spring(tension: f32, friction: f32) -> Self {
        Self::Spring {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            mass: 1.0,
        }
    }

    pub const fn timing(duration: Duration, easing: Easing) -> Self {
        Self::Timing { duration, easing }
    }
}

/// A single value interpolating toward a target.
///
/// Retargeting never queues: a new target takes over from wherever the value
/// currently is (springs also keep their velocity).
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    current: f32,
    target: f32,
    /// Value at the moment the current target was set (timing only)
    start: f32,
    velocity: f32,
    elapsed: Duration,
    motion: Motion,
    settled: bool,
}

impl AnimatedValue {
    /// Creates a value resting at `value`
    pub fn new(value: f32, motion: Motion) -> Self {
        Self {
            current: value,
            target: value,
            start: value,
            velocity: 0.0,
            elapsed: Duration::ZERO,
            motion,
            settled: true,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// True once the value has reached its target and stopped
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Sets a new target, starting from the current value.
    /// Re-setting the target already being pursued is a no-op.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() <= TARGET_EPSILON {
            return;
        }
        self.start = self.current;
        self.target = target;
        self.elapsed = Duration::ZERO;
        self.settled = false;
    }

    /// Switches motion and retargets in one step
    pub fn animate_to(&mut self, target: f32, motion: Motion) {
        self.motion = motion;
        self.set_target(target);
    }

    /// Immediately sets the value without animation
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.velocity = 0.0;
        self.elapsed = Duration::ZERO;
        self.settled = true;
    }

    /// Advances the animation by `dt` and returns the new value
    pub fn advance(&mut self, dt: Duration) -> f32 {
        if self.settled {
            return self.current;
        }

        match self.motion {
            Motion::Spring { stiffness, damping, mass } => {
                self.step_spring(dt, stiffness, damping, mass);
            }
            Motion::Timing { duration, easing } => {
                self.elapsed += dt;
                let progress = if duration.is_zero() {
                    1.0
                } else {
                    self.elapsed.as_secs_f32() / duration.as_secs_f32()
                };
                let eased = easing.apply(progress);
                self.current = self.start + (self.target - self.start) * eased;
                if progress >= 1.0 {
                    self.finish();
                }
            }
        }

        self.current
    }

    fn step_spring(&mut self, dt: Duration, stiffness: f32, damping: f32, mass: f32) {
        let mass = if mass > 0.0 { mass } else { 1.0 };
        let mut remaining = dt.as_secs_f32().min(MAX_SPRING_FRAME);

        while remaining > 0.0 {
            let h = remaining.min(SPRING_STEP);
            let displacement = self.current - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.current += self.velocity * h;
            remaining -= h;
        }

        if self.velocity.abs() <= REST_SPEED
            && (self.current - self.target).abs() <= REST_DISPLACEMENT
        {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.current = self.target;
        self.velocity = 0.0;
        self.settled = true;
    }
}

/// Runs a value through a series of timed steps, one after another.
///
/// Starting a new series replaces whatever steps were still pending.
#[derive(Debug, Clone)]
pub struct Sequence {
    value: AnimatedValue,
    pending: VecDeque<(f32, Duration)>,
    easing: Easing,
}

impl Sequence {
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            value: AnimatedValue::new(value, Motion::timing(Duration::ZERO, easing)),
            pending: VecDeque::new(),
            easing,
        }
    }

    /// Begin the given `(target, duration)` steps from the current value
    pub fn start(&mut self, steps: &[(f32, Duration)]) {
        self.pending = steps.iter().copied().collect();
        self.next_step();
    }

    pub fn value(&self) -> f32 {
        self.value.value()
    }

    pub fn is_settled(&self) -> bool {
        self.value.is_settled() && self.pending.is_empty()
    }

    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.value.advance(dt);
        if self.value.is_settled() {
            self.next_step();
        }
        self.value.value()
    }

    fn next_step(&mut self) {
        if let Some((target, duration)) = self.pending.pop_front() {
            // Restart the clock even when the step target equals the previous one
            self.value.set_immediate(self.value.value());
            self.value.animate_to(target, Motion::timing(duration, self.easing));
        }
    }
}
