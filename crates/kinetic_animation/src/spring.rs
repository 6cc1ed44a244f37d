//! Spring physics
//!
//! Damped harmonic oscillator integrated with RK4. Springs are the
//! transition kind behind every drag-like and press effect: they are
//! velocity-continuous, so interrupting one mid-flight and retargeting
//! simply continues from the current position and velocity.

/// Spring parameters. All three values are clamped to a small positive
/// minimum at construction; the integration core never sees zero or
/// negative constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    /// Restoring force per unit displacement.
    pub stiffness: f32,
    /// Velocity damping coefficient. Must stay positive for the spring
    /// to come to rest at its target.
    pub damping: f32,
    /// Oscillating mass.
    pub mass: f32,
}

/// Smallest accepted spring constant.
const MIN_CONSTANT: f32 = 1e-3;

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness: stiffness.max(MIN_CONSTANT),
            damping: damping.max(MIN_CONSTANT),
            mass: 1.0,
        }
    }

    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass.max(MIN_CONSTANT);
        self
    }

    /// Soft, slow settle.
    pub fn gentle() -> Self {
        Self::new(120.0, 14.0)
    }

    /// Pronounced overshoot.
    pub fn wobbly() -> Self {
        Self::new(180.0, 12.0)
    }

    /// The catalog's default interactive feel (hover cards, magnetic
    /// follow).
    pub fn snappy() -> Self {
        Self::new(300.0, 20.0)
    }

    /// Quick response for press feedback.
    pub fn stiff() -> Self {
        Self::new(400.0, 20.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::snappy()
    }
}

/// Position/velocity rest thresholds. Once both are inside, the spring
/// snaps exactly to its target.
pub(crate) const REST_DELTA: f32 = 1e-3;
pub(crate) const REST_VELOCITY: f32 = 1e-3;

/// Largest single integration step. Frame gaps beyond this are
/// subdivided so stiff springs stay numerically stable.
const MAX_STEP: f32 = 1.0 / 240.0;

/// Advance one spring channel by `dt` seconds (RK4).
pub(crate) fn integrate(
    config: &SpringConfig,
    position: &mut f32,
    velocity: &mut f32,
    target: f32,
    dt: f32,
) {
    let mut remaining = dt;
    while remaining > 0.0 {
        let h = remaining.min(MAX_STEP);
        rk4_step(config, position, velocity, target, h);
        remaining -= h;
    }
}

fn rk4_step(config: &SpringConfig, position: &mut f32, velocity: &mut f32, target: f32, h: f32) {
    let accel = |x: f32, v: f32| {
        (config.stiffness * (target - x) - config.damping * v) / config.mass
    };

    let x = *position;
    let v = *velocity;

    let k1x = v;
    let k1v = accel(x, v);

    let k2x = v + k1v * h / 2.0;
    let k2v = accel(x + k1x * h / 2.0, v + k1v * h / 2.0);

    let k3x = v + k2v * h / 2.0;
    let k3v = accel(x + k2x * h / 2.0, v + k2v * h / 2.0);

    let k4x = v + k3v * h;
    let k4v = accel(x + k3x * h, v + k3v * h);

    *position = x + (k1x + 2.0 * k2x + 2.0 * k3x + k4x) * h / 6.0;
    *velocity = v + (k1v + 2.0 * k2v + 2.0 * k3v + k4v) * h / 6.0;
}

/// Whether a channel is close enough to rest to snap to its target.
pub(crate) fn at_rest(position: f32, velocity: f32, target: f32) -> bool {
    (position - target).abs() < REST_DELTA && velocity.abs() < REST_VELOCITY
}

/// A single animated spring value.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    position: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest at `value`.
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            position: value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f32 {
        self.position
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Retarget without touching position or velocity. Interrupting an
    /// in-flight spring continues smoothly from where it is.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Snap to `value` and clear velocity.
    pub fn jump_to(&mut self, value: f32) {
        self.position = value;
        self.velocity = 0.0;
        self.target = value;
    }

    /// Advance by `dt` seconds. Returns true once settled.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.is_settled() {
            return true;
        }
        integrate(
            &self.config,
            &mut self.position,
            &mut self.velocity,
            self.target,
            dt,
        );
        if at_rest(self.position, self.velocity, self.target) {
            self.position = self.target;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }

    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }
}
