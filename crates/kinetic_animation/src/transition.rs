//! Transition specifications
//!
//! A [`TransitionSpec`] describes *how* a property travels to a new
//! target: a timed tween with an easing curve, or a spring simulation.
//! Specs attach to a whole keyframe set or to individual properties;
//! per-property specs override the set-level default.

use thiserror::Error;

use crate::easing::Easing;
use crate::spring::SpringConfig;

/// Repetition for tween transitions. Springs never repeat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    /// Play once and settle.
    #[default]
    None,
    /// Play a fixed number of cycles.
    Count(u32),
    /// Loop forever (e.g. a spinner). Never settles while motion is on.
    Infinite,
}

/// Smallest accepted tween duration, in seconds.
const MIN_DURATION: f32 = 1e-3;

/// How a property value travels toward its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionSpec {
    Tween {
        /// Cycle length in seconds.
        duration: f32,
        /// Seconds to hold the start value before moving.
        delay: f32,
        easing: Easing,
        repeat: Repeat,
    },
    Spring(SpringConfig),
}

impl TransitionSpec {
    /// A linear tween of `duration` seconds. Non-positive durations are
    /// clamped; use [`validate`](Self::validate) to reject them instead.
    pub fn tween(duration: f32) -> Self {
        Self::Tween {
            duration: duration.max(MIN_DURATION),
            delay: 0.0,
            easing: Easing::Linear,
            repeat: Repeat::None,
        }
    }

    pub fn spring(config: SpringConfig) -> Self {
        Self::Spring(config)
    }

    pub fn with_delay(mut self, seconds: f32) -> Self {
        if let Self::Tween { delay, .. } = &mut self {
            *delay = seconds.max(0.0);
        }
        self
    }

    pub fn with_easing(mut self, curve: Easing) -> Self {
        if let Self::Tween { easing, .. } = &mut self {
            *easing = curve;
        }
        self
    }

    pub fn with_repeat(mut self, value: Repeat) -> Self {
        if let Self::Tween { repeat, .. } = &mut self {
            *repeat = value;
        }
        self
    }

    /// Total time before a non-repeating tween settles. Springs and
    /// infinite tweens report `None`.
    pub fn settle_time(&self) -> Option<f32> {
        match self {
            Self::Tween {
                duration,
                delay,
                repeat,
                ..
            } => match repeat {
                Repeat::None => Some(delay + duration),
                Repeat::Count(n) => Some(delay + duration * *n as f32),
                Repeat::Infinite => None,
            },
            Self::Spring(_) => None,
        }
    }

    /// Reject malformed configuration before any animation begins.
    ///
    /// This is the strict counterpart to the clamping constructors: host
    /// applications validating untrusted configuration call this and
    /// surface the error at build time, never mid-animation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Self::Tween {
                duration, delay, ..
            } => {
                if duration <= 0.0 || !duration.is_finite() {
                    return Err(ConfigError::NonPositiveDuration(duration));
                }
                if delay < 0.0 || !delay.is_finite() {
                    return Err(ConfigError::NegativeDelay(delay));
                }
                Ok(())
            }
            Self::Spring(SpringConfig {
                stiffness,
                damping,
                mass,
            }) => {
                if stiffness <= 0.0 || !stiffness.is_finite() {
                    return Err(ConfigError::NonPositiveStiffness(stiffness));
                }
                if damping <= 0.0 || !damping.is_finite() {
                    return Err(ConfigError::NonPositiveDamping(damping));
                }
                if mass <= 0.0 || !mass.is_finite() {
                    return Err(ConfigError::NonPositiveMass(mass));
                }
                Ok(())
            }
        }
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::tween(0.3).with_easing(Easing::EaseInOutCubic)
    }
}

/// Configuration rejected at validation time. These are programmer
/// errors in the calling application, never runtime animation failures.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tween duration must be positive and finite, got {0}")]
    NonPositiveDuration(f32),
    #[error("tween delay must be non-negative and finite, got {0}")]
    NegativeDelay(f32),
    #[error("spring stiffness must be positive and finite, got {0}")]
    NonPositiveStiffness(f32),
    #[error("spring damping must be positive and finite, got {0}")]
    NonPositiveDamping(f32),
    #[error("spring mass must be positive and finite, got {0}")]
    NonPositiveMass(f32),
    #[error("viewport threshold must lie in 0..=1, got {0}")]
    ThresholdOutOfRange(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tween_clamps_duration() {
        let spec = TransitionSpec::tween(-1.0);
        assert!(matches!(spec, TransitionSpec::Tween { duration, .. } if duration > 0.0));
    }

    #[test]
    fn validate_rejects_bad_tween() {
        let spec = TransitionSpec::Tween {
            duration: 0.0,
            delay: 0.0,
            easing: Easing::Linear,
            repeat: Repeat::None,
        };
        assert_eq!(spec.validate(), Err(ConfigError::NonPositiveDuration(0.0)));

        let spec = TransitionSpec::Tween {
            duration: 0.3,
            delay: -0.1,
            easing: Easing::Linear,
            repeat: Repeat::None,
        };
        assert_eq!(spec.validate(), Err(ConfigError::NegativeDelay(-0.1)));
    }

    #[test]
    fn validate_rejects_bad_spring() {
        let spec = TransitionSpec::Spring(SpringConfig {
            stiffness: 0.0,
            damping: 20.0,
            mass: 1.0,
        });
        assert_eq!(spec.validate(), Err(ConfigError::NonPositiveStiffness(0.0)));
    }

    #[test]
    fn validate_accepts_catalog_configs() {
        assert!(TransitionSpec::spring(SpringConfig::snappy()).validate().is_ok());
        assert!(TransitionSpec::tween(0.6)
            .with_delay(0.1)
            .with_easing(Easing::ENTRANCE)
            .validate()
            .is_ok());
    }

    #[test]
    fn settle_time_accounts_for_delay_and_repeat() {
        let spec = TransitionSpec::tween(0.6).with_delay(0.1);
        assert_eq!(spec.settle_time(), Some(0.7));

        let spec = TransitionSpec::tween(1.0).with_repeat(Repeat::Infinite);
        assert_eq!(spec.settle_time(), None);

        let spec = TransitionSpec::tween(0.5).with_repeat(Repeat::Count(3));
        assert_eq!(spec.settle_time(), Some(1.5));
    }
}
