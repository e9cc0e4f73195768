//! Smoothing steppers that pull a displayed value toward a target.
//!
//! Two responses are supported: a damped spring (stiffness/damping pair,
//! stepped with semi-implicit Euler) and exponential decay toward the
//! target with a time constant. Both are pure state + step math; signals
//! and controllers own the per-frame driving.

use crate::foundation::error::{KinetraError, KinetraResult};
use crate::foundation::math::Lerp;
use kurbo::Vec2;

/// Largest integration step fed to the spring in one piece.
///
/// Frames longer than this (tab switch, debugger pause) are split into
/// substeps so the explicit integration stays stable.
const MAX_SPRING_STEP: f64 = 1.0 / 120.0;

/// Values the smoothing steppers can operate on.
pub trait SmoothValue: Lerp + Copy + PartialEq {
    /// Additive identity.
    const ZERO: Self;

    /// Component-wise sum.
    fn add(self, other: Self) -> Self;
    /// Component-wise difference.
    fn sub(self, other: Self) -> Self;
    /// Uniform scale.
    fn scale(self, k: f64) -> Self;
    /// Euclidean magnitude.
    fn magnitude(self) -> f64;
}

impl SmoothValue for f64 {
    const ZERO: Self = 0.0;

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, k: f64) -> Self {
        self * k
    }

    fn magnitude(self) -> f64 {
        self.abs()
    }
}

impl SmoothValue for Vec2 {
    const ZERO: Self = Vec2::ZERO;

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn sub(self, other: Self) -> Self {
        self - other
    }

    fn scale(self, k: f64) -> Self {
        self * k
    }

    fn magnitude(self) -> f64 {
        self.hypot()
    }
}

/// Declarative smoothing response for a signal.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Smoothing {
    /// Damped spring response.
    Spring {
        /// Restoring force per unit displacement. Must be > 0.
        stiffness: f64,
        /// Velocity damping coefficient. Must be >= 0.
        damping: f64,
    },
    /// Exponential decay toward the target.
    Exponential {
        /// Time in seconds to close ~63% of the remaining distance.
        /// Must be > 0.
        time_constant: f64,
    },
}

impl Smoothing {
    /// Spring response with the given stiffness/damping pair.
    pub fn spring(stiffness: f64, damping: f64) -> Self {
        Self::Spring { stiffness, damping }
    }

    /// Exponential response with the given time constant in seconds.
    pub fn exponential(time_constant: f64) -> Self {
        Self::Exponential { time_constant }
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> KinetraResult<()> {
        match *self {
            Self::Spring { stiffness, damping } => {
                if !stiffness.is_finite() || stiffness <= 0.0 {
                    return Err(KinetraError::signal("spring stiffness must be > 0"));
                }
                if !damping.is_finite() || damping < 0.0 {
                    return Err(KinetraError::signal("spring damping must be >= 0"));
                }
                Ok(())
            }
            Self::Exponential { time_constant } => {
                if !time_constant.is_finite() || time_constant <= 0.0 {
                    return Err(KinetraError::signal(
                        "exponential time_constant must be > 0",
                    ));
                }
                Ok(())
            }
        }
    }

    /// Advance `state` toward `target` by `dt` seconds.
    pub fn step<T: SmoothValue>(&self, state: &mut SmoothState<T>, target: T, dt: f64) {
        if dt <= 0.0 {
            return;
        }
        match *self {
            Self::Spring { stiffness, damping } => {
                let mut remaining = dt;
                while remaining > 0.0 {
                    let h = remaining.min(MAX_SPRING_STEP);
                    let displacement = state.value.sub(target);
                    let accel = displacement
                        .scale(-stiffness)
                        .add(state.velocity.scale(-damping));
                    state.velocity = state.velocity.add(accel.scale(h));
                    state.value = state.value.add(state.velocity.scale(h));
                    remaining -= h;
                }
            }
            Self::Exponential { time_constant } => {
                let blend = 1.0 - (-dt / time_constant).exp();
                let delta = target.sub(state.value).scale(blend);
                state.value = state.value.add(delta);
                state.velocity = T::ZERO;
            }
        }
    }
}

/// Mutable state advanced by [`Smoothing::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothState<T> {
    /// Displayed value.
    pub value: T,
    /// Instantaneous velocity (zero for exponential responses).
    pub velocity: T,
}

impl<T: SmoothValue> SmoothState<T> {
    /// State at rest on `value`.
    pub fn at_rest(value: T) -> Self {
        Self {
            value,
            velocity: T::ZERO,
        }
    }

    /// Whether the state has converged onto `target` within `epsilon`.
    pub fn is_settled(&self, target: T, epsilon: f64) -> bool {
        self.value.sub(target).magnitude() <= epsilon && self.velocity.magnitude() <= epsilon
    }

    /// Snap onto `target`, zeroing velocity.
    pub fn settle_on(&mut self, target: T) {
        self.value = target;
        self.velocity = T::ZERO;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/smoothing.rs"]
mod tests;
