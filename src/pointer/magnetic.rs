//! Magnetic pointer attraction.
//!
//! While the pointer hovers a target, the target visually leans toward
//! it: the offset between pointer and box center, scaled by an
//! attraction factor, becomes the target of a smoothed [`MotionSignal`].
//! On leave the signal retargets to zero and the element animates back
//! to rest.

use crate::animation::signal::MotionSignal;
use crate::animation::smoothing::Smoothing;
use crate::foundation::core::{Point, Rect, TickStamp, Vec2};
use crate::foundation::error::KinetraResult;

/// Tuning for a magnetic element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MagneticConfig {
    /// Fraction of the pointer-to-center distance the element follows.
    pub attraction: f64,
    /// Smoothing response of the displayed offset.
    pub smoothing: Smoothing,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            attraction: 0.3,
            smoothing: Smoothing::spring(200.0, 20.0),
        }
    }
}

/// Pointer-following offset for one interactive element.
#[derive(Debug)]
pub struct MagneticEffect {
    attraction: f64,
    offset: MotionSignal<Vec2>,
    hovering: bool,
}

impl MagneticEffect {
    /// Build an effect at rest.
    pub fn new(config: MagneticConfig) -> KinetraResult<Self> {
        Ok(Self {
            attraction: config.attraction,
            offset: MotionSignal::new(Vec2::ZERO, config.smoothing)?,
            hovering: false,
        })
    }

    /// Feed a pointer position along with the element's bounding box.
    ///
    /// The box is taken per event, never cached, so the offset stays
    /// correct when layout shifts under the pointer. The offset target is
    /// bounded by the pointer's proximity to the box; nothing
    /// accumulates across events.
    pub fn pointer_moved(&mut self, pointer: Point, bounds: Rect) {
        self.hovering = true;
        let center = bounds.center();
        let pull = (pointer - center) * self.attraction;
        self.offset.set_target(pull);
    }

    /// Pointer left the element: animate back to rest.
    pub fn pointer_left(&mut self) {
        self.hovering = false;
        self.offset.set_target(Vec2::ZERO);
    }

    /// Whether the pointer is currently over the element.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Offset the signal is converging toward.
    pub fn target_offset(&self) -> Vec2 {
        self.offset.target()
    }

    /// Advance one frame; returns the displayed offset.
    pub fn tick(&mut self, stamp: TickStamp) -> Vec2 {
        self.offset.tick(stamp)
    }

    /// Whether the offset has come to rest.
    pub fn is_settled(&self) -> bool {
        self.offset.is_settled()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pointer/magnetic.rs"]
mod tests;
