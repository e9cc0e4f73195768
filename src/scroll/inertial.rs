//! Process-wide inertial scrolling.
//!
//! Replaces native scroll physics with eased, momentum-style glides on
//! devices with a fine pointer and no touch capability. The controller
//! is armed once at shell mount; while armed it keeps exactly one frame
//! request outstanding and folds wheel input into a glide toward a
//! clamped target. Touch-capable or ambiguous devices never arm and keep
//! native scrolling.

use crate::animation::ease::Ease;
use crate::foundation::core::TickStamp;
use crate::foundation::error::{KinetraError, KinetraResult};
use crate::foundation::math::lerp;
use crate::host::device::DeviceProfile;
use crate::schedule::frame::{FrameHandle, FrameScheduler};

/// Tuning for the inertial glide.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollConfig {
    /// Glide duration in seconds. Must be > 0.
    pub duration_s: f64,
    /// Easing curve applied over the glide.
    pub easing: Ease,
    /// Multiplier applied to raw wheel deltas. Must be > 0.
    pub wheel_multiplier: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_s: 0.8,
            easing: Ease::OutExpo,
            wheel_multiplier: 1.5,
        }
    }
}

impl ScrollConfig {
    /// Check parameter ranges.
    pub fn validate(&self) -> KinetraResult<()> {
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(KinetraError::validation("scroll duration_s must be > 0"));
        }
        if !self.wheel_multiplier.is_finite() || self.wheel_multiplier <= 0.0 {
            return Err(KinetraError::validation("scroll wheel_multiplier must be > 0"));
        }
        Ok(())
    }
}

/// One in-flight glide between two offsets.
#[derive(Clone, Copy, Debug)]
struct ActiveGlide {
    from: f64,
    to: f64,
    started_at: f64,
    duration_s: f64,
    easing: Ease,
}

impl ActiveGlide {
    fn offset_at(&self, now: f64) -> (f64, bool) {
        let t = (now - self.started_at) / self.duration_s;
        if t >= 1.0 {
            return (self.to, true);
        }
        (lerp(self.from, self.to, self.easing.apply(t)), false)
    }
}

/// Device-gated replacement for native scroll physics.
#[derive(Debug)]
pub struct InertialScrollController {
    config: ScrollConfig,
    armed: bool,
    current: f64,
    max_scroll: f64,
    pending_delta: f64,
    pending_target: Option<f64>,
    glide: Option<ActiveGlide>,
    frame: Option<FrameHandle>,
}

impl InertialScrollController {
    /// Build an idle controller with the given tuning.
    pub fn new(config: ScrollConfig) -> KinetraResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            armed: false,
            current: 0.0,
            max_scroll: 0.0,
            pending_delta: 0.0,
            pending_target: None,
            glide: None,
            frame: None,
        })
    }

    /// Arm the controller if the device qualifies.
    ///
    /// Returns whether inertial scrolling is now active. Arming twice is
    /// a no-op: the existing frame loop keeps running, no second request
    /// is issued. Devices with any touch capability keep native scroll.
    #[tracing::instrument(level = "debug", skip(self, scheduler))]
    pub fn start(&mut self, device: &DeviceProfile, scheduler: &mut dyn FrameScheduler) -> bool {
        if self.armed {
            tracing::debug!("inertial scroll already armed");
            return true;
        }
        if !device.allows_inertial_scroll() {
            tracing::debug!("device exposes touch capability, keeping native scroll");
            return false;
        }
        self.armed = true;
        self.frame = Some(scheduler.request_frame());
        true
    }

    /// Disarm and release the frame loop. Safe to call when idle.
    #[tracing::instrument(level = "debug", skip(self, scheduler))]
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(handle) = self.frame.take() {
            scheduler.cancel_frame(handle);
        }
        self.armed = false;
        self.glide = None;
        self.pending_delta = 0.0;
        self.pending_target = None;
    }

    /// Whether the controller currently owns scrolling.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Offset the document should display right now.
    pub fn current_offset(&self) -> f64 {
        self.current
    }

    /// Offset the controller is gliding toward.
    pub fn target_offset(&self) -> f64 {
        self.glide.map_or(self.current, |g| g.to)
    }

    /// Update the scrollable extent after a layout change.
    pub fn set_max_scroll(&mut self, max_scroll: f64) {
        self.max_scroll = max_scroll.max(0.0);
        self.current = self.current.clamp(0.0, self.max_scroll);
    }

    /// Feed one wheel event.
    ///
    /// Deltas accumulate until the next frame, so a burst of wheel ticks
    /// folds into a single retarget instead of restarting the glide per
    /// event. Ignored while disarmed (native scroll owns the offset).
    pub fn handle_wheel(&mut self, delta: f64) {
        if !self.armed {
            return;
        }
        self.pending_delta += delta * self.config.wheel_multiplier;
    }

    /// Glide to an absolute offset (programmatic navigation).
    pub fn scroll_to(&mut self, target: f64) {
        if !self.armed {
            self.current = target.clamp(0.0, self.max_scroll);
            return;
        }
        self.pending_target = Some(target);
        self.pending_delta = 0.0;
    }

    /// Advance one frame; returns the offset to apply.
    ///
    /// While armed, re-requests exactly one next frame before returning,
    /// keeping the loop alive the way a recursive requestAnimationFrame
    /// does.
    pub fn on_frame(&mut self, stamp: TickStamp, scheduler: &mut dyn FrameScheduler) -> f64 {
        if !self.armed {
            return self.current;
        }
        self.frame = None;

        let retarget = if let Some(target) = self.pending_target.take() {
            Some(target.clamp(0.0, self.max_scroll))
        } else if self.pending_delta != 0.0 {
            let delta = self.pending_delta;
            self.pending_delta = 0.0;
            Some((self.target_offset() + delta).clamp(0.0, self.max_scroll))
        } else {
            None
        };

        if let Some(to) = retarget
            && to != self.current
        {
            self.glide = Some(ActiveGlide {
                from: self.current,
                to,
                started_at: stamp.now,
                duration_s: self.config.duration_s,
                easing: self.config.easing,
            });
        }

        if let Some(glide) = self.glide {
            let (offset, done) = glide.offset_at(stamp.now);
            self.current = offset;
            if done {
                self.glide = None;
            }
        }

        self.frame = Some(scheduler.request_frame());
        self.current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/inertial.rs"]
mod tests;
