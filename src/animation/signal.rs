//! Smoothed motion signals.
//!
//! A [`MotionSignal`] wraps a raw target stream (pointer position, scroll
//! offset, magnetic displacement) into a displayed value that lags behind
//! the target with a configured [`Smoothing`] response. Consumers either
//! poll [`MotionSignal::current`] after each tick or subscribe a callback
//! that fires whenever a tick moves the displayed value.

use crate::animation::smoothing::{SmoothState, SmoothValue, Smoothing};
use crate::foundation::core::TickStamp;
use crate::foundation::error::KinetraResult;

/// Convergence threshold below which a signal counts as settled.
const SETTLE_EPSILON: f64 = 1e-3;

/// Handle returned by [`MotionSignal::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Callback<T> = Box<dyn FnMut(T)>;

/// A continuously-updating value bound to a visual property.
pub struct MotionSignal<T: SmoothValue> {
    smoothing: Smoothing,
    state: SmoothState<T>,
    target: T,
    settled: bool,
    next_subscriber: u64,
    subscribers: Vec<(SubscriberId, Callback<T>)>,
}

impl<T: SmoothValue> MotionSignal<T> {
    /// Build a signal at rest on `initial` with the given response.
    pub fn new(initial: T, smoothing: Smoothing) -> KinetraResult<Self> {
        smoothing.validate()?;
        Ok(Self {
            smoothing,
            state: SmoothState::at_rest(initial),
            target: initial,
            settled: true,
            next_subscriber: 0,
            subscribers: Vec::new(),
        })
    }

    /// Displayed value as of the last tick.
    pub fn current(&self) -> T {
        self.state.value
    }

    /// Value the signal is converging toward.
    pub fn target(&self) -> T {
        self.target
    }

    /// Whether the displayed value has converged onto the target.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Set a new target; the displayed value approaches it over time.
    ///
    /// Retargeting mid-flight keeps the current velocity, so rapid
    /// updates blend instead of restarting from rest.
    pub fn set_target(&mut self, target: T) {
        self.target = target;
        self.settled = self.state.is_settled(target, SETTLE_EPSILON);
    }

    /// Jump displayed value and target to `value` without animating.
    pub fn snap(&mut self, value: T) {
        self.target = value;
        self.state.settle_on(value);
        self.settled = true;
        self.notify(value);
    }

    /// Advance the signal by one frame; returns the displayed value.
    ///
    /// Settled signals are a no-op and do not notify, so drivers can keep
    /// ticking without spamming subscribers.
    pub fn tick(&mut self, stamp: TickStamp) -> T {
        if self.settled {
            return self.state.value;
        }
        self.smoothing.step(&mut self.state, self.target, stamp.dt);
        if self.state.is_settled(self.target, SETTLE_EPSILON) {
            self.state.settle_on(self.target);
            self.settled = true;
        }
        let value = self.state.value;
        self.notify(value);
        value
    }

    /// Register a per-update callback; returns a handle for unsubscribe.
    pub fn subscribe(&mut self, callback: impl FnMut(T) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns whether the handle was live.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Drop every subscriber. Called on teardown so per-frame callbacks
    /// cannot outlive the component that registered them.
    pub fn clear_subscribers(&mut self) {
        self.subscribers.clear();
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, value: T) {
        for (_, callback) in &mut self.subscribers {
            callback(value);
        }
    }
}

impl<T: SmoothValue + std::fmt::Debug> std::fmt::Debug for MotionSignal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionSignal")
            .field("current", &self.state.value)
            .field("target", &self.target)
            .field("settled", &self.settled)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/signal.rs"]
mod tests;
