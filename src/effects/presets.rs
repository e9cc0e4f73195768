//! Named reveal presets and stagger schedules.
//!
//! Sections declare their entrance motion by preset name; each preset is
//! an initial/target style pair plus a timed transition. Presets are
//! data, not behavior: the host samples [`MotionPreset::style_at`] with
//! an elapsed-time fraction (or feeds both endpoints to its own
//! animation machinery) and applies the resulting [`RegionStyle`].

use crate::animation::ease::Ease;
use crate::foundation::core::Vec2;
use crate::foundation::error::{KinetraError, KinetraResult};
use crate::foundation::math::Lerp;
use crate::scroll::progress::RegionStyle;

/// Timing of a preset's transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionSpec {
    /// Transition length in seconds. Must be > 0.
    pub duration_s: f64,
    /// Easing curve over the transition.
    pub ease: Ease,
    /// Delay before the transition starts, in seconds. Must be >= 0.
    pub delay_s: f64,
}

impl TransitionSpec {
    /// Check parameter ranges.
    pub fn validate(&self) -> KinetraResult<()> {
        if !self.duration_s.is_finite() || self.duration_s <= 0.0 {
            return Err(KinetraError::validation("transition duration_s must be > 0"));
        }
        if !self.delay_s.is_finite() || self.delay_s < 0.0 {
            return Err(KinetraError::validation("transition delay_s must be >= 0"));
        }
        Ok(())
    }
}

/// A declarative entrance motion.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionPreset {
    /// Style before the motion starts.
    pub initial: RegionStyle,
    /// Style at rest. Defaults to the resting content state.
    pub target: RegionStyle,
    /// Timing of the transition between the two.
    pub transition: TransitionSpec,
    /// Whether the motion plays only on first visibility.
    pub once: bool,
    /// Viewport inset in pixels applied before the region counts as
    /// visible (negative shrinks the trigger area, as in a reveal that
    /// waits until the section is well inside the viewport).
    pub viewport_margin: f64,
}

impl MotionPreset {
    /// Interpolated style at transition fraction `t` in `[0, 1]`.
    pub fn style_at(&self, t: f64) -> RegionStyle {
        let te = self.transition.ease.apply(t);
        RegionStyle {
            opacity: <f64 as Lerp>::lerp(&self.initial.opacity, &self.target.opacity, te),
            scale: <f64 as Lerp>::lerp(&self.initial.scale, &self.target.scale, te),
            translate: <Vec2 as Lerp>::lerp(&self.initial.translate, &self.target.translate, te),
        }
    }
}

fn hidden(translate: Vec2, scale: f64) -> RegionStyle {
    RegionStyle {
        opacity: 0.0,
        scale,
        translate,
    }
}

/// Fade in while rising 20px.
pub fn fade_in_up() -> MotionPreset {
    MotionPreset {
        initial: hidden(Vec2::new(0.0, 20.0), 1.0),
        target: RegionStyle::default(),
        transition: TransitionSpec {
            duration_s: 0.6,
            ease: Ease::OutCubic,
            delay_s: 0.0,
        },
        once: true,
        viewport_margin: 0.0,
    }
}

/// Fade in while scaling up from 95%.
pub fn fade_in_scale() -> MotionPreset {
    MotionPreset {
        initial: hidden(Vec2::ZERO, 0.95),
        target: RegionStyle::default(),
        transition: TransitionSpec {
            duration_s: 0.6,
            ease: Ease::OutCubic,
            delay_s: 0.0,
        },
        once: true,
        viewport_margin: 0.0,
    }
}

/// Scroll-triggered reveal: rise 40px, scale from 95%.
pub fn scroll_reveal() -> MotionPreset {
    MotionPreset {
        initial: hidden(Vec2::new(0.0, 40.0), 0.95),
        target: RegionStyle::default(),
        transition: TransitionSpec {
            duration_s: 0.7,
            ease: Ease::OutCubic,
            delay_s: 0.0,
        },
        once: true,
        viewport_margin: -100.0,
    }
}

/// Scroll-triggered reveal entering from the left.
pub fn scroll_reveal_left() -> MotionPreset {
    MotionPreset {
        initial: hidden(Vec2::new(-40.0, 0.0), 0.98),
        ..scroll_reveal()
    }
}

/// Scroll-triggered reveal entering from the right.
pub fn scroll_reveal_right() -> MotionPreset {
    MotionPreset {
        initial: hidden(Vec2::new(40.0, 0.0), 0.98),
        ..scroll_reveal()
    }
}

/// Slow settle from an oversized image (110% -> 100%).
pub fn image_zoom() -> MotionPreset {
    MotionPreset {
        initial: hidden(Vec2::ZERO, 1.1),
        target: RegionStyle::default(),
        transition: TransitionSpec {
            duration_s: 1.2,
            ease: Ease::OutCubic,
            delay_s: 0.0,
        },
        once: true,
        viewport_margin: 0.0,
    }
}

/// Parse a preset by name with optional JSON parameter overrides.
///
/// Recognized names: `fade-in-up`, `fade-in-scale`, `scroll-reveal`,
/// `scroll-reveal-left`, `scroll-reveal-right`, `image-zoom`. Params may
/// override `duration_s`, `delay_s`, and `ease`.
pub fn parse_preset(name: &str, params: &serde_json::Value) -> KinetraResult<MotionPreset> {
    let name = name.trim().to_ascii_lowercase();
    if name.is_empty() {
        return Err(KinetraError::validation("preset name must be non-empty"));
    }

    let mut preset = match name.as_str() {
        "fade-in-up" | "fadeinup" => fade_in_up(),
        "fade-in-scale" | "fadeinscale" => fade_in_scale(),
        "scroll-reveal" | "scrollreveal" => scroll_reveal(),
        "scroll-reveal-left" | "scrollrevealleft" => scroll_reveal_left(),
        "scroll-reveal-right" | "scrollrevealright" => scroll_reveal_right(),
        "image-zoom" | "imagezoom" => image_zoom(),
        other => {
            return Err(KinetraError::validation(format!(
                "unknown preset '{other}'"
            )));
        }
    };

    if let Some(obj) = params.as_object() {
        if let Some(v) = obj.get("duration_s") {
            preset.transition.duration_s = v
                .as_f64()
                .ok_or_else(|| KinetraError::validation("preset duration_s must be a number"))?;
        }
        if let Some(v) = obj.get("delay_s") {
            preset.transition.delay_s = v
                .as_f64()
                .ok_or_else(|| KinetraError::validation("preset delay_s must be a number"))?;
        }
        if let Some(v) = obj.get("ease") {
            preset.transition.ease = serde_json::from_value(v.clone())
                .map_err(|e| KinetraError::validation(format!("preset ease: {e}")))?;
        }
    } else if !params.is_null() {
        return Err(KinetraError::validation("preset params must be an object"));
    }

    preset.transition.validate()?;
    Ok(preset)
}

/// Per-child delay schedule for staggered groups.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StaggerSpec {
    /// Gap between consecutive children, in seconds.
    pub interval_s: f64,
    /// Delay before the first child starts, in seconds.
    pub lead_delay_s: f64,
}

impl Default for StaggerSpec {
    fn default() -> Self {
        Self {
            interval_s: 0.1,
            lead_delay_s: 0.2,
        }
    }
}

impl StaggerSpec {
    /// Schedule used for grids (wider gap, shorter lead).
    pub fn grid() -> Self {
        Self {
            interval_s: 0.15,
            lead_delay_s: 0.1,
        }
    }

    /// Start delays for `count` children, in order.
    pub fn delays(&self, count: usize) -> Vec<f64> {
        (0..count)
            .map(|i| self.lead_delay_s + self.interval_s * i as f64)
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/presets.rs"]
mod tests;
