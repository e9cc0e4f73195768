//! Scroll-progress tracking and progress-to-style mapping.
//!
//! A [`ScrollRegion`] turns a raw scroll offset into a normalized
//! progress value; a [`ProgressBinder`] projects that progress through
//! one or more [`RangeMapping`]s onto the visual channels of a
//! [`RegionStyle`]. Binders recompute on every sample (scroll or resize)
//! unless declared trigger-once, in which case the style resolved when
//! the region first becomes visible is latched for good.

use crate::foundation::core::{Vec2, Viewport};
use crate::foundation::error::{KinetraError, KinetraResult};
use crate::foundation::math::{clamp, map_range};

/// Scroll-offset span over which a tracked region animates.
///
/// `start` is the document scroll offset at which progress is 0, `end`
/// the offset at which it is 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    /// Offset where progress is 0.
    pub start: f64,
    /// Offset where progress is 1. Must be >= `start`.
    pub end: f64,
}

impl ScrollRegion {
    /// Build a region, rejecting reversed or non-finite spans.
    pub fn new(start: f64, end: f64) -> KinetraResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(KinetraError::validation("ScrollRegion offsets must be finite"));
        }
        if start > end {
            return Err(KinetraError::validation("ScrollRegion start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Span of an element from "starts entering the viewport" to "fully
    /// exited above it".
    pub fn through_viewport(
        element_top: f64,
        element_height: f64,
        viewport_height: f64,
    ) -> KinetraResult<Self> {
        if element_height < 0.0 || viewport_height <= 0.0 {
            return Err(KinetraError::validation(
                "ScrollRegion element/viewport heights must be non-negative",
            ));
        }
        Self::new(element_top - viewport_height, element_top + element_height)
    }

    /// Normalized progress of `offset` through the region, in `[0, 1]`.
    ///
    /// A zero-height region acts as a step function at `start`; there is
    /// no division in that case.
    pub fn progress(&self, offset: f64) -> f64 {
        if self.start == self.end {
            return if offset < self.start { 0.0 } else { 1.0 };
        }
        clamp((offset - self.start) / (self.end - self.start), 0.0, 1.0)
    }
}

/// Immutable projection of a progress sub-domain onto a style value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RangeMapping {
    /// Progress sub-domain `[a, b]`.
    pub input: (f64, f64),
    /// Output value range `[c, d]`.
    pub output: (f64, f64),
}

impl RangeMapping {
    /// Build a mapping, rejecting degenerate or non-finite domains.
    pub fn new(input: (f64, f64), output: (f64, f64)) -> KinetraResult<Self> {
        let mapping = Self { input, output };
        mapping.validate()?;
        Ok(mapping)
    }

    /// Check the mapping invariant: a finite, non-degenerate input domain.
    pub fn validate(&self) -> KinetraResult<()> {
        let (a, b) = self.input;
        let (c, d) = self.output;
        if ![a, b, c, d].iter().all(|v| v.is_finite()) {
            return Err(KinetraError::validation("RangeMapping bounds must be finite"));
        }
        if a == b {
            return Err(KinetraError::validation(
                "RangeMapping input domain must be non-degenerate",
            ));
        }
        Ok(())
    }

    /// Project `progress` through the mapping.
    ///
    /// Progress outside the sub-domain clamps to it, so each mapping
    /// holds its edge value before and after its own span. A degenerate
    /// domain (possible when the mapping was built without `new`) steps
    /// between the output edges instead of dividing by zero.
    pub fn apply(&self, progress: f64) -> f64 {
        let (a, b) = self.input;
        let (c, d) = self.output;
        if a == b {
            return if progress < a { c } else { d };
        }
        let clamped = clamp(progress, a.min(b), a.max(b));
        map_range(clamped, a, b, c, d)
    }
}

/// Visual channel a mapping can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleChannel {
    /// Opacity in `[0, 1]`.
    Opacity,
    /// Uniform scale factor.
    Scale,
    /// Horizontal translation in pixels.
    TranslateX,
    /// Vertical translation in pixels.
    TranslateY,
}

/// Resolved visual state of a tracked region.
///
/// The default is the resting state content renders in when no binder
/// runs at all: fully opaque, unscaled, untranslated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RegionStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation offset in pixels.
    pub translate: Vec2,
}

impl Default for RegionStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate: Vec2::ZERO,
        }
    }
}

impl RegionStyle {
    fn set_channel(&mut self, channel: StyleChannel, value: f64) {
        match channel {
            StyleChannel::Opacity => self.opacity = clamp(value, 0.0, 1.0),
            StyleChannel::Scale => self.scale = value,
            StyleChannel::TranslateX => self.translate.x = value,
            StyleChannel::TranslateY => self.translate.y = value,
        }
    }
}

/// When a binder recomputes its style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TriggerMode {
    /// Recompute on every sample.
    Continuous,
    /// Latch the style resolved when the region first becomes visible.
    Once,
}

/// Binds a scroll region to one or more style-channel mappings.
#[derive(Clone, Debug)]
pub struct ProgressBinder {
    region: ScrollRegion,
    mode: TriggerMode,
    mappings: Vec<(StyleChannel, RangeMapping)>,
    latched: Option<RegionStyle>,
}

impl ProgressBinder {
    /// Binder over `region` with no mappings yet.
    pub fn new(region: ScrollRegion, mode: TriggerMode) -> Self {
        Self {
            region,
            mode,
            mappings: Vec::new(),
            latched: None,
        }
    }

    /// Add a validated mapping for `channel`.
    ///
    /// A channel may appear more than once; later mappings win over the
    /// sub-domains where they apply last.
    pub fn with_mapping(
        mut self,
        channel: StyleChannel,
        mapping: RangeMapping,
    ) -> KinetraResult<Self> {
        mapping.validate()?;
        self.mappings.push((channel, mapping));
        Ok(self)
    }

    /// The tracked region.
    pub fn region(&self) -> ScrollRegion {
        self.region
    }

    /// Whether a trigger-once binder has latched.
    pub fn has_triggered(&self) -> bool {
        self.latched.is_some()
    }

    /// Clear a trigger-once latch (page navigation re-arms reveals).
    pub fn reset(&mut self) {
        self.latched = None;
    }

    /// Current progress of the region for the given viewport.
    pub fn progress(&self, viewport: Viewport) -> f64 {
        self.region.progress(viewport.scroll_offset)
    }

    /// Resolve the region's style for the given viewport.
    ///
    /// Continuous binders recompute every call; trigger-once binders
    /// return the latched style after the region first becomes visible
    /// and the initial (progress 0) style before that.
    pub fn sample(&mut self, viewport: Viewport) -> RegionStyle {
        if let Some(latched) = self.latched {
            return latched;
        }
        let progress = self.progress(viewport);
        let style = self.style_at(progress);
        if self.mode == TriggerMode::Once && progress > 0.0 {
            // First visible sample; keep this style for good.
            self.latched = Some(style);
        }
        style
    }

    fn style_at(&self, progress: f64) -> RegionStyle {
        let mut style = RegionStyle::default();
        for (channel, mapping) in &self.mappings {
            style.set_channel(*channel, mapping.apply(progress));
        }
        style
    }
}

/// Parse a binder from a JSON spec.
///
/// ```json
/// {
///   "mode": "once",
///   "mappings": [
///     { "channel": "opacity", "input": [0.0, 0.1], "output": [0.0, 1.0] }
///   ]
/// }
/// ```
///
/// Missing `mode` defaults to continuous; unknown channels and degenerate
/// domains are validation errors.
pub fn parse_binder_spec(
    region: ScrollRegion,
    spec: &serde_json::Value,
) -> KinetraResult<ProgressBinder> {
    let obj = spec
        .as_object()
        .ok_or_else(|| KinetraError::validation("binder spec must be an object"))?;

    let mode = match obj.get("mode").and_then(|v| v.as_str()) {
        None => TriggerMode::Continuous,
        Some(s) => match s.trim().to_ascii_lowercase().as_str() {
            "continuous" => TriggerMode::Continuous,
            "once" => TriggerMode::Once,
            other => {
                return Err(KinetraError::validation(format!(
                    "unknown binder mode '{other}'"
                )));
            }
        },
    };

    let mut binder = ProgressBinder::new(region, mode);
    let mappings = match obj.get("mappings") {
        None => return Ok(binder),
        Some(v) => v
            .as_array()
            .ok_or_else(|| KinetraError::validation("binder mappings must be an array"))?,
    };

    for entry in mappings {
        let entry = entry
            .as_object()
            .ok_or_else(|| KinetraError::validation("binder mapping must be an object"))?;

        let channel = match entry.get("channel").and_then(|v| v.as_str()) {
            None => return Err(KinetraError::validation("binder mapping needs a channel")),
            Some(s) => match s.trim().to_ascii_lowercase().as_str() {
                "opacity" => StyleChannel::Opacity,
                "scale" => StyleChannel::Scale,
                "translate-x" | "translatex" => StyleChannel::TranslateX,
                "translate-y" | "translatey" => StyleChannel::TranslateY,
                other => {
                    return Err(KinetraError::validation(format!(
                        "unknown style channel '{other}'"
                    )));
                }
            },
        };

        let input = parse_pair(entry.get("input"), "input")?;
        let output = parse_pair(entry.get("output"), "output")?;
        binder = binder.with_mapping(channel, RangeMapping::new(input, output)?)?;
    }

    Ok(binder)
}

fn parse_pair(value: Option<&serde_json::Value>, field: &str) -> KinetraResult<(f64, f64)> {
    let arr = value
        .and_then(|v| v.as_array())
        .ok_or_else(|| KinetraError::validation(format!("binder mapping {field} must be [a, b]")))?;
    if arr.len() != 2 {
        return Err(KinetraError::validation(format!(
            "binder mapping {field} must have exactly two bounds"
        )));
    }
    let a = arr[0]
        .as_f64()
        .ok_or_else(|| KinetraError::validation(format!("{field}[0] must be a number")))?;
    let b = arr[1]
        .as_f64()
        .ok_or_else(|| KinetraError::validation(format!("{field}[1] must be a number")))?;
    Ok((a, b))
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/progress.rs"]
mod tests;
