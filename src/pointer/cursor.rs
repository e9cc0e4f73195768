//! Two-layer custom cursor with hover classification.
//!
//! A small leading dot and a larger trailing ring follow the pointer
//! through two independently smoothed signals; the ring uses a softer
//! spring so it visibly chases the dot. Every pointer move re-classifies
//! the hovered element chain into a [`CursorVariant`] that selects the
//! visual style of both layers. The whole mechanism mounts only on
//! devices where hovering is meaningful.

use crate::animation::signal::MotionSignal;
use crate::animation::smoothing::Smoothing;
use crate::foundation::core::{Point, Rgba8, TickStamp, Vec2};
use crate::foundation::error::KinetraResult;
use crate::host::device::DeviceProfile;
use crate::host::element::{ElementRole, bounded_ancestry};

/// Spring response of the leading dot.
const DOT_SMOOTHING: Smoothing = Smoothing::Spring {
    stiffness: 150.0,
    damping: 25.0,
};

/// Spring response of the trailing ring; softer so it lags the dot.
const RING_SMOOTHING: Smoothing = Smoothing::Spring {
    stiffness: 80.0,
    damping: 30.0,
};

/// Interaction category the cursor is currently over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorVariant {
    /// Nothing interactive under the pointer.
    #[default]
    Default,
    /// A hyperlink (or descendant of one).
    Link,
    /// A button (or descendant of one).
    Button,
    /// A video playback element.
    Video,
}

/// Classify a leaf-to-root hover chain into a cursor variant.
///
/// Precedence across the bounded chain: button over video over link.
/// Images never classify as video.
pub fn classify(path: &[ElementRole]) -> CursorVariant {
    let chain = bounded_ancestry(path);
    if chain.contains(&ElementRole::Button) {
        return CursorVariant::Button;
    }
    if chain.contains(&ElementRole::Video) {
        return CursorVariant::Video;
    }
    if chain.contains(&ElementRole::Link) {
        return CursorVariant::Link;
    }
    CursorVariant::Default
}

/// Glyph rendered inside the ring for some variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorIcon {
    /// Playback triangle shown over videos.
    Play,
    /// Outbound arrow shown over links.
    Arrow,
}

/// Visual style of both cursor layers for one variant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorStyle {
    /// Diameter of the leading dot, in pixels.
    pub dot_diameter: f64,
    /// Diameter of the trailing ring, in pixels.
    pub ring_diameter: f64,
    /// Color shared by dot fill and ring stroke.
    pub color: Rgba8,
    /// Optional glyph inside the ring.
    pub icon: Option<CursorIcon>,
}

/// Style table mapping each variant to its layer styles.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorTheme {
    /// Style for [`CursorVariant::Default`].
    pub default: CursorStyle,
    /// Style for [`CursorVariant::Link`].
    pub link: CursorStyle,
    /// Style for [`CursorVariant::Button`].
    pub button: CursorStyle,
    /// Style for [`CursorVariant::Video`].
    pub video: CursorStyle,
}

impl Default for CursorTheme {
    fn default() -> Self {
        let accent = Rgba8::opaque(0xFD, 0xB7, 0x14);
        Self {
            default: CursorStyle {
                dot_diameter: 12.0,
                ring_diameter: 40.0,
                color: accent,
                icon: None,
            },
            link: CursorStyle {
                dot_diameter: 8.0,
                ring_diameter: 56.0,
                color: accent,
                icon: Some(CursorIcon::Arrow),
            },
            button: CursorStyle {
                dot_diameter: 18.0,
                ring_diameter: 64.0,
                color: accent,
                icon: None,
            },
            video: CursorStyle {
                dot_diameter: 0.0,
                ring_diameter: 72.0,
                color: accent,
                icon: Some(CursorIcon::Play),
            },
        }
    }
}

impl CursorTheme {
    /// Style for a variant.
    pub fn style(&self, variant: CursorVariant) -> CursorStyle {
        match variant {
            CursorVariant::Default => self.default,
            CursorVariant::Link => self.link,
            CursorVariant::Button => self.button,
            CursorVariant::Video => self.video,
        }
    }
}

/// Snapshot of the cursor layers for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    /// Leading dot center.
    pub dot: Point,
    /// Trailing ring center.
    pub ring: Point,
    /// Current interaction variant.
    pub variant: CursorVariant,
    /// Style the layers should render with.
    pub style: CursorStyle,
}

/// The custom cursor state machine.
#[derive(Debug)]
pub struct CursorController {
    theme: CursorTheme,
    variant: CursorVariant,
    dot: MotionSignal<Vec2>,
    ring: MotionSignal<Vec2>,
}

impl CursorController {
    /// Mount the cursor if the device supports hovering.
    ///
    /// Returns `None` on touch/mobile/no-hover devices: no handlers are
    /// attached and no layer is rendered. The decision is made once; a
    /// device does not change class mid-session.
    #[tracing::instrument(level = "debug", skip(theme))]
    pub fn mount(device: &DeviceProfile, theme: CursorTheme) -> KinetraResult<Option<Self>> {
        if !device.supports_custom_cursor() {
            tracing::debug!("device lacks hover, custom cursor disabled");
            return Ok(None);
        }
        Ok(Some(Self {
            theme,
            variant: CursorVariant::Default,
            dot: MotionSignal::new(Vec2::ZERO, DOT_SMOOTHING)?,
            ring: MotionSignal::new(Vec2::ZERO, RING_SMOOTHING)?,
        }))
    }

    /// Feed a pointer move with the hovered element's role chain.
    pub fn pointer_moved(&mut self, position: Point, hover_path: &[ElementRole]) {
        let target = position.to_vec2();
        self.dot.set_target(target);
        self.ring.set_target(target);

        let variant = classify(hover_path);
        if variant != self.variant {
            tracing::debug!(from = ?self.variant, to = ?variant, "cursor variant change");
            self.variant = variant;
        }
    }

    /// Current interaction variant.
    pub fn variant(&self) -> CursorVariant {
        self.variant
    }

    /// Advance both layers one frame.
    pub fn tick(&mut self, stamp: TickStamp) -> CursorFrame {
        let dot = self.dot.tick(stamp);
        let ring = self.ring.tick(stamp);
        CursorFrame {
            dot: dot.to_point(),
            ring: ring.to_point(),
            variant: self.variant,
            style: self.theme.style(self.variant),
        }
    }

    /// Release per-frame callbacks registered on the position signals.
    pub fn teardown(&mut self) {
        self.dot.clear_subscribers();
        self.ring.clear_subscribers();
    }

    /// Mutable access to the dot position signal (for projections).
    pub fn dot_signal(&mut self) -> &mut MotionSignal<Vec2> {
        &mut self.dot
    }

    /// Mutable access to the ring position signal (for projections).
    pub fn ring_signal(&mut self) -> &mut MotionSignal<Vec2> {
        &mut self.ring
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pointer/cursor.rs"]
mod tests;
