use crate::foundation::error::{KinetraError, KinetraResult};

pub use kurbo::{Point, Rect, Vec2};

/// Straight-alpha RGBA8 color for style values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Opaque color from RGB channels.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// Scroll state of the tracked document viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Current scroll offset from the document top, in pixels.
    pub scroll_offset: f64,
    /// Visible height, in pixels. Must be > 0.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting non-positive or non-finite heights.
    pub fn new(scroll_offset: f64, height: f64) -> KinetraResult<Self> {
        if !scroll_offset.is_finite() {
            return Err(KinetraError::validation("Viewport scroll_offset must be finite"));
        }
        if !height.is_finite() || height <= 0.0 {
            return Err(KinetraError::validation("Viewport height must be > 0"));
        }
        Ok(Self {
            scroll_offset,
            height,
        })
    }

    /// Offset of the bottom edge of the visible region.
    pub fn bottom(self) -> f64 {
        self.scroll_offset + self.height
    }
}

/// Time sample delivered once per animation frame.
///
/// `now` is seconds since an arbitrary host epoch; `dt` is the elapsed
/// time since the previous frame. The host owns the clock so tests can
/// drive time explicitly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStamp {
    /// Seconds since the host epoch.
    pub now: f64,
    /// Seconds elapsed since the previous frame. Never negative.
    pub dt: f64,
}

impl TickStamp {
    /// Build a stamp, rejecting negative or non-finite time values.
    pub fn new(now: f64, dt: f64) -> KinetraResult<Self> {
        if !now.is_finite() || !dt.is_finite() {
            return Err(KinetraError::validation("TickStamp values must be finite"));
        }
        if dt < 0.0 {
            return Err(KinetraError::validation("TickStamp dt must be >= 0"));
        }
        Ok(Self { now, dt })
    }
}
