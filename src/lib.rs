//! Kinetra is a scroll- and pointer-driven motion effects engine.
//!
//! It owns the math and state machines behind the usual "premium site"
//! enhancements (smoothed cursor layers, magnetic buttons, scroll-linked
//! reveals, inertial scrolling) while staying host-agnostic: the
//! embedding environment supplies raw inputs (pointer position, scroll
//! offset, hover ancestry, device capabilities) and a frame scheduler,
//! and gets plain style values back.
//!
//! # Pipeline overview
//!
//! 1. **Probe**: raw host readings (`DeviceProbe`) resolve once into a
//!    [`DeviceProfile`] that gates every enhancement.
//! 2. **Bind**: sections declare scroll-linked styling
//!    ([`ProgressBinder`]) and entrance motion ([`MotionPreset`]);
//!    interactive elements attach pointer effects ([`MagneticEffect`]).
//! 3. **Drive**: the host forwards events and ticks the [`MotionShell`]
//!    once per frame; smoothed signals converge and resolved styles
//!    ([`RegionStyle`], [`CursorFrame`]) come back out.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded by contract**: everything advances on the host's
//!   frame callback; there are no background threads.
//! - **Presentational only**: every resolved style defaults to the final
//!   resting state, so content stays visible if the enhancement layer
//!   never runs.
//! - **Safe degradation**: unknown device capabilities resolve to native
//!   scrolling and no custom cursor.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod effects;
mod foundation;
mod host;
mod pointer;
mod schedule;
mod scroll;
mod shell;

pub use animation::ease::Ease;
pub use animation::signal::{MotionSignal, SubscriberId};
pub use animation::smoothing::{SmoothState, SmoothValue, Smoothing};
pub use effects::presets::{
    MotionPreset, StaggerSpec, TransitionSpec, fade_in_scale, fade_in_up, image_zoom,
    parse_preset, scroll_reveal, scroll_reveal_left, scroll_reveal_right,
};
pub use foundation::core::{Point, Rect, Rgba8, TickStamp, Vec2, Viewport};
pub use foundation::error::{KinetraError, KinetraResult};
pub use foundation::math::{Lerp, clamp, lerp, map_range};
pub use host::device::{DeviceProbe, DeviceProfile};
pub use host::element::{ElementRole, MAX_ANCESTRY_DEPTH, bounded_ancestry};
pub use pointer::cursor::{
    CursorController, CursorFrame, CursorIcon, CursorStyle, CursorTheme, CursorVariant, classify,
};
pub use pointer::magnetic::{MagneticConfig, MagneticEffect};
pub use schedule::frame::{FrameHandle, FrameScheduler, ManualScheduler};
pub use scroll::inertial::{InertialScrollController, ScrollConfig};
pub use scroll::progress::{
    ProgressBinder, RangeMapping, RegionStyle, ScrollRegion, StyleChannel, TriggerMode,
    parse_binder_spec,
};
pub use shell::{MotionShell, ShellConfig, ShellFrame};
