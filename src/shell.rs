//! Application-shell owner of the process-wide effects.
//!
//! The custom cursor and the inertial scroll controller affect the whole
//! document, so exactly one of each may exist. Instead of ambient module
//! state, a [`MotionShell`] owns both: it is constructed once when the
//! application shell mounts, resolves the device profile a single time,
//! and tears everything down on unmount. External code never mutates the
//! controllers' internals; it forwards host events through the shell.

use crate::foundation::core::{Point, TickStamp};
use crate::foundation::error::KinetraResult;
use crate::host::device::{DeviceProbe, DeviceProfile};
use crate::host::element::ElementRole;
use crate::pointer::cursor::{CursorController, CursorFrame, CursorTheme};
use crate::schedule::frame::FrameScheduler;
use crate::scroll::inertial::{InertialScrollController, ScrollConfig};

/// Configuration for a shell mount.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ShellConfig {
    /// Inertial scroll tuning.
    pub scroll: ScrollConfig,
    /// Cursor style table.
    pub cursor_theme: CursorTheme,
}

/// Per-frame output of the shell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellFrame {
    /// Scroll offset the document should display.
    pub scroll_offset: f64,
    /// Cursor layers, when the custom cursor is mounted.
    pub cursor: Option<CursorFrame>,
}

/// Owner of the document-wide motion effects.
#[derive(Debug)]
pub struct MotionShell {
    device: DeviceProfile,
    cursor: Option<CursorController>,
    scroll: InertialScrollController,
    mounted: bool,
}

impl MotionShell {
    /// Mount the shell: resolve the device once, conditionally mount the
    /// cursor, and arm inertial scrolling where the device allows it.
    #[tracing::instrument(level = "debug", skip(probe, config, scheduler))]
    pub fn mount(
        probe: &DeviceProbe,
        config: ShellConfig,
        scheduler: &mut dyn FrameScheduler,
    ) -> KinetraResult<Self> {
        let device = DeviceProfile::from_probe(probe);
        let cursor = CursorController::mount(&device, config.cursor_theme)?;
        let mut scroll = InertialScrollController::new(config.scroll)?;
        scroll.start(&device, scheduler);
        Ok(Self {
            device,
            cursor,
            scroll,
            mounted: true,
        })
    }

    /// Tear everything down. Idempotent; nothing leaks after the first
    /// call.
    #[tracing::instrument(level = "debug", skip(self, scheduler))]
    pub fn unmount(&mut self, scheduler: &mut dyn FrameScheduler) {
        self.scroll.stop(scheduler);
        if let Some(cursor) = &mut self.cursor {
            cursor.teardown();
        }
        self.cursor = None;
        self.mounted = false;
    }

    /// Whether the shell is still mounted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Resolved device profile.
    pub fn device(&self) -> &DeviceProfile {
        &self.device
    }

    /// The cursor controller, when mounted on this device.
    pub fn cursor(&mut self) -> Option<&mut CursorController> {
        self.cursor.as_mut()
    }

    /// The inertial scroll controller.
    pub fn scroll(&mut self) -> &mut InertialScrollController {
        &mut self.scroll
    }

    /// Forward a pointer move to the cursor layer.
    pub fn pointer_moved(&mut self, position: Point, hover_path: &[ElementRole]) {
        if let Some(cursor) = &mut self.cursor {
            cursor.pointer_moved(position, hover_path);
        }
    }

    /// Forward a wheel event to the scroll controller.
    pub fn wheel(&mut self, delta: f64) {
        self.scroll.handle_wheel(delta);
    }

    /// Advance all mounted effects one frame.
    pub fn on_frame(&mut self, stamp: TickStamp, scheduler: &mut dyn FrameScheduler) -> ShellFrame {
        let scroll_offset = self.scroll.on_frame(stamp, scheduler);
        let cursor = self.cursor.as_mut().map(|c| c.tick(stamp));
        ShellFrame {
            scroll_offset,
            cursor,
        }
    }
}
