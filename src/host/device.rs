//! Device capability detection.
//!
//! The host hands over raw, best-effort readings ([`DeviceProbe`]); the
//! engine resolves them once into a [`DeviceProfile`] that gates the
//! enhancement layers. Detection is fallible by nature, so every unknown
//! reading resolves toward the safe side: native scrolling and no custom
//! cursor.

use crate::foundation::error::{KinetraError, KinetraResult};

/// User-agent fragments that identify mobile browsers.
const MOBILE_UA_MARKERS: [&str; 8] = [
    "android",
    "webos",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "iemobile",
    "opera mini",
];

/// Raw capability readings supplied by the host.
///
/// `None` means the host could not determine the reading; the profile
/// treats unknowns conservatively.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DeviceProbe {
    /// Result of a `(hover: hover)` media query, if available.
    pub hover_media_query: Option<bool>,
    /// Reported maximum simultaneous touch points.
    pub max_touch_points: Option<u32>,
    /// Whether the host surfaces touch events at all.
    pub touch_events: bool,
    /// Result of a `(pointer: coarse)` media query, if available.
    pub coarse_pointer: Option<bool>,
    /// Browser user-agent string, if available.
    pub user_agent: Option<String>,
}

impl DeviceProbe {
    /// Parse probe readings serialized by a host bridge.
    ///
    /// Missing fields default to unknown; malformed data is a device
    /// error rather than a panic, and callers typically fall back to
    /// `DeviceProbe::default()` (which resolves to the safe profile).
    pub fn from_json(value: &serde_json::Value) -> KinetraResult<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| KinetraError::device(format!("malformed device probe: {e}")))
    }
}

/// Resolved device capabilities, computed once at mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeviceProfile {
    hover: bool,
    touch: bool,
    coarse_pointer: bool,
    mobile_user_agent: bool,
}

impl DeviceProfile {
    /// Resolve a profile from raw probe data.
    ///
    /// Unknown hover support counts as no hover, unknown pointer
    /// coarseness counts as coarse: a wrong guess then costs an
    /// enhancement, not a broken page.
    #[tracing::instrument(level = "debug")]
    pub fn from_probe(probe: &DeviceProbe) -> Self {
        let hover = match probe.hover_media_query {
            Some(h) => h,
            None => {
                tracing::warn!("hover capability unknown, assuming no hover");
                false
            }
        };
        let touch = probe.touch_events || probe.max_touch_points.unwrap_or(0) > 0;
        let coarse_pointer = match probe.coarse_pointer {
            Some(c) => c,
            // Without the media query, hover support is the best signal
            // for pointer fineness; fully unknown devices stay coarse.
            None => touch || !hover,
        };
        let mobile_user_agent = probe
            .user_agent
            .as_deref()
            .is_some_and(is_mobile_user_agent);

        let profile = Self {
            hover,
            touch,
            coarse_pointer,
            mobile_user_agent,
        };
        tracing::debug!(?profile, "device profile resolved");
        profile
    }

    /// Profile of a desktop-class device with a fine pointer.
    pub fn desktop() -> Self {
        Self {
            hover: true,
            touch: false,
            coarse_pointer: false,
            mobile_user_agent: false,
        }
    }

    /// Profile of a touch-first device.
    pub fn touch() -> Self {
        Self {
            hover: false,
            touch: true,
            coarse_pointer: true,
            mobile_user_agent: true,
        }
    }

    /// Whether the device exposes any touch capability.
    pub fn has_touch(&self) -> bool {
        self.touch
    }

    /// Whether hovering is a meaningful interaction on this device.
    pub fn has_hover(&self) -> bool {
        self.hover
    }

    /// Whether the two-layer custom cursor may be mounted.
    pub fn supports_custom_cursor(&self) -> bool {
        self.hover && !self.touch && !self.mobile_user_agent
    }

    /// Whether inertial scrolling may replace native scroll physics.
    ///
    /// Any touch capability disqualifies the device; inertia engines
    /// conflict with native touch scroll physics.
    pub fn allows_inertial_scroll(&self) -> bool {
        !self.touch && !self.coarse_pointer && !self.mobile_user_agent
    }
}

/// Case-insensitive check of the user agent against known mobile markers.
fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker))
}

#[cfg(test)]
#[path = "../../tests/unit/host/device.rs"]
mod tests;
