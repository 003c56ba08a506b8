//! Platform-specific screen / monitor enumeration.
//!
//! Reports every attached display as a [`TargetRegion`] (device name, bounds
//! in virtual-screen coordinates, primary flag) so the user's screen choice can
//! be resolved before containment starts.
//!
//! # Platform implementations
//!
//! | Module    | OS      | API used                                   |
//! |-----------|---------|--------------------------------------------|
//! | `windows` | Windows | `EnumDisplayMonitors` + `GetMonitorInfoW`  |
//!
//! A [`MockScreenEnumerator`] is always compiled (not guarded by `#[cfg]`) so
//! tests on any platform can use it without a physical display.

use fence_core::{ClipRect, TargetRegion};

use crate::application::select_screen::{ScreenEnumerator, ScreenError};

// ── Windows implementation ────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
pub mod windows;

/// Re-export the Windows enumerator as `NativeScreenEnumerator` on Windows.
#[cfg(target_os = "windows")]
pub use windows::WindowsScreenEnumerator as NativeScreenEnumerator;

/// Puts the primary screen first, keeping the relative order of the rest.
pub fn primary_first(screens: &mut [TargetRegion]) {
    screens.sort_by_key(|s| !s.is_primary);
}

// ── Mock implementation (always compiled for tests) ───────────────────────────

/// A mock screen enumerator that returns a fixed list of screens.
pub struct MockScreenEnumerator {
    /// The screens this enumerator always returns.
    pub screens: Vec<TargetRegion>,
}

impl MockScreenEnumerator {
    /// A single 1920×1080 primary display.
    pub fn single_1080p() -> Self {
        Self {
            screens: vec![TargetRegion::new(
                r"\\.\DISPLAY1",
                ClipRect::new(0, 0, 1920, 1080),
                true,
            )],
        }
    }

    /// A 1920×1080 primary with a 2560×1440 display to its right.
    pub fn dual_mixed() -> Self {
        Self {
            screens: vec![
                TargetRegion::new(r"\\.\DISPLAY1", ClipRect::new(0, 0, 1920, 1080), true),
                TargetRegion::new(r"\\.\DISPLAY2", ClipRect::new(1920, 0, 2560, 1440), false),
            ],
        }
    }
}

impl ScreenEnumerator for MockScreenEnumerator {
    fn enumerate_screens(&self) -> Result<Vec<TargetRegion>, ScreenError> {
        Ok(self.screens.clone())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
