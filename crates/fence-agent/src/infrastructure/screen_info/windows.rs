//! Windows screen enumeration via `EnumDisplayMonitors` / `GetMonitorInfoW`.

#![cfg(target_os = "windows")]

use fence_core::{ClipRect, TargetRegion};
use windows::core::BOOL;
use windows::Win32::Foundation::{LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFOEXW,
};

use super::primary_first;
use crate::application::select_screen::{ScreenEnumerator, ScreenError};

/// `MONITORINFOF_PRIMARY`
const MONITOR_PRIMARY_FLAG: u32 = 1;

/// Windows implementation of [`ScreenEnumerator`] using Win32 APIs.
pub struct WindowsScreenEnumerator;

impl WindowsScreenEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsScreenEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenEnumerator for WindowsScreenEnumerator {
    fn enumerate_screens(&self) -> Result<Vec<TargetRegion>, ScreenError> {
        let mut screens: Vec<TargetRegion> = Vec::new();

        // SAFETY: `monitor_enum_proc` has the MONITORENUMPROC signature.
        // `dwData` points to `screens`, which outlives this synchronous call.
        // A null HDC enumerates every monitor on the virtual desktop.
        let ok = unsafe {
            EnumDisplayMonitors(
                None,
                None,
                Some(monitor_enum_proc),
                LPARAM(&mut screens as *mut Vec<TargetRegion> as isize),
            )
        };

        if !ok.as_bool() {
            return Err(ScreenError::Platform(
                "EnumDisplayMonitors failed".to_string(),
            ));
        }
        if screens.is_empty() {
            return Err(ScreenError::Platform(
                "EnumDisplayMonitors returned no monitors".to_string(),
            ));
        }

        primary_first(&mut screens);
        Ok(screens)
    }
}

/// Win32 monitor enumeration callback.
///
/// # Safety
///
/// Called by Win32 inside `EnumDisplayMonitors`. `lparam` must be a valid
/// pointer to `Vec<TargetRegion>` for the duration of the enumeration call.
unsafe extern "system" fn monitor_enum_proc(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _lprc_clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let screens = &mut *(lparam.0 as *mut Vec<TargetRegion>);

    let mut info = MONITORINFOEXW::default();
    info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;

    // SAFETY: `hmonitor` is supplied by Win32 and `info` is sized as MONITORINFOEXW.
    if GetMonitorInfoW(hmonitor, &mut info.monitorInfo).as_bool() {
        let rc = &info.monitorInfo.rcMonitor;
        let name_len = info
            .szDevice
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(info.szDevice.len());
        let device_name = String::from_utf16_lossy(&info.szDevice[..name_len]);

        screens.push(TargetRegion::new(
            device_name,
            ClipRect::new(
                rc.left,
                rc.top,
                rc.right.saturating_sub(rc.left).max(0) as u32,
                rc.bottom.saturating_sub(rc.top).max(0) as u32,
            ),
            info.monitorInfo.dwFlags & MONITOR_PRIMARY_FLAG != 0,
        ));
    }

    BOOL(1) // continue enumeration
}

// ── Tests ─────────────────────────────────────────────────────────────────────
