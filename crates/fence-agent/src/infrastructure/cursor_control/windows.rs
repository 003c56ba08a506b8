//! Windows low-level mouse hook and `ClipCursor` implementation.
//!
//! The hook is installed with `SetWindowsHookExW(WH_MOUSE_LL, ..)` on the
//! calling thread.  Windows invokes the hook procedure on that thread while it
//! pumps messages, so the active [`MovementObserver`] is kept in a
//! thread-local `Cell` and read without locking.
//!
//! [`WindowsCursorPlatform`] is `!Send`: it must stay on the
//! thread that installed the hook.
//!
//! # Safety
//!
//! This module uses `unsafe` code exclusively for Windows API FFI calls.
//! All `unsafe` blocks are annotated with `// SAFETY:` comments.

#![cfg(target_os = "windows")]

use std::cell::Cell;
use std::marker::PhantomData;

use fence_core::{ClipRect, HookEvent, Point, PointerMessage};
use windows::Win32::Foundation::{LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, ClipCursor, DispatchMessageW, GetMessageW, PostThreadMessageW,
    SetWindowsHookExW, TranslateMessage, UnhookWindowsHookEx, HHOOK, MSG, MSLLHOOKSTRUCT,
    WH_MOUSE_LL, WM_QUIT,
};

use crate::application::contain_cursor::{
    CursorClip, CursorPlatform, HookHandle, MovementObserver, PlatformError,
};

thread_local! {
    /// Observer consulted by [`mouse_hook_proc`] on this thread.
    static ACTIVE_OBSERVER: Cell<Option<MovementObserver>> = const { Cell::new(None) };
}

fn os_error(call: &'static str, error: &windows::core::Error) -> PlatformError {
    PlatformError::Os {
        call,
        code: error.code().0,
    }
}

/// `ClipCursor` wrapper.  Stateless, so the hook procedure can use it directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsCursorClip;

impl CursorClip for WindowsCursorClip {
    fn set_cursor_clip(&self, clip: Option<ClipRect>) -> Result<(), PlatformError> {
        let rect = clip.map(|c| RECT {
            left: c.x,
            top: c.y,
            right: c.right(),
            bottom: c.bottom(),
        });
        // SAFETY: `rect` outlives the call; `None` releases the clip.
        unsafe { ClipCursor(rect.as_ref().map(|r| r as *const RECT)) }
            .map_err(|e| os_error("ClipCursor", &e))
    }
}

/// Windows implementation of [`CursorPlatform`].
///
/// Holds at most one hook at a time.
pub struct WindowsCursorPlatform {
    hook: Cell<Option<(HookHandle, HHOOK)>>,
    next_id: Cell<u64>,
    /// Pins the adapter to the hook thread.
    _not_send: PhantomData<*const ()>,
}

impl WindowsCursorPlatform {
    /// Creates an adapter with no hook installed.
    pub fn new() -> Self {
        Self {
            hook: Cell::new(None),
            next_id: Cell::new(0),
            _not_send: PhantomData,
        }
    }
}

impl Default for WindowsCursorPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorClip for WindowsCursorPlatform {
    fn set_cursor_clip(&self, clip: Option<ClipRect>) -> Result<(), PlatformError> {
        WindowsCursorClip.set_cursor_clip(clip)
    }
}

impl CursorPlatform for WindowsCursorPlatform {
    fn install_observer(&self, observer: MovementObserver) -> Result<HookHandle, PlatformError> {
        if self.hook.get().is_some() {
            return Err(PlatformError::ObserverBusy);
        }

        // Publish the observer before the hook can fire.
        ACTIVE_OBSERVER.with(|slot| slot.set(Some(observer)));

        // SAFETY: `None` asks for the handle of the current executable, which
        // stays valid for the life of the process.
        let module = unsafe { GetModuleHandleW(None) }.map_err(|e| {
            ACTIVE_OBSERVER.with(|slot| slot.set(None));
            os_error("GetModuleHandleW", &e)
        })?;

        // SAFETY: `mouse_hook_proc` has the HOOKPROC signature and lives for the
        // whole program.  Thread id 0 installs a global low-level hook that is
        // serviced by this thread's message loop.
        let hhook = unsafe {
            SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), Some(module.into()), 0)
        }
        .map_err(|e| {
            ACTIVE_OBSERVER.with(|slot| slot.set(None));
            os_error("SetWindowsHookExW", &e)
        })?;

        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let handle = HookHandle::from_id(id).ok_or(PlatformError::UnknownHandle)?;
        self.hook.set(Some((handle, hhook)));
        Ok(handle)
    }

    fn remove_observer(&self, handle: HookHandle) -> Result<(), PlatformError> {
        let Some((installed, hhook)) = self.hook.get() else {
            return Err(PlatformError::UnknownHandle);
        };
        if installed != handle {
            return Err(PlatformError::UnknownHandle);
        }

        // A hook that fails to unhook keeps forwarding events but no longer clips.
        ACTIVE_OBSERVER.with(|slot| slot.set(None));

        // SAFETY: `hhook` was returned by SetWindowsHookExW and not yet unhooked.
        unsafe { UnhookWindowsHookEx(hhook) }.map_err(|e| os_error("UnhookWindowsHookEx", &e))?;

        self.hook.set(None);
        Ok(())
    }
}

/// Low-level mouse hook callback.
///
/// # Safety
///
/// Called by Windows from the hook thread's message loop.  `l_param` points to
/// an `MSLLHOOKSTRUCT` whenever `n_code >= 0`.  Must return quickly.
unsafe extern "system" fn mouse_hook_proc(
    n_code: i32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    if n_code < 0 {
        // SAFETY: Negative codes must be passed on without processing.
        return CallNextHookEx(None, n_code, w_param, l_param);
    }

    let Some(observer) = ACTIVE_OBSERVER.with(Cell::get) else {
        return CallNextHookEx(None, n_code, w_param, l_param);
    };

    // SAFETY: l_param points to a MSLLHOOKSTRUCT when n_code >= 0.
    let info = &*(l_param.0 as *const MSLLHOOKSTRUCT);
    let event = HookEvent {
        code: n_code,
        message: PointerMessage::from_raw(w_param.0 as u32),
        point: Point::new(info.pt.x, info.pt.y),
    };

    observer.on_event(&WindowsCursorClip, &event, || {
        // SAFETY: Forward to the next hook in the chain with the original arguments.
        unsafe { CallNextHookEx(None, n_code, w_param, l_param) }
    })
}

/// Pumps Win32 messages on the current thread until `WM_QUIT` arrives.
///
/// Low-level hooks installed on this thread are only serviced while this runs.
pub fn run_message_loop() {
    let mut msg = MSG::default();
    // SAFETY: Standard Win32 GetMessage/DispatchMessage loop pattern.
    unsafe {
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

/// Ends [`run_message_loop`] on another thread.
///
/// Unlike the platform adapter this is `Send`: it only carries a thread id.
#[derive(Debug, Clone, Copy)]
pub struct QuitHandle {
    thread_id: u32,
}

impl QuitHandle {
    /// Returns a handle targeting the calling thread.
    pub fn current_thread() -> Self {
        // SAFETY: GetCurrentThreadId has no preconditions.
        let thread_id = unsafe { GetCurrentThreadId() };
        Self { thread_id }
    }

    /// Posts `WM_QUIT` to the target thread.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Os`] if the thread has no message queue.
    pub fn post(&self) -> Result<(), PlatformError> {
        // SAFETY: Posting WM_QUIT carries no pointers.
        unsafe { PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) }
            .map_err(|e| os_error("PostThreadMessageW", &e))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
