//! Pointer observation and cursor clipping.
//!
//! On Windows, this installs a low-level mouse hook (`WH_MOUSE_LL`) on the
//! calling thread and clips the cursor with `ClipCursor`.  The hook procedure
//! runs on that same thread, inside its message loop, so the thread that
//! starts containment must also pump messages (see
//! [`windows::run_message_loop`]).
//!
//! # Windows-Specific Implementation
//!
//! The hook callback must complete within the system's low-level hook timeout
//! or Windows silently removes the hook.  The callback therefore does nothing
//! but a few comparisons and at most one `ClipCursor` call.
//!
//! # Testability
//!
//! [`mock::MockCursorPlatform`] implements the same traits without touching
//! the OS and lets tests feed synthetic events through the installed observer.

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

/// Re-export the Windows adapter as `NativeCursorPlatform` on Windows.
#[cfg(target_os = "windows")]
pub use windows::WindowsCursorPlatform as NativeCursorPlatform;
