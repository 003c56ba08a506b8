//! ContainCursorUseCase: keeps the pointer inside one target screen.
//!
//! The [`ContainmentController`] owns the lifecycle (which screen, which hook)
//! and the [`MovementObserver`] applies the per-event decision from
//! [`fence_core::decide_clip`].
//!
//! # Architecture
//!
//! The controller depends only on the [`CursorPlatform`] trait.  The Windows
//! adapter installs a `WH_MOUSE_LL` hook and calls `ClipCursor`; tests inject
//! `MockCursorPlatform` or a `mockall` double.
//!
//! # State machine
//!
//! ```text
//! Inactive ──start(r)──────────▶ Active(r)       clip = rect(r), hook installed
//! Active(r) ──start(r)─────────▶ Active(r)       no-op
//! Active(r1) ──start(r2)───────▶ Active(r2)      end, then start(r2)
//! Active(_) ──end──────────────▶ Inactive        clip cleared, hook removed
//! ```
//!
//! If removing the hook fails, the handle is kept so a later `end` (or the
//! next `start`) can retry.

use std::num::NonZeroU64;

use fence_core::{decide_clip, ClipAction, ClipRect, HookEvent, RegionError, TargetRegion};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Opaque identifier of an installed pointer observer.
///
/// Allocated by the platform adapter.  It is an id, not the native handle;
/// only the adapter that issued it can map it back to an OS resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookHandle(NonZeroU64);

impl HookHandle {
    /// Wraps a non-zero id.  Returns `None` for zero.
    pub fn from_id(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(Self)
    }

    /// Returns the numeric id.
    pub fn id(&self) -> u64 {
        self.0.get()
    }
}

/// Failure reported by a platform adapter.
///
/// `Copy` and allocation-free so it can be produced on the hook path.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// A native call failed.
    #[error("{call} failed (os error {code:#010x})")]
    Os { call: &'static str, code: i32 },

    /// The handle does not belong to the observer this adapter installed.
    #[error("no observer is registered under this handle")]
    UnknownHandle,

    /// An observer is already installed through this adapter.
    #[error("a pointer observer is already installed")]
    ObserverBusy,
}

/// Error type for the containment use case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainmentError {
    /// The region cannot be used as a clip rectangle.  No state was changed.
    #[error("invalid target region: {0}")]
    InvalidRegion(#[from] RegionError),

    /// The initial cursor clip could not be applied.
    #[error("failed to clip the cursor: {0}")]
    CursorClip(#[source] PlatformError),

    /// The pointer observer could not be installed.  The clip was released.
    #[error("failed to install the pointer observer: {0}")]
    Registration(#[source] PlatformError),

    /// An observer left over from a failed `end` still cannot be removed.
    #[error("a previous pointer observer could not be removed: {0}")]
    LingeringHook(#[source] PlatformError),
}

/// Cursor clip primitive.
///
/// Split from [`CursorPlatform`] because the hook callback only ever needs to
/// clip, and it runs without access to the adapter instance.
pub trait CursorClip {
    /// Constrains the cursor to `clip`, or releases it when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Os`] if the native call fails.
    fn set_cursor_clip(&self, clip: Option<ClipRect>) -> Result<(), PlatformError>;
}

/// Input observation and cursor control, as needed by the controller.
pub trait CursorPlatform: CursorClip {
    /// Registers `observer` to be called for every low-level pointer event.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] if the OS refuses the registration.
    fn install_observer(&self, observer: MovementObserver) -> Result<HookHandle, PlatformError>;

    /// Unregisters the observer identified by `handle`.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] if the handle is unknown or the OS call fails.
    fn remove_observer(&self, handle: HookHandle) -> Result<(), PlatformError>;
}

/// Per-event handler registered with the platform.
///
/// Holds nothing but the allowed rectangle, so it is `Copy` and can live in a
/// `Cell` on the hook thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementObserver {
    rect: ClipRect,
}

impl MovementObserver {
    pub fn new(rect: ClipRect) -> Self {
        Self { rect }
    }

    /// The rectangle this observer enforces.
    pub fn rect(&self) -> ClipRect {
        self.rect
    }

    /// Handles one hook event and forwards it.
    ///
    /// Applies the [`ClipAction`] chosen by [`decide_clip`] through `cursor`,
    /// then calls `forward` exactly once and returns its result unchanged.
    /// Clip failures are ignored: the event is forwarded in every case.
    ///
    /// Allocation-free; safe to call from a low-level hook procedure.
    #[inline]
    pub fn on_event<C, R, F>(&self, cursor: &C, event: &HookEvent, forward: F) -> R
    where
        C: CursorClip + ?Sized,
        F: FnOnce() -> R,
    {
        match decide_clip(&self.rect, event) {
            ClipAction::Clip(rect) => {
                cursor.set_cursor_clip(Some(rect)).ok();
            }
            ClipAction::Release => {
                cursor.set_cursor_clip(None).ok();
            }
            ClipAction::Pass => {}
        }
        forward()
    }
}

/// An active confinement session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// The screen being enforced.
    pub region: TargetRegion,
    /// Rectangle derived from `region` when the session started.
    pub rect: ClipRect,
}

/// Result of a successful [`ContainmentController::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Confinement began from the inactive state.
    Started,
    /// The previous session was ended and a new one started.
    Switched,
    /// The region was already being enforced; nothing changed.
    AlreadyActive,
}

/// Result of [`ContainmentController::end`].  The cursor is released in all cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOutcome {
    /// The observer was removed.
    Removed,
    /// No observer was installed.
    NothingToRemove,
    /// The observer could not be removed; its handle is kept for a retry.
    RemovalFailed(PlatformError),
}

/// Owns the single containment session of the process.
pub struct ContainmentController<P: CursorPlatform> {
    platform: P,
    session: Option<Session>,
    hook: Option<HookHandle>,
}

impl<P: CursorPlatform> ContainmentController<P> {
    /// Creates an inactive controller.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            session: None,
            hook: None,
        }
    }

    /// Confines the cursor to `region`.
    ///
    /// # Errors
    ///
    /// - [`ContainmentError::InvalidRegion`] for empty or out-of-range bounds,
    ///   before anything is touched.
    /// - [`ContainmentError::LingeringHook`] if a handle from a failed `end`
    ///   still cannot be removed.
    /// - [`ContainmentError::CursorClip`] if the initial clip fails.
    /// - [`ContainmentError::Registration`] if the observer cannot be
    ///   installed; the clip is released again.
    ///
    /// On any error the controller is left inactive.
    pub fn start(&mut self, region: TargetRegion) -> Result<StartOutcome, ContainmentError> {
        let rect = region.allowed_rect()?;

        let mut outcome = StartOutcome::Started;
        if let Some(session) = &self.session {
            if session.region == region {
                debug!(device = %region.device_name, "containment already active for this screen");
                return Ok(StartOutcome::AlreadyActive);
            }
            info!(
                from = %session.region.device_name,
                to = %region.device_name,
                "switching containment target"
            );
            self.end();
            outcome = StartOutcome::Switched;
        }

        if let Some(stale) = self.hook {
            self.platform
                .remove_observer(stale)
                .map_err(ContainmentError::LingeringHook)?;
            self.hook = None;
        }

        self.platform
            .set_cursor_clip(Some(rect))
            .map_err(ContainmentError::CursorClip)?;

        let handle = match self.platform.install_observer(MovementObserver::new(rect)) {
            Ok(handle) => handle,
            Err(e) => {
                if let Err(release) = self.platform.set_cursor_clip(None) {
                    warn!(
                        error = %release,
                        "failed to release cursor after observer install failure"
                    );
                }
                return Err(ContainmentError::Registration(e));
            }
        };

        info!(
            device = %region.device_name,
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            "pointer containment started"
        );
        self.hook = Some(handle);
        self.session = Some(Session { region, rect });
        Ok(outcome)
    }

    /// Releases the cursor and removes the observer.
    ///
    /// Always clears the clip and the session.  A failed removal keeps the
    /// handle so the call can be retried.
    pub fn end(&mut self) -> EndOutcome {
        if let Err(e) = self.platform.set_cursor_clip(None) {
            warn!(error = %e, "failed to release cursor clip");
        }
        if let Some(session) = self.session.take() {
            info!(device = %session.region.device_name, "pointer containment ended");
        }

        let Some(handle) = self.hook else {
            return EndOutcome::NothingToRemove;
        };

        match self.platform.remove_observer(handle) {
            Ok(()) => {
                self.hook = None;
                EndOutcome::Removed
            }
            Err(e) => {
                if cfg!(debug_assertions) {
                    warn!(handle = handle.id(), error = %e, "failed to remove pointer observer");
                }
                EndOutcome::RemovalFailed(e)
            }
        }
    }

    /// Returns `true` while a session is active.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the active session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the handle of the installed observer.
    ///
    /// Can be `Some` while inactive when a removal failed.
    pub fn hook_handle(&self) -> Option<HookHandle> {
        self.hook
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
