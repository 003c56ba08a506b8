//! Mock cursor platform for testing.
//!
//! Records every clip/install/remove call, lets tests inject installation and
//! removal failures, and drives synthetic hook events through whichever
//! observer is currently installed.
//!
//! The mock is `Clone`; clones share state, so a test can hand one clone to a
//! [`ContainmentController`](crate::application::contain_cursor::ContainmentController)
//! and inspect the other.

use std::sync::{Arc, Mutex};

use fence_core::{ClipRect, HookEvent};

use crate::application::contain_cursor::{
    CursorClip, CursorPlatform, HookHandle, MovementObserver, PlatformError,
};

/// One recorded platform call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformCall {
    /// `set_cursor_clip` was called with this value.
    SetClip(Option<ClipRect>),
    /// An observer was installed and given this handle.
    Install(HookHandle),
    /// An installation was attempted and rejected.
    InstallRejected,
    /// The observer with this handle was removed.
    Remove(HookHandle),
    /// Removal of this handle was attempted and rejected.
    RemoveRejected(HookHandle),
}

#[derive(Debug, Default)]
struct MockState {
    calls: Vec<PlatformCall>,
    clip: Option<ClipRect>,
    hook: Option<HookHandle>,
    observer: Option<MovementObserver>,
    next_id: u64,
    fail_install: bool,
    fail_remove: bool,
    next_hook_result: isize,
    forwarded: u32,
}

/// A mock implementation of [`CursorPlatform`].
#[derive(Debug, Clone, Default)]
pub struct MockCursorPlatform {
    state: Arc<Mutex<MockState>>,
}

impl MockCursorPlatform {
    /// Creates a mock with no observer and no clip.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes subsequent `install_observer` calls fail while `fail` is `true`.
    pub fn set_install_failure(&self, fail: bool) {
        self.lock().fail_install = fail;
    }

    /// Makes subsequent `remove_observer` calls fail while `fail` is `true`.
    pub fn set_removal_failure(&self, fail: bool) {
        self.lock().fail_remove = fail;
    }

    /// Sets the value the simulated "next hook in the chain" returns.
    pub fn set_next_hook_result(&self, result: isize) {
        self.lock().next_hook_result = result;
    }

    /// Returns every recorded call in order.
    pub fn calls(&self) -> Vec<PlatformCall> {
        self.lock().calls.clone()
    }

    /// Forgets the recorded calls (state is kept).
    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    /// The clip currently in effect.
    pub fn current_clip(&self) -> Option<ClipRect> {
        self.lock().clip
    }

    /// Handle of the installed observer, if any.
    pub fn installed_handle(&self) -> Option<HookHandle> {
        self.lock().hook
    }

    /// Returns `true` while an installed hook still acts on events.
    pub fn is_armed(&self) -> bool {
        self.lock().observer.is_some()
    }

    /// Number of events passed on to the next hook.
    pub fn forwarded_count(&self) -> u32 {
        self.lock().forwarded
    }

    /// Delivers `event` as if the OS had observed it.
    ///
    /// Runs the installed observer (if any) and returns the forwarded result.
    /// With no observer installed the event is forwarded untouched.
    pub fn emit(&self, event: HookEvent) -> isize {
        let observer = self.lock().observer;
        let forward = || {
            let mut state = self.lock();
            state.forwarded += 1;
            state.next_hook_result
        };
        match observer {
            Some(observer) => observer.on_event(self, &event, forward),
            None => forward(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        self.state.lock().expect("lock poisoned")
    }
}

impl CursorClip for MockCursorPlatform {
    fn set_cursor_clip(&self, clip: Option<ClipRect>) -> Result<(), PlatformError> {
        let mut state = self.lock();
        state.calls.push(PlatformCall::SetClip(clip));
        state.clip = clip;
        Ok(())
    }
}

impl CursorPlatform for MockCursorPlatform {
    fn install_observer(&self, observer: MovementObserver) -> Result<HookHandle, PlatformError> {
        let mut state = self.lock();
        if state.fail_install {
            state.calls.push(PlatformCall::InstallRejected);
            return Err(PlatformError::Os {
                call: "install_observer",
                code: -1,
            });
        }
        if state.hook.is_some() {
            state.calls.push(PlatformCall::InstallRejected);
            return Err(PlatformError::ObserverBusy);
        }
        state.next_id += 1;
        let handle = HookHandle::from_id(state.next_id).ok_or(PlatformError::UnknownHandle)?;
        state.hook = Some(handle);
        state.observer = Some(observer);
        state.calls.push(PlatformCall::Install(handle));
        Ok(handle)
    }

    fn remove_observer(&self, handle: HookHandle) -> Result<(), PlatformError> {
        let mut state = self.lock();
        if state.hook != Some(handle) {
            state.calls.push(PlatformCall::RemoveRejected(handle));
            return Err(PlatformError::UnknownHandle);
        }
        // Disarmed even if the removal below fails.
        state.observer = None;
        if state.fail_remove {
            state.calls.push(PlatformCall::RemoveRejected(handle));
            return Err(PlatformError::Os {
                call: "remove_observer",
                code: -1,
            });
        }
        state.hook = None;
        state.calls.push(PlatformCall::Remove(handle));
        Ok(())
    }
}
