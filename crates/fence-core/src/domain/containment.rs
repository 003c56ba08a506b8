//! The movement decision function.
//!
//! Every low-level pointer event observed by the hook is reduced to a
//! [`HookEvent`] and fed to [`decide_clip`], which answers one question: should
//! the cursor clip be asserted, released, or left alone?
//!
//! # The inverted rule
//!
//! The clip is asserted when the pointer is reported *outside* the allowed
//! rectangle and released when it is *inside*.  While a clip is active the OS
//! already keeps the pointer in bounds, so an outside report means something
//! (usually another process) replaced the clip and it must be re-applied.
//! Releasing while inside keeps the fence out of the way of ordinary mouse
//! use near the edges, such as drags that briefly need the clip lifted.
//!
//! # Hot path
//!
//! `decide_clip` runs inside the OS hook callback.  It is a handful of integer
//! comparisons: no allocation, no locking, no I/O.

use super::geometry::{ClipRect, Point};

// Win32 mouse message identifiers as delivered in a low-level hook's `wParam`.
const WM_MOUSEMOVE: u32 = 0x0200;
const WM_LBUTTONDOWN: u32 = 0x0201;
const WM_LBUTTONUP: u32 = 0x0202;
const WM_RBUTTONDOWN: u32 = 0x0204;
const WM_RBUTTONUP: u32 = 0x0205;
const WM_MBUTTONDOWN: u32 = 0x0207;
const WM_MBUTTONUP: u32 = 0x0208;
const WM_MOUSEWHEEL: u32 = 0x020A;
const WM_XBUTTONDOWN: u32 = 0x020B;
const WM_XBUTTONUP: u32 = 0x020C;
const WM_MOUSEHWHEEL: u32 = 0x020E;

/// Kind of pointer event reported by the hook.
///
/// Only [`PointerMessage::Move`] takes part in containment; the other kinds
/// exist so adapters can report what they saw without the decision function
/// having to know raw message numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerMessage {
    /// The pointer moved.
    Move,
    /// A button was pressed or released.
    Button,
    /// The vertical or horizontal wheel turned.
    Wheel,
    /// Any other message, carried verbatim.
    Other(u32),
}

impl PointerMessage {
    /// Classifies a raw Win32 mouse message identifier.
    pub const fn from_raw(message: u32) -> Self {
        match message {
            WM_MOUSEMOVE => PointerMessage::Move,
            WM_LBUTTONDOWN | WM_LBUTTONUP | WM_RBUTTONDOWN | WM_RBUTTONUP | WM_MBUTTONDOWN
            | WM_MBUTTONUP | WM_XBUTTONDOWN | WM_XBUTTONUP => PointerMessage::Button,
            WM_MOUSEWHEEL | WM_MOUSEHWHEEL => PointerMessage::Wheel,
            other => PointerMessage::Other(other),
        }
    }
}

/// One observed pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookEvent {
    /// Hook validity code.  Negative values mean "do not process, just pass
    /// the event on".
    pub code: i32,
    /// What kind of event this is.
    pub message: PointerMessage,
    /// Pointer position at the time of the event.
    pub point: Point,
}

impl HookEvent {
    /// Convenience constructor for a valid movement event at `(x, y)`.
    pub const fn movement(x: i32, y: i32) -> Self {
        Self {
            code: 0,
            message: PointerMessage::Move,
            point: Point::new(x, y),
        }
    }

    /// Returns `true` if the decision function should look at this event.
    pub const fn is_actionable(&self) -> bool {
        self.code >= 0 && matches!(self.message, PointerMessage::Move)
    }
}

/// What the hook should do to the cursor clip for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipAction {
    /// Constrain the cursor to this rectangle.
    Clip(ClipRect),
    /// Remove any cursor constraint.
    Release,
    /// Leave the clip untouched.
    Pass,
}

/// Decides the clip action for `event` given the allowed rectangle.
///
/// - Negative codes and non-movement events yield [`ClipAction::Pass`]; their
///   payload is not inspected.
/// - A movement outside `rect` yields [`ClipAction::Clip`] with `rect`.
/// - A movement inside `rect`, edges included, yields [`ClipAction::Release`].
///
/// The event itself is always forwarded by the caller regardless of the
/// returned action.
#[inline]
pub fn decide_clip(rect: &ClipRect, event: &HookEvent) -> ClipAction {
    if !event.is_actionable() {
        return ClipAction::Pass;
    }
    if rect.contains_inclusive(event.point) {
        ClipAction::Release
    } else {
        ClipAction::Clip(*rect)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
