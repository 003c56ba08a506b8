//! Domain entities for Cursor Fence.
//!
//! Pure business logic with no infrastructure dependencies.  Nothing in here
//! talks to the OS: the hook adapter in `fence-agent` translates native events
//! into [`containment::HookEvent`] values and applies the resulting
//! [`containment::ClipAction`].

/// Screen geometry: points, rectangles, and target regions.
pub mod geometry;

/// The movement decision function.
///
/// See [`containment::decide_clip`] for the rule itself.
pub mod containment;
