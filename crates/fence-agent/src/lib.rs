//! fence-agent library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does fence-agent do?
//!
//! The agent keeps the mouse pointer on one monitor.  It:
//!
//! 1. Enumerates the attached displays and picks the one the user chose.
//! 2. Clips the cursor to that display's bounds.
//! 3. Installs a low-level mouse hook and, on every movement event, re-clips
//!    the cursor if it is reported outside the display, or lifts the clip
//!    while it is inside.
//! 4. On shutdown, releases the clip and removes the hook.

/// Application layer: use cases for the agent.
pub mod application;

/// Infrastructure layer: OS adapters and configuration storage.
pub mod infrastructure;
