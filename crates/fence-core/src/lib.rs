//! # fence-core
//!
//! Shared library for Cursor Fence containing the screen geometry types and
//! the pointer-containment decision logic.
//!
//! This crate has zero dependencies on OS APIs, hook mechanics, or UI
//! frameworks, so every rule that decides whether the cursor is clipped can be
//! tested on any platform.
//!
//! # Architecture overview
//!
//! Cursor Fence keeps the mouse pointer on one monitor.  It watches every
//! low-level pointer event on the system and, whenever a movement is reported
//! outside the chosen screen, re-applies a cursor clip rectangle.
//!
//! - **`domain::geometry`** – Points, clip rectangles, and the
//!   [`TargetRegion`] describing the screen the pointer is confined to.
//!
//! - **`domain::containment`** – The per-event decision: given a hook event and
//!   the allowed rectangle, should the clip be asserted, released, or the event
//!   simply passed along?

pub mod domain;

pub use domain::containment::{decide_clip, ClipAction, HookEvent, PointerMessage};
pub use domain::geometry::{ClipRect, Point, RegionError, TargetRegion};
