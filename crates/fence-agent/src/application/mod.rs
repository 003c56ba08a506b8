//! Application layer use cases for the agent.
//!
//! - **`contain_cursor`** – The containment controller and the per-event
//!   movement observer.  Depends only on the `CursorPlatform` trait, so the
//!   whole lifecycle is testable without a real mouse hook.
//!
//! - **`select_screen`** – Resolves the user's screen choice (`primary`, an
//!   index, or a device name) to the `TargetRegion` the controller enforces.

pub mod contain_cursor;
pub mod select_screen;
