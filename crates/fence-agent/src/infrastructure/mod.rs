//! Infrastructure layer for the agent.
//!
//! Contains OS-facing adapters: the pointer hook and cursor clip, monitor
//! enumeration, and configuration file storage.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `fence_core`, but MUST NOT be imported by the `application` or domain layers.

pub mod cursor_control;
pub mod screen_info;
pub mod storage;
