//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod config;
pub mod dark_mode;
pub mod download;
pub mod file_slot;
pub mod time;
