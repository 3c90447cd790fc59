//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`history`, `upload`, `generation`, etc.) so
//! individual components can depend on small focused models. None of these
//! modules render anything; they are unit tested directly.

pub mod game;
pub mod generation;
pub mod history;
pub mod progress;
pub mod ui;
pub mod upload;
