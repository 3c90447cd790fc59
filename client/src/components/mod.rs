//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the upload surface, loading overlay, and history
//! galleries while reading/writing shared state from Leptos context providers.

pub mod header;
pub mod history_list;
pub mod loading_game;
pub mod output_gallery;
pub mod upload_form;
