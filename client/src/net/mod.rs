//! Networking modules for the image-generation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and response normalization, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
