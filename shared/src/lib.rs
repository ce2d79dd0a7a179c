//! # LearnHub Shared
//!
//! Cross-cutting types used by every layer of the LearnHub backend:
//! configuration structs, common response shapes, and small validation
//! utilities. This crate must stay free of framework dependencies.

pub mod config;
pub mod types;
pub mod utils;
