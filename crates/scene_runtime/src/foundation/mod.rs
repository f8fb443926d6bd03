//! Foundation module - shared host-facing utilities
//!
//! - Time management for producing per-frame delta times
//! - Logging initialization

pub mod logging;
pub mod time;
