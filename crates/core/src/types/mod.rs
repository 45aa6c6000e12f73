//! Core types for the contacts API.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod birthday;
pub mod id;

pub use birthday::Birthday;
pub use id::*;
